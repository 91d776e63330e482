//! ChatDeck Widget Configuration Model
//!
//! This crate holds the configuration model of the embeddable chat widget:
//! the section types with their defaults table, the in-memory config store
//! used by one editor session, field-level updates, and the template preset
//! gallery.

pub mod error;
pub mod presets;
pub mod store;
pub mod types;
pub mod update;

pub use error::{Result, WidgetError};
pub use presets::{builtin_presets, AppearanceOverride, PresetRegistry, TemplatePreset};
pub use store::ConfigStore;
pub use types::{
    AiConfig, AllowedFileTypes, AppearanceConfig, AutoOpenTrigger, BehaviorConfig, ContentConfig,
    FeedbackType, FieldType, FormField, MessageStyle, MessagesConfig, PrebuiltMessage,
    PrebuiltTrigger, QuestionType, ResponseFormat, Section, SurveyQuestion, SurveysConfig,
    WidgetConfig, WidgetPosition,
};
pub use update::{
    AiUpdate, AppearanceUpdate, BehaviorUpdate, ConfigUpdate, ContentUpdate, MessagesUpdate,
    SurveysUpdate,
};
