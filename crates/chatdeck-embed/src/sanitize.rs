//! Sanitized configuration subset for externally visible embeds
//!
//! The iframe and component formats ship the configuration in a URL or in
//! customer-pasted source, so they carry only the widget-facing sections.
//! Anything internal to the console never leaves through these formats.

use serde::Serialize;

use chatdeck_widget::{
    AiConfig, AppearanceConfig, BehaviorConfig, ContentConfig, MessagesConfig, SurveysConfig,
    WidgetConfig,
};

/// The widget-facing section subset of a configuration snapshot
///
/// Borrows from the snapshot; serializing this is the only operation it is
/// built for.
#[derive(Debug, Serialize)]
pub struct EmbedConfig<'a> {
    pub appearance: &'a AppearanceConfig,
    pub behavior: &'a BehaviorConfig,
    pub content: &'a ContentConfig,
    pub messages: &'a MessagesConfig,
    pub ai: &'a AiConfig,
    pub surveys: &'a SurveysConfig,
}

impl<'a> EmbedConfig<'a> {
    /// Select the embeddable sections of a configuration snapshot
    pub fn from_config(config: &'a WidgetConfig) -> Self {
        Self {
            appearance: &config.appearance,
            behavior: &config.behavior,
            content: &config.content,
            messages: &config.messages,
            ai: &config.ai,
            surveys: &config.surveys,
        }
    }
}
