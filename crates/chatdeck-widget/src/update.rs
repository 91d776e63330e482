//! Field-level configuration updates
//!
//! The editor mutates one field at a time. Updates are expressed as a tagged
//! union with one variant per section so every accepted section/field pair
//! is known at compile time, instead of the string-keyed
//! `update(section, field, value)` a dynamic frontend would use.

use crate::types::{
    AllowedFileTypes, AutoOpenTrigger, FeedbackType, FormField, MessageStyle, PrebuiltMessage,
    ResponseFormat, Section, SurveyQuestion, WidgetConfig, WidgetPosition,
};

/// A single-field update against one configuration section
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigUpdate {
    Appearance(AppearanceUpdate),
    Behavior(BehaviorUpdate),
    Content(ContentUpdate),
    Messages(MessagesUpdate),
    Surveys(SurveysUpdate),
    Ai(AiUpdate),
}

impl ConfigUpdate {
    /// The section this update targets
    pub fn section(&self) -> Section {
        match self {
            ConfigUpdate::Appearance(_) => Section::Appearance,
            ConfigUpdate::Behavior(_) => Section::Behavior,
            ConfigUpdate::Content(_) => Section::Content,
            ConfigUpdate::Messages(_) => Section::Messages,
            ConfigUpdate::Surveys(_) => Section::Surveys,
            ConfigUpdate::Ai(_) => Section::Ai,
        }
    }

    /// Apply the update in place; sibling fields and sections are untouched
    pub fn apply(self, config: &mut WidgetConfig) {
        match self {
            ConfigUpdate::Appearance(update) => update.apply(&mut config.appearance),
            ConfigUpdate::Behavior(update) => update.apply(&mut config.behavior),
            ConfigUpdate::Content(update) => update.apply(&mut config.content),
            ConfigUpdate::Messages(update) => update.apply(&mut config.messages),
            ConfigUpdate::Surveys(update) => update.apply(&mut config.surveys),
            ConfigUpdate::Ai(update) => update.apply(&mut config.ai),
        }
    }
}

/// Update of one appearance field
#[derive(Debug, Clone, PartialEq)]
pub enum AppearanceUpdate {
    Template(String),
    PrimaryColor(String),
    SecondaryColor(String),
    FontFamily(String),
    BorderRadius(u32),
    Position(WidgetPosition),
    Width(u32),
    Height(u32),
    DarkMode(bool),
    Logo(String),
    CustomCss(String),
}

impl AppearanceUpdate {
    fn apply(self, appearance: &mut crate::types::AppearanceConfig) {
        match self {
            AppearanceUpdate::Template(value) => appearance.template = value,
            AppearanceUpdate::PrimaryColor(value) => appearance.primary_color = value,
            AppearanceUpdate::SecondaryColor(value) => appearance.secondary_color = value,
            AppearanceUpdate::FontFamily(value) => appearance.font_family = value,
            AppearanceUpdate::BorderRadius(value) => appearance.border_radius = value,
            AppearanceUpdate::Position(value) => appearance.position = value,
            AppearanceUpdate::Width(value) => appearance.width = value,
            AppearanceUpdate::Height(value) => appearance.height = value,
            AppearanceUpdate::DarkMode(value) => appearance.dark_mode = value,
            AppearanceUpdate::Logo(value) => appearance.logo = value,
            AppearanceUpdate::CustomCss(value) => appearance.custom_css = value,
        }
    }
}

/// Update of one behavior field
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorUpdate {
    AutoOpen(bool),
    AutoOpenDelay(u32),
    AutoOpenTrigger(AutoOpenTrigger),
    ShowNotifications(bool),
    SoundEffects(bool),
    PersistConversation(bool),
}

impl BehaviorUpdate {
    fn apply(self, behavior: &mut crate::types::BehaviorConfig) {
        match self {
            BehaviorUpdate::AutoOpen(value) => behavior.auto_open = value,
            BehaviorUpdate::AutoOpenDelay(value) => behavior.auto_open_delay = value,
            BehaviorUpdate::AutoOpenTrigger(value) => behavior.auto_open_trigger = value,
            BehaviorUpdate::ShowNotifications(value) => behavior.show_notifications = value,
            BehaviorUpdate::SoundEffects(value) => behavior.sound_effects = value,
            BehaviorUpdate::PersistConversation(value) => behavior.persist_conversation = value,
        }
    }
}

/// Update of one content field
#[derive(Debug, Clone, PartialEq)]
pub enum ContentUpdate {
    WelcomeMessage(String),
    BotName(String),
    InputPlaceholder(String),
    OfflineMessage(String),
}

impl ContentUpdate {
    fn apply(self, content: &mut crate::types::ContentConfig) {
        match self {
            ContentUpdate::WelcomeMessage(value) => content.welcome_message = value,
            ContentUpdate::BotName(value) => content.bot_name = value,
            ContentUpdate::InputPlaceholder(value) => content.input_placeholder = value,
            ContentUpdate::OfflineMessage(value) => content.offline_message = value,
        }
    }
}

/// Update of one messages field
#[derive(Debug, Clone, PartialEq)]
pub enum MessagesUpdate {
    MessageStyle(MessageStyle),
    ShowTypingIndicator(bool),
    ShowReadReceipts(bool),
    EnableFeedback(bool),
    FeedbackType(FeedbackType),
    CollectFeedbackComments(bool),
    AllowAttachments(bool),
    MaxAttachmentSize(u32),
    AllowedFileTypes(AllowedFileTypes),
    EnablePrebuiltMessages(bool),
    PrebuiltMessages(Vec<PrebuiltMessage>),
}

impl MessagesUpdate {
    fn apply(self, messages: &mut crate::types::MessagesConfig) {
        match self {
            MessagesUpdate::MessageStyle(value) => messages.message_style = value,
            MessagesUpdate::ShowTypingIndicator(value) => messages.show_typing_indicator = value,
            MessagesUpdate::ShowReadReceipts(value) => messages.show_read_receipts = value,
            MessagesUpdate::EnableFeedback(value) => messages.enable_feedback = value,
            MessagesUpdate::FeedbackType(value) => messages.feedback_type = value,
            MessagesUpdate::CollectFeedbackComments(value) => {
                messages.collect_feedback_comments = value
            }
            MessagesUpdate::AllowAttachments(value) => messages.allow_attachments = value,
            MessagesUpdate::MaxAttachmentSize(value) => messages.max_attachment_size = value,
            MessagesUpdate::AllowedFileTypes(value) => messages.allowed_file_types = value,
            MessagesUpdate::EnablePrebuiltMessages(value) => {
                messages.enable_prebuilt_messages = value
            }
            MessagesUpdate::PrebuiltMessages(value) => messages.prebuilt_messages = value,
        }
    }
}

/// Update of one surveys field
#[derive(Debug, Clone, PartialEq)]
pub enum SurveysUpdate {
    ShowPreChatForm(bool),
    PreChatFormFields(Vec<FormField>),
    ShowPostChatSurvey(bool),
    PostChatSurveyQuestions(Vec<SurveyQuestion>),
}

impl SurveysUpdate {
    fn apply(self, surveys: &mut crate::types::SurveysConfig) {
        match self {
            SurveysUpdate::ShowPreChatForm(value) => surveys.show_pre_chat_form = value,
            SurveysUpdate::PreChatFormFields(value) => surveys.pre_chat_form_fields = value,
            SurveysUpdate::ShowPostChatSurvey(value) => surveys.show_post_chat_survey = value,
            SurveysUpdate::PostChatSurveyQuestions(value) => {
                surveys.post_chat_survey_questions = value
            }
        }
    }
}

/// Update of one AI settings field
#[derive(Debug, Clone, PartialEq)]
pub enum AiUpdate {
    Model(String),
    Temperature(f32),
    MaxTokens(u32),
    KnowledgeBase(bool),
    ResponseFormat(ResponseFormat),
    SystemPrompt(String),
}

impl AiUpdate {
    fn apply(self, ai: &mut crate::types::AiConfig) {
        match self {
            AiUpdate::Model(value) => ai.model = value,
            AiUpdate::Temperature(value) => ai.temperature = value,
            AiUpdate::MaxTokens(value) => ai.max_tokens = value,
            AiUpdate::KnowledgeBase(value) => ai.knowledge_base = value,
            AiUpdate::ResponseFormat(value) => ai.response_format = value,
            AiUpdate::SystemPrompt(value) => ai.system_prompt = value,
        }
    }
}
