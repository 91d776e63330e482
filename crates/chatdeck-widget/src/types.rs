//! Core configuration types and the per-section defaults table
//!
//! A [`WidgetConfig`] is the full configuration of one embeddable chat
//! widget, grouped into six sections. Field names serialize in camelCase so
//! the JSON matches what the widget loader consumes on the wire.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Complete configuration for an embeddable chat widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WidgetConfig {
    /// Visual appearance (colors, fonts, placement, dimensions)
    pub appearance: AppearanceConfig,
    /// Runtime behavior (auto-open, notifications, persistence)
    pub behavior: BehaviorConfig,
    /// Textual content shown to the visitor
    pub content: ContentConfig,
    /// Message rendering, feedback and attachment policy
    pub messages: MessagesConfig,
    /// Pre-chat form and post-chat survey definitions
    pub surveys: SurveysConfig,
    /// AI settings, passed through to the assistant unmodified
    pub ai: AiConfig,
}

impl WidgetConfig {
    /// Replace one section with its tabled default values
    pub fn reset_section(&mut self, section: Section) {
        match section {
            Section::Appearance => self.appearance = AppearanceConfig::default(),
            Section::Behavior => self.behavior = BehaviorConfig::default(),
            Section::Content => self.content = ContentConfig::default(),
            Section::Messages => self.messages = MessagesConfig::default(),
            Section::Surveys => self.surveys = SurveysConfig::default(),
            Section::Ai => self.ai = AiConfig::default(),
        }
    }

    /// Serialize to a compact JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON, for configuration export
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a configuration previously exported with [`Self::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One top-level grouping of configuration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Appearance,
    Behavior,
    Content,
    Messages,
    Surveys,
    Ai,
}

impl Section {
    /// All known sections, in display order
    pub const ALL: [Section; 6] = [
        Section::Appearance,
        Section::Behavior,
        Section::Content,
        Section::Messages,
        Section::Surveys,
        Section::Ai,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Appearance => "appearance",
            Section::Behavior => "behavior",
            Section::Content => "content",
            Section::Messages => "messages",
            Section::Surveys => "surveys",
            Section::Ai => "ai",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Corner of the host page the widget is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetPosition {
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

/// Condition that auto-opens the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoOpenTrigger {
    /// After a fixed delay on the page
    Time,
    /// After scrolling a percentage of the page
    Scroll,
    /// On exit intent (cursor leaving the viewport)
    Exit,
}

/// Visual style of chat message rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    Bubble,
    Modern,
    Minimal,
}

/// How visitor feedback on answers is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    /// 1-5 star rating
    Rating,
    /// Thumbs up / thumbs down
    Thumbs,
    /// Emoji reactions
    Emoji,
}

/// Format the assistant is asked to respond in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    Markdown,
    Html,
    Plain,
}

/// Input type of a pre-chat form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Phone,
    Select,
}

/// Answer type of a post-chat survey question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// 1-5 rating scale
    Rating,
    /// Free-text response
    Text,
    /// Dropdown with predefined options
    Select,
}

/// When a prebuilt message is offered to the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrebuiltTrigger {
    /// Shown as a tappable quick-reply button
    Button,
    /// Sent automatically when the chat opens
    OnOpen,
    /// Sent after the greeting message
    AfterGreeting,
    /// Sent after a period of visitor inactivity
    AfterInactivity,
    /// Shown before the chat closes
    OnClose,
}

/// Visual appearance of the widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceConfig {
    /// Template id the appearance is derived from
    pub template: String,
    /// Primary brand color (hex string)
    pub primary_color: String,
    /// Secondary/accent color (hex string)
    pub secondary_color: String,
    pub font_family: String,
    /// Corner radius in pixels
    pub border_radius: u32,
    pub position: WidgetPosition,
    /// Widget width in pixels
    pub width: u32,
    /// Widget height in pixels
    pub height: u32,
    pub dark_mode: bool,
    /// Logo URL shown in the widget header
    pub logo: String,
    /// Free-form CSS appended to the widget stylesheet
    #[serde(rename = "customCSS")]
    pub custom_css: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            template: "modern".to_string(),
            primary_color: "#7C3AED".to_string(),
            secondary_color: "#E9D5FF".to_string(),
            font_family: "Inter".to_string(),
            border_radius: 8,
            position: WidgetPosition::BottomRight,
            width: 350,
            height: 500,
            dark_mode: false,
            logo: "https://api.dicebear.com/7.x/avataaars/svg?seed=widget".to_string(),
            custom_css: String::new(),
        }
    }
}

/// Runtime behavior of the widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorConfig {
    pub auto_open: bool,
    /// Delay in seconds before auto-opening (time trigger) or the scroll
    /// percentage (scroll trigger)
    pub auto_open_delay: u32,
    pub auto_open_trigger: AutoOpenTrigger,
    pub show_notifications: bool,
    pub sound_effects: bool,
    /// Keep the conversation across page navigations
    pub persist_conversation: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            auto_open: false,
            auto_open_delay: 5,
            auto_open_trigger: AutoOpenTrigger::Time,
            show_notifications: true,
            sound_effects: false,
            persist_conversation: true,
        }
    }
}

/// Textual content shown to the visitor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentConfig {
    pub welcome_message: String,
    pub bot_name: String,
    pub input_placeholder: String,
    pub offline_message: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            welcome_message: "Hello! How can I help you today?".to_string(),
            bot_name: "AI Assistant".to_string(),
            input_placeholder: "Type your message...".to_string(),
            offline_message: "Sorry, I'm currently offline. Please try again later.".to_string(),
        }
    }
}

/// File categories visitors may attach
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllowedFileTypes {
    pub images: bool,
    pub documents: bool,
    pub audio: bool,
    pub video: bool,
}

impl Default for AllowedFileTypes {
    fn default() -> Self {
        Self {
            images: true,
            documents: true,
            audio: false,
            video: false,
        }
    }
}

/// A canned message offered to the visitor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltMessage {
    pub id: String,
    pub text: String,
    pub trigger_type: PrebuiltTrigger,
}

/// Message rendering, feedback and attachment policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessagesConfig {
    pub message_style: MessageStyle,
    pub show_typing_indicator: bool,
    pub show_read_receipts: bool,
    pub enable_feedback: bool,
    pub feedback_type: FeedbackType,
    pub collect_feedback_comments: bool,
    pub allow_attachments: bool,
    /// Maximum attachment size in megabytes
    pub max_attachment_size: u32,
    pub allowed_file_types: AllowedFileTypes,
    pub enable_prebuilt_messages: bool,
    pub prebuilt_messages: Vec<PrebuiltMessage>,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            message_style: MessageStyle::Bubble,
            show_typing_indicator: true,
            show_read_receipts: true,
            enable_feedback: false,
            feedback_type: FeedbackType::Rating,
            collect_feedback_comments: false,
            allow_attachments: true,
            max_attachment_size: 5,
            allowed_file_types: AllowedFileTypes::default(),
            enable_prebuilt_messages: false,
            prebuilt_messages: vec![
                PrebuiltMessage {
                    id: "1".to_string(),
                    text: "Hello, how can I help you today?".to_string(),
                    trigger_type: PrebuiltTrigger::Button,
                },
                PrebuiltMessage {
                    id: "2".to_string(),
                    text: "I'd like to know more about your services".to_string(),
                    trigger_type: PrebuiltTrigger::Button,
                },
                PrebuiltMessage {
                    id: "3".to_string(),
                    text: "What are your business hours?".to_string(),
                    trigger_type: PrebuiltTrigger::Button,
                },
            ],
        }
    }
}

/// One field of the pre-chat form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    /// Options for [`FieldType::Select`] fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// One question of the post-chat survey
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestion {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub required: bool,
    /// Options for [`QuestionType::Select`] questions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Pre-chat form and post-chat survey definitions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurveysConfig {
    pub show_pre_chat_form: bool,
    pub pre_chat_form_fields: Vec<FormField>,
    pub show_post_chat_survey: bool,
    pub post_chat_survey_questions: Vec<SurveyQuestion>,
}

impl Default for SurveysConfig {
    fn default() -> Self {
        Self {
            show_pre_chat_form: false,
            pre_chat_form_fields: vec![
                FormField {
                    id: "name".to_string(),
                    label: "Name".to_string(),
                    field_type: FieldType::Text,
                    required: true,
                    options: None,
                },
                FormField {
                    id: "email".to_string(),
                    label: "Email".to_string(),
                    field_type: FieldType::Email,
                    required: true,
                    options: None,
                },
                FormField {
                    id: "phone".to_string(),
                    label: "Phone".to_string(),
                    field_type: FieldType::Phone,
                    required: false,
                    options: None,
                },
            ],
            show_post_chat_survey: false,
            post_chat_survey_questions: vec![
                SurveyQuestion {
                    id: "satisfaction".to_string(),
                    question: "How satisfied are you with our service?".to_string(),
                    question_type: QuestionType::Rating,
                    required: true,
                    options: None,
                },
                SurveyQuestion {
                    id: "feedback".to_string(),
                    question: "Do you have any additional feedback?".to_string(),
                    question_type: QuestionType::Text,
                    required: false,
                    options: None,
                },
            ],
        }
    }
}

/// AI settings, passed through to the assistant unmodified
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    /// Model identifier, e.g. "gemini-pro"
    pub model: String,
    /// Sampling temperature; the editor constrains it to [0, 1]
    pub temperature: f32,
    pub max_tokens: u32,
    /// Answer from the tenant knowledge base when possible
    pub knowledge_base: bool,
    pub response_format: ResponseFormat,
    pub system_prompt: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            knowledge_base: true,
            response_format: ResponseFormat::Markdown,
            system_prompt:
                "You are a helpful assistant that provides concise and accurate information."
                    .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_appearance() {
        let appearance = AppearanceConfig::default();
        assert_eq!(appearance.template, "modern");
        assert_eq!(appearance.primary_color, "#7C3AED");
        assert_eq!(appearance.secondary_color, "#E9D5FF");
        assert_eq!(appearance.position, WidgetPosition::BottomRight);
        assert_eq!(appearance.width, 350);
        assert_eq!(appearance.height, 500);
        assert!(!appearance.dark_mode);
        assert!(appearance.custom_css.is_empty());
    }

    #[test]
    fn test_default_ai() {
        let ai = AiConfig::default();
        assert_eq!(ai.model, "gemini-pro");
        assert_eq!(ai.temperature, 0.7);
        assert_eq!(ai.max_tokens, 1024);
        assert_eq!(ai.response_format, ResponseFormat::Markdown);
        assert!(ai.knowledge_base);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(WidgetConfig::default()).unwrap();
        let appearance = json.get("appearance").unwrap();
        assert!(appearance.get("primaryColor").is_some());
        assert!(appearance.get("borderRadius").is_some());
        assert!(appearance.get("customCSS").is_some());
        assert_eq!(
            appearance.get("position").unwrap().as_str(),
            Some("bottom-right")
        );
        let behavior = json.get("behavior").unwrap();
        assert!(behavior.get("autoOpenDelay").is_some());
        assert_eq!(
            behavior.get("autoOpenTrigger").unwrap().as_str(),
            Some("time")
        );
        let messages = json.get("messages").unwrap();
        assert_eq!(
            messages.get("messageStyle").unwrap().as_str(),
            Some("bubble")
        );
    }

    #[test]
    fn test_form_field_type_uses_type_key() {
        let surveys = serde_json::to_value(SurveysConfig::default()).unwrap();
        let first_field = &surveys["preChatFormFields"][0];
        assert_eq!(first_field["type"].as_str(), Some("text"));
        // options is omitted entirely when unset
        assert!(first_field.get("options").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let config = WidgetConfig::default();
        let json = config.to_json().unwrap();
        let parsed = WidgetConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_reset_section_restores_defaults() {
        let mut config = WidgetConfig::default();
        config.appearance.primary_color = "#000000".to_string();
        config.ai.temperature = 0.1;

        config.reset_section(Section::Appearance);

        assert_eq!(config.appearance, AppearanceConfig::default());
        // Other sections keep their values
        assert_eq!(config.ai.temperature, 0.1);
    }

    #[test]
    fn test_section_round_trip_names() {
        for section in Section::ALL {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.as_str()));
        }
    }
}
