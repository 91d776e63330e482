//! Embed code generation
//!
//! Maps a configuration snapshot to one of the textual integration formats a
//! customer pastes into their site. Generation is pure: the same generator
//! and snapshot always produce the same string.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use chatdeck_widget::WidgetConfig;

use crate::{error::Result, sanitize::EmbedConfig};

/// Default URL of the widget loader script
pub const DEFAULT_LOADER_URL: &str = "https://widget.example.com/loader.js";
/// Default URL of the hosted iframe embed page
pub const DEFAULT_EMBED_URL: &str = "https://widget.example.com/embed";

/// Textual integration format offered to customers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedFormat {
    /// `<script>` tag carrying the full configuration
    Script,
    /// `<iframe>` pointing at the hosted embed page
    Iframe,
    /// Source snippet for the packaged widget component
    Component,
}

impl EmbedFormat {
    pub const ALL: [EmbedFormat; 3] = [
        EmbedFormat::Script,
        EmbedFormat::Iframe,
        EmbedFormat::Component,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedFormat::Script => "script",
            EmbedFormat::Iframe => "iframe",
            EmbedFormat::Component => "component",
        }
    }
}

impl std::fmt::Display for EmbedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates embed snippets for one widget installation
#[derive(Debug, Clone)]
pub struct EmbedCodeGenerator {
    /// URL of the loader script referenced by the script tag
    loader_url: String,
    /// URL of the hosted embed page referenced by the iframe tag
    embed_url: String,
    /// Installation id carried in `data-widget-id`
    widget_id: String,
}

impl EmbedCodeGenerator {
    /// Create a generator with the hosted URLs and a fresh widget id
    pub fn new() -> Self {
        Self {
            loader_url: DEFAULT_LOADER_URL.to_string(),
            embed_url: DEFAULT_EMBED_URL.to_string(),
            widget_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create a generator for an existing widget installation
    pub fn with_widget_id(widget_id: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
            ..Self::new()
        }
    }

    /// Override the loader and embed URLs (self-hosted deployments)
    pub fn with_urls(mut self, loader_url: impl Into<String>, embed_url: impl Into<String>) -> Self {
        self.loader_url = loader_url.into();
        self.embed_url = embed_url.into();
        self
    }

    pub fn widget_id(&self) -> &str {
        &self.widget_id
    }

    /// Generate the embed snippet for a configuration snapshot
    pub fn generate(&self, config: &WidgetConfig, format: EmbedFormat) -> Result<String> {
        debug!(format = format.as_str(), widget_id = %self.widget_id, "generating embed code");
        match format {
            EmbedFormat::Script => self.script_tag(config),
            EmbedFormat::Iframe => self.iframe_tag(config),
            EmbedFormat::Component => self.component_snippet(config),
        }
    }

    /// Script tag carrying the full JSON-serialized configuration
    fn script_tag(&self, config: &WidgetConfig) -> Result<String> {
        let json = serde_json::to_string(config)?;
        Ok(format!(
            "<script src=\"{}\" data-widget-id=\"{}\" data-config='{}'></script>",
            self.loader_url, self.widget_id, json
        ))
    }

    /// Iframe tag with the sanitized subset URL-encoded into the src query
    fn iframe_tag(&self, config: &WidgetConfig) -> Result<String> {
        let json = serde_json::to_string(&EmbedConfig::from_config(config))?;
        let encoded = urlencoding::encode(&json);
        Ok(format!(
            "<iframe\n  src=\"{}?config={}\"\n  width=\"100%\"\n  height=\"600px\"\n  frameborder=\"0\"\n  allow=\"microphone; camera\"\n  style=\"border: none; width: 100%; height: 600px;\"\n></iframe>",
            self.embed_url, encoded
        ))
    }

    /// Illustrative source for embedding the packaged widget component
    fn component_snippet(&self, config: &WidgetConfig) -> Result<String> {
        let json = serde_json::to_string_pretty(&EmbedConfig::from_config(config))?;
        Ok(format!(
            "// Install the package first\n\
             // npm install @chatdeck/chat-widget\n\
             \n\
             import {{ ChatWidget }} from '@chatdeck/chat-widget';\n\
             \n\
             const YourComponent = () => {{\n\
             \x20 return (\n\
             \x20   <ChatWidget\n\
             \x20     widgetId=\"{}\"\n\
             \x20     config={{{}}}\n\
             \x20   />\n\
             \x20 );\n\
             }};\n\
             \n\
             export default YourComponent;",
            self.widget_id, json
        ))
    }
}

impl Default for EmbedCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
