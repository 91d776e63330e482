//! Read-only preview of the configured widget
//!
//! Renders a representative chat view from the current snapshot so the
//! operator sees changes as they edit. The renderer never mutates the
//! configuration; the store pushes fresh snapshots through its change
//! listeners and the preview recomputes from scratch.

use serde::Serialize;
use tracing::debug;

use chatdeck_widget::WidgetConfig;

use crate::style::WidgetStyle;

/// UI state of the previewed widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewState {
    Open,
    Minimized,
    Closed,
}

/// Device frame the preview is rendered inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFrame {
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceFrame {
    /// CSS width of the preview frame
    pub fn frame_width(&self) -> &'static str {
        match self {
            DeviceFrame::Desktop => "100%",
            DeviceFrame::Tablet => "768px",
            DeviceFrame::Mobile => "375px",
        }
    }
}

/// Renders a representative widget view from configuration snapshots
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    device: DeviceFrame,
    state: PreviewState,
}

impl PreviewRenderer {
    pub fn new() -> Self {
        Self {
            device: DeviceFrame::Desktop,
            state: PreviewState::Open,
        }
    }

    pub fn with_device(mut self, device: DeviceFrame) -> Self {
        self.device = device;
        self
    }

    pub fn with_state(mut self, state: PreviewState) -> Self {
        self.state = state;
        self
    }

    pub fn device(&self) -> DeviceFrame {
        self.device
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// Render the preview HTML for a configuration snapshot
    pub fn render(&self, config: &WidgetConfig) -> String {
        debug!(device = ?self.device, state = ?self.state, "rendering widget preview");
        let style = WidgetStyle::from_config(config);

        match self.state {
            PreviewState::Closed => self.render_launcher(&style),
            PreviewState::Minimized => self.render_header_bar(config, &style),
            PreviewState::Open => self.render_open_widget(config, &style),
        }
    }

    /// The floating launcher bubble shown while the widget is closed
    fn render_launcher(&self, style: &WidgetStyle) -> String {
        format!(
            "<div class=\"cd-launcher\" style=\"position: absolute; {} background: {}; border-radius: 50%;\"></div>",
            style.position, style.primary_color
        )
    }

    /// Header-only bar shown while minimized
    fn render_header_bar(&self, config: &WidgetConfig, style: &WidgetStyle) -> String {
        format!(
            "<div class=\"cd-header\" style=\"position: absolute; {} background: {}; color: #FFFFFF; border-radius: {};\">{}</div>",
            style.position,
            style.primary_color,
            style.border_radius,
            escape(&config.content.bot_name)
        )
    }

    fn render_open_widget(&self, config: &WidgetConfig, style: &WidgetStyle) -> String {
        let mut html = String::new();

        html.push_str(&format!(
            "<div class=\"cd-frame\" style=\"width: {};\">\n",
            self.device.frame_width()
        ));
        html.push_str(&format!(
            "<div class=\"cd-widget\" style=\"position: absolute; {} width: {}; height: {}; background: {}; color: {}; font-family: {}; border-radius: {};\">\n",
            style.position,
            style.width,
            style.height,
            style.surface_color,
            style.text_color,
            style.font_stack,
            style.border_radius
        ));

        // Header
        html.push_str(&format!(
            "<header style=\"background: {};\"><img src=\"{}\" alt=\"\" /><h3>{}</h3><p>Ask me anything!</p></header>\n",
            style.primary_color,
            escape(&config.appearance.logo),
            escape(&config.content.bot_name)
        ));

        // Pre-chat form replaces the conversation until submitted
        if config.surveys.show_pre_chat_form {
            html.push_str("<form class=\"cd-prechat\">\n");
            for field in &config.surveys.pre_chat_form_fields {
                html.push_str(&format!(
                    "<label>{}{}</label>\n",
                    escape(&field.label),
                    if field.required { " *" } else { "" }
                ));
            }
            html.push_str("</form>\n");
        } else {
            html.push_str(&self.render_conversation(config, style));
        }

        // Input row
        html.push_str(&format!(
            "<footer><input placeholder=\"{}\" /></footer>\n",
            escape(&config.content.input_placeholder)
        ));

        html.push_str("</div>\n</div>");
        if !style.custom_css.is_empty() {
            html.push_str(&format!("\n<style>{}</style>", style.custom_css));
        }
        html
    }

    /// Static example exchange demonstrating the configured message style
    fn render_conversation(&self, config: &WidgetConfig, style: &WidgetStyle) -> String {
        let mut html = String::new();
        let style_class = match config.messages.message_style {
            chatdeck_widget::MessageStyle::Bubble => "bubble",
            chatdeck_widget::MessageStyle::Modern => "modern",
            chatdeck_widget::MessageStyle::Minimal => "minimal",
        };
        html.push_str(&format!("<div class=\"cd-messages cd-style-{}\">\n", style_class));
        html.push_str(&format!(
            "<div class=\"cd-bot\" style=\"background: {};\">{}</div>\n",
            style.secondary_color,
            escape(&config.content.welcome_message)
        ));
        html.push_str(&format!(
            "<div class=\"cd-visitor\" style=\"background: {}; color: #FFFFFF;\">How do I reset my password?</div>\n",
            style.primary_color
        ));
        html.push_str(&format!(
            "<div class=\"cd-bot\" style=\"background: {};\">You can reset it from the account settings page. Want me to walk you through it?</div>\n",
            style.secondary_color
        ));
        if config.messages.show_read_receipts {
            html.push_str("<span class=\"cd-receipt\">Read</span>\n");
        }
        if config.messages.show_typing_indicator {
            html.push_str("<div class=\"cd-typing\">&hellip;</div>\n");
        }
        html.push_str("</div>\n");
        html
    }
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal HTML escaping for configured text fields
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
