//! Mapping from appearance configuration to concrete style values

use serde::Serialize;

use chatdeck_widget::{AppearanceConfig, WidgetConfig, WidgetPosition};

/// Distance in pixels between the widget and the viewport edge
const EDGE_OFFSET_PX: u32 = 20;

/// Concrete style values derived from one configuration snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetStyle {
    pub primary_color: String,
    pub secondary_color: String,
    /// Full CSS font stack for the configured family
    pub font_stack: String,
    pub border_radius: String,
    pub width: String,
    pub height: String,
    /// CSS offsets anchoring the widget to its corner
    pub position: String,
    /// Panel background behind the conversation
    pub surface_color: String,
    /// Default text color on the surface
    pub text_color: String,
    pub dark_mode: bool,
    /// Free-form CSS appended after the derived styles
    pub custom_css: String,
}

impl WidgetStyle {
    /// Derive style values from a configuration snapshot
    pub fn from_config(config: &WidgetConfig) -> Self {
        let appearance = &config.appearance;
        let (surface_color, text_color) = if appearance.dark_mode {
            ("#111827".to_string(), "#F9FAFB".to_string())
        } else {
            ("#FFFFFF".to_string(), "#111827".to_string())
        };

        Self {
            primary_color: appearance.primary_color.clone(),
            secondary_color: appearance.secondary_color.clone(),
            font_stack: font_stack(&appearance.font_family),
            border_radius: format!("{}px", appearance.border_radius),
            width: format!("{}px", appearance.width),
            height: format!("{}px", appearance.height),
            position: corner_offsets(appearance.position),
            surface_color,
            text_color,
            dark_mode: appearance.dark_mode,
            custom_css: appearance.custom_css.clone(),
        }
    }
}

impl From<&AppearanceConfig> for WidgetStyle {
    fn from(appearance: &AppearanceConfig) -> Self {
        let config = WidgetConfig {
            appearance: appearance.clone(),
            ..Default::default()
        };
        Self::from_config(&config)
    }
}

/// CSS offsets for the configured anchor corner
fn corner_offsets(position: WidgetPosition) -> String {
    match position {
        WidgetPosition::BottomRight => format!("bottom: {EDGE_OFFSET_PX}px; right: {EDGE_OFFSET_PX}px;"),
        WidgetPosition::BottomLeft => format!("bottom: {EDGE_OFFSET_PX}px; left: {EDGE_OFFSET_PX}px;"),
        WidgetPosition::TopRight => format!("top: {EDGE_OFFSET_PX}px; right: {EDGE_OFFSET_PX}px;"),
        WidgetPosition::TopLeft => format!("top: {EDGE_OFFSET_PX}px; left: {EDGE_OFFSET_PX}px;"),
    }
}

/// Expand a configured font family into a stack with sane fallbacks
fn font_stack(family: &str) -> String {
    format!("'{}', ui-sans-serif, system-ui, sans-serif", family)
}
