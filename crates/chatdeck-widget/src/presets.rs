//! Template presets and the preset registry
//!
//! A preset is a named bundle of appearance values offered as a starting
//! point in the configurator gallery. Applying one shallow-merges its fields
//! over the current appearance section, leaving everything it does not set
//! untouched.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Result, WidgetError},
    types::AppearanceConfig,
};

/// Partial appearance values carried by a preset
///
/// Only fields the preset sets are present; `None` fields are left alone
/// when the preset is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
}

impl AppearanceOverride {
    /// Shallow-merge the set fields over an appearance section
    pub fn merge_into(&self, appearance: &mut AppearanceConfig) {
        if let Some(template) = &self.template {
            appearance.template = template.clone();
        }
        if let Some(primary) = &self.primary_color {
            appearance.primary_color = primary.clone();
        }
        if let Some(secondary) = &self.secondary_color {
            appearance.secondary_color = secondary.clone();
        }
        if let Some(font) = &self.font_family {
            appearance.font_family = font.clone();
        }
        if let Some(radius) = self.border_radius {
            appearance.border_radius = radius;
        }
        if let Some(dark) = self.dark_mode {
            appearance.dark_mode = dark;
        }
    }
}

/// A named appearance bundle shown in the preset gallery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePreset {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Gallery thumbnail URL
    pub preview_image: String,
    pub appearance: AppearanceOverride,
}

/// The built-in preset gallery
pub fn builtin_presets() -> Vec<TemplatePreset> {
    vec![
        TemplatePreset {
            id: "modern".to_string(),
            name: "Modern Clean".to_string(),
            description: "Clean and modern design with rounded corners".to_string(),
            preview_image:
                "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?w=300&q=80"
                    .to_string(),
            appearance: AppearanceOverride {
                template: Some("modern".to_string()),
                primary_color: Some("#7C3AED".to_string()),
                secondary_color: Some("#E9D5FF".to_string()),
                font_family: Some("Inter".to_string()),
                border_radius: Some(8),
                dark_mode: None,
            },
        },
        TemplatePreset {
            id: "minimal".to_string(),
            name: "Minimal Dark".to_string(),
            description: "Sleek dark theme with minimal design".to_string(),
            preview_image:
                "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=300&q=80"
                    .to_string(),
            appearance: AppearanceOverride {
                template: Some("dark".to_string()),
                primary_color: Some("#2D3748".to_string()),
                secondary_color: Some("#4A5568".to_string()),
                font_family: Some("Inter".to_string()),
                border_radius: Some(4),
                dark_mode: Some(true),
            },
        },
        TemplatePreset {
            id: "friendly".to_string(),
            name: "Friendly Rounded".to_string(),
            description: "Friendly design with soft colors and rounded corners".to_string(),
            preview_image:
                "https://images.unsplash.com/photo-1618172193763-c511deb635ca?w=300&q=80"
                    .to_string(),
            appearance: AppearanceOverride {
                template: Some("rounded".to_string()),
                primary_color: Some("#38B2AC".to_string()),
                secondary_color: Some("#B2F5EA".to_string()),
                font_family: Some("Poppins".to_string()),
                border_radius: Some(12),
                dark_mode: None,
            },
        },
        TemplatePreset {
            id: "corporate".to_string(),
            name: "Corporate Pro".to_string(),
            description: "Professional design for business websites".to_string(),
            preview_image:
                "https://images.unsplash.com/photo-1618556450994-a6a128ef0d9d?w=300&q=80"
                    .to_string(),
            appearance: AppearanceOverride {
                template: Some("corporate".to_string()),
                primary_color: Some("#2B6CB0".to_string()),
                secondary_color: Some("#BEE3F8".to_string()),
                font_family: Some("Roboto".to_string()),
                border_radius: Some(4),
                dark_mode: None,
            },
        },
        TemplatePreset {
            id: "vibrant".to_string(),
            name: "Vibrant Modern".to_string(),
            description: "Colorful modern design with vibrant accents".to_string(),
            preview_image:
                "https://images.unsplash.com/photo-1618172193622-ae2d025f2c95?w=300&q=80"
                    .to_string(),
            appearance: AppearanceOverride {
                template: Some("vibrant".to_string()),
                primary_color: Some("#ED64A6".to_string()),
                secondary_color: Some("#FED7E2".to_string()),
                font_family: Some("Poppins".to_string()),
                border_radius: Some(8),
                dark_mode: None,
            },
        },
    ]
}

/// Registry of built-in and tenant-defined presets
#[derive(Clone)]
pub struct PresetRegistry {
    /// Built-in presets (immutable)
    builtin: Arc<HashMap<String, TemplatePreset>>,
    /// Custom presets registered at runtime
    custom: Arc<RwLock<HashMap<String, TemplatePreset>>>,
}

impl PresetRegistry {
    /// Create a registry seeded with the built-in gallery
    pub fn new() -> Self {
        let builtin = builtin_presets()
            .into_iter()
            .map(|preset| (preset.id.clone(), preset))
            .collect();
        Self {
            builtin: Arc::new(builtin),
            custom: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get a preset by id (built-in first, then custom)
    pub fn get(&self, id: &str) -> Option<TemplatePreset> {
        if let Some(preset) = self.builtin.get(id) {
            return Some(preset.clone());
        }
        if let Ok(custom) = self.custom.read() {
            if let Some(preset) = custom.get(id) {
                return Some(preset.clone());
            }
        }
        None
    }

    /// Get a preset by id, erroring when unknown
    pub fn find(&self, id: &str) -> Result<TemplatePreset> {
        self.get(id)
            .ok_or_else(|| WidgetError::PresetNotFound(id.to_string()))
    }

    /// Register a custom preset; replaces any custom preset with the same id
    pub fn register(&self, preset: TemplatePreset) -> Result<()> {
        let mut custom = self
            .custom
            .write()
            .map_err(|e| WidgetError::Lock(e.to_string()))?;
        debug!(id = %preset.id, "registered custom preset");
        custom.insert(preset.id.clone(), preset);
        Ok(())
    }

    /// Remove a custom preset
    pub fn unregister(&self, id: &str) -> Result<()> {
        let mut custom = self
            .custom
            .write()
            .map_err(|e| WidgetError::Lock(e.to_string()))?;
        custom.remove(id);
        Ok(())
    }

    /// List all preset ids, sorted
    pub fn list_all(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self.builtin.keys().cloned().collect();
        let custom = self
            .custom
            .read()
            .map_err(|e| WidgetError::Lock(e.to_string()))?;
        ids.extend(custom.keys().cloned());
        ids.sort();
        Ok(ids)
    }

    /// List built-in preset ids, sorted
    pub fn list_builtin(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.builtin.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn exists(&self, id: &str) -> bool {
        self.builtin.contains_key(id)
            || self
                .custom
                .read()
                .map(|custom| custom.contains_key(id))
                .unwrap_or(false)
    }

    pub fn is_builtin(&self, id: &str) -> bool {
        self.builtin.contains_key(id)
    }

    pub fn builtin_count(&self) -> usize {
        self.builtin.len()
    }

    pub fn custom_count(&self) -> Result<usize> {
        let custom = self
            .custom
            .read()
            .map_err(|e| WidgetError::Lock(e.to_string()))?;
        Ok(custom.len())
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PresetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresetRegistry")
            .field("builtin_count", &self.builtin_count())
            .field("custom_count", &self.custom_count().unwrap_or(0))
            .finish()
    }
}
