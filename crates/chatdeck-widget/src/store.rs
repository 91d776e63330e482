//! In-memory configuration store for a single editor session
//!
//! The store owns the current [`WidgetConfig`] for the lifetime of an
//! editing session. UI controls push [`ConfigUpdate`]s; the preview renderer
//! and the embed generator recompute synchronously from the snapshot each
//! mutation returns, or subscribe through [`ConfigStore::on_change`]. There
//! is a single writer; nothing is persisted.

use std::sync::{Arc, Mutex, RwLock};

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::{
    presets::TemplatePreset,
    types::{Section, WidgetConfig},
    update::ConfigUpdate,
};

/// Type alias for configuration change listeners
type ChangeListeners = Arc<Mutex<Vec<Box<dyn Fn(&WidgetConfig) + Send>>>>;

/// Mutable configuration state for one editor session
#[derive(Clone)]
pub struct ConfigStore {
    /// Current configuration
    current: Arc<RwLock<WidgetConfig>>,
    /// Change listeners, notified synchronously after every mutation
    listeners: ChangeListeners,
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("current", &self.current)
            .finish()
    }
}

impl ConfigStore {
    /// Create a store holding the default configuration
    pub fn new() -> Self {
        Self::with_config(WidgetConfig::default())
    }

    /// Create a store holding a specific configuration
    pub fn with_config(config: WidgetConfig) -> Self {
        Self {
            current: Arc::new(RwLock::new(config)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a snapshot of the current configuration
    pub fn snapshot(&self) -> Result<WidgetConfig> {
        let config = self
            .current
            .read()
            .map_err(|e| anyhow!("Failed to lock configuration: {}", e))?
            .clone();
        Ok(config)
    }

    /// Apply a single-field update and return the new snapshot
    pub fn update(&self, update: ConfigUpdate) -> Result<WidgetConfig> {
        let section = update.section();
        let snapshot = {
            let mut current = self
                .current
                .write()
                .map_err(|e| anyhow!("Failed to lock configuration: {}", e))?;
            update.apply(&mut current);
            current.clone()
        };
        debug!(section = section.as_str(), "applied field update");
        self.notify(&snapshot)?;
        Ok(snapshot)
    }

    /// Replace one section with its tabled defaults
    pub fn reset_section(&self, section: Section) -> Result<WidgetConfig> {
        let snapshot = {
            let mut current = self
                .current
                .write()
                .map_err(|e| anyhow!("Failed to lock configuration: {}", e))?;
            current.reset_section(section);
            current.clone()
        };
        debug!(section = section.as_str(), "reset section to defaults");
        self.notify(&snapshot)?;
        Ok(snapshot)
    }

    /// Reset every section to its defaults
    pub fn reset_all(&self) -> Result<WidgetConfig> {
        let snapshot = {
            let mut current = self
                .current
                .write()
                .map_err(|e| anyhow!("Failed to lock configuration: {}", e))?;
            for section in Section::ALL {
                current.reset_section(section);
            }
            current.clone()
        };
        debug!("reset all sections to defaults");
        self.notify(&snapshot)?;
        Ok(snapshot)
    }

    /// Shallow-merge a preset's appearance fields over the current config
    pub fn apply_preset(&self, preset: &TemplatePreset) -> Result<WidgetConfig> {
        let snapshot = {
            let mut current = self
                .current
                .write()
                .map_err(|e| anyhow!("Failed to lock configuration: {}", e))?;
            preset.appearance.merge_into(&mut current.appearance);
            current.clone()
        };
        debug!(preset = %preset.id, "applied template preset");
        self.notify(&snapshot)?;
        Ok(snapshot)
    }

    /// Register a listener invoked after every mutation
    pub fn on_change<F>(&self, listener: F) -> Result<()>
    where
        F: Fn(&WidgetConfig) + Send + 'static,
    {
        let mut listeners = self
            .listeners
            .lock()
            .map_err(|e| anyhow!("Failed to lock listeners: {}", e))?;
        listeners.push(Box::new(listener));
        Ok(())
    }

    fn notify(&self, config: &WidgetConfig) -> Result<()> {
        let listeners = self
            .listeners
            .lock()
            .map_err(|e| anyhow!("Failed to lock listeners: {}", e))?;
        for listener in listeners.iter() {
            listener(config);
        }
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        presets::builtin_presets,
        update::{AiUpdate, AppearanceUpdate},
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_update_returns_new_snapshot() {
        let store = ConfigStore::new();
        let snapshot = store
            .update(ConfigUpdate::Appearance(AppearanceUpdate::PrimaryColor(
                "#000000".to_string(),
            )))
            .unwrap();
        assert_eq!(snapshot.appearance.primary_color, "#000000");
        assert_eq!(store.snapshot().unwrap(), snapshot);
    }

    #[test]
    fn test_update_isolation_across_sections() {
        let store = ConfigStore::new();
        let before = store.snapshot().unwrap();
        let after = store
            .update(ConfigUpdate::Ai(AiUpdate::Temperature(0.3)))
            .unwrap();

        assert_eq!(after.ai.temperature, 0.3);
        assert_eq!(after.appearance, before.appearance);
        assert_eq!(after.behavior, before.behavior);
        assert_eq!(after.content, before.content);
    }

    #[test]
    fn test_reset_section_restores_primary_color() {
        let store = ConfigStore::new();
        store
            .update(ConfigUpdate::Appearance(AppearanceUpdate::PrimaryColor(
                "#000000".to_string(),
            )))
            .unwrap();
        let snapshot = store.reset_section(Section::Appearance).unwrap();
        assert_eq!(snapshot.appearance.primary_color, "#7C3AED");
    }

    #[test]
    fn test_reset_section_is_idempotent() {
        let store = ConfigStore::new();
        store
            .update(ConfigUpdate::Appearance(AppearanceUpdate::Width(420)))
            .unwrap();
        let once = store.reset_section(Section::Appearance).unwrap();
        let twice = store.reset_section(Section::Appearance).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reset_all() {
        let store = ConfigStore::new();
        store
            .update(ConfigUpdate::Ai(AiUpdate::Model("gpt-4".to_string())))
            .unwrap();
        store
            .update(ConfigUpdate::Appearance(AppearanceUpdate::DarkMode(true)))
            .unwrap();
        let snapshot = store.reset_all().unwrap();
        assert_eq!(snapshot, WidgetConfig::default());
    }

    #[test]
    fn test_apply_preset_merges_appearance_only() {
        let store = ConfigStore::new();
        let before = store.snapshot().unwrap();
        let minimal = builtin_presets()
            .into_iter()
            .find(|p| p.id == "minimal")
            .unwrap();

        let after = store.apply_preset(&minimal).unwrap();

        assert_eq!(after.appearance.primary_color, "#2D3748");
        assert_eq!(after.appearance.template, "dark");
        assert!(after.appearance.dark_mode);
        // Fields the preset does not set stay as they were
        assert_eq!(after.appearance.position, before.appearance.position);
        assert_eq!(after.appearance.logo, before.appearance.logo);
        // Other sections are untouched
        assert_eq!(after.behavior, before.behavior);
        assert_eq!(after.ai, before.ai);
    }

    #[test]
    fn test_listeners_observe_every_mutation() {
        let store = ConfigStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let observed = calls.clone();
        store
            .on_change(move |_config| {
                observed.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        store
            .update(ConfigUpdate::Appearance(AppearanceUpdate::DarkMode(true)))
            .unwrap();
        store.reset_section(Section::Appearance).unwrap();
        store.reset_all().unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_listener_sees_latest_snapshot() {
        let store = ConfigStore::new();
        let seen = Arc::new(Mutex::new(String::new()));
        let sink = seen.clone();
        store
            .on_change(move |config| {
                *sink.lock().unwrap() = config.appearance.primary_color.clone();
            })
            .unwrap();

        store
            .update(ConfigUpdate::Appearance(AppearanceUpdate::PrimaryColor(
                "#111111".to_string(),
            )))
            .unwrap();

        assert_eq!(seen.lock().unwrap().as_str(), "#111111");
    }
}
