use chatdeck_widget::*;

#[test]
fn test_default_config_matches_defaults_table() {
    let config = WidgetConfig::default();
    assert_eq!(config.appearance.primary_color, "#7C3AED");
    assert_eq!(config.appearance.width, 350);
    assert_eq!(config.behavior.auto_open_delay, 5);
    assert_eq!(config.content.bot_name, "AI Assistant");
    assert_eq!(config.messages.max_attachment_size, 5);
    assert_eq!(config.surveys.pre_chat_form_fields.len(), 3);
    assert_eq!(config.ai.model, "gemini-pro");
}

#[test]
fn test_store_scenario_update_then_reset_restores_default() {
    // Starting from defaults, updating primaryColor then resetting the
    // appearance section must restore the tabled default.
    let store = ConfigStore::new();
    let updated = store
        .update(ConfigUpdate::Appearance(AppearanceUpdate::PrimaryColor(
            "#000000".to_string(),
        )))
        .unwrap();
    assert_eq!(updated.appearance.primary_color, "#000000");

    let reset = store.reset_section(Section::Appearance).unwrap();
    assert_eq!(reset.appearance.primary_color, "#7C3AED");
}

#[test]
fn test_registry_find_feeds_store_apply() {
    let registry = PresetRegistry::new();
    let store = ConfigStore::new();

    let corporate = registry.find("corporate").unwrap();
    let snapshot = store.apply_preset(&corporate).unwrap();

    assert_eq!(snapshot.appearance.primary_color, "#2B6CB0");
    assert_eq!(snapshot.appearance.font_family, "Roboto");
    assert_eq!(snapshot.content, ContentConfig::default());
}

#[test]
fn test_export_import_round_trip() {
    let store = ConfigStore::new();
    store
        .update(ConfigUpdate::Content(ContentUpdate::BotName(
            "Support Bot".to_string(),
        )))
        .unwrap();

    let exported = store.snapshot().unwrap().to_json_pretty().unwrap();
    let imported = WidgetConfig::from_json(&exported).unwrap();
    assert_eq!(imported, store.snapshot().unwrap());
}
