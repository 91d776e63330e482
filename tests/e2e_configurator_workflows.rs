//! End-to-end tests for complete configurator sessions
//!
//! Each test walks an operator journey across the crates: pick a preset,
//! tune fields, watch the live preview, and copy out the embed code.

use std::sync::{Arc, Mutex};

use chatdeck_embed::{EmbedCodeGenerator, EmbedFormat};
use chatdeck_preview::{DeviceFrame, PreviewRenderer, PreviewState};
use chatdeck_widget::{
    AppearanceUpdate, ConfigStore, ConfigUpdate, ContentUpdate, MessagesUpdate, PresetRegistry,
    Section, SurveysUpdate, WidgetConfig,
};

#[test]
fn test_full_branding_session() {
    let store = ConfigStore::new();
    let registry = PresetRegistry::new();
    let renderer = PreviewRenderer::new();

    // Start from the corporate preset
    let preset = registry.find("corporate").unwrap();
    let snapshot = store.apply_preset(&preset).unwrap();
    assert_eq!(snapshot.appearance.primary_color, "#2B6CB0");
    assert_eq!(snapshot.appearance.font_family, "Roboto");

    // Tune branding on top of it
    store
        .update(ConfigUpdate::Content(ContentUpdate::BotName(
            "Acme Support".to_string(),
        )))
        .unwrap();
    let snapshot = store
        .update(ConfigUpdate::Appearance(AppearanceUpdate::Logo(
            "https://acme.example.com/logo.svg".to_string(),
        )))
        .unwrap();

    // The preview reflects both the preset and the edits
    let html = renderer.render(&snapshot);
    assert!(html.contains("Acme Support"));
    assert!(html.contains("#2B6CB0"));
    assert!(html.contains("https://acme.example.com/logo.svg"));

    // The script embed carries the final configuration
    let generator = EmbedCodeGenerator::with_widget_id("acme-prod");
    let code = generator.generate(&snapshot, EmbedFormat::Script).unwrap();
    assert!(code.contains("Acme Support"));
    assert!(code.contains("acme-prod"));
}

#[test]
fn test_preview_follows_store_through_listener() {
    let store = ConfigStore::new();
    let rendered = Arc::new(Mutex::new(String::new()));

    let sink = rendered.clone();
    store
        .on_change(move |config| {
            let html = PreviewRenderer::new()
                .with_device(DeviceFrame::Mobile)
                .render(config);
            *sink.lock().unwrap() = html;
        })
        .unwrap();

    store
        .update(ConfigUpdate::Content(ContentUpdate::WelcomeMessage(
            "Welcome to Acme!".to_string(),
        )))
        .unwrap();

    let html = rendered.lock().unwrap();
    assert!(html.contains("Welcome to Acme!"));
    assert!(html.contains("width: 375px"));
}

#[test]
fn test_experiment_then_reset_session() {
    let store = ConfigStore::new();

    // Experiment with messages and surveys
    store
        .update(ConfigUpdate::Messages(MessagesUpdate::ShowTypingIndicator(
            false,
        )))
        .unwrap();
    store
        .update(ConfigUpdate::Surveys(SurveysUpdate::ShowPreChatForm(true)))
        .unwrap();

    // Keep the survey change, discard the message change
    let snapshot = store.reset_section(Section::Messages).unwrap();
    assert!(snapshot.messages.show_typing_indicator);
    assert!(snapshot.surveys.show_pre_chat_form);

    // The pre-chat form shows up in the preview after the reset
    let html = PreviewRenderer::new().render(&snapshot);
    assert!(html.contains("cd-prechat"));
}

#[test]
fn test_export_edit_import_matches() {
    let store = ConfigStore::new();
    let snapshot = store
        .update(ConfigUpdate::Appearance(AppearanceUpdate::DarkMode(true)))
        .unwrap();

    // Export, then import into a second session
    let exported = snapshot.to_json_pretty().unwrap();
    let imported = WidgetConfig::from_json(&exported).unwrap();
    let second = ConfigStore::with_config(imported);

    assert_eq!(second.snapshot().unwrap(), snapshot);

    // Both sessions produce identical embeds
    let generator = EmbedCodeGenerator::with_widget_id("shared");
    assert_eq!(
        generator.generate(&snapshot, EmbedFormat::Iframe).unwrap(),
        generator
            .generate(&second.snapshot().unwrap(), EmbedFormat::Iframe)
            .unwrap()
    );
}

#[test]
fn test_preview_states_match_widget_lifecycle() {
    let config = WidgetConfig::default();

    let closed = PreviewRenderer::new()
        .with_state(PreviewState::Closed)
        .render(&config);
    let minimized = PreviewRenderer::new()
        .with_state(PreviewState::Minimized)
        .render(&config);
    let open = PreviewRenderer::new().render(&config);

    assert!(closed.contains("cd-launcher"));
    assert!(minimized.contains("cd-header"));
    assert!(open.contains("cd-widget"));
    assert!(open.len() > minimized.len());
    assert!(minimized.len() > closed.len());
}
