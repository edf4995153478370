use featdeck_domain::{FeatureDescriptor, Status};
use featdeck_registry::REGISTRY;
use featdeck_render::{
    StatusColor, badge, badge_for, compact_indicator, inline_indicator, status_color,
};

#[test]
fn ready_descriptor_reads_ready_whatever_the_status() {
    let batch = REGISTRY.lookup("generation.batchGeneration").unwrap();
    assert_eq!(batch.status, Status::Testing);

    let html = badge(batch);
    assert!(html.contains("<span>✓</span>"));
    assert!(html.contains("<span>Ready</span>"));
    assert!(html.contains("color: #FF9800;"), "color still follows the status");
}

#[test]
fn testing_descriptor_not_ready_is_orange_testing() {
    let descriptor = FeatureDescriptor::new(false, Status::Testing);

    let html = badge(&descriptor);
    assert!(html.contains("<span>⏳</span>"));
    assert!(html.contains("<span>Testing</span>"));
    assert!(html.contains("color: #FF9800;"));
    assert!(html.contains("background: #FF980020;"));
    assert!(html.contains("border: 1px solid #FF980040;"));
    assert_eq!(status_color(&descriptor.status), StatusColor::Orange);
}

#[test]
fn tooltip_uses_api_then_note_then_default() {
    let with_api = REGISTRY.lookup("providers.openRouter").unwrap();
    assert!(badge(with_api).contains(r#"title="OpenRouter integration""#));

    let with_note = REGISTRY.lookup("planned.realtimeUpdates").unwrap();
    let html = badge(with_note);
    assert!(html.contains(r#"title="WebSocket support""#));
    assert!(html.contains("<span>Development</span>"));
    assert!(html.contains("color: #2196F3;"));

    let bare = FeatureDescriptor::new(false, Status::Planned);
    assert!(badge(&bare).contains(r#"title="Feature status""#));
}

#[test]
fn unknown_status_renders_gray_with_capitalized_label() {
    let descriptor = FeatureDescriptor::new(false, Status::from("archived"));

    let html = badge(&descriptor);
    assert!(html.contains("<span>Archived</span>"));
    assert!(html.contains("color: #9E9E9E;"));
}

#[test]
fn tooltip_text_is_escaped() {
    let descriptor =
        FeatureDescriptor::new(false, Status::Planned).with_note(r#"<script>alert("x")</script>"#);

    let html = badge(&descriptor);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn compact_indicator_is_two_state() {
    let ready = compact_indicator("auth.emailLogin");
    assert_eq!(
        ready.trim(),
        r#"<span style="color: #4CAF50; font-size: 16px;" title="Feature ready">✓</span>"#
    );

    let pending = compact_indicator("planned.visualBuilder");
    assert_eq!(
        pending.trim(),
        r#"<span style="color: #FF9800; font-size: 16px;" title="In development">⏳</span>"#
    );
}

#[test]
fn compact_indicator_is_empty_for_unknown_paths() {
    assert_eq!(compact_indicator("auth.doesNotExist"), "");
    assert_eq!(compact_indicator("auth"), "");
    assert_eq!(compact_indicator(""), "");
}

#[test]
fn inline_indicator_wraps_the_badge() {
    let html = inline_indicator("export.exportPDF");
    assert!(html.starts_with(r#"<span class="feature-inline-indicator">"#));
    assert!(html.contains("format=pdf"));
    assert!(html.contains("<span>Ready</span>"));

    assert_eq!(inline_indicator("export.exportDOCX"), "");
}

#[test]
fn badge_for_path_matches_descriptor_badge() {
    let descriptor = REGISTRY.lookup("templates.previewTemplate").unwrap();
    assert_eq!(badge_for("templates.previewTemplate"), badge(descriptor));

    assert_eq!(badge_for("templates.doesNotExist"), "");
    assert_eq!(badge_for("templates"), "");
}
