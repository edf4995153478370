use featdeck::{
    Document, MountOutcome, PanelItem, REGISTRY, StatusSet, badge, install, lookup, panel,
};

#[test]
fn lookup_goes_through_the_static_registry() {
    let login = lookup("auth.emailLogin").unwrap();
    assert!(std::ptr::eq(login, REGISTRY.lookup("auth.emailLogin").unwrap()));
    assert!(lookup("auth").is_none());
    assert!(lookup(".emailLogin").is_none());
}

#[test]
fn every_entry_renders_a_badge_with_its_tooltip_source() {
    for entry in REGISTRY.entries() {
        let html = badge(entry.descriptor);
        assert!(html.contains("feature-status-badge"), "{}", entry.path());
    }
}

#[test]
fn planned_group_panel_lists_each_pending_feature() {
    let paths: Vec<String> = REGISTRY
        .select(StatusSet::PLANNED | StatusSet::DEVELOPMENT)
        .map(|entry| entry.path().to_string())
        .collect();
    assert_eq!(paths.len(), 8);

    let html = panel(&paths);
    assert_eq!(html.matches(r#"class="feature-status-item""#).count(), 8);
    assert_eq!(html.matches("<span>⏳</span>").count(), 8);
}

#[test]
fn auto_mount_then_manual_mount_keeps_one_panel() {
    let mut doc = Document::new();
    assert!(install(&mut doc));
    doc.fire_content_ready();

    assert_eq!(featdeck::mount(&mut doc), MountOutcome::AlreadyMounted);
    assert_eq!(doc.count_elements("featureStatusPanel"), 1);
    assert_eq!(doc.children()[0], panel(Vec::<PanelItem<'_>>::new()));
}
