use featdeck_registry::REGISTRY;

#[test]
fn group_progress_counts_ready_and_production() {
    let progress = REGISTRY.progress();

    let auth = progress.group("auth").unwrap();
    assert_eq!((auth.total, auth.ready, auth.production), (6, 6, 6));
    assert_eq!(auth.completion_percent(), 100);

    let generation = progress.group("generation").unwrap();
    assert_eq!((generation.total, generation.ready, generation.production), (8, 8, 7));
    assert_eq!(generation.ready_percent(), 100);
    assert_eq!(generation.completion_percent(), 88);

    let planned = progress.group("planned").unwrap();
    assert_eq!(planned.ready, 0);
    assert_eq!(planned.ready_percent(), 0);

    assert!(progress.group("billing").is_none());
}

#[test]
fn overall_sums_every_group() {
    let overall = REGISTRY.progress().overall();
    assert_eq!(overall.group, "*");
    assert_eq!(overall.total, 45);
    assert_eq!(overall.ready, 37);
    assert_eq!(overall.production, 36);
    assert_eq!(overall.ready_percent(), 82);
}
