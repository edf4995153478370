use featdeck_domain::{FeatureDescriptor, Status};
use serde_json::json;

#[test]
fn descriptor_deserializes_without_optional_fields() {
    let descriptor: FeatureDescriptor =
        serde_json::from_value(json!({ "status": "development" })).expect("deserialize");

    assert!(!descriptor.ready);
    assert_eq!(descriptor.status, Status::Development);
    assert!(descriptor.api.is_none());
    assert!(descriptor.note.is_none());
}

#[test]
fn descriptor_keeps_unknown_status_text() {
    let descriptor: FeatureDescriptor =
        serde_json::from_value(json!({ "ready": false, "status": "beta", "note": "soon" }))
            .expect("deserialize");

    assert_eq!(descriptor.status, Status::Unknown("beta".into()));
    assert_eq!(descriptor.reference(), Some("soon"));
}

#[test]
fn descriptor_serializes_like_the_dashboard_table() {
    let descriptor = FeatureDescriptor::live(Status::Production, "/auth/login");
    let value = serde_json::to_value(&descriptor).expect("serialize");

    assert_eq!(value, json!({ "ready": true, "status": "production", "api": "/auth/login" }));
}
