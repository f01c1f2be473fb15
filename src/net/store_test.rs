use serde_json::json;

use super::*;

#[test]
fn doc_ref_path_joins_collection_and_id() {
    assert_eq!(DocRef::new("users", "u1").path(), "users/u1");
}

#[test]
fn error_codes_match_provider_names() {
    assert_eq!(StoreError::PermissionDenied.code(), "permission-denied");
    assert_eq!(StoreError::Unavailable("x".to_owned()).code(), "unavailable");
    assert_eq!(StoreError::Malformed("x".to_owned()).code(), "internal");
    assert_eq!(StoreError::Other { status: 400, message: String::new() }.code(), "unknown");
}

#[test]
fn status_error_maps_auth_failures_to_permission_denied() {
    assert_eq!(status_error(401, ""), StoreError::PermissionDenied);
    assert_eq!(status_error(403, ""), StoreError::PermissionDenied);
}

#[test]
fn status_error_reads_google_error_message() {
    let body = r#"{"error":{"code":503,"message":"The service is currently unavailable.","status":"UNAVAILABLE"}}"#;
    assert_eq!(
        status_error(503, body),
        StoreError::Unavailable("The service is currently unavailable.".to_owned())
    );
}

#[test]
fn status_error_falls_back_to_status_for_unparseable_body() {
    assert_eq!(status_error(502, "<html>"), StoreError::Unavailable("status 502".to_owned()));
    assert_eq!(
        status_error(400, "nope"),
        StoreError::Other { status: 400, message: String::new() }
    );
}

#[test]
fn decode_document_flattens_typed_fields() {
    let body = json!({
        "name": "projects/p/databases/(default)/documents/users/u1",
        "fields": {
            "role": { "stringValue": "faculty" },
            "active": { "booleanValue": true },
            "age": { "integerValue": "41" },
            "score": { "doubleValue": 9.5 },
            "note": { "nullValue": null },
            "tags": { "arrayValue": { "values": [{ "stringValue": "a" }, { "integerValue": "2" }] } },
            "profile": { "mapValue": { "fields": { "dept": { "stringValue": "CS" } } } }
        },
        "createTime": "2024-01-01T00:00:00Z"
    });
    let doc = decode_document(&body).unwrap();
    assert_eq!(doc.get("role"), Some(&json!("faculty")));
    assert_eq!(doc.get("active"), Some(&json!(true)));
    assert_eq!(doc.get("age"), Some(&json!(41)));
    assert_eq!(doc.get("score"), Some(&json!(9.5)));
    assert_eq!(doc.get("note"), Some(&Value::Null));
    assert_eq!(doc.get("tags"), Some(&json!(["a", 2])));
    assert_eq!(doc.get("profile"), Some(&json!({ "dept": "CS" })));
}

#[test]
fn decode_document_without_fields_is_empty() {
    let doc = decode_document(&json!({ "name": "projects/p/databases/(default)/documents/roles_admin/u1" })).unwrap();
    assert!(doc.fields.is_empty());
}

#[test]
fn decode_document_rejects_non_object() {
    assert!(matches!(decode_document(&json!([1, 2])), Err(StoreError::Malformed(_))));
    assert!(matches!(decode_document(&json!({ "fields": 3 })), Err(StoreError::Malformed(_))));
}

#[test]
fn decode_value_handles_empty_containers() {
    assert_eq!(decode_value(&json!({ "arrayValue": {} })), json!([]));
    assert_eq!(decode_value(&json!({ "mapValue": {} })), json!({}));
    assert_eq!(decode_value(&json!({ "integerValue": "not-a-number" })), Value::Null);
    assert_eq!(decode_value(&json!({ "doubleValue": "NaN" })), Value::Null);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unconfigured_store_fails_as_unavailable() {
    let store = RestDocumentStore::unconfigured(ConfigError::Missing { var: "ATTENDSYNC_FIREBASE_PROJECT_ID".to_owned() });
    let err = futures::executor::block_on(store.get(&DocRef::new("users", "u1"))).unwrap_err();
    assert_eq!(err.code(), "unavailable");
    assert!(err.to_string().contains("ATTENDSYNC_FIREBASE_PROJECT_ID"));
}

#[test]
fn configured_store_builds_document_url() {
    let config = AppConfig {
        project_id: "p".to_owned(),
        database_id: "(default)".to_owned(),
        api_base_url: "https://firestore.googleapis.com/v1".to_owned(),
        session_storage_key: "k".to_owned(),
    };
    let store = RestDocumentStore::new(&config, None);
    assert_eq!(
        store.document_url(&DocRef::new("roles_admin", "u1")).unwrap(),
        "https://firestore.googleapis.com/v1/projects/p/databases/(default)/documents/roles_admin/u1"
    );
}
