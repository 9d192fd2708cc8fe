use super::*;

#[test]
fn document_lists_password_paths() {
    let doc = ApiDoc::openapi();
    for path in [
        "/api/v1/password/validate",
        "/api/v1/password/policy",
        "/health",
    ] {
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}

#[test]
fn document_registers_outcome_schemas() {
    let doc = ApiDoc::openapi();
    let schemas = &doc.components.as_ref().expect("components").schemas;
    for name in [
        "ValidationOutcomeDto",
        "MessageDto",
        "PasswordPolicyDto",
        "ErrorResponse",
    ] {
        assert!(schemas.contains_key(name), "missing schema {name}");
    }
}

#[test]
fn snapshot_is_written_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/openapi.json");
    write_openapi_snapshot(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["info"]["title"], "Password Rule API");
}

#[tokio::test]
async fn serve_openapi_returns_document() {
    let axum::Json(doc) = serve_openapi().await;
    assert!(doc.paths.paths.contains_key("/api/v1/password/validate"));
}
