//! Integration tests for the document loader against a local source.

mod common;

use cv_viewer::{DocumentLoader, DocumentSource, Error};

#[tokio::test]
async fn load_returns_parsed_document() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cv_en.json"), common::sample_json()).unwrap();

    let loader = DocumentLoader::new(DocumentSource::Local(dir.path().to_path_buf())).unwrap();
    let document = loader.load("en").await.unwrap();
    assert_eq!(document.personal.name, "Jane Q. Public");
    assert_eq!(document.experience.len(), 2);
}

#[tokio::test]
async fn missing_resource_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let loader = DocumentLoader::new(DocumentSource::Local(dir.path().to_path_buf())).unwrap();

    match loader.load("de").await {
        Err(Error::LoadFailure { .. }) => {}
        other => panic!("expected LoadFailure, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn malformed_body_is_a_load_failure_not_a_partial_document() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cv_en.json"), "{\"personal\": {").unwrap();

    let loader = DocumentLoader::new(DocumentSource::Local(dir.path().to_path_buf())).unwrap();
    assert!(matches!(
        loader.load("en").await,
        Err(Error::LoadFailure { .. })
    ));
}

#[tokio::test]
async fn repeated_loads_yield_identical_documents() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cv_en.json"), common::sample_json()).unwrap();

    let loader = DocumentLoader::new(DocumentSource::Local(dir.path().to_path_buf())).unwrap();
    let first = loader.load("en").await.unwrap();
    let second = loader.load("en").await.unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
