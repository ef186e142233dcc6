//! Catalog Loading Tests
//!
//! Malformed catalogs fail at load time, never at query time:
//! - Missing fields and unknown enum labels are rejected
//! - Duplicate ids are rejected
//! - Front-end field names load unchanged
//! - Config files select the catalog and the default sort

use std::fs;

use podverse::catalog::{CatalogErrorCode, CatalogLoader, Language, Topic};
use podverse::cli::{CliErrorCode, Config, Session};
use podverse::executor::query;
use podverse::query::{Query, QueryRequest, SortKey};
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn entry(id: &str, title: &str, views: u64) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "creator": "Night Shift",
        "description": "Stories told after dark.",
        "topic": "Entertainment",
        "language": "German",
        "durationMinutes": 70,
        "hasSubtitles": true,
        "views": views,
        "mediaUrl": "https://youtu.be/dQw4w9WgXcQ"
    })
}

fn write_catalog(dir: &TempDir, value: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

// =============================================================================
// Loader Tests
// =============================================================================

#[test]
fn test_load_catalog_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_catalog(&tmp, &json!([entry("a", "Alpha", 1), entry("b", "Beta", 2)]));

    let catalog = CatalogLoader::new(&path).load().unwrap();
    assert_eq!(catalog.len(), 2);

    let record = catalog.get("a").unwrap();
    assert_eq!(record.topic, Topic::Entertainment);
    assert_eq!(record.language, Language::German);

    let result = query(catalog.records(), &Query::default());
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn test_front_end_export_loads() {
    let tmp = TempDir::new().unwrap();
    let path = write_catalog(
        &tmp,
        &json!([{
            "id": "1",
            "title": "The Future of AI and Machine Learning",
            "creator": "Tech Innovators",
            "topic": "Technology",
            "language": "English",
            "duration": 45,
            "hasSubtitles": true,
            "thumbnail": "",
            "youtubeUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "description": "Exploring AI.",
            "views": 1200000
        }]),
    );

    let catalog = CatalogLoader::new(&path).load().unwrap();
    assert_eq!(catalog.records()[0].duration_minutes, 45);
}

#[test]
fn test_duplicate_ids_fail_load() {
    let tmp = TempDir::new().unwrap();
    let path = write_catalog(&tmp, &json!([entry("a", "One", 1), entry("a", "Two", 2)]));

    let err = CatalogLoader::new(&path).load().unwrap_err();
    assert_eq!(err.code(), CatalogErrorCode::DuplicateId);
    assert_eq!(err.record_id(), Some("a"));
}

#[test]
fn test_missing_field_fails_load() {
    let tmp = TempDir::new().unwrap();
    let mut broken = entry("a", "One", 1);
    broken.as_object_mut().unwrap().remove("views");
    let path = write_catalog(&tmp, &json!([broken]));

    let err = CatalogLoader::new(&path).load().unwrap_err();
    assert_eq!(err.code(), CatalogErrorCode::InvalidJson);
}

#[test]
fn test_unknown_language_fails_load() {
    let tmp = TempDir::new().unwrap();
    let mut broken = entry("a", "One", 1);
    broken["language"] = json!("Klingon");
    let path = write_catalog(&tmp, &json!([broken]));

    let err = CatalogLoader::new(&path).load().unwrap_err();
    assert_eq!(err.code(), CatalogErrorCode::InvalidJson);
}

#[test]
fn test_empty_title_fails_load() {
    let tmp = TempDir::new().unwrap();
    let path = write_catalog(&tmp, &json!([entry("a", "", 1)]));

    let err = CatalogLoader::new(&path).load().unwrap_err();
    assert_eq!(err.code(), CatalogErrorCode::MalformedRecord);
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_selects_catalog_and_default_sort() {
    let tmp = TempDir::new().unwrap();
    let catalog_path = write_catalog(
        &tmp,
        &json!([entry("z", "Zulu", 100), entry("a", "Alpha", 1)]),
    );

    let config_path = tmp.path().join("podverse.json");
    fs::write(
        &config_path,
        json!({
            "catalog_path": catalog_path.display().to_string(),
            "default_sort": "Title A-Z",
            "log_queries": false
        })
        .to_string(),
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.sort_key().unwrap(), SortKey::TitleAlphabetical);

    let session = Session::open(Some(config_path.as_path())).unwrap();
    let data = session.handle(&QueryRequest::default());
    assert_eq!(data["count"], 2);
    assert_eq!(data["records"][0]["id"], "a");
    assert_eq!(data["sort"], "Title A-Z");
}

#[test]
fn test_session_without_config_uses_sample() {
    let session = Session::open(None).unwrap();
    assert_eq!(session.catalog().len(), 8);
}

#[test]
fn test_bad_catalog_path_fails_session() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("podverse.json");
    fs::write(&config_path, r#"{"catalog_path": "/nonexistent/catalog.json"}"#).unwrap();

    let err = Session::open(Some(config_path.as_path())).err().unwrap();
    assert_eq!(err.code(), &CliErrorCode::CatalogError);
}

#[test]
fn test_missing_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    let err = Config::load(&tmp.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::ConfigError);
}
