//! Unit tests for the YAML override store.
//!
//! Uses real temp directories — the store's whole job is file round-trips.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;

use liftoff_cli::application::ports::OverrideStore;
use liftoff_cli::domain::error::PersistenceError;
use liftoff_cli::infra::overrides::YamlOverrideStore;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn store_in(tmp: &tempfile::TempDir) -> YamlOverrideStore {
    YamlOverrideStore::with_dir(tmp.path().join("parameters"))
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&tmp);
    let overrides = map(&[("Parent1", "parents value"), ("VpcId", "vpc-123")]);

    store.save("test", &overrides).await.expect("save");
    let loaded = store.load("test").await.expect("load");

    assert_eq!(loaded, overrides);
}

#[tokio::test]
async fn load_without_file_is_empty() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&tmp);
    assert!(store.load("test").await.expect("load").is_empty());
}

#[tokio::test]
async fn load_of_empty_file_is_empty() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&tmp);
    std::fs::create_dir_all(tmp.path().join("parameters")).expect("mkdir");
    std::fs::write(store.overrides_file("test"), "").expect("write");
    assert!(store.load("test").await.expect("load").is_empty());
}

#[tokio::test]
async fn malformed_file_is_a_persistence_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&tmp);
    std::fs::create_dir_all(tmp.path().join("parameters")).expect("mkdir");
    std::fs::write(store.overrides_file("test"), "- not\n- a\n- mapping\n").expect("write");

    let err = store.load("test").await.expect_err("expected Err");
    assert!(
        matches!(
            err.downcast_ref::<PersistenceError>(),
            Some(PersistenceError::Malformed { .. })
        ),
        "expected Malformed, got: {err}"
    );
}

#[tokio::test]
async fn save_creates_missing_directories() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = YamlOverrideStore::with_dir(tmp.path().join("deep").join("parameters"));
    store.save("test", &map(&[("A", "1")])).await.expect("save");
    assert!(store.overrides_file("test").exists());
}

#[tokio::test]
async fn save_overwrites_the_whole_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&tmp);
    store
        .save("test", &map(&[("Old", "gone"), ("Kept", "1")]))
        .await
        .expect("save");
    store.save("test", &map(&[("Kept", "2")])).await.expect("save");

    let loaded = store.load("test").await.expect("load");
    assert_eq!(loaded, map(&[("Kept", "2")]), "callers merge before saving");
}

#[test]
fn overrides_file_path_is_deterministic() {
    let store = YamlOverrideStore::with_dir("/deploy/cloud_formation/parameters".into());
    assert_eq!(
        store.overrides_file("myapp-staging"),
        std::path::PathBuf::from("/deploy/cloud_formation/parameters/myapp-staging.yml")
    );
}
