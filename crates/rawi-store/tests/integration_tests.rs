//! Integration tests for rawi-store
//!
//! These tests verify the save/get/search/list/export cycle and the
//! index-as-cache recovery behavior.

use rawi_domain::traits::RecordStore;
use rawi_store::JsonFileStore;
use serde_json::json;

fn sample_record(full_name: &str, death_year: i64) -> serde_json::Value {
    json!({
        "author": {
            "full_name": full_name,
            "aliases": null,
            "birth_year": null,
            "death_year": death_year,
            "era": "التابعون"
        },
        "hadiths": null,
        "places": null
    })
}

#[test]
fn test_store_initialization_creates_index() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();
    assert!(store.storage_dir().join("index.json").exists());
}

#[test]
fn test_save_and_get_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path()).unwrap();

    let record = sample_record("سعيد بن المسيب", 94);
    let path = store.save("1 - سعيد", &record).unwrap();
    assert!(path.exists());

    let retrieved = store.get("1 - سعيد").unwrap().unwrap();
    assert_eq!(retrieved, record);
}

#[test]
fn test_get_unknown_identifier_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();
    assert!(store.get("99 - مجهول").unwrap().is_none());
}

#[test]
fn test_save_upserts_index_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path()).unwrap();

    store.save("1 - سعيد", &sample_record("سعيد بن المسيب", 94)).unwrap();
    store.save("1 - سعيد", &sample_record("سعيد بن المسيب المخزومي", 94)).unwrap();

    let entries = store.list_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].full_name.as_deref(),
        Some("سعيد بن المسيب المخزومي")
    );
    assert_eq!(entries[0].death_year, Some(94));
}

#[test]
fn test_record_file_is_unescaped_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path()).unwrap();

    let path = store.save("1 - سعيد", &sample_record("سعيد بن المسيب", 94)).unwrap();
    let contents = std::fs::read_to_string(path).unwrap();

    // Arabic script stays readable on disk, no \u escapes.
    assert!(contents.contains("سعيد بن المسيب"));
    assert!(contents.contains("\n  "));
}

#[test]
fn test_search_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path()).unwrap();

    store.save("5 - Al-Qadi", &sample_record("Iyad ibn Musa", 544)).unwrap();
    store.save("6 - الفقيه", &sample_record("عبد الله", 120)).unwrap();

    let hits = store.search("al-qadi").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].identifier, "5 - Al-Qadi");

    let hits = store.search("IYAD").unwrap();
    assert_eq!(hits.len(), 1);

    let hits = store.search("الفقيه").unwrap();
    assert_eq!(hits.len(), 1);

    assert!(store.search("nothing-here").unwrap().is_empty());
}

#[test]
fn test_corrupt_index_reinitializes_without_losing_records() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path()).unwrap();

    store.save("1 - سعيد", &sample_record("سعيد بن المسيب", 94)).unwrap();

    std::fs::write(dir.path().join("index.json"), "{ not json at all").unwrap();

    // Listing sees an empty cache, but the record file is still readable.
    assert!(store.list_all().unwrap().is_empty());
    assert!(store.get("1 - سعيد").unwrap().is_some());

    // A subsequent save repopulates the index.
    store.save("2 - الزهري", &sample_record("ابن شهاب الزهري", 124)).unwrap();
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn test_export_all_merges_records() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path()).unwrap();

    store.save("1 - سعيد", &sample_record("سعيد بن المسيب", 94)).unwrap();
    store.save("2 - الزهري", &sample_record("ابن شهاب الزهري", 124)).unwrap();

    let dest = dir.path().join("export").join("all_authors.json");
    let written = store.export_all(&dest).unwrap();
    assert_eq!(written, dest);

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dest).unwrap()).unwrap();
    let map = exported.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(
        map["1 - سعيد"]["author"]["full_name"],
        json!("سعيد بن المسيب")
    );
}

#[test]
fn test_distinct_identifiers_write_distinct_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path()).unwrap();

    let a = store.save("5 - القاضي", &sample_record("القاضي", 100)).unwrap();
    let b = store.save("6 - القاضي", &sample_record("القاضي", 200)).unwrap();
    assert_ne!(a, b);

    assert_eq!(store.list_all().unwrap().len(), 2);
}
