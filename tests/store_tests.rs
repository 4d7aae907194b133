//! Tests for the storage layer: JSON round-trips and soft-fail loading.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use glasspad::storage::{PrefsStore, TaskStore};

fn tasks_path(dir: &TempDir) -> PathBuf {
    dir.path().join("todo_list.json")
}

fn settings_path(dir: &TempDir) -> PathBuf {
    dir.path().join("settings.json")
}

// === Task list round-trips ===

#[test]
fn round_trip_of_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = TaskStore::load(tasks_path(&dir));
    store.persist();

    let reloaded = TaskStore::load(tasks_path(&dir));
    assert!(reloaded.is_empty());
}

#[test]
fn round_trip_of_a_single_task() {
    let dir = TempDir::new().unwrap();
    let mut store = TaskStore::load(tasks_path(&dir));
    assert!(store.add("Buy milk"));

    let reloaded = TaskStore::load(tasks_path(&dir));
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.tasks()[0].text, "Buy milk");
    assert!(!reloaded.tasks()[0].checked);
}

#[test]
fn round_trip_of_fifty_tasks_preserves_order() {
    let dir = TempDir::new().unwrap();
    let mut store = TaskStore::load(tasks_path(&dir));
    for i in 0..50 {
        assert!(store.add(&format!("task {i}")));
    }
    store.toggle(&[0, 17, 49]);

    let reloaded = TaskStore::load(tasks_path(&dir));
    assert_eq!(reloaded.len(), 50);
    for (i, task) in reloaded.tasks().iter().enumerate() {
        assert_eq!(task.text, format!("task {i}"));
        assert_eq!(task.checked, i == 0 || i == 17 || i == 49);
    }
}

#[test]
fn reorder_round_trips_through_the_file() {
    let dir = TempDir::new().unwrap();
    let mut store = TaskStore::load(tasks_path(&dir));
    store.add("a");
    store.add("b");
    store.add("c");
    assert!(store.reorder(&[2, 0, 1]));

    let reloaded = TaskStore::load(tasks_path(&dir));
    let texts: Vec<&str> = reloaded.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["c", "a", "b"]);
}

// === Write discipline ===

#[test]
fn empty_add_triggers_no_write() {
    let dir = TempDir::new().unwrap();
    let mut store = TaskStore::load(tasks_path(&dir));

    assert!(!store.add("   "));

    assert_eq!(store.len(), 0);
    assert!(!tasks_path(&dir).exists());
}

#[test]
fn double_toggle_produces_an_identical_document() {
    let dir = TempDir::new().unwrap();
    let mut store = TaskStore::load(tasks_path(&dir));
    store.add("a");
    store.add("b");
    let before = fs::read_to_string(tasks_path(&dir)).unwrap();

    store.toggle(&[1]);
    store.toggle(&[1]);

    let after = fs::read_to_string(tasks_path(&dir)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn document_is_a_readable_json_array() {
    let dir = TempDir::new().unwrap();
    let mut store = TaskStore::load(tasks_path(&dir));
    store.add("Buy milk");

    let contents = fs::read_to_string(tasks_path(&dir)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value[0]["text"], "Buy milk");
    assert_eq!(value[0]["checked"], false);
    // Pretty-printed, not a single line.
    assert!(contents.contains('\n'));
}

#[test]
fn scenario_ends_with_one_checked_task_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut store = TaskStore::load(tasks_path(&dir));
    store.add("Buy milk");
    store.add("Walk dog");
    store.toggle(&[0]);
    store.remove(&[1]);

    let contents = fs::read_to_string(tasks_path(&dir)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["text"], "Buy milk");
    assert_eq!(value[0]["checked"], true);
}

// === Soft-fail loading ===

#[test]
fn missing_task_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = TaskStore::load(tasks_path(&dir));
    assert!(store.is_empty());
}

#[test]
fn corrupt_task_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(tasks_path(&dir), "{ not json ]").unwrap();

    let store = TaskStore::load(tasks_path(&dir));
    assert!(store.is_empty());
}

#[test]
fn task_file_with_wrong_shape_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(tasks_path(&dir), r#"{"text": "not an array"}"#).unwrap();

    let store = TaskStore::load(tasks_path(&dir));
    assert!(store.is_empty());
}

// === Preferences ===

#[test]
fn missing_settings_file_defaults_to_twelve() {
    let dir = TempDir::new().unwrap();
    let store = PrefsStore::load(settings_path(&dir));
    assert_eq!(store.font_size(), 12);
}

#[test]
fn malformed_settings_file_defaults_to_twelve() {
    let dir = TempDir::new().unwrap();
    fs::write(settings_path(&dir), "font_size = 20").unwrap();

    let store = PrefsStore::load(settings_path(&dir));
    assert_eq!(store.font_size(), 12);
}

#[test]
fn settings_file_without_the_key_defaults_to_twelve() {
    let dir = TempDir::new().unwrap();
    fs::write(settings_path(&dir), "{}").unwrap();

    let store = PrefsStore::load(settings_path(&dir));
    assert_eq!(store.font_size(), 12);
}

#[test]
fn settings_file_with_wrong_type_defaults_to_twelve() {
    let dir = TempDir::new().unwrap();
    fs::write(settings_path(&dir), r#"{"font_size": "large"}"#).unwrap();

    let store = PrefsStore::load(settings_path(&dir));
    assert_eq!(store.font_size(), 12);
}

#[test]
fn saved_font_size_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut store = PrefsStore::load(settings_path(&dir));
    store.save(20);

    let reloaded = PrefsStore::load(settings_path(&dir));
    assert_eq!(reloaded.font_size(), 20);
}

#[test]
fn out_of_range_font_size_is_clamped_before_writing() {
    let dir = TempDir::new().unwrap();
    let mut store = PrefsStore::load(settings_path(&dir));

    store.save(100);
    assert_eq!(store.font_size(), 48);
    assert_eq!(PrefsStore::load(settings_path(&dir)).font_size(), 48);

    store.save(3);
    assert_eq!(store.font_size(), 8);
    assert_eq!(PrefsStore::load(settings_path(&dir)).font_size(), 8);
}

#[test]
fn out_of_range_stored_value_is_clamped_on_load() {
    let dir = TempDir::new().unwrap();
    fs::write(settings_path(&dir), r#"{"font_size": 500}"#).unwrap();

    let store = PrefsStore::load(settings_path(&dir));
    assert_eq!(store.font_size(), 48);
}

#[test]
fn settings_document_holds_exactly_the_font_size_key() {
    let dir = TempDir::new().unwrap();
    let mut store = PrefsStore::load(settings_path(&dir));
    store.save(14);

    let contents = fs::read_to_string(settings_path(&dir)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["font_size"], 14);
}
