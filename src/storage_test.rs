use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k"), Some("v".to_owned()));
    store.set("k", "w");
    assert_eq!(store.get("k"), Some("w".to_owned()));
    store.remove("k");
    assert_eq!(store.get("k"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_remove_missing_key_is_noop() {
    let store = MemoryStore::new();
    store.remove("nothing");
    assert!(store.is_empty());
}

// =============================================================
// NoopStore
// =============================================================

#[test]
fn noop_store_never_holds_values() {
    let store = NoopStore;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}

#[test]
fn default_store_is_noop_without_browser() {
    let store = default_store();
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn save_then_load_json_value() {
    let store = MemoryStore::new();
    save_json(&store, "flag", &true);
    assert_eq!(store.get("flag"), Some("true".to_owned()));
    assert_eq!(load_json::<bool>(&store, "flag"), Some(true));
}

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(load_json::<bool>(&store, "flag"), None);
}

#[test]
fn load_json_corrupt_value_is_none() {
    let store = MemoryStore::new();
    store.set("user", "{not json");
    assert_eq!(load_json::<serde_json::Value>(&store, "user"), None);
}

#[test]
fn load_json_wrong_shape_is_none() {
    let store = MemoryStore::new();
    store.set("flag", "\"yes\"");
    assert_eq!(load_json::<bool>(&store, "flag"), None);
}
