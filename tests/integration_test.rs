use anyhow::Result;
use lightswitch::{
    load_preference, parse_preference, save_preference, theme_for, PrefError, DARK_THEME_KEY,
};
use std::collections::HashMap;

/// In-memory stand-in for eframe's persistent storage.
struct MockStorage {
    data: HashMap<String, String>,
}

impl MockStorage {
    fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    fn seed(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.data.insert(key.to_string(), value.to_string());
        storage
    }
}

impl eframe::Storage for MockStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}

#[test]
fn test_toggle_round_trip() {
    let mut storage = MockStorage::new();
    let mut dark = false;

    // First activation: marker on, persisted "true"
    dark = !dark;
    save_preference(&mut storage, dark);
    assert!(dark);
    assert_eq!(storage.data.get(DARK_THEME_KEY).unwrap(), "true");

    // Second activation: marker off, persisted "false"
    dark = !dark;
    save_preference(&mut storage, dark);
    assert!(!dark);
    assert_eq!(storage.data.get(DARK_THEME_KEY).unwrap(), "false");
}

#[test]
fn test_consistency_invariant_over_toggle_sequences() -> Result<()> {
    let mut storage = MockStorage::new();
    let mut dark = false;

    // After every activation the persisted value must match the visual state.
    for _ in 0..7 {
        dark = !dark;
        save_preference(&mut storage, dark);

        let persisted = load_preference(Some(&storage))?;
        assert_eq!(persisted, Some(dark));
        assert_eq!(theme_for(dark).name, if dark { "Dark" } else { "Light" });
    }

    Ok(())
}

#[test]
fn test_restore_is_idempotent() {
    let storage = MockStorage::seed(DARK_THEME_KEY, "true");

    // Restoration performs no write, so repetition is safe.
    for _ in 0..3 {
        assert_eq!(load_preference(Some(&storage)).unwrap(), Some(true));
    }
    assert_eq!(storage.data.len(), 1);
    assert_eq!(storage.data.get(DARK_THEME_KEY).unwrap(), "true");
}

#[test]
fn test_load_time_fidelity() {
    let storage = MockStorage::seed(DARK_THEME_KEY, "true");
    assert_eq!(load_preference(Some(&storage)).unwrap(), Some(true));

    let storage = MockStorage::seed(DARK_THEME_KEY, "false");
    assert_eq!(load_preference(Some(&storage)).unwrap(), Some(false));

    // Absent key: default light
    let storage = MockStorage::new();
    assert_eq!(load_preference(Some(&storage)).unwrap(), None);
}

#[test]
fn test_malformed_value_fails_and_leaves_default() {
    let storage = MockStorage::seed(DARK_THEME_KEY, "not-json");

    let err = load_preference(Some(&storage)).unwrap_err();
    assert!(matches!(err, PrefError::Malformed { .. }));

    // The failure is surfaced, not swallowed, and the bad value stays put
    // until the next toggle overwrites it.
    assert_eq!(storage.data.get(DARK_THEME_KEY).unwrap(), "not-json");
}

#[test]
fn test_non_boolean_json_is_rejected() {
    for raw in ["1", "{}", "\"yes\""] {
        let storage = MockStorage::seed(DARK_THEME_KEY, raw);
        let err = load_preference(Some(&storage)).unwrap_err();
        assert!(matches!(err, PrefError::NotABoolean { .. }), "raw: {raw}");
    }
}

#[test]
fn test_recovery_after_malformed_value() -> Result<()> {
    let mut storage = MockStorage::seed(DARK_THEME_KEY, "not-json");
    assert!(load_preference(Some(&storage)).is_err());

    // A toggle overwrites the bad value with a valid one.
    save_preference(&mut storage, true);
    assert_eq!(load_preference(Some(&storage))?, Some(true));
    Ok(())
}

#[test]
fn test_parse_preference_strictness() {
    assert!(parse_preference("true").unwrap());
    assert!(!parse_preference("false").unwrap());
    assert!(parse_preference("True").is_err());
    assert!(parse_preference("").is_err());
}
