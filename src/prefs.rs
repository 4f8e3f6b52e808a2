//! Theme preference codec and storage access.
//!
//! The preference is a single boolean ("dark mode enabled"), stored as the
//! JSON boolean text `"true"` / `"false"` under a fixed key in eframe's
//! persistent key-value storage. An absent key means disabled.

use thiserror::Error;

/// Storage key for the dark-theme preference.
pub const DARK_THEME_KEY: &str = "dark-theme-enabled";

/// Errors produced when decoding a stored theme preference.
#[derive(Debug, Error)]
pub enum PrefError {
    /// The stored value is not parseable JSON.
    #[error("stored theme preference {raw:?} is not valid JSON")]
    Malformed {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// The stored value is valid JSON but not a boolean.
    ///
    /// Non-boolean values (numbers, strings, objects) are rejected rather
    /// than coerced through truthiness.
    #[error("stored theme preference {raw:?} is not a boolean")]
    NotABoolean { raw: String },
}

/// Decodes a stored preference string into the dark-mode boolean.
///
/// Only the JSON booleans `true` and `false` are accepted.
pub fn parse_preference(raw: &str) -> Result<bool, PrefError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|source| PrefError::Malformed {
            raw: raw.to_string(),
            source,
        })?;

    value.as_bool().ok_or_else(|| PrefError::NotABoolean {
        raw: raw.to_string(),
    })
}

/// Reads the persisted dark-mode preference.
///
/// Returns `Ok(None)` when storage is unavailable or the key has never been
/// written. Performs no writes.
pub fn load_preference(
    storage: Option<&dyn eframe::Storage>,
) -> Result<Option<bool>, PrefError> {
    let Some(storage) = storage else {
        return Ok(None);
    };

    match storage.get_string(DARK_THEME_KEY) {
        Some(raw) => parse_preference(&raw).map(Some),
        None => Ok(None),
    }
}

/// Persists the dark-mode preference as a stringified JSON boolean.
pub fn save_preference(storage: &mut dyn eframe::Storage, dark: bool) {
    storage.set_string(DARK_THEME_KEY, dark.to_string());
    storage.flush();
}
