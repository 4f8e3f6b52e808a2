pub mod prefs;
pub mod theme;

// Export preference codec
pub use prefs::{parse_preference, load_preference, save_preference, PrefError, DARK_THEME_KEY};

// Export theme support
pub use theme::{Theme, ThemeColors, theme_for, apply_theme};
