//! Centralized application state for the Lightswitch GUI.

use crate::state::ThemeState;

/// Main application state.
///
/// Composes the focused state components with top-level concerns such as the
/// current error message.
pub struct AppState {
    /// Theme and styling state
    pub theme: ThemeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values (light mode).
    pub fn new() -> Self {
        Self {
            theme: ThemeState::new(),
            error_message: None,
        }
    }

    /// Creates a new AppState with a dark-mode flag restored from storage.
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            theme: ThemeState::with_dark_mode(dark_mode),
            error_message: None,
        }
    }
}
