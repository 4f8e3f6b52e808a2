//! Theme and styling state management.
//!
//! This module encapsulates all state related to visual theming: the
//! dark-mode flag and lookup of the matching color scheme.

use lightswitch::theme::{theme_for, Theme};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Tracking whether dark mode is enabled
/// - Providing the matching theme definition
#[derive(Debug)]
pub struct ThemeState {
    /// Whether the dark theme is currently enabled
    dark_mode: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with dark mode disabled (light default).
    pub fn new() -> Self {
        Self { dark_mode: false }
    }

    /// Creates a new theme state with an explicit dark-mode flag.
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    // ===== Theme Queries =====

    /// Returns whether dark mode is enabled.
    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Returns the theme definition for the current mode.
    pub fn current_theme(&self) -> Theme {
        theme_for(self.dark_mode)
    }

    // ===== Theme Mutations =====

    /// Flips the dark-mode flag and returns the resulting value.
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}
