//! State management modules for the Lightswitch GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (dark-mode flag, current theme lookup)

mod theme_state;

pub use theme_state::ThemeState;
