//! Application-level modules for the Lightswitch GUI.
//!
//! This module contains the centralized state and the coordinator that ties
//! theme state to persistent storage.

mod app_state;
mod theme_coordinator;

pub use app_state::AppState;
pub use theme_coordinator::ThemeCoordinator;
