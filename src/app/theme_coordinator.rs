//! Theme management and persistence coordination.
//!
//! Handles restoring the dark-mode preference at startup, persisting it on
//! every toggle, and applying the active theme to the egui context.

use crate::app::AppState;
use lightswitch::prefs::{load_preference, save_preference, PrefError};
use lightswitch::theme;

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Restores the dark-mode preference from persistent storage during
    /// application startup.
    ///
    /// Returns `Ok(false)` when storage is unavailable or no preference has
    /// been saved yet. A stored value that is not a JSON boolean yields an
    /// error; the caller decides how to report it and falls back to light
    /// mode. Performs no writes, so calling it repeatedly is safe.
    pub fn restore_from_storage(
        storage: Option<&dyn eframe::Storage>,
    ) -> Result<bool, PrefError> {
        Ok(load_preference(storage)?.unwrap_or(false))
    }

    /// Flips the dark-mode state and persists the resulting value.
    ///
    /// The visual flip always takes effect; when storage is unavailable the
    /// persistence step is skipped and state diverges from storage until the
    /// next toggle with storage present. Returns the new dark-mode flag.
    pub fn toggle(state: &mut AppState, storage: Option<&mut (dyn eframe::Storage + '_)>) -> bool {
        let dark = state.theme.toggle();
        if let Some(storage) = storage {
            save_preference(storage, dark);
        }
        dark
    }

    /// Persists the current dark-mode state to storage.
    ///
    /// Called during application shutdown.
    pub fn save_to_storage(storage: &mut dyn eframe::Storage, state: &AppState) {
        save_preference(storage, state.theme.is_dark_mode());
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let current = state.theme.current_theme();
        let mut visuals = if state.theme.is_dark_mode() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        theme::apply_theme(&current, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
