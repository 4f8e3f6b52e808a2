//! Lightswitch GUI Application
//!
//! A small desktop utility demonstrating a persisted dark-theme preference
//! built with the egui framework:
//! - A header toggle control flips between dark and light mode
//! - The preference survives restarts via eframe's persistent storage
//!
//! The application follows a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Theme state (no UI concerns)
//! - `ui/` - UI panel rendering and interaction

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod state;
mod ui;

use app::{AppState, ThemeCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the Lightswitch GUI.
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 320.0])
            .with_title("Lightswitch"),
        ..Default::default()
    };

    eframe::run_native(
        "Lightswitch",
        options,
        Box::new(|cc| Ok(Box::new(LightswitchApp::new(cc)))),
    )
}

/// The main Lightswitch application.
///
/// Delegates theme restoration, persistence, and application to
/// `ThemeCoordinator`, and panel layout to `PanelManager`.
struct LightswitchApp {
    /// Centralized application state
    state: AppState,
}

impl Default for LightswitchApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl LightswitchApp {
    /// Creates a new instance with the dark-mode preference restored from
    /// persistent storage.
    ///
    /// Restoration runs exactly once, here, after the UI context exists. A
    /// malformed stored value leaves the app in light mode and surfaces the
    /// decode error in the UI.
    fn new(cc: &eframe::CreationContext) -> Self {
        match ThemeCoordinator::restore_from_storage(cc.storage) {
            Ok(dark_mode) => Self {
                state: AppState::with_dark_mode(dark_mode),
            },
            Err(err) => {
                let mut state = AppState::new();
                state.error_message = Some(err.to_string());
                Self { state }
            }
        }
    }
}

impl eframe::App for LightswitchApp {
    /// Called when the app is being shut down - ensures the preference is saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_to_storage(storage, &self.state);
    }

    /// Main update loop that applies the theme, renders the panels, and
    /// handles toggle interactions.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Render all panels and get interaction result
        if let Some(PanelInteraction::ThemeToggleRequested) =
            PanelManager::render_all_panels(ctx, &mut self.state)
        {
            // The visual flip always happens; persistence is skipped when the
            // platform provides no storage.
            ThemeCoordinator::toggle(&mut self.state, frame.storage_mut());
        }
    }
}
