//! Panel orchestration and layout management.
//!
//! Coordinates the UI panels (header, content) and reports their interactions
//! back to the application for handling.

use crate::app::AppState;
use crate::ui::header;
use egui::RichText;

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// The theme toggle control was activated
    ThemeToggleRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::ThemeToggleRequested) =
                header::render_header(ui, state)
            {
                interaction = Some(PanelInteraction::ThemeToggleRequested);
            }
        });

        // Main content panel
        egui::CentralPanel::default().show(ctx, |ui| {
            let theme = state.theme.current_theme();

            ui.heading(format!("{} mode", theme.name));
            ui.label(
                RichText::new("The preference is saved and restored on the next launch.")
                    .color(theme.colors.text_dim),
            );

            if let Some(message) = &state.error_message {
                ui.separator();
                ui.label(RichText::new(message).color(theme.colors.error));
            }
        });

        interaction
    }
}
