//! Header panel UI rendering
//!
//! Handles the top bar with the lightswitch toggle control.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked the lightswitch control
    ThemeToggleRequested,
}

/// Renders the application header with the theme toggle control
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("Lightswitch").strong());

        ui.separator();

        let (icon, label) = if state.theme.is_dark_mode() {
            ("☀", "Switch to light mode")
        } else {
            ("🌙", "Switch to dark mode")
        };

        if ui.button(icon).on_hover_text(label).clicked() {
            interaction = Some(HeaderInteraction::ThemeToggleRequested);
        }

        ui.label(
            RichText::new(state.theme.current_theme().name)
                .color(state.theme.current_theme().colors.text_dim),
        );
    });

    interaction
}
