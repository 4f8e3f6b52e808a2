//! Theme support module for the Lightswitch GUI
//!
//! Provides the two built-in color schemes (Light and Dark) and the logic for
//! applying a scheme onto egui's visuals.
//!
//! # Examples
//!
//! ```
//! use lightswitch::theme::theme_for;
//!
//! let dark = theme_for(true);
//! println!("Dark background: {:?}", dark.colors.background);
//! ```

use egui::Color32;

/// Color palette for a theme, covering the UI elements the app styles
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub accent: Color32,

    // Diagnostic colors
    pub error: Color32,
    pub warning: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Returns the theme matching the dark-mode flag.
pub fn theme_for(dark: bool) -> Theme {
    if dark {
        dark_theme()
    } else {
        light_theme()
    }
}

/// Applies a theme's colors to egui visuals
pub fn apply_theme(theme: &Theme, visuals: &mut egui::Visuals) {
    let colors = &theme.colors;

    // Override background colors
    visuals.panel_fill = colors.panel_background;
    visuals.extreme_bg_color = colors.extreme_background;
    visuals.faint_bg_color = colors.hover;

    // Override text colors
    visuals.override_text_color = Some(colors.text);

    // Override selection
    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke.color = colors.accent;

    // Override widget colors
    visuals.widgets.noninteractive.bg_fill = colors.panel_background;
    visuals.widgets.inactive.bg_fill = colors.hover;
    visuals.widgets.hovered.bg_fill = colors.hover;
    visuals.widgets.active.bg_fill = colors.selection;

    // Override error/warning colors
    visuals.error_fg_color = colors.error;
    visuals.warn_fg_color = colors.warning;
}

/// Creates the Light theme
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),
            accent: Color32::from_rgb(40, 100, 200),

            error: Color32::from_rgb(200, 40, 40),
            warning: Color32::from_rgb(230, 120, 20),
        },
    }
}

/// Creates the Dark theme
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),
            accent: Color32::from_rgb(52, 152, 219),

            error: Color32::from_rgb(231, 76, 60),
            warning: Color32::from_rgb(243, 156, 18),
        },
    }
}
