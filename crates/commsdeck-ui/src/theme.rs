//! Theme support for the console.
//!
//! Dark console palette with a high-contrast mode for accessibility.

use egui::{Color32, Style, Visuals};
use serde::{Deserialize, Serialize};

/// Available themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// High contrast for accessibility
    HighContrast,
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Selected theme
    pub theme: Theme,
    /// Base font size in points
    pub font_size: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_size: 14.0,
        }
    }
}

/// Shared color constants for the console palette
pub mod colors {
    use egui::Color32;

    /// Accent used for the panel header stripe
    pub const CYAN_ACCENT: Color32 = Color32::from_rgb(0, 229, 255);
    /// Caution color for destructive/emergency actions
    pub const CAUTION_COLOR: Color32 = Color32::from_rgb(170, 30, 30);
    /// Main panel background
    pub const DARK_GREY: Color32 = Color32::from_rgb(18, 18, 24);
    /// Widget background
    pub const LIGHTER_GREY: Color32 = Color32::from_rgb(40, 40, 45);
    /// Borders
    pub const STROKE_GREY: Color32 = Color32::from_rgb(80, 80, 90);
}

impl ThemeConfig {
    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        style.visuals = match self.theme {
            Theme::Dark => Self::dark_visuals(),
            Theme::HighContrast => Self::high_contrast_visuals(),
        };
        ctx.set_style(style);
    }

    fn dark_visuals() -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = colors::DARK_GREY;
        visuals.window_fill = colors::DARK_GREY;
        visuals.widgets.noninteractive.bg_fill = colors::LIGHTER_GREY;
        visuals.selection.bg_fill = colors::CYAN_ACCENT.linear_multiply(0.4);
        visuals
    }

    fn high_contrast_visuals() -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = Color32::BLACK;
        visuals.window_fill = Color32::BLACK;
        visuals.override_text_color = Some(Color32::WHITE);
        visuals
    }
}
