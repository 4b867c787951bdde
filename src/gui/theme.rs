//! Color palettes for the configurator GUI.

use egui::Color32;

use crate::prefs::ThemeMode;

/// Colors used to skin the app in one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Main panel background
    pub bg_primary: Color32,
    /// Card and side panel background
    pub bg_secondary: Color32,
    /// Hover/active widget background
    pub bg_highlight: Color32,
    /// Code block background
    pub bg_code: Color32,
    /// Primary text
    pub text_primary: Color32,
    /// Secondary text
    pub text_dim: Color32,
    /// Muted text (descriptions, notes)
    pub text_muted: Color32,
    pub accent_green: Color32,
    pub accent_red: Color32,
}

pub const DARK: Palette = Palette {
    bg_primary: Color32::from_rgb(24, 26, 32),
    bg_secondary: Color32::from_rgb(32, 35, 43),
    bg_highlight: Color32::from_rgb(45, 50, 62),
    bg_code: Color32::from_rgb(18, 20, 25),
    text_primary: Color32::from_rgb(220, 223, 228),
    text_dim: Color32::from_rgb(160, 165, 175),
    text_muted: Color32::from_rgb(110, 115, 125),
    accent_green: Color32::from_rgb(80, 200, 120),
    accent_red: Color32::from_rgb(235, 90, 90),
};

pub const LIGHT: Palette = Palette {
    bg_primary: Color32::from_rgb(246, 247, 249),
    bg_secondary: Color32::from_rgb(255, 255, 255),
    bg_highlight: Color32::from_rgb(225, 230, 240),
    bg_code: Color32::from_rgb(238, 240, 244),
    text_primary: Color32::from_rgb(30, 33, 40),
    text_dim: Color32::from_rgb(90, 95, 105),
    text_muted: Color32::from_rgb(140, 145, 155),
    accent_green: Color32::from_rgb(30, 140, 70),
    accent_red: Color32::from_rgb(190, 40, 40),
};

/// The palette for a theme mode.
pub fn palette(mode: ThemeMode) -> Palette {
    if mode.is_dark() { DARK } else { LIGHT }
}
