//! Theme application for ConfiguratorApp.

use eframe::egui;

use super::app::ConfiguratorApp;
use super::theme;

impl ConfiguratorApp {
    /// Apply the active palette to the egui context.
    pub(crate) fn apply_theme(&self, ctx: &egui::Context) {
        let palette = theme::palette(self.theme);

        let mut style = (*ctx.style()).clone();
        style.visuals = if self.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        style.visuals.panel_fill = palette.bg_primary;
        style.visuals.window_fill = palette.bg_primary;
        style.visuals.extreme_bg_color = palette.bg_code;
        style.visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
        style.visuals.widgets.inactive.bg_fill = palette.bg_secondary;
        style.visuals.widgets.hovered.bg_fill = palette.bg_highlight;
        style.visuals.widgets.active.bg_fill = palette.bg_highlight;
        style.visuals.selection.bg_fill = palette.bg_highlight;
        ctx.set_style(style);
    }
}
