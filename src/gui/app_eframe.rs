//! eframe::App implementation for ConfiguratorApp
//!
//! The update loop drains control change events and re-runs synthesis
//! before rendering the frame.

use eframe::egui;

use super::app::ConfiguratorApp;

impl eframe::App for ConfiguratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.drain_change_events() {
            self.regenerate();
        }

        self.apply_theme(ctx);

        // Side panel before the central panel so the cards account for its
        // width.
        self.render_header(ctx);
        self.render_output_panel(ctx);
        self.render_cards(ctx);
    }
}
