//! Header and card list rendering for ConfiguratorApp.

use eframe::egui::{self, RichText};

use super::app::ConfiguratorApp;
use super::{cards, theme};

impl ConfiguratorApp {
    pub(crate) fn render_header(&mut self, ctx: &egui::Context) {
        let palette = theme::palette(self.theme);

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::NONE.fill(palette.bg_secondary).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("PRETTYRC")
                            .monospace()
                            .size(18.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Prettier configuration builder")
                            .small()
                            .color(palette.text_muted),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if self.theme.is_dark() {
                            "☀ Light"
                        } else {
                            "🌙 Dark"
                        };
                        if ui
                            .button(RichText::new(label).color(palette.text_dim))
                            .clicked()
                        {
                            self.toggle_theme();
                        }
                    });
                });
            });
    }

    pub(crate) fn render_cards(&mut self, ctx: &egui::Context) {
        let palette = theme::palette(self.theme);
        let schema = self.schema;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(palette.bg_primary).inner_margin(16.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for option in schema.iter() {
                            let Some(state) = self.controls.get_mut(&option.id) else {
                                continue;
                            };
                            cards::render_option_card(
                                ui,
                                &palette,
                                option,
                                state,
                                &self.change_tx,
                            );
                        }
                    });
            });
    }
}
