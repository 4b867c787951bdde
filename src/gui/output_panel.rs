//! Generated-config side panel.
//!
//! Shows the live JSON preview, the save/copy actions, the status line, and
//! the activity log.

use eframe::egui::{self, RichText};

use crate::export;

use super::activity::LogEventKind;
use super::app::ConfiguratorApp;
use super::theme;

impl ConfiguratorApp {
    pub(crate) fn render_output_panel(&mut self, ctx: &egui::Context) {
        let palette = theme::palette(self.theme);

        egui::SidePanel::right("generated_config")
            .default_width(380.0)
            .frame(egui::Frame::NONE.fill(palette.bg_secondary).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Generated Config")
                        .monospace()
                        .size(15.0)
                        .strong()
                        .color(palette.text_primary),
                );
                ui.label(
                    RichText::new(export::CONFIG_FILE_NAME)
                        .small()
                        .monospace()
                        .color(palette.text_muted),
                );
                ui.add_space(8.0);

                egui::ScrollArea::vertical()
                    .id_salt("generated_config_json")
                    .max_height((ui.available_height() - 140.0).max(120.0))
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let mut rendered = self.rendered.as_str();
                        ui.add(
                            egui::TextEdit::multiline(&mut rendered)
                                .font(egui::TextStyle::Monospace)
                                .desired_width(f32::INFINITY)
                                .desired_rows(16),
                        );
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let save = ui.add_enabled(
                        !self.mapping.is_empty(),
                        egui::Button::new(RichText::new("💾 Save").color(palette.accent_green)),
                    );
                    if save
                        .on_hover_text("Write .prettierrc.json into the working directory")
                        .on_disabled_hover_text(export::EMPTY_CONFIG_MESSAGE)
                        .clicked()
                    {
                        self.save_config();
                    }

                    ui.add_space(4.0);

                    if ui
                        .button(RichText::new("📋 Copy").color(palette.text_dim))
                        .on_hover_text("Copy config to clipboard")
                        .clicked()
                    {
                        ui.ctx().copy_text(self.rendered.clone());
                        self.status = Some(("Copied to clipboard".to_string(), false));
                    }
                });

                if let Some((message, is_error)) = &self.status {
                    let color = if *is_error {
                        palette.accent_red
                    } else {
                        palette.accent_green
                    };
                    ui.add_space(6.0);
                    ui.label(RichText::new(message).small().color(color));
                }

                ui.add_space(10.0);
                ui.separator();
                ui.collapsing("Activity", |ui| {
                    if self.logs.is_empty() {
                        ui.label(
                            RichText::new("No activity yet.")
                                .small()
                                .color(palette.text_muted),
                        );
                    }
                    for event in self.logs.iter().rev().take(50) {
                        let color = match event.kind {
                            LogEventKind::Error => palette.accent_red,
                            LogEventKind::System => palette.text_dim,
                        };
                        ui.label(
                            RichText::new(format!(
                                "{} {}",
                                event.timestamp.format("%H:%M:%S"),
                                event.message
                            ))
                            .small()
                            .monospace()
                            .color(color),
                        );
                    }
                });
            });
    }
}
