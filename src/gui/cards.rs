//! Option card rendering.
//!
//! Each card shows an option's title and description, the control for its
//! kind, and the example section for the current value. A change to the
//! control pushes a [`ControlEvent`] so the update loop re-runs synthesis.

use std::sync::mpsc::Sender;

use eframe::egui::{self, RichText};

use crate::catalog::{OptionDescriptor, OptionKind};
use crate::preview::select_example;

use super::app::{ControlEvent, ControlState};
use super::theme::Palette;

pub(crate) fn render_option_card(
    ui: &mut egui::Ui,
    palette: &Palette,
    option: &OptionDescriptor,
    state: &mut ControlState,
    change_tx: &Sender<ControlEvent>,
) {
    egui::Frame::NONE
        .fill(palette.bg_secondary)
        .corner_radius(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.label(
                RichText::new(&option.title)
                    .monospace()
                    .size(15.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.label(
                RichText::new(&option.description)
                    .small()
                    .color(palette.text_muted),
            );
            ui.add_space(8.0);

            if render_control(ui, palette, option, state) {
                let _ = change_tx.send(ControlEvent {
                    option_id: option.id.clone(),
                });
            }

            render_example(ui, palette, option, state);
        });
    ui.add_space(10.0);
}

/// Render the control for the option's kind. Returns true when its value
/// changed this frame.
fn render_control(
    ui: &mut egui::Ui,
    palette: &Palette,
    option: &OptionDescriptor,
    state: &mut ControlState,
) -> bool {
    match state {
        ControlState::Number(buffer) => {
            let mut changed = false;
            ui.horizontal(|ui| {
                ui.label(RichText::new("Value:").color(palette.text_muted));
                changed = ui
                    .add(
                        egui::TextEdit::singleline(buffer)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(64.0),
                    )
                    .changed();
            });
            changed
        }
        ControlState::Toggle(on) => {
            let mut changed = false;
            ui.horizontal(|ui| {
                changed = ui.checkbox(on, "").changed();
                ui.label(RichText::new("Enabled").color(palette.text_dim));
            });
            changed
        }
        ControlState::Select(selected) => {
            let mut changed = false;
            // Undeclared values keep their raw text as the visible label.
            let current_label = option
                .choice(selected)
                .map(|c| c.label.clone())
                .unwrap_or_else(|| selected.clone());
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_salt(option.id.as_str())
                    .selected_text(current_label)
                    .show_ui(ui, |ui| {
                        for choice in &option.choices {
                            if ui
                                .selectable_value(
                                    selected,
                                    choice.value.as_control_text(),
                                    choice.label.as_str(),
                                )
                                .changed()
                            {
                                changed = true;
                            }
                        }
                    });
            });
            changed
        }
    }
}

fn render_example(
    ui: &mut egui::Ui,
    palette: &Palette,
    option: &OptionDescriptor,
    state: &ControlState,
) {
    let pane = select_example(option, &state.raw_value());
    if !pane.has_content() {
        return;
    }

    ui.add_space(8.0);
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Example")
                .small()
                .strong()
                .color(palette.text_dim),
        );
        ui.label(
            RichText::new(&pane.language)
                .small()
                .monospace()
                .color(palette.text_muted),
        );
    });

    if let Some(note) = &pane.note {
        ui.label(RichText::new(note).small().italics().color(palette.text_muted));
    }
    if let Some(input) = &pane.input {
        ui.label(RichText::new("Input:").small().color(palette.text_muted));
        render_code_block(ui, palette, input);
    }
    if let Some(output) = &pane.output {
        ui.label(RichText::new("Output:").small().color(palette.text_muted));
        render_code_block(ui, palette, output);
    }

    // Integer panes stay static; formatting effects are not recomputed from
    // the live value.
    if option.kind == OptionKind::Integer {
        ui.label(
            RichText::new("Static example; output is not recomputed for the entered value.")
                .small()
                .color(palette.text_muted),
        );
    }
}

fn render_code_block(ui: &mut egui::Ui, palette: &Palette, code: &str) {
    egui::Frame::NONE
        .fill(palette.bg_code)
        .corner_radius(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                RichText::new(code)
                    .monospace()
                    .size(12.0)
                    .color(palette.text_dim),
            );
        });
}
