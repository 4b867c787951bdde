//! Main application state for the configurator GUI.
//!
//! The app owns the live control values (the value provider behind
//! synthesis), the latest synthesized mapping, and the injected preference
//! store. Cards notify changes through an mpsc channel; the update loop
//! drains it and re-runs synthesis.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

use crate::catalog::{ConfigValue, OptionDescriptor, OptionKind, RawValue, Schema};
use crate::export::{self, ExportOutcome};
use crate::prefs::{Prefs, PrefsStore, ThemeMode};
use crate::synth::{ConfigMapping, synthesize};

use super::activity::LogEvent;

/// Live state of one rendered control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlState {
    /// Text buffer of a whole-number input.
    Number(String),
    /// Checkbox state.
    Toggle(bool),
    /// Raw value of the selected dropdown choice.
    Select(String),
}

impl ControlState {
    /// Initial state for an option: its default value.
    pub fn for_option(option: &OptionDescriptor) -> Self {
        match option.kind {
            OptionKind::Integer => ControlState::Number(option.default_value.as_control_text()),
            OptionKind::Boolean => {
                ControlState::Toggle(option.default_value == ConfigValue::Bool(true))
            }
            OptionKind::Select => ControlState::Select(option.default_value.as_control_text()),
        }
    }

    /// The value this control reports to synthesis.
    pub fn raw_value(&self) -> RawValue {
        match self {
            ControlState::Number(text) | ControlState::Select(text) => {
                RawValue::Text(text.clone())
            }
            ControlState::Toggle(on) => RawValue::Toggle(*on),
        }
    }
}

/// Change notification sent by a card when its control value changes.
#[derive(Debug, Clone)]
pub struct ControlEvent {
    pub option_id: String,
}

/// Main application state
pub struct ConfiguratorApp {
    /// Directory the generated config is written to.
    work_dir: PathBuf,
    /// The option catalog driving the cards.
    pub(crate) schema: &'static Schema,
    /// Live control values, keyed by option id.
    pub(crate) controls: HashMap<String, ControlState>,
    /// Cards push change events here.
    pub(crate) change_tx: Sender<ControlEvent>,
    change_rx: Receiver<ControlEvent>,
    /// Latest synthesis result.
    pub(crate) mapping: ConfigMapping,
    /// Rendered JSON shown in the output panel.
    pub(crate) rendered: String,
    pub(crate) theme: ThemeMode,
    prefs_store: PrefsStore,
    /// Status message under the output panel buttons (message, is_error).
    pub(crate) status: Option<(String, bool)>,
    /// Activity log events.
    pub(crate) logs: Vec<LogEvent>,
}

impl ConfiguratorApp {
    pub fn new(work_dir: PathBuf, schema: &'static Schema, prefs_store: PrefsStore) -> Self {
        let (change_tx, change_rx) = mpsc::channel();
        let controls = schema
            .iter()
            .map(|option| (option.id.clone(), ControlState::for_option(option)))
            .collect();
        let theme = prefs_store.load().theme;

        let mut app = Self {
            work_dir,
            schema,
            controls,
            change_tx,
            change_rx,
            mapping: ConfigMapping::default(),
            rendered: String::new(),
            theme,
            prefs_store,
            status: None,
            logs: Vec::new(),
        };
        app.regenerate();
        app
    }

    /// Drain pending control change events. Returns true if any arrived.
    pub(crate) fn drain_change_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.change_rx.try_recv() {
            debug!("Option changed: {}", event.option_id);
            changed = true;
        }
        changed
    }

    /// Re-run synthesis over the full schema and refresh the rendered JSON.
    pub(crate) fn regenerate(&mut self) {
        let controls = &self.controls;
        self.mapping = synthesize(self.schema, |id| {
            controls.get(id).map(ControlState::raw_value)
        });
        self.rendered = self.mapping.to_json_pretty();
    }

    /// Write the current configuration into the working directory.
    pub(crate) fn save_config(&mut self) {
        match export::write_config_file(&self.mapping, &self.work_dir) {
            Ok(ExportOutcome::Written(path)) => {
                self.status = Some((format!("Wrote {}", path.display()), false));
                self.logs
                    .push(LogEvent::system(format!("Wrote {}", path.display())));
            }
            Ok(ExportOutcome::RefusedEmpty) => {
                // Advisory, not an error: nothing was selected.
                self.status = Some((export::EMPTY_CONFIG_MESSAGE.to_string(), false));
            }
            Err(e) => {
                self.status = Some((format!("Save failed: {}", e), true));
                self.logs.push(LogEvent::error(format!("Save failed: {}", e)));
            }
        }
    }

    /// Flip the theme and persist the choice.
    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let name = if self.theme.is_dark() { "dark" } else { "light" };

        let prefs = Prefs { theme: self.theme };
        if let Err(e) = self.prefs_store.save(&prefs) {
            tracing::warn!("Failed to save theme preference: {}", e);
            self.logs.push(LogEvent::error(format!(
                "Failed to save theme preference: {}",
                e
            )));
        } else {
            self.logs
                .push(LogEvent::system(format!("Switched to {} theme", name)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn app_with_temp_prefs(dir: &std::path::Path) -> ConfiguratorApp {
        ConfiguratorApp::new(
            dir.to_path_buf(),
            catalog::builtin(),
            PrefsStore::at(dir.join("prefs.toml")),
        )
    }

    #[test]
    fn test_controls_initialize_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with_temp_prefs(dir.path());

        assert_eq!(app.controls.len(), app.schema.len());
        assert_eq!(
            app.controls.get("semi"),
            Some(&ControlState::Toggle(true))
        );
        assert_eq!(
            app.controls.get("printWidth"),
            Some(&ControlState::Select("80".to_string()))
        );
    }

    #[test]
    fn test_initial_mapping_contains_only_always_included_options() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with_temp_prefs(dir.path());

        // Everything is at its default, so only printWidth and tabWidth
        // (flagged always_include) survive.
        let keys: Vec<&str> = app.mapping.keys().collect();
        assert_eq!(keys, ["printWidth", "tabWidth"]);
        assert_eq!(app.rendered, app.mapping.to_json_pretty());
    }

    #[test]
    fn test_regenerate_tracks_control_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_temp_prefs(dir.path());

        app.controls
            .insert("semi".to_string(), ControlState::Toggle(false));
        app.regenerate();
        assert_eq!(
            app.mapping.get("semi"),
            Some(&crate::catalog::ConfigValue::Bool(false))
        );
    }

    #[test]
    fn test_save_writes_into_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_temp_prefs(dir.path());

        app.save_config();
        assert!(dir.path().join(export::CONFIG_FILE_NAME).exists());
        let (message, is_error) = app.status.clone().unwrap();
        assert!(message.starts_with("Wrote "));
        assert!(!is_error);
    }
}
