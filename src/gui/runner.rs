//! GUI runner - launches the configurator window.

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::catalog;
use crate::prefs::PrefsStore;

use super::app::ConfiguratorApp;

/// Run the configurator GUI until the window is closed.
pub fn run_gui(work_dir: PathBuf, prefs_store: PrefsStore) -> Result<()> {
    let work_dir = if work_dir.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        work_dir
    };

    info!(
        "Starting configurator (output directory: {})",
        work_dir.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([860.0, 520.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = ConfiguratorApp::new(work_dir, catalog::builtin(), prefs_store);

    eframe::run_native("prettyrc", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
