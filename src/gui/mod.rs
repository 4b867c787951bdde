//! GUI module for the interactive configurator
//!
//! Renders one card per catalog option (control + before/after example),
//! keeps a live JSON preview of the synthesized configuration in a side
//! panel, and writes `.prettierrc.json` on demand. Control changes travel
//! over an mpsc channel to the update loop, which re-runs synthesis in
//! full; synthesis is pure and linear in the schema, so full recomputation
//! per change is cheap.

pub mod activity;
pub mod app;
mod app_eframe;
mod app_render;
mod app_theme;
pub mod cards;
mod output_panel;
mod runner;
pub mod theme;

pub use activity::{LogEvent, LogEventKind};
pub use app::{ConfiguratorApp, ControlEvent, ControlState};
pub use runner::run_gui;
