//! prettyrc - build a Prettier configuration visually
//!
//! prettyrc renders one card per formatter option, previews the effect of
//! each choice with static before/after examples, and synthesizes the
//! current selections into a minimal `.prettierrc.json`: only options that
//! differ from their defaults (or are flagged always-include) are written.
//!
//! ## Structure
//!
//! - [`catalog`]: the read-only option schema (descriptors, choices,
//!   example material) and the built-in Prettier table.
//! - [`synth`]: the synthesis algorithm mapping live control values onto
//!   the minimal configuration object.
//! - [`preview`]: selection of the example pane an option card displays.
//! - [`export`]: `.prettierrc.json` emission with an empty-config guard.
//! - [`prefs`]: the persisted theme preference store.
//! - [`gui`]: the interactive egui configurator.

pub mod catalog;
pub mod export;
pub mod gui;
pub mod prefs;
pub mod preview;
pub mod synth;

pub use catalog::{ConfigValue, OptionDescriptor, OptionKind, RawValue, Schema};
pub use synth::{ConfigMapping, synthesize};
