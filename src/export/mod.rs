//! Emission of the generated `.prettierrc.json`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::synth::ConfigMapping;

/// Standard Prettier configuration filename.
pub const CONFIG_FILE_NAME: &str = ".prettierrc.json";

/// Advisory shown when an export is attempted with nothing selected.
pub const EMPTY_CONFIG_MESSAGE: &str = "Configuration is empty. Please make some selections first.";

/// Result of an export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    /// The mapping was empty; no file was touched.
    RefusedEmpty,
}

/// Write the configuration into `dir/.prettierrc.json`.
///
/// An empty mapping is refused without touching the filesystem - the caller
/// reports [`EMPTY_CONFIG_MESSAGE`] to the user. The write itself is atomic
/// (temp file + rename) under an exclusive lock, so a crash cannot leave a
/// torn config behind.
pub fn write_config_file(mapping: &ConfigMapping, dir: &Path) -> Result<ExportOutcome> {
    if mapping.is_empty() {
        return Ok(ExportOutcome::RefusedEmpty);
    }

    let path = dir.join(CONFIG_FILE_NAME);
    write_atomic(&path, mapping.to_json_pretty().as_bytes())?;
    Ok(ExportOutcome::Written(path))
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    // Lock file is separate from the target to survive the rename.
    let lock_path = path.with_extension("json.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire config lock")?;

    let temp_path = path.with_extension("json.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content)
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    // Lock is released when lock_file is dropped.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OptionDescriptor, RawValue, Schema};
    use crate::synth::synthesize;

    fn non_empty_mapping() -> ConfigMapping {
        let schema = Schema::new(vec![OptionDescriptor::boolean(
            "semi",
            "Semicolons",
            "Semis.",
            true,
        )])
        .unwrap();
        synthesize(&schema, |_| Some(RawValue::Toggle(false)))
    }

    #[test]
    fn test_empty_mapping_is_refused_without_file_action() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = write_config_file(&ConfigMapping::default(), dir.path()).unwrap();
        assert_eq!(outcome, ExportOutcome::RefusedEmpty);
        assert!(!dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_written_file_matches_serialization() {
        let dir = tempfile::tempdir().unwrap();
        let mapping = non_empty_mapping();

        let outcome = write_config_file(&mapping, dir.path()).unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert_eq!(outcome, ExportOutcome::Written(path.clone()));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, mapping.to_json_pretty());
        assert_eq!(content, "{\n  \"semi\": false\n}");
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "stale").unwrap();

        write_config_file(&non_empty_mapping(), dir.path()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_ne!(content, "stale");
    }
}
