//! Integration tests for config file emission.

use std::collections::HashMap;

use prettyrc::catalog::{self, RawValue};
use prettyrc::export::{CONFIG_FILE_NAME, ExportOutcome, write_config_file};
use prettyrc::{ConfigMapping, synthesize};

#[test]
fn test_empty_mapping_download_guard() {
    let dir = tempfile::tempdir().unwrap();

    let outcome = write_config_file(&ConfigMapping::default(), dir.path()).unwrap();
    assert_eq!(outcome, ExportOutcome::RefusedEmpty);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_written_artifact_is_the_serialized_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let schema = catalog::builtin();

    let values = HashMap::from([
        ("semi", RawValue::Toggle(false)),
        ("printWidth", RawValue::from("100")),
    ]);
    let mapping = synthesize(schema, |id| values.get(id).cloned());

    let outcome = write_config_file(&mapping, dir.path()).unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    assert_eq!(outcome, ExportOutcome::Written(path.clone()));

    let content = std::fs::read_to_string(path).unwrap();
    assert_eq!(content, mapping.to_json_pretty());
    assert_eq!(content, "{\n  \"printWidth\": 100,\n  \"semi\": false\n}");
}
