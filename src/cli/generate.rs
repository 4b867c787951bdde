//! Generate command implementation
//!
//! Headless synthesis: `--set id=value` pairs form the value provider, and
//! anything unset is treated as absent (skipped entirely, exactly like an
//! option without a rendered control).

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use prettyrc::catalog::{self, OptionKind, RawValue};
use prettyrc::export::{self, ExportOutcome};
use prettyrc::synthesize;

pub fn generate_command(sets: &[String], write_dir: Option<&Path>) -> Result<()> {
    let schema = catalog::builtin();

    let mut values: HashMap<String, RawValue> = HashMap::new();
    for pair in sets {
        let (id, text) = pair
            .split_once('=')
            .with_context(|| format!("Invalid --set '{}', expected ID=VALUE", pair))?;

        let Some(option) = schema.get(id) else {
            bail!(
                "Unknown option '{}'. Available options: {}",
                id,
                schema
                    .iter()
                    .map(|o| o.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        };

        let raw = match option.kind {
            OptionKind::Boolean => match text {
                "true" => RawValue::Toggle(true),
                "false" => RawValue::Toggle(false),
                other => bail!("Option '{}' expects true or false, got '{}'", id, other),
            },
            OptionKind::Integer | OptionKind::Select => RawValue::Text(text.to_string()),
        };
        values.insert(id.to_string(), raw);
    }

    let mapping = synthesize(schema, |id| values.get(id).cloned());
    println!("{}", mapping.to_json_pretty());

    if let Some(dir) = write_dir {
        match export::write_config_file(&mapping, dir)? {
            ExportOutcome::Written(path) => {
                info!("Wrote {}", path.display());
            }
            ExportOutcome::RefusedEmpty => {
                eprintln!("{}", export::EMPTY_CONFIG_MESSAGE);
            }
        }
    }

    Ok(())
}
