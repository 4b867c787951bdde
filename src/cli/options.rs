//! Options command implementation
//!
//! Lists the built-in catalog: option ids, kinds, defaults, and choices.

use anyhow::Result;
use serde_json::json;

use prettyrc::catalog::{self, OptionKind};

pub fn options_command(as_json: bool) -> Result<()> {
    let schema = catalog::builtin();

    if as_json {
        let listing: Vec<_> = schema
            .iter()
            .map(|option| {
                json!({
                    "id": option.id,
                    "title": option.title,
                    "kind": option.kind,
                    "default": option.default_value,
                    "always_include": option.always_include,
                    "choices": option
                        .choices
                        .iter()
                        .map(|c| c.value.clone())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for option in schema.iter() {
        let marker = if option.always_include { "*" } else { " " };
        println!(
            "{} {:<28} {:<8} default: {}",
            marker, option.id, option.kind, option.default_value
        );
        if option.kind == OptionKind::Select {
            let choices: Vec<String> = option
                .choices
                .iter()
                .map(|c| c.value.to_string())
                .collect();
            println!("      choices: {}", choices.join(", "));
        }
    }
    println!("\n  * written even when equal to the default");

    Ok(())
}
