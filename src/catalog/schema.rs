use std::collections::HashSet;

use super::descriptor::{OptionDescriptor, OptionKind};
use super::value::ConfigValue;

/// Error type for schema validation
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate option id: {0}")]
    DuplicateId(String),

    #[error("select option '{0}' has no choices")]
    EmptyChoices(String),

    #[error("default value of select option '{0}' is not among its choices")]
    DefaultNotInChoices(String),

    #[error("option '{id}' declares kind {kind} but its default is {found}")]
    MismatchedDefault {
        id: String,
        kind: OptionKind,
        found: &'static str,
    },

    #[error("option '{0}' is not a select but declares choices")]
    UnexpectedChoices(String),
}

/// A validated, ordered list of option descriptors.
///
/// Construction enforces the catalog invariants: unique ids, defaults typed
/// to their kind, and select defaults present among the declared choices.
/// The order of descriptors is the order of keys in the generated
/// configuration.
#[derive(Debug, Clone)]
pub struct Schema {
    options: Vec<OptionDescriptor>,
}

impl Schema {
    pub fn new(options: Vec<OptionDescriptor>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.id.as_str()) {
                return Err(SchemaError::DuplicateId(option.id.clone()));
            }
            validate_option(option)?;
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    pub fn get(&self, id: &str) -> Option<&OptionDescriptor> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.options.iter()
    }
}

fn validate_option(option: &OptionDescriptor) -> Result<(), SchemaError> {
    let expected = match option.kind {
        OptionKind::Integer => matches!(option.default_value, ConfigValue::Int(_)),
        OptionKind::Boolean => matches!(option.default_value, ConfigValue::Bool(_)),
        // Select defaults may be strings or numbers.
        OptionKind::Select => !matches!(option.default_value, ConfigValue::Bool(_)),
    };
    if !expected {
        return Err(SchemaError::MismatchedDefault {
            id: option.id.clone(),
            kind: option.kind,
            found: value_type_name(&option.default_value),
        });
    }

    match option.kind {
        OptionKind::Select => {
            if option.choices.is_empty() {
                return Err(SchemaError::EmptyChoices(option.id.clone()));
            }
            if !option
                .choices
                .iter()
                .any(|c| c.value == option.default_value)
            {
                return Err(SchemaError::DefaultNotInChoices(option.id.clone()));
            }
        }
        OptionKind::Integer | OptionKind::Boolean => {
            if !option.choices.is_empty() {
                return Err(SchemaError::UnexpectedChoices(option.id.clone()));
            }
        }
    }

    Ok(())
}

fn value_type_name(value: &ConfigValue) -> &'static str {
    match value {
        ConfigValue::Bool(_) => "a boolean",
        ConfigValue::Int(_) => "a number",
        ConfigValue::Str(_) => "a string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Choice;

    fn semi() -> OptionDescriptor {
        OptionDescriptor::boolean("semi", "Semicolons", "Print semicolons.", true)
    }

    #[test]
    fn test_valid_schema() {
        let schema = Schema::new(vec![
            semi(),
            OptionDescriptor::select(
                "endOfLine",
                "End of Line",
                "Line ending.",
                "lf",
                vec![Choice::new("lf", "LF"), Choice::new("crlf", "CRLF")],
            ),
        ])
        .unwrap();
        assert_eq!(schema.len(), 2);
        assert!(schema.get("semi").is_some());
        assert!(schema.get("nope").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Schema::new(vec![semi(), semi()]).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateId(id) if id == "semi"));
    }

    #[test]
    fn test_select_default_must_be_a_choice() {
        let err = Schema::new(vec![OptionDescriptor::select(
            "quoteProps",
            "Quote Props",
            "When to quote props.",
            "as-needed",
            vec![Choice::new("consistent", "Consistent")],
        )])
        .unwrap_err();
        assert!(matches!(err, SchemaError::DefaultNotInChoices(_)));
    }

    #[test]
    fn test_select_needs_choices() {
        let err = Schema::new(vec![OptionDescriptor::select(
            "quoteProps",
            "Quote Props",
            "When to quote props.",
            "as-needed",
            vec![],
        )])
        .unwrap_err();
        assert!(matches!(err, SchemaError::EmptyChoices(_)));
    }

    #[test]
    fn test_mismatched_default_rejected() {
        let mut option = OptionDescriptor::boolean("semi", "Semicolons", "Semis.", true);
        option.default_value = ConfigValue::Int(1);
        let err = Schema::new(vec![option]).unwrap_err();
        assert!(matches!(err, SchemaError::MismatchedDefault { .. }));
    }

    #[test]
    fn test_choices_on_non_select_rejected() {
        let mut option = semi();
        option.choices.push(Choice::new(true, "Yes"));
        let err = Schema::new(vec![option]).unwrap_err();
        assert!(matches!(err, SchemaError::UnexpectedChoices(_)));
    }
}
