//! Configuration synthesis.
//!
//! [`synthesize`] maps the current control values onto the minimal
//! configuration object: only options whose value differs from their default
//! (or that are flagged `always_include`) are written. The function is pure
//! and total - values that cannot be parsed are omitted, never reported as
//! errors - so it can be re-run in full on every change event.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::catalog::{ConfigValue, OptionDescriptor, OptionKind, RawValue, Schema};

/// The generated configuration: an ordered id -> typed value mapping.
///
/// Keys follow schema order restricted to the included options, and no key
/// appears more than once. Serializes to a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMapping {
    entries: Vec<(String, ConfigValue)>,
}

impl ConfigMapping {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find_map(|(key, value)| (key == id).then_some(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    fn insert(&mut self, id: &str, value: ConfigValue) {
        if self.get(id).is_none() {
            self.entries.push((id.to_string(), value));
        }
    }

    /// Render the 2-space-indented JSON document shown in the output panel
    /// and written to `.prettierrc.json`. The empty mapping renders as `{}`.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("{}"))
    }
}

impl Serialize for ConfigMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Build the minimal configuration for the current control values.
///
/// `get_value` reports the current raw value of the control for an option
/// id, or `None` when no such control exists (the option is then skipped
/// entirely).
pub fn synthesize<F>(schema: &Schema, get_value: F) -> ConfigMapping
where
    F: Fn(&str) -> Option<RawValue>,
{
    let mut config = ConfigMapping::default();

    for option in schema.iter() {
        let Some(raw) = get_value(&option.id) else {
            continue;
        };
        let Some(value) = typed_value(option, &raw) else {
            continue;
        };
        if include(option, &value) {
            config.insert(&option.id, value);
        }
    }

    config
}

/// Parse a raw control value according to the option's kind.
///
/// Returns `None` when the value cannot be determined: an integer control
/// whose text is not a whole number, or a control whose shape does not match
/// the declared kind. Both are silent validation failures.
fn typed_value(option: &OptionDescriptor, raw: &RawValue) -> Option<ConfigValue> {
    match (option.kind, raw) {
        (OptionKind::Integer, RawValue::Text(text)) => {
            text.trim().parse::<i64>().ok().map(ConfigValue::Int)
        }
        (OptionKind::Boolean, RawValue::Toggle(on)) => Some(ConfigValue::Bool(*on)),
        (OptionKind::Select, RawValue::Text(text)) => Some(select_value(option, text)),
        _ => None,
    }
}

/// Select controls report strings; when the option's default is numeric the
/// raw text is coerced back to a number so the output keeps numeric typing.
/// A value matching no declared choice is accepted as given.
fn select_value(option: &OptionDescriptor, text: &str) -> ConfigValue {
    if option.default_value.is_numeric() {
        if let Ok(n) = text.trim().parse::<i64>() {
            return ConfigValue::Int(n);
        }
    }
    ConfigValue::Str(text.to_string())
}

fn include(option: &OptionDescriptor, value: &ConfigValue) -> bool {
    match option.kind {
        // Omitting a boolean already implies its default, so always_include
        // is not applied here.
        OptionKind::Boolean => *value != option.default_value,
        OptionKind::Integer | OptionKind::Select => {
            option.always_include || *value != option.default_value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Choice;

    fn tab_width() -> OptionDescriptor {
        OptionDescriptor::integer("tabWidth", "Tab Width", "Spaces per indent.", 2)
    }

    #[test]
    fn test_integer_parse_failure_is_omitted() {
        let schema = Schema::new(vec![tab_width()]).unwrap();
        let config = synthesize(&schema, |_| Some(RawValue::from("abc")));
        assert!(config.is_empty());
    }

    #[test]
    fn test_integer_equal_to_default_is_omitted() {
        let schema = Schema::new(vec![tab_width()]).unwrap();
        let config = synthesize(&schema, |_| Some(RawValue::from("2")));
        assert!(config.is_empty());
    }

    #[test]
    fn test_integer_always_include_overrides_default_equality() {
        let schema = Schema::new(vec![tab_width().always_include()]).unwrap();
        let config = synthesize(&schema, |_| Some(RawValue::from("2")));
        assert_eq!(config.get("tabWidth"), Some(&ConfigValue::Int(2)));
    }

    #[test]
    fn test_mismatched_control_shape_is_omitted() {
        let schema = Schema::new(vec![tab_width()]).unwrap();
        let config = synthesize(&schema, |_| Some(RawValue::Toggle(true)));
        assert!(config.is_empty());
    }

    #[test]
    fn test_undeclared_select_value_is_accepted() {
        let schema = Schema::new(vec![OptionDescriptor::select(
            "endOfLine",
            "End of Line",
            "Line ending.",
            "lf",
            vec![Choice::new("lf", "LF"), Choice::new("crlf", "CRLF")],
        )])
        .unwrap();
        let config = synthesize(&schema, |_| Some(RawValue::from("mystery")));
        assert_eq!(
            config.get("endOfLine"),
            Some(&ConfigValue::Str("mystery".to_string()))
        );
    }

    #[test]
    fn test_numeric_select_keeps_numeric_typing_for_unknown_values() {
        let schema = Schema::new(vec![OptionDescriptor::select(
            "printWidth",
            "Print Width",
            "Wrap column.",
            80,
            vec![Choice::new(80, "80"), Choice::new(100, "100")],
        )])
        .unwrap();
        let config = synthesize(&schema, |_| Some(RawValue::from("90")));
        assert_eq!(config.get("printWidth"), Some(&ConfigValue::Int(90)));
    }

    #[test]
    fn test_mapping_serializes_in_insertion_order() {
        let mut mapping = ConfigMapping::default();
        mapping.insert("b", ConfigValue::Int(1));
        mapping.insert("a", ConfigValue::Bool(true));
        assert_eq!(
            mapping.to_json_pretty(),
            "{\n  \"b\": 1,\n  \"a\": true\n}"
        );
    }

    #[test]
    fn test_empty_mapping_serializes_to_empty_object() {
        assert_eq!(ConfigMapping::default().to_json_pretty(), "{}");
    }

    #[test]
    fn test_duplicate_insert_keeps_first_entry() {
        let mut mapping = ConfigMapping::default();
        mapping.insert("a", ConfigValue::Int(1));
        mapping.insert("a", ConfigValue::Int(2));
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("a"), Some(&ConfigValue::Int(1)));
    }
}
