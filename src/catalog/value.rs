use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed value as it appears in the generated configuration.
///
/// Serializes with its natural JSON representation: numeric options must
/// come out as numbers, not strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl ConfigValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ConfigValue::Int(_))
    }

    /// The string a UI control reports for this value.
    ///
    /// Used for string-equivalent comparison between raw control values and
    /// declared choice values.
    pub fn as_control_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(n) => write!(f, "{}", n),
            ConfigValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

/// A value as read from a UI control, before typing.
///
/// Integer and select controls report their current text; boolean controls
/// report their toggle state. Parsing into a [`ConfigValue`] happens during
/// synthesis and may silently fail (the option is then omitted).
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Text buffer of an integer or select control.
    Text(String),
    /// State of a boolean toggle.
    Toggle(bool),
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Toggle(value)
    }
}
