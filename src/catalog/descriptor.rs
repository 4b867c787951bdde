use serde::{Deserialize, Serialize};
use std::fmt;

use super::value::ConfigValue;

/// The control rendered for an option, and the parsing rules that go with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Free-form whole-number input.
    Integer,
    /// Checkbox toggle.
    Boolean,
    /// Dropdown over a fixed list of choices.
    Select,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Integer => write!(f, "integer"),
            OptionKind::Boolean => write!(f, "boolean"),
            OptionKind::Select => write!(f, "select"),
        }
    }
}

/// One selectable value of a `Select` option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// The value written to the configuration when this choice is selected.
    pub value: ConfigValue,
    /// User-facing label shown in the dropdown.
    pub label: String,
    /// Example code before formatting, overriding the descriptor's.
    pub example_input: Option<String>,
    /// Example code after formatting, overriding the descriptor's.
    pub example_output: Option<String>,
    /// Note shown with this choice's example.
    pub note: Option<String>,
}

impl Choice {
    pub fn new(value: impl Into<ConfigValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            example_input: None,
            example_output: None,
            note: None,
        }
    }

    pub fn with_example(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.example_input = Some(input.into());
        self.example_output = Some(output.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Descriptor-level example material shown in an option card.
///
/// Boolean options carry a pair of alternate outputs; integer options a
/// single static pair; select options use this as the fallback when the
/// selected choice has no example of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleSet {
    pub input: Option<String>,
    pub output: Option<String>,
    pub output_true: Option<String>,
    pub output_false: Option<String>,
    pub note: Option<String>,
    /// Language tag for the code blocks (display only).
    pub language: String,
}

impl Default for ExampleSet {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            output_true: None,
            output_false: None,
            note: None,
            language: "javascript".to_string(),
        }
    }
}

/// Describes one configurable formatter setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDescriptor {
    /// Unique id, also the key used in the generated configuration.
    pub id: String,
    /// User-facing title.
    pub title: String,
    /// What the option does.
    pub description: String,
    pub kind: OptionKind,
    /// Baseline value; options equal to it are normally omitted from output.
    pub default_value: ConfigValue,
    /// Permitted values (only for `Select`).
    pub choices: Vec<Choice>,
    /// Write this option whenever it has a valid value, even when it equals
    /// the default. Used for a small set of commonly set options.
    pub always_include: bool,
    pub examples: ExampleSet,
}

impl OptionDescriptor {
    pub fn integer(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        default: i64,
    ) -> Self {
        Self::new(id, title, description, OptionKind::Integer, ConfigValue::Int(default))
    }

    pub fn boolean(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        default: bool,
    ) -> Self {
        Self::new(id, title, description, OptionKind::Boolean, ConfigValue::Bool(default))
    }

    pub fn select(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<ConfigValue>,
        choices: Vec<Choice>,
    ) -> Self {
        let mut option = Self::new(id, title, description, OptionKind::Select, default.into());
        option.choices = choices;
        option
    }

    fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: OptionKind,
        default_value: ConfigValue,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            kind,
            default_value,
            choices: Vec::new(),
            always_include: false,
            examples: ExampleSet::default(),
        }
    }

    pub fn always_include(mut self) -> Self {
        self.always_include = true;
        self
    }

    /// Language tag for this option's example blocks.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.examples.language = language.into();
        self
    }

    pub fn example_input(mut self, input: impl Into<String>) -> Self {
        self.examples.input = Some(input.into());
        self
    }

    pub fn example_output(mut self, output: impl Into<String>) -> Self {
        self.examples.output = Some(output.into());
        self
    }

    /// Alternate outputs for a boolean option, chosen by its current value.
    pub fn example_outputs(
        mut self,
        when_true: impl Into<String>,
        when_false: impl Into<String>,
    ) -> Self {
        self.examples.output_true = Some(when_true.into());
        self.examples.output_false = Some(when_false.into());
        self
    }

    pub fn example_note(mut self, note: impl Into<String>) -> Self {
        self.examples.note = Some(note.into());
        self
    }

    /// Find the choice whose value matches the raw control text.
    ///
    /// Comparison is string-equivalent: numeric choice values match their
    /// decimal rendering.
    pub fn choice(&self, raw_text: &str) -> Option<&Choice> {
        self.choices
            .iter()
            .find(|c| c.value.as_control_text() == raw_text)
    }
}
