//! Example-pane selection.
//!
//! Decides which static before/after strings an option card displays for
//! the current control value. Select options show the matching choice's
//! pair, falling back to the descriptor-level material; boolean options pick
//! one of two alternate outputs; integer panes are static.

use crate::catalog::{OptionDescriptor, OptionKind, RawValue};

/// Example material selected for display in an option card.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamplePane {
    pub input: Option<String>,
    pub output: Option<String>,
    pub note: Option<String>,
    pub language: String,
}

impl ExamplePane {
    pub fn has_content(&self) -> bool {
        self.input.is_some() || self.output.is_some() || self.note.is_some()
    }
}

/// Pick the example pane for an option's current control value.
pub fn select_example(option: &OptionDescriptor, raw: &RawValue) -> ExamplePane {
    let examples = &option.examples;
    let (input, output, note) = match (option.kind, raw) {
        (OptionKind::Select, RawValue::Text(text)) => match option.choice(text) {
            Some(choice) => (
                choice.example_input.clone().or_else(|| examples.input.clone()),
                choice.example_output.clone().or_else(|| examples.output.clone()),
                choice.note.clone().or_else(|| examples.note.clone()),
            ),
            None => (examples.input.clone(), examples.output.clone(), examples.note.clone()),
        },
        (OptionKind::Boolean, RawValue::Toggle(on)) => (
            examples.input.clone(),
            if *on {
                examples.output_true.clone()
            } else {
                examples.output_false.clone()
            },
            examples.note.clone(),
        ),
        // Integer panes show the static pair unmodified; formatting effects
        // are not recomputed from the live value.
        _ => (examples.input.clone(), examples.output.clone(), examples.note.clone()),
    };

    ExamplePane {
        input,
        output,
        note,
        language: examples.language.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Choice;

    fn quote_props() -> OptionDescriptor {
        OptionDescriptor::select(
            "quoteProps",
            "Quote Props",
            "When to quote props.",
            "as-needed",
            vec![
                Choice::new("as-needed", "As Needed").with_example("in-a", "out-a"),
                Choice::new("consistent", "Consistent"),
            ],
        )
        .example_input("fallback-in")
        .example_output("fallback-out")
        .example_note("general note")
    }

    #[test]
    fn test_select_uses_matching_choice_pair() {
        let pane = select_example(&quote_props(), &RawValue::from("as-needed"));
        assert_eq!(pane.input.as_deref(), Some("in-a"));
        assert_eq!(pane.output.as_deref(), Some("out-a"));
        assert_eq!(pane.note.as_deref(), Some("general note"));
    }

    #[test]
    fn test_select_falls_back_to_descriptor_pair() {
        let pane = select_example(&quote_props(), &RawValue::from("consistent"));
        assert_eq!(pane.input.as_deref(), Some("fallback-in"));
        assert_eq!(pane.output.as_deref(), Some("fallback-out"));
    }

    #[test]
    fn test_select_with_no_matching_choice_shows_descriptor_material() {
        let pane = select_example(&quote_props(), &RawValue::from("mystery"));
        assert_eq!(pane.input.as_deref(), Some("fallback-in"));
        assert_eq!(pane.output.as_deref(), Some("fallback-out"));
    }

    #[test]
    fn test_numeric_choice_matches_string_equivalently() {
        let option = OptionDescriptor::select(
            "printWidth",
            "Print Width",
            "Wrap column.",
            80,
            vec![Choice::new(80, "80").with_example("in-80", "out-80")],
        );
        let pane = select_example(&option, &RawValue::from("80"));
        assert_eq!(pane.output.as_deref(), Some("out-80"));
    }

    #[test]
    fn test_boolean_output_follows_toggle() {
        let option = OptionDescriptor::boolean("semi", "Semicolons", "Semis.", true)
            .example_input("input")
            .example_outputs("with-semi", "without-semi");

        let on = select_example(&option, &RawValue::Toggle(true));
        assert_eq!(on.output.as_deref(), Some("with-semi"));

        let off = select_example(&option, &RawValue::Toggle(false));
        assert_eq!(off.output.as_deref(), Some("without-semi"));
        assert_eq!(off.input.as_deref(), Some("input"));
    }

    #[test]
    fn test_integer_pane_is_static() {
        let option = OptionDescriptor::integer("tabWidth", "Tab Width", "Indent.", 2)
            .example_input("in")
            .example_output("out");
        let pane = select_example(&option, &RawValue::from("8"));
        assert_eq!(pane.input.as_deref(), Some("in"));
        assert_eq!(pane.output.as_deref(), Some("out"));
    }

    #[test]
    fn test_language_tag_is_carried() {
        let option = OptionDescriptor::boolean("jsxSingleQuote", "JSX Quotes", "Quotes.", false)
            .language("jsx");
        let pane = select_example(&option, &RawValue::Toggle(false));
        assert_eq!(pane.language, "jsx");
        assert!(!pane.has_content());
    }
}
