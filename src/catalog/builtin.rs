//! The built-in Prettier option catalog.
//!
//! One descriptor per supported setting, in the order the cards are shown
//! and the order keys appear in the generated configuration. Example code is
//! static before/after material; it is not recomputed from the live values.

use once_cell::sync::Lazy;

use super::descriptor::{Choice, OptionDescriptor};
use super::schema::Schema;

/// The full built-in option catalog.
pub fn builtin() -> &'static Schema {
    static BUILTIN: Lazy<Schema> = Lazy::new(|| {
        Schema::new(build_options()).expect("built-in option catalog is valid")
    });
    &BUILTIN
}

fn build_options() -> Vec<OptionDescriptor> {
    const LONG_STRING_INPUT: &str = "const veryLongVariableName = \"This is a very long string that will exceed the print width and should be wrapped nicely by Prettier if the print width is set appropriately.\";";

    vec![
        OptionDescriptor::select(
            "printWidth",
            "Print Width",
            "Specify the line length that the printer will wrap on.",
            80,
            vec![
                Choice::new(80, "(default) 80").with_example(
                    LONG_STRING_INPUT,
                    "const veryLongVariableName =\n  \"This is a very long string that will exceed the print width and should be wrapped nicely by Prettier if the print width is set appropriately.\";",
                ),
                Choice::new(100, "100").with_example(LONG_STRING_INPUT, LONG_STRING_INPUT),
                Choice::new(120, "120").with_example(LONG_STRING_INPUT, LONG_STRING_INPUT),
            ],
        )
        .always_include()
        .example_note("Output depends on the chosen printWidth. Example for printWidth: 80."),

        OptionDescriptor::select(
            "tabWidth",
            "Tab Width",
            "Specify the number of spaces per indentation-level.",
            2,
            vec![
                Choice::new(2, "(default) 2").with_example(
                    "function example() {\n  // This line will be indented\n  console.log(\"Hello\");\n}",
                    "function example() {\n  // This line will be indented\n  console.log(\"Hello\");\n}",
                ),
                Choice::new(4, "4").with_example(
                    "function example() {\n    // This line will be indented\n    console.log(\"Hello\");\n}",
                    "function example() {\n    // This line will be indented\n    console.log(\"Hello\");\n}",
                ),
                Choice::new(8, "8").with_example(
                    "function example() {\n        // This line will be indented\n        console.log(\"Hello\");\n}",
                    "function example() {\n        // This line will be indented\n        console.log(\"Hello\");\n}",
                ),
            ],
        )
        .always_include()
        .example_note("Output shows indentation based on tabWidth. Example for tabWidth: 2."),

        OptionDescriptor::boolean(
            "useTabs",
            "Use Tabs",
            "Indent lines with tabs instead of spaces.",
            false,
        )
        .example_input("function example() {\n    console.log(\"Indented line\");\n}")
        .example_outputs(
            "function example() {\n\tconsole.log(\"Indented line\"); // Indented with a tab\n}",
            "function example() {\n  console.log(\"Indented line\"); // Indented with spaces (e.g., 2 if tabWidth is 2)\n}",
        ),

        OptionDescriptor::boolean(
            "semi",
            "Semicolons",
            "Print semicolons at the ends of statements.",
            true,
        )
        .example_input("const foo = 1\nconst bar = 2")
        .example_outputs("const foo = 1;\nconst bar = 2;", "const foo = 1\nconst bar = 2"),

        OptionDescriptor::boolean(
            "singleQuote",
            "Single Quotes",
            "Use single quotes instead of double quotes for strings.",
            false,
        )
        .example_input("const greeting = \"Hello, world!\";")
        .example_outputs(
            "const greeting = 'Hello, world!';",
            "const greeting = \"Hello, world!\";",
        ),

        OptionDescriptor::select(
            "quoteProps",
            "Quote Props",
            "Change when object properties are quoted.",
            "as-needed",
            vec![
                Choice::new("as-needed", "As Needed").with_example(
                    "const obj = {\n  foo: 1,\n  \"bar-baz\": 2,\n  \"1q\": 3\n};",
                    "const obj = {\n  foo: 1,\n  \"bar-baz\": 2,\n  \"1q\": 3\n};",
                ),
                Choice::new("consistent", "Consistent").with_example(
                    "const obj = {\n  foo: 1,\n  \"bar-baz\": 2,\n  \"1q\": 3\n};",
                    "const obj = {\n  \"foo\": 1,\n  \"bar-baz\": 2,\n  \"1q\": 3\n}; // If any prop needs quotes, all get quotes",
                ),
                Choice::new("preserve", "Preserve").with_example(
                    "const obj = {\n  foo: 1,\n  \"bar-baz\": 2,\n  '1q': 3\n};",
                    "const obj = {\n  foo: 1,\n  \"bar-baz\": 2,\n  '1q': 3\n}; // Respects input quoting",
                ),
            ],
        ),

        OptionDescriptor::boolean(
            "jsxSingleQuote",
            "JSX Single Quotes",
            "Use single quotes instead of double quotes in JSX attributes.",
            false,
        )
        .language("jsx")
        .example_input("<div className=\"container\" data-custom=\"value\">Hello</div>;")
        .example_outputs(
            "<div className='container' data-custom='value'>Hello</div>;",
            "<div className=\"container\" data-custom=\"value\">Hello</div>;",
        ),

        OptionDescriptor::select(
            "trailingComma",
            "Trailing Commas",
            "Print trailing commas where valid in multi-line JSON5 & ES5.",
            "es5",
            vec![
                Choice::new("es5", "ES5").with_example(
                    "const obj = {\n  foo: 1,\n  bar: 2\n};\nconst arr = [\n  1,\n  2\n];",
                    "const obj = {\n  foo: 1,\n  bar: 2,\n};\nconst arr = [\n  1,\n  2,\n];",
                ),
                Choice::new("none", "None").with_example(
                    "const obj = {\n  foo: 1,\n  bar: 2\n};\nconst arr = [\n  1,\n  2\n];",
                    "const obj = {\n  foo: 1,\n  bar: 2\n};\nconst arr = [\n  1,\n  2\n];",
                ),
                Choice::new("all", "All").with_example(
                    "function greet(\n  name,\n  age\n) {}\ngreet(\n  \"Prettier\",\n  5\n);",
                    "function greet(\n  name,\n  age,\n) {}\ngreet(\n  \"Prettier\",\n  5,\n); // Also for function parameters/arguments",
                ),
            ],
        ),

        OptionDescriptor::boolean(
            "bracketSpacing",
            "Bracket Spacing",
            "Print spaces between brackets in object literals.",
            true,
        )
        .example_input("const obj = {foo: 1, bar: 2};")
        .example_outputs(
            "const obj = { foo: 1, bar: 2 };",
            "const obj = {foo: 1, bar: 2};",
        ),

        OptionDescriptor::boolean(
            "jsxBracketSameLine",
            "JSX Bracket Same Line",
            "Put the `>` of a multi-line JSX element at the end of the last line instead of on its own line.",
            false,
        )
        .language("jsx")
        .example_input("<button\n  className=\"btn\"\n  type=\"button\"\n>\n  Click Me\n</button>")
        .example_outputs(
            "<button\n  className=\"btn\"\n  type=\"button\">\n  Click Me\n</button>",
            "<button\n  className=\"btn\"\n  type=\"button\"\n>\n  Click Me\n</button>",
        ),

        OptionDescriptor::select(
            "arrowParens",
            "Arrow Function Parentheses",
            "Include parentheses around a sole arrow function parameter.",
            "always",
            vec![
                Choice::new("always", "Always")
                    .with_example("const fn = x => x * 2;", "const fn = (x) => x * 2;"),
                Choice::new("avoid", "Avoid")
                    .with_example("const fn = (x) => x * 2;", "const fn = x => x * 2;"),
            ],
        ),

        OptionDescriptor::select(
            "endOfLine",
            "End of Line",
            "Control the line ending used (e.g., lf, crlf, cr, auto).",
            "lf",
            vec![
                Choice::new("lf", "LF (\\n)")
                    .with_note("Lines end with Line Feed. Common on Linux/macOS."),
                Choice::new("crlf", "CRLF (\\r\\n)")
                    .with_note("Lines end with Carriage Return + Line Feed. Common on Windows."),
                Choice::new("cr", "CR (\\r)").with_note("Lines end with Carriage Return. Rarely used."),
                Choice::new("auto", "Auto").with_note(
                    "Maintains existing line endings (mixed values are normalized to the first one found).",
                ),
            ],
        )
        .example_note(
            "This primarily affects file compatibility across OS. Visual example isn't very illustrative for code blocks.",
        ),

        OptionDescriptor::select(
            "htmlWhitespaceSensitivity",
            "HTML Whitespace Sensitivity",
            "Specify how to handle whitespace in HTML (css, strict, ignore).",
            "css",
            vec![
                Choice::new("css", "CSS").with_example(
                    "<div>\n  <span>Hello</span>\n  <span>World</span>\n</div>",
                    "<div>\n  <span>Hello</span>\n  <span>World</span>\n</div> <!-- Respects CSS display property -->",
                ),
                Choice::new("strict", "Strict").with_example(
                    "<div> <span>Hello</span> <span>World</span> </div>",
                    "<div><span>Hello</span> <span>World</span></div> <!-- Collapses all whitespace -->",
                ),
                Choice::new("ignore", "Ignore").with_example(
                    "<div>\n  <span>Hello</span>\n  \n  <span>World</span>\n</div>",
                    "<div>\n  <span>Hello</span>\n  <span>World</span>\n</div> <!-- Collapses whitespace like 'strict' but also handles newlines differently -->",
                ),
            ],
        )
        .language("html")
        .example_note("Affects how spacing and newlines in HTML are treated by Prettier."),

        OptionDescriptor::select(
            "proseWrap",
            "Prose Wrap (Markdown)",
            "How to wrap prose in Markdown files (always, never, preserve).",
            "preserve",
            vec![
                Choice::new("always", "Always").with_example(
                    "This is a very long sentence in a Markdown file that should be wrapped by Prettier if printWidth is configured.",
                    "This is a very long\nsentence in a Markdown\nfile that should be\nwrapped by Prettier if\nprintWidth is configured. (Conceptual example for low printWidth)",
                ),
                Choice::new("never", "Never").with_example(
                    "This is a very long sentence in a Markdown file that should not be wrapped by Prettier.",
                    "This is a very long sentence in a Markdown file that should not be wrapped by Prettier.",
                ),
                Choice::new("preserve", "Preserve").with_example(
                    "This is a very long sentence\nin a Markdown file that Prettier\nshould preserve the existing wrapping for.",
                    "This is a very long sentence\nin a Markdown file that Prettier\nshould preserve the existing wrapping for.",
                ),
            ],
        )
        .language("markdown")
        .example_note("Most effective when `printWidth` is also configured for Markdown."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ConfigValue, OptionKind};

    #[test]
    fn test_builtin_catalog_is_valid() {
        let schema = builtin();
        assert_eq!(schema.len(), 14);
    }

    #[test]
    fn test_commonly_set_options_are_always_included() {
        let schema = builtin();
        let flagged: Vec<&str> = schema
            .iter()
            .filter(|o| o.always_include)
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(flagged, ["printWidth", "tabWidth"]);
    }

    #[test]
    fn test_print_width_choices_are_numeric() {
        let print_width = builtin().get("printWidth").unwrap();
        assert_eq!(print_width.kind, OptionKind::Select);
        assert!(print_width.default_value.is_numeric());
        for choice in &print_width.choices {
            assert!(matches!(choice.value, ConfigValue::Int(_)));
        }
    }

    #[test]
    fn test_boolean_options_have_both_outputs() {
        for option in builtin().iter() {
            if option.kind == OptionKind::Boolean {
                assert!(option.examples.output_true.is_some(), "{}", option.id);
                assert!(option.examples.output_false.is_some(), "{}", option.id);
            }
        }
    }
}
