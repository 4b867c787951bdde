//! The option catalog: descriptors for every configurable Prettier setting.
//!
//! The catalog is read-only data loaded once at startup. It drives both the
//! rendered controls and the configuration synthesis rules: each descriptor
//! carries its control kind, typed default, selectable choices, and the
//! before/after example material shown in its card.

mod builtin;
mod descriptor;
mod schema;
mod value;

pub use builtin::builtin;
pub use descriptor::{Choice, ExampleSet, OptionDescriptor, OptionKind};
pub use schema::{Schema, SchemaError};
pub use value::{ConfigValue, RawValue};
