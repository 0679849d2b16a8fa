// JSON text as defined in RFC8259, read leniently: single-quoted and bare
// strings, `=`/`=>` after keys, `;` between members, `(...)` arrays, trailing
// separators and elided array elements are all accepted. Output is always
// strict JSON.

pub use error::{Error, Result};
pub use generate::quote;
pub use limits::{DEFAULT_MAX_NESTING_DEPTH, Limits};
pub use parse::{parse_array, parse_object};
pub use tokenizer::Tokenizer;
pub use value::{Array, Object, Value};

mod error;
mod generate;
mod limits;
pub mod parse;
pub mod tokenizer;
mod value;

/// Parses a complete JSON text. Any value may appear at the top level; only
/// whitespace may follow it.
pub fn parse(input: &str) -> Result<Value> {
    parse::parse(input, Limits::default())
}

/// Like [`parse`], but for callers whose input may be absent altogether.
pub fn parse_optional(input: Option<&str>) -> Result<Value> {
    match input {
        Some(input) => parse(input),
        None => Err(Error::NullInput),
    }
}

pub fn parse_with_limits(input: &str, limits: Limits) -> Result<Value> {
    parse::parse(input, limits)
}

/// Compact serialization, identical to `value.to_string()`.
pub fn stringify(value: &Value) -> String {
    value.to_string()
}

/// Re-serializes `input` with `indent` spaces per nesting level.
pub fn format(input: &str, indent: usize) -> Result<String> {
    Ok(format_value(&parse(input)?, indent))
}

pub fn format_value(value: &Value, indent: usize) -> String {
    generate::format(value, indent)
}
