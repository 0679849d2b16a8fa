use std::fmt::{self, Display, Write};

use crate::value::{Array, Object, Value};

/// Compact form: no whitespace between tokens, object keys in insertion order.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => write_quoted(f, s),
            Value::Array(a) => a.fmt(f),
            Value::Object(o) => o.fmt(f),
        }
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            v.fmt(f)?;
        }
        f.write_char(']')
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write_quoted(f, k)?;
            f.write_char(':')?;
            v.fmt(f)?;
        }
        f.write_char('}')
    }
}

// JSON has no literal for NaN or the infinities.
fn write_number<W: Write>(out: &mut W, n: f64) -> fmt::Result {
    if n.is_finite() {
        write!(out, "{n}")
    } else {
        out.write_str("null")
    }
}

fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    escape(out, s)?;
    out.write_char('"')
}

fn escape<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '/' => out.write_str("\\/")?,
            '\x08' => out.write_str("\\b")?,
            '\x0c' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}' | '\u{2000}'..='\u{20FF}' => {
                write!(out, "\\u{:04X}", c as u32)?
            }
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

/// Quotes and escapes `s` the way string values are serialized.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    // Writing into a String cannot fail.
    let _ = write_quoted(&mut out, s);
    out
}

/// Pretty form: one element or member per line, nested `indent` spaces per
/// level.
pub(crate) fn format(value: &Value, indent: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_pretty(&mut out, value, indent, 0);
    out
}

fn write_pretty(out: &mut String, value: &Value, indent: usize, depth: usize) -> fmt::Result {
    match value {
        Value::Array(a) if !a.is_empty() => {
            out.push('[');
            for (i, v) in a.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, indent, depth + 1);
                write_pretty(out, v, indent, depth + 1)?;
            }
            newline(out, indent, depth);
            out.push(']');
        }
        Value::Object(o) if !o.is_empty() => {
            out.push('{');
            for (i, (k, v)) in o.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline(out, indent, depth + 1);
                write_quoted(out, k)?;
                out.push_str(": ");
                write_pretty(out, v, indent, depth + 1)?;
            }
            newline(out, indent, depth);
            out.push('}');
        }
        scalar_or_empty => write!(out, "{scalar_or_empty}")?,
    }
    Ok(())
}

fn newline(out: &mut String, indent: usize, depth: usize) {
    out.push('\n');
    out.extend(std::iter::repeat_n(' ', indent * depth));
}
