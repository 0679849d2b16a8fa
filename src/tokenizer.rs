//! Character cursor with one character of pushback.
//!
//! The grammar in [`crate::parse`] decides every branch by reading one
//! character ahead and, when the branch does not consume it, handing it back
//! with [`Tokenizer::back`]. Scalars (quoted strings, numbers, literals and
//! bare words) are recognized here; objects and arrays are delegated to the
//! parser, which calls back into [`Tokenizer::next_value`] for their members.

use log::trace;
use std::str::Chars;

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::parse;
use crate::value::Value;

/// Returned by [`Tokenizer::next`] and [`Tokenizer::next_clean`] once the
/// input is exhausted.
pub const END: char = '\0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Nothing read yet, so there is nothing to push back.
    Start,
    /// `None` means the last read hit the end of input.
    Read(Option<char>),
    /// The last character read was handed back and will be returned again.
    PushedBack(Option<char>),
}

pub struct Tokenizer<'a> {
    chars: Chars<'a>,
    cursor: Cursor,
    /// Characters taken from `chars` so far.
    offset: usize,
    limits: Limits,
    depth: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_limits(input, Limits::default())
    }

    pub fn with_limits(input: &'a str, limits: Limits) -> Self {
        Self {
            chars: input.chars(),
            cursor: Cursor::Start,
            offset: 0,
            limits,
            depth: 0,
        }
    }

    /// Character offset of the next character to be returned.
    pub fn position(&self) -> usize {
        match self.cursor {
            Cursor::PushedBack(Some(_)) => self.offset - 1,
            _ => self.offset,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = match self.cursor {
            Cursor::PushedBack(c) => c,
            Cursor::Start | Cursor::Read(_) => {
                let c = self.chars.next();
                if c.is_some() {
                    self.offset += 1;
                }
                c
            }
        };
        self.cursor = Cursor::Read(c);
        c
    }

    /// The next raw character, or [`END`].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> char {
        self.advance().unwrap_or(END)
    }

    pub(crate) fn clean_char(&mut self) -> Option<char> {
        loop {
            match self.advance() {
                Some(' ' | '\t' | '\n' | '\r') => continue,
                other => return other,
            }
        }
    }

    /// The next character that is not ASCII whitespace, or [`END`].
    pub fn next_clean(&mut self) -> char {
        self.clean_char().unwrap_or(END)
    }

    /// Hands the last character read back, so the next read returns it again.
    ///
    /// Only one character can be pending: backing up twice in a row, or before
    /// anything was read, is a bug in the caller.
    pub fn back(&mut self) -> Result<()> {
        match self.cursor {
            Cursor::Read(c) => {
                self.cursor = Cursor::PushedBack(c);
                Ok(())
            }
            Cursor::PushedBack(_) => Err(Error::Internal(
                "back() called twice without an intervening read".to_string(),
            )),
            Cursor::Start => Err(Error::Internal("back() called before any read".to_string())),
        }
    }

    pub fn syntax_error(&self, message: impl Into<String>) -> Error {
        Error::Syntax {
            message: message.into(),
            position: self.position(),
        }
    }

    pub(crate) fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(Error::NestingTooDeep {
                depth: self.depth,
                max: self.limits.max_nesting_depth,
            });
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Consumes exactly one value starting at the next clean character.
    pub fn next_value(&mut self) -> Result<Value> {
        match self.clean_char() {
            Some(q @ ('"' | '\'')) => self.next_string(q).map(Value::String),
            Some('{') => {
                self.back()?;
                parse::parse_object(self).map(Value::Object)
            }
            Some('[' | '(') => {
                self.back()?;
                parse::parse_array(self).map(Value::Array)
            }
            _ => {
                self.back()?;
                self.next_bare()
            }
        }
    }

    /// Reads the body of a string up to the matching `quote`, which has
    /// already been consumed.
    fn next_string(&mut self, quote: char) -> Result<String> {
        let mut s = String::new();
        loop {
            match self.advance() {
                None | Some('\n' | '\r') => return Err(self.syntax_error("Unterminated string")),
                Some('\\') => s.push(self.next_escape()?),
                Some(c) if c == quote => return Ok(s),
                Some(c) => s.push(c),
            }
        }
    }

    fn next_escape(&mut self) -> Result<char> {
        let c = match self.advance() {
            Some('"') => '"',
            Some('\'') => '\'',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\x08',
            Some('f') => '\x0c',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => return self.next_unicode_escape(),
            None => return Err(self.syntax_error("Unterminated string")),
            Some(other) => return Err(self.syntax_error(format!("Illegal escape '\\{other}'"))),
        };
        Ok(c)
    }

    // Surrogate pairs arrive as two consecutive \u escapes.
    fn next_unicode_escape(&mut self) -> Result<char> {
        let high = self.next_hex4()?;
        let code = match high {
            0xD800..=0xDBFF => {
                if self.advance() != Some('\\') || self.advance() != Some('u') {
                    return Err(self.syntax_error("Unpaired surrogate in \\u escape"));
                }
                let low = self.next_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.syntax_error("Unpaired surrogate in \\u escape"));
                }
                0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(self.syntax_error("Unpaired surrogate in \\u escape")),
            _ => high,
        };
        char::from_u32(code).ok_or_else(|| self.syntax_error("Invalid \\u escape"))
    }

    fn next_hex4(&mut self) -> Result<u32> {
        let mut code = 0;
        for _ in 0..4 {
            let digit = self
                .advance()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.syntax_error("Expected four hex digits after \\u"))?;
            code = (code << 4) | digit;
        }
        Ok(code)
    }

    /// Reads an unquoted run of characters and classifies it.
    fn next_bare(&mut self) -> Result<Value> {
        let mut word = String::new();
        loop {
            match self.advance() {
                Some(c) if !is_delimiter(c) => word.push(c),
                _ => {
                    self.back()?;
                    break;
                }
            }
        }

        if word.is_empty() {
            return Err(self.syntax_error("Missing value"));
        }
        let value = if word.eq_ignore_ascii_case("true") {
            Value::Boolean(true)
        } else if word.eq_ignore_ascii_case("false") {
            Value::Boolean(false)
        } else if word == "null" {
            Value::Null
        } else if let Some(n) = parse_number(&word) {
            Value::Number(n)
        } else {
            trace!("bare word {word:?} read as a string");
            Value::String(word)
        };
        Ok(value)
    }
}

/// Characters that end a bare word.
fn is_delimiter(c: char) -> bool {
    c.is_ascii_whitespace()
        || c.is_ascii_control()
        || matches!(
            c,
            ',' | ':' | ']' | '}' | '/' | '\\' | '"' | '[' | '{' | ';' | '=' | '#' | '(' | ')'
        )
}

/// `[+-]` followed by either `0x` hex digits or a decimal literal with an
/// optional fraction and exponent.
fn parse_number(word: &str) -> Option<f64> {
    let (negative, unsigned) = match word.as_bytes().first()? {
        b'-' => (true, &word[1..]),
        b'+' => (false, &word[1..]),
        _ => (false, word),
    };

    if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let n = u64::from_str_radix(hex, 16).ok()? as f64;
        return Some(if negative { -n } else { n });
    }

    let bytes = unsigned.as_bytes();
    let mut i = 0;
    let digits = |i: &mut usize| {
        let start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - start
    };

    let mut mantissa = digits(&mut i);
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        mantissa += digits(&mut i);
    }
    if mantissa == 0 {
        return None;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return None;
        }
    }
    if i != bytes.len() {
        return None;
    }
    // Overflowing literals such as 1e400 stay bare words.
    word.parse().ok().filter(|n: &f64| n.is_finite())
}
