use log::{debug, trace};

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::tokenizer::{END, Tokenizer};
use crate::value::{Array, Object, Value};

pub(crate) fn parse(input: &str, limits: Limits) -> Result<Value> {
    if input.is_empty() {
        return Err(Error::InvalidArgument("empty argument".to_string()));
    }
    debug!("parsing {} bytes", input.len());

    let mut x = Tokenizer::with_limits(input, limits);
    let v = x.next_value()?;
    if x.clean_char().is_some() {
        x.back()?;
        return Err(x.syntax_error("Unexpected characters after JSON value"));
    }

    debug!("parsed a top-level {}", v.type_name());
    Ok(v)
}

/// Parses an object starting at the next clean character, which must be `{`.
///
/// Besides strict JSON this accepts unquoted and single-quoted keys, `=` or
/// `=>` in place of `:`, `;` in place of `,`, and a trailing separator before
/// the closing brace. Members with an empty key are dropped; a repeated key
/// fails with [`Error::DuplicateKey`].
pub fn parse_object(x: &mut Tokenizer<'_>) -> Result<Object> {
    if x.next_clean() != '{' {
        return Err(x.syntax_error("A JSON object text must begin with '{'"));
    }
    x.enter()?;
    trace!("object opened at {}", x.position());

    let mut obj = Object::new();
    loop {
        let key_at;
        let key = match x.next_clean() {
            END => return Err(x.syntax_error("A JSON object text must end with '}'")),
            '}' => break,
            _ => {
                x.back()?;
                key_at = x.position();
                x.next_value()?.into_key()
            }
        };

        match x.next_clean() {
            ':' => {}
            '=' => {
                if x.next() != '>' {
                    x.back()?;
                }
                trace!("accepted '=' separator after key {key:?}");
            }
            _ => return Err(x.syntax_error("Expected a ':' after a key")),
        }

        let value = x.next_value()?;
        if !key.is_empty() {
            if obj.contains_key(&key) {
                return Err(Error::DuplicateKey {
                    key,
                    position: key_at,
                });
            }
            obj.put(key, value);
        }

        match x.next_clean() {
            ',' | ';' => {
                if x.next_clean() == '}' {
                    break;
                }
                x.back()?;
            }
            '}' => break,
            END => return Err(x.syntax_error("A JSON object text must end with '}'")),
            _ => return Err(x.syntax_error("Expected a ',' or '}'")),
        }
    }

    x.leave();
    trace!("object closed with {} members", obj.len());
    Ok(obj)
}

/// Parses an array starting at the next clean character, which must be `[`,
/// or `(` for a parenthesized array that has to close with `)`.
///
/// An element left out between separators, as in `[1,,3]`, is read as
/// [`Value::Null`]. A separator right before the closer is ignored.
pub fn parse_array(x: &mut Tokenizer<'_>) -> Result<Array> {
    let closer = match x.next_clean() {
        '[' => ']',
        '(' => ')',
        _ => return Err(x.syntax_error("A JSON array text must start with '['")),
    };
    x.enter()?;
    trace!("array opened at {}, expecting '{closer}'", x.position());

    let mut arr = Array::new();
    if x.next_clean() == closer {
        x.leave();
        return Ok(arr);
    }
    x.back()?;

    loop {
        if x.next_clean() == ',' {
            x.back()?;
            arr.add(Value::Null);
        } else {
            x.back()?;
            arr.add(x.next_value()?);
        }

        match x.next_clean() {
            ',' | ';' => {
                if x.next_clean() == closer {
                    break;
                }
                x.back()?;
            }
            c @ (']' | ')') => {
                if c != closer {
                    return Err(x.syntax_error(format!("Expected a '{closer}'")));
                }
                break;
            }
            END => {
                return Err(x.syntax_error(format!("A JSON array text must end with '{closer}'")));
            }
            _ => return Err(x.syntax_error(format!("Expected a ',' or '{closer}'"))),
        }
    }

    x.leave();
    trace!("array closed with {} elements", arr.len());
    Ok(arr)
}
