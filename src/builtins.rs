//! Stock native callables.
//!
//! A small set of string and array functions, packaged as [`Callable`]
//! values so pipelines built from the combinators are expressible out of
//! the box. Each function documents its declared arity; optional trailing
//! parameters have sensible defaults.

use crate::value::{Array, Callable, Value};

/// Characters stripped by [`trim`] when no set is supplied.
const DEFAULT_TRIM_CHARS: &str = " \t\n\r\0\u{B}";

fn render(value: &Value) -> String {
    match value {
        Value::Str(text) => text.clone(),
        other => other.to_string(),
    }
}

/// `trim(input, chars?)` — strips the given characters (whitespace by
/// default) from both ends of the input. Arity 2, one required.
pub fn trim() -> Callable {
    Callable::native_with_optional("trim", 2, 1, |args| {
        let input = args[0].expect_str()?;
        let chars = match args.get(1) {
            Some(Value::Str(set)) => set.clone(),
            _ => DEFAULT_TRIM_CHARS.to_string(),
        };
        Ok(Value::from(
            input.trim_matches(|c: char| chars.contains(c)),
        ))
    })
}

/// `split(delimiter, input, limit?)` — splits the input on the delimiter
/// into a dense array of parts. A positive limit caps the number of parts,
/// the last one holding the rest of the input; an empty delimiter yields
/// the whole input as a single part. Arity 3, two required.
pub fn split() -> Callable {
    Callable::native_with_optional("split", 3, 2, |args| {
        let delimiter = args[0].expect_str()?;
        let input = args[1].expect_str()?;
        let limit = match args.get(2) {
            Some(Value::Int(limit)) if *limit > 0 => usize::try_from(*limit).ok(),
            _ => None,
        };

        let parts: Array = if delimiter.is_empty() {
            std::iter::once(Value::from(input)).collect()
        } else {
            match limit {
                Some(limit) => input
                    .splitn(limit, delimiter)
                    .map(Value::from)
                    .collect(),
                None => input.split(delimiter).map(Value::from).collect(),
            }
        };
        Ok(Value::Array(parts))
    })
}

/// `join(glue, array)` — concatenates the array's elements with the glue
/// between them, in entry order. Arity 2.
pub fn join() -> Callable {
    Callable::native("join", 2, |args| {
        let glue = args[0].expect_str()?;
        let pieces: Vec<String> = args[1].expect_array()?.values().map(render).collect();
        Ok(Value::from(pieces.join(glue)))
    })
}

/// `capitalize(input)` — uppercases the first letter of each
/// whitespace-delimited word, leaving the rest untouched. Arity 1.
pub fn capitalize() -> Callable {
    Callable::native("capitalize", 1, |args| {
        let input = args[0].expect_str()?;
        let mut output = String::with_capacity(input.len());
        let mut at_word_start = true;
        for character in input.chars() {
            if at_word_start {
                output.extend(character.to_uppercase());
            } else {
                output.push(character);
            }
            at_word_start = character.is_whitespace();
        }
        Ok(Value::from(output))
    })
}

/// `upper(input)` — uppercases the whole input. Arity 1.
pub fn upper() -> Callable {
    Callable::native("upper", 1, |args| {
        Ok(Value::from(args[0].expect_str()?.to_uppercase()))
    })
}

/// `lower(input)` — lowercases the whole input. Arity 1.
pub fn lower() -> Callable {
    Callable::native("lower", 1, |args| {
        Ok(Value::from(args[0].expect_str()?.to_lowercase()))
    })
}

/// `length(value)` — the number of characters in a string or entries in an
/// array. Arity 1.
pub fn length() -> Callable {
    Callable::native("length", 1, |args| match &args[0] {
        Value::Str(text) => Ok(Value::Int(text.chars().count() as i64)),
        Value::Array(array) => Ok(Value::Int(array.len() as i64)),
        other => Err(crate::error::Error::NotConvertible {
            found: other.type_name(),
            expected: "a string or an array",
        }),
    })
}
