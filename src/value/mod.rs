//! The dynamic value model.
//!
//! Every helper in this crate operates on [`Value`]: a closed set of runtime
//! shapes covering scalars, ordered keyed collections ([`Array`]), instances
//! of registered classes ([`Object`](crate::class::Object)), invokable values
//! ([`Callable`]), and the partial-application placeholder.
//!
//! Values are cheap to clone: compound shapes share their backing storage via
//! reference counting, and combinators capture private clones of whatever
//! they are constructed with, so captured state can never be mutated through
//! a caller-retained handle.

mod array;
mod callable;

pub use array::{Array, Key};
pub use callable::{Callable, FunctionDef};

use std::fmt;

use crate::class::Object;
use crate::error::{Error, Result};

/// A dynamic runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absence of a value.
    Nil,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Ordered keyed collection.
    Array(Array),
    /// Instance of a registered class.
    Object(Object),
    /// Invokable value.
    Callable(Callable),
    /// The partial-application placeholder sentinel.
    ///
    /// A dedicated variant rather than a magic in-band value, so a caller
    /// cannot forge it with ordinary data. Use the [`PLACEHOLDER`] constant.
    Placeholder,
}

/// Marks a position in a fixed-argument list as "caller fills this slot".
///
/// # Examples
///
/// ```
/// use combinars::compose::partial;
/// use combinars::{builtins, Value, PLACEHOLDER};
///
/// // trim(input, ", ") with the input left open for the eventual caller
/// let trim = Value::from(builtins::trim());
/// let trimmed = partial(&trim, &[PLACEHOLDER, Value::from(", ")]).unwrap();
///
/// assert_eq!(
///     trimmed.invoke(&[Value::from(", ted, ")]),
///     Ok(Value::from("ted"))
/// );
/// ```
pub const PLACEHOLDER: Value = Value::Placeholder;

impl Value {
    /// The type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Str(_) => "Str",
            Self::Array(_) => "Array",
            Self::Object(_) => "Object",
            Self::Callable(_) => "Callable",
            Self::Placeholder => "Placeholder",
        }
    }

    /// Truthiness: `Nil`, `false`, zero, and empty strings/arrays are falsy;
    /// everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::Str(value) => !value.is_empty(),
            Self::Array(value) => !value.is_empty(),
            Self::Object(_) | Self::Callable(_) | Self::Placeholder => true,
        }
    }

    /// Whether this value is the placeholder sentinel.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Borrows the inner callable, or fails with [`Error::NotCallable`].
    pub fn as_callable(&self) -> Result<&Callable> {
        match self {
            Self::Callable(callable) => Ok(callable),
            other => Err(Error::NotCallable {
                found: other.type_name(),
            }),
        }
    }

    /// Borrows the inner array, or fails with [`Error::NotConvertible`].
    pub(crate) fn expect_array(&self) -> Result<&Array> {
        match self {
            Self::Array(array) => Ok(array),
            other => Err(Error::NotConvertible {
                found: other.type_name(),
                expected: "an array",
            }),
        }
    }

    /// Borrows the inner string, or fails with [`Error::NotConvertible`].
    pub(crate) fn expect_str(&self) -> Result<&str> {
        match self {
            Self::Str(text) => Ok(text),
            other => Err(Error::NotConvertible {
                found: other.type_name(),
                expected: "a string",
            }),
        }
    }
}

/// Structural equality for data shapes; identity equality for callables.
/// Values of different types are never equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) | (Self::Placeholder, Self::Placeholder) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left == right,
            (Self::Callable(left), Self::Callable(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(formatter, "nil"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => {
                if value.fract() == 0.0 {
                    write!(formatter, "{value:.1}")
                } else {
                    write!(formatter, "{value}")
                }
            }
            Self::Str(value) => write!(formatter, "\"{value}\""),
            Self::Array(value) => write!(formatter, "{value}"),
            Self::Object(value) => write!(formatter, "{value}"),
            Self::Callable(value) => write!(formatter, "<callable:{}>", value.name()),
            Self::Placeholder => write!(formatter, "<placeholder>"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(Array::from(values))
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Index(index) => Self::Int(index),
            Key::Name(name) => Self::Str(name),
        }
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Self::Callable(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_distinct_from_every_data_value() {
        let candidates = [
            Value::Nil,
            Value::from(false),
            Value::from(0),
            Value::from(""),
            Value::from("__"),
            Value::from(Vec::new()),
        ];

        for candidate in candidates {
            assert_ne!(candidate, PLACEHOLDER);
            assert!(!candidate.is_placeholder());
        }
        assert!(PLACEHOLDER.is_placeholder());
    }

    #[test]
    fn test_truthiness_of_falsy_values() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(0.0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::from(Vec::new()).is_truthy());
    }

    #[test]
    fn test_as_callable_rejects_data_values() {
        let error = Value::from(42).as_callable().unwrap_err();
        assert_eq!(error, Error::NotCallable { found: "Int" });
    }

    #[test]
    fn test_cross_type_equality_is_false() {
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from(0), Value::from(false));
        assert_ne!(Value::Nil, Value::from(""));
    }
}
