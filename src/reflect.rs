//! Reflection over callable references.
//!
//! [`reflect`] resolves the callable forms the rest of the crate accepts —
//! callable values, `"Type::method"` strings, and `[type, method]` pairs —
//! into a [`Signature`]; [`arity`] is the declared-parameter-count
//! projection most callers want.

use crate::class::{ClassDef, Registry};
use crate::error::{Error, Result};
use crate::value::Value;

/// The introspected shape of a function or method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// Display name (`trim`, `Point::sum`, ...).
    pub name: String,
    /// Number of declared parameters.
    pub arity: usize,
    /// Number of parameters that must be supplied at call time.
    pub required: usize,
}

/// Resolves a callable reference to its [`Signature`].
///
/// Accepted forms:
/// - any [`Callable`](crate::Callable) value, including bound methods and
///   combinator-generated closures;
/// - a `"Type::method"` string, resolved through the registry (`new` names
///   the constructor);
/// - a two-element array `[type, method]`, where `type` is a class-name
///   string or an object and `method` is a string.
///
/// Anything else — or an unknown class or method — fails with
/// [`Error::Reflection`].
///
/// # Examples
///
/// ```
/// use combinars::reflect::{arity, reflect};
/// use combinars::{builtins, ClassDef, Registry, Value};
///
/// let mut registry = Registry::new();
/// registry.register(ClassDef::new("Point", &["x", "y"]));
///
/// let split = Value::from(builtins::split());
/// assert_eq!(arity(&registry, &split), Ok(3));
///
/// let constructor = reflect(&registry, &Value::from("Point::new")).unwrap();
/// assert_eq!(constructor.arity, 2);
/// ```
pub fn reflect(registry: &Registry, target: &Value) -> Result<Signature> {
    match target {
        Value::Callable(callable) => Ok(Signature {
            name: callable.name(),
            arity: callable.arity(),
            required: callable.required(),
        }),
        Value::Str(reference) => {
            let (class_name, method) = split_reference(reference)?;
            let class = registry
                .class(class_name)
                .ok_or_else(|| unresolvable(reference))?;
            method_signature(class, method)
        }
        Value::Array(pair) if pair.len() == 2 => {
            let mut values = pair.values();
            let (Some(subject), Some(member)) = (values.next(), values.next()) else {
                return Err(unresolvable(&target.to_string()));
            };
            let method = match member {
                Value::Str(name) => name.as_str(),
                other => return Err(unresolvable(other.type_name())),
            };
            match subject {
                Value::Str(class_name) => {
                    let class = registry
                        .class(class_name)
                        .ok_or_else(|| unresolvable(&format!("{class_name}::{method}")))?;
                    method_signature(class, method)
                }
                Value::Object(object) => method_signature(object.class_def(), method),
                other => Err(unresolvable(other.type_name())),
            }
        }
        other => Err(unresolvable(other.type_name())),
    }
}

/// The declared parameter count of a callable reference.
pub fn arity(registry: &Registry, target: &Value) -> Result<usize> {
    reflect(registry, target).map(|signature| signature.arity)
}

fn split_reference(reference: &str) -> Result<(&str, &str)> {
    match reference.split_once("::") {
        Some((class, method)) if !class.is_empty() && !method.is_empty() => Ok((class, method)),
        _ => Err(unresolvable(reference)),
    }
}

fn method_signature(class: &ClassDef, method: &str) -> Result<Signature> {
    class
        .signature_of(method)
        .ok_or_else(|| unresolvable(&format!("{}::{method}", class.name())))
}

fn unresolvable(target: &str) -> Error {
    Error::Reflection {
        target: target.to_string(),
    }
}
