//! Normalizing arbitrary values into arrays.
//!
//! [`to_array`] classifies its input by probing a fixed sequence of
//! capabilities and converts with the first strategy that matches:
//!
//! 1. an [`Array`] is used as-is;
//! 2. an object responding to `to_array` is snapshotted through it;
//! 3. an object responding to `next` is drained as an iterator;
//! 4. an object responding to `get` and `has`, combined with an explicit
//!    [`KeyPolicy::Only`] key set, is probed key by key;
//! 5. any other object contributes its named fields;
//! 6. a scalar is wrapped as a one-element sequence;
//! 7. everything else fails with [`Error::NotConvertible`].
//!
//! The [`KeyPolicy`] decides what happens to the source's keys on the way
//! through.

use crate::class::Object;
use crate::error::{Error, Result};
use crate::value::{Array, Key, Value};

/// Method probed for the snapshot capability.
const SNAPSHOT_METHOD: &str = "to_array";
/// Method probed for the iterator capability.
const NEXT_METHOD: &str = "next";
/// Methods probed for the indexable capability.
const GET_METHOD: &str = "get";
const HAS_METHOD: &str = "has";

/// What to do with the source's keys during coercion.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// Discard original keys: the result is a dense, 0-indexed sequence of
    /// the elements in their original order.
    #[default]
    Discard,
    /// Preserve original keys and field names.
    Preserve,
    /// Keep only the listed keys. Entries are returned in their original
    /// order; keys with no entry are silently omitted.
    Only(Vec<Key>),
}

/// Normalizes a value into an [`Array`] under the given key policy.
///
/// # Examples
///
/// ```
/// use combinars::coerce::{to_array, KeyPolicy};
/// use combinars::{Array, Key, Value};
///
/// let mut source = Array::new();
/// source.insert(Key::from("foo"), Value::from("bar"));
/// source.insert(Key::from("fizz"), Value::from("buzz"));
///
/// let dense = to_array(&Value::Array(source.clone()), &KeyPolicy::Discard).unwrap();
/// let values: Vec<&Value> = dense.values().collect();
/// assert_eq!(values, vec![&Value::from("bar"), &Value::from("buzz")]);
///
/// let kept = to_array(&Value::Array(source), &KeyPolicy::Preserve).unwrap();
/// assert_eq!(kept.get(&Key::from("foo")), Some(&Value::from("bar")));
///
/// // Scalars become one-element sequences.
/// let wrapped = to_array(&Value::from(42), &KeyPolicy::Discard).unwrap();
/// assert_eq!(wrapped.len(), 1);
///
/// // Nil matches no shape.
/// assert!(to_array(&Value::Nil, &KeyPolicy::Discard).is_err());
/// ```
pub fn to_array(value: &Value, policy: &KeyPolicy) -> Result<Array> {
    match value {
        Value::Array(array) => Ok(apply_policy(array.clone(), policy)),
        Value::Object(object) => coerce_object(object, policy),
        Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
            let mut wrapped = Array::new();
            wrapped.push(value.clone());
            Ok(apply_policy(wrapped, policy))
        }
        other => Err(Error::NotConvertible {
            found: other.type_name(),
            expected: "an array",
        }),
    }
}

/// Capability probe order for objects: snapshot, iterator, indexable (with
/// an explicit key set), then the named-field fallback.
fn coerce_object(object: &Object, policy: &KeyPolicy) -> Result<Array> {
    if object.responds_to(SNAPSHOT_METHOD) {
        return match object.call(SNAPSHOT_METHOD, &[])? {
            Value::Array(array) => Ok(apply_policy(array, policy)),
            other => Err(Error::NotConvertible {
                found: other.type_name(),
                expected: "an array",
            }),
        };
    }
    if object.responds_to(NEXT_METHOD) {
        return drain(object, policy);
    }
    if let KeyPolicy::Only(keys) = policy {
        if object.responds_to(GET_METHOD) && object.responds_to(HAS_METHOD) {
            return select_keys(object, keys);
        }
    }
    let fields: Array = object
        .fields()
        .into_iter()
        .map(|(name, value)| (Key::Name(name), value))
        .collect();
    Ok(apply_policy(fields, policy))
}

/// Drains an iterator object fully. Each `next()` call must yield `Nil`
/// when exhausted, or a two-slot `[key, value]` array; keys are honored or
/// dropped per the policy as the drain proceeds.
fn drain(object: &Object, policy: &KeyPolicy) -> Result<Array> {
    let mut drained = Array::new();
    loop {
        let step = object.call(NEXT_METHOD, &[])?;
        let pair = match &step {
            Value::Nil => break,
            Value::Array(pair) if pair.len() == 2 => pair,
            other => {
                return Err(Error::NotConvertible {
                    found: other.type_name(),
                    expected: "a [key, value] pair or nil",
                });
            }
        };
        let mut slots = pair.values();
        match (slots.next(), slots.next(), policy) {
            (Some(_), Some(element), KeyPolicy::Discard) => drained.push(element.clone()),
            (Some(key_value), Some(element), _) => {
                let key = Key::from_value(key_value).ok_or(Error::NotConvertible {
                    found: key_value.type_name(),
                    expected: "an integer or string key",
                })?;
                drained.insert(key, element.clone());
            }
            _ => {
                return Err(Error::NotConvertible {
                    found: step.type_name(),
                    expected: "a [key, value] pair or nil",
                });
            }
        }
    }
    Ok(apply_policy(drained, policy))
}

/// Probes an indexable object for each requested key, keeping present
/// entries only.
fn select_keys(object: &Object, keys: &[Key]) -> Result<Array> {
    let mut selected = Array::new();
    for key in keys {
        if object.call(HAS_METHOD, &[key.to_value()])?.is_truthy() {
            selected.insert(key.clone(), object.call(GET_METHOD, &[key.to_value()])?);
        }
    }
    Ok(selected)
}

fn apply_policy(array: Array, policy: &KeyPolicy) -> Array {
    match policy {
        KeyPolicy::Discard => array.to_dense(),
        KeyPolicy::Preserve => array,
        KeyPolicy::Only(keys) => array.retain_keys(keys),
    }
}
