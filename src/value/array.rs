//! The ordered, keyed collection backing [`Value::Array`](crate::Value::Array).

use std::fmt;

use indexmap::IndexMap;

use crate::value::Value;

/// A key in an [`Array`]: either an integer index or a string name.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Key {
    /// Integer index.
    Index(i64),
    /// String name.
    Name(String),
}

impl Key {
    /// Converts a runtime value into a key, when it has a key-like shape.
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(index) => Some(Self::Index(*index)),
            Value::Str(name) => Some(Self::Name(name.clone())),
            _ => None,
        }
    }

    /// The value-level representation of this key.
    pub(crate) fn to_value(&self) -> Value {
        match self {
            Self::Index(index) => Value::Int(*index),
            Self::Name(name) => Value::Str(name.clone()),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

/// An insertion-ordered mapping from [`Key`] to [`Value`].
///
/// Pushing a value assigns it the next unused integer index, so an array
/// built purely by [`push`](Array::push) behaves like a dense sequence,
/// while [`insert`](Array::insert) allows arbitrary integer or string keys.
/// Iteration always visits entries in insertion order.
///
/// # Examples
///
/// ```
/// use combinars::{Array, Key, Value};
///
/// let mut array = Array::new();
/// array.push(Value::from("bar"));
/// array.insert(Key::from("fizz"), Value::from("buzz"));
///
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.get(&Key::from("fizz")), Some(&Value::from("buzz")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Array {
    entries: IndexMap<Key, Value>,
    next_index: i64,
}

impl Array {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the array has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a value under the next unused integer index.
    pub fn push(&mut self, value: Value) {
        let key = Key::Index(self.next_index);
        self.next_index += 1;
        self.entries.insert(key, value);
    }

    /// Inserts a value under an explicit key, replacing any previous entry.
    ///
    /// Inserting under an integer key advances the automatic index past it,
    /// so a subsequent [`push`](Array::push) never clobbers the entry.
    pub fn insert(&mut self, key: Key, value: Value) {
        if let Key::Index(index) = &key {
            if *index >= self.next_index {
                self.next_index = index + 1;
            }
        }
        self.entries.insert(key, value);
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether an entry exists under the given key.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// A copy with the original keys discarded: values are reindexed
    /// densely from zero, in the original entry order.
    pub fn to_dense(&self) -> Self {
        self.values().cloned().collect()
    }

    /// A copy restricted to the listed keys, preserving the original entry
    /// order. Keys with no entry are silently omitted.
    pub fn retain_keys(&self, keys: &[Key]) -> Self {
        self.iter()
            .filter(|(key, _)| keys.contains(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Whether the keys are exactly `0..len`, in order.
    pub(crate) fn is_dense(&self) -> bool {
        self.keys()
            .zip(0i64..)
            .all(|(key, expected)| matches!(key, Key::Index(index) if *index == expected))
    }
}

/// Order-sensitive structural equality: same entries, same order.
impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(left, right)| left == right)
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(values: I) -> Self {
        let mut array = Self::new();
        for value in values {
            array.push(value);
        }
        array
    }
}

impl FromIterator<(Key, Value)> for Array {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(entries: I) -> Self {
        let mut array = Self::new();
        for (key, value) in entries {
            array.insert(key, value);
        }
        array
    }
}

impl fmt::Display for Array {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let dense = self.is_dense();
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            if dense {
                write!(formatter, "{value}")?;
            } else {
                write!(formatter, "{key}: {value}")?;
            }
        }
        write!(formatter, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_sequential_indexes() {
        let mut array = Array::new();
        array.push(Value::from(1));
        array.push(Value::from(2));

        let keys: Vec<&Key> = array.keys().collect();
        assert_eq!(keys, vec![&Key::Index(0), &Key::Index(1)]);
    }

    #[test]
    fn test_push_after_explicit_index_skips_past_it() {
        let mut array = Array::new();
        array.insert(Key::Index(5), Value::from("five"));
        array.push(Value::from("six"));

        assert_eq!(array.get(&Key::Index(6)), Some(&Value::from("six")));
    }

    #[test]
    fn test_insert_replaces_existing_entry_in_place() {
        let mut array = Array::new();
        array.insert(Key::from("name"), Value::from("old"));
        array.push(Value::from("tail"));
        array.insert(Key::from("name"), Value::from("new"));

        let keys: Vec<&Key> = array.keys().collect();
        assert_eq!(keys, vec![&Key::from("name"), &Key::Index(0)]);
        assert_eq!(array.get(&Key::from("name")), Some(&Value::from("new")));
    }

    #[test]
    fn test_to_dense_reindexes_in_entry_order() {
        let mut array = Array::new();
        array.insert(Key::from("foo"), Value::from("bar"));
        array.insert(Key::from("fizz"), Value::from("buzz"));

        let dense = array.to_dense();
        assert!(dense.is_dense());
        let values: Vec<&Value> = dense.values().collect();
        assert_eq!(values, vec![&Value::from("bar"), &Value::from("buzz")]);
    }

    #[test]
    fn test_retain_keys_keeps_entry_order_and_skips_missing() {
        let mut array = Array::new();
        array.insert(Key::from("one"), Value::from(1));
        array.insert(Key::from("two"), Value::from(2));
        array.insert(Key::from("three"), Value::from(3));

        let wanted = [Key::from("three"), Key::from("one"), Key::from("absent")];
        let selected = array.retain_keys(&wanted);

        let keys: Vec<&Key> = selected.keys().collect();
        assert_eq!(keys, vec![&Key::from("one"), &Key::from("three")]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let mut left = Array::new();
        left.insert(Key::from("a"), Value::from(1));
        left.insert(Key::from("b"), Value::from(2));

        let mut right = Array::new();
        right.insert(Key::from("b"), Value::from(2));
        right.insert(Key::from("a"), Value::from(1));

        assert_ne!(left, right);
    }
}
