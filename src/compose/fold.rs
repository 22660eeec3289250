//! Strict left folds over arrays.

use crate::error::Result;
use crate::value::{Callable, Value};

/// Lifts a binary callable into a left fold over an array.
///
/// The returned callable accepts an array and an optional per-call seed.
/// Seed resolution is presence-based, not truthiness-based: a supplied
/// non-`Nil` second argument is the seed even when falsy (`0`, `""`);
/// `Nil` or absence falls back to `default_seed`; with neither, the first
/// element seeds the fold and the remaining elements are folded over it.
/// Folding an empty array with no seed of any kind yields `Nil`.
///
/// The fold is strict and left-to-right: `acc := f(acc, element)` for each
/// element in entry order, and the final accumulator is returned.
///
/// # Examples
///
/// ```
/// use combinars::compose::reducer;
/// use combinars::{Callable, Value};
///
/// let add = Value::from(Callable::native("add", 2, |args| {
///     match (&args[0], &args[1]) {
///         (Value::Int(left), Value::Int(right)) => Ok(Value::Int(left + right)),
///         _ => unreachable!(),
///     }
/// }));
///
/// let sum = reducer(&add, None).unwrap();
/// let numbers = Value::from(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
///
/// // seedless: 1 seeds the fold, then (1+2)+3
/// assert_eq!(sum.invoke(&[numbers.clone()]), Ok(Value::Int(6)));
///
/// // per-call seed
/// assert_eq!(sum.invoke(&[numbers, Value::Int(10)]), Ok(Value::Int(16)));
/// ```
pub fn reducer(callable: &Value, default_seed: Option<Value>) -> Result<Callable> {
    let callable = callable.as_callable()?.clone();
    let name = format!("reduce({})", callable.name());

    Ok(Callable::native_with_optional(name, 2, 1, move |args| {
        let source = args[0].expect_array()?;
        let override_seed = args
            .get(1)
            .filter(|value| !matches!(value, Value::Nil))
            .cloned();

        let mut elements = source.values();
        let mut accumulator = match override_seed.or_else(|| default_seed.clone()) {
            Some(seed) => seed,
            None => match elements.next() {
                Some(first) => first.clone(),
                None => return Ok(Value::Nil),
            },
        };
        for element in elements {
            accumulator = callable.invoke(&[accumulator, element.clone()])?;
        }
        Ok(accumulator)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn concat() -> Value {
        Value::from(Callable::native("concat", 2, |args| {
            match (&args[0], &args[1]) {
                (Value::Str(left), Value::Str(right)) => {
                    Ok(Value::from(format!("{left}{right}")))
                }
                _ => unreachable!(),
            }
        }))
    }

    fn letters() -> Value {
        Value::from(vec![
            Value::from("a"),
            Value::from("b"),
            Value::from("c"),
            Value::from("d"),
            Value::from("e"),
        ])
    }

    #[test]
    fn test_seedless_fold_uses_the_first_element() {
        let folded = reducer(&concat(), None).unwrap();
        assert_eq!(folded.invoke(&[letters()]), Ok(Value::from("abcde")));
    }

    #[test]
    fn test_default_seed_prefixes_the_fold() {
        let folded = reducer(&concat(), Some(Value::from(">"))).unwrap();
        assert_eq!(folded.invoke(&[letters()]), Ok(Value::from(">abcde")));
    }

    #[test]
    fn test_per_call_seed_overrides_the_default() {
        let folded = reducer(&concat(), Some(Value::from(">"))).unwrap();
        assert_eq!(
            folded.invoke(&[letters(), Value::from("*")]),
            Ok(Value::from("*abcde"))
        );
    }

    #[test]
    fn test_falsy_per_call_seed_still_counts_as_present() {
        let folded = reducer(&concat(), Some(Value::from(">"))).unwrap();
        // An empty string is falsy but explicitly supplied, so it wins.
        assert_eq!(
            folded.invoke(&[letters(), Value::from("")]),
            Ok(Value::from("abcde"))
        );
    }

    #[test]
    fn test_nil_per_call_seed_counts_as_absent() {
        let folded = reducer(&concat(), Some(Value::from(">"))).unwrap();
        assert_eq!(
            folded.invoke(&[letters(), Value::Nil]),
            Ok(Value::from(">abcde"))
        );
    }

    #[test]
    fn test_empty_array_without_any_seed_yields_nil() {
        let folded = reducer(&concat(), None).unwrap();
        assert_eq!(folded.invoke(&[Value::from(Vec::new())]), Ok(Value::Nil));
    }

    #[test]
    fn test_empty_array_with_seed_yields_the_seed() {
        let folded = reducer(&concat(), Some(Value::from("seed"))).unwrap();
        assert_eq!(
            folded.invoke(&[Value::from(Vec::new())]),
            Ok(Value::from("seed"))
        );
    }

    #[test]
    fn test_non_callable_fails_at_construction() {
        let error = reducer(&Value::from(1), None).unwrap_err();
        assert_eq!(error, Error::NotCallable { found: "Int" });
    }
}
