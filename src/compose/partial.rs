//! Partial application with positional placeholders.

use smallvec::SmallVec;

use crate::error::Result;
use crate::value::{Callable, Value};

/// Binds fixed arguments to a callable, returning a new callable.
///
/// Entries in `fixed` that are the [`PLACEHOLDER`](crate::PLACEHOLDER)
/// sentinel mark positions left open for the eventual caller. When the
/// returned callable is invoked, its argument list is built by starting
/// from the caller's arguments and inserting each non-placeholder fixed
/// value at its declared position (shifting later entries right);
/// placeholder positions insert nothing, so caller values pass through
/// them in order. Placeholders may appear at any position, including
/// trailing ones, or not at all.
///
/// The base value must be callable; anything else fails with
/// [`Error::NotCallable`](crate::Error::NotCallable) immediately. The
/// generated callable's declared arity is the base arity minus the number
/// of bound (non-placeholder) values.
///
/// # Examples
///
/// ```
/// use combinars::compose::partial;
/// use combinars::{builtins, Value, PLACEHOLDER};
///
/// // split(delimiter, input, limit): bind the delimiter and the limit,
/// // leave the input to the caller.
/// let split = Value::from(builtins::split());
/// let first_two = partial(
///     &split,
///     &[Value::from(","), PLACEHOLDER, Value::from(2)],
/// )
/// .unwrap();
///
/// assert_eq!(
///     first_two.invoke(&[Value::from("a,b,c")]),
///     Ok(Value::from(vec![Value::from("a"), Value::from("b,c")]))
/// );
/// ```
pub fn partial(base: &Value, fixed: &[Value]) -> Result<Callable> {
    let base = base.as_callable()?.clone();
    let fixed: Vec<Value> = fixed.to_vec();

    let bound = fixed.iter().filter(|value| !value.is_placeholder()).count();
    let arity = base.arity().saturating_sub(bound);
    let required = base.required().saturating_sub(bound);
    let name = format!("partial({})", base.name());

    Ok(Callable::native_with_optional(
        name,
        arity,
        required,
        move |args| {
            let mut merged: SmallVec<[Value; 4]> = args.iter().cloned().collect();
            for (position, value) in fixed.iter().enumerate() {
                if !value.is_placeholder() {
                    merged.insert(position.min(merged.len()), value.clone());
                }
            }
            base.invoke(&merged)
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::value::PLACEHOLDER;

    fn join_args() -> Value {
        Value::from(Callable::native("join_args", 3, |args| {
            let rendered: Vec<String> = args
                .iter()
                .map(|value| match value {
                    Value::Str(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect();
            Ok(Value::from(rendered.join("|")))
        }))
    }

    #[test]
    fn test_fixed_values_are_inserted_at_their_positions() {
        let bound = partial(
            &join_args(),
            &[Value::from("a"), PLACEHOLDER, Value::from("c")],
        )
        .unwrap();

        assert_eq!(bound.invoke(&[Value::from("b")]), Ok(Value::from("a|b|c")));
    }

    #[test]
    fn test_trailing_placeholder_passes_caller_values_through() {
        let bound = partial(&join_args(), &[Value::from("x"), PLACEHOLDER]).unwrap();
        assert_eq!(
            bound.invoke(&[Value::from("y"), Value::from("z")]),
            Ok(Value::from("x|y|z"))
        );
    }

    #[test]
    fn test_no_placeholders_prepends_every_fixed_value() {
        let bound = partial(&join_args(), &[Value::from("a"), Value::from("b")]).unwrap();
        assert_eq!(bound.invoke(&[Value::from("c")]), Ok(Value::from("a|b|c")));
    }

    #[test]
    fn test_arity_shrinks_by_the_number_of_bound_values() {
        let bound = partial(
            &join_args(),
            &[Value::from("a"), PLACEHOLDER, Value::from("c")],
        )
        .unwrap();
        assert_eq!(bound.arity(), 1);
    }

    #[test]
    fn test_non_callable_base_fails_at_construction() {
        let error = partial(&Value::from("trim"), &[]).unwrap_err();
        assert_eq!(error, Error::NotCallable { found: "Str" });
    }
}
