//! Elementwise array mapping.

use crate::error::Result;
use crate::value::{Array, Callable, Value};

/// Lifts a unary callable to operate elementwise over an array.
///
/// The returned callable accepts one array and produces a new array of the
/// same length whose entries are the callable applied to the corresponding
/// input elements, in order, with keys preserved. The input is never
/// mutated.
///
/// The argument must be callable ([`Error::NotCallable`](crate::Error::NotCallable)
/// at construction otherwise); invoking the result with a non-array fails
/// with [`Error::NotConvertible`](crate::Error::NotConvertible).
///
/// # Examples
///
/// ```
/// use combinars::compose::mapper;
/// use combinars::{builtins, Value};
///
/// let upper_all = mapper(&Value::from(builtins::upper())).unwrap();
/// let input = Value::from(vec![Value::from("a"), Value::from("b")]);
///
/// assert_eq!(
///     upper_all.invoke(&[input]),
///     Ok(Value::from(vec![Value::from("A"), Value::from("B")]))
/// );
/// ```
pub fn mapper(callable: &Value) -> Result<Callable> {
    let callable = callable.as_callable()?.clone();
    let name = format!("map({})", callable.name());

    Ok(Callable::native(name, 1, move |args| {
        let source = args[0].expect_array()?;
        let mut mapped = Array::new();
        for (key, value) in source.iter() {
            mapped.insert(key.clone(), callable.invoke(std::slice::from_ref(value))?);
        }
        Ok(Value::Array(mapped))
    }))
}
