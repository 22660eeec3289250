//! Left-to-right function composition.

use crate::error::Result;
use crate::value::{Callable, Value};

/// The identity callable: returns its single argument unchanged.
///
/// This is what [`chain`] of zero stages returns, and the unit element of
/// composition: `chain(&[identity, f])` behaves like `f`.
pub fn identity() -> Callable {
    Callable::native("identity", 1, |args| Ok(args[0].clone()))
}

/// Composes callables left to right into one unary callable.
///
/// `chain(&[c1, c2, .., cn])` produces a callable computing
/// `cn(..c2(c1(x))..)`: the first stage is applied first, each stage
/// receiving the previous stage's result. With zero stages the result is
/// [`identity`].
///
/// Every stage is validated eagerly: a non-callable anywhere in the list
/// fails with [`Error::NotCallable`](crate::Error::NotCallable) at
/// construction time, even if that stage would never have been reached.
///
/// # Examples
///
/// ```
/// use combinars::compose::chain;
/// use combinars::{builtins, Value};
///
/// let shout = chain(&[
///     Value::from(builtins::trim()),
///     Value::from(builtins::upper()),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     shout.invoke(&[Value::from("  hey  ")]),
///     Ok(Value::from("HEY"))
/// );
/// ```
pub fn chain(stages: &[Value]) -> Result<Callable> {
    let mut callables = Vec::with_capacity(stages.len());
    for stage in stages {
        callables.push(stage.as_callable()?.clone());
    }
    if callables.is_empty() {
        return Ok(identity());
    }

    let name = format!(
        "chain({})",
        callables
            .iter()
            .map(Callable::name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(Callable::native(name, 1, move |args| {
        let mut current = args[0].clone();
        for callable in &callables {
            current = callable.invoke(std::slice::from_ref(&current))?;
        }
        Ok(current)
    }))
}
