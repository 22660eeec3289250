//! Property-based tests for composition laws.
//!
//! The composition utilities satisfy:
//!
//! - **Identity**: `chain(&[])(x) == x`
//! - **Chaining**: `chain(&[f, g])(x) == g(f(x))`
//! - **Unit**: `chain(&[identity, f]) == f == chain(&[f, identity])`
//! - **Associativity**: nesting `chain` either way gives the same function
//!
//! Using proptest, random inputs verify these laws across a wide range of
//! values.

use combinars::compose::{chain, identity};
use combinars::{Callable, Value};
use proptest::prelude::*;

fn add(amount: i64) -> Value {
    Value::from(Callable::native(format!("add_{amount}"), 1, move |args| {
        match &args[0] {
            Value::Int(input) => Ok(Value::Int(input.wrapping_add(amount))),
            _ => unreachable!(),
        }
    }))
}

fn mul(factor: i64) -> Value {
    Value::from(Callable::native(format!("mul_{factor}"), 1, move |args| {
        match &args[0] {
            Value::Int(input) => Ok(Value::Int(input.wrapping_mul(factor))),
            _ => unreachable!(),
        }
    }))
}

proptest! {
    /// Identity law: chain of zero stages returns its input unchanged.
    #[test]
    fn prop_empty_chain_is_identity(x in any::<i64>()) {
        let composed = chain(&[]).unwrap();
        prop_assert_eq!(composed.invoke(&[Value::Int(x)]), Ok(Value::Int(x)));
    }

    /// Chaining law: chain(&[f, g])(x) == g(f(x)).
    #[test]
    fn prop_chain_applies_left_to_right(
        x in any::<i64>(),
        amount in any::<i64>(),
        factor in any::<i64>(),
    ) {
        let composed = chain(&[add(amount), mul(factor)]).unwrap();
        let expected = x.wrapping_add(amount).wrapping_mul(factor);
        prop_assert_eq!(composed.invoke(&[Value::Int(x)]), Ok(Value::Int(expected)));
    }

    /// Left and right unit: composing with identity changes nothing.
    #[test]
    fn prop_identity_is_the_unit_of_composition(x in any::<i64>(), amount in any::<i64>()) {
        let left = chain(&[Value::from(identity()), add(amount)]).unwrap();
        let right = chain(&[add(amount), Value::from(identity())]).unwrap();
        let plain = add(amount);
        let plain = plain.as_callable().unwrap();

        let input = [Value::Int(x)];
        prop_assert_eq!(left.invoke(&input), plain.invoke(&input));
        prop_assert_eq!(right.invoke(&input), plain.invoke(&input));
    }

    /// Associativity: chain(&[chain(&[f, g]), h]) == chain(&[f, chain(&[g, h])]).
    #[test]
    fn prop_chain_is_associative(
        x in any::<i64>(),
        first in any::<i64>(),
        second in any::<i64>(),
        third in any::<i64>(),
    ) {
        let front_grouped = chain(&[
            Value::from(chain(&[add(first), mul(second)]).unwrap()),
            add(third),
        ])
        .unwrap();
        let back_grouped = chain(&[
            add(first),
            Value::from(chain(&[mul(second), add(third)]).unwrap()),
        ])
        .unwrap();

        let input = [Value::Int(x)];
        prop_assert_eq!(front_grouped.invoke(&input), back_grouped.invoke(&input));
    }
}
