//! Function combinators over dynamic callables.
//!
//! This module provides the higher-order helpers of the crate:
//!
//! - [`partial`]: partial application with positional placeholder support
//! - [`chain`]: left-to-right function composition
//! - [`identity`]: the identity callable (what `chain` of nothing returns)
//! - [`mapper`]: lifts a unary callable elementwise over an array
//! - [`reducer`]: lifts a binary callable into a left fold over an array
//!
//! Every combinator validates its callable arguments eagerly and returns a
//! new [`Callable`](crate::Callable); errors surface at construction time,
//! never silently at some later link of a pipeline. Captured state (fixed
//! arguments, stage lists) is cloned at construction and never mutated, so
//! a returned callable is unaffected by anything the caller does with its
//! inputs afterwards.
//!
//! # Laws
//!
//! - **Identity**: `chain(&[])(x) == x`
//! - **Chaining**: `chain(&[f, g])(x) == g(f(x))`
//! - **Associativity**: `chain(&[chain(&[f, g]), h]) == chain(&[f, chain(&[g, h])])`
//!
//! # Examples
//!
//! ```
//! use combinars::compose::{chain, mapper, partial};
//! use combinars::{builtins, Value, PLACEHOLDER};
//!
//! let trim = Value::from(builtins::trim());
//! let split = Value::from(builtins::split());
//! let capitalize = Value::from(builtins::capitalize());
//!
//! // trim the outer separators, split on commas, then title-case each part
//! let pipeline = chain(&[
//!     Value::from(partial(&trim, &[PLACEHOLDER, Value::from(", ")]).unwrap()),
//!     Value::from(partial(&split, &[Value::from(",")]).unwrap()),
//!     Value::from(mapper(&Value::from(chain(&[trim, capitalize]).unwrap())).unwrap()),
//! ])
//! .unwrap();
//!
//! let names = pipeline.invoke(&[Value::from(" ted, lily ,")]).unwrap();
//! assert_eq!(
//!     names,
//!     Value::from(vec![Value::from("Ted"), Value::from("Lily")])
//! );
//! ```

mod chain;
mod fold;
mod map;
mod partial;

pub use chain::{chain, identity};
pub use fold::reducer;
pub use map::mapper;
pub use partial::partial;
