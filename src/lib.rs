//! # combinars
//!
//! Higher-order helpers over dynamic values: partial application with
//! positional placeholders, left-to-right composition, elementwise mapping,
//! left folds, class instantiation by name, arity reflection, and
//! array coercion.
//!
//! ## Overview
//!
//! Everything operates on one dynamic [`Value`] type, so callables,
//! argument lists, and collections mix freely:
//!
//! - **Values**: [`Value`], [`Array`] (ordered keyed collection),
//!   [`Callable`] (invokable value), [`PLACEHOLDER`] (partial-application
//!   sentinel)
//! - **Combinators**: [`compose::partial`], [`compose::chain`],
//!   [`compose::mapper`], [`compose::reducer`], [`compose::identity`]
//! - **Classes**: [`Registry`], [`ClassDef`], [`Object`] — construct
//!   instances from a class name and a variable-length argument list
//! - **Reflection**: [`reflect::reflect`], [`reflect::arity`] — declared
//!   parameter counts for callables, `"Type::method"` strings, and
//!   `[type, method]` pairs
//! - **Coercion**: [`coerce::to_array`] with a three-way
//!   [`coerce::KeyPolicy`]
//! - **Builtins**: [`builtins`] — stock string/array callables
//!
//! Every operation is a synchronous, stateless computation over in-memory
//! values. Combinators capture private clones of their construction
//! arguments and never mutate them, so the returned callables are safe to
//! share and call repeatedly.
//!
//! ## Example
//!
//! ```rust
//! use combinars::compose::{chain, mapper, partial};
//! use combinars::{builtins, Value, PLACEHOLDER};
//!
//! let trim = Value::from(builtins::trim());
//! let split = Value::from(builtins::split());
//! let capitalize = Value::from(builtins::capitalize());
//!
//! let names = chain(&[
//!     Value::from(partial(&trim, &[PLACEHOLDER, Value::from(", ")]).unwrap()),
//!     Value::from(partial(&split, &[Value::from(",")]).unwrap()),
//!     Value::from(mapper(&Value::from(chain(&[trim, capitalize]).unwrap())).unwrap()),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     names.invoke(&[Value::from(" marshal, barney,")]),
//!     Ok(Value::from(vec![
//!         Value::from("Marshal"),
//!         Value::from("Barney"),
//!     ]))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builtins;
    pub use crate::class::{ClassDef, Object, Registry};
    pub use crate::coerce::{to_array, KeyPolicy};
    pub use crate::compose::{chain, identity, mapper, partial, reducer};
    pub use crate::error::{Error, Result};
    pub use crate::reflect::{arity, reflect, Signature};
    pub use crate::value::{Array, Callable, Key, Value, PLACEHOLDER};
}

pub mod builtins;
pub mod class;
pub mod coerce;
pub mod compose;
pub mod error;
pub mod reflect;
pub mod value;

pub use class::{ClassDef, Object, Registry};
pub use error::{Error, Result};
pub use value::{Array, Callable, Key, Value, PLACEHOLDER};
