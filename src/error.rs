//! Error types shared by every module in the crate.
//!
//! All failures are detected synchronously at the point of misuse and
//! propagate to the caller via [`Result`]; the library never retries,
//! swallows an error, or returns a partial result.

use thiserror::Error;

/// The error type for every fallible operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value expected to be invokable is not.
    #[error("expected a callable value, found {found}")]
    NotCallable {
        /// Type name of the offending value.
        found: &'static str,
    },

    /// A class name did not resolve to a registered class.
    #[error("no class named `{0}` is registered")]
    TypeNotFound(String),

    /// A constructor rejected its argument list.
    #[error("cannot construct `{class}`: {reason}")]
    Construction {
        /// The class whose constructor failed.
        class: String,
        /// The underlying rejection, verbatim.
        reason: String,
    },

    /// A callable reference could not be resolved to an inspectable
    /// function or method.
    #[error("cannot resolve `{target}` to a function or method")]
    Reflection {
        /// Human-readable description of the unresolvable reference.
        target: String,
    },

    /// A value matched none of the supported conversion shapes.
    #[error("cannot convert {found} into {expected}")]
    NotConvertible {
        /// Type name of the offending value.
        found: &'static str,
        /// What the conversion was aiming for.
        expected: &'static str,
    },

    /// A callable was invoked with fewer arguments than it requires.
    #[error("{name} expects at least {expected} argument(s), received {received}")]
    Arity {
        /// Display name of the callable.
        name: String,
        /// Number of required arguments.
        expected: usize,
        /// Number of arguments actually supplied.
        received: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
