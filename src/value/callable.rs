//! Invokable values: native functions and bound methods.

use std::fmt;
use std::rc::Rc;

use crate::class::{MethodDef, Object};
use crate::error::{Error, Result};
use crate::value::Value;

/// A named native function with a declared parameter count.
///
/// `arity` is the number of declared parameters; `required` is the number
/// that must be supplied at call time (the rest have defaults inside the
/// body). Generated closures, such as the ones returned by the combinators,
/// are ordinary `FunctionDef`s with a computed arity.
pub struct FunctionDef {
    name: String,
    arity: usize,
    required: usize,
    run: Box<dyn Fn(&[Value]) -> Result<Value>>,
}

impl fmt::Debug for FunctionDef {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionDef")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// An invokable value.
///
/// Either a plain native function or a method bound to a specific
/// [`Object`] receiver. Callables compare by identity, not by behavior.
///
/// # Examples
///
/// ```
/// use combinars::{Callable, Value};
///
/// let double = Callable::native("double", 1, |args| match &args[0] {
///     Value::Int(n) => Ok(Value::Int(n * 2)),
///     other => Err(combinars::Error::NotConvertible {
///         found: other.type_name(),
///         expected: "an integer",
///     }),
/// });
///
/// assert_eq!(double.arity(), 1);
/// assert_eq!(double.invoke(&[Value::Int(21)]), Ok(Value::Int(42)));
/// ```
#[derive(Clone)]
pub enum Callable {
    /// A plain named function.
    Function(Rc<FunctionDef>),
    /// A method bound to a receiver.
    Bound {
        /// The receiver the method was bound to.
        receiver: Object,
        /// The resolved method definition.
        method: Rc<MethodDef>,
    },
}

impl Callable {
    /// Creates a native function whose parameters are all required.
    pub fn native(
        name: impl Into<String>,
        arity: usize,
        run: impl Fn(&[Value]) -> Result<Value> + 'static,
    ) -> Self {
        Self::native_with_optional(name, arity, arity, run)
    }

    /// Creates a native function where only the first `required` of the
    /// `arity` declared parameters must be supplied at call time.
    pub fn native_with_optional(
        name: impl Into<String>,
        arity: usize,
        required: usize,
        run: impl Fn(&[Value]) -> Result<Value> + 'static,
    ) -> Self {
        Self::Function(Rc::new(FunctionDef {
            name: name.into(),
            arity,
            required: required.min(arity),
            run: Box::new(run),
        }))
    }

    /// Display name: the function name, or `Class::method` for bound methods.
    pub fn name(&self) -> String {
        match self {
            Self::Function(function) => function.name.clone(),
            Self::Bound { receiver, method } => {
                format!("{}::{}", receiver.class_name(), method.name())
            }
        }
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        match self {
            Self::Function(function) => function.arity,
            Self::Bound { method, .. } => method.arity(),
        }
    }

    /// Number of parameters that must be supplied at call time.
    pub fn required(&self) -> usize {
        match self {
            Self::Function(function) => function.required,
            Self::Bound { method, .. } => method.required(),
        }
    }

    /// Invokes the callable with the given argument list.
    ///
    /// Arguments beyond the declared arity are passed through untouched
    /// (implementations that do not read them ignore them); supplying fewer
    /// than the required count fails with [`Error::Arity`].
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        if args.len() < self.required() {
            return Err(Error::Arity {
                name: self.name(),
                expected: self.required(),
                received: args.len(),
            });
        }
        match self {
            Self::Function(function) => (function.run)(args),
            Self::Bound { receiver, method } => method.run(receiver, args),
        }
    }
}

/// Identity comparison: two callables are equal only when they share the
/// same underlying definition (and, for bound methods, the same receiver).
impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (
                Self::Bound {
                    receiver: left_receiver,
                    method: left_method,
                },
                Self::Bound {
                    receiver: right_receiver,
                    method: right_method,
                },
            ) => Rc::ptr_eq(left_method, right_method) && left_receiver == right_receiver,
            _ => false,
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<callable:{}>", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add() -> Callable {
        Callable::native("add", 2, |args| match (&args[0], &args[1]) {
            (Value::Int(left), Value::Int(right)) => Ok(Value::Int(left + right)),
            _ => Err(Error::NotConvertible {
                found: args[0].type_name(),
                expected: "an integer",
            }),
        })
    }

    #[test]
    fn test_invoke_passes_arguments_in_order() {
        let subtract = Callable::native("subtract", 2, |args| {
            match (&args[0], &args[1]) {
                (Value::Int(left), Value::Int(right)) => Ok(Value::Int(left - right)),
                _ => unreachable!(),
            }
        });

        assert_eq!(
            subtract.invoke(&[Value::Int(10), Value::Int(3)]),
            Ok(Value::Int(7))
        );
    }

    #[test]
    fn test_invoke_with_missing_required_argument_fails() {
        let error = add().invoke(&[Value::Int(1)]).unwrap_err();
        assert_eq!(
            error,
            Error::Arity {
                name: "add".to_string(),
                expected: 2,
                received: 1,
            }
        );
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let result = add().invoke(&[Value::Int(1), Value::Int(2), Value::Int(99)]);
        assert_eq!(result, Ok(Value::Int(3)));
    }

    #[test]
    fn test_equality_is_by_identity() {
        let first = add();
        let second = add();
        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }

    #[test]
    fn test_optional_parameters_relax_the_required_count() {
        let greet = Callable::native_with_optional("greet", 2, 1, |args| {
            let punctuation = match args.get(1) {
                Some(Value::Str(text)) => text.clone(),
                _ => "!".to_string(),
            };
            match &args[0] {
                Value::Str(name) => Ok(Value::Str(format!("hello {name}{punctuation}"))),
                _ => unreachable!(),
            }
        });

        assert_eq!(
            greet.invoke(&[Value::from("ted")]),
            Ok(Value::from("hello ted!"))
        );
        assert_eq!(greet.arity(), 2);
        assert_eq!(greet.required(), 1);
    }
}
