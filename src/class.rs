//! Dynamic class registration and instantiation.
//!
//! A [`Registry`] maps class names to [`ClassDef`]s. A class declares its
//! constructor parameters (and optionally a custom init closure that may
//! reject its arguments) plus any number of instance methods. Instantiation
//! goes through one slice-driven code path regardless of argument count:
//! there is no per-count dispatch anywhere.
//!
//! # Examples
//!
//! ```
//! use combinars::{ClassDef, Registry, Value};
//!
//! let mut registry = Registry::new();
//! registry.register(ClassDef::new("Point", &["x", "y"]));
//!
//! let point = registry
//!     .instantiate("Point", &[Value::Int(3), Value::Int(4)])
//!     .unwrap();
//!
//! assert_eq!(point.field("x"), Some(Value::Int(3)));
//! assert_eq!(point.field("y"), Some(Value::Int(4)));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::reflect::Signature;
use crate::value::{Callable, Value};

/// Init closure: maps a constructor argument list to the instance fields,
/// or rejects it with a reason.
type Init = Rc<dyn Fn(&[Value]) -> std::result::Result<IndexMap<String, Value>, String>>;

struct ConstructorDef {
    params: Vec<String>,
    init: Init,
}

/// An instance method: declared arity, required-argument count, and body.
pub struct MethodDef {
    name: String,
    arity: usize,
    required: usize,
    run: Box<dyn Fn(&Object, &[Value]) -> Result<Value>>,
}

impl MethodDef {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn arity(&self) -> usize {
        self.arity
    }

    pub(crate) fn required(&self) -> usize {
        self.required
    }

    pub(crate) fn run(&self, receiver: &Object, args: &[Value]) -> Result<Value> {
        (self.run)(receiver, args)
    }
}

impl fmt::Debug for MethodDef {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MethodDef")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// Definition of a constructible class: name, constructor, methods.
pub struct ClassDef {
    name: String,
    constructor: ConstructorDef,
    methods: IndexMap<String, Rc<MethodDef>>,
}

impl ClassDef {
    /// Declares a class whose constructor assigns its arguments to the
    /// given field names, positionally.
    pub fn new(name: impl Into<String>, params: &[&str]) -> Self {
        let params: Vec<String> = params.iter().map(ToString::to_string).collect();
        let field_names = params.clone();
        let init: Init = Rc::new(move |args| {
            Ok(field_names
                .iter()
                .cloned()
                .zip(args.iter().cloned())
                .collect())
        });
        Self {
            name: name.into(),
            constructor: ConstructorDef { params, init },
            methods: IndexMap::new(),
        }
    }

    /// Replaces the default field-assignment init with a custom closure.
    ///
    /// The closure receives the full argument list and either returns the
    /// instance fields or rejects with a reason, which surfaces to callers
    /// as [`Error::Construction`].
    pub fn with_init(
        mut self,
        init: impl Fn(&[Value]) -> std::result::Result<IndexMap<String, Value>, String> + 'static,
    ) -> Self {
        self.constructor.init = Rc::new(init);
        self
    }

    /// Adds an instance method whose parameters are all required.
    pub fn method(
        self,
        name: impl Into<String>,
        arity: usize,
        run: impl Fn(&Object, &[Value]) -> Result<Value> + 'static,
    ) -> Self {
        self.method_with_optional(name, arity, arity, run)
    }

    /// Adds an instance method where only the first `required` of the
    /// `arity` declared parameters must be supplied at call time.
    pub fn method_with_optional(
        mut self,
        name: impl Into<String>,
        arity: usize,
        required: usize,
        run: impl Fn(&Object, &[Value]) -> Result<Value> + 'static,
    ) -> Self {
        let name = name.into();
        self.methods.insert(
            name.clone(),
            Rc::new(MethodDef {
                name,
                arity,
                required: required.min(arity),
                run: Box::new(run),
            }),
        );
        self
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves a method name to its signature. The name `new` resolves to
    /// the constructor when no method shadows it.
    pub(crate) fn signature_of(&self, method: &str) -> Option<Signature> {
        if let Some(definition) = self.methods.get(method) {
            return Some(Signature {
                name: format!("{}::{}", self.name, definition.name),
                arity: definition.arity,
                required: definition.required,
            });
        }
        if method == "new" {
            let count = self.constructor.params.len();
            return Some(Signature {
                name: format!("{}::new", self.name),
                arity: count,
                required: count,
            });
        }
        None
    }

    pub(crate) fn find_method(&self, name: &str) -> Option<&Rc<MethodDef>> {
        self.methods.get(name)
    }

    /// One code path for every argument count: the whole slice goes to the
    /// init closure, which sees the arguments exactly as supplied.
    fn construct(class: &Rc<Self>, args: &[Value]) -> Result<Object> {
        let required = class.constructor.params.len();
        if args.len() < required {
            return Err(Error::Construction {
                class: class.name.clone(),
                reason: format!(
                    "expected {required} argument(s), received {}",
                    args.len()
                ),
            });
        }
        let fields = (class.constructor.init)(args).map_err(|reason| Error::Construction {
            class: class.name.clone(),
            reason,
        })?;
        Ok(Object {
            class: Rc::clone(class),
            fields: Rc::new(RefCell::new(fields)),
        })
    }
}

impl fmt::Debug for ClassDef {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ClassDef")
            .field("name", &self.name)
            .field("params", &self.constructor.params)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Maps class names to class definitions.
#[derive(Debug, Default)]
pub struct Registry {
    classes: IndexMap<String, Rc<ClassDef>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class under its declared name, replacing any previous
    /// definition of the same name.
    pub fn register(&mut self, class: ClassDef) {
        self.classes.insert(class.name.clone(), Rc::new(class));
    }

    /// Looks up a class by name.
    pub fn class(&self, name: &str) -> Option<&Rc<ClassDef>> {
        self.classes.get(name)
    }

    /// Constructs an instance of the named class from the argument list.
    ///
    /// Fails with [`Error::TypeNotFound`] when the name is not registered
    /// and with [`Error::Construction`] when the constructor rejects the
    /// arguments (missing required arguments, or a custom init refusing).
    pub fn instantiate(&self, name: &str, args: &[Value]) -> Result<Object> {
        let class = self
            .class(name)
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))?;
        ClassDef::construct(class, args)
    }
}

/// An instance of a registered class: shared, mutable named fields plus a
/// handle to the class definition.
#[derive(Clone)]
pub struct Object {
    class: Rc<ClassDef>,
    fields: Rc<RefCell<IndexMap<String, Value>>>,
}

impl Object {
    /// Name of the class this object was constructed from.
    pub fn class_name(&self) -> &str {
        &self.class.name
    }

    pub(crate) fn class_def(&self) -> &ClassDef {
        &self.class
    }

    /// Reads a field by name.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    /// Writes a field, creating it when absent.
    pub fn set_field(&self, name: impl Into<String>, value: Value) {
        self.fields.borrow_mut().insert(name.into(), value);
    }

    /// A snapshot of the named fields, in declaration order.
    pub fn fields(&self) -> IndexMap<String, Value> {
        self.fields.borrow().clone()
    }

    /// Whether the class declares a method with this name.
    pub fn responds_to(&self, method: &str) -> bool {
        self.class.find_method(method).is_some()
    }

    /// Produces a callable bound to this receiver, or fails with
    /// [`Error::Reflection`] when the method is not declared.
    pub fn bind(&self, method: &str) -> Result<Callable> {
        let definition = self.class.find_method(method).ok_or_else(|| Error::Reflection {
            target: format!("{}::{method}", self.class.name),
        })?;
        Ok(Callable::Bound {
            receiver: self.clone(),
            method: Rc::clone(definition),
        })
    }

    /// Invokes a method by name on this receiver.
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        self.bind(method)?.invoke(args)
    }
}

/// Structural equality: same class name and equal fields.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.class.name == other.class.name && *self.fields.borrow() == *other.fields.borrow()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{self}")
    }
}

impl fmt::Display for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {{", self.class.name)?;
        for (position, (name, value)) in self.fields.borrow().iter().enumerate() {
            if position > 0 {
                write!(formatter, ",")?;
            }
            write!(formatter, " {name}: {value}")?;
        }
        write!(formatter, " }}")
    }
}
