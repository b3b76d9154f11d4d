mod base;

use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use crate::error::{Error, Result};

pub use base::{is_reserved, BaseMember, RESERVED_PREFIX};

/// The capability set a value must expose to be decorated.
pub trait Object: Display {
    /// Every member name, including reserved ones.
    fn member_names(&self) -> Vec<String>;

    fn get_member(&self, name: &str) -> Option<Value>;

    fn type_name(&self) -> &str {
        "object"
    }

    /// The instance this object decorates, if it is itself a decorator.
    fn decorated(&self) -> Option<Rc<dyn Object>> {
        None
    }
}

type MethodFn = dyn Fn(&[Value]) -> Result<Value>;

// bound to whatever receiver state it needs
#[derive(Clone)]
pub struct Method {
    name: String,
    func: Rc<MethodFn>,
}

impl Method {
    pub fn new<F>(name: &str, func: F) -> Method
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Method {
            name: name.to_string(),
            func: Rc::new(func),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.func)(args)
    }

    pub fn same_callable(&self, other: &Method) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl Debug for Method {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Method({})", self.name)
    }
}

/// The result of reading a member.
#[derive(Clone)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Object(Rc<dyn Object>),
    Method(Method),
    Base(BaseMember),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Rc<dyn Object>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Value::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn expect_int(&self) -> Result<i64> {
        self.as_int()
            .ok_or_else(|| Error::InvalidArgument(format!("expected int, got {:?}", self)))
    }

    pub(crate) fn describe(&self) -> String {
        format!("{} value {}", self.kind(), self)
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::Method(_) => "method",
            Value::Base(_) => "base member",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => same_object(a, b),
            (Value::Method(a), Value::Method(b)) => a.same_callable(b),
            (Value::Base(a), Value::Base(b)) => a == b,
            _ => false,
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "Unit"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Int(n) => write!(f, "Int({})", n),
            Value::Float(x) => write!(f, "Float({})", x),
            Value::Str(s) => write!(f, "Str({:?})", s),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Object(obj) => write!(f, "Object({}: {})", obj.type_name(), obj),
            Value::Method(method) => write!(f, "{:?}", method),
            Value::Base(member) => write!(f, "Base({})", member.name()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => write!(f, "{}", obj),
            Value::Method(method) => write!(f, "<method {}>", method.name()),
            Value::Base(member) => write!(f, "<base {}>", member.name()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl From<Method> for Value {
    fn from(method: Method) -> Value {
        Value::Method(method)
    }
}

// compares data addresses only, vtables may differ
pub fn same_object(a: &Rc<dyn Object>, b: &Rc<dyn Object>) -> bool {
    object_address(a) == object_address(b)
}

pub(crate) fn object_address(obj: &Rc<dyn Object>) -> usize {
    Rc::as_ptr(obj) as *const () as usize
}
