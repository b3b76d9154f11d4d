use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::{object_address, Object, Value};
use crate::error::{Error, Result};

/// Member names starting with this prefix belong to the base-object
/// convention. They are never delegated to a wrapped instance.
pub const RESERVED_PREFIX: &str = "__";

pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// The members every object has, whatever its type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseMember {
    TypeName,
    Text,
    Identity,
    Eq,
    Hash,
}

impl BaseMember {
    pub const ALL: [BaseMember; 5] = [
        BaseMember::TypeName,
        BaseMember::Text,
        BaseMember::Identity,
        BaseMember::Eq,
        BaseMember::Hash,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BaseMember::TypeName => "__type__",
            BaseMember::Text => "__text__",
            BaseMember::Identity => "__id__",
            BaseMember::Eq => "__eq__",
            BaseMember::Hash => "__hash__",
        }
    }

    pub fn from_name(name: &str) -> Option<BaseMember> {
        BaseMember::ALL
            .iter()
            .copied()
            .find(|member| member.name() == name)
    }

    /// Applies the default behavior of this member to `receiver`.
    ///
    /// `Eq` takes one argument and compares by identity; every other member
    /// takes none.
    pub fn invoke(self, receiver: &Rc<dyn Object>, args: &[Value]) -> Result<Value> {
        let expected = if self == BaseMember::Eq { 1 } else { 0 };
        Error::check_arity(self.name(), args, expected)?;

        let value = match self {
            BaseMember::TypeName => Value::Str(receiver.type_name().to_string()),
            BaseMember::Text => Value::Str(receiver.to_string()),
            BaseMember::Identity => Value::Int(object_address(receiver) as i64),
            BaseMember::Eq => match &args[0] {
                Value::Object(other) => Value::Bool(object_address(receiver) == object_address(other)),
                _ => Value::Bool(false),
            },
            BaseMember::Hash => {
                let mut hasher = DefaultHasher::new();
                object_address(receiver).hash(&mut hasher);
                Value::Int(hasher.finish() as i64)
            }
        };
        Ok(value)
    }
}
