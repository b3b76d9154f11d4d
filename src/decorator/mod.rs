#[cfg(feature = "full")]
mod debug;

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::object::{is_reserved, BaseMember, Object, Value};
use crate::wrap::Wrap;

/// The one member a decorator declares for itself.
pub const UNDECORATED: &str = "undecorated";

/// A transparent proxy around a shared instance of `T`.
///
/// # Example
/// ```
/// # use veneer::test_utils::Record;
/// use veneer::{Decorator, Value};
///
/// let record = Record::new().with("name", "ada");
/// let decorated = Decorator::new(record);
/// assert_eq!(decorated.resolve("name").unwrap(), Value::from("ada"));
/// assert!(decorated.resolve("missing").is_err());
/// ```
pub struct Decorator<T: Object + 'static> {
    inner: Rc<T>,
    // public member names of `inner`, captured once
    members: BTreeSet<String>,
    // the instance `inner` decorates, if `inner` is a decorator
    nested: Option<Rc<dyn Object>>,
}

impl<T: Object + 'static> Decorator<T> {
    pub fn new(value: T) -> Decorator<T> {
        Decorator::wrap(Rc::new(value))
    }

    /// Decorates an instance which the caller may keep using through its own
    /// handle.
    pub fn wrap(inner: Rc<T>) -> Decorator<T> {
        let members: BTreeSet<String> = inner
            .member_names()
            .into_iter()
            .filter(|name| !is_reserved(name))
            .collect();
        let nested = inner.decorated();

        trace!(
            target_type = inner.type_name(),
            members = members.len(),
            nested = nested.is_some(),
            "created decorator"
        );

        Decorator {
            inner,
            members,
            nested,
        }
    }

    /// Looks up a member by name: the decorator's own `undecorated`, then
    /// names captured from the wrapped instance, then the instance one level
    /// down if the wrapped instance is a decorator, then the base members.
    pub fn resolve(&self, name: &str) -> Result<Value> {
        if let Some(value) = self.own_member(name) {
            return Ok(value);
        }

        if self.members.contains(name) {
            trace!(member = name, tier = "wrapped", "resolving member");
            return self.inner.get_member(name).ok_or_else(|| {
                debug!(member = name, "snapshot member no longer declared");
                Error::member_not_found(name, self.inner.type_name())
            });
        }

        // reserved names are never delegated, at any depth
        if let Some(nested) = self.nested.as_ref().filter(|_| !is_reserved(name)) {
            if let Some(value) = nested.get_member(name) {
                trace!(member = name, tier = "nested", "resolving member");
                return Ok(value);
            }
        }

        match BaseMember::from_name(name) {
            Some(member) => {
                trace!(member = name, tier = "base", "resolving member");
                Ok(Value::Base(member))
            }
            None => {
                debug!(
                    member = name,
                    target_type = self.inner.type_name(),
                    "member not found"
                );
                Err(Error::member_not_found(name, self.inner.type_name()))
            }
        }
    }

    /// Resolves `name` and invokes it with `args`. Base-object members are
    /// applied to the wrapped instance.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        match self.resolve(name)? {
            Value::Method(method) => method.call(args),
            Value::Base(member) => member.invoke(&self.shared_inner(), args),
            other => Err(Error::NotCallable(format!(
                "{} resolved to {}",
                name,
                other.describe()
            ))),
        }
    }

    pub fn to_text(&self) -> String {
        self.inner.to_string()
    }

    /// Returns the directly wrapped instance. Does not look through nested
    /// decorators.
    pub fn undecorated(&self) -> Rc<T> {
        self.inner.clone()
    }

    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    pub fn is_nested(&self) -> bool {
        self.nested.is_some()
    }

    fn own_member(&self, name: &str) -> Option<Value> {
        match name {
            UNDECORATED => Some(Value::Object(self.shared_inner())),
            _ => None,
        }
    }

    fn shared_inner(&self) -> Rc<dyn Object> {
        self.inner.clone()
    }
}

impl<T: Object + 'static> Object for Decorator<T> {
    fn member_names(&self) -> Vec<String> {
        vec![UNDECORATED.to_string()]
    }

    fn get_member(&self, name: &str) -> Option<Value> {
        self.own_member(name).or_else(|| self.resolve(name).ok())
    }

    fn type_name(&self) -> &str {
        "decorator"
    }

    fn decorated(&self) -> Option<Rc<dyn Object>> {
        Some(self.shared_inner())
    }
}

impl<T: Object + 'static> Display for Decorator<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self.inner.as_ref(), f)
    }
}

impl<T: Object + 'static> Deref for Decorator<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Object + 'static> Wrap<T> for Decorator<T> {
    fn inner(&self) -> &T {
        &self.inner
    }

    fn inner_mut(&mut self) -> Option<&mut T> {
        Rc::get_mut(&mut self.inner)
    }

    fn into_inner(self) -> std::result::Result<T, Self> {
        let Decorator {
            inner,
            members,
            nested,
        } = self;
        Rc::try_unwrap(inner).map_err(|inner| Decorator {
            inner,
            members,
            nested,
        })
    }
}

impl<T: Object + 'static> Clone for Decorator<T> {
    fn clone(&self) -> Self {
        Decorator {
            inner: self.inner.clone(),
            members: self.members.clone(),
            nested: self.nested.clone(),
        }
    }
}

impl<T: Object + 'static> From<T> for Decorator<T> {
    fn from(value: T) -> Self {
        Decorator::new(value)
    }
}
