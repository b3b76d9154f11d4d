use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::error::Error;
use crate::object::{Method, Object, Value};

/// An object whose members are a mutable name/value table. Members can be
/// added and removed through a shared reference, which makes it useful for
/// exercising snapshot behavior.
#[derive(Default)]
pub struct Record {
    fields: RefCell<BTreeMap<String, Value>>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    pub fn with<V: Into<Value>>(self, name: &str, value: V) -> Self {
        self.set(name, value);
        self
    }

    pub fn set<V: Into<Value>>(&self, name: &str, value: V) {
        self.fields.borrow_mut().insert(name.to_string(), value.into());
    }

    pub fn remove(&self, name: &str) -> Option<Value> {
        self.fields.borrow_mut().remove(name)
    }

    pub fn len(&self) -> usize {
        self.fields.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.borrow().is_empty()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "record {{")?;
        for (i, (name, value)) in self.fields.borrow().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: {}", name, value)?;
        }
        write!(f, " }}")
    }
}

impl Object for Record {
    fn member_names(&self) -> Vec<String> {
        self.fields.borrow().keys().cloned().collect()
    }

    fn get_member(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    fn type_name(&self) -> &str {
        "record"
    }
}

/// An object with a fixed surface: a `count` field and two methods bound to
/// it, `increment` and `add`.
#[derive(Default)]
pub struct Counter {
    count: Rc<Cell<i64>>,
}

impl Counter {
    pub fn new(count: i64) -> Self {
        Counter {
            count: Rc::new(Cell::new(count)),
        }
    }

    pub fn count(&self) -> i64 {
        self.count.get()
    }

    pub fn increment(&self) {
        self.count.set(self.count.get() + 1);
    }
}

impl Display for Counter {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "counter({})", self.count.get())
    }
}

impl Object for Counter {
    fn member_names(&self) -> Vec<String> {
        vec!["add".into(), "count".into(), "increment".into()]
    }

    fn get_member(&self, name: &str) -> Option<Value> {
        let count = self.count.clone();
        let method = match name {
            "count" => return Some(Value::Int(self.count.get())),
            "increment" => Method::new("increment", move |args| {
                Error::check_arity("increment", args, 0)?;
                count.set(count.get() + 1);
                Ok(Value::Int(count.get()))
            }),
            "add" => Method::new("add", move |args| {
                Error::check_arity("add", args, 1)?;
                count.set(count.get() + args[0].expect_int()?);
                Ok(Value::Int(count.get()))
            }),
            _ => return None,
        };
        Some(Value::Method(method))
    }

    fn type_name(&self) -> &str {
        "counter"
    }
}

/// Builds a record with `size` integer fields with random names. Roughly one
/// field in eight gets a reserved name.
pub fn make_record_rand(size: usize, seed: u64) -> Record {
    let mut rng = SmallRng::seed_from_u64(seed);
    let record = Record::new();
    while record.len() < size {
        let n: u32 = rng.gen();
        let name = if rng.gen_ratio(1, 8) {
            format!("__field_{}__", n)
        } else {
            format!("field_{}", n)
        };
        record.set(&name, rng.gen::<i64>());
    }
    record
}
