//! Transparent delegating decorators.
//!
//! A [`Decorator`] wraps a shared instance of any type implementing
//! [`Object`] and resolves member lookups against it, against one further
//! level when decorators are stacked, and finally against the members every
//! object has ([`BaseMember`]).

mod error;
mod decorator;
pub mod object;
pub mod wrap;
#[cfg(feature = "full")]
pub mod test_utils;

pub use error::{Error, Result};
pub use decorator::{Decorator, UNDECORATED};
pub use object::{BaseMember, Method, Object, Value};
pub use wrap::Wrap;
