pub use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Member not found: {type_name} has no member '{name}'")]
    MemberNotFound { name: String, type_name: String },
    #[error("Not callable: {0}")]
    NotCallable(String),
    #[error("Arity Error: {name} expects {expected} argument(s), got {actual}")]
    Arity {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn member_not_found(name: &str, type_name: &str) -> Self {
        Error::MemberNotFound {
            name: name.to_string(),
            type_name: type_name.to_string(),
        }
    }

    /// Fails with `Error::Arity` unless `args` holds exactly `expected`
    /// values.
    pub fn check_arity<T>(name: &str, args: &[T], expected: usize) -> Result<()> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(Error::Arity {
                name: name.to_string(),
                expected,
                actual: args.len(),
            })
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
