//! Common error type.

use crate::stack::EmptyStack;
use core::fmt::{self, Display};
use lifo_parse::Error as ParseError;

/// Common error type.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Empty(EmptyStack),
    Parse(ParseError),
}

impl From<EmptyStack> for Error {
    fn from(err: EmptyStack) -> Self {
        Self::Empty(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(e) => e.fmt(f),
            Self::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
