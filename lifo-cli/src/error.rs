use core::fmt::{self, Display};
use std::io;

/// Central error type.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Lifo(lifo::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<lifo::Error> for Error {
    fn from(err: lifo::Error) -> Self {
        Self::Lifo(err)
    }
}

impl From<lifo::EmptyStack> for Error {
    fn from(err: lifo::EmptyStack) -> Self {
        Self::Lifo(err.into())
    }
}

impl From<lifo::parse::Error> for Error {
    fn from(err: lifo::parse::Error) -> Self {
        Self::Lifo(err.into())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Lifo(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {}
