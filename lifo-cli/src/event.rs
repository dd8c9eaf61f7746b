use core::fmt::{self, Display};
use lifo::parse::Command;
use std::path::PathBuf;

/// Commands with interspersed script opening.
#[derive(Debug)]
pub enum Event {
    /// Start a new script
    Script(PathBuf),
    /// Run a command of the last started script
    Command(Command<String>),
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Script(path) => write!(f, "Open script {}", path.display()),
            Self::Command(cmd) => write!(f, "{}.", cmd),
        }
    }
}
