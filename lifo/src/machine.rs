//! Running stack script commands.

use crate::error::Error;
use crate::stack::{EmptyStack, Stack};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use lifo_parse::{CmdIter, Command, Value};

/// Result of a successfully run command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// the command has no result (`push`, `clear`)
    Unit,
    /// value removed or inspected by `pop` or `peek`
    Value(Value<String>),
    /// number of values on the stack
    Size(usize),
    /// whether the stack is empty
    Empty(bool),
}

impl Output {
    /// Return true if the output is not worth printing.
    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => Ok(()),
            Self::Value(v) => v.fmt(f),
            Self::Size(n) => n.fmt(f),
            Self::Empty(b) => b.fmt(f),
        }
    }
}

/// A stack of owned values on which commands are run.
#[derive(Debug, Default)]
pub struct Machine {
    stack: Stack<Value<String>>,
}

impl Machine {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn stack(&self) -> &Stack<Value<String>> {
        &self.stack
    }

    /// Run a single command.
    ///
    /// If the command fails, the stack is left unchanged.
    pub fn run<S: Into<String>>(&mut self, cmd: Command<S>) -> Result<Output, EmptyStack> {
        let cmd = cmd.map(Into::into);
        debug!("Run {}", cmd);
        let out = match cmd {
            Command::Push(v) => {
                self.stack.push(v);
                Output::Unit
            }
            Command::Pop => Output::Value(self.stack.pop()?),
            Command::Peek => Output::Value(self.stack.peek()?.clone()),
            Command::Size => Output::Size(self.stack.len()),
            Command::Empty => Output::Empty(self.stack.is_empty()),
            Command::Clear => {
                self.stack.clear();
                Output::Unit
            }
        };
        trace!("Stack size: {}", self.stack.len());
        Ok(out)
    }

    /// Parse and run all commands of a script, returning their outputs.
    ///
    /// Execution stops at the first failing command;
    /// commands run before it keep their effect.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<Output>, Error> {
        CmdIter::new(script)
            .map(|cmd| Ok::<_, Error>(self.run(cmd?)?))
            .collect()
    }
}

#[cfg(test)]
fn int(i: i64) -> Output {
    Output::Value(Value::Int(i))
}

#[test]
fn push_pop_size() -> Result<(), Error> {
    let mut m = Machine::new();
    let out = m.run_script("push 1. push 2. pop. size. pop. size.")?;
    let expected = [
        Output::Unit,
        Output::Unit,
        int(2),
        Output::Size(1),
        int(1),
        Output::Size(0),
    ];
    assert_eq!(out, expected);
    assert_eq!(m.run(Command::<&str>::Pop), Err(EmptyStack));
    Ok(())
}

#[test]
fn peek_empty_clear() -> Result<(), Error> {
    let mut m = Machine::new();
    assert_eq!(m.run_script("empty.")?, [Output::Empty(true)]);

    let out = m.run_script("push x. push \"y z\". peek. size. empty.")?;
    let y = Output::Value(Value::Str("y z".into()));
    assert_eq!(out[2..], [y, Output::Size(2), Output::Empty(false)]);

    assert_eq!(m.run_script("clear. size. clear.")?[1], Output::Size(0));
    assert!(m.stack().is_empty());
    Ok(())
}

#[test]
fn failure_keeps_stack() {
    let mut m = Machine::new();
    let result = m.run_script("push 1. pop. peek. push 2.");
    assert_eq!(result, Err(Error::Empty(EmptyStack)));
    // commands before the failure took effect, commands after did not
    assert!(m.stack().is_empty());

    let result = m.run_script("push 3. push.");
    assert!(matches!(result, Err(Error::Parse(_))));
    assert_eq!(m.stack().peek(), Ok(&Value::Int(3)));
}

#[test]
fn display() {
    use alloc::string::ToString;
    assert_eq!(Output::Unit.to_string(), "");
    assert_eq!(int(-4).to_string(), "-4");
    assert_eq!(Output::Value(Value::Str("a".into())).to_string(), "\"a\"");
    assert_eq!(Output::Size(3).to_string(), "3");
    assert_eq!(Output::Empty(true).to_string(), "true");
}
