use crate::{CmdIter, Token};
use core::fmt::{self, Display};

/// A value that can be pushed onto a stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value<S> {
    Int(i64),
    Str(S),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<S> {
    // Add a value to the top of the stack
    Push(Value<S>),
    // Remove and show the top of the stack
    Pop,
    // Show the top of the stack
    Peek,
    // Show the number of values on the stack
    Size,
    // Show whether the stack is empty
    Empty,
    // Remove all values from the stack
    Clear,
}

impl<S> Value<S> {
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Value<T> {
        match self {
            Self::Int(i) => Value::Int(i),
            Self::Str(s) => Value::Str(f(s)),
        }
    }
}

impl<S> Command<S> {
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Command<T> {
        match self {
            Self::Push(v) => Command::Push(v.map(f)),
            Self::Pop => Command::Pop,
            Self::Peek => Command::Peek,
            Self::Size => Command::Size,
            Self::Empty => Command::Empty,
            Self::Clear => Command::Clear,
        }
    }
}

impl<S: Display> Display for Value<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl<S: Display> Display for Command<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Push(v) => write!(f, "push {}", v),
            Self::Pop => write!(f, "pop"),
            Self::Peek => write!(f, "peek"),
            Self::Size => write!(f, "size"),
            Self::Empty => write!(f, "empty"),
            Self::Clear => write!(f, "clear"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    ExpectedCmd,
    ExpectedValue,
    ExpectedPeriod,
    InvalidToken,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let s = match self {
            Self::ExpectedCmd => "expected command",
            Self::ExpectedValue => "expected value to push",
            Self::ExpectedPeriod => "expected period",
            Self::InvalidToken => "invalid token",
        };
        s.fmt(f)
    }
}

#[derive(Debug)]
pub(crate) enum State<S> {
    /// nothing
    Init,
    /// `push`
    Push,
    /// command that awaits its period
    Open(Command<S>),
    /// command followed by its period
    Closed(Command<S>),
}

impl<'s> State<&'s str> {
    pub fn parse(self, token: Token<'s>) -> Result<Self, Error> {
        match (self, token) {
            (_, Token::Error) => Err(Error::InvalidToken),

            // starting commands
            (State::Init, Token::Push) => Ok(State::Push),
            (State::Init, Token::Pop) => Ok(State::Open(Command::Pop)),
            (State::Init, Token::Peek) => Ok(State::Open(Command::Peek)),
            (State::Init, Token::Size) => Ok(State::Open(Command::Size)),
            (State::Init, Token::Empty) => Ok(State::Open(Command::Empty)),
            (State::Init, Token::Clear) => Ok(State::Open(Command::Clear)),
            (State::Init, _) => Err(Error::ExpectedCmd),

            // push + value
            (State::Push, Token::Int(i)) => Ok(State::Open(Command::Push(Value::Int(i)))),
            (State::Push, Token::Str(s) | Token::Ident(s)) => {
                Ok(State::Open(Command::Push(Value::Str(s))))
            }
            (State::Push, _) => Err(Error::ExpectedValue),

            // command + .
            (State::Open(cmd), Token::Dot) => Ok(State::Closed(cmd)),
            (State::Open(_), _) => Err(Error::ExpectedPeriod),

            (State::Closed(_), _) => Err(Error::ExpectedCmd),
        }
    }
}

impl<'s> Command<&'s str> {
    pub fn parse_str(s: &'s str) -> Result<Self, crate::Error> {
        let err = Err(crate::Error::ExpectedInput);
        CmdIter::new(s).next().unwrap_or(err)
    }
}

#[test]
fn positive() -> Result<(), crate::Error> {
    assert_eq!(Command::parse_str("push 1.")?, Command::Push(Value::Int(1)));
    assert_eq!(Command::parse_str("push -1.")?, Command::Push(Value::Int(-1)));
    assert_eq!(Command::parse_str("push x.")?, Command::Push(Value::Str("x")));
    assert_eq!(Command::parse_str("push \"a b\".")?, Command::Push(Value::Str("a b")));
    assert_eq!(Command::parse_str("pop.")?, Command::Pop);
    assert_eq!(Command::parse_str("peek .")?, Command::Peek);
    assert_eq!(Command::parse_str("size.")?, Command::Size);
    assert_eq!(Command::parse_str("empty.")?, Command::Empty);
    assert_eq!(Command::parse_str("(; reset ;) clear.")?, Command::Clear);
    Ok(())
}

#[test]
fn negative() {
    use Error::*;
    let parse_err = |s: &str| match Command::parse_str(s) {
        Err(crate::Error::Command(e)) => e,
        _ => panic!("command error expected"),
    };
    assert_eq!(parse_err("."), ExpectedCmd);
    assert_eq!(parse_err("42."), ExpectedCmd);
    assert_eq!(parse_err("push."), ExpectedValue);
    assert_eq!(parse_err("push pop."), ExpectedValue);
    assert_eq!(parse_err("push 1 2."), ExpectedPeriod);
    assert_eq!(parse_err("pop pop."), ExpectedPeriod);
    assert_eq!(parse_err("push #."), InvalidToken);
}

#[test]
fn display() {
    use alloc::string::ToString;
    let push = |v: Value<&str>| Command::Push(v).to_string();
    assert_eq!(push(Value::Int(-2)), "push -2");
    assert_eq!(push(Value::Str("a b")), "push \"a b\"");
    assert_eq!(Command::<&str>::Empty.to_string(), "empty");
}

#[test]
fn map() {
    use alloc::string::String;
    let cmd = Command::Push(Value::Str("x")).map(String::from);
    assert_eq!(cmd, Command::Push(Value::Str(String::from("x"))));
    assert_eq!(Command::<&str>::Pop.map(String::from), Command::Pop);
}
