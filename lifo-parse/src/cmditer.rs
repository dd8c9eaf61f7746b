use crate::{cmd, Command, Token};
use core::fmt::{self, Display};
use logos::Logos;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Command(cmd::Error),
    ExpectedInput,
}

impl From<cmd::Error> for Error {
    fn from(err: cmd::Error) -> Self {
        Self::Command(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Command(e) => e.fmt(f),
            Self::ExpectedInput => "unexpected end of input".fmt(f),
        }
    }
}

/// Iterator over the commands of a string.
pub struct CmdIter<'s> {
    lexer: logos::Lexer<'s, Token<'s>>,
}

impl<'s> CmdIter<'s> {
    pub fn new(s: &'s str) -> Self {
        Self {
            lexer: Token::lexer(s),
        }
    }

    /// Return the number of bytes lexed so far.
    ///
    /// After a command has been returned, this is
    /// the position right after the period that closes the command.
    /// After an error, this is the end of the token that caused it.
    pub fn offset(&self) -> usize {
        self.lexer.span().end
    }
}

impl<'s> Iterator for CmdIter<'s> {
    type Item = Result<Command<&'s str>, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        use cmd::State;

        let mut state = State::Init;
        let mut token_seen = false;

        for next in self.lexer.by_ref().filter(|token| *token != Token::Space) {
            token_seen = true;
            match state.parse(next) {
                Ok(State::Closed(cmd)) => return Some(Ok(cmd)),
                Ok(st) => state = st,
                Err(e) => return Some(Err(e.into())),
            }
        }
        token_seen.then(|| Err(Error::ExpectedInput))
    }
}

#[cfg(test)]
fn parse_all(s: &str) -> Result<alloc::vec::Vec<Command<&str>>, Error> {
    CmdIter::new(s).collect()
}

#[test]
fn sequence() -> Result<(), Error> {
    use crate::Value;
    let cmds = parse_all("push 1. push two.\npop.(; done ;)size.")?;
    let expected = [
        Command::Push(Value::Int(1)),
        Command::Push(Value::Str("two")),
        Command::Pop,
        Command::Size,
    ];
    assert_eq!(cmds, expected);
    Ok(())
}

#[test]
fn no_input() {
    assert_eq!(CmdIter::new("").next(), None);
    assert_eq!(CmdIter::new(" \n\t").next(), None);
    assert_eq!(CmdIter::new("(; only a comment ;)").next(), None);
}

#[test]
fn truncated() {
    let mut iter = CmdIter::new("pop. push 3");
    assert_eq!(iter.next(), Some(Ok(Command::Pop)));
    assert_eq!(iter.next(), Some(Err(Error::ExpectedInput)));
    assert_eq!(iter.next(), None);

    assert_eq!(parse_all("clear"), Err(Error::ExpectedInput));
}

#[test]
fn stops_at_error() {
    let mut iter = CmdIter::new("size. peek 1. empty.");
    assert_eq!(iter.next(), Some(Ok(Command::Size)));
    let err = Error::Command(cmd::Error::ExpectedPeriod);
    assert_eq!(iter.next(), Some(Err(err)));
}

#[test]
fn offset() {
    let s = "push 1. (; c ;) pop. size";
    let mut iter = CmdIter::new(s);
    assert_eq!(iter.offset(), 0);
    iter.next();
    assert_eq!(&s[..iter.offset()], "push 1.");
    iter.next();
    assert_eq!(&s[iter.offset()..], " size");
    assert_eq!(iter.next(), Some(Err(Error::ExpectedInput)));
    assert_eq!(iter.offset(), s.len());

    let mut iter = CmdIter::new("push # pop.");
    let err = Error::Command(cmd::Error::InvalidToken);
    assert_eq!(iter.next(), Some(Err(err)));
    assert_eq!(iter.offset(), "push #".len());
}
