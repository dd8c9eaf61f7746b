//! Parser for stack scripts.
//!
//! A stack script is a sequence of commands, each terminated by a period:
//!
//! ~~~ text
//! push 1. push "two". push three.
//! pop. peek. size. empty. clear.
//! (; comments (; nest ;) ;)
//! ~~~
//!
//! Example usage:
//!
//! ~~~
//! use lifo_parse::{CmdIter, Command, Error, Value};
//!
//! let cmds = "push 1. push \"two\". pop.";
//! let cmds: Result<Vec<_>, _> = CmdIter::new(cmds).collect();
//! let cmds = cmds?;
//! assert_eq!(cmds.len(), 3);
//! assert_eq!(cmds[1], Command::Push(Value::Str("two")));
//! # Ok::<_, Error>(())
//! ~~~
#![no_std]

extern crate alloc;

pub mod cmd;
mod cmditer;
pub mod lex;

pub use cmd::{Command, Value};
pub use cmditer::{CmdIter, Error};
pub use lex::Token;

use logos::Logos;

/// Lex a string, omitting whitespace and comments.
pub fn lex(s: &str) -> impl Iterator<Item = Token<'_>> {
    Token::lexer(s).filter(|token| *token != Token::Space)
}

#[test]
fn lex_skips_space() {
    use alloc::vec::Vec;
    let tokens: Vec<_> = lex("push  1 (; one ;) .").collect();
    assert_eq!(tokens, [Token::Push, Token::Int(1), Token::Dot]);
}
