use core::fmt::{self, Display};
use logos::{Lexer, Logos};

#[derive(Logos, Clone, Debug, PartialEq)]
pub enum Token<'s> {
    #[token("push")]
    Push,

    #[token("pop")]
    Pop,

    #[token("peek")]
    Peek,

    #[token("size")]
    Size,

    #[token("empty")]
    Empty,

    #[token("clear")]
    Clear,

    #[token(".")]
    Dot,

    #[regex("-?[0-9]+", |lex| lex.slice().parse())]
    Int(i64),

    #[regex(r#""[^"]*""#, string)]
    #[regex(r#""[^"]*"#, unterminated)]
    Str(&'s str),

    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident(&'s str),

    #[regex(r"[ \t\r\n\f]+")]
    #[token("(;", comment)]
    Space,

    // Logos requires one token variant to handle errors,
    // it can be named anything you wish.
    #[error]
    Error,
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let s = match self {
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Peek => "peek",
            Self::Size => "size",
            Self::Empty => "empty",
            Self::Clear => "clear",
            Self::Dot => ".",
            Self::Int(i) => return i.fmt(f),
            Self::Str(s) => return write!(f, "\"{}\"", s),
            Self::Ident(s) => s,
            Self::Space => " ",
            Self::Error => "<error>",
        };
        s.fmt(f)
    }
}

/// Strip the quotes from a string literal.
fn string<'s>(lex: &mut Lexer<'s, Token<'s>>) -> Option<&'s str> {
    lex.slice().strip_prefix('"')?.strip_suffix('"')
}

/// A string literal without closing quote is an error up to the end of input.
fn unterminated<'s>(_: &mut Lexer<'s, Token<'s>>) -> Option<&'s str> {
    None
}

fn comment<'s>(lex: &mut Lexer<'s, Token<'s>>) -> Option<()> {
    // number of open comments
    let mut open = 1;
    let prefix: &[_] = &['(', ';'];
    while open > 0 {
        // go to first occurrence of either ';' or '('
        match lex.remainder().find(prefix) {
            Some(pos) => lex.bump(pos),
            None => {
                // an unterminated comment is an error up to the end of input
                lex.bump(lex.remainder().len());
                return None;
            }
        }
        if lex.remainder().starts_with("(;") {
            open += 1;
            lex.bump(2);
        } else if lex.remainder().starts_with(";)") {
            open -= 1;
            lex.bump(2);
        } else {
            lex.bump(1);
        }
    }
    Some(())
}

#[cfg(test)]
fn tokens(s: &str) -> alloc::vec::Vec<Token<'_>> {
    Token::lexer(s).collect()
}

#[test]
fn values() {
    use Token::*;
    assert_eq!(tokens("42 -7"), [Int(42), Space, Int(-7)]);
    assert_eq!(tokens(r#""hello world""#), [Str("hello world")]);
    assert_eq!(tokens(r#""""#), [Str("")]);
    assert_eq!(tokens("pushed _x1"), [Ident("pushed"), Space, Ident("_x1")]);
}

#[test]
fn keywords() {
    use Token::*;
    let toks = tokens("push pop peek size empty clear.");
    let expected = [
        Push, Space, Pop, Space, Peek, Space, Size, Space, Empty, Space, Clear, Dot,
    ];
    assert_eq!(toks, expected);
}

#[test]
fn comments() {
    use Token::*;
    assert_eq!(tokens("pop(; a (; nested ;) comment ;)."), [Pop, Space, Dot]);
    // unterminated comments extend to the end of input
    assert_eq!(tokens("pop (; pop."), [Pop, Space, Error]);
}

#[test]
fn errors() {
    assert!(tokens("push #").contains(&Token::Error));
    // unterminated strings extend to the end of input
    assert_eq!(tokens("push \"open. pop."), [Token::Push, Token::Space, Token::Error]);
    // integer out of range
    assert_eq!(tokens("99999999999999999999"), [Token::Error]);
}

#[test]
fn display() {
    use alloc::string::ToString;
    assert_eq!(Token::Str("a b").to_string(), "\"a b\"");
    assert_eq!(Token::Int(-3).to_string(), "-3");
    assert_eq!(Token::Peek.to_string(), "peek");
    assert_eq!(Token::Error.to_string(), "<error>");
}
