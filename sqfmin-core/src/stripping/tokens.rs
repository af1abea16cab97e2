//! Token definitions for SQF sources
//!
//! The stripper never needs a full SQF grammar. It only has to tell comments,
//! directive markers, quotes and whitespace apart from everything else, so the
//! token set is deliberately coarse: anything that is none of the above is
//! `Text`. Every byte of the input belongs to exactly one token.
use logos::{Lexer, Logos};
use serde::Serialize;
use std::fmt;

/// All tokens the stripper distinguishes
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Token {
    // Any run of two or more slashes up to the end of the line
    #[regex(r"//[^\r\n]*")]
    LineComment,

    // Extended by the callback to the closing `*/`, or to end of input
    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r"\r\n|\r|\n")]
    Newline,

    #[token("#")]
    Hash,

    #[token("\"")]
    DoubleQuote,

    #[token("'")]
    SingleQuote,

    #[token("\t")]
    Tab,

    #[regex(r" +")]
    Spaces,

    // A lone slash (division)
    #[token("/")]
    Slash,

    // Catch-all for everything else
    #[regex(r#"[^/\r\n\t "'#]+"#)]
    Text,
}

/// Consume a block comment body. Comments never nest: the first `*/` closes.
fn block_comment(lex: &mut Lexer<Token>) {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
}

impl Token {
    /// The closing character if this token opens a string literal
    pub fn quote_char(&self) -> Option<char> {
        match self {
            Token::DoubleQuote => Some('"'),
            Token::SingleQuote => Some('\''),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Token::LineComment => "line-comment",
            Token::BlockComment => "block-comment",
            Token::Newline => "newline",
            Token::Hash => "hash",
            Token::DoubleQuote => "double-quote",
            Token::SingleQuote => "single-quote",
            Token::Tab => "tab",
            Token::Spaces => "spaces",
            Token::Slash => "slash",
            Token::Text => "text",
        };
        write!(f, "<{}>", tag)
    }
}
