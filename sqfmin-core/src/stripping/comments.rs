//! Comment removal
//!
//! First pass of the stripper. Walks the token stream once, left to right, and
//! drops every comment token. Two kinds of spans are copied through untouched:
//!
//! - Directive lines: a `#` that is the first thing left on a raw line claims
//!   the rest of that line. Only block comments may stand between the line
//!   start and the `#`. Its content is opaque, so `#include "a//b.hpp"` keeps
//!   its slashes.
//! - String literals, but only when [`StripOptions::string_aware`] is set. By
//!   default a `//` inside quotes is a comment like any other.
//!
//! Block comments do not nest and an unterminated one swallows the rest of the
//! input. Neither case is an error.

use crate::stripping::tokens::Token;
use crate::stripping::StripOptions;
use logos::Logos;

/// Remove line and block comments from `source`
pub fn remove_comments(source: &str, options: &StripOptions) -> String {
    let mut output = String::with_capacity(source.len());
    let mut lexer = Token::lexer(source);
    let mut at_line_start = true;

    while let Some(result) = lexer.next() {
        match result.unwrap_or(Token::Text) {
            Token::LineComment => {}
            Token::BlockComment => {
                let comment = lexer.slice();
                if comment.len() < 4 || !comment.ends_with("*/") {
                    tracing::debug!(
                        offset = lexer.span().start,
                        "unterminated block comment runs to end of input"
                    );
                }
                // Removed text does not count, a `#` after it still opens the line
                continue;
            }
            Token::Newline => {
                output.push_str(lexer.slice());
                at_line_start = true;
                continue;
            }
            Token::Hash if at_line_start => {
                let rest = lexer.remainder();
                let line_end = rest.find(|c: char| c == '\r' || c == '\n');
                lexer.bump(line_end.unwrap_or(rest.len()));
                output.push_str(lexer.slice());
            }
            token => match token.quote_char() {
                Some(delimiter) if options.string_aware => {
                    let rest = lexer.remainder();
                    lexer.bump(rest.find(delimiter).map_or(rest.len(), |end| end + 1));
                    output.push_str(lexer.slice());
                }
                _ => output.push_str(lexer.slice()),
            },
        }
        at_line_start = false;
    }

    output
}
