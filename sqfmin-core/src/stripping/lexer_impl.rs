//! Convenience functions for tokenizing SQF text.
//!
//! The actual tokenization is handled entirely by logos.

use crate::stripping::tokens::Token;
use logos::Logos;

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize a string and collect tokens with their byte spans
///
/// The token set covers every character, so lexer errors cannot occur in
/// practice. Should one surface anyway it is kept as `Text` so that spans stay
/// contiguous and no input is lost.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(Token::Text), lexer.span()));
    }

    tokens
}
