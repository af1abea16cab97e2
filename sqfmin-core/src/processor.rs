//! Output rendering for the CLI
//!
//! Besides the minified text, the token stream the stripper works on can be
//! dumped for debugging, either as a compact tag stream or as JSON.

use crate::stripping::{self, StripOptions, Token};
use serde::Serialize;
use std::fmt;

/// What to produce from a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitFormat {
    Minified,
    TokensSimple,
    TokensJson,
}

impl EmitFormat {
    /// Parse a format name such as "minified" or "tokens-json"
    pub fn from_string(name: &str) -> Result<Self, ProcessingError> {
        match name {
            "minified" => Ok(EmitFormat::Minified),
            "tokens-simple" => Ok(EmitFormat::TokensSimple),
            "tokens-json" => Ok(EmitFormat::TokensJson),
            _ => Err(ProcessingError::InvalidFormat(name.to_string())),
        }
    }

    /// The name accepted by `from_string`
    pub fn name(&self) -> &'static str {
        match self {
            EmitFormat::Minified => "minified",
            EmitFormat::TokensSimple => "tokens-simple",
            EmitFormat::TokensJson => "tokens-json",
        }
    }

    /// Extension for derived output paths, `None` keeps the input's own
    pub fn output_extension(&self) -> Option<&'static str> {
        match self {
            EmitFormat::Minified => None,
            EmitFormat::TokensSimple => Some("tokens"),
            EmitFormat::TokensJson => Some("json"),
        }
    }
}

/// Get all available format names
pub fn available_formats() -> Vec<&'static str> {
    [
        EmitFormat::Minified,
        EmitFormat::TokensSimple,
        EmitFormat::TokensJson,
    ]
    .iter()
    .map(EmitFormat::name)
    .collect()
}

/// Errors that can occur during rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    InvalidFormat(String),
    Serialization(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(
                f,
                "Invalid format: {} (expected one of: {})",
                format,
                available_formats().join(", ")
            ),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

#[derive(Serialize)]
struct SpannedToken {
    token: Token,
    start: usize,
    end: usize,
}

/// Render `source` in the requested format
pub fn render(
    source: &str,
    format: EmitFormat,
    options: &StripOptions,
) -> Result<String, ProcessingError> {
    match format {
        EmitFormat::Minified => Ok(stripping::strip_with(source, options)),
        EmitFormat::TokensSimple => Ok(format_tokens_simple(source)),
        EmitFormat::TokensJson => {
            let tokens: Vec<SpannedToken> = stripping::tokenize_with_spans(source)
                .into_iter()
                .map(|(token, span)| SpannedToken {
                    token,
                    start: span.start,
                    end: span.end,
                })
                .collect();
            serde_json::to_string_pretty(&tokens)
                .map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
    }
}

/// One `<kind:text>` tag per token, with a line break after each newline
fn format_tokens_simple(source: &str) -> String {
    let mut result = String::new();
    for (token, span) in stripping::tokenize_with_spans(source) {
        match token {
            Token::Newline => result.push_str("<newline>\n"),
            _ => {
                let tag = token.to_string();
                let kind = tag.trim_start_matches('<').trim_end_matches('>');
                result.push_str(&format!("<{}:{}>", kind, &source[span]));
            }
        }
    }
    result
}
