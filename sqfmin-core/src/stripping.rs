//! The stripping engine
//!
//! Turns SQF source into a shorter equivalent by running four passes in order:
//!
//! 1. [`comments`]: drop line and block comments, copy directive lines as-is
//! 2. [`directives`]: put each `#` line on its own line, join all other lines
//! 3. [`whitespace`]: drop tabs, space runs, trailing blanks and blank lines
//! 4. trim a single leading line feed
//!
//! Every pass is a plain function from text to text, so each can be tested on
//! its own. The whole pipeline is total: there is no input it rejects. Running
//! it on its own output gives the same output back.
//!
//! # Known limitation
//!
//! By default string literals are not special. `"http://x"` loses everything
//! after `http:`, matching the behavior existing build scripts rely on. Set
//! [`StripOptions::string_aware`] to keep quoted text intact.

pub mod comments;
pub mod directives;
pub mod lexer_impl;
pub mod tokens;
pub mod whitespace;

pub use comments::remove_comments;
pub use directives::isolate_directives;
pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::Token;
pub use whitespace::{collapse_whitespace, trim_leading_newline};

/// Knobs for the stripping pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripOptions {
    /// Treat `"..."` and `'...'` as literals whose content is never a comment
    pub string_aware: bool,
}

/// Minify `source` with the default options
pub fn strip(source: &str) -> String {
    strip_with(source, &StripOptions::default())
}

/// Minify `source`
pub fn strip_with(source: &str, options: &StripOptions) -> String {
    let uncommented = remove_comments(source, options);
    let isolated = isolate_directives(&uncommented);
    let collapsed = collapse_whitespace(&isolated);
    let output = trim_leading_newline(collapsed);

    tracing::debug!(
        input = source.len(),
        uncommented = uncommented.len(),
        isolated = isolated.len(),
        output = output.len(),
        string_aware = options.string_aware,
        "stripped source"
    );

    output
}
