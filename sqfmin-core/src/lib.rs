//! # sqfmin-core
//!
//! Comment and whitespace stripping for SQF sources.
//!
//! - [`stripping`]: the tokenizer and the four stripping passes
//! - [`loader`]: reading sources, deriving output paths, writing results
//! - [`processor`]: rendering minified text or token dumps
//!
//! ```rust
//! let minified = sqfmin_core::strip("_x = 1; // one\n_y = 2;");
//! assert_eq!(minified, "_x = 1; _y = 2;");
//! ```

pub mod loader;
pub mod processor;
pub mod stripping;

pub use stripping::{strip, strip_with, StripOptions};
