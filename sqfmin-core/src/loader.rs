//! Source loading and output utilities
//!
//! This module provides `SourceLoader` - a small wrapper for loading SQF source
//! from files or strings and running the stripper on it - plus the helpers
//! that decide where minified output goes.
//!
//! # Example
//!
//! ```rust
//! use sqfmin_core::loader::{minify_file, OutputTarget, SourceLoader};
//! use sqfmin_core::stripping::StripOptions;
//!
//! // From file
//! let minified = SourceLoader::from_path("init.sqf").unwrap().strip();
//!
//! // From string
//! let minified = SourceLoader::from_string("hint \"hi\"; // greet\n").strip();
//!
//! // Load, strip and write `init-min.sqf` next to the input
//! minify_file("init.sqf", &OutputTarget::Default, &StripOptions::default(), "-min").unwrap();
//! ```

use crate::stripping::{self, StripOptions, Token};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix appended to the file stem when no output path is given
pub const DEFAULT_SUFFIX: &str = "-min";

/// Error that can occur when loading sources or writing output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// The input file does not exist
    NotFound(PathBuf),
    /// Any other IO error
    Io(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::NotFound(path) => write!(f, "Cannot find file: \"{}\"", path.display()),
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<io::Error> for LoaderError {
    fn from(err: io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// Where `minify_file` puts its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Only return the minified text
    None,
    /// Write next to the input as `<stem><suffix><extension>`
    Default,
    /// Write to the given path
    Path(PathBuf),
}

/// Source loader with stripping shortcuts
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoaderError::NotFound(path.to_path_buf()),
            _ => LoaderError::from(err),
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");
        Ok(SourceLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// The loaded source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Minify the source with the default options
    pub fn strip(&self) -> String {
        stripping::strip(&self.source)
    }

    /// Minify the source
    pub fn strip_with(&self, options: &StripOptions) -> String {
        stripping::strip_with(&self.source, options)
    }

    /// Tokenize the source, keeping byte spans
    pub fn tokenize(&self) -> Vec<(Token, logos::Span)> {
        stripping::tokenize_with_spans(&self.source)
    }
}

/// Load code from a file if `path_or_code` names one, else use it as code
pub fn load_code(path_or_code: &str) -> Result<SourceLoader, LoaderError> {
    if Path::new(path_or_code).is_file() {
        SourceLoader::from_path(path_or_code)
    } else {
        Ok(SourceLoader::from_string(path_or_code))
    }
}

/// Derive `<stem><suffix><extension>` in the same directory as `input`
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    output_path_with_extension(input, suffix, input.extension())
}

/// Like [`default_output_path`], but with `extension` in place of the input's
pub fn output_path_with_extension(
    input: &Path,
    suffix: &str,
    extension: Option<&OsStr>,
) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix);
    if let Some(extension) = extension {
        name.push(".");
        name.push(extension);
    }
    input.with_file_name(name)
}

/// Load `input`, minify it and write the result according to `target`
///
/// Returns the minified text in every case.
pub fn minify_file<P: AsRef<Path>>(
    input: P,
    target: &OutputTarget,
    options: &StripOptions,
    suffix: &str,
) -> Result<String, LoaderError> {
    let input = input.as_ref();
    let minified = SourceLoader::from_path(input)?.strip_with(options);

    let output_path = match target {
        OutputTarget::None => None,
        OutputTarget::Default => Some(default_output_path(input, suffix)),
        OutputTarget::Path(path) => Some(path.clone()),
    };

    if let Some(path) = output_path {
        fs::write(&path, &minified)?;
        tracing::info!(path = %path.display(), bytes = minified.len(), "wrote minified output");
    }

    Ok(minified)
}
