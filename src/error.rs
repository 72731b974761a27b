//! Error types for mysql-schemalint

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and splitting schema files.
///
/// Splitting errors are structural (malformed input); the splitter still
/// returns every statement recovered before the error so callers keep
/// positional context.
#[derive(Error, Debug)]
pub enum SchemaLintError {
    #[error("Failed to read SQL file: {path}")]
    SqlFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {path} has unterminated quote {quote}")]
    UnterminatedQuote { path: PathBuf, quote: char },

    #[error("File {path} has unterminated C-style comment")]
    UnterminatedBlockComment { path: PathBuf },
}
