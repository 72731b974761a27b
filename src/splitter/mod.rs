//! Quote- and comment-aware splitting of .sql files into statements
//!
//! The splitter partitions a file's raw text into an ordered sequence of
//! [`Statement`] records without dropping, duplicating, or reordering a
//! single byte: concatenating every statement's text reproduces the input
//! exactly. Interstitial whitespace/comment runs between statements become
//! their own records so later rewrites of the file lose nothing.

mod scanner;

pub use scanner::split_statements;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::SchemaLintError;

/// A file containing zero or more SQL statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFile {
    pub dir: PathBuf,
    pub file_name: String,
}

impl SqlFile {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        SqlFile {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    /// The full path to the file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Reads the file contents in full. Splitting itself never performs I/O;
    /// callers may also obtain contents elsewhere and call
    /// [`split_statements`] directly.
    pub fn read(&self) -> Result<String, SchemaLintError> {
        std::fs::read_to_string(self.path()).map_err(|source| SchemaLintError::SqlFileRead {
            path: self.path(),
            source,
        })
    }

    /// Reads and splits the file in one call. A structural error (unterminated
    /// quote or block comment) is reported alongside whatever statements were
    /// recovered, never instead of them.
    pub fn parse(&self) -> Result<(Vec<Statement>, Option<SchemaLintError>), SchemaLintError> {
        let contents = self.read()?;
        Ok(split_statements(self, &contents))
    }
}

impl From<&Path> for SqlFile {
    fn from(path: &Path) -> Self {
        let dir = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        SqlFile { dir, file_name }
    }
}

impl fmt::Display for SqlFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

/// One segment of a parsed SQL file: either a content segment (ends with a
/// `;` terminator, or is the final dangling segment), or an interstitial
/// segment of whitespace and/or comments preceding a content segment.
///
/// `text` is a byte-exact slice of the original file; `line_no` and `char_no`
/// are the 1-based position of the segment's first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub file: SqlFile,
    pub line_no: usize,
    pub char_no: usize,
    pub text: String,
}
