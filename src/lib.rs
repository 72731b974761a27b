//! mysql-schemalint: text-parsing and structural-comparison core for a
//! MySQL/MariaDB schema-as-code linter
//!
//! This library turns raw `.sql` file contents into addressable statement
//! records, and turns introspected index definitions into comparable
//! structural objects used to detect redundancy and equivalence. It does not
//! execute SQL, generate migration DDL, or validate grammar beyond locating
//! statement boundaries, quotes, and comments.

pub mod error;
pub mod flavor;
pub mod index;
pub mod splitter;
pub mod util;

use anyhow::Result;

pub use error::SchemaLintError;
pub use flavor::{Flavor, Vendor};
pub use splitter::{split_statements, SqlFile, Statement};

/// Splits every supplied file into statements, in file order.
///
/// Unreadable files fail the whole call; structurally malformed files
/// (unterminated quote or block comment) do not — their recovered statements
/// are kept and the error is collected alongside, so callers can report
/// positional context for every problem at once.
pub fn split_sql_files(files: &[SqlFile]) -> Result<(Vec<Statement>, Vec<SchemaLintError>)> {
    let mut statements = Vec::new();
    let mut problems = Vec::new();
    for file in files {
        let contents = file.read()?;
        let (mut split, problem) = splitter::split_statements(file, &contents);
        statements.append(&mut split);
        if let Some(problem) = problem {
            problems.push(problem);
        }
    }
    Ok((statements, problems))
}
