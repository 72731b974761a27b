//! Index model for MySQL/MariaDB tables
//!
//! Structural representation of an index and its parts, with DDL clause
//! rendering and the comparison relations used by the dupe-index lint. All
//! comparisons assume both indexes belong to the same table.

mod compare;

pub use compare::{equals, equivalent, redundant_to};

use crate::flavor::Flavor;
use crate::util::{escape_identifier, escape_value_for_create_table};

/// A single index (primary key, unique secondary index, or non-unique
/// secondary index) in a table.
#[derive(Debug, Clone, Default)]
pub struct Index {
    /// Index name; empty for the primary key
    pub name: String,
    /// Indexed columns/expressions, in sort/match order
    pub parts: Vec<IndexPart>,
    pub primary_key: bool,
    pub unique: bool,
    /// MySQL 8+ INVISIBLE, also used for MariaDB 10.6's IGNORED indexes
    pub invisible: bool,
    pub comment: String,
    /// BTREE, HASH, FULLTEXT, SPATIAL, or VECTOR; empty means default
    pub type_tag: String,
    /// Parser name for FULLTEXT indexes, empty otherwise
    pub full_text_parser: String,
    /// Free-form engine attributes, e.g. for MariaDB vector indexes. Stored
    /// as a string but compared semantically, see [`Index::equivalent`].
    pub attributes: String,
}

/// An individual indexed column or expression. Each index has one or more
/// parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexPart {
    /// Name of the column, or empty if this part is an expression
    pub column_name: String,
    /// Expression text (MySQL 8+), or empty if this part is a column
    pub expression: String,
    /// Nonzero if only a prefix of the column is indexed
    pub prefix_length: u16,
    /// If true, collation is descending (MySQL 8+)
    pub descending: bool,
}

impl Index {
    /// Returns this index's definition clause, for use as part of a DDL
    /// statement.
    ///
    /// # Panics
    ///
    /// Panics if the index is flagged as a primary key without also being
    /// flagged unique. That combination indicates a broken introspection
    /// result or fixture, not a user-facing condition.
    pub fn definition(&self, flavor: Flavor) -> String {
        let parts: Vec<String> = self.parts.iter().map(|p| p.definition(flavor)).collect();
        let type_and_name = if self.primary_key {
            if !self.unique {
                panic!("Index {} is primary key, but isn't marked as unique", self.name);
            }
            "PRIMARY KEY".to_string()
        } else if self.unique {
            format!("UNIQUE KEY {}", escape_identifier(&self.name))
        } else if !self.type_tag.is_empty() && self.type_tag != "BTREE" {
            format!("{} KEY {}", self.type_tag, escape_identifier(&self.name))
        } else {
            format!("KEY {}", escape_identifier(&self.name))
        };
        let mut clause = format!("{} ({})", type_and_name, parts.join(","));
        if !self.comment.is_empty() {
            clause.push_str(" COMMENT '");
            clause.push_str(&escape_value_for_create_table(&self.comment));
            clause.push('\'');
        }
        if self.invisible {
            if flavor.is_mariadb() {
                clause.push_str(" IGNORED");
            } else {
                clause.push_str(" /*!80000 INVISIBLE */");
            }
        }
        if self.type_tag == "FULLTEXT" && !self.full_text_parser.is_empty() {
            if flavor.supports_plain_with_parser() {
                clause.push_str(" WITH PARSER ");
                clause.push_str(&escape_identifier(&self.full_text_parser));
            } else {
                // The trailing space is intentional; it's always present in
                // SHOW CREATE TABLE for this particular clause
                clause.push_str(" /*!50100 WITH PARSER ");
                clause.push_str(&escape_identifier(&self.full_text_parser));
                clause.push_str(" */ ");
            }
        }
        if !self.attributes.is_empty() {
            clause.push(' ');
            clause.push_str(&self.attributes);
        }
        clause
    }

    /// Returns true if at least one part is an expression rather than a
    /// column.
    pub fn functional(&self) -> bool {
        self.parts.iter().any(|part| !part.expression.is_empty())
    }
}

impl IndexPart {
    /// Returns this index part's definition clause.
    pub fn definition(&self, _flavor: Flavor) -> String {
        let mut clause = if !self.column_name.is_empty() {
            escape_identifier(&self.column_name)
        } else {
            format!("({})", self.expression)
        };
        if self.prefix_length > 0 {
            clause.push_str(&format!("({})", self.prefix_length));
        }
        if self.descending {
            clause.push_str(" DESC");
        }
        clause
    }
}
