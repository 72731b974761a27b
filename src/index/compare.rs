//! Structural comparison relations between indexes of the same table

use std::collections::HashMap;

use crate::util::{split_attributes, strip_any_quote};

use super::Index;

impl Index {
    /// Returns true if two indexes are completely identical, including
    /// cosmetic attributes (name, comment, visibility).
    pub fn equals(&self, other: &Index) -> bool {
        self.name == other.name
            && self.comment == other.comment
            && self.invisible == other.invisible
            && self.equivalent(other)
    }

    /// Returns true if two indexes are functionally equivalent, regardless of
    /// whether or not they have the same names, comments, or visibility.
    pub fn equivalent(&self, other: &Index) -> bool {
        if self.primary_key != other.primary_key
            || self.unique != other.unique
            || self.type_tag != other.type_tag
            || self.full_text_parser != other.full_text_parser
        {
            return false;
        }
        self.same_parts(other) && self.same_attributes(other)
    }

    /// Returns true if this index is equivalent to, or a strict subset of,
    /// `other`, making it unnecessary. Both indexes should belong to the same
    /// table.
    ///
    /// A non-unique index is redundant to any other same-type index having
    /// the same (or more) columns in the same order, unless its parts have a
    /// greater column prefix length. A unique index can only be redundant to
    /// an exactly equivalent unique index; another unique index with more
    /// columns may coexist due to the desired constraint semantics. A primary
    /// key is never redundant to another index.
    pub fn redundant_to(&self, other: &Index) -> bool {
        if self.primary_key
            || (self.unique && !other.unique)
            || self.type_tag != other.type_tag
            || self.full_text_parser != other.full_text_parser
        {
            return false;
        }
        if !self.invisible && other.invisible {
            // a visible index is never redundant to one the optimizer may be ignoring
            return false;
        }
        if self.unique && other.unique {
            // Unique indexes are also unique *constraints*, so two unique
            // indexes are non-redundant unless they have identical parts
            return self.same_parts(other);
        } else if self.type_tag == "VECTOR" {
            return self.same_parts(other) && self.same_attributes(other);
        } else if self.type_tag == "FULLTEXT" && self.parts.len() != other.parts.len() {
            // FT composite indexes don't behave like BTREE in terms of
            // left-right prefixing
            return false;
        } else if self.parts.len() > other.parts.len() {
            return false;
        }
        for (part, other_part) in self.parts.iter().zip(other.parts.iter()) {
            if part.column_name != other_part.column_name
                || part.expression != other_part.expression
                || part.descending != other_part.descending
            {
                return false;
            }
            if other_part.prefix_length > 0
                && (part.prefix_length == 0 || part.prefix_length > other_part.prefix_length)
            {
                return false;
            }
        }
        true
    }

    fn same_parts(&self, other: &Index) -> bool {
        self.parts == other.parts
    }

    /// Compares attributes semantically: order-independent, key casing and
    /// value quoting ignored, type-specific defaults substituted when
    /// omitted.
    fn same_attributes(&self, other: &Index) -> bool {
        if self.attributes == other.attributes {
            // fast path for non-vectors and default vectors
            return true;
        }
        self.attribute_map() == other.attribute_map()
    }

    fn attribute_map(&self) -> HashMap<String, String> {
        let mut result = HashMap::new();
        if self.type_tag == "VECTOR" {
            // Defaults for vector attributes when omitted, matching the
            // server variable defaults. SHOW CREATE TABLE only omits these
            // when the server vars are at their defaults, so this holds even
            // for overridden servers.
            result.insert("M".to_string(), "6".to_string());
            result.insert("DISTANCE".to_string(), "euclidean".to_string());
        }
        for kv in split_attributes(&self.attributes) {
            let (k, v) = kv.split_once('=').unwrap_or((kv.as_str(), ""));
            result.insert(
                strip_any_quote(k).to_uppercase(),
                strip_any_quote(v).to_lowercase(),
            );
        }
        result
    }
}

/// Identity comparison over optional indexes; two absent indexes are equal.
pub fn equals(a: Option<&Index>, b: Option<&Index>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.equals(b),
        _ => false,
    }
}

/// Functional-equivalence comparison over optional indexes; two absent
/// indexes are equivalent.
pub fn equivalent(a: Option<&Index>, b: Option<&Index>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.equivalent(b),
        _ => false,
    }
}

/// Redundancy over optional indexes. An absent index is never redundant, and
/// nothing is redundant to an absent index.
pub fn redundant_to(a: Option<&Index>, b: Option<&Index>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a.redundant_to(b))
}
