//! Unit tests for index comparison and definition rendering, covering the
//! relations the dupe-index lint relies on.

use pretty_assertions::assert_eq;

use mysql_schemalint::index::{self, Index, IndexPart};
use mysql_schemalint::Flavor;

fn col(name: &str) -> IndexPart {
    IndexPart {
        column_name: name.to_string(),
        ..Default::default()
    }
}

fn primary_key(columns: &[&str]) -> Index {
    Index {
        parts: columns.iter().map(|c| col(c)).collect(),
        primary_key: true,
        unique: true,
        ..Default::default()
    }
}

fn key(name: &str, columns: &[&str]) -> Index {
    Index {
        name: name.to_string(),
        parts: columns.iter().map(|c| col(c)).collect(),
        ..Default::default()
    }
}

/// Full pairwise scan the way the dupe-index rule consumes redundant_to
fn redundant_pairs(indexes: &[Index]) -> Vec<(String, String)> {
    let mut found = Vec::new();
    for a in indexes {
        for b in indexes {
            if a.name != b.name && a.redundant_to(b) {
                found.push((a.name.clone(), b.name.clone()));
            }
        }
    }
    found
}

#[test]
fn test_pairwise_redundancy_scan() {
    let indexes = vec![
        key("idx_a", &["a"]),
        key("idx_ab", &["a", "b"]),
        key("idx_c", &["c"]),
    ];
    assert_eq!(
        redundant_pairs(&indexes),
        vec![("idx_a".to_string(), "idx_ab".to_string())]
    );
}

#[test]
fn test_primary_key_participates_as_target_only() {
    let pk = primary_key(&["id"]);
    let covering = key("idx_id_extra", &["id", "extra"]);
    assert!(!pk.redundant_to(&covering));

    let shadow = key("idx_id", &["id"]);
    assert!(shadow.redundant_to(&pk));
}

#[test]
fn test_equivalent_ignores_cosmetics_equals_does_not() {
    let mut a = key("idx_a", &["a"]);
    a.comment = "original".to_string();
    let mut b = key("idx_b", &["a"]);
    b.comment = "copy".to_string();
    b.invisible = true;

    assert!(a.equivalent(&b));
    assert!(!a.equals(&b));

    let mut c = a.clone();
    c.name = a.name.clone();
    assert!(a.equals(&c));
}

#[test]
fn test_expression_parts_compare_exactly() {
    let expr = |text: &str| IndexPart {
        expression: text.to_string(),
        ..Default::default()
    };
    let a = Index {
        name: "fn_a".to_string(),
        parts: vec![expr("lower(`email`)")],
        ..Default::default()
    };
    let mut b = a.clone();
    b.name = "fn_b".to_string();
    assert!(a.equivalent(&b));
    assert!(a.redundant_to(&b));
    assert!(a.functional());

    b.parts = vec![expr("upper(`email`)")];
    assert!(!a.equivalent(&b));
    assert!(!a.redundant_to(&b));
}

#[test]
fn test_descending_blocks_prefix_redundancy() {
    let mut asc = key("idx_asc", &["a"]);
    let mut desc = key("idx_desc", &["a"]);
    asc.parts[0].descending = false;
    desc.parts[0].descending = true;
    assert!(!asc.redundant_to(&desc));
    assert!(!desc.redundant_to(&asc));
}

#[test]
fn test_optional_index_semantics() {
    let a = key("idx_a", &["a"]);
    assert!(index::equals(None, None));
    assert!(index::equivalent(None, None));
    assert!(!index::equals(Some(&a), None));
    assert!(!index::redundant_to(Some(&a), None));
    assert!(!index::redundant_to(None, Some(&a)));
}

#[test]
fn test_definition_round_table() {
    // definitions for a realistic mix of indexes, in both dialects
    let mysql = Flavor::mysql(8, 0);
    let mariadb = Flavor::mariadb(10, 6);

    let pk = primary_key(&["id"]);
    assert_eq!(pk.definition(mysql), "PRIMARY KEY (`id`)");

    let mut uniq = key("uq_email", &["email"]);
    uniq.unique = true;
    uniq.invisible = true;
    assert_eq!(
        uniq.definition(mysql),
        "UNIQUE KEY `uq_email` (`email`) /*!80000 INVISIBLE */"
    );
    assert_eq!(
        uniq.definition(mariadb),
        "UNIQUE KEY `uq_email` (`email`) IGNORED"
    );

    let mut prefixed = key("idx_body", &["body"]);
    prefixed.parts[0].prefix_length = 191;
    assert_eq!(prefixed.definition(mysql), "KEY `idx_body` (`body`(191))");

    let mut spatial = key("sp_geo", &["geo"]);
    spatial.type_tag = "SPATIAL".to_string();
    assert_eq!(spatial.definition(mysql), "SPATIAL KEY `sp_geo` (`geo`)");
}

#[test]
fn test_vector_defaults_from_introspection_shapes() {
    // MariaDB omits vector attributes at default server settings; an
    // explicitly-spelled equivalent must compare equal either way around
    let mut implicit = key("v_embedding", &["embedding"]);
    implicit.type_tag = "VECTOR".to_string();

    let mut explicit = key("v_embedding2", &["embedding"]);
    explicit.type_tag = "VECTOR".to_string();
    explicit.attributes = "`M`=6 DISTANCE='Euclidean'".to_string();

    assert!(implicit.equivalent(&explicit));
    assert!(explicit.equivalent(&implicit));
    assert!(implicit.redundant_to(&explicit));
}
