//! Unit tests for the text/attribute utilities against realistic SHOW CREATE
//! TABLE output.

use pretty_assertions::assert_eq;

use mysql_schemalint::util::{
    escape_identifier, escape_value_for_create_table, filter_sql_mode,
    longest_increasing_subsequence, parse_create_auto_inc, parse_create_partitioning,
    parse_create_tablespace, reformat_create_options, split_attributes,
    strip_non_inno_attributes, INTROSPECTION_BAD_SQL_MODES, NON_PORTABLE_SQL_MODES,
};

const SHOW_CREATE: &str = "CREATE TABLE `actor` (\n  `actor_id` smallint unsigned NOT NULL AUTO_INCREMENT,\n  `first_name` varchar(45) NOT NULL,\n  PRIMARY KEY (`actor_id`),\n  KEY `idx_actor_first_name` (`first_name`)\n) ENGINE=InnoDB AUTO_INCREMENT=201 DEFAULT CHARSET=utf8mb4";

#[test]
fn test_auto_inc_extraction_on_show_create_output() {
    let (rewritten, next) = parse_create_auto_inc(SHOW_CREATE);
    assert_eq!(next, 201);
    assert_eq!(
        rewritten,
        SHOW_CREATE.replace("AUTO_INCREMENT=201 ", "")
    );
    // extraction is idempotent once the clause is gone
    let (again, none) = parse_create_auto_inc(&rewritten);
    assert_eq!(none, 0);
    assert_eq!(again, rewritten);
}

#[test]
fn test_tablespace_extraction_on_show_create_output() {
    let stmt = "CREATE TABLE `t` (\n  `id` int NOT NULL\n) /*!50100 TABLESPACE `ts``1` */ ENGINE=InnoDB DEFAULT CHARSET=utf8mb4";
    assert_eq!(parse_create_tablespace(stmt).as_deref(), Some("ts``1"));
    assert_eq!(parse_create_tablespace(SHOW_CREATE), None);
}

#[test]
fn test_partitioning_split_preserves_bytes() {
    let stmt = format!(
        "{}\n/*!50100 PARTITION BY HASH (`actor_id`)\nPARTITIONS 4 */",
        SHOW_CREATE
    );
    let (base, partitioning) = parse_create_partitioning(&stmt);
    assert_eq!(format!("{}{}", base, partitioning), stmt);
    assert_eq!(base, SHOW_CREATE);

    // MariaDB renders partitioning without the version gate
    let stmt = format!("{}\n PARTITION BY KEY (`actor_id`)", SHOW_CREATE);
    let (base, partitioning) = parse_create_partitioning(&stmt);
    assert_eq!(base, SHOW_CREATE);
    assert_eq!(partitioning, "\n PARTITION BY KEY (`actor_id`)");
}

#[test]
fn test_escaping_matches_show_create_rendering() {
    assert_eq!(escape_identifier("idx_actor_first_name"), "`idx_actor_first_name`");
    assert_eq!(
        escape_value_for_create_table("line1\nline2's \\path"),
        "line1\\nline2''s \\\\path"
    );
}

#[test]
fn test_create_options_reformatting() {
    // information_schema casing and quoting normalized to SHOW CREATE form
    assert_eq!(
        reformat_create_options("partitioned row_format=DYNAMIC stats_persistent=1"),
        "ROW_FORMAT=DYNAMIC STATS_PERSISTENT=1"
    );
    assert_eq!(
        split_attributes("`PAGE_compressed`=1 `PAGE_COMPRESSION_LEVEL`=9"),
        vec!["`PAGE_compressed`=1", "`PAGE_COMPRESSION_LEVEL`=9"]
    );
}

#[test]
fn test_strip_non_inno_attributes_on_memory_table_output() {
    let stmt = "CREATE TABLE `sessions` (\n  `id` int NOT NULL,\n  UNIQUE KEY `u` (`id`) USING HASH\n) ENGINE=MEMORY DEFAULT CHARSET=latin1";
    let stripped = strip_non_inno_attributes(stmt);
    assert_eq!(stripped, stmt.replace(" USING HASH", ""));
}

#[test]
fn test_sql_mode_filtering_sets_are_distinct() {
    // ANSI breaks introspection but is portable-filterable only via the
    // introspection set
    assert_eq!(filter_sql_mode("ANSI", INTROSPECTION_BAD_SQL_MODES), "");
    assert_eq!(filter_sql_mode("ANSI", NON_PORTABLE_SQL_MODES), "ANSI");

    let mariadb_modes = "STRICT_TRANS_TABLES,EMPTY_STRING_IS_NULL,TIME_ROUND_FRACTIONAL";
    assert_eq!(
        filter_sql_mode(mariadb_modes, NON_PORTABLE_SQL_MODES),
        "STRICT_TRANS_TABLES"
    );
}

#[test]
fn test_lis_models_column_move_detection() {
    // Column order diff: positions of old columns within the new order. The
    // values in the longest increasing subsequence are the columns that do
    // not need to move.
    let new_positions = [0, 2, 1, 3];
    let keep = longest_increasing_subsequence(&new_positions);
    assert_eq!(keep.len(), 3);
    // only one column (either index 1 or 2) needs an explicit move
    assert_eq!(new_positions.len() - keep.len(), 1);
}
