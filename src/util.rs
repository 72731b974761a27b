//! Text and attribute utilities
//!
//! Escaping, clause extraction from `SHOW CREATE TABLE`-formatted text,
//! attribute-list normalization, sql_mode filtering, and the subsequence
//! helper used when diffing element order. All functions here are pure.

use once_cell::sync::Lazy;
use regex::Regex;

/// Escapes a MySQL identifier (table name, column name, etc): doubles any
/// embedded backticks and wraps the result in backticks.
pub fn escape_identifier(input: &str) -> String {
    format!("`{}`", input.replace('`', "``"))
}

/// Escapes a value in the same manner as SHOW CREATE TABLE displays stored
/// text, e.g. default values and index/column/table comments. Does not wrap
/// the result in quotes; the caller adds those as appropriate.
pub fn escape_value_for_create_table(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\'' => out.push_str("''"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

static TABLESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[)] /\*!50100 TABLESPACE `((?:[^`]|``)+)` \*/ ENGINE=").unwrap()
});

/// Extracts the TABLESPACE name from a CREATE TABLE statement formatted like
/// SHOW CREATE TABLE. Returns None if no tablespace clause is present.
pub fn parse_create_tablespace(create_stmt: &str) -> Option<String> {
    TABLESPACE_RE
        .captures(create_stmt)
        .map(|caps| caps[1].to_string())
}

static AUTO_INC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[)/] ENGINE=\w+ (AUTO_INCREMENT=(\d+) )DEFAULT CHARSET=").unwrap());

/// Removes the table-level next-auto-increment clause from a CREATE TABLE
/// statement formatted like SHOW CREATE TABLE. Returns the rewritten
/// statement along with the next auto-increment value, or the input unchanged
/// and 0 when no clause was found.
pub fn parse_create_auto_inc(create_stmt: &str) -> (String, u64) {
    match AUTO_INC_RE.captures(create_stmt) {
        Some(caps) => {
            let next_auto_inc = caps[2].parse::<u64>().unwrap_or(0);
            let rewritten = create_stmt.replacen(&caps[1], "", 1);
            (rewritten, next_auto_inc)
        }
        None => (create_stmt.to_string(), 0),
    }
}

static PARTITIONING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)(\s*(?:/\*!?\d*)?\s*partition\s+by .*)$").unwrap());

/// Splits a CREATE TABLE statement, formatted like SHOW CREATE TABLE, into
/// the base CREATE clauses and the partitioning clause. The partitioning
/// portion is empty if the table is not partitioned.
pub fn parse_create_partitioning(create_stmt: &str) -> (&str, &str) {
    match PARTITIONING_RE.captures(create_stmt) {
        Some(caps) => {
            let m = caps.get(1).unwrap();
            (&create_stmt[..m.start()], m.as_str())
        }
        None => (create_stmt, ""),
    }
}

static VERSION_GATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*!.*?\*/").unwrap());

/// Splits a string of attributes -- table attributes from
/// information_schema.tables.create_options, or index attributes from SHOW
/// CREATE TABLE -- into individual normalized `KEY` or `KEY=VALUE` entries.
/// Bareword keys are upper-cased (backtick-quoted keys keep their casing),
/// double-quoted values are rewritten single-quoted, and the introspection-only
/// PARTITIONED marker is dropped since it has no SHOW CREATE TABLE equivalent.
/// Anything wrapped in a `/*!...*/` version gate is stripped.
pub fn split_attributes(input: &str) -> Vec<String> {
    let mut attributes = Vec::new();
    if input.is_empty() {
        return attributes;
    }
    let stripped = VERSION_GATE_RE.replace_all(input, "");
    let tokens = tokenize_string(&stripped);
    let mut n = 0;
    while n < tokens.len() {
        let field = if tokens[n].starts_with('`') {
            tokens[n].clone()
        } else {
            tokens[n].to_uppercase()
        };
        if n + 2 < tokens.len() && tokens[n + 1] == "=" {
            let value = &tokens[n + 2];
            if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
                // double-quote-wrapped value, convert to single-quote-wrapped
                attributes.push(format!("{}='{}'", field, &value[1..value.len() - 1]));
            } else {
                attributes.push(format!("{}={}", field, value));
            }
            n += 3;
        } else {
            if field != "PARTITIONED" {
                attributes.push(field);
            }
            n += 1;
        }
    }
    attributes
}

/// Converts a value obtained from information_schema.tables.create_options to
/// the formatting used in SHOW CREATE TABLE.
pub fn reformat_create_options(input: &str) -> String {
    split_attributes(input).join(" ")
}

/// Splits a string into tokens on whitespace, keeping quoted runs (backtick,
/// single-quote, or double-quote wrapped, with doubled-quote escapes) as
/// single tokens and emitting `=` as its own token even with no surrounding
/// whitespace.
pub fn tokenize_string(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '=' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push("=".to_string());
            }
            '`' | '\'' | '"' => {
                current.push(c);
                while let Some(qc) = chars.next() {
                    current.push(qc);
                    if qc == c {
                        if chars.peek() == Some(&c) {
                            // doubled quote char stays inside the token
                            current.push(chars.next().unwrap());
                        } else {
                            break;
                        }
                    }
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Removes a matching pair of surrounding quotes (backtick, single, or
/// double) from a string, undoubling any escaped quote chars inside. Inputs
/// without surrounding quotes are returned unchanged.
pub fn strip_any_quote(input: &str) -> String {
    if input.len() >= 2 {
        let first = input.chars().next().unwrap();
        if (first == '`' || first == '\'' || first == '"') && input.ends_with(first) {
            let inner = &input[1..input.len() - 1];
            let doubled: String = [first, first].iter().collect();
            return inner.replace(&doubled, &first.to_string());
        }
    }
    input.to_string()
}

static STRIP_NON_INNO_REGEXPS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r" /\*!50606 (STORAGE|COLUMN_FORMAT) (DISK|MEMORY|FIXED|DYNAMIC) \*/")
                .unwrap(),
            "",
        ),
        (Regex::new(r" USING (HASH|BTREE)").unwrap(), ""),
        (Regex::new(r"`\) KEY_BLOCK_SIZE=\d+").unwrap(), "`)"),
    ]
});

/// Removes no-op table options that are persisted in SHOW CREATE TABLE but
/// not reflected in information_schema and serve no purpose for InnoDB
/// tables. Not guaranteed to be safe for non-InnoDB tables. The input should
/// be formatted like SHOW CREATE TABLE.
pub fn strip_non_inno_attributes(create_stmt: &str) -> String {
    let mut stmt = create_stmt.to_string();
    for (re, replacement) in STRIP_NON_INNO_REGEXPS.iter() {
        stmt = re.replace_all(&stmt, *replacement).into_owned();
    }
    stmt
}

/// sql_mode values that are problematic for schema introspection purposes
pub static INTROSPECTION_BAD_SQL_MODES: &[&str] = &[
    "ANSI",
    "ANSI_QUOTES",
    "NO_FIELD_OPTIONS",
    "NO_KEY_OPTIONS",
    "NO_TABLE_OPTIONS",
    "IGNORE_BAD_TABLE_OPTIONS", // Only present in MariaDB
];

/// sql_mode values that are not available in all flavors
pub static NON_PORTABLE_SQL_MODES: &[&str] = &[
    // Not present in MySQL 8.0+
    "NO_AUTO_CREATE_USER",
    "NO_FIELD_OPTIONS",
    "NO_KEY_OPTIONS",
    "NO_TABLE_OPTIONS",
    "DB2",
    "MAXDB",
    "MSSQL",
    "MYSQL323",
    "MYSQL40",
    "ORACLE",
    "POSTGRESQL",
    // Only present in MySQL 8.0+
    "TIME_TRUNCATE_FRACTIONAL",
    // Only present in MariaDB
    "IGNORE_BAD_TABLE_OPTIONS",
    "EMPTY_STRING_IS_NULL",      // MariaDB 10.3+
    "SIMULTANEOUS_ASSIGNMENT",   // MariaDB 10.3+
    "TIME_ROUND_FRACTIONAL",     // MariaDB 10.4+
];

/// Splits the supplied comma-separated sql_mode value and removes any modes
/// present in the supplied removal set. Mode names in the set must be in all
/// caps.
pub fn filter_sql_mode(orig: &str, remove: &[&str]) -> String {
    if orig.is_empty() {
        return String::new();
    }
    let orig_modes: Vec<&str> = orig.split(',').collect();
    let keep_modes: Vec<&str> = orig_modes
        .iter()
        .copied()
        .filter(|mode| !remove.contains(mode))
        .collect();
    if keep_modes.len() == orig_modes.len() {
        orig.to_string()
    } else {
        keep_modes.join(",")
    }
}

/// Computes a longest increasing subsequence of the input, useful in
/// determining the minimal set of elements that must move when diffing column
/// order or trigger order. Inputs shorter than 2 are returned unchanged.
pub fn longest_increasing_subsequence(input: &[i32]) -> Vec<i32> {
    if input.len() < 2 {
        return input.to_vec();
    }
    let mut candidate_lists: Vec<Vec<i32>> = Vec::with_capacity(input.len());
    candidate_lists.push(vec![input[0]]);
    for &comp in &input[1..] {
        if comp < candidate_lists[0][0] {
            candidate_lists[0][0] = comp;
        } else if comp > *candidate_lists.last().unwrap().last().unwrap() {
            let mut new_list = candidate_lists.last().unwrap().clone();
            new_list.push(comp);
            candidate_lists.push(new_list);
        } else {
            for j in (0..candidate_lists.len() - 1).rev() {
                if comp > *candidate_lists[j].last().unwrap() {
                    let prefix = candidate_lists[j].clone();
                    let next = &mut candidate_lists[j + 1];
                    let last = next.len() - 1;
                    next[..last].copy_from_slice(&prefix);
                    next[last] = comp;
                    break;
                }
            }
        }
    }
    candidate_lists.pop().unwrap()
}
