//! Single-pass scanner that partitions SQL text into statement segments

use crate::error::SchemaLintError;

use super::{SqlFile, Statement};

/// Scanner state outside of the one-shot skip flag. Quote and comment states
/// are mutually exclusive, so an enum keeps illegal combinations
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InQuote(char),
    InLineComment,
    InBlockComment,
}

/// A pending or completed segment, tracked as byte offsets into the input
/// until materialized into a `Statement`.
struct Segment {
    line_no: usize,
    char_no: usize,
    start: usize,
    end: usize,
}

/// Partitions `contents` into an ordered sequence of statements.
///
/// Always returns every statement recovered, even when an error is also
/// reported, so callers retain positional context for malformed files. The
/// concatenation of the returned statements' text reproduces `contents`
/// exactly.
///
/// Escaping quirks are preserved to match server-side splitting behavior:
/// inside a quoted string only a doubled quote character escapes an embedded
/// quote, and a backslash has no special meaning. Outside quotes a backslash
/// strips the following character of any special meaning.
pub fn split_statements(file: &SqlFile, contents: &str) -> (Vec<Statement>, Option<SchemaLintError>) {
    let mut segments: Vec<Segment> = Vec::new();
    let mut state = ScanState::Normal;
    let mut skip_next = false;
    let mut in_relevant = false;
    let mut prev_char = '\0';

    // byte offset where the pending segment starts, and its 1-based position
    let mut start_statement = 0usize;
    let mut stmt_line = 1usize;
    let mut stmt_char = 1usize;

    let mut line_no = 1usize;
    let mut char_no = 0usize;

    let mut iter = contents.char_indices().peekable();
    while let Some((n, c)) = iter.next() {
        char_no += 1;

        // Newlines advance position bookkeeping regardless of any other
        // state, and terminate line comments and pending escapes.
        if c == '\n' {
            if state == ScanState::InLineComment {
                state = ScanState::Normal;
            }
            skip_next = false;
            line_no += 1;
            char_no = 0;
            // A newline run immediately after a just-closed statement is
            // appended to that statement's trailing text, keeping line
            // numbering aligned with visual statement grouping.
            if start_statement == n {
                if let Some(last) = segments.last_mut() {
                    last.end = n + 1;
                    start_statement = n + 1;
                    stmt_line += 1;
                    stmt_char = 1;
                }
            }
            prev_char = c;
            continue;
        }

        match state {
            ScanState::InLineComment => {
                prev_char = c;
                continue;
            }
            ScanState::InBlockComment => {
                if c == '/' && prev_char == '*' {
                    state = ScanState::Normal;
                }
                prev_char = c;
                continue;
            }
            _ => {}
        }

        if skip_next {
            skip_next = false;
            prev_char = c;
            continue;
        }

        if let ScanState::InQuote(quote) = state {
            if c == quote {
                // This char AND the next are the quote char: the pair is one
                // escaped literal quote, and the quote stays open.
                if iter.peek().map(|&(_, next)| next) == Some(quote) {
                    skip_next = true;
                } else {
                    state = ScanState::Normal;
                }
            }
            prev_char = c;
            continue;
        }

        // Comment openers. These never mark the pending segment as relevant,
        // so leading comments stay in the interstitial segment.
        if c == '#' {
            state = ScanState::InLineComment;
            prev_char = c;
            continue;
        }
        if c == '/' && iter.peek().map(|&(_, next)| next) == Some('*') {
            state = ScanState::InBlockComment;
            prev_char = c;
            continue;
        }
        if c == '-' && contents[n..].starts_with("-- ") {
            state = ScanState::InLineComment;
            prev_char = c;
            continue;
        }

        if !c.is_whitespace() && !in_relevant {
            // Close off any intervening whitespace/comments as a separate
            // statement, so later manipulations of the file contents don't
            // lose it.
            if start_statement < n {
                segments.push(Segment {
                    line_no: stmt_line,
                    char_no: stmt_char,
                    start: start_statement,
                    end: n,
                });
                start_statement = n;
                stmt_line = line_no;
                stmt_char = char_no;
            }
            in_relevant = true;
        }

        match c {
            ';' => {
                segments.push(Segment {
                    line_no: stmt_line,
                    char_no: stmt_char,
                    start: start_statement,
                    end: n + 1,
                });
                start_statement = n + 1;
                stmt_line = line_no;
                stmt_char = char_no + 1;
                in_relevant = false;
            }
            '\\' => skip_next = true,
            '"' | '`' | '\'' => state = ScanState::InQuote(c),
            _ => {}
        }
        prev_char = c;
    }

    let error = match state {
        ScanState::InQuote(quote) => Some(SchemaLintError::UnterminatedQuote {
            path: file.path(),
            quote,
        }),
        ScanState::InBlockComment => Some(SchemaLintError::UnterminatedBlockComment {
            path: file.path(),
        }),
        _ => None,
    };

    // Keep any dangling segment, terminated or not
    if start_statement < contents.len() {
        segments.push(Segment {
            line_no: stmt_line,
            char_no: stmt_char,
            start: start_statement,
            end: contents.len(),
        });
    }

    let statements = segments
        .into_iter()
        .map(|seg| Statement {
            file: file.clone(),
            line_no: seg.line_no,
            char_no: seg.char_no,
            text: contents[seg.start..seg.end].to_string(),
        })
        .collect();
    (statements, error)
}
