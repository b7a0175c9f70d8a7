//! Text codec for the SMTX document format
//!
//! A document is two header lines followed by one line per non-zero
//! entry:
//!
//! ```text
//! rows=<count>
//! cols=<count>
//! (<row>, <col>, <value>)
//! ```
//!
//! Blank lines are ignored anywhere. Rendering sorts entries by row and
//! then column, so output is deterministic regardless of the order the
//! entries were produced in.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::error::{ParseErrorKind, SmtxError};
use crate::matrix::SparseMatrix;

/// Prefix of the mandatory first header line
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of the mandatory second header line
pub const COLS_PREFIX: &str = "cols=";

/// Parse a document into a matrix
///
/// Stops at the first malformed line and reports its 1-based number.
/// Entries are applied through the bounds-checked setter, so a
/// coordinate outside the declared dimensions surfaces as an
/// `EntryOutOfBounds` parse error, a zero value stores nothing, and a
/// duplicate coordinate keeps the last value seen.
pub fn parse(text: &str) -> Result<SparseMatrix, SmtxError> {
    let total_lines = text.lines().count();
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, raw)| (index + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty());

    // Headers are positional: rows first, cols second
    let (line, header) = lines.next().ok_or(SmtxError::Parse {
        line: total_lines + 1,
        kind: ParseErrorKind::MissingRows,
    })?;
    let nrows = parse_header(header, ROWS_PREFIX, ParseErrorKind::MissingRows)
        .map_err(|kind| SmtxError::Parse { line, kind })?;

    let (line, header) = lines.next().ok_or(SmtxError::Parse {
        line: total_lines + 1,
        kind: ParseErrorKind::MissingCols,
    })?;
    let ncols = parse_header(header, COLS_PREFIX, ParseErrorKind::MissingCols)
        .map_err(|kind| SmtxError::Parse { line, kind })?;

    let mut matrix = SparseMatrix::new(nrows, ncols);

    for (line, entry_text) in lines {
        let entry =
            parse_entry(entry_text).map_err(|kind| SmtxError::Parse { line, kind })?;
        matrix
            .set_element(entry.row, entry.col, entry.value)
            .map_err(|_| SmtxError::Parse {
                line,
                kind: ParseErrorKind::EntryOutOfBounds,
            })?;
    }

    Ok(matrix)
}

/// Render a matrix to canonical document text
///
/// Every stored entry appears on its own line, sorted by row and then
/// column. The output round-trips through [`parse`] unchanged.
pub fn render(matrix: &SparseMatrix) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}{}\n", ROWS_PREFIX, matrix.nrows()));
    out.push_str(&format!("{}{}\n", COLS_PREFIX, matrix.ncols()));

    for entry in matrix.entries() {
        out.push_str(&format!("({}, {}, {})\n", entry.row, entry.col, entry.value));
    }

    out
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// Parse one `rows=`/`cols=` header line into its count
///
/// A line that does not carry the expected prefix reports `missing`;
/// a prefix with a bad count reports `InvalidNumber`.
fn parse_header(
    line: &str,
    prefix: &str,
    missing: ParseErrorKind,
) -> Result<usize, ParseErrorKind> {
    let count = line.strip_prefix(prefix).ok_or(missing)?;

    count.trim().parse().map_err(|_| ParseErrorKind::InvalidNumber)
}

/// Parse one `(<row>, <col>, <value>)` entry line
///
/// The parentheses and the `", "` separators are literal; the three
/// fields between them tolerate extra surrounding whitespace.
fn parse_entry(line: &str) -> Result<ParsedEntry, ParseErrorKind> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ParseErrorKind::MalformedEntry)?;

    let mut fields = inner.split(", ");
    let row = fields.next().ok_or(ParseErrorKind::MalformedEntry)?;
    let col = fields.next().ok_or(ParseErrorKind::MalformedEntry)?;
    let value = fields.next().ok_or(ParseErrorKind::MalformedEntry)?;
    if fields.next().is_some() {
        return Err(ParseErrorKind::MalformedEntry);
    }

    Ok(ParsedEntry {
        row: parse_field(row)?,
        col: parse_field(col)?,
        value: parse_field(value)?,
    })
}

/// An entry triplet as read from a document line, before bounds checking
struct ParsedEntry {
    row: usize,
    col: usize,
    value: i64,
}

/// Parse a single integer field, ignoring surrounding whitespace
fn parse_field<T: core::str::FromStr>(field: &str) -> Result<T, ParseErrorKind> {
    field.trim().parse().map_err(|_| ParseErrorKind::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_minimal_document() {
        let matrix = parse("rows=2\ncols=2\n(0, 0, 5)\n").unwrap();

        assert_eq!(matrix.dimensions(), (2, 2));
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get_element(0, 0), 5);
    }

    #[test]
    fn test_render_matches_input_exactly() {
        let text = "rows=2\ncols=2\n(0, 0, 5)\n";
        let matrix = parse(text).unwrap();

        assert_eq!(render(&matrix), text);
    }

    #[test]
    fn test_parse_document_without_entries() {
        let matrix = parse("rows=3\ncols=5\n").unwrap();

        assert_eq!(matrix.dimensions(), (3, 5));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_parse_zero_sized_matrix() {
        let matrix = parse("rows=0\ncols=0\n").unwrap();

        assert_eq!(matrix.dimensions(), (0, 0));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_blank_lines_ignored_everywhere() {
        let matrix = parse("\n  \nrows=2\n\ncols=3\n\n(1, 2, -4)\n\n").unwrap();

        assert_eq!(matrix.dimensions(), (2, 3));
        assert_eq!(matrix.get_element(1, 2), -4);
    }

    #[test]
    fn test_final_line_without_newline() {
        let matrix = parse("rows=2\ncols=2\n(1, 1, 9)").unwrap();

        assert_eq!(matrix.get_element(1, 1), 9);
    }

    #[test]
    fn test_missing_rows_header() {
        // Empty document
        assert_eq!(
            parse(""),
            Err(SmtxError::Parse {
                line: 1,
                kind: ParseErrorKind::MissingRows
            })
        );

        // Headers in the wrong order
        assert_eq!(
            parse("cols=2\nrows=2\n"),
            Err(SmtxError::Parse {
                line: 1,
                kind: ParseErrorKind::MissingRows
            })
        );

        // Entry line where the header should be
        assert_eq!(
            parse("(0, 0, 1)\n"),
            Err(SmtxError::Parse {
                line: 1,
                kind: ParseErrorKind::MissingRows
            })
        );
    }

    #[test]
    fn test_missing_cols_header() {
        // Document ends after the rows header
        assert_eq!(
            parse("rows=2\n"),
            Err(SmtxError::Parse {
                line: 2,
                kind: ParseErrorKind::MissingCols
            })
        );

        // Entry line where the cols header should be
        assert_eq!(
            parse("rows=2\n(0, 0, 1)\n"),
            Err(SmtxError::Parse {
                line: 2,
                kind: ParseErrorKind::MissingCols
            })
        );
    }

    #[test]
    fn test_header_with_bad_count() {
        assert_eq!(
            parse("rows=abc\ncols=2\n"),
            Err(SmtxError::Parse {
                line: 1,
                kind: ParseErrorKind::InvalidNumber
            })
        );

        // Negative dimensions are not representable
        assert_eq!(
            parse("rows=2\ncols=-1\n"),
            Err(SmtxError::Parse {
                line: 2,
                kind: ParseErrorKind::InvalidNumber
            })
        );
    }

    #[test]
    fn test_malformed_entries() {
        let document = |entry: &str| format!("rows=4\ncols=4\n{entry}\n");
        let bad_entries = [
            "0, 0, 5",       // no parentheses
            "(0, 0, 5",      // unclosed
            "0, 0, 5)",      // unopened
            "(0,0,5)",       // missing separator spaces
            "(0, 0)",        // too few fields
            "(0, 0, 5, 6)",  // too many fields
            "()",            // no fields at all
        ];

        for bad in bad_entries {
            assert_eq!(
                parse(&document(bad)),
                Err(SmtxError::Parse {
                    line: 3,
                    kind: ParseErrorKind::MalformedEntry
                }),
                "entry {bad:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn test_entry_with_bad_number() {
        assert_eq!(
            parse("rows=4\ncols=4\n(a, 0, 5)\n"),
            Err(SmtxError::Parse {
                line: 3,
                kind: ParseErrorKind::InvalidNumber
            })
        );
        assert_eq!(
            parse("rows=4\ncols=4\n(0, 0, five)\n"),
            Err(SmtxError::Parse {
                line: 3,
                kind: ParseErrorKind::InvalidNumber
            })
        );

        // Negative coordinates are not representable
        assert_eq!(
            parse("rows=4\ncols=4\n(-1, 0, 5)\n"),
            Err(SmtxError::Parse {
                line: 3,
                kind: ParseErrorKind::InvalidNumber
            })
        );
    }

    #[test]
    fn test_entry_out_of_bounds() {
        assert_eq!(
            parse("rows=2\ncols=2\n(2, 0, 5)\n"),
            Err(SmtxError::Parse {
                line: 3,
                kind: ParseErrorKind::EntryOutOfBounds
            })
        );
        assert_eq!(
            parse("rows=2\ncols=2\n(0, 2, 5)\n"),
            Err(SmtxError::Parse {
                line: 3,
                kind: ParseErrorKind::EntryOutOfBounds
            })
        );
    }

    #[test]
    fn test_error_line_numbers_count_blank_lines() {
        // The entry sits on physical line 5
        assert_eq!(
            parse("rows=2\n\ncols=2\n\n(9, 9, 1)\n"),
            Err(SmtxError::Parse {
                line: 5,
                kind: ParseErrorKind::EntryOutOfBounds
            })
        );
    }

    #[test]
    fn test_duplicate_coordinate_last_wins() {
        let matrix = parse("rows=2\ncols=2\n(0, 0, 5)\n(0, 0, 9)\n").unwrap();

        assert_eq!(matrix.get_element(0, 0), 9);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_zero_value_stores_nothing() {
        let matrix = parse("rows=2\ncols=2\n(0, 0, 0)\n").unwrap();
        assert!(matrix.is_empty());

        // An explicit zero also erases an earlier duplicate
        let matrix = parse("rows=2\ncols=2\n(0, 0, 5)\n(0, 0, 0)\n").unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_fields_tolerate_padding() {
        let matrix = parse("rows=2\ncols=2\n(0,  0,   5)\n").unwrap();
        assert_eq!(matrix.get_element(0, 0), 5);

        let matrix = parse("rows=2\ncols=2\n( 1, 1, -3 )\n").unwrap();
        assert_eq!(matrix.get_element(1, 1), -3);

        // Header counts tolerate padding too
        let matrix = parse("rows= 2\ncols= 2 \n").unwrap();
        assert_eq!(matrix.dimensions(), (2, 2));
    }

    #[test]
    fn test_carriage_returns_tolerated() {
        let matrix = parse("rows=2\r\ncols=2\r\n(0, 1, 6)\r\n").unwrap();

        assert_eq!(matrix.get_element(0, 1), 6);
    }

    #[test]
    fn test_round_trip_preserves_matrix() {
        let mut matrix = SparseMatrix::new(5, 7);
        matrix.set_element(4, 6, -12).unwrap();
        matrix.set_element(0, 0, 3).unwrap();
        matrix.set_element(2, 5, 40).unwrap();

        assert_eq!(parse(&render(&matrix)), Ok(matrix));
    }

    #[test]
    fn test_render_sorts_entries() {
        let matrix = parse("rows=3\ncols=3\n(2, 2, 1)\n(0, 1, 2)\n(2, 0, 3)\n(0, 0, 4)\n").unwrap();

        assert_eq!(
            render(&matrix),
            "rows=3\ncols=3\n(0, 0, 4)\n(0, 1, 2)\n(2, 0, 3)\n(2, 2, 1)\n"
        );
    }

    #[test]
    fn test_display_matches_render() {
        let matrix = parse("rows=2\ncols=2\n(1, 0, 8)\n").unwrap();

        assert_eq!(matrix.to_string(), render(&matrix));
    }

    #[test]
    fn test_extreme_values_round_trip() {
        let text = format!("rows=1\ncols=2\n(0, 0, {})\n(0, 1, {})\n", i64::MAX, i64::MIN);
        let matrix = parse(&text).unwrap();

        assert_eq!(matrix.get_element(0, 0), i64::MAX);
        assert_eq!(matrix.get_element(0, 1), i64::MIN);
        assert_eq!(render(&matrix), text);
    }
}
