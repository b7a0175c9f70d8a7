//! Error types for SMTX operations

/// Ways a document line can fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Expected a `rows=<count>` header line
    MissingRows,
    /// Expected a `cols=<count>` header line
    MissingCols,
    /// Entry line does not have the shape `(<row>, <col>, <value>)`
    MalformedEntry,
    /// A header count or entry field is not a valid integer
    InvalidNumber,
    /// Entry coordinate lies outside the declared dimensions
    EntryOutOfBounds,
}

impl core::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseErrorKind::MissingRows => "expected rows=<count> header",
            ParseErrorKind::MissingCols => "expected cols=<count> header",
            ParseErrorKind::MalformedEntry => "expected entry of the form (<row>, <col>, <value>)",
            ParseErrorKind::InvalidNumber => "invalid integer",
            ParseErrorKind::EntryOutOfBounds => "entry coordinate outside declared dimensions",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur during SMTX operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtxError {
    /// Write coordinate outside the matrix dimensions
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Operand dimensions violate an operation's precondition
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Arithmetic left the 64-bit value range
    ValueOverflow { row: usize, col: usize },
    /// Malformed document text, with the 1-based offending line
    Parse { line: usize, kind: ParseErrorKind },
}

impl core::fmt::Display for SmtxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SmtxError::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => {
                write!(f, "index ({row}, {col}) out of bounds for {nrows}x{ncols} matrix")
            }
            SmtxError::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "dimension mismatch: {}x{} against {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            SmtxError::ValueOverflow { row, col } => {
                write!(f, "value overflow at ({row}, {col})")
            }
            SmtxError::Parse { line, kind } => {
                write!(f, "line {line}: {kind}")
            }
        }
    }
}

/// Result type for SMTX operations
pub type Result<T> = core::result::Result<T, SmtxError>;
