//! Typed parse errors for statement ingestion.

use thiserror::Error;

/// Errors raised while reading a transactions CSV.
///
/// `MalformedDate` and `MalformedAmount` are row-level and subject to the
/// configured [`ParsePolicy`](crate::ParsePolicy); everything else aborts
/// the run regardless of policy.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Date string matched none of the accepted formats.
    #[error("unrecognized date format: {value:?} (line {line})")]
    MalformedDate { value: String, line: usize },

    /// Amount did not parse to a finite number after comma removal.
    #[error("unparseable amount: {value:?} (line {line})")]
    MalformedAmount { value: String, line: usize },

    /// Header row was not `date,description,amount`.
    #[error("unexpected CSV header {found:?} (expected \"date,description,amount\")")]
    Header { found: String },

    /// The file contained no parsed transaction rows.
    #[error("no transaction rows found")]
    Empty,

    /// Underlying CSV/IO failure while reading.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ParseError {
    /// True for errors scoped to a single row (skippable under lenient
    /// parsing); false for file-level errors, which are always fatal.
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            ParseError::MalformedDate { .. } | ParseError::MalformedAmount { .. }
        )
    }
}
