//! Boundary error type.
//!
//! Only the tabular I/O boundary can fail: normalization and matching are
//! total. Every variant here is a malformed-input or file-format problem
//! that terminates the run before any output is produced.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// A terminal boundary failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem failure while reading or writing a table
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// The input workbook could not be opened or parsed
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// Delimited-text parsing or writing failed
    #[error("delimited text error: {0}")]
    Csv(#[from] csv::Error),

    /// The leftover workbook could not be serialized
    #[error("workbook write error: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    /// The workbook contains no worksheets
    #[error("the workbook contains no worksheets")]
    NoWorksheet,

    /// The source table does not carry the expected column layout
    #[error("the source table has {found} columns, at least {required} are required")]
    MissingColumns { found: usize, required: usize },

    /// The source table has no rows at all (not even a header)
    #[error("the source table is empty")]
    EmptyTable,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message() {
        let err = Error::MissingColumns {
            found: 6,
            required: 9,
        };
        assert_eq!(
            err.to_string(),
            "the source table has 6 columns, at least 9 are required"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
