//! Tabular I/O adapter: the boundary between the matcher and the
//! directory-file formats.
//!
//! ## Column Layout
//!
//! The source table (the "directory file") is at least nine columns wide,
//! 0-indexed; the matcher only reads four of them:
//!
//! | Column | Content          |
//! |--------|------------------|
//! | 4      | Anode name       |
//! | 5      | Anode capacity   |
//! | 7      | Cathode name     |
//! | 8      | Cathode capacity |
//!
//! ## Formats
//!
//! - Input: `.xlsx` workbook (first worksheet) or delimited text; the first
//!   row is a header and is skipped.
//! - Output 1: match results as CSV.
//! - Output 2: leftover anodes as a one-sheet workbook reconstructing the
//!   ten-column directory layout, so the file can be fed back in as the
//!   next batch's anode source.
//!
//! Cell coercion is lossy by design: a capacity cell that is not numeric
//! becomes `None` and is dropped later by normalization, never reported as
//! an error. Only file-level problems (unreadable file, missing worksheet,
//! too few columns) surface as [`Error`](crate::Error).

pub mod reader;
pub mod writer;

pub use reader::{read_table, DirectoryTable};
pub use writer::{leftover_workbook, results_csv, write_outputs};

/// 0-indexed column holding the anode name
pub const ANODE_NAME_COL: usize = 4;

/// 0-indexed column holding the anode capacity
pub const ANODE_CAPACITY_COL: usize = 5;

/// 0-indexed column holding the cathode name
pub const CATHODE_NAME_COL: usize = 7;

/// 0-indexed column holding the cathode capacity
pub const CATHODE_CAPACITY_COL: usize = 8;

/// Minimum column count for a readable source table
pub const MIN_COLUMNS: usize = 9;

/// Column count of the reconstructed leftover layout
pub const LAYOUT_COLUMNS: usize = 10;
