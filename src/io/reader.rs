//! Source-table reading: xlsx workbook or delimited text into raw records.
//!
//! The reader extracts the two (name, capacity) column pairs row by row.
//! Cell coercion never fails; a cell that is missing, empty, or non-numeric
//! simply yields `None` and the row is cleaned up downstream by
//! [`normalize`](crate::normalize::normalize).

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::io::{
    ANODE_CAPACITY_COL, ANODE_NAME_COL, CATHODE_CAPACITY_COL, CATHODE_NAME_COL, MIN_COLUMNS,
};
use crate::types::RawRecord;

/// The two raw column pairs extracted from one source table.
///
/// Both lists have one entry per data row; rows where a role's cells were
/// empty produce incomplete [`RawRecord`]s that normalization drops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryTable {
    /// Raw anode rows (columns 4/5), in table order
    pub anodes: Vec<RawRecord>,

    /// Raw cathode rows (columns 7/8), in table order
    pub cathodes: Vec<RawRecord>,
}

/// Read a directory table from disk.
///
/// `.xlsx` paths are read as workbooks (first worksheet); any other
/// extension is read as delimited text. The first row is treated as a
/// header and skipped. Fails only on file-level problems: an unreadable
/// file, a workbook without worksheets, a table narrower than
/// [`MIN_COLUMNS`], or a table with no rows at all.
pub fn read_table(path: &Path) -> Result<DirectoryTable> {
    let table = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("xlsx") => read_xlsx(path)?,
        _ => read_delimited(path)?,
    };
    log::info!(
        "read {} data rows from {}",
        table.anodes.len(),
        path.display()
    );
    Ok(table)
}

// ============================================================================
// xlsx workbooks
// ============================================================================

fn read_xlsx(path: &Path) -> Result<DirectoryTable> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook.worksheet_range_at(0).ok_or(Error::NoWorksheet)??;

    if range.is_empty() {
        return Err(Error::EmptyTable);
    }
    if range.width() < MIN_COLUMNS {
        return Err(Error::MissingColumns {
            found: range.width(),
            required: MIN_COLUMNS,
        });
    }

    let mut anodes = Vec::new();
    let mut cathodes = Vec::new();
    for row in range.rows().skip(1) {
        anodes.push(RawRecord::new(
            cell_name(row.get(ANODE_NAME_COL)),
            cell_capacity(row.get(ANODE_CAPACITY_COL)),
        ));
        cathodes.push(RawRecord::new(
            cell_name(row.get(CATHODE_NAME_COL)),
            cell_capacity(row.get(CATHODE_CAPACITY_COL)),
        ));
    }

    Ok(DirectoryTable { anodes, cathodes })
}

/// Coerce a workbook cell to a name, if it holds one
fn cell_name(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        // Numeric lot names happen; render them the way they were typed
        Data::Float(f) => Decimal::from_f64(*f).map(|d| d.normalize().to_string()),
        Data::Int(i) => Some(i.to_string()),
        _ => None,
    }
}

/// Coerce a workbook cell to a decimal capacity, if it holds one
fn cell_capacity(cell: Option<&Data>) -> Option<Decimal> {
    match cell? {
        Data::Float(f) => Decimal::from_f64(*f),
        Data::Int(i) => Some(Decimal::from(*i)),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ============================================================================
// Delimited text
// ============================================================================

fn read_delimited(path: &Path) -> Result<DirectoryTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = reader.records();
    let header = match rows.next() {
        Some(row) => row?,
        None => return Err(Error::EmptyTable),
    };
    if header.len() < MIN_COLUMNS {
        return Err(Error::MissingColumns {
            found: header.len(),
            required: MIN_COLUMNS,
        });
    }

    let mut anodes = Vec::new();
    let mut cathodes = Vec::new();
    for row in rows {
        let row = row?;
        anodes.push(RawRecord::new(
            field_name(row.get(ANODE_NAME_COL)),
            field_capacity(row.get(ANODE_CAPACITY_COL)),
        ));
        cathodes.push(RawRecord::new(
            field_name(row.get(CATHODE_NAME_COL)),
            field_capacity(row.get(CATHODE_CAPACITY_COL)),
        ));
    }

    Ok(DirectoryTable { anodes, cathodes })
}

fn field_name(field: Option<&str>) -> Option<String> {
    let trimmed = field?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn field_capacity(field: Option<&str>) -> Option<Decimal> {
    field?.trim().parse().ok()
}

// ============================================================================
// Unit Tests
// ============================================================================
