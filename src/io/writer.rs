//! Output serialization: the match-result CSV and the leftover-anode
//! workbook.
//!
//! Both tables are serialized to byte buffers before either file is
//! touched, so a serialization failure produces no output at all.

use std::fs;
use std::path::Path;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::io::{
    ANODE_CAPACITY_COL, ANODE_NAME_COL, CATHODE_CAPACITY_COL, CATHODE_NAME_COL, LAYOUT_COLUMNS,
};
use crate::types::{ComponentRecord, Pairing};

/// Header of the match-result CSV
pub const RESULT_HEADER: [&str; 6] = [
    "Cathode_Name",
    "Cathode_Capacity",
    "Anode_Name",
    "Anode_Capacity",
    "NP_Ratio",
    "Match_Type",
];

/// Sheet name of the leftover-anode workbook
pub const LEFTOVER_SHEET: &str = "Unused Anodes";

/// Serialize the match-result table as CSV bytes.
///
/// One row per pairing, in order; the three anode fields are empty cells on
/// unmatched rows. Decimals print with trailing zeros trimmed.
pub fn results_csv(pairings: &[Pairing]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(RESULT_HEADER)?;

        for pairing in pairings {
            writer.write_record(&[
                pairing.cathode_name.clone(),
                display(pairing.cathode_capacity),
                pairing.anode_name.clone().unwrap_or_default(),
                pairing.anode_capacity.map(display).unwrap_or_default(),
                pairing.np_ratio.map(display).unwrap_or_default(),
                pairing.match_type.to_string(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

/// Serialize the leftover-anode workbook as xlsx bytes.
///
/// The single sheet reconstructs the ten-column directory layout: the
/// header row labels columns 4/5 and 7/8, data rows populate columns 4/5
/// with the unused anodes, and every other cell is an empty string. The
/// resulting file can be fed straight back in as a future batch's anode
/// source.
pub fn leftover_workbook(leftovers: &[ComponentRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(LEFTOVER_SHEET)?;

    for col in 0..LAYOUT_COLUMNS {
        let label = if col == ANODE_NAME_COL {
            "Anode_Name"
        } else if col == ANODE_CAPACITY_COL {
            "Anode_Capacity"
        } else if col == CATHODE_NAME_COL {
            "Cathode_Name"
        } else if col == CATHODE_CAPACITY_COL {
            "Cathode_Capacity"
        } else {
            ""
        };
        sheet.write_string(0, col as u16, label)?;
    }

    for (i, anode) in leftovers.iter().enumerate() {
        let row = (i + 1) as u32;
        for col in 0..LAYOUT_COLUMNS {
            if col == ANODE_NAME_COL {
                sheet.write_string(row, col as u16, anode.name.as_str())?;
            } else if col == ANODE_CAPACITY_COL {
                match anode.capacity.to_f64() {
                    Some(capacity) => sheet.write_number(row, col as u16, capacity)?,
                    None => sheet.write_string(row, col as u16, display(anode.capacity))?,
                };
            } else {
                sheet.write_string(row, col as u16, "")?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Serialize and write both output tables.
///
/// Both buffers are built first; only then are the files written, so a
/// failure inside serialization emits nothing.
pub fn write_outputs(
    results_path: &Path,
    leftovers_path: &Path,
    pairings: &[Pairing],
    leftovers: &[ComponentRecord],
) -> Result<()> {
    let csv_bytes = results_csv(pairings)?;
    let workbook_bytes = leftover_workbook(leftovers)?;

    fs::write(results_path, csv_bytes)?;
    fs::write(leftovers_path, workbook_bytes)?;
    log::info!(
        "wrote {} result rows to {} and {} leftover anodes to {}",
        pairings.len(),
        results_path.display(),
        leftovers.len(),
        leftovers_path.display()
    );
    Ok(())
}

/// Render a decimal the way the process sheets expect: trailing zeros
/// trimmed, no exponent.
fn display(value: Decimal) -> String {
    value.normalize().to_string()
}

// ============================================================================
// Unit Tests
// ============================================================================
