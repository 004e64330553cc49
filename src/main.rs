//! cellmatch - Binary Entry Point
//!
//! Reads a directory file, matches cathodes to anodes, and writes the
//! match-result CSV plus the unused-anode workbook. Any boundary failure
//! is reported as a single message on stderr and nothing is written.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cellmatch::engine::{leftover_anodes, MatchEngine};
use cellmatch::io::{read_table, write_outputs};
use cellmatch::normalize::normalize;
use cellmatch::types::MatchType;
use cellmatch::Result;

/// Default output path for the match-result table
const DEFAULT_RESULTS: &str = "matching_results.csv";

/// Default output path for the unused-anode workbook
const DEFAULT_LEFTOVERS: &str = "unused_anodes.xlsx";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("usage: cellmatch <directory-file> [results-csv] [unused-xlsx]");
        return ExitCode::from(2);
    }

    let input = PathBuf::from(&args[1]);
    let results_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS));
    let leftovers_path = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEFTOVERS));

    match run(&input, &results_path, &leftovers_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, results_path: &Path, leftovers_path: &Path) -> Result<()> {
    let table = read_table(input)?;
    let anodes = normalize(table.anodes);
    let cathodes = normalize(table.cathodes);
    log::info!(
        "normalized {} anodes and {} cathodes",
        anodes.len(),
        cathodes.len()
    );

    let report = MatchEngine::new().run(&cathodes, &anodes);
    let unused = leftover_anodes(&anodes, report.consumed());
    write_outputs(results_path, leftovers_path, report.pairings(), &unused)?;

    println!(
        "Matched {} of {} cathodes ({} anodes left over)",
        report.matched_count(),
        report.len(),
        unused.len()
    );
    println!("  IN RANGE:        {}", report.count_of(MatchType::InRange));
    println!("  CLOSE:           {}", report.count_of(MatchType::Close));
    println!("  LAST RESORT:     {}", report.count_of(MatchType::LastResort));
    println!("  NO MATCH FOUND:  {}", report.count_of(MatchType::NoMatch));
    println!("  INVALID CATHODE: {}", report.count_of(MatchType::InvalidCathode));
    println!();
    println!("Results: {}", results_path.display());
    println!("Unused anodes: {}", leftovers_path.display());

    Ok(())
}
