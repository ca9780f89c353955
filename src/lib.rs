//! Monthly report builder for library diary workbooks.
//!
//! A diary sheet is a loosely formatted xlsx export: decorative rows on
//! top, a header zone found by keyword, then a block of daily rows. The
//! pipeline reads the first worksheet, extracts the rows a
//! [`ReportLayout`] describes, folds them into per-week sums grouped by
//! calendar month, and writes the finished report next to the source file.

pub mod error;
pub mod extract;
pub mod layout;
pub mod report;
pub mod sheet;
pub mod write;

pub use error::ReportError;
pub use extract::{Extraction, WeeklyRecord};
pub use layout::{ReportKind, ReportLayout};
pub use report::{create_monthly_report, AggregatedTable, ReportRow};

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

/// Run the whole pipeline for one source workbook and return the path the
/// report was written to.
#[instrument(level = "info", skip(path, layout), fields(path = %path.display(), layout = %layout.name))]
pub fn process_report(path: &Path, layout: &ReportLayout) -> Result<PathBuf, ReportError> {
    if !path.exists() {
        return Err(ReportError::NotFound(path.to_path_buf()));
    }

    let rows = sheet::read_rows(path)?;
    let extraction = extract::extract_records(&rows, layout)?;
    if extraction.skipped_rows > 0 {
        warn!(
            skipped = extraction.skipped_rows,
            "rows with unparsable dates were dropped"
        );
    }

    let table = report::create_monthly_report(
        &extraction.metrics,
        &extraction.records,
        &layout.week_field,
    );
    let report_path = write::save_report(&table, path, &layout.suffix)?;
    info!(
        report = %report_path.display(),
        records = extraction.records.len(),
        "report written"
    );
    Ok(report_path)
}
