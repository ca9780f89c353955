// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a report run. Individual rows whose date cell cannot
/// be parsed are not errors; they are dropped and counted in
/// [`Extraction::skipped_rows`](crate::extract::Extraction::skipped_rows).
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("source file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("no row containing \"{keyword}\" found in the source sheet")]
    MissingHeader { keyword: String },

    #[error("no data header row found under \"{keyword}\"")]
    MissingDataHeader { keyword: String },

    #[error("no parsable data rows in the source sheet")]
    NoData,

    #[error("failed to write report: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}
