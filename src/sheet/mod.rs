// src/sheet/mod.rs

pub mod cell;
pub mod scan;

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::{debug, instrument};

use crate::error::ReportError;

/// Load every cell of the workbook's first worksheet as an owned grid.
///
/// calamine trims leading empty rows and columns off the range it returns,
/// so the grid is padded back out to absolute sheet coordinates. Layout
/// column indices always refer to column A as 0.
#[instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn read_rows(path: &Path) -> Result<Vec<Vec<Data>>, ReportError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Vec::new()),
    };
    let (start_row, start_col) = match range.start() {
        Some((row, col)) => (row as usize, col as usize),
        None => return Ok(Vec::new()),
    };

    let mut rows: Vec<Vec<Data>> = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut padded = Vec::with_capacity(start_col + row.len());
        padded.resize(start_col, Data::Empty);
        padded.extend(row.iter().cloned());
        rows.push(padded);
    }
    debug!(rows = rows.len(), "worksheet loaded");
    Ok(rows)
}
