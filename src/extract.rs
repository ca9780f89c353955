// src/extract.rs

use calamine::Data;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::error::ReportError;
use crate::layout::{DataStart, ReportLayout};
use crate::sheet::cell::{self, cell_at};
use crate::sheet::scan;

/// Text that opens like an ISO date, e.g. "2024-01-08".
static DATE_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}-").unwrap());

/// One parsed diary row: the record date, its ISO week number, and one
/// value per layout metric, in layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyRecord {
    pub date: NaiveDate,
    pub week: u32,
    pub values: Vec<i64>,
}

/// Everything pulled out of one source sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Metric display names, in layout order.
    pub metrics: Vec<String>,
    pub records: Vec<WeeklyRecord>,
    /// Rows dropped because their date cell held unparsable text. Rows
    /// with a blank date cell are structural filler and are not counted.
    pub skipped_rows: usize,
}

/// Pull every data row the layout describes out of the sheet grid.
#[instrument(level = "debug", skip(rows, layout), fields(layout = %layout.name, rows = rows.len()))]
pub fn extract_records(
    rows: &[Vec<Data>],
    layout: &ReportLayout,
) -> Result<Extraction, ReportError> {
    let header_row = scan::find_header(rows, &layout.keyword).ok_or_else(|| {
        ReportError::MissingHeader {
            keyword: layout.keyword.clone(),
        }
    })?;
    trace!(header_row, "keyword row located");

    let mut records = Vec::new();
    let mut skipped_rows = 0usize;

    match &layout.start {
        DataStart::LabelledHeader { labels } => {
            let block = scan::extract_table(rows, header_row);
            let label_offset = scan::find_label_row(block, labels).ok_or_else(|| {
                ReportError::MissingDataHeader {
                    keyword: layout.keyword.clone(),
                }
            })?;
            for row in &block[label_offset + 1..] {
                collect_row(row, layout, &mut records, &mut skipped_rows);
            }
        }
        DataStart::DatePattern => {
            let start_row = first_date_like_row(rows, layout.date_column).ok_or_else(|| {
                ReportError::MissingDataHeader {
                    keyword: layout.keyword.clone(),
                }
            })?;
            for row in scan::extract_table(rows, start_row) {
                collect_row(row, layout, &mut records, &mut skipped_rows);
            }
        }
        DataStart::AfterKeyword => {
            // summary sheets scatter data between decorative gaps, so no
            // terminator applies; every row below the keyword is a candidate
            for row in rows.iter().skip(header_row) {
                collect_row(row, layout, &mut records, &mut skipped_rows);
            }
        }
    }

    if records.is_empty() {
        return Err(ReportError::NoData);
    }
    debug!(records = records.len(), skipped_rows, "extraction finished");

    Ok(Extraction {
        metrics: layout.metrics.iter().map(|m| m.name.clone()).collect(),
        records,
        skipped_rows,
    })
}

/// 1-based number of the first row whose date column holds date-like text.
/// The matching row itself is the first data row.
fn first_date_like_row(rows: &[Vec<Data>], date_column: usize) -> Option<usize> {
    rows.iter()
        .position(|row| match cell_at(row, date_column) {
            Data::String(s) => DATE_LIKE.is_match(s),
            _ => false,
        })
        .map(|idx| idx + 1)
}

fn collect_row(
    row: &[Data],
    layout: &ReportLayout,
    records: &mut Vec<WeeklyRecord>,
    skipped_rows: &mut usize,
) {
    let date_cell = cell_at(row, layout.date_column);
    if cell::is_blank(date_cell) {
        return;
    }
    let date = match cell::parse_date(date_cell) {
        Some(date) => date,
        None => {
            debug!(cell = %date_cell, "unparsable date cell, row skipped");
            *skipped_rows += 1;
            return;
        }
    };

    let values = layout
        .metrics
        .iter()
        .map(|m| {
            m.columns
                .iter()
                .map(|&col| cell::to_number(cell_at(row, col)))
                .sum()
        })
        .collect();
    records.push(WeeklyRecord {
        date,
        week: date.iso_week().week(),
        values,
    });
}
