// src/sheet/scan.rs

use calamine::Data;

use crate::layout::ColumnLabel;

/// Find the first row containing `keyword` in any cell, by substring match
/// against the cell's display text. Returns a 1-based row number, the way
/// spreadsheet tools count rows.
pub fn find_header(rows: &[Vec<Data>], keyword: &str) -> Option<usize> {
    rows.iter()
        .position(|row| {
            row.iter()
                .any(|cell| !matches!(cell, Data::Empty) && cell.to_string().contains(keyword))
        })
        .map(|idx| idx + 1)
}

/// Slice out the contiguous block starting at 1-based `start_row`, ending
/// just before the first completely empty row. Cells holding an empty
/// string do not terminate the block; only truly empty cells do.
pub fn extract_table(rows: &[Vec<Data>], start_row: usize) -> &[Vec<Data>] {
    let start = start_row.saturating_sub(1);
    let tail = match rows.get(start..) {
        Some(tail) => tail,
        None => return &[],
    };
    let len = tail
        .iter()
        .position(|row| row.iter().all(|cell| matches!(cell, Data::Empty)))
        .unwrap_or(tail.len());
    &tail[..len]
}

/// Find the row inside `block` carrying every expected label at its column,
/// by exact match. Returns a 0-based offset into `block`.
pub fn find_label_row(block: &[Vec<Data>], labels: &[ColumnLabel]) -> Option<usize> {
    block.iter().position(|row| {
        labels.iter().all(|l| match row.get(l.column) {
            Some(Data::String(s)) => *s == l.label,
            _ => false,
        })
    })
}
