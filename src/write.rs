// src/write.rs

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, instrument};

use crate::error::ReportError;
use crate::report::AggregatedTable;

/// Path the report is written to: the source name with the layout suffix
/// spliced in before the extension, in the source's own directory.
pub fn report_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match source.extension().map(|e| e.to_string_lossy()) {
        Some(ext) => format!("{}-{}.{}", stem, suffix, ext),
        None => format!("{}-{}", stem, suffix),
    };
    source.with_file_name(name)
}

/// Write the finished table as an xlsx workbook next to the source file.
///
/// The header row is bold; blank separator rows advance the cursor without
/// writing any cell.
#[instrument(level = "debug", skip(table, source), fields(rows = table.rows.len()))]
pub fn save_report(
    table: &AggregatedTable,
    source: &Path,
    suffix: &str,
) -> Result<PathBuf, ReportError> {
    let path = report_path(source, suffix);

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    sheet.write_string_with_format(0, 0, table.week_field.as_str(), &bold)?;
    for (idx, name) in table.metrics.iter().enumerate() {
        sheet.write_string_with_format(0, (idx + 1) as u16, name.as_str(), &bold)?;
    }

    for (offset, row) in table.rows.iter().enumerate() {
        let out_row = (offset + 1) as u32;
        let label = row.label();
        if !label.is_empty() {
            sheet.write_string(out_row, 0, label.as_str())?;
        }
        if let Some(sums) = row.sums() {
            for (idx, value) in sums.iter().enumerate() {
                sheet.write_number(out_row, (idx + 1) as u16, *value as f64)?;
            }
        }
    }

    workbook.save(&path)?;
    debug!(path = %path.display(), "workbook saved");
    Ok(path)
}
