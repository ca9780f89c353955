// src/layout/mod.rs

pub mod builtin;
pub mod types;

pub use builtin::ReportKind;
pub use types::{ColumnLabel, DataStart, MetricColumn, ReportLayout};

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Load a layout from a JSON file, for sheets the builtin four don't cover.
pub fn load_layout(path: &Path) -> Result<ReportLayout> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read layout file {}", path.display()))?;
    let layout: ReportLayout = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse layout file {}", path.display()))?;
    if layout.metrics.is_empty() {
        bail!("layout \"{}\" defines no metric columns", layout.name);
    }
    debug!(layout = %layout.name, metrics = layout.metrics.len(), "layout loaded");
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_layout_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"{{
                "name": "шахматы",
                "keyword": "Дата",
                "suffix": "шахматы",
                "start": {{ "labelled_header": {{ "labels": [{{ "column": 1, "label": "Дата" }}] }} }},
                "metrics": [{{ "name": "Партии", "columns": [3, 4] }}]
            }}"#
        )?;

        let layout = load_layout(file.path())?;
        assert_eq!(layout.name, "шахматы");
        assert_eq!(layout.date_column, 1);
        assert_eq!(layout.metrics[0].columns, vec![3, 4]);
        match layout.start {
            DataStart::LabelledHeader { ref labels } => assert_eq!(labels.len(), 1),
            ref other => panic!("unexpected start: {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_load_layout_rejects_empty_metrics() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"{{ "name": "пустой", "keyword": "Дата", "suffix": "x",
                 "start": "after_keyword", "metrics": [] }}"#
        )?;
        assert!(load_layout(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_load_layout_missing_file() {
        assert!(load_layout(Path::new("/nonexistent/layout.json")).is_err());
    }
}
