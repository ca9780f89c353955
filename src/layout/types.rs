// src/layout/types.rs

use serde::{Deserialize, Serialize};

use crate::report::DEFAULT_WEEK_FIELD;

/// One output column: a display name plus the source columns summed into it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct MetricColumn {
    pub name: String,
    /// 0-based sheet columns whose values are added together per row.
    pub columns: Vec<usize>,
}

/// An expected cell text at a fixed column, used to recognise a header row.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct ColumnLabel {
    pub column: usize,
    pub label: String,
}

/// How to find the first data row once the keyword row has been located.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataStart {
    /// Data begins right under the row carrying all of these labels.
    LabelledHeader { labels: Vec<ColumnLabel> },
    /// Data begins at the first cell in the date column whose text opens
    /// like an ISO date.
    DatePattern,
    /// Every row below the keyword row is a candidate; gaps do not end
    /// the table.
    AfterKeyword,
}

/// Declarative description of one diary sheet family: where its table sits
/// and which columns make up the report.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct ReportLayout {
    /// Short identifier used in logs.
    pub name: String,
    /// Substring that locates the header zone.
    pub keyword: String,
    /// Appended to the source file stem to name the output file.
    pub suffix: String,
    /// 0-based column holding the record date.
    #[serde(default = "default_date_column")]
    pub date_column: usize,
    /// Title of the label column in the generated report.
    #[serde(default = "default_week_field")]
    pub week_field: String,
    pub start: DataStart,
    pub metrics: Vec<MetricColumn>,
}

fn default_date_column() -> usize {
    1
}

fn default_week_field() -> String {
    DEFAULT_WEEK_FIELD.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_json_round_trip() {
        let layout = ReportLayout {
            name: "custom".to_string(),
            keyword: "Дата".to_string(),
            suffix: "отчет".to_string(),
            date_column: 1,
            week_field: DEFAULT_WEEK_FIELD.to_string(),
            start: DataStart::LabelledHeader {
                labels: vec![ColumnLabel {
                    column: 1,
                    label: "Дата".to_string(),
                }],
            },
            metrics: vec![MetricColumn {
                name: "Посещения".to_string(),
                columns: vec![4, 7],
            }],
        };
        let json = serde_json::to_string(&layout).unwrap();
        let back: ReportLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }

    #[test]
    fn test_layout_defaults_from_json() {
        let json = r#"{
            "name": "minimal",
            "keyword": "Пункт книговыдачи",
            "suffix": "книговыдача",
            "start": "date_pattern",
            "metrics": [{ "name": "Всего", "columns": [2] }]
        }"#;
        let layout: ReportLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.date_column, 1);
        assert_eq!(layout.week_field, DEFAULT_WEEK_FIELD);
        assert_eq!(layout.start, DataStart::DatePattern);
    }
}
