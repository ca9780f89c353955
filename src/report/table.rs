// src/report/table.rs

/// Default title of the label column in a generated report.
pub const DEFAULT_WEEK_FIELD: &str = "№ недели";

/// Label of the per-month subtotal row.
pub const SUBTOTAL_LABEL: &str = "ИТОГО";

/// Label of the closing grand total row.
pub const GRAND_TOTAL_LABEL: &str = "ВСЕГО";

/// Label of an aggregated week row.
pub fn week_label(week: u32) -> String {
    format!("Неделя {}", week)
}

/// One output row of the finished report, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRow {
    /// Month name with year, e.g. "Январь 2024".
    MonthHeader(String),
    /// Summed values for one week of the current month.
    Week { week: u32, sums: Vec<i64> },
    /// Running totals for the month just closed.
    MonthTotal(Vec<i64>),
    /// Visual separator; occupies a row but carries nothing.
    Blank,
    /// Totals over every record in the source, raw rather than re-summed.
    GrandTotal(Vec<i64>),
}

impl ReportRow {
    /// Text for the label column.
    pub fn label(&self) -> String {
        match self {
            ReportRow::MonthHeader(name) => name.clone(),
            ReportRow::Week { week, .. } => week_label(*week),
            ReportRow::MonthTotal(_) => SUBTOTAL_LABEL.to_string(),
            ReportRow::Blank => String::new(),
            ReportRow::GrandTotal(_) => GRAND_TOTAL_LABEL.to_string(),
        }
    }

    /// Metric values for rows that carry them.
    pub fn sums(&self) -> Option<&[i64]> {
        match self {
            ReportRow::Week { sums, .. }
            | ReportRow::MonthTotal(sums)
            | ReportRow::GrandTotal(sums) => Some(sums),
            ReportRow::MonthHeader(_) | ReportRow::Blank => None,
        }
    }
}

/// A finished report: the header titles plus every row in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedTable {
    /// Title of the label column.
    pub week_field: String,
    /// Metric column titles, in layout order.
    pub metrics: Vec<String>,
    pub rows: Vec<ReportRow>,
}

impl AggregatedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
