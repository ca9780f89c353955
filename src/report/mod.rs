// src/report/mod.rs

pub mod monthly;
pub mod table;

pub use monthly::{create_monthly_report, month_name};
pub use table::{
    AggregatedTable, ReportRow, DEFAULT_WEEK_FIELD, GRAND_TOTAL_LABEL, SUBTOTAL_LABEL,
};
