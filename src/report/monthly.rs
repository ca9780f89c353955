// src/report/monthly.rs

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::debug;

use super::table::{AggregatedTable, ReportRow};
use crate::extract::WeeklyRecord;

const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Russian month name with year, e.g. "Январь 2024". `month` is 1-based,
/// as chrono reports it.
pub fn month_name(year: i32, month: u32) -> String {
    format!("{} {}", MONTH_NAMES[month as usize - 1], year)
}

/// Fold weekly records into the report layout: for every calendar month a
/// header, one summed row per week number, a subtotal, and a blank
/// separator, closed off by a grand total over all records.
///
/// Months are keyed by the record's calendar year and month while rows
/// within a month are keyed by the week number stored on the record, so a
/// late-December ISO week 1 stays inside December.
pub fn create_monthly_report(
    metrics: &[String],
    records: &[WeeklyRecord],
    week_field: &str,
) -> AggregatedTable {
    let mut table = AggregatedTable {
        week_field: week_field.to_string(),
        metrics: metrics.to_vec(),
        rows: Vec::new(),
    };
    if records.is_empty() {
        return table;
    }

    // one summed row per (year, month, week) present in the data; BTreeMap
    // iteration order is the chronological order the report is laid out in
    let mut groups: BTreeMap<(i32, u32, u32), Vec<i64>> = BTreeMap::new();
    for rec in records {
        let sums = groups
            .entry((rec.date.year(), rec.date.month(), rec.week))
            .or_insert_with(|| vec![0; metrics.len()]);
        add_into(sums, &rec.values);
    }

    let mut current: Option<(i32, u32)> = None;
    let mut month_totals = vec![0i64; metrics.len()];
    for ((year, month, week), sums) in &groups {
        if current != Some((*year, *month)) {
            if current.is_some() {
                let totals = std::mem::replace(&mut month_totals, vec![0; metrics.len()]);
                table.rows.push(ReportRow::MonthTotal(totals));
                table.rows.push(ReportRow::Blank);
            }
            table
                .rows
                .push(ReportRow::MonthHeader(month_name(*year, *month)));
            current = Some((*year, *month));
        }
        add_into(&mut month_totals, sums);
        table.rows.push(ReportRow::Week {
            week: *week,
            sums: sums.clone(),
        });
    }
    table.rows.push(ReportRow::MonthTotal(month_totals));
    table.rows.push(ReportRow::Blank);

    // the closing total runs over the raw records, not the weekly groups
    let mut grand = vec![0i64; metrics.len()];
    for rec in records {
        add_into(&mut grand, &rec.values);
    }
    table.rows.push(ReportRow::GrandTotal(grand));

    debug!(rows = table.rows.len(), "monthly report assembled");
    table
}

fn add_into(acc: &mut [i64], values: &[i64]) {
    for (slot, v) in acc.iter_mut().zip(values) {
        *slot += v;
    }
}
