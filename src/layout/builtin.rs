// src/layout/builtin.rs
//
// The four report families the library diary ships in. Column positions
// follow the municipal diary export and are fixed per family; anything
// else goes through a JSON layout file.

use super::types::{ColumnLabel, DataStart, MetricColumn, ReportLayout};
use crate::report::DEFAULT_WEEK_FIELD;

/// Builtin diary sheet families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Diary part 1.1, readers by age group.
    Users,
    /// Reader registrations per service point.
    Registrations,
    /// Diary part 1.2, visits and enquiries.
    Visits,
    /// Loan statistics per service point.
    Loans,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Users,
        ReportKind::Registrations,
        ReportKind::Visits,
        ReportKind::Loans,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ReportKind::Users => "users",
            ReportKind::Registrations => "registrations",
            ReportKind::Visits => "visits",
            ReportKind::Loans => "loans",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "users" => Some(ReportKind::Users),
            "registrations" => Some(ReportKind::Registrations),
            "visits" => Some(ReportKind::Visits),
            "loans" => Some(ReportKind::Loans),
            _ => None,
        }
    }

    /// Build the layout for this family.
    pub fn layout(&self) -> ReportLayout {
        match self {
            ReportKind::Users => users(),
            ReportKind::Registrations => registrations(),
            ReportKind::Visits => visits(),
            ReportKind::Loans => loans(),
        }
    }
}

fn metric(name: &str, columns: &[usize]) -> MetricColumn {
    MetricColumn {
        name: name.to_string(),
        columns: columns.to_vec(),
    }
}

fn label(column: usize, text: &str) -> ColumnLabel {
    ColumnLabel {
        column,
        label: text.to_string(),
    }
}

fn base(name: &str, keyword: &str, suffix: &str) -> ReportLayout {
    ReportLayout {
        name: name.to_string(),
        keyword: keyword.to_string(),
        suffix: suffix.to_string(),
        date_column: 1,
        week_field: DEFAULT_WEEK_FIELD.to_string(),
        start: DataStart::AfterKeyword,
        metrics: Vec::new(),
    }
}

fn users() -> ReportLayout {
    ReportLayout {
        start: DataStart::LabelledHeader {
            labels: vec![label(1, "Дата"), label(2, "Всего читателей")],
        },
        metrics: vec![
            metric("0-6", &[7]),
            metric("7-9", &[8]),
            metric("10-14", &[9]),
            metric("15-17", &[10]),
            metric("18-35", &[11]),
            metric("36-55", &[13]),
            metric("56 и старше", &[14]),
        ],
        ..base("users", "Дата", "пользователи")
    }
}

fn registrations() -> ReportLayout {
    ReportLayout {
        start: DataStart::AfterKeyword,
        metrics: vec![metric("Договоры", &[2])],
        ..base(
            "registrations",
            "Пункт книговыдачи / период",
            "запись-читателей",
        )
    }
}

fn visits() -> ReportLayout {
    ReportLayout {
        start: DataStart::LabelledHeader {
            labels: vec![label(1, "Дата")],
        },
        metrics: vec![
            metric("Посещения", &[4, 7, 9, 13]),
            metric("КДФ", &[12]),
            metric("Почта", &[21]),
            metric("Телефон", &[20]),
            metric("В стационарных условиях", &[16]),
            metric("Справки 1", &[17]),
            metric("Справки 2", &[18]),
            metric("Справки 3", &[19]),
        ],
        ..base("visits", "Дата", "посещения")
    }
}

fn loans() -> ReportLayout {
    ReportLayout {
        start: DataStart::DatePattern,
        metrics: vec![
            metric("Всего", &[2]),
            metric("Детям до 14 лет вкл.", &[5, 6, 7]),
            metric("Подростки 15-17 лет", &[8]),
            metric("Молодежь 18-35 лет", &[9]),
        ],
        ..base("loans", "Пункт книговыдачи", "книговыдача")
    }
}
