// src/sheet/cell.rs

use calamine::Data;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Four-digit-year text formats tried when a date arrives as a string,
/// each gated by the digit widths it expects. chrono's `%Y` also accepts
/// short years, but those belong to the `DD.MM.YY` form below.
static DATE_FORMATS: Lazy<[(Regex, &str); 3]> = Lazy::new(|| {
    let shape = |re| Regex::new(re).unwrap();
    [
        (shape(r"^\d{4}-\d{1,2}-\d{1,2}$"), "%Y-%m-%d"),
        (shape(r"^\d{1,2}\.\d{1,2}\.\d{4}$"), "%d.%m.%Y"),
        (shape(r"^\d{4}\.\d{1,2}\.\d{1,2}$"), "%Y.%m.%d"),
    ]
});

/// `DD.MM.YY` dates, resolved by hand: POSIX strptime pivots two-digit
/// years at 69 (69 is 1969, 68 is 2068) where chrono's `%y` would map
/// them into 1970-2069.
static SHORT_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{2})$").unwrap());

static EMPTY: Data = Data::Empty;

/// Index into a row without panicking on short rows.
pub fn cell_at(row: &[Data], idx: usize) -> &Data {
    row.get(idx).unwrap_or(&EMPTY)
}

/// True for cells that hold no value at all.
pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Coerce a cell to an integer count, truncating toward zero. Anything that
/// is not a number or numeric text counts as 0.
pub fn to_number(cell: &Data) -> i64 {
    match cell {
        Data::Int(n) => *n,
        Data::Float(f) => truncate(*f),
        Data::String(s) => s.trim().parse::<f64>().map_or(0, truncate),
        _ => 0,
    }
}

fn truncate(f: f64) -> i64 {
    if f.is_finite() {
        f as i64
    } else {
        0
    }
}

/// Parse a date cell. Native date cells are taken as-is; text cells are
/// tried against each diary format.
pub fn parse_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::String(s) => parse_date_str(s),
        Data::DateTime(dt) => dt.as_datetime().map(|dt| dt.date()),
        Data::DateTimeIso(s) => match s.split('T').next() {
            Some(day) => parse_date_str(day),
            None => None,
        },
        _ => None,
    }
}

/// Try each known text format; a format whose digit widths do not match
/// the string is never attempted, and trailing characters fail the parse.
/// The shapes are mutually exclusive, so at most one format can succeed.
pub fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .filter(|(shape, _)| shape.is_match(s))
        .find_map(|(_, fmt)| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| short_year_date(s))
}

fn short_year_date(s: &str) -> Option<NaiveDate> {
    let caps = SHORT_YEAR.captures(s)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let year = if year <= 68 { 2000 + year } else { 1900 + year };
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number_coercions() {
        assert_eq!(to_number(&Data::Int(7)), 7);
        assert_eq!(to_number(&Data::Float(12.9)), 12);
        assert_eq!(to_number(&Data::Float(-3.5)), -3);
        assert_eq!(to_number(&Data::String("15".into())), 15);
        assert_eq!(to_number(&Data::String(" 15 ".into())), 15);
        assert_eq!(to_number(&Data::String("12.9".into())), 12);
        assert_eq!(to_number(&Data::String("1e3".into())), 1000);
    }

    #[test]
    fn test_to_number_non_numeric_is_zero() {
        assert_eq!(to_number(&Data::Empty), 0);
        assert_eq!(to_number(&Data::String("abc".into())), 0);
        assert_eq!(to_number(&Data::String("".into())), 0);
        assert_eq!(to_number(&Data::Bool(true)), 0);
        assert_eq!(to_number(&Data::String("inf".into())), 0);
    }

    #[test]
    fn test_parse_date_str_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(parse_date_str("2024-01-08"), Some(expected));
        assert_eq!(parse_date_str("08.01.2024"), Some(expected));
        assert_eq!(parse_date_str("08.01.24"), Some(expected));
        assert_eq!(parse_date_str("2024.01.08"), Some(expected));
        assert_eq!(parse_date_str("  2024-01-08  "), Some(expected));
    }

    #[test]
    fn test_parse_date_str_two_digit_year_pivot() {
        assert_eq!(
            parse_date_str("31.12.69"),
            NaiveDate::from_ymd_opt(1969, 12, 31)
        );
        assert_eq!(
            parse_date_str("01.01.68"),
            NaiveDate::from_ymd_opt(2068, 1, 1)
        );
        assert_eq!(
            parse_date_str("05.02.00"),
            NaiveDate::from_ymd_opt(2000, 2, 5)
        );
    }

    #[test]
    fn test_parse_date_str_rejects_other_shapes() {
        assert_eq!(parse_date_str("08/01/2024"), None);
        assert_eq!(parse_date_str("2024-01-08 00:00:00"), None);
        assert_eq!(parse_date_str("январь"), None);
        assert_eq!(parse_date_str(""), None);
        // short years never ride on the four-digit formats
        assert_eq!(parse_date_str("24-01-08"), None);
        assert_eq!(parse_date_str("08.01.224"), None);
        assert_eq!(parse_date_str("8.1.4"), None);
    }

    #[test]
    fn test_parse_date_cells() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(parse_date(&Data::String("08.01.2024".into())), Some(expected));
        assert_eq!(
            parse_date(&Data::DateTimeIso("2024-01-08T00:00:00".into())),
            Some(expected)
        );
        assert_eq!(parse_date(&Data::DateTimeIso("2024-01-08".into())), Some(expected));
        assert_eq!(parse_date(&Data::Empty), None);
        assert_eq!(parse_date(&Data::Float(45000.0)), None);
    }

    #[test]
    fn test_cell_at_short_row() {
        let row = vec![Data::Int(1)];
        assert_eq!(cell_at(&row, 0), &Data::Int(1));
        assert_eq!(cell_at(&row, 5), &Data::Empty);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&Data::Empty));
        assert!(is_blank(&Data::String("".into())));
        assert!(is_blank(&Data::String("   ".into())));
        assert!(!is_blank(&Data::String("x".into())));
        assert!(!is_blank(&Data::Int(0)));
    }
}
