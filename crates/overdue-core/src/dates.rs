use crate::models::CellValue;
use chrono::{NaiveDate, NaiveDateTime};

/// Recognized string formats, tried in order. The order is significant:
/// `03/04/2025` matches both `%m/%d/%Y` and `%d/%m/%Y` and must resolve as
/// March 4 because the US form is tried first.
const DATE_FORMATS: [&str; 11] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Converts a heterogeneous cell value into a canonical calendar date.
///
/// Native date cells return their date portion directly with no string
/// round-trip. Everything else is stringified, trimmed, and tried against
/// the fixed format list; the first full match wins. Returns `None` for
/// empty cells and strings no format accepts. Failure is silent here: the
/// evaluator turns it into a task status, not an error.
pub fn normalize(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Empty => None,
        CellValue::Date(d) => Some(*d),
        CellValue::DateTime(dt) => Some(dt.date()),
        other => parse_date_str(&other.to_string()),
    }
}

fn parse_date_str(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if fmt.contains("%H") {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt.date());
            }
        } else if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("2025-03-04 13:45:00", 2025, 3, 4)]
    #[case("2025-03-04", 2025, 3, 4)]
    #[case("03/04/2025", 2025, 3, 4)]
    #[case("13/04/2025", 2025, 4, 13)]
    #[case("03-04-2025", 2025, 3, 4)]
    #[case("13-04-2025", 2025, 4, 13)]
    #[case("2025/03/04", 2025, 3, 4)]
    #[case("March 4, 2025", 2025, 3, 4)]
    #[case("Mar 4, 2025", 2025, 3, 4)]
    #[case("4 March 2025", 2025, 3, 4)]
    #[case("4 Mar 2025", 2025, 3, 4)]
    fn recognizes_every_format(
        #[case] input: &str,
        #[case] y: i32,
        #[case] m: u32,
        #[case] d: u32,
    ) {
        assert_eq!(
            normalize(&CellValue::Text(input.to_string())),
            Some(date(y, m, d)),
            "failed for {:?}",
            input
        );
    }

    #[test]
    fn ambiguous_slash_date_prefers_us_order() {
        // Matches both MM/DD and DD/MM; the US pattern comes first.
        let parsed = normalize(&CellValue::Text("03/04/2025".to_string()));
        assert_eq!(parsed, Some(date(2025, 3, 4)));
    }

    #[test]
    fn day_first_only_when_us_order_is_impossible() {
        let parsed = normalize(&CellValue::Text("25/12/2025".to_string()));
        assert_eq!(parsed, Some(date(2025, 12, 25)));
    }

    #[test]
    fn native_date_cells_skip_string_parsing() {
        let d = date(2024, 2, 29);
        assert_eq!(normalize(&CellValue::Date(d)), Some(d));

        let dt = d.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(normalize(&CellValue::DateTime(dt)), Some(d));
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        let parsed = normalize(&CellValue::Text("  2025-03-04  ".to_string()));
        assert_eq!(parsed, Some(date(2025, 3, 4)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("garbage")]
    #[case("not a date")]
    #[case("2025-13-40")]
    fn unrecognized_values_yield_none(#[case] input: &str) {
        assert_eq!(normalize(&CellValue::Text(input.to_string())), None);
    }

    #[test]
    fn empty_cell_yields_none() {
        assert_eq!(normalize(&CellValue::Empty), None);
    }

    #[test]
    fn partial_matches_are_rejected() {
        // Trailing garbage after a valid prefix must not parse.
        assert_eq!(
            normalize(&CellValue::Text("2025-03-04 and more".to_string())),
            None
        );
    }
}
