// Small helpers shared by the engine and the dashboard: locale tolerant number
// parsing, legend value formatting, and calendar date strings.

/// Number parsing for hand typed values, where users mix "82,4", "82.4",
/// "12.345,6" and "12 345" depending on their keyboard and habits.
pub mod decimal {
    /// Parses free-form text into a finite number, or `None` when it is blank or
    /// not a number.
    ///
    /// Whitespace anywhere in the text is ignored. When both `,` and `.` appear,
    /// whichever occurs last is the decimal separator and every occurrence of the
    /// other is dropped as a thousands separator. A lone `,` is a decimal comma.
    ///
    /// Only the first decimal separator is normalized, so "1,234,5" becomes
    /// "1.234,5" and is rejected rather than guessed at.
    pub fn parse_number(text: &str) -> Option<f64> {
        let compact: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '\u{feff}')
            .collect();
        if compact.is_empty() {
            return None;
        }

        let last_comma = compact.rfind(',');
        let last_dot = compact.rfind('.');

        let normalized = match (last_comma, last_dot) {
            (Some(comma), Some(dot)) => {
                let (decimal_sep, thousands_sep) = if comma > dot { (',', '.') } else { ('.', ',') };
                compact
                    .replace(thousands_sep, "")
                    .replacen(decimal_sep, ".", 1)
            }
            (Some(_), None) => compact.replacen(',', ".", 1),
            _ => compact,
        };

        if !is_plain_decimal(&normalized) {
            return None;
        }
        normalized.parse::<f64>().ok().filter(|n| n.is_finite())
    }

    // f64::from_str also accepts "inf", "NaN" and friends; only sign, digits, one
    // point and an exponent are allowed through.
    fn is_plain_decimal(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
            && s.chars().any(|c| c.is_ascii_digit())
    }

    /// Formats a domain bound for the legend: at most one decimal place, and no
    /// decimal point at all when the rounded value is whole.
    pub fn format_range_value(value: f64) -> String {
        if !value.is_finite() {
            return "—".to_string();
        }
        let rounded = (value * 10.0).round() / 10.0;
        if (rounded - rounded.round()).abs() < 1e-9 {
            format!("{}", rounded.round() as i64)
        } else {
            format!("{}", rounded)
        }
    }

}

/// Calendar dates as zero padded `YYYY-MM-DD` strings, which sort chronologically.
pub mod dates {
    use chrono::{Local, NaiveDate};

    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    pub fn iso_date(date: NaiveDate) -> String {
        date.format(ISO_FORMAT).to_string()
    }

    /// Today's date in the local time zone.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn today_iso() -> String {
        iso_date(today())
    }

    pub fn parse_iso(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT).ok()
    }

    /// "2024-03-10" -> "03-10". Shorter strings yield an empty label.
    pub fn month_day(date: &str) -> &str {
        date.get(5..).unwrap_or("")
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_iso_date_is_zero_padded() {
            let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
            assert_eq!(iso_date(date), "2024-03-04");
        }

        #[test]
        fn test_parse_iso() {
            assert_eq!(parse_iso("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
            assert_eq!(parse_iso("2023-02-29"), None);
            assert_eq!(parse_iso("10/03/2024"), None);
        }

        #[test]
        fn test_month_day() {
            assert_eq!(month_day("2024-03-10"), "03-10");
            assert_eq!(month_day("2024"), "");
        }
    }
}
