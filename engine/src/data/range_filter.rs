// Selects the entries that fall inside the chart's lookback window.
use chrono::{Duration, NaiveDate};
use shared::models::{Entry, Window};
use shared::utils::dates::iso_date;

/// Inclusive `[start, end]` date strings for a window of `days` ending on `today`.
/// A window reaching past the earliest representable date starts there.
pub fn window_bounds(days: u32, today: NaiveDate) -> (String, String) {
    let back = Duration::days(i64::from(days.saturating_sub(1)));
    let start = today.checked_sub_signed(back).unwrap_or(NaiveDate::MIN);
    (iso_date(start), iso_date(today))
}

/// Entries whose date lies within the trailing `window` ending on `today`, in their
/// original order. `Window::All` keeps everything.
///
/// Dates are compared as strings, which matches chronological order for zero
/// padded `YYYY-MM-DD`.
pub fn filter_entries(entries: &[Entry], window: Window, today: NaiveDate) -> Vec<Entry> {
    match window {
        Window::All => entries.to_vec(),
        Window::Days(days) => {
            let (start, end) = window_bounds(days, today);
            entries
                .iter()
                .filter(|e| e.date.as_str() >= start.as_str() && e.date.as_str() <= end.as_str())
                .cloned()
                .collect()
        }
    }
}
