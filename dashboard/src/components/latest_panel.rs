// Summary of the most recent entry.
use shared::models::Entry;

pub const EMPTY_NOTICE: &str = "No entries yet.";
const MISSING: &str = "—";

/// Label/value rows for `entry`. Absent numbers and empty text show as a dash.
pub fn latest_rows(entry: &Entry) -> Vec<(&'static str, String)> {
    let number = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_else(|| MISSING.to_string());
    let text = |s: &str| if s.is_empty() { MISSING.to_string() } else { s.to_string() };
    vec![
        ("Date", entry.date.clone()),
        ("Weight (kg)", number(entry.weight)),
        ("Calories", number(entry.calories)),
        ("Steps", number(entry.steps)),
        ("Cardio (min)", number(entry.cardio)),
        ("Workout", text(&entry.workout)),
        ("Comments", text(&entry.comments)),
    ]
}

/// Plain text panel for the last entry of a date sorted collection.
pub fn render_latest(entries: &[Entry]) -> String {
    let Some(last) = entries.last() else {
        return EMPTY_NOTICE.to_string();
    };
    let rows = latest_rows(last);
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|(k, v)| format!("{:<width$}  {}", k, v, width = key_width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_shows_notice() {
        assert_eq!(render_latest(&[]), "No entries yet.");
    }

    #[test]
    fn test_rows_use_dash_for_missing_values() {
        let mut entry = Entry::empty("2024-03-10");
        entry.weight = Some(70.5);
        entry.steps = Some(0.0);
        let rows = latest_rows(&entry);
        assert_eq!(rows[0], ("Date", "2024-03-10".to_string()));
        assert_eq!(rows[1], ("Weight (kg)", "70.5".to_string()));
        assert_eq!(rows[2], ("Calories", "—".to_string()));
        assert_eq!(rows[3], ("Steps", "0".to_string()));
        assert_eq!(rows[5], ("Workout", "—".to_string()));
    }

    #[test]
    fn test_panel_shows_last_entry() {
        let older = Entry::empty("2024-03-09");
        let mut newer = Entry::empty("2024-03-10");
        newer.workout = "run".to_string();
        let panel = render_latest(&[older, newer]);
        assert!(panel.starts_with("Date          2024-03-10"));
        assert!(panel.contains("Workout       run"));
    }
}
