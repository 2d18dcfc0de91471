// Handler for saving one day's form: text in, normalized entry stored.
use serde::{Deserialize, Serialize};
use shared::models::Entry;
use shared::utils::dates::{iso_date, parse_iso};
use shared::utils::decimal::parse_number;

use crate::data::entry_store::EntryStore;
use crate::data::slot_storage::SlotStorage;
use crate::error::{EngineError, EngineResult};

/// The entry form exactly as typed. Numeric fields may use either decimal
/// separator; blank means "not recorded".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntryForm {
    pub date: String,
    pub calories: String,
    pub weight: String,
    pub steps: String,
    pub cardio: String,
    pub workout: String,
    pub comments: String,
}

impl EntryForm {
    pub fn blank(date: &str) -> Self {
        EntryForm {
            date: date.to_string(),
            ..EntryForm::default()
        }
    }

    /// Prefills the form from a stored entry. Absent values become empty fields.
    pub fn from_entry(entry: &Entry) -> Self {
        let text = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        EntryForm {
            date: entry.date.clone(),
            calories: text(entry.calories),
            weight: text(entry.weight),
            steps: text(entry.steps),
            cardio: text(entry.cardio),
            workout: entry.workout.clone(),
            comments: entry.comments.clone(),
        }
    }

    /// Builds the entry this form describes. The date must be a real calendar
    /// date; it is re-rendered zero padded.
    pub fn to_entry(&self) -> EngineResult<Entry> {
        let date = parse_iso(&self.date).ok_or_else(|| EngineError::InvalidDate(self.date.clone()))?;
        Ok(Entry {
            date: iso_date(date),
            calories: parse_number(&self.calories),
            weight: parse_number(&self.weight),
            steps: parse_number(&self.steps),
            cardio: parse_number(&self.cardio),
            workout: self.workout.trim().to_string(),
            comments: self.comments.trim().to_string(),
        })
    }
}

pub fn handle_submit_entry<S: SlotStorage>(form: EntryForm, store: &mut EntryStore<S>) -> EngineResult<Entry> {
    let entry = form.to_entry()?;
    tracing::info!(
        date = %entry.date,
        weight = ?entry.weight,
        calories = ?entry.calories,
        steps = ?entry.steps,
        cardio = ?entry.cardio,
        "Saving entry"
    );
    store.upsert(entry.clone())?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_entry_parses_numbers_and_trims_text() {
        let form = EntryForm {
            date: "2024-03-10".to_string(),
            calories: "2 150".to_string(),
            weight: "82,4".to_string(),
            steps: "12,345.0".to_string(),
            cardio: "".to_string(),
            workout: "  bench 3x5\n".to_string(),
            comments: "\ttired ".to_string(),
        };
        let entry = form.to_entry().unwrap();
        assert_eq!(entry.calories, Some(2150.0));
        assert_eq!(entry.weight, Some(82.4));
        assert_eq!(entry.steps, Some(12345.0));
        assert_eq!(entry.cardio, None);
        assert_eq!(entry.workout, "bench 3x5");
        assert_eq!(entry.comments, "tired");
    }

    #[test]
    fn test_unparseable_number_is_absent_not_an_error() {
        let form = EntryForm {
            weight: "heavy".to_string(),
            ..EntryForm::blank("2024-03-10")
        };
        assert_eq!(form.to_entry().unwrap().weight, None);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        for date in ["", "2024-13-01", "10/03/2024", "2023-02-29"] {
            let err = EntryForm::blank(date).to_entry().unwrap_err();
            assert!(matches!(err, EngineError::InvalidDate(_)), "{}", date);
        }
    }

    #[test]
    fn test_from_entry_round_trips() {
        let mut entry = Entry::empty("2024-03-10");
        entry.weight = Some(70.5);
        entry.steps = Some(10000.0);
        entry.workout = "swim".to_string();
        let form = EntryForm::from_entry(&entry);
        assert_eq!(form.weight, "70.5");
        assert_eq!(form.steps, "10000");
        assert_eq!(form.cardio, "");
        assert_eq!(form.to_entry().unwrap(), entry);
    }
}
