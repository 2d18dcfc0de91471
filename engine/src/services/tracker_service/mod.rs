// engine/src/services/tracker_service/mod.rs
// TrackerService runs every user action against the entry store: each call loads
// the persisted collection, applies one change or one read, and returns.
// The individual operations live in sibling modules.
use chrono::NaiveDate;
use shared::models::{Entry, RenderRequest};

use crate::config::EngineSettings;
use crate::data::entry_store::EntryStore;
use crate::data::slot_storage::{FileSlots, SlotStorage};
use crate::error::EngineResult;

pub mod chart_data;
pub mod export_entries;
pub mod import_entries;
pub mod submit_entry;

pub use chart_data::ChartData;
pub use export_entries::ExportFormat;
pub use submit_entry::EntryForm;

pub struct TrackerService<S: SlotStorage> {
    store: EntryStore<S>,
}

impl TrackerService<FileSlots> {
    /// A service persisting to `settings.data_dir`.
    pub fn open(settings: &EngineSettings) -> Self {
        tracing::debug!(data_dir = %settings.data_dir.display(), key = %settings.storage_key, "Opening entry store");
        let slots = FileSlots::new(settings.data_dir.clone());
        TrackerService::new(EntryStore::from_settings(slots, settings))
    }
}

impl<S: SlotStorage> TrackerService<S> {
    pub fn new(store: EntryStore<S>) -> Self {
        TrackerService { store }
    }

    pub fn entries(&mut self) -> Vec<Entry> {
        self.store.load()
    }

    /// Most recent entry by date.
    pub fn latest(&mut self) -> Option<Entry> {
        self.store.load().pop()
    }

    pub fn find(&mut self, date: &str) -> Option<Entry> {
        self.store.find(date)
    }

    /// The form contents for editing `date`: the stored values, or a blank form.
    pub fn form_for(&mut self, date: &str) -> EntryForm {
        match self.store.find(date) {
            Some(entry) => EntryForm::from_entry(&entry),
            None => EntryForm::blank(date),
        }
    }

    pub fn submit_entry(&mut self, form: EntryForm) -> EngineResult<Entry> {
        submit_entry::handle_submit_entry(form, &mut self.store)
    }

    pub fn delete_entry(&mut self, date: &str) -> EngineResult<bool> {
        let removed = self.store.delete(date)?;
        if removed {
            tracing::info!(date, "Deleted entry");
        } else {
            tracing::info!(date, "No entry to delete");
        }
        Ok(removed)
    }

    /// Replaces the whole collection with the contents of an export file. Returns
    /// how many entries were imported.
    pub fn import_json(&mut self, text: &str) -> EngineResult<usize> {
        import_entries::handle_import(text, &mut self.store)
    }

    pub fn export(&mut self, format: ExportFormat) -> EngineResult<String> {
        export_entries::handle_export(format, &mut self.store)
    }

    pub fn clear(&mut self) -> EngineResult<()> {
        self.store.clear()?;
        tracing::info!("Cleared all entries");
        Ok(())
    }

    /// Everything the chart needs for `request`, recomputed from the stored collection.
    pub fn chart_data(&mut self, request: &RenderRequest, today: NaiveDate) -> ChartData {
        chart_data::build_chart_data(&self.store.load(), request, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::slot_storage::MemorySlots;
    use shared::models::{Metric, Window};

    fn service() -> TrackerService<MemorySlots> {
        TrackerService::new(EntryStore::new(MemorySlots::new(), "ft_entries_v2", "ft_entries_v1"))
    }

    fn form(date: &str, weight: &str) -> EntryForm {
        EntryForm {
            weight: weight.to_string(),
            ..EntryForm::blank(date)
        }
    }

    #[test]
    fn test_submit_then_read_back() {
        let mut svc = service();
        svc.submit_entry(form("2024-03-02", "70,4")).unwrap();
        svc.submit_entry(form("2024-03-01", "70.9")).unwrap();

        let entries = svc.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].weight, Some(70.9));
        assert_eq!(svc.latest().unwrap().date, "2024-03-02");
    }

    #[test]
    fn test_form_for_existing_and_new_dates() {
        let mut svc = service();
        svc.submit_entry(form("2024-03-01", "70,5")).unwrap();
        assert_eq!(svc.form_for("2024-03-01").weight, "70.5");
        assert_eq!(svc.form_for("2024-03-01").calories, "");
        assert_eq!(svc.form_for("2024-03-05"), EntryForm::blank("2024-03-05"));
    }

    #[test]
    fn test_delete_entry() {
        let mut svc = service();
        svc.submit_entry(form("2024-03-01", "70")).unwrap();
        assert!(svc.delete_entry("2024-03-01").unwrap());
        assert!(svc.entries().is_empty());
    }

    #[test]
    fn test_failed_import_leaves_store_untouched() {
        let mut svc = service();
        svc.submit_entry(form("2024-03-01", "70")).unwrap();
        assert!(svc.import_json(r#"{"not":"an array"}"#).is_err());
        assert!(svc.import_json("garbage").is_err());
        assert_eq!(svc.entries().len(), 1);
    }

    #[test]
    fn test_import_replaces_collection() {
        let mut svc = service();
        svc.submit_entry(form("2024-03-01", "70")).unwrap();
        let count = svc
            .import_json(r#"[{"date":"2024-01-01","weight":"70,5"},{"date":"2024-01-02"}]"#)
            .unwrap();
        assert_eq!(count, 2);
        let entries = svc.entries();
        assert_eq!(entries[0].weight, Some(70.5));
        assert!(svc.find("2024-03-01").is_none());
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut svc = service();
        svc.submit_entry(form("2024-03-01", "70")).unwrap();
        svc.submit_entry(EntryForm {
            steps: "10 500".to_string(),
            comments: " rest day ".to_string(),
            ..EntryForm::blank("2024-03-02")
        })
        .unwrap();
        let before = svc.entries();
        let exported = svc.export(ExportFormat::Json).unwrap();

        let mut other = service();
        other.import_json(&exported).unwrap();
        assert_eq!(other.entries(), before);
    }

    #[test]
    fn test_clear() {
        let mut svc = service();
        svc.submit_entry(form("2024-03-01", "70")).unwrap();
        svc.clear().unwrap();
        assert!(svc.entries().is_empty());
        assert!(svc.latest().is_none());
    }

    #[test]
    fn test_chart_data_uses_window_and_fallback_metric() {
        let mut svc = service();
        for (date, weight) in [("2024-03-01", "72"), ("2024-03-08", "71"), ("2024-03-10", "70")] {
            svc.submit_entry(form(date, weight)).unwrap();
        }
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let data = svc.chart_data(&RenderRequest::new(Window::Days(7), vec![]), today);
        assert!(data.has_any_data);
        assert_eq!(data.dates, vec!["2024-03-08", "2024-03-10"]);
        assert_eq!(data.series.len(), 1);
        assert_eq!(data.series[0].metric, Metric::Weight);
        assert_eq!(data.series[0].values, vec![Some(1.0), Some(0.0)]);
    }
}
