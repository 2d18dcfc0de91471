// Persistent, date ordered collection of entries.
// Every mutation is read-modify-write of the whole collection: load, change, save_all.
use serde_json::Value;
use shared::models::Entry;

use super::interchange::normalize_entries;
use super::slot_storage::SlotStorage;
use crate::config::EngineSettings;
use crate::error::EngineResult;

pub struct EntryStore<S: SlotStorage> {
    slots: S,
    key: String,
    legacy_key: String,
}

impl<S: SlotStorage> EntryStore<S> {
    pub fn new(slots: S, key: impl Into<String>, legacy_key: impl Into<String>) -> Self {
        EntryStore {
            slots,
            key: key.into(),
            legacy_key: legacy_key.into(),
        }
    }

    pub fn from_settings(slots: S, settings: &EngineSettings) -> Self {
        Self::new(slots, settings.storage_key.clone(), settings.legacy_storage_key.clone())
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Loads the collection, sorted ascending by date.
    ///
    /// Unreadable or corrupt data yields an empty collection. When the current slot
    /// has never been written, the legacy slot is read once, normalized and written
    /// to the current slot.
    pub fn load(&mut self) -> Vec<Entry> {
        let current = match self.slots.read(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read entry slot, starting empty");
                return Vec::new();
            }
        };

        if let Some(raw) = current {
            return match parse_array(&raw) {
                Some(items) => normalize_entries(&items),
                None => {
                    tracing::warn!(key = %self.key, "Entry slot is corrupt, starting empty");
                    Vec::new()
                }
            };
        }

        self.migrate_legacy()
    }

    fn migrate_legacy(&mut self) -> Vec<Entry> {
        let raw = match self.slots.read(&self.legacy_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.legacy_key, error = %e, "Failed to read legacy slot");
                return Vec::new();
            }
        };
        let Some(items) = parse_array(&raw) else {
            tracing::warn!(key = %self.legacy_key, "Legacy slot is corrupt, ignoring it");
            return Vec::new();
        };

        let entries = normalize_entries(&items);
        match self.save_all(&entries) {
            Ok(()) => tracing::info!(
                from = %self.legacy_key,
                to = %self.key,
                count = entries.len(),
                "Migrated legacy entries"
            ),
            Err(e) => tracing::warn!(error = %e, "Failed to persist migrated entries"),
        }
        entries
    }

    /// Replaces the whole persisted collection.
    pub fn save_all(&mut self, entries: &[Entry]) -> EngineResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.slots.write(&self.key, &raw)
    }

    pub fn find(&mut self, date: &str) -> Option<Entry> {
        self.load().into_iter().find(|e| e.date == date)
    }

    /// Inserts `entry`, or replaces the existing entry for its date wholesale.
    pub fn upsert(&mut self, entry: Entry) -> EngineResult<Vec<Entry>> {
        let mut entries = self.load();
        upsert_entry(&mut entries, entry);
        self.save_all(&entries)?;
        Ok(entries)
    }

    /// Removes the entry for `date`. Returns whether one existed.
    pub fn delete(&mut self, date: &str) -> EngineResult<bool> {
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|e| e.date != date);
        let removed = entries.len() != before;
        self.save_all(&entries)?;
        Ok(removed)
    }

    /// Drops the current slot entirely. The legacy slot is left alone.
    pub fn clear(&mut self) -> EngineResult<()> {
        self.slots.remove(&self.key)
    }
}

fn parse_array(raw: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// Replaces the entry with the same date or inserts a new one, keeping `entries`
/// sorted ascending by date.
pub fn upsert_entry(entries: &mut Vec<Entry>, entry: Entry) {
    match entries.binary_search_by(|e| e.date.as_str().cmp(entry.date.as_str())) {
        Ok(idx) => entries[idx] = entry,
        Err(idx) => entries.insert(idx, entry),
    }
}
