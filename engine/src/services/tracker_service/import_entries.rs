// Handler for importing an export file, replacing the whole collection.
use crate::data::entry_store::EntryStore;
use crate::data::interchange::parse_import;
use crate::data::slot_storage::SlotStorage;
use crate::error::EngineResult;

pub fn handle_import<S: SlotStorage>(text: &str, store: &mut EntryStore<S>) -> EngineResult<usize> {
    let entries = match parse_import(text) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected import payload, store left untouched");
            return Err(e);
        }
    };
    store.save_all(&entries)?;
    tracing::info!(count = entries.len(), "Imported entries");
    Ok(entries.len())
}
