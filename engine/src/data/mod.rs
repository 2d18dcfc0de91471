// Entry persistence, interchange formats and range selection
pub mod entry_store;
pub mod interchange;
pub mod range_filter;
pub mod slot_storage;
