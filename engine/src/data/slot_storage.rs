// Key/value slots that hold serialized entry collections.
// The entry store only ever reads, writes or removes a whole slot.
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::EngineResult;

pub trait SlotStorage {
    /// Raw slot contents, or `None` when the slot was never written.
    fn read(&self, key: &str) -> EngineResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> EngineResult<()>;
    fn remove(&mut self, key: &str) -> EngineResult<()>;
}

/// One `<key>.json` file per slot inside a directory.
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSlots { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStorage for FileSlots {
    fn read(&self, key: &str) -> EngineResult<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> EngineResult<()> {
        fs::create_dir_all(&self.dir)?;
        // Write beside the slot, then persist over it, so a crash never leaves a
        // half written slot behind.
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.into_temp_path().persist(self.slot_path(key)).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> EngineResult<()> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process slots, used by tests and anywhere persistence is not wanted.
#[derive(Debug, Default, Clone)]
pub struct MemorySlots {
    slots: HashMap<String, String>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }
}

impl SlotStorage for MemorySlots {
    fn read(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> EngineResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> EngineResult<()> {
        self.slots.remove(key);
        Ok(())
    }
}
