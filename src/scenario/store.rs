//! Key-value persistence for scenario records

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use super::ScenarioRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("scenario {0} not found")]
    NotFound(Uuid),

    #[error("scenario store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scenario record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage for saved scenarios, keyed by record id
pub trait ScenarioStore {
    /// Insert or replace a record
    fn save(&mut self, record: &ScenarioRecord) -> Result<(), StoreError>;

    fn load(&self, id: Uuid) -> Result<ScenarioRecord, StoreError>;

    /// All records, oldest first
    fn list(&self) -> Result<Vec<ScenarioRecord>, StoreError>;

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError>;
}

fn sort_oldest_first(records: &mut [ScenarioRecord]) {
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.name.cmp(&b.name)));
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryScenarioStore {
    records: HashMap<Uuid, ScenarioRecord>,
}

impl MemoryScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioStore for MemoryScenarioStore {
    fn save(&mut self, record: &ScenarioRecord) -> Result<(), StoreError> {
        self.records.insert(record.id, record.clone());
        Ok(())
    }

    fn load(&self, id: Uuid) -> Result<ScenarioRecord, StoreError> {
        self.records.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<ScenarioRecord>, StoreError> {
        let mut records: Vec<_> = self.records.values().cloned().collect();
        sort_oldest_first(&mut records);
        Ok(records)
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.records.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }
}

/// One pretty-printed `<id>.json` file per record
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl ScenarioStore for JsonDirStore {
    fn save(&mut self, record: &ScenarioRecord) -> Result<(), StoreError> {
        let path = self.path_for(record.id);
        fs::write(&path, record.to_json()?)?;
        log::debug!("saved scenario {} to {}", record.id, path.display());
        Ok(())
    }

    fn load(&self, id: Uuid) -> Result<ScenarioRecord, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        let json = fs::read_to_string(path)?;
        Ok(ScenarioRecord::from_json(&json)?)
    }

    fn list(&self) -> Result<Vec<ScenarioRecord>, StoreError> {
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let json = fs::read_to_string(&path)?;
            records.push(ScenarioRecord::from_json(&json)?);
        }
        sort_oldest_first(&mut records);
        Ok(records)
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}
