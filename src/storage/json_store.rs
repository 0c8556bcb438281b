//! JSON-backed option repository.
//!
//! Custom options created during a session are appended here so the next
//! session can seed its option catalog with them. Entries are keyed by
//! slug; re-creating an existing slug is a no-op.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::options::{OptionEntry, OptionRepository};
use crate::errors::Result;
use crate::utils::{ensure_dir, write_atomic};

const STORE_FILE: &str = "custom_options.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    sets: BTreeMap<String, Vec<OptionEntry>>,
}

/// Stores custom option entries under the facility data directory.
#[derive(Debug, Clone)]
pub struct JsonOptionStore {
    path: PathBuf,
}

impl JsonOptionStore {
    pub fn new(dir: &Path) -> Result<Self> {
        ensure_dir(dir)?;
        Ok(Self {
            path: dir.join(STORE_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write(&self, store: &StoreFile) -> Result<()> {
        let json = serde_json::to_string_pretty(store)?;
        write_atomic(&self.path, &json)
    }
}

impl OptionRepository for JsonOptionStore {
    fn create(&mut self, set: &str, entry: &OptionEntry) -> Result<()> {
        let mut store = self.read()?;
        let entries = store.sets.entry(set.to_string()).or_default();
        if entries.iter().any(|candidate| candidate.slug == entry.slug) {
            return Ok(());
        }
        entries.push(entry.clone());
        self.write(&store)
    }

    fn list(&self, set: &str) -> Result<Vec<OptionEntry>> {
        let mut store = self.read()?;
        Ok(store.sets.remove(set).unwrap_or_default())
    }
}
