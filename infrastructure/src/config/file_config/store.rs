//! Store configuration from TOML (`[store]` section)

use crate::store::JsonFileStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Directory holding the JSON documents (default: `$XDG_DATA_HOME/roundtable`)
    pub data_dir: Option<PathBuf>,
}

impl FileStoreConfig {
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(JsonFileStore::default_data_dir)
    }
}
