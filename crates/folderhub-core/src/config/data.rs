//! Folder data source configuration.

use serde::{Deserialize, Serialize};

/// Where the CLI loads its folder records from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the JSON file holding the flat folder records.
    #[serde(default = "default_file")]
    pub file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

fn default_file() -> String {
    "data/sample.json".to_string()
}
