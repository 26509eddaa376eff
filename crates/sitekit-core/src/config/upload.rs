//! Upload configuration for project-brief attachments.

use serde::{Deserialize, Serialize};

/// Upload storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Root directory for stored attachments.
    #[serde(default = "default_root")]
    pub root: String,
    /// Maximum attachment size in bytes.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_root() -> String {
    "data/uploads".to_string()
}

fn default_max_bytes() -> usize {
    10 * 1024 * 1024
}
