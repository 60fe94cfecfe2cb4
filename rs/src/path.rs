//! Key-to-path resolution
//!
//! A logical key like `app-users-admins` splits on `-`: the last segment
//! names the file (extension appended), the rest nest as directories under
//! the configured base. Resolution is purely syntactic and does no I/O.

use std::path::PathBuf;

use crate::config::Config;

/// Resolved on-disk location for a logical key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPath {
    /// Directory the record file lives in
    pub dir: PathBuf,
    /// File name, last key segment plus extension
    pub file_name: String,
    /// Full path to the record file
    pub file_path: PathBuf,
}

impl RecordPath {
    /// Derive the location for `key` under the given config
    pub fn resolve(config: &Config, key: &str) -> Self {
        let mut segments: Vec<&str> = key.split('-').collect();
        let last = segments.pop().unwrap_or_default();

        let file_name = format!("{}{}", last, config.file_extension);

        let mut dir = config.base_dir.clone();
        for segment in &segments {
            dir.push(segment);
        }

        let file_path = dir.join(&file_name);

        Self {
            dir,
            file_name,
            file_path,
        }
    }
}
