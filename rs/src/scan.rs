//! Size-based file access strategies
//!
//! Reads pick between loading the whole file and streaming it line by line,
//! based on a single metadata probe against the configured size limit. Both
//! paths apply the same blank-line filter and trim, so they are observably
//! equivalent for identical file contents.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Access strategy selected once per operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    /// Load the whole file into memory and split on newlines
    Eager,
    /// Scan line by line through a buffered reader, bounded memory
    Streaming,
}

impl Access {
    /// Probe the file size and pick a strategy.
    /// Fails when the file is missing or its metadata is unreadable.
    pub(crate) fn probe(path: &Path, limit: u64) -> io::Result<Self> {
        let size = fs::metadata(path)?.len();
        let access = if size > limit { Self::Streaming } else { Self::Eager };
        debug!(path = %path.display(), size, ?access, "selected access strategy");
        Ok(access)
    }
}

/// Collect every record: non-blank lines, trimmed, in file order
pub(crate) fn collect_rows(path: &Path, access: Access) -> io::Result<Vec<String>> {
    match access {
        Access::Eager => {
            let data = fs::read_to_string(path)?;
            Ok(data
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect())
        }
        Access::Streaming => {
            let reader = BufReader::new(File::open(path)?);
            let mut rows = Vec::new();
            for line in reader.lines() {
                let line = line?;
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    rows.push(trimmed.to_string());
                }
            }
            Ok(rows)
        }
    }
}

/// Record at the 1-based ordinal among non-blank lines, trimmed.
/// The streaming path stops scanning once the target ordinal is reached.
pub(crate) fn row_at(path: &Path, access: Access, index: usize) -> io::Result<Option<String>> {
    if index == 0 {
        return Ok(None);
    }

    match access {
        Access::Eager => {
            let rows = collect_rows(path, Access::Eager)?;
            Ok(rows.into_iter().nth(index - 1))
        }
        Access::Streaming => {
            let reader = BufReader::new(File::open(path)?);
            let mut seen = 0usize;
            for line in reader.lines() {
                let line = line?;
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                seen += 1;
                if seen == index {
                    return Ok(Some(trimmed.to_string()));
                }
            }
            Ok(None)
        }
    }
}
