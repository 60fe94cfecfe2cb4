//! Core RowStore implementation

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::path::RecordPath;
use crate::scan::{self, Access};

/// Failure outcomes of store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record was blank after trimming
    #[error("record is empty")]
    InvalidInput,

    /// An equal record (trimmed, case-insensitive) already exists
    #[error("record already exists")]
    Duplicate,

    /// Missing file, out-of-range index, or unmatched term
    #[error("record not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Page request for paginated reads
#[derive(Debug, Clone)]
pub struct PageQuery {
    /// Rows per page
    pub quantity: usize,
    /// Sort ascending when true, descending otherwise
    pub asc: bool,
    /// 1-based page number
    pub page: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            quantity: 10,
            asc: true,
            page: 1,
        }
    }
}

/// One page of sorted records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Records on the requested page, in sort order
    pub rows: Vec<String>,
    /// Count of records in the whole file, unsorted and unpaginated
    pub total: usize,
}

impl Page {
    fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
        }
    }
}

/// The flat-file record store.
///
/// Maps hierarchical keys to text files under `config.base_dir` and treats
/// each non-blank line as one record. Mutations rewrite the whole file; there
/// is no locking, so concurrent writers race last-writer-wins.
pub struct RowStore {
    config: Config,
}

impl RowStore {
    /// Create a store over the given configuration. Does no I/O; directories
    /// and files materialize lazily on the first successful `create`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Add a record under `key`, creating directories and the file as needed.
    ///
    /// Rejects rows that are blank after trimming and rows that duplicate an
    /// existing line (trimmed, case-insensitive comparison). The row itself
    /// is stored exactly as given.
    pub fn create(&self, key: &str, row: &str) -> Result<(), StoreError> {
        let resolved = RecordPath::resolve(&self.config, key);
        fs::create_dir_all(&resolved.dir)?;

        if row.trim().is_empty() {
            return Err(StoreError::InvalidInput);
        }

        match fs::read_to_string(&resolved.file_path) {
            Ok(data) => {
                let candidate = row.trim().to_lowercase();
                if data.lines().any(|line| line.trim().to_lowercase() == candidate) {
                    return Err(StoreError::Duplicate);
                }
                let mut file = OpenOptions::new().append(true).open(&resolved.file_path)?;
                writeln!(file, "{}", row)?;
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::write(&resolved.file_path, format!("{}\n", row))?;
            }
            Err(err) => return Err(err.into()),
        }

        info!(key, path = %resolved.file_path.display(), "created record");
        Ok(())
    }

    /// One sorted page of records plus the file's total record count.
    ///
    /// A missing file or any I/O failure reads as an empty result, never an
    /// error, so callers see "no data" uniformly.
    pub fn paginated_rows(&self, key: &str, query: &PageQuery) -> Page {
        let resolved = RecordPath::resolve(&self.config, key);
        let path = &resolved.file_path;

        let loaded = Access::probe(path, self.config.large_file_limit)
            .and_then(|access| scan::collect_rows(path, access));

        let mut rows = match loaded {
            Ok(rows) => rows,
            Err(err) => {
                debug!(key, error = %err, "paginated read failed, returning empty page");
                return Page::empty();
            }
        };

        let total = rows.len();
        if query.asc {
            rows.sort();
        } else {
            rows.sort_by(|a, b| b.cmp(a));
        }

        let start = query.page.saturating_sub(1).saturating_mul(query.quantity);
        let rows = rows.into_iter().skip(start).take(query.quantity).collect();

        Page { rows, total }
    }

    /// Record at the 1-based `index` in file order, trimmed.
    ///
    /// Out-of-range index, missing file, and I/O failure all read as absent.
    pub fn row_at(&self, key: &str, index: usize) -> Option<String> {
        let resolved = RecordPath::resolve(&self.config, key);
        let path = &resolved.file_path;

        Access::probe(path, self.config.large_file_limit)
            .and_then(|access| scan::row_at(path, access, index))
            .ok()
            .flatten()
    }

    /// Remove the record at the 1-based `index`.
    pub fn delete_by_index(&self, key: &str, index: usize) -> Result<(), StoreError> {
        let (resolved, mut lines) = self.load_for_mutation(key)?;
        if index < 1 || index > lines.len() {
            return Err(StoreError::NotFound);
        }

        lines.remove(index - 1);
        rewrite(&resolved.file_path, &lines)?;
        info!(key, index, "deleted record by index");
        Ok(())
    }

    /// Remove the first record, in file order, containing `term`
    /// (case-insensitive).
    pub fn delete_by_term(&self, key: &str, term: &str) -> Result<(), StoreError> {
        let (resolved, mut lines) = self.load_for_mutation(key)?;
        let index = position_of_term(&lines, term).ok_or(StoreError::NotFound)?;

        lines.remove(index);
        rewrite(&resolved.file_path, &lines)?;
        info!(key, term, "deleted record by term");
        Ok(())
    }

    /// Replace the record at the 1-based `index` with `new_row`, stored as
    /// supplied without re-trimming or re-validation.
    pub fn update_by_index(&self, key: &str, index: usize, new_row: &str) -> Result<(), StoreError> {
        let (resolved, mut lines) = self.load_for_mutation(key)?;
        if index < 1 || index > lines.len() {
            return Err(StoreError::NotFound);
        }

        lines[index - 1] = new_row.to_string();
        rewrite(&resolved.file_path, &lines)?;
        info!(key, index, "updated record by index");
        Ok(())
    }

    /// Replace the first record, in file order, containing `term`
    /// (case-insensitive) with `new_row`, stored as supplied.
    pub fn update_by_term(&self, key: &str, term: &str, new_row: &str) -> Result<(), StoreError> {
        let (resolved, mut lines) = self.load_for_mutation(key)?;
        let index = position_of_term(&lines, term).ok_or(StoreError::NotFound)?;

        lines[index] = new_row.to_string();
        rewrite(&resolved.file_path, &lines)?;
        info!(key, term, "updated record by term");
        Ok(())
    }

    /// Whole-file read for delete/update. Mutations never stream, whatever
    /// the file size; only the read operations branch on it.
    ///
    /// Lines keep their original content here (no trimming) so untouched
    /// records are rewritten byte for byte.
    fn load_for_mutation(&self, key: &str) -> Result<(RecordPath, Vec<String>), StoreError> {
        let resolved = RecordPath::resolve(&self.config, key);

        let data = fs::read_to_string(&resolved.file_path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound,
            _ => StoreError::Io(err),
        })?;

        if data.trim().is_empty() {
            return Err(StoreError::NotFound);
        }

        let lines = data
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect();

        Ok((resolved, lines))
    }
}

/// First line whose lowercased content contains the lowercased term
fn position_of_term(lines: &[String], term: &str) -> Option<usize> {
    let term = term.to_lowercase();
    lines.iter().position(|line| line.to_lowercase().contains(&term))
}

/// Rewrite the whole file as the given lines plus a single trailing newline
fn rewrite(path: &Path, lines: &[String]) -> Result<(), StoreError> {
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(path, contents)?;
    Ok(())
}
