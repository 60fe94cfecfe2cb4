//! RowStore - flat-file line-record store
//!
//! Stores opaque string records as lines of plain text files. A hierarchical
//! key like `app-users-admins` maps to a file on disk; records are addressed
//! by 1-based position in file order or by case-insensitive substring match.
//!
//! # Architecture
//!
//! ```text
//! ./data/
//! └── app/
//!     └── users/
//!         └── admins.dat    # one record per line, no blank lines,
//!                           # trailing newline after every write
//! ```
//!
//! Reads pick an access strategy from the file size: small files are loaded
//! whole, files above the configured threshold are streamed line by line.
//! Mutations always rewrite the whole file. There is no locking: two writers
//! racing on the same file interleave their read-modify-write cycles and the
//! last one wins, silently.
//!
//! # Example
//!
//! ```ignore
//! use rowstore::{Config, PageQuery, RowStore};
//!
//! let store = RowStore::new(Config::default());
//! store.create("app-users-admins", "alice")?;
//! let page = store.paginated_rows("app-users-admins", &PageQuery::default());
//! let first = store.row_at("app-users-admins", 1);
//! ```

pub mod cli;
pub mod config;
pub mod path;
mod scan;
mod store;

pub use config::Config;
pub use path::RecordPath;
pub use store::{Page, PageQuery, RowStore, StoreError};

/// Default base directory for record files
pub const DEFAULT_BASE_DIR: &str = "./data";

/// Default extension appended to the last key segment
pub const DEFAULT_FILE_EXTENSION: &str = ".dat";

/// Default byte size above which reads switch to the streaming scan
pub const DEFAULT_LARGE_FILE_LIMIT: u64 = 200_000;
