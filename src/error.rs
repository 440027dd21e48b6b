//! Error types for the handle store.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for store operations.
///
/// Absent lookups are not errors; `Store::get` and `Store::find` return
/// `Option` instead. Everything here is an I/O failure with the path it
/// happened on, surfaced once and left for the caller to report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open {}: {}", .path.display(), .source)]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
