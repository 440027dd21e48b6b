//! # handledb
//!
//! An in-memory record store for "handle" records — a handle, a follower
//! count, a free-text comment, and a last-modified timestamp — with
//! CSV-based persistence and a line-oriented interactive shell.
//!
//! ## Core Concepts
//!
//! - **Records**: bounded handle and comment text, counters, timestamps
//! - **Store**: growable, insertion-ordered collection with positional and
//!   keyed lookup; uniqueness is the caller's concern
//! - **Codec**: a permissive, non-RFC CSV dialect whose reader tolerates
//!   the separator character inside quoted comments
//! - **Shell**: the `list`/`add`/`update`/`save`/`exit` loop driving it all
//!
//! ## Example
//!
//! ```
//! use handledb::{Record, Store};
//!
//! let mut store = Store::new();
//! store.append(Record::new("alice", 42, "early adopter"));
//! store.append(Record::new("bob", 7, "slow, steady growth"));
//!
//! assert_eq!(store.len(), 2);
//! assert_eq!(store.find("bob").map(|r| r.follower_count), Some(7));
//! assert!(store.find("carol").is_none());
//! ```

pub mod codec;
pub mod error;
pub mod shell;
pub mod store;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use store::Store;
pub use types::{BoundedText, Comment, Handle, Record, Timestamp, COMMENT_MAX, HANDLE_MAX};
