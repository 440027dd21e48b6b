//! In-memory record store.

use crate::codec;
use crate::error::{Result, StoreError};
use crate::types::Record;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Slot count for a fresh store.
const INITIAL_CAPACITY: usize = 4;

/// Growable, insertion-ordered collection of records.
///
/// The store never removes records, so positions are stable for its whole
/// life. Handle uniqueness is the caller's responsibility; `append` accepts
/// duplicates and `find` returns the first match.
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    /// Empty store with a small non-zero initial capacity.
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    // --- Record Operations ---

    /// Append a record at the end.
    ///
    /// Capacity doubles whenever the store is full. Only allocation failure
    /// can stop this, and that aborts rather than corrupting the store.
    pub fn append(&mut self, record: Record) {
        if self.records.len() == self.records.capacity() {
            self.records.reserve_exact(self.records.capacity());
        }
        self.records.push(record);
    }

    /// Record at position `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// First record whose handle matches exactly, scanning in insertion
    /// order. Comparison is byte-exact and case-sensitive.
    pub fn find(&self, handle: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.handle.as_str() == handle)
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, handle: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.handle.as_str() == handle)
    }

    /// Current record count.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    // --- Persistence ---

    /// Parse every non-empty line of `path` and append the results in file
    /// order. Returns the number of records appended. A file that cannot be
    /// opened or read leaves the store exactly as it was.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        // Parse into a scratch vector so a read error mid-file cannot leave
        // the store half-loaded.
        let mut parsed = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            parsed.push(codec::parse_line(line));
        }

        let loaded = parsed.len();
        for record in parsed {
            self.append(record);
        }

        debug!(path = %path.display(), records = loaded, "loaded store");
        Ok(loaded)
    }

    /// Write one line per record, in store order, truncating any existing
    /// file. A failure leaves the in-memory contents unchanged.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let write_err = |source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        for record in &self.records {
            writer
                .write_all(codec::format_record(record).as_bytes())
                .map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;

        debug!(path = %path.display(), records = self.records.len(), "saved store");
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(handle: &str, followers: u64) -> Record {
        Record::new(handle, followers, "")
    }

    #[test]
    fn test_starts_empty() {
        let store = Store::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(store.get(0).is_none());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = Store::new();
        for i in 0..10 {
            store.append(record(&format!("user{i}"), i));
        }

        assert_eq!(store.len(), 10);
        for i in 0..10 {
            let found = store.get(i as usize).unwrap();
            assert_eq!(found.handle.as_str(), format!("user{i}"));
            assert_eq!(found.follower_count, i);
        }
        assert!(store.get(10).is_none());
    }

    #[test]
    fn test_capacity_doubles_once_on_fifth_append() {
        let mut store = Store::new();
        assert_eq!(store.records.capacity(), INITIAL_CAPACITY);

        for i in 0..5 {
            store.append(record(&format!("user{i}"), i));
        }

        assert_eq!(store.records.capacity(), INITIAL_CAPACITY * 2);
        assert_eq!(store.len(), 5);
        for i in 0..5 {
            assert_eq!(
                store.get(i).unwrap().handle.as_str(),
                format!("user{i}")
            );
        }
    }

    #[test]
    fn test_find_exact_match() {
        let mut store = Store::new();
        store.append(record("alice", 1));
        store.append(record("bob", 2));

        assert_eq!(store.find("bob").unwrap().follower_count, 2);
        assert!(store.find("carol").is_none());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let mut store = Store::new();
        store.append(record("Alice", 1));

        assert!(store.find("alice").is_none());
        assert!(store.find("Alice").is_some());
    }

    #[test]
    fn test_find_returns_first_of_duplicates() {
        // The store doesn't police uniqueness; first insertion wins lookups.
        let mut store = Store::new();
        store.append(record("dup", 1));
        store.append(record("dup", 2));

        assert_eq!(store.find("dup").unwrap().follower_count, 1);
    }

    #[test]
    fn test_find_mut_writes_through() {
        let mut store = Store::new();
        store.append(record("alice", 1));

        store.find_mut("alice").unwrap().follower_count = 99;
        assert_eq!(store.find("alice").unwrap().follower_count, 99);
    }
}
