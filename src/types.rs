//! Core types for the handle store.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Deref;
use std::time::{SystemTime, UNIX_EPOCH};

/// Usable bytes in a record handle.
pub const HANDLE_MAX: usize = 31;

/// Usable bytes in a record comment.
pub const COMMENT_MAX: usize = 63;

/// Owned text clipped to `MAX` bytes on construction.
///
/// Oversized input is truncated silently rather than rejected, backing off
/// to the nearest UTF-8 character boundary. Truncation is the contract, so
/// callers that care about the bound must check before constructing.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BoundedText<const MAX: usize>(String);

impl<const MAX: usize> BoundedText<MAX> {
    /// Build from arbitrary text, clipping to the byte bound.
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        if text.len() <= MAX {
            return Self(text.to_owned());
        }
        let mut cut = MAX;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        Self(text[..cut].to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const MAX: usize> Deref for BoundedText<MAX> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl<const MAX: usize> AsRef<str> for BoundedText<MAX> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const MAX: usize> From<&str> for BoundedText<MAX> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<const MAX: usize> PartialEq<&str> for BoundedText<MAX> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<const MAX: usize> fmt::Debug for BoundedText<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<const MAX: usize> fmt::Display for BoundedText<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Derived Deserialize would bypass the byte bound; route through `new`.
impl<'de, const MAX: usize> Deserialize<'de> for BoundedText<MAX> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Self::new(text))
    }
}

/// A record's short unique identifier.
pub type Handle = BoundedText<HANDLE_MAX>;

/// A record's free-text comment. May contain the CSV field separator.
pub type Comment = BoundedText<COMMENT_MAX>;

/// Seconds since the Unix epoch.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        Timestamp(duration.as_secs())
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single record in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Short identifier. Uniqueness is the caller's job, not the store's.
    pub handle: Handle,

    /// Follower counter.
    pub follower_count: u64,

    /// Free text; may contain commas, which the codec tolerates.
    pub comment: Comment,

    /// Stamped by mutating operations, never user-supplied directly.
    pub date_last_modified: Timestamp,
}

impl Record {
    /// Build a record stamped with the current time.
    pub fn new(handle: impl AsRef<str>, follower_count: u64, comment: impl AsRef<str>) -> Self {
        Self {
            handle: Handle::new(handle),
            follower_count,
            comment: Comment::new(comment),
            date_last_modified: Timestamp::now(),
        }
    }
}
