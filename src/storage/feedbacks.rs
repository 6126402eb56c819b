//! The persisted feedback collection.
//!
//! The whole collection lives as one JSON array under the `feedbacks` key;
//! every operation is a whole-value read or write. The store holds one
//! browser's worth of entries, submitted one at a time, so a single
//! serialized value is plenty and keeps the read-modify-write atomic on
//! the single UI thread.

#[cfg(test)]
#[path = "feedbacks_test.rs"]
mod feedbacks_test;

use serde::{Deserialize, Serialize};

use super::StorageError;
use super::backend::StorageBackend;

/// Storage key holding the serialized collection.
pub const FEEDBACKS_KEY: &str = "feedbacks";

/// One submitted feedback entry.
///
/// Field names are the persisted JSON shape:
/// `{"name", "email", "message", "timestamp"}`. Records carry no id and are
/// immutable once stored; the collection only ever grows by one or is
/// cleared entirely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Human-readable, locale-formatted submission time.
    pub timestamp: String,
}

/// Append/read/clear access to the persisted collection.
pub struct FeedbackStore<S> {
    backend: S,
}

impl<S: StorageBackend> FeedbackStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The full persisted collection, oldest first.
    ///
    /// An absent key is an empty collection; a value that fails to parse is
    /// logged and treated the same way, never surfaced as an error.
    #[must_use]
    pub fn read_all(&self) -> Vec<FeedbackRecord> {
        let Some(raw) = self.backend.read(FEEDBACKS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                log::warn!("ignoring corrupt feedback collection: {err}");
                Vec::new()
            }
        }
    }

    /// Append one record and write the whole collection back.
    ///
    /// The read side degrades like [`Self::read_all`], so appending over a
    /// corrupt value starts a fresh collection rather than failing.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`StorageError`] when the collection cannot
    /// be serialized or the browser rejects the write.
    pub fn append(&self, record: FeedbackRecord) -> Result<(), StorageError> {
        let mut records = self.read_all();
        records.push(record);
        let raw = serde_json::to_string(&records)?;
        self.backend.write(FEEDBACKS_KEY, &raw)
    }

    /// Remove the persisted collection entirely.
    pub fn clear(&self) {
        self.backend.remove(FEEDBACKS_KEY);
    }
}
