//! Persistence over the browser's origin-scoped key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two stores share one [`backend::StorageBackend`] seam: the feedback
//! collection (whole-value JSON under the `feedbacks` key) and the theme
//! preference (a bare string under the `theme` key). Reads degrade rather
//! than fail: a missing or corrupt value becomes the empty collection or
//! the default theme, with a log line instead of an error. Only writes can
//! fail, and the error never escapes the UI as anything but a transient
//! banner.

pub mod backend;
pub mod feedbacks;
pub mod theme;

/// Error writing to persistent storage.
///
/// Reads never produce one of these; only the write path surfaces them.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No `window` or `localStorage` in this environment.
    #[error("browser storage is not available")]
    Unavailable,
    /// The value could not be serialized to JSON.
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
    /// The browser rejected the write (storage full or access denied).
    #[error("storage write rejected: {0}")]
    Write(String),
}
