//! Transient user-facing notices.
//!
//! A notice is shown after a submit or clear and dismissed automatically
//! after [`NOTICE_DISMISS_MS`]. Each notice carries a sequence number so a
//! dismissal scheduled for an earlier notice never clears a later one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use serde::{Deserialize, Serialize};

/// How long a notice stays visible before auto-dismissing, in milliseconds.
pub const NOTICE_DISMISS_MS: u64 = 3000;

/// A transient banner message currently on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Monotonically increasing per app session; guards stale dismissals.
    pub seq: u64,
    pub kind: NoticeKind,
}

/// The fixed set of notices the app can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Submitted,
    SubmitFailed,
    Cleared,
}

impl NoticeKind {
    /// Banner text shown to the user.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Submitted => "Feedback submitted successfully",
            Self::SubmitFailed => "Error submitting feedback",
            Self::Cleared => "Feedback cleared successfully",
        }
    }
}
