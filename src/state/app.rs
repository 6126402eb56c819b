//! Application state and its reducer.
//!
//! All UI-visible state lives in one serializable [`AppState`] owned by the
//! root component as a single `RwSignal`. Components never poke fields
//! directly; they dispatch an [`Action`] through [`AppState::reduce`], which
//! is pure so every transition can be tested without a browser. Side effects
//! (storage writes, DOM attributes, timers) stay in the component layer.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use serde::{Deserialize, Serialize};

use crate::state::notice::{Notice, NoticeKind};
use crate::state::theme::Theme;
use crate::storage::feedbacks::FeedbackRecord;

/// The whole of the page's state.
///
/// `feedbacks` always holds the persisted collection as of the last storage
/// read; writers re-read (or know the exact result, as after a clear) before
/// updating it, so the rendered list never goes stale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub theme: Theme,
    /// Gates the submit button while a write is in flight. Storage writes
    /// are synchronous, so this window is zero-width; the flag exists as a
    /// UI affordance, not a concurrency guard.
    pub loading: bool,
    pub show_feedbacks: bool,
    pub feedbacks: Vec<FeedbackRecord>,
    pub notice: Option<Notice>,
    /// Seq handed to the most recently shown notice.
    pub notice_seq: u64,
}

/// State transitions dispatched by the components.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Submit clicked; the write is about to happen.
    SubmitStarted,
    /// The record was persisted; `feedbacks` is the fresh read-back.
    SubmitSucceeded { feedbacks: Vec<FeedbackRecord> },
    /// The write was rejected (storage unavailable or full).
    SubmitFailed,
    /// A fresh read of the persisted collection (startup, list reveal).
    FeedbacksLoaded(Vec<FeedbackRecord>),
    /// The view/hide control for the submitted list was clicked.
    ListToggled,
    /// The persisted collection was removed.
    Cleared,
    ThemeSet(Theme),
    /// The dismiss timer for notice `seq` fired. Ignored unless that notice
    /// is still the one on screen, so a stale timer never clears a newer
    /// notice.
    NoticeExpired { seq: u64 },
}

impl AppState {
    /// Apply one transition, returning the next state.
    #[must_use]
    pub fn reduce(&self, action: Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::SubmitStarted => {
                next.loading = true;
            }
            Action::SubmitSucceeded { feedbacks } => {
                next.loading = false;
                next.feedbacks = feedbacks;
                next.show_notice(NoticeKind::Submitted);
            }
            Action::SubmitFailed => {
                next.loading = false;
                next.show_notice(NoticeKind::SubmitFailed);
            }
            Action::FeedbacksLoaded(feedbacks) => {
                next.feedbacks = feedbacks;
            }
            Action::ListToggled => {
                next.show_feedbacks = !next.show_feedbacks;
            }
            Action::Cleared => {
                next.feedbacks = Vec::new();
                next.show_notice(NoticeKind::Cleared);
            }
            Action::ThemeSet(theme) => {
                next.theme = theme;
            }
            Action::NoticeExpired { seq } => {
                if next.notice.map(|n| n.seq) == Some(seq) {
                    next.notice = None;
                }
            }
        }
        next
    }

    fn show_notice(&mut self, kind: NoticeKind) {
        self.notice_seq += 1;
        self.notice = Some(Notice { seq: self.notice_seq, kind });
    }
}
