use super::*;

// =============================================================
// Helpers
// =============================================================

fn record(name: &str) -> FeedbackRecord {
    FeedbackRecord {
        name: name.to_owned(),
        email: format!("{name}@example.com"),
        message: "Great tool".to_owned(),
        timestamp: "1/1/2026, 10:00:00 AM".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_dark_and_empty() {
    let state = AppState::default();
    assert_eq!(state.theme, Theme::Dark);
    assert!(!state.loading);
    assert!(!state.show_feedbacks);
    assert!(state.feedbacks.is_empty());
    assert!(state.notice.is_none());
}

// =============================================================
// Submission workflow
// =============================================================

#[test]
fn submit_started_sets_loading() {
    let state = AppState::default().reduce(Action::SubmitStarted);
    assert!(state.loading);
}

#[test]
fn submit_succeeded_clears_loading_and_adopts_read_back() {
    let state = AppState::default()
        .reduce(Action::SubmitStarted)
        .reduce(Action::SubmitSucceeded { feedbacks: vec![record("Ana")] });

    assert!(!state.loading);
    assert_eq!(state.feedbacks.len(), 1);
    assert_eq!(state.feedbacks[0].name, "Ana");
    assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Submitted));
}

#[test]
fn submit_failed_clears_loading_and_shows_error_notice() {
    let state = AppState::default()
        .reduce(Action::SubmitStarted)
        .reduce(Action::SubmitFailed);

    assert!(!state.loading);
    assert!(state.feedbacks.is_empty());
    assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::SubmitFailed));
}

#[test]
fn successive_submits_keep_prior_entries_in_order() {
    let first = vec![record("Ana")];
    let second = vec![record("Ana"), record("Ben")];

    let state = AppState::default()
        .reduce(Action::SubmitSucceeded { feedbacks: first })
        .reduce(Action::SubmitSucceeded { feedbacks: second });

    assert_eq!(state.feedbacks.len(), 2);
    assert_eq!(state.feedbacks[0].name, "Ana");
    assert_eq!(state.feedbacks[1].name, "Ben");
}

// =============================================================
// List visibility and clearing
// =============================================================

#[test]
fn list_toggle_flips_visibility() {
    let shown = AppState::default().reduce(Action::ListToggled);
    assert!(shown.show_feedbacks);
    let hidden = shown.reduce(Action::ListToggled);
    assert!(!hidden.show_feedbacks);
}

#[test]
fn feedbacks_loaded_replaces_collection() {
    let state = AppState::default()
        .reduce(Action::FeedbacksLoaded(vec![record("Ana"), record("Ben")]));
    assert_eq!(state.feedbacks.len(), 2);
}

#[test]
fn cleared_empties_collection_and_shows_notice() {
    let state = AppState::default()
        .reduce(Action::FeedbacksLoaded(vec![record("Ana")]))
        .reduce(Action::ListToggled)
        .reduce(Action::Cleared);

    assert!(state.feedbacks.is_empty());
    // The list stays revealed, showing its empty state.
    assert!(state.show_feedbacks);
    assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Cleared));
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_set_replaces_preference() {
    let state = AppState::default().reduce(Action::ThemeSet(Theme::Light));
    assert_eq!(state.theme, Theme::Light);
}

// =============================================================
// Notice lifecycle
// =============================================================

#[test]
fn notice_seq_increases_per_notice() {
    let state = AppState::default()
        .reduce(Action::SubmitSucceeded { feedbacks: vec![] })
        .reduce(Action::Cleared);
    assert_eq!(state.notice.map(|n| n.seq), Some(2));
}

#[test]
fn matching_expiry_clears_the_notice() {
    let state = AppState::default().reduce(Action::SubmitSucceeded { feedbacks: vec![] });
    let seq = state.notice.map(|n| n.seq).unwrap_or_default();

    let state = state.reduce(Action::NoticeExpired { seq });
    assert!(state.notice.is_none());
}

#[test]
fn stale_expiry_does_not_clear_a_newer_notice() {
    // First notice goes up, then a second replaces it before the first
    // notice's timer fires.
    let state = AppState::default().reduce(Action::SubmitSucceeded { feedbacks: vec![] });
    let stale_seq = state.notice.map(|n| n.seq).unwrap_or_default();

    let state = state.reduce(Action::Cleared);
    let state = state.reduce(Action::NoticeExpired { seq: stale_seq });

    assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Cleared));
}

#[test]
fn expiry_with_no_notice_is_a_no_op() {
    let state = AppState::default().reduce(Action::NoticeExpired { seq: 7 });
    assert_eq!(state, AppState::default());
}

// =============================================================
// Whole submission walk, store and reducer together
// =============================================================

#[test]
fn submitting_ana_appends_one_record_and_notifies() {
    use crate::storage::backend::MemoryStorage;
    use crate::storage::feedbacks::FeedbackStore;

    let storage = MemoryStorage::new();
    let store = FeedbackStore::new(&storage);
    assert!(store.append(record("Ben")).is_ok());

    // What the form handler does on submit.
    let state = AppState::default().reduce(Action::SubmitStarted);
    assert!(state.loading);

    let submitted = FeedbackRecord {
        name: "Ana".to_owned(),
        email: "ana@x.com".to_owned(),
        message: "Great tool".to_owned(),
        timestamp: "4/5/2025, 9:12:01 PM".to_owned(),
    };
    assert!(store.append(submitted.clone()).is_ok());
    let state = state.reduce(Action::SubmitSucceeded { feedbacks: store.read_all() });

    assert!(!state.loading);
    assert_eq!(state.feedbacks.len(), 2);
    assert_eq!(state.feedbacks[1], submitted);
    assert!(!state.feedbacks[1].timestamp.is_empty());
    assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Submitted));

    // The dismiss timer fires and takes the banner down.
    let seq = state.notice.map(|n| n.seq).unwrap_or_default();
    let state = state.reduce(Action::NoticeExpired { seq });
    assert!(state.notice.is_none());
}

// =============================================================
// Serializability
// =============================================================

#[test]
fn app_state_round_trips_through_json() {
    let state = AppState::default()
        .reduce(Action::ThemeSet(Theme::Light))
        .reduce(Action::SubmitSucceeded { feedbacks: vec![record("Ana")] })
        .reduce(Action::ListToggled);

    let encoded = serde_json::to_string(&state).ok();
    let decoded = encoded.and_then(|raw| serde_json::from_str::<AppState>(&raw).ok());
    assert_eq!(decoded, Some(state));
}
