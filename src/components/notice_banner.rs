//! Transient notice banner and its auto-dismiss scheduling.

use leptos::prelude::*;

use crate::state::app::{Action, AppState};
#[cfg(feature = "csr")]
use crate::state::notice::NOTICE_DISMISS_MS;

/// Schedule the auto-dismiss for whatever notice is currently on screen.
///
/// Captures that notice's seq and dispatches a guarded
/// [`Action::NoticeExpired`] after the delay; the reducer ignores the
/// expiry if a newer notice has replaced the one this timer was armed for.
/// Call sites invoke this right after dispatching the action that showed
/// the notice.
pub fn schedule_dismiss(app: RwSignal<AppState>) {
    let Some(seq) = app.with_untracked(|s| s.notice.map(|n| n.seq)) else {
        return;
    };

    let expire = move || app.update(|s| *s = s.reduce(Action::NoticeExpired { seq }));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_DISMISS_MS)).await;
        expire();
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = expire;
    }
}

/// Fixed banner near the top of the page, visible while a notice is set.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    let text = move || {
        app.with(|s| s.notice.map(|n| n.kind.message()))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || app.with(|s| s.notice.is_some())>
            <div class="notice-banner">{text}</div>
        </Show>
    }
}
