//! Reveal/hide toggle, clear button, and the submitted-feedback cards.

use leptos::prelude::*;

use crate::components::notice_banner::schedule_dismiss;
use crate::state::app::{Action, AppState};
use crate::storage::backend::BrowserStorage;
use crate::storage::feedbacks::FeedbackStore;

/// The submitted-feedback section below the form.
///
/// Revealing the list re-reads the store first, so what renders is always
/// the persisted collection as of this click, even if another tab wrote in
/// between. Clearing removes the persisted key and empties the state in the
/// same handler.
#[component]
pub fn FeedbackList() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    let on_toggle = move |_| {
        app.update(|s| *s = s.reduce(Action::ListToggled));
        if app.with_untracked(|s| s.show_feedbacks) {
            let feedbacks = FeedbackStore::new(BrowserStorage).read_all();
            app.update(|s| *s = s.reduce(Action::FeedbacksLoaded(feedbacks)));
        }
    };

    let on_clear = move |_| {
        FeedbackStore::new(BrowserStorage).clear();
        app.update(|s| *s = s.reduce(Action::Cleared));
        schedule_dismiss(app);
    };

    let toggle_label = move || {
        if app.with(|s| s.show_feedbacks) {
            "Hide Submitted Feedback"
        } else {
            "View Submitted Feedback"
        }
    };

    view! {
        <div class="feedback-list">
            <div class="feedback-list__reveal">
                <button class="feedback-list__toggle" on:click=on_toggle>
                    {toggle_label}
                </button>
            </div>

            <Show when=move || app.with(|s| s.show_feedbacks)>
                <div class="feedback-list__entries">
                    <div class="feedback-list__actions">
                        <button class="btn btn--danger" on:click=on_clear>
                            "Clear All Feedback"
                        </button>
                    </div>
                    {move || {
                        let feedbacks = app.get().feedbacks;
                        if feedbacks.is_empty() {
                            return view! {
                                <p class="feedback-list__empty">"No feedback submitted yet."</p>
                            }
                                .into_any();
                        }

                        feedbacks
                            .iter()
                            .map(|fb| {
                                let name = fb.name.clone();
                                let email = fb.email.clone();
                                let message = fb.message.clone();
                                let timestamp = fb.timestamp.clone();
                                view! {
                                    <div class="feedback-card">
                                        <p class="feedback-card__author">
                                            {name} " "
                                            <span class="feedback-card__email">"(" {email} ")"</span>
                                        </p>
                                        <p class="feedback-card__message">{message}</p>
                                        <p class="feedback-card__timestamp">{timestamp}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
