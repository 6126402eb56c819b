//! The name/email/message submission form.

use leptos::prelude::*;

use crate::components::notice_banner::schedule_dismiss;
use crate::state::app::{Action, AppState};
use crate::storage::backend::BrowserStorage;
use crate::storage::feedbacks::{FeedbackRecord, FeedbackStore};
use crate::util::time::locale_timestamp;

/// Three required fields and a submit button.
///
/// Submission is synchronous: append to the store, then adopt a fresh
/// read-back so the rendered list matches what was persisted. The `loading`
/// flag disables the button for the (zero-width) duration of the write;
/// field validation is the browser's own `required` handling, nothing more.
#[component]
pub fn FeedbackForm() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if app.with_untracked(|s| s.loading) {
            return;
        }
        app.update(|s| *s = s.reduce(Action::SubmitStarted));

        let record = FeedbackRecord {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
            timestamp: locale_timestamp(),
        };

        let store = FeedbackStore::new(BrowserStorage);
        match store.append(record) {
            Ok(()) => {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                let feedbacks = store.read_all();
                app.update(|s| *s = s.reduce(Action::SubmitSucceeded { feedbacks }));
            }
            Err(err) => {
                log::error!("feedback not persisted: {err}");
                app.update(|s| *s = s.reduce(Action::SubmitFailed));
            }
        }
        schedule_dismiss(app);
    };

    let submitting = move || app.with(|s| s.loading);

    view! {
        <form class="feedback-form" on:submit=on_submit>
            <label class="feedback-form__label">
                "Name"
                <input
                    class="feedback-form__input"
                    type="text"
                    required=true
                    placeholder="DeVen"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="feedback-form__label">
                "Email"
                <input
                    class="feedback-form__input"
                    type="email"
                    required=true
                    placeholder="dev@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="feedback-form__label">
                "Feedback"
                <textarea
                    class="feedback-form__input feedback-form__input--multiline"
                    rows="4"
                    required=true
                    placeholder="Write your feedback here..."
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button
                class="btn btn--primary feedback-form__submit"
                type="submit"
                disabled=submitting
            >
                {move || if submitting() { "Submitting..." } else { "Submit Feedback" }}
            </button>
        </form>
    }
}
