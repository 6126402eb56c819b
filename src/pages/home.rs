//! The single feedback-collection page.

use leptos::prelude::*;

use crate::components::feedback_form::FeedbackForm;
use crate::components::feedback_list::FeedbackList;
use crate::components::notice_banner::NoticeBanner;
use crate::components::theme_toggle::ThemeToggle;

/// Centered card with the title row, the form, and the submitted list.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="feedback-page">
            <NoticeBanner/>

            <main class="feedback-panel">
                <header class="feedback-panel__header">
                    <h1 class="feedback-panel__title">"Feedback Collector"</h1>
                    <ThemeToggle/>
                </header>
                <FeedbackForm/>
                <FeedbackList/>
            </main>

            <footer class="feedback-page__footer">
                "© 2025 Rosn — Feedback Collector Submission"
            </footer>
        </div>
    }
}
