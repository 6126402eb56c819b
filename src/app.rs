//! Root application component and startup effects.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::app::{Action, AppState};
use crate::storage::backend::BrowserStorage;
use crate::storage::feedbacks::FeedbackStore;
use crate::storage::theme::{self, ThemeStore};

/// Root component.
///
/// Owns the one [`AppState`] signal, provides it as context, and restores
/// persisted data on startup. Neither effect reads a signal, so both run
/// exactly once after mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app = RwSignal::new(AppState::default());
    provide_context(app);

    // Restore the theme preference and restyle the document.
    Effect::new(move || {
        let restored = ThemeStore::new(BrowserStorage).get();
        theme::apply(restored);
        app.update(|s| *s = s.reduce(Action::ThemeSet(restored)));
    });

    // Load whatever collection an earlier visit persisted.
    Effect::new(move || {
        let feedbacks = FeedbackStore::new(BrowserStorage).read_all();
        app.update(|s| *s = s.reduce(Action::FeedbacksLoaded(feedbacks)));
    });

    view! {
        <Title text="Feedback Collector"/>
        <HomePage/>
    }
}
