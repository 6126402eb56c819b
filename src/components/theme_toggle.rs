//! Dark/light theme toggle button.

use leptos::prelude::*;

use crate::state::app::{Action, AppState};
use crate::state::theme::Theme;
use crate::storage::backend::BrowserStorage;
use crate::storage::theme::ThemeStore;

/// Emoji button next to the title: a sun while the page is dark, a moon
/// while it is light. Clicking persists the flipped preference and restyles
/// the document before the state update lands.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    let on_toggle = move |_| {
        let next = app.with_untracked(|s| s.theme).toggled();
        ThemeStore::new(BrowserStorage).set(next);
        app.update(|s| *s = s.reduce(Action::ThemeSet(next)));
    };

    let icon = move || match app.with(|s| s.theme) {
        Theme::Dark => "\u{1f31e}",
        Theme::Light => "\u{1f319}",
    };

    view! {
        <button class="theme-toggle" on:click=on_toggle title="Switch theme">
            {icon}
        </button>
    }
}
