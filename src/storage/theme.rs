//! Theme preference persistence and application.
//!
//! Reads the preference from storage and mirrors it onto the `<html>`
//! element as a `data-theme` attribute; the stylesheet keys all colors off
//! that attribute. Setting a theme persists it and restyles the document in
//! the same call. Requires a browser for the attribute half; persistence
//! goes through the storage seam so it tests natively.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::backend::StorageBackend;
use crate::state::theme::Theme;

/// Storage key holding the preference string.
pub const THEME_KEY: &str = "theme";

/// Get/set access to the persisted theme preference.
pub struct ThemeStore<S> {
    backend: S,
}

impl<S: StorageBackend> ThemeStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The persisted preference, defaulting to dark when absent or not a
    /// recognized value.
    #[must_use]
    pub fn get(&self) -> Theme {
        match self.backend.read(THEME_KEY) {
            None => Theme::default(),
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("ignoring unknown theme preference {raw:?}");
                Theme::default()
            }),
        }
    }

    /// Persist `theme` and apply it to the document synchronously.
    ///
    /// Persistence is best-effort: a rejected write is logged and the
    /// document is restyled anyway, so the visible theme never lags the
    /// user's click.
    pub fn set(&self, theme: Theme) {
        if let Err(err) = self.backend.write(THEME_KEY, theme.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
        apply(theme);
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
