//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! One serializable [`app::AppState`] holds everything the page renders,
//! and every mutation goes through the pure [`app::AppState::reduce`]
//! transition so state logic stays testable without a browser.

pub mod app;
pub mod notice;
pub mod theme;
