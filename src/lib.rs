//! # feedback-collector
//!
//! Leptos + WASM single-page app for collecting feedback. Submitted
//! name/email/message records persist in the browser's `localStorage`, a
//! toggle reveals and clears the submitted list, and a dark/light
//! preference is persisted and mirrored onto `<html data-theme>`.
//!
//! The crate compiles natively with no features enabled (every browser
//! touch point is gated behind the `csr` feature), so the state reducer
//! and store contracts are tested on the host.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;
