//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared [`crate::state::app::AppState`] from context
//! and dispatch reducer actions; storage access and dismiss timers happen
//! here, never inside the reducer.

pub mod feedback_form;
pub mod feedback_list;
pub mod notice_banner;
pub mod theme_toggle;
