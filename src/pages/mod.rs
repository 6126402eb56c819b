//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! One page; it owns the layout and delegates rendering details to
//! `components`.

pub mod home;
