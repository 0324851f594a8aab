//! Client-side state.
//!
//! DESIGN
//! ======
//! `exam` binds the navigator to Leptos signals; `ai` mirrors the AI helper
//! session for the panel; `ui` holds page chrome preferences.

pub mod ai;
pub mod exam;
pub mod ui;
