//! Browser utilities with native no-op fallbacks.

pub mod csrf;
pub mod dark_mode;
