//! Networking: the browser's [`navigator::api::ExamApi`] implementation.

pub mod api;
