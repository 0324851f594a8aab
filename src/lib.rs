//! # exam-room
//!
//! Terminal host for the exam navigator. Takes an exam paper one question at
//! a time against the real grading server, ends exams for teachers, asks the
//! AI helper, and checks question drafts before upload.
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Connection settings and endpoint overrides |
//! | [`api`] | `reqwest` implementation of [`navigator::api::ExamApi`] |
//! | [`terminal`] | stdin/stdout implementation of [`navigator::surface::Surface`] |
//! | [`session`] | Interactive command loop for taking a paper |
//! | [`error`] | The binary's error type |

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod terminal;
