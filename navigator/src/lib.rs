//! Question navigation and answer sequencing for the exam room.
//!
//! This crate is host-agnostic: it compiles for the browser (`client`) and
//! for the terminal (`exam-room`). It owns the per-paper navigation state,
//! answer collection, and the submit-then-advance protocol. Hosts supply two
//! seams: an [`api::ExamApi`] that talks to the grading server and a
//! [`surface::Surface`] that shows questions, notices, and confirmations.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | The [`nav::Navigator`] sequencer and its configuration |
//! | [`paper`] | Papers, questions, and the typed answer inputs |
//! | [`answer`] | Pure answer collection from a question's input |
//! | [`state`] | Per-paper navigation state and the submitting lock |
//! | [`view`] | Derived navigation controls (label, buttons) |
//! | [`bulk`] | Whole-paper answer sheet for native form submission |
//! | [`proctor`] | Teacher-side "end exam" flow |
//! | [`assistant`] | AI helper session with a server-reported quota |
//! | [`draft`] | Validation of teacher-authored question drafts |
//! | [`csrf`] | CSRF token lookup from cookies or form fields |
//! | [`wire`] | Request/response bodies and endpoint paths |
//! | [`api`] | The remote server seam |
//! | [`surface`] | The presentation seam |
//! | [`consts`] | User-facing labels and messages |

pub mod answer;
pub mod api;
pub mod assistant;
pub mod bulk;
pub mod consts;
pub mod csrf;
pub mod draft;
pub mod nav;
pub mod paper;
pub mod proctor;
pub mod state;
pub mod surface;
pub mod view;
pub mod wire;

#[cfg(test)]
mod fakes;
