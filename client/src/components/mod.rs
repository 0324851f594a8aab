//! Exam page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from the exam signals and route every action through
//! the shared `ExamController`; none of them talk to the server directly.

pub mod ai_panel;
pub mod end_exam_button;
pub mod nav_bar;
pub mod question_card;
pub mod theme_toggle;
