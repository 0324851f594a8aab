//! User-facing labels and messages shared by every host.

// ── Navigation controls ──

pub const NEXT_LABEL: &str = "Next";
pub const FINISH_LABEL: &str = "Submit and finish";
pub const EMPTY_NEXT_LABEL: &str = "No questions";
pub const NO_QUESTIONS_MESSAGE: &str = "No questions available";
pub const INDEX_ERROR_MESSAGE: &str = "Question index is out of range, please reload the page.";

// ── Single-answer submission ──

pub const SUBMIT_FAILED_MESSAGE: &str = "Submission failed, please try again.";
pub const SUBMIT_ERROR_MESSAGE: &str = "An error occurred while submitting your answer, please try again.";
pub const CONFIRM_EMPTY_ANSWER: &str = "Answer is empty, continue?";

// ── Completion ──

pub const CONFIRM_FINISH: &str = "Submit the exam?";
pub const COMPLETE_OK_MESSAGE: &str = "Exam completed!";
pub const COMPLETE_FAILED_MESSAGE: &str = "Completing the exam failed, please try again.";
pub const COMPLETE_ERROR_MESSAGE: &str = "An error occurred while completing the exam, please try again.";
pub const FORM_MISSING_MESSAGE: &str = "The exam form could not be submitted, please reload the page.";

// ── End exam (teacher) ──

pub const CONFIRM_END_EXAM: &str = "End this exam? This cannot be undone.";
pub const END_OK_MESSAGE: &str = "Exam ended.";
pub const END_FAILED_MESSAGE: &str = "Ending the exam failed, please try again.";
pub const END_ERROR_MESSAGE: &str = "An error occurred while ending the exam, please try again.";

// ── AI helper ──

pub const AI_ASK_LABEL: &str = "Ask AI";
pub const AI_BUSY_LABEL: &str = "Working…";
pub const AI_LIMIT_LABEL: &str = "Limit reached";
pub const AI_EMPTY_PROMPT_MESSAGE: &str = "Please enter a question.";
pub const AI_NO_RESPONSE_MESSAGE: &str = "The AI returned no answer, please try again later.";
pub const AI_ERROR_MESSAGE: &str = "Could not reach the AI service, please try again later.";

// ── CSRF ──

pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";
