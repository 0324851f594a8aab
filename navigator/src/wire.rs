//! Request and response bodies exchanged with the grading server.
//!
//! The server is inconsistent about status codes, so replies are decoded from
//! the body first and the HTTP status only matters when the body is not JSON.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::answer::Answer;
use crate::api::ApiError;
use crate::paper::{PaperId, QuestionId};

pub const STATUS_SUCCESS: &str = "success";

pub const DEFAULT_SUBMIT_ANSWER_PATH: &str = "/room/submit_single_answer/";
pub const DEFAULT_COMPLETE_EXAM_PATH: &str = "/room/complete_exam/";
pub const DEFAULT_END_EXAM_PATH: &str = "/room/end_exam/";
pub const DEFAULT_ASK_AI_PATH: &str = "/room/ask_ai/";
pub const DEFAULT_EXAM_FORM_PATH: &str = "/exam/{paper_id}/";

/// Server paths for each operation. `exam_form` may contain `{paper_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub submit_answer: String,
    pub complete_exam: String,
    pub end_exam: String,
    pub ask_ai: String,
    pub exam_form: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            submit_answer: DEFAULT_SUBMIT_ANSWER_PATH.to_owned(),
            complete_exam: DEFAULT_COMPLETE_EXAM_PATH.to_owned(),
            end_exam: DEFAULT_END_EXAM_PATH.to_owned(),
            ask_ai: DEFAULT_ASK_AI_PATH.to_owned(),
            exam_form: DEFAULT_EXAM_FORM_PATH.to_owned(),
        }
    }
}

impl Endpoints {
    /// Form submission path for one paper.
    #[must_use]
    pub fn exam_form_for(&self, paper_id: &PaperId) -> String {
        self.exam_form.replace("{paper_id}", paper_id.as_str())
    }
}

/// Body of a single-answer submission. `answer` is `null` when unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub paper_id: PaperId,
    pub question_id: QuestionId,
    pub answer: Option<Answer>,
}

/// Body of the complete-exam and end-exam requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRequest {
    pub paper_id: PaperId,
}

/// Generic `{status, message?, score?}` reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl Reply {
    #[must_use]
    pub fn success() -> Self {
        Self { status: STATUS_SUCCESS.to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { status: "error".to_owned(), message: Some(message.into()), score: None }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Server message when present and non-blank, else `fallback`.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        non_blank(self.message.as_deref()).unwrap_or(fallback).to_owned()
    }
}

/// Body of an ask-AI request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiRequest {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<PaperId>,
}

/// Reply to an ask-AI request. Older server revisions report the quota as
/// `remaining_limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, alias = "remaining_limit")]
    pub remaining: Option<u32>,
}

impl AiReply {
    /// A reply is successful unless it carries an error or a non-success status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status.as_deref().is_none_or(|s| s == STATUS_SUCCESS)
    }

    /// The most specific error text the server gave, else `fallback`.
    #[must_use]
    pub fn error_or(&self, fallback: &str) -> String {
        non_blank(self.message.as_deref())
            .or_else(|| non_blank(self.error.as_deref()))
            .or_else(|| non_blank(self.response.as_deref()))
            .unwrap_or(fallback)
            .to_owned()
    }
}

/// Decode a JSON reply body.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when a non-2xx response has no decodable body,
/// and [`ApiError::Parse`] when a 2xx response body is not the expected JSON.
pub fn decode_reply<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(value),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Status { status }),
        Err(e) => Err(ApiError::Parse(e.to_string())),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
