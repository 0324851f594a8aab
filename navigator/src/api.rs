//! The remote grading server, as seen by the navigator.
//!
//! Declared `?Send` so the browser host can implement it with `gloo-net`
//! futures, which are not `Send`. The terminal host's `reqwest` futures fit
//! either way.

use async_trait::async_trait;

use crate::paper::PaperId;
use crate::wire::{AiReply, AiRequest, AnswerSubmission, Reply};

/// Transport-level failure: the request never produced a usable reply.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status and no JSON body.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// The reply body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Parse(String),
}

#[async_trait(?Send)]
pub trait ExamApi {
    /// `POST` one question's answer.
    async fn submit_answer(&self, submission: &AnswerSubmission) -> Result<Reply, ApiError>;

    /// `POST` the whole paper as finished.
    async fn complete_exam(&self, paper_id: &PaperId) -> Result<Reply, ApiError>;

    /// `POST` a teacher's request to close the exam for everyone.
    async fn end_exam(&self, paper_id: &PaperId) -> Result<Reply, ApiError>;

    /// `POST` a question to the AI helper.
    async fn ask_ai(&self, request: &AiRequest) -> Result<AiReply, ApiError>;
}
