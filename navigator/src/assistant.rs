//! AI helper session with a per-paper question quota.
//!
//! The quota is owned by the server. The session only mirrors the last
//! `remaining` value the server reported, on successful and failed replies
//! alike, and never decrements it locally.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use tracing::{debug, warn};

use crate::api::{ApiError, ExamApi};
use crate::consts::{AI_ASK_LABEL, AI_BUSY_LABEL, AI_ERROR_MESSAGE, AI_LIMIT_LABEL, AI_NO_RESPONSE_MESSAGE};
use crate::paper::PaperId;
use crate::wire::AiRequest;

#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("AI question limit reached")]
    QuotaExhausted,

    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Transport(#[from] ApiError),
}

impl AskError {
    /// Text to show in the response area.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyPrompt => crate::consts::AI_EMPTY_PROMPT_MESSAGE.to_owned(),
            Self::QuotaExhausted => AI_LIMIT_LABEL.to_owned(),
            Self::Rejected(message) => message.clone(),
            Self::Transport(_) => AI_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// State of the ask button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiControl {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiSession {
    paper_id: Option<PaperId>,
    remaining: Option<u32>,
}

impl AiSession {
    /// `remaining` is the page's initial quota, when it renders one.
    #[must_use]
    pub fn new(paper_id: Option<PaperId>, remaining: Option<u32>) -> Self {
        Self { paper_id, remaining }
    }

    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    #[must_use]
    pub fn control(&self, busy: bool) -> AiControl {
        if self.is_exhausted() {
            AiControl { enabled: false, label: AI_LIMIT_LABEL }
        } else if busy {
            AiControl { enabled: false, label: AI_BUSY_LABEL }
        } else {
            AiControl { enabled: true, label: AI_ASK_LABEL }
        }
    }

    /// Ask `prompt` and return the helper's answer.
    ///
    /// # Errors
    ///
    /// Blank prompts and an exhausted quota fail without a request. Server
    /// errors come back as [`AskError::Rejected`] with the server's text.
    pub async fn ask<A: ExamApi + ?Sized>(&mut self, api: &A, prompt: &str) -> Result<String, AskError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AskError::EmptyPrompt);
        }
        if self.is_exhausted() {
            return Err(AskError::QuotaExhausted);
        }

        let request = AiRequest { question: prompt.to_owned(), paper_id: self.paper_id.clone() };
        let reply = api.ask_ai(&request).await.inspect_err(|e| warn!(error = %e, "ask AI failed"))?;
        if let Some(remaining) = reply.remaining {
            self.remaining = Some(remaining);
        }

        if !reply.is_success() {
            let message = reply.error_or(AI_ERROR_MESSAGE);
            warn!(%message, remaining = ?self.remaining, "ask AI rejected");
            return Err(AskError::Rejected(message));
        }
        debug!(remaining = ?self.remaining, "ask AI answered");
        Ok(reply
            .response
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| AI_NO_RESPONSE_MESSAGE.to_owned()))
    }
}
