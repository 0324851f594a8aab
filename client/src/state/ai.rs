#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use navigator::assistant::{AiControl, AiSession, AskError};

/// What the AI panel renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiState {
    pub control: AiControl,
    pub remaining: Option<u32>,
    /// Last answer (markdown) or error text.
    pub response: Option<AiResponse>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AiResponse {
    Answer(String),
    Error(String),
}

impl AiState {
    pub fn from_session(session: &AiSession, busy: bool) -> Self {
        Self { control: session.control(busy), remaining: session.remaining(), response: None }
    }

    #[must_use]
    pub fn with_result(mut self, result: Result<String, AskError>) -> Self {
        self.response = Some(match result {
            Ok(answer) => AiResponse::Answer(answer),
            Err(e) => AiResponse::Error(e.user_message()),
        });
        self
    }
}
