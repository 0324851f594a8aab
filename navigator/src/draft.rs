//! Validation of a teacher's question draft before it is posted.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

use crate::paper::QuestionShape;

/// Text the rich-text editor shows before anything is typed.
pub const PROMPT_PLACEHOLDER: &str = "Enter the question text";
pub const MAX_POINTS: i64 = 100;
pub const MIN_AI_LIMIT: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("please enter the question text")]
    MissingPrompt,

    #[error("please enter at least one option")]
    MissingOptions,

    #[error("please choose exactly one correct answer")]
    SingleAnswerRequired,

    #[error("please choose at least one correct answer")]
    MissingCorrectAnswers,

    #[error("correct answer {0} does not name a filled-in option")]
    CorrectOutOfRange(usize),

    #[error("please choose true or false as the correct answer")]
    MissingTruthAnswer,

    #[error("points must be between 0 and {max}, got {0}", max = MAX_POINTS)]
    PointsOutOfRange(i64),

    #[error("AI question limit must be at least {min}, got {0}", min = MIN_AI_LIMIT)]
    AiLimitTooLow(i64),
}

/// The authoring form's fields. `correct` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question_type")]
    pub shape: QuestionShape,
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct: Vec<usize>,
    #[serde(default)]
    pub truth: Option<bool>,
    #[serde(default = "default_points")]
    pub points: i64,
    #[serde(default = "default_ai_limit")]
    pub ai_limit: i64,
}

fn default_points() -> i64 {
    10
}

fn default_ai_limit() -> i64 {
    MIN_AI_LIMIT
}

impl QuestionDraft {
    /// Check the draft, reporting the first problem found.
    ///
    /// # Errors
    ///
    /// Returns the first [`DraftError`] in form order.
    pub fn validate(&self) -> Result<(), DraftError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() || prompt == PROMPT_PLACEHOLDER {
            return Err(DraftError::MissingPrompt);
        }

        match self.shape {
            QuestionShape::SingleChoice | QuestionShape::MultipleChoice => self.validate_choices()?,
            QuestionShape::TrueFalse if self.truth.is_none() => return Err(DraftError::MissingTruthAnswer),
            QuestionShape::TrueFalse | QuestionShape::ShortText => {}
        }

        if !(0..=MAX_POINTS).contains(&self.points) {
            return Err(DraftError::PointsOutOfRange(self.points));
        }
        if self.ai_limit < MIN_AI_LIMIT {
            return Err(DraftError::AiLimitTooLow(self.ai_limit));
        }
        Ok(())
    }

    fn validate_choices(&self) -> Result<(), DraftError> {
        let filled = |i: usize| self.options.get(i).is_some_and(|o| !o.trim().is_empty());
        if !(0..self.options.len()).any(filled) {
            return Err(DraftError::MissingOptions);
        }
        match (self.shape, self.correct.len()) {
            (QuestionShape::SingleChoice, 1) | (QuestionShape::MultipleChoice, 1..) => {}
            (QuestionShape::SingleChoice, _) => return Err(DraftError::SingleAnswerRequired),
            _ => return Err(DraftError::MissingCorrectAnswers),
        }
        if let Some(&bad) = self.correct.iter().find(|&&i| !filled(i)) {
            return Err(DraftError::CorrectOutOfRange(bad));
        }
        Ok(())
    }
}
