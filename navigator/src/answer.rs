//! Answer collection: the student's entry for one question, as sent to the server.
//!
//! Collection is a pure function of the question's [`AnswerInput`]. Checked
//! boxes come back in option order, a selected radio as its value, free text
//! trimmed. Anything left blank collects as `None` (sent as JSON `null`).

#[cfg(test)]
#[path = "answer_test.rs"]
mod answer_test;

use serde::{Deserialize, Serialize};

use crate::paper::{AnswerInput, Question};

/// Value submitted for a true/false question answered "true".
pub const TRUE_VALUE: &str = "True";
/// Value submitted for a true/false question answered "false".
pub const FALSE_VALUE: &str = "False";

/// A collected answer: a single string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    /// Human-readable rendering, multiple values joined with `", "`.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Multiple(values) => values.join(", "),
        }
    }
}

#[must_use]
pub fn truth_value(value: bool) -> &'static str {
    if value { TRUE_VALUE } else { FALSE_VALUE }
}

/// Collect the current answer of `question`, or `None` when nothing is filled in.
#[must_use]
pub fn collect_answer(question: &Question) -> Option<Answer> {
    match &question.input {
        AnswerInput::MultipleChoice { options, checked } => {
            let values: Vec<String> = options
                .iter()
                .zip(checked.iter())
                .filter(|(_, on)| **on)
                .map(|(choice, _)| choice.value.clone())
                .collect();
            (!values.is_empty()).then_some(Answer::Multiple(values))
        }
        AnswerInput::SingleChoice { options, selected } => selected
            .and_then(|index| options.get(index))
            .map(|choice| Answer::Single(choice.value.clone())),
        AnswerInput::TrueFalse { selected } => selected.map(|value| Answer::Single(truth_value(value).to_owned())),
        AnswerInput::ShortText { text, .. } => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| Answer::Single(trimmed.to_owned()))
        }
    }
}
