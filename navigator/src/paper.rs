//! Paper model: exam papers, their questions, and each question's input.
//!
//! A paper arrives from the server already rendered (embedded JSON in the
//! browser, a file for the terminal host) and is read-only to the navigator.
//! The only mutable part is a question's [`AnswerInput`], which the host
//! updates as the student clicks or types. The input's shape is fixed when the
//! question is rendered and never changes afterwards.

#[cfg(test)]
#[path = "paper_test.rs"]
mod paper_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque identifier of an exam paper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaperId(String);

impl PaperId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of a question within a paper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The answer-input type of a question, using the server's type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionShape {
    #[serde(rename = "sc")]
    SingleChoice,
    #[serde(rename = "mcq")]
    MultipleChoice,
    #[serde(rename = "sa")]
    ShortText,
    #[serde(rename = "tf")]
    TrueFalse,
}

impl QuestionShape {
    /// The server's short type code (`sc`, `mcq`, `sa`, `tf`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::SingleChoice => "sc",
            Self::MultipleChoice => "mcq",
            Self::ShortText => "sa",
            Self::TrueFalse => "tf",
        }
    }

    /// Whether the question is answered by picking from listed options.
    #[must_use]
    pub fn is_choice(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultipleChoice)
    }
}

impl FromStr for QuestionShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sc" => Ok(Self::SingleChoice),
            "mcq" => Ok(Self::MultipleChoice),
            "sa" => Ok(Self::ShortText),
            "tf" => Ok(Self::TrueFalse),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// One selectable option. On the wire either a bare string (value and label
/// are the same) or `{ "value": ..., "label": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ChoiceRepr")]
pub struct Choice {
    /// Submitted to the server when the option is picked.
    pub value: String,
    /// Shown to the student.
    pub label: String,
}

impl Choice {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

impl From<&str> for Choice {
    fn from(text: &str) -> Self {
        Self::new(text, text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChoiceRepr {
    Plain(String),
    Full { value: String, label: Option<String> },
}

impl From<ChoiceRepr> for Choice {
    fn from(repr: ChoiceRepr) -> Self {
        match repr {
            ChoiceRepr::Plain(text) => Self { value: text.clone(), label: text },
            ChoiceRepr::Full { value, label } => {
                let label = label.unwrap_or_else(|| value.clone());
                Self { value, label }
            }
        }
    }
}

/// A question's input controls and the student's current entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnswerInput {
    /// Radio group; at most one option selected.
    #[serde(rename = "sc")]
    SingleChoice {
        options: Vec<Choice>,
        #[serde(default)]
        selected: Option<usize>,
    },
    /// Checkbox group. `checked` runs parallel to `options` and may be shorter.
    #[serde(rename = "mcq")]
    MultipleChoice {
        options: Vec<Choice>,
        #[serde(default)]
        checked: Vec<bool>,
    },
    /// Free text; `multiline` renders a text area instead of a one-line field.
    #[serde(rename = "sa")]
    ShortText {
        #[serde(default)]
        text: String,
        #[serde(default)]
        multiline: bool,
    },
    /// True/false radio pair.
    #[serde(rename = "tf")]
    TrueFalse {
        #[serde(default)]
        selected: Option<bool>,
    },
}

impl AnswerInput {
    #[must_use]
    pub fn single_choice<C: Into<Choice>>(options: impl IntoIterator<Item = C>) -> Self {
        Self::SingleChoice { options: options.into_iter().map(Into::into).collect(), selected: None }
    }

    #[must_use]
    pub fn multiple_choice<C: Into<Choice>>(options: impl IntoIterator<Item = C>) -> Self {
        Self::MultipleChoice { options: options.into_iter().map(Into::into).collect(), checked: Vec::new() }
    }

    #[must_use]
    pub fn short_text(multiline: bool) -> Self {
        Self::ShortText { text: String::new(), multiline }
    }

    #[must_use]
    pub fn true_false() -> Self {
        Self::TrueFalse { selected: None }
    }

    #[must_use]
    pub fn shape(&self) -> QuestionShape {
        match self {
            Self::SingleChoice { .. } => QuestionShape::SingleChoice,
            Self::MultipleChoice { .. } => QuestionShape::MultipleChoice,
            Self::ShortText { .. } => QuestionShape::ShortText,
            Self::TrueFalse { .. } => QuestionShape::TrueFalse,
        }
    }

    /// Listed options for choice questions; empty for the other shapes.
    #[must_use]
    pub fn options(&self) -> &[Choice] {
        match self {
            Self::SingleChoice { options, .. } | Self::MultipleChoice { options, .. } => options,
            Self::ShortText { .. } | Self::TrueFalse { .. } => &[],
        }
    }

    /// Whether option `index` is currently selected or checked.
    #[must_use]
    pub fn is_marked(&self, index: usize) -> bool {
        match self {
            Self::SingleChoice { selected, .. } => *selected == Some(index),
            Self::MultipleChoice { checked, .. } => checked.get(index).copied().unwrap_or(false),
            Self::ShortText { .. } | Self::TrueFalse { .. } => false,
        }
    }

    /// Select radio option `index`. Returns `false` on a different shape or an
    /// out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        match self {
            Self::SingleChoice { options, selected } if index < options.len() => {
                *selected = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Flip checkbox `index`. Returns `false` on a different shape or an
    /// out-of-range index.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self {
            Self::MultipleChoice { options, checked } if index < options.len() => {
                if checked.len() < options.len() {
                    checked.resize(options.len(), false);
                }
                checked[index] = !checked[index];
                true
            }
            _ => false,
        }
    }

    /// Replace the free text of a short-text question.
    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        match self {
            Self::ShortText { text, .. } => {
                *text = value.into();
                true
            }
            _ => false,
        }
    }

    /// Pick true or false on a true/false question.
    pub fn set_truth(&mut self, value: bool) -> bool {
        match self {
            Self::TrueFalse { selected } => {
                *selected = Some(value);
                true
            }
            _ => false,
        }
    }

    /// Reset the student's entry without touching the options.
    pub fn clear(&mut self) {
        match self {
            Self::SingleChoice { selected, .. } => *selected = None,
            Self::MultipleChoice { checked, .. } => checked.clear(),
            Self::ShortText { text, .. } => text.clear(),
            Self::TrueFalse { selected } => *selected = None,
        }
    }
}

/// A single question as rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(default)]
    pub prompt: String,
    pub input: AnswerInput,
}

impl Question {
    #[must_use]
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, input: AnswerInput) -> Self {
        Self { id: QuestionId::new(id), prompt: prompt.into(), input }
    }
}

/// One exam instance attempted by a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamPaper {
    pub id: PaperId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl ExamPaper {
    #[must_use]
    pub fn new(id: impl Into<String>, questions: Vec<Question>) -> Self {
        Self { id: PaperId::new(id), title: String::new(), questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn question_mut(&mut self, index: usize) -> Option<&mut Question> {
        self.questions.get_mut(index)
    }

    /// Position of the question with `id`, if it belongs to this paper.
    #[must_use]
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }
}
