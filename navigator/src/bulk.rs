//! Whole-paper answer sheet for native form submission.
//!
//! The sheet is a JSON object of question id to answer, in paper order,
//! written into the form's hidden `answers` field. Unanswered questions are
//! left out.

#[cfg(test)]
#[path = "bulk_test.rs"]
mod bulk_test;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::answer::{Answer, collect_answer};
use crate::consts::CONFIRM_FINISH;
use crate::paper::{ExamPaper, QuestionId};
use crate::surface::Surface;

/// Ordered question id → answer mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    entries: Vec<(QuestionId, Answer)>,
}

impl AnswerSheet {
    /// Collect every answered question of `paper`.
    #[must_use]
    pub fn collect(paper: &ExamPaper) -> Self {
        let entries = paper
            .questions
            .iter()
            .filter_map(|q| collect_answer(q).map(|answer| (q.id.clone(), answer)))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&Answer> {
        self.entries.iter().find(|(q, _)| q == id).map(|(_, a)| a)
    }

    /// Serialize for the hidden `answers` field.
    ///
    /// # Errors
    ///
    /// Returns a serialization error from `serde_json`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for AnswerSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, answer) in &self.entries {
            map.serialize_entry(id, answer)?;
        }
        map.end()
    }
}

/// Gather every answer, serialize it, and ask the student to confirm.
///
/// Returns the serialized sheet when the submission should proceed, `None`
/// when the student declines.
///
/// # Errors
///
/// Returns a serialization error from `serde_json`.
pub fn confirm_bulk_submit<S: Surface + ?Sized>(
    paper: &ExamPaper,
    surface: &S,
) -> Result<Option<String>, serde_json::Error> {
    let sheet = AnswerSheet::collect(paper);
    let json = sheet.to_json()?;
    if !surface.confirm(CONFIRM_FINISH) {
        debug!(paper_id = %paper.id, "bulk submit declined");
        return Ok(None);
    }
    debug!(paper_id = %paper.id, answered = sheet.len(), "bulk submit confirmed");
    Ok(Some(json))
}
