//! The exam navigator: one question at a time, submit before advancing.
//!
//! DESIGN
//! ======
//! `Navigator` owns the two host seams and the configuration; the per-paper
//! [`NavigationState`] is owned by the host and passed in on every call. All
//! failures are recovered locally: they are logged, shown to the student
//! through [`Surface::notify`], and returned so the host can ignore them.
//! The student always stays on the current question after a failure, so no
//! answer is silently skipped.
//!
//! ```text
//!   advance ──▶ collect ──▶ submit answer ──ok──▶ not last: switch_to(next)
//!                  │              │                last:     confirm ─▶ complete ─▶ reload
//!            empty? confirm     error ──▶ notify, stay
//! ```

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use tracing::{debug, error, info, warn};

use crate::answer::{Answer, collect_answer};
use crate::api::{ApiError, ExamApi};
use crate::bulk::{AnswerSheet, confirm_bulk_submit};
use crate::consts::{
    COMPLETE_ERROR_MESSAGE, COMPLETE_FAILED_MESSAGE, COMPLETE_OK_MESSAGE, CONFIRM_EMPTY_ANSWER, CONFIRM_FINISH,
    FORM_MISSING_MESSAGE, INDEX_ERROR_MESSAGE, NO_QUESTIONS_MESSAGE, SUBMIT_ERROR_MESSAGE, SUBMIT_FAILED_MESSAGE,
};
use crate::paper::{ExamPaper, PaperId, Question};
use crate::state::{NavigationState, SubmitGuard, SubmitLock};
use crate::surface::Surface;
use crate::view::NavView;
use crate::wire::AnswerSubmission;

/// How the last question hands in the whole paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionMode {
    /// `POST` to the complete-exam endpoint, then reload.
    #[default]
    CompleteRequest,
    /// Let the native form submission carry the whole answer sheet.
    FormSubmit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorConfig {
    pub completion: CompletionMode,
    /// Ask before submitting a question left blank.
    pub confirm_empty_answer: bool,
    /// Ask before handing in the paper from the last question.
    pub confirm_completion: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self { completion: CompletionMode::CompleteRequest, confirm_empty_answer: true, confirm_completion: true }
    }
}

/// Outcome of a successful [`Navigator::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Moved(usize),
    /// The paper was handed in; navigation is frozen.
    Completed,
    /// The student declined a confirmation; nothing changed.
    Stayed,
}

#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("no questions found for paper {0}")]
    NoQuestions(PaperId),

    #[error("invalid question index {index} for a paper of {total}")]
    InvalidIndex { index: usize, total: usize },

    #[error("exam already completed")]
    Completed,

    #[error("a submission is already in flight")]
    Busy,

    #[error("server rejected the request: {0}")]
    Rejected(String),

    #[error(transparent)]
    Transport(#[from] ApiError),

    #[error("answer sheet encode failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("exam form for paper {0} could not be submitted")]
    FormUnavailable(PaperId),
}

pub struct Navigator<A, S> {
    api: A,
    surface: S,
    config: NavigatorConfig,
}

impl<A: ExamApi, S: Surface> Navigator<A, S> {
    #[must_use]
    pub fn new(api: A, surface: S) -> Self {
        Self::with_config(api, surface, NavigatorConfig::default())
    }

    #[must_use]
    pub fn with_config(api: A, surface: S, config: NavigatorConfig) -> Self {
        Self { api, surface, config }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn config(&self) -> NavigatorConfig {
        self.config
    }

    /// Build the state for `paper` and show its first question.
    ///
    /// A paper with no questions gets an empty state and a disabled view.
    pub fn initialize(&self, paper: &ExamPaper) -> NavigationState {
        let state = NavigationState::new(paper.len());
        if state.is_empty() {
            error!(paper_id = %paper.id, "no questions found for paper");
            self.surface.show_question(None);
        } else {
            self.surface.show_question(Some(0));
            debug!(paper_id = %paper.id, total = paper.len(), "navigator initialized");
        }
        self.surface.render_nav(&NavView::of(&state));
        state
    }

    /// Show only the question at `index`.
    ///
    /// # Errors
    ///
    /// Fails without touching `state` when the paper is empty, `index` is out
    /// of range, or the paper was already handed in.
    pub fn switch_to(&self, paper: &ExamPaper, state: &mut NavigationState, index: usize) -> Result<(), NavError> {
        if state.is_completed() {
            warn!(paper_id = %paper.id, index, "switch after completion ignored");
            return Err(NavError::Completed);
        }
        let total = state.total();
        if total == 0 {
            error!(paper_id = %paper.id, "no questions found for paper");
            return Err(NavError::NoQuestions(paper.id.clone()));
        }
        if index >= total || index >= paper.len() {
            error!(paper_id = %paper.id, index, total, "invalid question index");
            return Err(NavError::InvalidIndex { index, total });
        }

        self.surface.show_question(Some(index));
        state.set_current(index);
        self.surface.render_nav(&NavView::of(state));
        Ok(())
    }

    /// Submit the visible question's answer.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Busy`] if a request is in flight, and
    /// [`NavError::Rejected`] or [`NavError::Transport`] after notifying the
    /// student of the failure.
    pub async fn submit_current_answer(&self, paper: &ExamPaper, state: &NavigationState) -> Result<(), NavError> {
        let Some(question) = paper.question(state.current()) else {
            error!(paper_id = %paper.id, index = state.current(), "no active question");
            return Err(NavError::NoQuestions(paper.id.clone()));
        };
        self.submit(paper, state, question, collect_answer(question)).await
    }

    /// Submit the current answer and move on, or hand in the paper from the
    /// last question.
    ///
    /// Once the last answer is accepted, pressing next again only retries
    /// the hand-in.
    ///
    /// # Errors
    ///
    /// Any failure leaves the student on the current question.
    pub async fn advance(&self, paper: &ExamPaper, state: &mut NavigationState) -> Result<Advance, NavError> {
        if state.is_completed() {
            return Err(NavError::Completed);
        }
        let total = paper.len();
        if total == 0 {
            error!(paper_id = %paper.id, "advance on a paper without questions");
            self.surface.notify(NO_QUESTIONS_MESSAGE);
            return Err(NavError::NoQuestions(paper.id.clone()));
        }
        let current = state.current();
        let Some(question) = paper.question(current) else {
            error!(paper_id = %paper.id, index = current, total, "current index out of range");
            self.surface.notify(INDEX_ERROR_MESSAGE);
            return Err(NavError::InvalidIndex { index: current, total });
        };

        if current + 1 == total && state.is_current_accepted() {
            debug!(paper_id = %paper.id, "last answer already accepted; retrying hand-in");
            return self.complete(paper, state).await;
        }

        let answer = collect_answer(question);
        if answer.is_none() && self.config.confirm_empty_answer && !self.surface.confirm(CONFIRM_EMPTY_ANSWER) {
            return Ok(Advance::Stayed);
        }
        self.submit(paper, state, question, answer).await?;
        state.mark_accepted();

        if current + 1 < total {
            self.switch_to(paper, state, current + 1)?;
            return Ok(Advance::Moved(current + 1));
        }
        self.complete(paper, state).await
    }

    /// Step back one question. Purely a view change; nothing is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Completed`] after the paper was handed in.
    pub fn retreat(&self, paper: &ExamPaper, state: &mut NavigationState) -> Result<Option<usize>, NavError> {
        if state.is_completed() {
            return Err(NavError::Completed);
        }
        let Some(previous) = state.current().checked_sub(1) else {
            return Ok(None);
        };
        self.switch_to(paper, state, previous)?;
        Ok(Some(previous))
    }

    /// Serialize every answer for the native form and ask for confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Encode`] if the sheet cannot be serialized.
    pub fn confirm_bulk_submit(&self, paper: &ExamPaper) -> Result<Option<String>, NavError> {
        Ok(confirm_bulk_submit(paper, &self.surface)?)
    }

    async fn submit(
        &self,
        paper: &ExamPaper,
        state: &NavigationState,
        question: &Question,
        answer: Option<Answer>,
    ) -> Result<(), NavError> {
        let Some(_guard) = self.engage(state.lock()) else {
            warn!(paper_id = %paper.id, "submission already in flight");
            return Err(NavError::Busy);
        };

        let submission = AnswerSubmission { paper_id: paper.id.clone(), question_id: question.id.clone(), answer };
        match self.api.submit_answer(&submission).await {
            Ok(reply) if reply.is_success() => {
                debug!(paper_id = %paper.id, question_id = %question.id, score = ?reply.score, "answer accepted");
                Ok(())
            }
            Ok(reply) => {
                let message = reply.message_or(SUBMIT_FAILED_MESSAGE);
                warn!(paper_id = %paper.id, question_id = %question.id, %message, "answer rejected");
                self.surface.notify(&message);
                Err(NavError::Rejected(message))
            }
            Err(e) => {
                error!(paper_id = %paper.id, question_id = %question.id, error = %e, "answer submission failed");
                self.surface.notify(SUBMIT_ERROR_MESSAGE);
                Err(e.into())
            }
        }
    }

    async fn complete(&self, paper: &ExamPaper, state: &mut NavigationState) -> Result<Advance, NavError> {
        if self.config.confirm_completion && !self.surface.confirm(CONFIRM_FINISH) {
            return Ok(Advance::Stayed);
        }

        if self.config.completion == CompletionMode::FormSubmit {
            let sheet = AnswerSheet::collect(paper).to_json()?;
            if !self.surface.submit_form(&paper.id, &sheet) {
                error!(paper_id = %paper.id, "exam form hand-off failed");
                self.surface.notify(FORM_MISSING_MESSAGE);
                return Err(NavError::FormUnavailable(paper.id.clone()));
            }
            state.mark_completed();
            self.surface.render_nav(&NavView::of(state));
            info!(paper_id = %paper.id, "paper handed in by form");
            return Ok(Advance::Completed);
        }

        let outcome = {
            let Some(_guard) = self.engage(state.lock()) else {
                return Err(NavError::Busy);
            };
            self.api.complete_exam(&paper.id).await
        };

        match outcome {
            Ok(reply) if reply.is_success() => {
                info!(paper_id = %paper.id, "exam completed");
                state.mark_completed();
                self.surface.render_nav(&NavView::of(state));
                self.surface.notify(&reply.message_or(COMPLETE_OK_MESSAGE));
                self.surface.reload();
                Ok(Advance::Completed)
            }
            Ok(reply) => {
                let message = reply.message_or(COMPLETE_FAILED_MESSAGE);
                warn!(paper_id = %paper.id, %message, "completion rejected");
                self.surface.notify(&message);
                Err(NavError::Rejected(message))
            }
            Err(e) => {
                error!(paper_id = %paper.id, error = %e, "completion failed");
                self.surface.notify(COMPLETE_ERROR_MESSAGE);
                Err(e.into())
            }
        }
    }

    /// Take `lock` and disable the advance control until the guard drops.
    fn engage<'a>(&'a self, lock: &'a SubmitLock) -> Option<SubmitGuard<'a>> {
        let guard = lock.try_acquire()?;
        self.surface.set_submitting(true);
        Some(guard.on_release(|| self.surface.set_submitting(false)))
    }
}
