//! Recording fakes for the `ExamApi` and `Surface` seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::api::{ApiError, ExamApi};
use crate::paper::{AnswerInput, ExamPaper, PaperId, Question};
use crate::surface::Surface;
use crate::view::NavView;
use crate::wire::{AiReply, AiRequest, AnswerSubmission, Reply};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Submit(AnswerSubmission),
    Complete(PaperId),
    End(PaperId),
    Ask(AiRequest),
}

/// Replays queued replies; an empty queue answers with success.
#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    submit: RefCell<VecDeque<Result<Reply, ApiError>>>,
    complete: RefCell<VecDeque<Result<Reply, ApiError>>>,
    end: RefCell<VecDeque<Result<Reply, ApiError>>>,
    ask: RefCell<VecDeque<Result<AiReply, ApiError>>>,
}

impl FakeApi {
    pub fn on_submit(&self, reply: Result<Reply, ApiError>) {
        self.submit.borrow_mut().push_back(reply);
    }

    pub fn on_complete(&self, reply: Result<Reply, ApiError>) {
        self.complete.borrow_mut().push_back(reply);
    }

    pub fn on_end(&self, reply: Result<Reply, ApiError>) {
        self.end.borrow_mut().push_back(reply);
    }

    pub fn on_ask(&self, reply: Result<AiReply, ApiError>) {
        self.ask.borrow_mut().push_back(reply);
    }

    pub fn submissions(&self) -> Vec<AnswerSubmission> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Submit(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(*c)).count()
    }
}

#[async_trait(?Send)]
impl ExamApi for FakeApi {
    async fn submit_answer(&self, submission: &AnswerSubmission) -> Result<Reply, ApiError> {
        self.calls.borrow_mut().push(Call::Submit(submission.clone()));
        self.submit.borrow_mut().pop_front().unwrap_or_else(|| Ok(Reply::success()))
    }

    async fn complete_exam(&self, paper_id: &PaperId) -> Result<Reply, ApiError> {
        self.calls.borrow_mut().push(Call::Complete(paper_id.clone()));
        self.complete.borrow_mut().pop_front().unwrap_or_else(|| Ok(Reply::success()))
    }

    async fn end_exam(&self, paper_id: &PaperId) -> Result<Reply, ApiError> {
        self.calls.borrow_mut().push(Call::End(paper_id.clone()));
        self.end.borrow_mut().pop_front().unwrap_or_else(|| Ok(Reply::success()))
    }

    async fn ask_ai(&self, request: &AiRequest) -> Result<AiReply, ApiError> {
        self.calls.borrow_mut().push(Call::Ask(request.clone()));
        self.ask.borrow_mut().pop_front().unwrap_or_else(|| Ok(AiReply::default()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Show(Option<usize>),
    Nav(NavView),
    Submitting(bool),
    Notify(String),
    Confirm(String),
    Reload,
    SubmitForm(PaperId, String),
}

/// Records every surface call; confirmations answer `true` unless queued.
#[derive(Default)]
pub struct RecordingSurface {
    pub events: RefCell<Vec<Event>>,
    answers: RefCell<VecDeque<bool>>,
    form_missing: Cell<bool>,
}

impl RecordingSurface {
    /// Make `submit_form` report that no form took the answers.
    pub fn lose_form(&self, missing: bool) {
        self.form_missing.set(missing);
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.answers.borrow_mut().push_back(answer);
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(*e)).count()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Notify(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_nav(&self) -> Option<NavView> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            Event::Nav(v) => Some(v.clone()),
            _ => None,
        })
    }

    pub fn last_shown(&self) -> Option<Option<usize>> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            Event::Show(i) => Some(*i),
            _ => None,
        })
    }

    pub fn last_submitting(&self) -> Option<bool> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            Event::Submitting(b) => Some(*b),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Surface for RecordingSurface {
    fn show_question(&self, index: Option<usize>) {
        self.events.borrow_mut().push(Event::Show(index));
    }

    fn render_nav(&self, view: &NavView) {
        self.events.borrow_mut().push(Event::Nav(view.clone()));
    }

    fn set_submitting(&self, submitting: bool) {
        self.events.borrow_mut().push(Event::Submitting(submitting));
    }

    fn notify(&self, message: &str) {
        self.events.borrow_mut().push(Event::Notify(message.to_owned()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.events.borrow_mut().push(Event::Confirm(message.to_owned()));
        self.answers.borrow_mut().pop_front().unwrap_or(true)
    }

    fn reload(&self) {
        self.events.borrow_mut().push(Event::Reload);
    }

    fn submit_form(&self, paper_id: &PaperId, answers_json: &str) -> bool {
        if self.form_missing.get() {
            return false;
        }
        self.events.borrow_mut().push(Event::SubmitForm(paper_id.clone(), answers_json.to_owned()));
        true
    }
}

/// Paper of `n` single-choice questions `q1..=qn` with options A–D.
pub fn choice_paper(n: usize) -> ExamPaper {
    let questions = (1..=n)
        .map(|i| Question::new(format!("q{i}"), format!("Question {i}"), AnswerInput::single_choice(["A", "B", "C", "D"])))
        .collect();
    ExamPaper::new("p1", questions)
}
