//! The navigator bound to Leptos signals.
//!
//! DESIGN
//! ======
//! [`SignalSurface`] implements the navigator's presentation seam by writing
//! signals that the components read; blocking dialogs and page reloads go
//! through `web_sys` under `hydrate` and no-op natively.
//!
//! [`ExamController`] owns the navigator, the navigation state, and the AI
//! session. Async operations take the state out of its slot for the length
//! of the request, so a second click while a request is in flight finds the
//! slot empty and is dropped.

#[cfg(test)]
#[path = "exam_test.rs"]
mod exam_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use navigator::assistant::AiSession;
use navigator::consts::FORM_MISSING_MESSAGE;
use navigator::nav::{Navigator, NavigatorConfig};
use navigator::paper::{ExamPaper, PaperId};
use navigator::proctor;
use navigator::state::{NavigationState, SubmitLock};
use navigator::surface::Surface;
use navigator::view::NavView;

use crate::net::api::GlooApi;
use crate::state::ai::AiState;

/// Element id of the server-rendered exam form.
pub const EXAM_FORM_ID: &str = "exam-form";
/// Name of the form's hidden answer-sheet field.
pub const ANSWERS_FIELD_NAME: &str = "answers";

/// Signals the exam components render from.
#[derive(Clone, Copy, Debug)]
pub struct ExamSignals {
    pub paper: RwSignal<ExamPaper>,
    pub visible: RwSignal<Option<usize>>,
    pub nav: RwSignal<NavView>,
    pub submitting: RwSignal<bool>,
    /// Last notice shown to the student.
    pub notice: RwSignal<Option<String>>,
}

impl ExamSignals {
    pub fn new(paper: ExamPaper) -> Self {
        let empty = NavView::of(&NavigationState::new(paper.len()));
        Self {
            paper: RwSignal::new(paper),
            visible: RwSignal::new(None),
            nav: RwSignal::new(empty),
            submitting: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SignalSurface {
    signals: ExamSignals,
}

impl SignalSurface {
    pub fn new(signals: ExamSignals) -> Self {
        Self { signals }
    }
}

impl Surface for SignalSurface {
    fn show_question(&self, index: Option<usize>) {
        self.signals.visible.set(index);
    }

    fn render_nav(&self, view: &NavView) {
        self.signals.nav.set(view.clone());
    }

    fn set_submitting(&self, submitting: bool) {
        self.signals.submitting.set(submitting);
    }

    fn notify(&self, message: &str) {
        self.signals.notice.set(Some(message.to_owned()));
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            true
        }
    }

    fn reload(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    }

    fn submit_form(&self, paper_id: &PaperId, answers_json: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return false;
            };
            let Some(form) = document
                .get_element_by_id(EXAM_FORM_ID)
                .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
            else {
                leptos::logging::error!("exam form #{EXAM_FORM_ID} missing; answers for {paper_id} not sent");
                return false;
            };
            let Some(field) = form
                .query_selector(&answers_field_selector())
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                leptos::logging::error!("exam form has no {ANSWERS_FIELD_NAME} field; answers for {paper_id} not sent");
                return false;
            };
            field.set_value(answers_json);
            if let Err(e) = form.submit() {
                leptos::logging::error!("exam form submit failed: {e:?}");
                return false;
            }
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (paper_id, answers_json);
            leptos::logging::warn!("no exam form outside the browser");
            false
        }
    }
}

/// Selector for the form's hidden answer-sheet input.
#[must_use]
pub fn answers_field_selector() -> String {
    format!("input[name=\"{ANSWERS_FIELD_NAME}\"]")
}

/// The controller as components share it: `Copy`, and local to the UI thread.
pub type SharedController = StoredValue<Rc<ExamController>, LocalStorage>;

pub struct ExamController {
    navigator: Navigator<GlooApi, SignalSurface>,
    signals: ExamSignals,
    state: RefCell<Option<NavigationState>>,
    end_lock: SubmitLock,
    ai: RefCell<Option<AiSession>>,
    ai_state: RwSignal<AiState>,
}

impl ExamController {
    /// Build the controller and show the first question.
    pub fn new(api: GlooApi, signals: ExamSignals, config: NavigatorConfig, ai_remaining: Option<u32>) -> Self {
        let navigator = Navigator::with_config(api, SignalSurface::new(signals), config);
        let state = signals.paper.with_untracked(|paper| navigator.initialize(paper));
        let paper_id = signals.paper.with_untracked(|paper| paper.id.clone());
        let ai = AiSession::new(Some(paper_id), ai_remaining);
        let ai_state = RwSignal::new(AiState::from_session(&ai, false));
        Self {
            navigator,
            signals,
            state: RefCell::new(Some(state)),
            end_lock: SubmitLock::default(),
            ai: RefCell::new(Some(ai)),
            ai_state,
        }
    }

    pub fn signals(&self) -> ExamSignals {
        self.signals
    }

    pub fn ai_state(&self) -> RwSignal<AiState> {
        self.ai_state
    }

    /// Submit the visible answer and move on (or hand in the paper).
    pub async fn advance(&self) {
        let Some(mut state) = self.state.borrow_mut().take() else {
            leptos::logging::log!("advance ignored: request in flight");
            return;
        };
        let paper = self.signals.paper.get_untracked();
        if let Err(e) = self.navigator.advance(&paper, &mut state).await {
            leptos::logging::warn!("advance failed: {e}");
        }
        *self.state.borrow_mut() = Some(state);
    }

    pub fn retreat(&self) {
        let mut slot = self.state.borrow_mut();
        let Some(state) = slot.as_mut() else {
            return;
        };
        let result = self.signals.paper.with_untracked(|paper| self.navigator.retreat(paper, state));
        if let Err(e) = result {
            leptos::logging::warn!("retreat failed: {e}");
        }
    }

    /// Hand in every answer through the native form.
    pub fn submit_all(&self) {
        let slot = self.state.borrow();
        if slot.as_ref().is_none_or(NavigationState::is_completed) {
            return;
        }
        let paper = self.signals.paper.get_untracked();
        match self.navigator.confirm_bulk_submit(&paper) {
            Ok(Some(sheet)) => {
                if !self.navigator.surface().submit_form(&paper.id, &sheet) {
                    self.navigator.surface().notify(FORM_MISSING_MESSAGE);
                }
            }
            Ok(None) => {}
            Err(e) => leptos::logging::error!("answer sheet encode failed: {e}"),
        }
    }

    pub async fn end_exam(&self) {
        let paper_id = self.signals.paper.with_untracked(|paper| paper.id.clone());
        let surface = self.navigator.surface();
        if let Err(e) = proctor::end_exam(self.navigator.api(), surface, &self.end_lock, &paper_id).await {
            leptos::logging::warn!("end exam failed: {e}");
        }
    }

    pub async fn ask_ai(&self, prompt: String) {
        let Some(mut session) = self.ai.borrow_mut().take() else {
            return;
        };
        self.ai_state.set(AiState::from_session(&session, true));
        let result = session.ask(self.navigator.api(), &prompt).await;
        self.ai_state.set(AiState::from_session(&session, false).with_result(result));
        *self.ai.borrow_mut() = Some(session);
    }
}
