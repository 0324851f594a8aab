//! The exam page: mounts on a server-rendered paper and shows one question
//! at a time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server embeds the paper and page options as JSON in
//! `<script id="exam-paper-data" type="application/json">`. Without it the
//! page shows the no-questions notice and every control stays disabled.

#[cfg(test)]
#[path = "exam_test.rs"]
mod exam_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use navigator::nav::{CompletionMode, NavigatorConfig};
use navigator::paper::ExamPaper;
use navigator::wire::Endpoints;
use serde::Deserialize;

use crate::components::ai_panel::AiPanel;
use crate::components::end_exam_button::EndExamButton;
use crate::components::nav_bar::NavBar;
use crate::components::question_card::QuestionCard;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::api::GlooApi;
use crate::state::exam::{ExamController, ExamSignals};
use crate::util::csrf;

/// Element id of the embedded page data.
pub const PAGE_DATA_ID: &str = "exam-paper-data";

/// Everything the server tells the page about this attempt.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageData {
    pub paper: ExamPaper,
    #[serde(default)]
    pub endpoints: Endpoints,
    /// AI questions left, when the paper allows AI help.
    #[serde(default)]
    pub ai_remaining: Option<u32>,
    /// Hand in through the native form instead of the complete-exam request.
    #[serde(default)]
    pub form_submit: bool,
    /// Show the teacher's end-exam control.
    #[serde(default)]
    pub can_end_exam: bool,
}

impl PageData {
    pub fn navigator_config(&self) -> NavigatorConfig {
        let completion = if self.form_submit { CompletionMode::FormSubmit } else { CompletionMode::CompleteRequest };
        NavigatorConfig { completion, ..NavigatorConfig::default() }
    }
}

/// Parse the embedded page data.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed data.
pub fn parse_page_data(json: &str) -> Result<PageData, serde_json::Error> {
    serde_json::from_str(json)
}

fn read_page_data() -> Option<PageData> {
    #[cfg(feature = "hydrate")]
    {
        let text = web_sys::window()?.document()?.get_element_by_id(PAGE_DATA_ID)?.text_content()?;
        match parse_page_data(&text) {
            Ok(data) => Some(data),
            Err(e) => {
                leptos::logging::error!("exam page data is malformed: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[component]
pub fn ExamPage() -> impl IntoView {
    let params = use_params_map();
    let data = read_page_data().unwrap_or_else(|| PageData {
        paper: ExamPaper::new(params.get_untracked().get("paper_id").unwrap_or_default(), Vec::new()),
        endpoints: Endpoints::default(),
        ai_remaining: None,
        form_submit: false,
        can_end_exam: false,
    });
    if let Some(route_id) = params.get_untracked().get("paper_id") {
        if route_id != data.paper.id.as_str() {
            leptos::logging::warn!("route paper {route_id} does not match embedded paper {}", data.paper.id);
        }
    }

    let config = data.navigator_config();
    let title = data.paper.title.clone();
    let count = data.paper.len();
    let signals = ExamSignals::new(data.paper);
    let api = GlooApi::new(data.endpoints, csrf::page_token());
    let controller = StoredValue::new_local(Rc::new(ExamController::new(api, signals, config, data.ai_remaining)));
    let show_ai = data.ai_remaining.is_some();
    let can_end_exam = data.can_end_exam;

    view! {
        <div class="exam-page">
            <header class="exam-page__header">
                <h1>{title}</h1>
                <ThemeToggle/>
            </header>
            <main class="exam-page__questions">
                {(0..count).map(|index| view! { <QuestionCard signals index/> }).collect::<Vec<_>>()}
            </main>
            <NavBar controller/>
            <Show when=move || show_ai>
                <AiPanel controller/>
            </Show>
            <Show when=move || can_end_exam>
                <EndExamButton controller/>
            </Show>
        </div>
    }
}
