//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::exam::ExamPage;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides the shared UI state and routes `/exam/:paper_id` to the exam page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState { dark_mode: dark_mode::read_preference() });
    dark_mode::apply(ui.get_untracked().dark_mode);
    provide_context(ui);

    view! {
        <Stylesheet id="exam-room" href="/static/pkg/exam-room.css"/>
        <Title text="Exam Room"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("exam"), ParamSegment("paper_id")) view=ExamPage/>
            </Routes>
        </Router>
    }
}
