//! Teacher control that closes the exam for every student.

use leptos::prelude::*;

use crate::state::exam::SharedController;

#[component]
pub fn EndExamButton(controller: SharedController) -> impl IntoView {
    let submitting = controller.with_value(|c| c.signals().submitting);
    let on_click = move |_| {
        let ctrl = controller.get_value();
        leptos::task::spawn_local(async move { ctrl.end_exam().await });
    };

    view! {
        <button class="btn btn--danger exam-end" on:click=on_click disabled=move || submitting.get()>
            "End exam"
        </button>
    }
}
