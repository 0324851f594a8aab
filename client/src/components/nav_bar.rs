//! Previous / next controls, position label, and hand-in-all button.

use leptos::prelude::*;

use crate::state::exam::SharedController;

#[component]
pub fn NavBar(controller: SharedController) -> impl IntoView {
    let signals = controller.with_value(|c| c.signals());
    let nav = signals.nav;
    let submitting = signals.submitting;

    let on_prev = move |_| controller.with_value(|c| c.retreat());
    let on_next = move |_| {
        let ctrl = controller.get_value();
        leptos::task::spawn_local(async move { ctrl.advance().await });
    };
    let on_submit_all = move |_| controller.with_value(|c| c.submit_all());

    view! {
        <nav class="exam-nav">
            <button class="btn exam-nav__prev" on:click=on_prev disabled=move || !nav.get().prev_enabled>
                "Previous"
            </button>
            <span class="exam-nav__label">{move || nav.get().label}</span>
            <button
                class="btn btn--primary exam-nav__next"
                class:exam-nav__next--finish=move || nav.get().finishing
                on:click=on_next
                disabled=move || !nav.get().next_enabled || submitting.get()
            >
                {move || nav.get().next_label}
            </button>
            <button
                class="btn exam-nav__submit-all"
                on:click=on_submit_all
                disabled=move || nav.get().position.is_none() || submitting.get()
            >
                "Submit all answers"
            </button>
        </nav>
    }
}
