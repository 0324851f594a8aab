//! AI helper panel: one prompt box, the last answer, and the quota.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends prompts through the controller's `AiSession`, which enforces the
//! server-owned quota, and renders the answer as sanitized markdown.

#[cfg(test)]
#[path = "ai_panel_test.rs"]
mod ai_panel_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::ai::AiResponse;
use crate::state::exam::SharedController;

#[component]
pub fn AiPanel(controller: SharedController) -> impl IntoView {
    let ai = controller.with_value(|c| c.ai_state());
    let input = RwSignal::new(String::new());

    let do_send = move || {
        if !ai.get_untracked().control.enabled {
            return;
        }
        let prompt = input.get_untracked();
        let ctrl = controller.get_value();
        leptos::task::spawn_local(async move { ctrl.ask_ai(prompt).await });
    };

    let on_click = move |_| do_send();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <aside class="ai-panel">
            <div class="ai-panel__input-row">
                <textarea
                    class="ai-panel__input"
                    placeholder="Ask the AI..."
                    disabled=move || !ai.get().control.enabled
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="btn btn--primary ai-panel__send"
                    on:click=on_click
                    disabled=move || !ai.get().control.enabled
                >
                    {move || ai.get().control.label}
                </button>
            </div>
            {move || {
                ai.get()
                    .remaining
                    .map(|left| view! { <div class="ai-panel__remaining">{format!("{left} left")}</div> })
            }}
            {move || match ai.get().response {
                Some(AiResponse::Answer(text)) => {
                    let rendered = render_markdown_html(&text);
                    view! { <div class="ai-panel__markdown-body" inner_html=rendered></div> }.into_any()
                }
                Some(AiResponse::Error(text)) => {
                    view! { <div class="ai-panel__error">{text}</div> }.into_any()
                }
                None => ().into_any(),
            }}
        </aside>
    }
}

pub(crate) fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Raw HTML from model output is dropped before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
