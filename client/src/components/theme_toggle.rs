//! Light/dark theme switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_click = move |_| ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));

    view! {
        <button class="btn theme-toggle" on:click=on_click title="Toggle theme">
            {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
        </button>
    }
}
