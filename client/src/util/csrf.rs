//! CSRF token for the page: `document.cookie` first, then the hidden
//! `csrfmiddlewaretoken` form field.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

/// Name of the hidden field the server renders into every form.
pub const HIDDEN_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Selector for the hidden CSRF field.
pub fn hidden_field_selector() -> String {
    format!("input[name=\"{HIDDEN_FIELD_NAME}\"]")
}

/// Look up the token, or `None` when the page carries none.
pub fn page_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let cookies = document.dyn_ref::<web_sys::HtmlDocument>().and_then(|d| d.cookie().ok());
        let hidden = document
            .query_selector(&hidden_field_selector())
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value());
        let token = navigator::csrf::resolve(cookies.as_deref(), hidden.as_deref());
        if token.is_none() {
            leptos::logging::warn!("no CSRF token on page; requests will be rejected");
        }
        token
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
