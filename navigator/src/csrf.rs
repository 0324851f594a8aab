//! CSRF token lookup for mutating requests.
//!
//! The server sets the token in the `csrftoken` cookie and also renders it
//! into a hidden form field. The cookie wins when both are present.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use cookie::Cookie;

use crate::consts::CSRF_COOKIE_NAME;

/// Find cookie `name` in a `Cookie` header (or `document.cookie`) string,
/// percent-decoding its value.
#[must_use]
pub fn from_cookie_header(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

/// Resolve the token from the cookie string first, then the hidden field.
#[must_use]
pub fn resolve(cookie_header: Option<&str>, hidden_field: Option<&str>) -> Option<String> {
    cookie_header
        .and_then(|header| from_cookie_header(header, CSRF_COOKIE_NAME))
        .or_else(|| hidden_field.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned))
}
