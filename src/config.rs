//! Connection settings for the terminal host.
//!
//! Flags come from `clap` (with `EXAM_ROOM_*` env fallbacks, `.env` loaded
//! first). Endpoint paths default to the deployed server's routes and can be
//! overridden one by one:
//!
//! - `EXAM_ROOM_SUBMIT_ANSWER_PATH`
//! - `EXAM_ROOM_COMPLETE_EXAM_PATH`
//! - `EXAM_ROOM_END_EXAM_PATH`
//! - `EXAM_ROOM_ASK_AI_PATH`
//! - `EXAM_ROOM_EXAM_FORM_PATH` (may contain `{paper_id}`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use navigator::wire::Endpoints;

use crate::error::CliError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    /// Value of the server's `sessionid` cookie.
    pub session_id: Option<String>,
    pub csrf_token: Option<String>,
    pub timeout: Duration,
    pub endpoints: Endpoints,
}

impl ClientConfig {
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] unless `base_url` is `http(s)://`.
    pub fn new(
        base_url: &str,
        session_id: Option<String>,
        csrf_token: Option<String>,
        timeout_secs: u64,
        endpoints: Endpoints,
    ) -> Result<Self, CliError> {
        let base_url = base_url.trim().trim_end_matches('/');
        let host = base_url
            .strip_prefix("http://")
            .or_else(|| base_url.strip_prefix("https://"))
            .ok_or_else(|| CliError::InvalidBaseUrl(base_url.to_owned()))?;
        if host.is_empty() {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }

        Ok(Self {
            base_url: base_url.to_owned(),
            session_id: session_id.filter(|s| !s.is_empty()),
            csrf_token: csrf_token.filter(|s| !s.is_empty()),
            timeout: Duration::from_secs(timeout_secs.max(1)),
            endpoints,
        })
    }

    /// Absolute URL for a server path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

/// Endpoint paths from the process environment.
#[must_use]
pub fn endpoints_from_env() -> Endpoints {
    endpoints_from_lookup(|key| std::env::var(key).ok())
}

/// Endpoint paths from `lookup`; missing or blank values keep the default.
pub fn endpoints_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Endpoints {
    let defaults = Endpoints::default();
    let pick = |key: &str, default: String| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()).unwrap_or(default);
    Endpoints {
        submit_answer: pick("EXAM_ROOM_SUBMIT_ANSWER_PATH", defaults.submit_answer),
        complete_exam: pick("EXAM_ROOM_COMPLETE_EXAM_PATH", defaults.complete_exam),
        end_exam: pick("EXAM_ROOM_END_EXAM_PATH", defaults.end_exam),
        ask_ai: pick("EXAM_ROOM_ASK_AI_PATH", defaults.ask_ai),
        exam_form: pick("EXAM_ROOM_EXAM_FORM_PATH", defaults.exam_form),
    }
}
