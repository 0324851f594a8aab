use std::collections::HashMap;

use super::*;

fn config(base_url: &str) -> Result<ClientConfig, CliError> {
    ClientConfig::new(base_url, None, None, DEFAULT_TIMEOUT_SECS, Endpoints::default())
}

// =============================================================
// ClientConfig
// =============================================================

#[test]
fn base_url_loses_trailing_slash() {
    let cfg = config("https://exam.example.edu/").unwrap();
    assert_eq!(cfg.base_url, "https://exam.example.edu");
    assert_eq!(cfg.url("/room/ask_ai/"), "https://exam.example.edu/room/ask_ai/");
    assert_eq!(cfg.url("room/ask_ai/"), "https://exam.example.edu/room/ask_ai/");
}

#[test]
fn base_url_requires_http_scheme() {
    assert!(matches!(config("ftp://exam"), Err(CliError::InvalidBaseUrl(_))));
    assert!(matches!(config("exam.example.edu"), Err(CliError::InvalidBaseUrl(_))));
    assert!(matches!(config("http://"), Err(CliError::InvalidBaseUrl(_))));
}

#[test]
fn blank_credentials_are_dropped() {
    let cfg = ClientConfig::new(DEFAULT_BASE_URL, Some(String::new()), Some("tok".into()), 0, Endpoints::default())
        .unwrap();
    assert_eq!(cfg.session_id, None);
    assert_eq!(cfg.csrf_token.as_deref(), Some("tok"));
    assert_eq!(cfg.timeout, Duration::from_secs(1));
}

// =============================================================
// Endpoint overrides
// =============================================================

#[test]
fn lookup_without_overrides_keeps_defaults() {
    assert_eq!(endpoints_from_lookup(|_| None), Endpoints::default());
}

#[test]
fn lookup_overrides_individual_paths() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("EXAM_ROOM_ASK_AI_PATH", "/webhooks/ai/"),
        ("EXAM_ROOM_END_EXAM_PATH", "   "),
    ]);
    let endpoints = endpoints_from_lookup(|key| env.get(key).map(|v| (*v).to_owned()));
    assert_eq!(endpoints.ask_ai, "/webhooks/ai/");
    assert_eq!(endpoints.end_exam, Endpoints::default().end_exam);
}
