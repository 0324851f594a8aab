use serde_json::json;

use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn default_endpoints_match_server_routes() {
    let endpoints = Endpoints::default();
    assert_eq!(endpoints.submit_answer, "/room/submit_single_answer/");
    assert_eq!(endpoints.complete_exam, "/room/complete_exam/");
    assert_eq!(endpoints.end_exam, "/room/end_exam/");
    assert_eq!(endpoints.ask_ai, "/room/ask_ai/");
}

#[test]
fn exam_form_path_substitutes_paper_id() {
    let endpoints = Endpoints::default();
    assert_eq!(endpoints.exam_form_for(&PaperId::new("42")), "/exam/42/");
}

#[test]
fn partial_endpoint_config_keeps_defaults() {
    let endpoints: Endpoints = serde_json::from_value(json!({ "ask_ai": "/webhooks/ai/" })).unwrap();
    assert_eq!(endpoints.ask_ai, "/webhooks/ai/");
    assert_eq!(endpoints.end_exam, DEFAULT_END_EXAM_PATH);
}

// =============================================================
// Bodies
// =============================================================

#[test]
fn unanswered_submission_sends_null() {
    let body = AnswerSubmission {
        paper_id: PaperId::new("p1"),
        question_id: QuestionId::new("q3"),
        answer: None,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "paper_id": "p1", "question_id": "q3", "answer": null })
    );
}

#[test]
fn ai_request_omits_missing_paper() {
    let body = AiRequest { question: "hint?".into(), paper_id: None };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "question": "hint?" }));
}

// =============================================================
// Replies
// =============================================================

#[test]
fn reply_success_requires_exact_status() {
    let ok: Reply = serde_json::from_value(json!({ "status": "success", "score": 10 })).unwrap();
    assert!(ok.is_success());
    assert_eq!(ok.score, Some(10.0));

    let missing: Reply = serde_json::from_value(json!({})).unwrap();
    assert!(!missing.is_success());
}

#[test]
fn reply_message_falls_back_when_blank() {
    assert_eq!(Reply::error("already submitted").message_or("x"), "already submitted");
    assert_eq!(Reply::error("  ").message_or("fallback"), "fallback");
    assert_eq!(Reply::default().message_or("fallback"), "fallback");
}

#[test]
fn ai_reply_accepts_legacy_remaining_field() {
    let reply: AiReply =
        serde_json::from_value(json!({ "status": "success", "response": "Try X", "remaining_limit": 2 })).unwrap();
    assert!(reply.is_success());
    assert_eq!(reply.remaining, Some(2));
}

#[test]
fn ai_reply_without_status_is_success() {
    let reply: AiReply = serde_json::from_value(json!({ "response": "ok", "remaining": 0 })).unwrap();
    assert!(reply.is_success());
}

#[test]
fn ai_reply_error_prefers_message_then_error() {
    let reply: AiReply = serde_json::from_value(json!({ "error": "quota exceeded" })).unwrap();
    assert!(!reply.is_success());
    assert_eq!(reply.error_or("fallback"), "quota exceeded");

    let reply: AiReply = serde_json::from_value(json!({ "status": "error" })).unwrap();
    assert_eq!(reply.error_or("fallback"), "fallback");
}

// =============================================================
// decode_reply
// =============================================================

#[test]
fn decode_reads_json_even_on_error_status() {
    let reply: Reply = decode_reply(400, r#"{"status":"error","message":"already submitted"}"#).unwrap();
    assert_eq!(reply.message.as_deref(), Some("already submitted"));
}

#[test]
fn decode_non_json_error_status_reports_status() {
    let err = decode_reply::<Reply>(502, "<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 502 }));
}

#[test]
fn decode_non_json_success_is_parse_error() {
    let err = decode_reply::<Reply>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}
