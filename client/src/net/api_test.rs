#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;
use navigator::paper::QuestionId;

use super::*;

#[test]
fn calls_fail_as_request_errors_outside_the_browser() {
    let api = GlooApi::new(Endpoints::default(), Some("tok".into()));
    let submission = AnswerSubmission { paper_id: PaperId::new("p1"), question_id: QuestionId::new("q1"), answer: None };
    let err = block_on(api.submit_answer(&submission)).unwrap_err();
    assert!(matches!(err, ApiError::Request(ref m) if m == UNAVAILABLE));
    assert!(block_on(api.end_exam(&PaperId::new("p1"))).is_err());
}

#[test]
fn keeps_configured_endpoints() {
    let endpoints = Endpoints { ask_ai: "/ai/".into(), ..Endpoints::default() };
    let api = GlooApi::new(endpoints.clone(), None);
    assert_eq!(api.endpoints(), &endpoints);
}
