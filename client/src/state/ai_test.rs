use navigator::consts::{AI_ASK_LABEL, AI_BUSY_LABEL, AI_LIMIT_LABEL};
use navigator::paper::PaperId;

use super::*;

#[test]
fn control_follows_busy_flag() {
    let session = AiSession::new(Some(PaperId::new("p1")), Some(2));
    let idle = AiState::from_session(&session, false);
    assert!(idle.control.enabled);
    assert_eq!(idle.control.label, AI_ASK_LABEL);
    assert_eq!(idle.remaining, Some(2));

    let busy = AiState::from_session(&session, true);
    assert!(!busy.control.enabled);
    assert_eq!(busy.control.label, AI_BUSY_LABEL);
}

#[test]
fn exhausted_quota_disables_control() {
    let session = AiSession::new(None, Some(0));
    let state = AiState::from_session(&session, false);
    assert!(!state.control.enabled);
    assert_eq!(state.control.label, AI_LIMIT_LABEL);
}

#[test]
fn errors_render_as_user_messages() {
    let session = AiSession::new(None, None);
    let state = AiState::from_session(&session, false).with_result(Err(AskError::Rejected("quota used".into())));
    assert_eq!(state.response, Some(AiResponse::Error("quota used".into())));

    let state = AiState::from_session(&session, false).with_result(Ok("**42**".into()));
    assert_eq!(state.response, Some(AiResponse::Answer("**42**".into())));
}
