use futures::executor::block_on;

use super::*;
use crate::api::ApiError;
use crate::fakes::{Call, Event, FakeApi, RecordingSurface};
use crate::wire::Reply;

#[test]
fn declined_confirmation_sends_nothing() {
    let api = FakeApi::default();
    let surface = RecordingSurface::default();
    surface.answer_confirm(false);

    let ended = block_on(end_exam(&api, &surface, &SubmitLock::default(), &PaperId::new("p1"))).unwrap();
    assert!(!ended);
    assert!(api.calls.borrow().is_empty());
}

#[test]
fn successful_end_notifies_and_reloads() {
    let api = FakeApi::default();
    let surface = RecordingSurface::default();
    let lock = SubmitLock::default();

    let ended = block_on(end_exam(&api, &surface, &lock, &PaperId::new("p1"))).unwrap();

    assert!(ended);
    assert_eq!(api.count(|c| matches!(c, Call::End(id) if id.as_str() == "p1")), 1);
    assert_eq!(surface.notices(), vec![END_OK_MESSAGE.to_owned()]);
    assert_eq!(surface.count(|e| matches!(e, Event::Reload)), 1);
    assert!(!lock.is_held());
}

#[test]
fn rejected_end_keeps_page_and_releases_lock() {
    let api = FakeApi::default();
    api.on_end(Ok(Reply::error("not allowed")));
    let surface = RecordingSurface::default();
    let lock = SubmitLock::default();

    let err = block_on(end_exam(&api, &surface, &lock, &PaperId::new("p1"))).unwrap_err();

    assert!(matches!(err, NavError::Rejected(ref m) if m == "not allowed"));
    assert_eq!(surface.count(|e| matches!(e, Event::Reload)), 0);
    assert_eq!(surface.last_submitting(), Some(false));
    assert!(!lock.is_held());
}

#[test]
fn transport_error_uses_generic_notice() {
    let api = FakeApi::default();
    api.on_end(Err(ApiError::Request("offline".into())));
    let surface = RecordingSurface::default();

    assert!(block_on(end_exam(&api, &surface, &SubmitLock::default(), &PaperId::new("p1"))).is_err());
    assert_eq!(surface.notices(), vec![END_ERROR_MESSAGE.to_owned()]);
}

#[test]
fn held_lock_refuses_second_end() {
    let api = FakeApi::default();
    let surface = RecordingSurface::default();
    let lock = SubmitLock::default();
    let _held = lock.try_acquire().unwrap();

    let err = block_on(end_exam(&api, &surface, &lock, &PaperId::new("p1"))).unwrap_err();
    assert!(matches!(err, NavError::Busy));
    assert!(api.calls.borrow().is_empty());
}
