use super::*;
use crate::fakes::{Event, RecordingSurface, choice_paper};
use crate::paper::{AnswerInput, Question};

#[test]
fn sheet_keeps_paper_order_and_skips_unanswered() {
    let mut paper = choice_paper(3);
    paper.questions[2].input.select(0);
    paper.questions[0].input.select(3);

    let sheet = AnswerSheet::collect(&paper);
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.to_json().unwrap(), r#"{"q1":"D","q3":"A"}"#);
    assert!(sheet.get(&QuestionId::new("q2")).is_none());
}

#[test]
fn sheet_serializes_multiple_choice_as_list() {
    let mut q = Question::new("m1", "", AnswerInput::multiple_choice(["x", "y", "z"]));
    q.input.toggle(0);
    q.input.toggle(2);
    let paper = ExamPaper::new("p", vec![q]);
    assert_eq!(AnswerSheet::collect(&paper).to_json().unwrap(), r#"{"m1":["x","z"]}"#);
}

#[test]
fn confirmed_bulk_submit_returns_sheet() {
    let mut paper = choice_paper(2);
    paper.questions[1].input.select(1);
    let surface = RecordingSurface::default();

    let json = confirm_bulk_submit(&paper, &surface).unwrap();
    assert_eq!(json.as_deref(), Some(r#"{"q2":"B"}"#));
    assert_eq!(surface.count(|e| matches!(e, Event::Confirm(_))), 1);
}

#[test]
fn declined_bulk_submit_returns_none() {
    let paper = choice_paper(2);
    let surface = RecordingSurface::default();
    surface.answer_confirm(false);

    assert_eq!(confirm_bulk_submit(&paper, &surface).unwrap(), None);
}

#[test]
fn empty_sheet_is_an_empty_object() {
    let paper = choice_paper(2);
    assert_eq!(AnswerSheet::collect(&paper).to_json().unwrap(), "{}");
}
