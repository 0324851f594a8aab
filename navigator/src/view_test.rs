use super::*;

#[test]
fn empty_paper_disables_everything() {
    let view = NavView::of(&NavigationState::new(0));
    assert_eq!(view.label, "No questions available");
    assert_eq!(view.position, None);
    assert!(!view.prev_enabled);
    assert!(!view.next_enabled);
    assert_eq!(view.next_label, "No questions");
}

#[test]
fn first_question_disables_prev() {
    let view = NavView::of(&NavigationState::new(3));
    assert_eq!(view.label, "Question 1 / 3");
    assert!(!view.prev_enabled);
    assert!(view.next_enabled);
    assert_eq!(view.next_label, "Next");
    assert!(!view.finishing);
}

#[test]
fn last_question_switches_to_finish_label() {
    let mut state = NavigationState::new(3);
    state.set_current(2);
    let view = NavView::of(&state);
    assert_eq!(view.label, "Question 3 / 3");
    assert_eq!(view.position, Some((3, 3)));
    assert!(view.prev_enabled);
    assert_eq!(view.next_label, "Submit and finish");
    assert!(view.finishing);
}

#[test]
fn completed_paper_freezes_controls() {
    let mut state = NavigationState::new(2);
    state.set_current(1);
    state.mark_completed();
    let view = NavView::of(&state);
    assert!(!view.prev_enabled);
    assert!(!view.next_enabled);
}
