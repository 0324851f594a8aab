//! Navigation controls derived from [`NavigationState`].

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::consts::{EMPTY_NEXT_LABEL, FINISH_LABEL, NEXT_LABEL, NO_QUESTIONS_MESSAGE};
use crate::state::NavigationState;

/// What the host should draw for the prev/next controls and position label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    /// "Question X / N", or the no-questions notice.
    pub label: String,
    /// 1-based position and total, when there is a question to show.
    pub position: Option<(usize, usize)>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub next_label: &'static str,
    /// The next control submits the whole paper.
    pub finishing: bool,
}

impl NavView {
    #[must_use]
    pub fn of(state: &NavigationState) -> Self {
        if state.is_empty() {
            return Self {
                label: NO_QUESTIONS_MESSAGE.to_owned(),
                position: None,
                prev_enabled: false,
                next_enabled: false,
                next_label: EMPTY_NEXT_LABEL,
                finishing: false,
            };
        }

        let position = (state.current() + 1, state.total());
        let live = !state.is_completed();
        let finishing = state.is_last();
        Self {
            label: format!("Question {} / {}", position.0, position.1),
            position: Some(position),
            prev_enabled: live && !state.is_first(),
            next_enabled: live,
            next_label: if finishing { FINISH_LABEL } else { NEXT_LABEL },
            finishing,
        }
    }
}
