//! Page chrome state that is not part of the exam itself.

/// UI preferences shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
