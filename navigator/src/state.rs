//! Per-paper navigation state and the submitting lock.
//!
//! DESIGN
//! ======
//! One `NavigationState` is built per paper instance by
//! [`Navigator::initialize`](crate::nav::Navigator::initialize) and handed back
//! to every navigator call by reference. Nothing is keyed by paper id and
//! nothing outlives the page: a reload starts again at question 0.
//!
//! The submitting lock is advisory. It stops a second request from starting
//! while one is in flight and is released on every exit path by dropping
//! its guard.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::Cell;
use std::fmt;

/// Navigation position within one paper.
///
/// Invariant: `current < total` whenever `total > 0`. A paper with no
/// questions has `total == 0` and navigation is disabled.
#[derive(Debug, Default)]
pub struct NavigationState {
    current: usize,
    total: usize,
    completed: bool,
    /// Question whose answer the server already accepted, until the view moves.
    accepted: Option<usize>,
    lock: SubmitLock,
}

impl NavigationState {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { current: 0, total, completed: false, accepted: None, lock: SubmitLock::default() }
    }

    /// Index of the visible question.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.total > 0 && self.current + 1 == self.total
    }

    /// Set once the whole paper has been handed in; navigation is frozen after.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the visible question's answer was already accepted.
    #[must_use]
    pub fn is_current_accepted(&self) -> bool {
        self.accepted == Some(self.current)
    }

    #[must_use]
    pub fn lock(&self) -> &SubmitLock {
        &self.lock
    }

    /// Callers check `index < total` first.
    pub(crate) fn set_current(&mut self, index: usize) {
        if index != self.current {
            self.accepted = None;
        }
        self.current = index;
    }

    pub(crate) fn mark_accepted(&mut self) {
        self.accepted = Some(self.current);
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }
}

/// Advisory "request in flight" flag.
#[derive(Debug, Default)]
pub struct SubmitLock {
    held: Cell<bool>,
}

impl SubmitLock {
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.get()
    }

    /// Take the lock, or `None` when a request is already in flight.
    #[must_use]
    pub fn try_acquire(&self) -> Option<SubmitGuard<'_>> {
        if self.held.replace(true) {
            return None;
        }
        Some(SubmitGuard { lock: self, on_release: None })
    }
}

/// Holds a [`SubmitLock`] until dropped, then runs the release hook.
pub struct SubmitGuard<'a> {
    lock: &'a SubmitLock,
    on_release: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> SubmitGuard<'a> {
    /// Run `hook` after the lock is released (e.g. re-enable a button).
    #[must_use]
    pub fn on_release(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.on_release = Some(Box::new(hook));
        self
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.lock.held.set(false);
        if let Some(hook) = self.on_release.take() {
            hook();
        }
    }
}

impl fmt::Debug for SubmitGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitGuard").field("hook", &self.on_release.is_some()).finish()
    }
}
