//! Route-level page components.

pub mod exam;
