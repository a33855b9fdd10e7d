//! Error types for law verification.

use std::fmt::Debug;
use std::io;

use thiserror::Error;

use super::law::Law;

/// Two sides of a law that were expected to be equal, and were not.
///
/// # Examples
///
/// ```rust
/// use maybe_laws::control::Maybe;
/// use maybe_laws::laws::{Law, LawViolation};
///
/// let violation = LawViolation::new(
///     Law::FunctorIdentity,
///     "Just(1)",
///     &Maybe::Just(1),
///     &Maybe::Just(2),
/// );
/// assert_eq!(
///     violation.to_string(),
///     "Functor Law #1 (Identity): fmap id = id violated in scenario `Just(1)`: \
///      left = Just(1), right = Just(2)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{law} violated in scenario `{scenario}`: left = {left}, right = {right}")]
pub struct LawViolation {
    /// The law that failed.
    pub law: Law,
    /// Label of the scenario that failed.
    pub scenario: String,
    /// `Debug` rendering of the left-hand side.
    pub left: String,
    /// `Debug` rendering of the right-hand side.
    pub right: String,
}

impl LawViolation {
    /// Creates a violation record from both sides of a failed check.
    #[must_use]
    pub fn new<T: Debug>(law: Law, scenario: &str, left: &T, right: &T) -> Self {
        Self {
            law,
            scenario: scenario.to_owned(),
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }
}

/// Errors that stop a verification run.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A law did not hold for one of its scenarios.
    #[error(transparent)]
    Violation(#[from] LawViolation),
    /// The law statements or the report could not be written.
    #[error("failed to write the law report: {0}")]
    Output(#[from] io::Error),
}
