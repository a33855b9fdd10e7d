//! Law verification harness.
//!
//! Each law has a fixed table of scenarios. Every scenario is run once and
//! makes exactly one equality check through a shared [`Verifier`], which
//! counts the checks and stops the run at the first violation.
//!
//! # Examples
//!
//! ```rust
//! use maybe_laws::laws::{self, Verifier};
//!
//! let mut output = Vec::new();
//! let report = laws::verify_all(Verifier::new(&mut output)).unwrap();
//!
//! assert_eq!(report.assertions, 26);
//! assert!(String::from_utf8(output).unwrap().ends_with("\n26 assertions succeeded\n"));
//! ```

mod applicative;
mod error;
pub mod fixtures;
mod functor;
mod law;
mod monad;
mod verifier;

use std::io::Write;

pub use error::{HarnessError, LawViolation};
pub use law::Law;
pub use verifier::{Report, Verifier};

/// Runs the Functor, Applicative and Monad laws in order and prints the
/// report line.
///
/// # Errors
///
/// Returns [`HarnessError::Violation`] for the first scenario that fails,
/// or [`HarnessError::Output`] if the output cannot be written.
pub fn verify_all<W: Write>(mut verifier: Verifier<W>) -> Result<Report, HarnessError> {
    tracing::info!(laws = Law::ALL.len(), "verifying Maybe laws");

    functor::verify(&mut verifier)?;
    applicative::verify(&mut verifier)?;
    monad::verify(&mut verifier)?;

    let report = verifier.finish()?;
    tracing::info!(assertions = report.assertions, "every law held");
    Ok(report)
}
