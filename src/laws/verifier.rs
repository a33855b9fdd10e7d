//! The assertion counter and comparison step shared by every law check.

use std::fmt::{self, Debug};
use std::io::Write;

use super::error::{HarnessError, LawViolation};
use super::law::Law;
use crate::config::HarnessConfig;

/// Outcome of a run in which every scenario held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Number of equality checks executed.
    pub assertions: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} assertions succeeded", self.assertions)
    }
}

/// Prints law statements to `output` and compares the two sides of each
/// scenario.
///
/// # Examples
///
/// ```rust
/// use maybe_laws::control::Maybe;
/// use maybe_laws::laws::{Law, Verifier};
///
/// let mut output = Vec::new();
/// let mut verifier = Verifier::new(&mut output);
///
/// verifier.announce(Law::FunctorIdentity).unwrap();
/// verifier
///     .check(Law::FunctorIdentity, "Nothing", &Maybe::<i32>::Nothing, &Maybe::Nothing)
///     .unwrap();
/// let report = verifier.finish().unwrap();
///
/// assert_eq!(report.assertions, 1);
/// assert_eq!(
///     String::from_utf8(output).unwrap(),
///     "Functor Law #1 (Identity): fmap id = id\n\n1 assertions succeeded\n"
/// );
/// ```
#[derive(Debug)]
pub struct Verifier<W> {
    output: W,
    assertions: usize,
    trace_scenarios: bool,
}

impl<W: Write> Verifier<W> {
    /// Creates a verifier with the default configuration.
    #[must_use]
    pub fn new(output: W) -> Self {
        Self::with_config(output, &HarnessConfig::default())
    }

    /// Creates a verifier that follows `config`.
    #[must_use]
    pub const fn with_config(output: W, config: &HarnessConfig) -> Self {
        Self {
            output,
            assertions: 0,
            trace_scenarios: config.trace_scenarios,
        }
    }

    /// Number of checks executed so far.
    #[must_use]
    pub const fn assertions(&self) -> usize {
        self.assertions
    }

    /// Prints the statement line for `law`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Output`] if writing fails.
    pub fn announce(&mut self, law: Law) -> Result<(), HarnessError> {
        writeln!(self.output, "{law}")?;
        Ok(())
    }

    /// Counts one assertion, then compares `left` with `right`.
    ///
    /// The count is taken before the comparison, so a failing scenario is
    /// included in it.
    ///
    /// # Errors
    ///
    /// Returns a [`LawViolation`] naming `law` and `scenario` if the sides
    /// differ.
    pub fn check<T>(
        &mut self,
        law: Law,
        scenario: &str,
        left: &T,
        right: &T,
    ) -> Result<(), LawViolation>
    where
        T: PartialEq + Debug,
    {
        self.assertions += 1;
        if self.trace_scenarios {
            tracing::info!(law = ?law, scenario, assertion = self.assertions, "checking scenario");
        } else {
            tracing::debug!(law = ?law, scenario, assertion = self.assertions, "checking scenario");
        }

        if left == right {
            Ok(())
        } else {
            Err(LawViolation::new(law, scenario, left, right))
        }
    }

    /// Prints the final report line and returns the report.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Output`] if writing or flushing fails.
    pub fn finish(mut self) -> Result<Report, HarnessError> {
        let report = Report {
            assertions: self.assertions,
        };
        writeln!(self.output, "\n{report}")?;
        self.output.flush()?;
        Ok(report)
    }
}
