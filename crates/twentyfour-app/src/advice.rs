//! Hint and solution providers.
//!
//! An [`AdviceBackend`] may fail; [`Advisor`] wraps a backend and turns every
//! failure into a fixed fallback text, so callers always get something to
//! show.

use twentyfour_game::AdviceKind;
use twentyfour_solver::find_solution;

/// Shown when a hint cannot be produced.
pub const HINT_FALLBACK: &str = "I'm having trouble analyzing this right now. Try standard math logic!";

/// Shown when the numbers have no solution.
pub const NO_SOLUTION_FALLBACK: &str = "Could not find a solution.";

/// Shown when the solver could not be reached.
pub const UNAVAILABLE_FALLBACK: &str = "Unable to connect to the solver.";

/// Errors an [`AdviceBackend`] can report.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AdviceError {
    /// The numbers cannot be combined into 24.
    #[display("no solution exists")]
    NoSolution,
    /// Advice is turned off.
    #[display("advice is disabled")]
    Disabled,
    /// The provider could not be reached.
    #[display("advice provider unavailable: {reason}")]
    Unavailable {
        /// What went wrong.
        reason: String,
    },
}

/// A source of hint and solution text.
pub trait AdviceBackend {
    /// Returns a hint for reaching 24 from `values`.
    ///
    /// # Errors
    ///
    /// Returns an error if no hint can be produced.
    fn hint(&self, values: &[f64]) -> Result<String, AdviceError>;

    /// Returns a full solution for reaching 24 from `values`.
    ///
    /// # Errors
    ///
    /// Returns [`AdviceError::NoSolution`] if there is none, or another error
    /// if the provider failed.
    fn solution(&self, values: &[f64]) -> Result<String, AdviceError>;
}

impl<B> AdviceBackend for Box<B>
where
    B: AdviceBackend + ?Sized,
{
    fn hint(&self, values: &[f64]) -> Result<String, AdviceError> {
        (**self).hint(values)
    }

    fn solution(&self, values: &[f64]) -> Result<String, AdviceError> {
        (**self).solution(values)
    }
}

/// Offline advice computed with the solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAdvisor;

impl AdviceBackend for LocalAdvisor {
    fn hint(&self, values: &[f64]) -> Result<String, AdviceError> {
        let Some(expr) = find_solution(values) else {
            return Ok("There is no way to reach 24 from here. Try undoing a move.".to_owned());
        };
        match expr.first_step() {
            Some(step) => Ok(format!("Try starting with {step}.")),
            None => Ok(format!("You already have {expr}.")),
        }
    }

    fn solution(&self, values: &[f64]) -> Result<String, AdviceError> {
        find_solution(values)
            .map(|expr| format!("{expr} = 24"))
            .ok_or(AdviceError::NoSolution)
    }
}

/// A backend that always refuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAdvisor;

impl AdviceBackend for DisabledAdvisor {
    fn hint(&self, _values: &[f64]) -> Result<String, AdviceError> {
        Err(AdviceError::Disabled)
    }

    fn solution(&self, _values: &[f64]) -> Result<String, AdviceError> {
        Err(AdviceError::Disabled)
    }
}

/// Wraps a backend so that advice never fails.
#[derive(Debug, Clone, Default)]
pub struct Advisor<B> {
    backend: B,
}

impl<B> Advisor<B>
where
    B: AdviceBackend,
{
    /// Wraps `backend`.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns advice of the given kind, or the fallback text on failure.
    #[must_use]
    pub fn advise(&self, kind: AdviceKind, values: &[f64]) -> String {
        let result = match kind {
            AdviceKind::Hint => self.backend.hint(values),
            AdviceKind::Solution => self.backend.solution(values),
        };
        result.unwrap_or_else(|err| {
            log::warn!("{kind} for {values:?} failed: {err}");
            fallback_text(kind, &err).to_owned()
        })
    }
}

/// Returns the text shown in place of advice that failed with `err`.
#[must_use]
pub fn fallback_text(kind: AdviceKind, err: &AdviceError) -> &'static str {
    match (kind, err) {
        (AdviceKind::Hint, _) => HINT_FALLBACK,
        (AdviceKind::Solution, AdviceError::NoSolution) => NO_SOLUTION_FALLBACK,
        (AdviceKind::Solution, AdviceError::Disabled | AdviceError::Unavailable { .. }) => {
            UNAVAILABLE_FALLBACK
        }
    }
}
