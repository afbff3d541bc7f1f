use std::num::NonZero;

use twentyfour_core::{Card, Deal};
use twentyfour_solver::is_solvable;

use crate::{CardSource, DealSeed, RandomCards};

/// Default number of draws before [`DealGenerator`] gives up and falls back.
///
/// About 88% of all 1-9 deals are solvable, so hitting this cap with a fair
/// source is practically impossible.
pub const DEFAULT_MAX_ATTEMPTS: NonZero<usize> = NonZero::new(10_000).unwrap();

/// Deal returned when the attempt cap is reached: `1 × 2 × 3 × 4 = 24`.
pub const FALLBACK_DEAL: Deal = Deal::new([Card::ALL[0], Card::ALL[1], Card::ALL[2], Card::ALL[3]]);

/// The result of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedDeal {
    /// The solvable deal.
    pub deal: Deal,
    /// The seed the deal was generated from, if a seed was used.
    pub seed: Option<DealSeed>,
    /// Number of draws of four cards that were made.
    pub attempts: usize,
    /// `true` if the attempt cap was reached and [`FALLBACK_DEAL`] was returned.
    pub fell_back: bool,
}

/// Generates solvable deals by rejection sampling.
///
/// Each attempt draws four cards from a [`CardSource`] and keeps the draw only
/// if [`is_solvable`] accepts it. By default the loop stops after
/// [`DEFAULT_MAX_ATTEMPTS`] and returns [`FALLBACK_DEAL`];
/// [`DealGenerator::unbounded`] removes the cap.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use twentyfour_core::Deal;
/// use twentyfour_generator::{DealGenerator, ScriptedCards};
///
/// let unsolvable: Deal = "1 1 1 1".parse()?;
/// let solvable: Deal = "8 8 3 3".parse()?;
/// let mut source = ScriptedCards::from_deals([unsolvable, solvable]).unwrap();
///
/// let generated = DealGenerator::new().generate_with_source(&mut source);
/// assert_eq!(generated.deal, solvable);
/// assert_eq!(generated.attempts, 2);
/// # Ok::<(), twentyfour_core::ParseDealError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealGenerator {
    max_attempts: Option<NonZero<usize>>,
}

impl Default for DealGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DealGenerator {
    /// Creates a generator capped at [`DEFAULT_MAX_ATTEMPTS`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }

    /// Creates a generator that keeps drawing until it finds a solvable deal.
    ///
    /// With a source that never produces a solvable deal this never returns.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Creates a generator capped at `max_attempts` draws.
    #[must_use]
    pub const fn with_max_attempts(max_attempts: NonZero<usize>) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    /// Returns the attempt cap, or `None` if the generator is unbounded.
    #[must_use]
    pub const fn max_attempts(&self) -> Option<NonZero<usize>> {
        self.max_attempts
    }

    /// Generates a deal from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedDeal {
        self.generate_with_seed(DealSeed::random())
    }

    /// Generates a deal from `seed`.
    ///
    /// The same seed always produces the same deal.
    #[must_use]
    pub fn generate_with_seed(&self, seed: DealSeed) -> GeneratedDeal {
        let mut source = RandomCards::new(seed.rng());
        GeneratedDeal {
            seed: Some(seed),
            ..self.generate_with_source(&mut source)
        }
    }

    /// Generates a deal drawing cards from `source`.
    pub fn generate_with_source<S>(&self, source: &mut S) -> GeneratedDeal
    where
        S: CardSource + ?Sized,
    {
        let mut attempts = 0;
        loop {
            if let Some(max_attempts) = self.max_attempts
                && attempts >= max_attempts.get()
            {
                log::warn!(
                    "no solvable deal after {attempts} attempts, falling back to {FALLBACK_DEAL}"
                );
                return GeneratedDeal {
                    deal: FALLBACK_DEAL,
                    seed: None,
                    attempts,
                    fell_back: true,
                };
            }

            attempts += 1;
            let deal = Deal::new([source.draw(), source.draw(), source.draw(), source.draw()]);
            if is_solvable(&deal.values()) {
                log::debug!("dealt {deal} after {attempts} attempt(s)");
                return GeneratedDeal {
                    deal,
                    seed: None,
                    attempts,
                    fell_back: false,
                };
            }
            log::trace!("rejected unsolvable deal {deal}");
        }
    }
}
