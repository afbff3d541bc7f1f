//! Command-line arguments and the validated application configuration.

use std::num::NonZero;

use clap::Parser;
use twentyfour_generator::{DEFAULT_MAX_ATTEMPTS, DealGenerator, DealSeed};

/// Play the 24 game in the terminal.
///
/// Combine the four numbers with +, -, × and ÷ until a single 24 remains.
#[derive(Debug, Default, Parser)]
#[command(name = "twentyfour", author, version, about)]
pub struct Args {
    /// Seed for the first deal, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    pub seed: Option<DealSeed>,

    /// Phrase to derive the seed for the first deal from.
    #[arg(long, value_name = "TEXT")]
    pub phrase: Option<String>,

    /// Maximum draws per deal before falling back to a known deal.
    #[arg(long, value_name = "COUNT", conflicts_with = "unbounded")]
    pub max_attempts: Option<usize>,

    /// Keep drawing until a solvable deal is found.
    #[arg(long)]
    pub unbounded: bool,

    /// Turn off hints and solutions.
    #[arg(long)]
    pub no_advice: bool,
}

/// Errors found while validating [`Args`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// `--max-attempts` was zero.
    #[display("--max-attempts must be at least 1")]
    ZeroMaxAttempts,
    /// `--phrase` was empty.
    #[display("--phrase must not be empty")]
    EmptyPhrase,
}

/// How many draws the generator may make per deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptLimit {
    /// Give up after this many draws and use the fallback deal.
    Capped(NonZero<usize>),
    /// Never give up.
    Unbounded,
}

impl Default for AttemptLimit {
    fn default() -> Self {
        Self::Capped(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Where hints and solutions come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdviceMode {
    /// Computed locally by the solver.
    #[default]
    Local,
    /// Turned off; requests get the fallback text.
    Disabled,
}

/// Validated application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for the first deal. New deals are drawn from fresh seeds when
    /// `None`.
    pub seed: Option<DealSeed>,
    /// Generator attempt limit.
    pub attempts: AttemptLimit,
    /// Advice source.
    pub advice: AdviceMode,
}

impl AppConfig {
    /// Validates command-line arguments into a configuration.
    ///
    /// The parser rejects `--seed` with `--phrase` and `--max-attempts` with
    /// `--unbounded`. For [`Args`] built by hand, `seed` wins over `phrase`
    /// and `unbounded` wins over `max_attempts`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid argument.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let Args {
            seed,
            phrase,
            max_attempts,
            unbounded,
            no_advice,
        } = args;

        let seed = match (seed, phrase) {
            (Some(seed), _) => Some(seed),
            (None, Some(phrase)) if phrase.trim().is_empty() => {
                return Err(ConfigError::EmptyPhrase);
            }
            (None, Some(phrase)) => Some(DealSeed::from_phrase(&phrase)),
            (None, None) => None,
        };

        let attempts = match (max_attempts, unbounded) {
            (_, true) => AttemptLimit::Unbounded,
            (Some(count), false) => {
                AttemptLimit::Capped(NonZero::new(count).ok_or(ConfigError::ZeroMaxAttempts)?)
            }
            (None, false) => AttemptLimit::default(),
        };

        let advice = if no_advice {
            AdviceMode::Disabled
        } else {
            AdviceMode::Local
        };

        Ok(Self {
            seed,
            attempts,
            advice,
        })
    }

    /// Sets the seed for the first deal.
    #[must_use]
    pub fn with_seed(mut self, seed: DealSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the generator attempt limit.
    #[must_use]
    pub fn with_attempts(mut self, attempts: AttemptLimit) -> Self {
        self.attempts = attempts;
        self
    }

    /// Sets the advice source.
    #[must_use]
    pub fn with_advice(mut self, advice: AdviceMode) -> Self {
        self.advice = advice;
        self
    }

    /// Builds the deal generator for this configuration.
    #[must_use]
    pub fn generator(&self) -> DealGenerator {
        match self.attempts {
            AttemptLimit::Capped(max_attempts) => DealGenerator::with_max_attempts(max_attempts),
            AttemptLimit::Unbounded => DealGenerator::unbounded(),
        }
    }
}
