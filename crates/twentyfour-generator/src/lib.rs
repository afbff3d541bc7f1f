//! Solvable deal generation for the 24 game.
//!
//! [`DealGenerator`] draws four cards uniformly from 1-9 and redraws until the
//! solver confirms the deal can reach 24. The random source is pluggable
//! through [`CardSource`], and [`DealSeed`] makes deals reproducible.
//!
//! # Examples
//!
//! ```
//! use twentyfour_generator::{DealGenerator, DealSeed};
//! use twentyfour_solver::is_solvable;
//!
//! let generator = DealGenerator::new();
//! let generated = generator.generate();
//! assert!(is_solvable(&generated.deal.values()));
//!
//! // Seeded generation is reproducible
//! let seed = DealSeed::from_phrase("daily puzzle");
//! assert_eq!(
//!     generator.generate_with_seed(seed).deal,
//!     generator.generate_with_seed(seed).deal,
//! );
//! ```

pub use self::{card_source::*, generator::*, seed::*};

mod card_source;
mod generator;
mod seed;
