//! Core data types for the 24 game.
//!
//! This crate provides the small set of types shared by the solver, the deal
//! generator, and the game session.
//!
//! # Overview
//!
//! 1. **Tolerance** - [`EPSILON`], [`TARGET`] and the comparison helpers used for
//!    win detection and division guarding.
//! 2. **Cards and deals** - [`Card`] is a single integer in 1-9, [`Deal`] is the
//!    four cards dealt at the start of a game.
//! 3. **Operators** - [`Operator`] is one of the four binary arithmetic operators.
//!    Division is partial and returns `None` for a near-zero divisor.
//! 4. **Formatting** - [`format_value`] renders a floating point value the way
//!    players expect to read it (`8`, `2.67`, `-2`).
//!
//! # Examples
//!
//! ```
//! use twentyfour_core::{Deal, Operator, is_target};
//!
//! let deal: Deal = "8 8 3 3".parse()?;
//! let [a, b, c, d] = deal.values();
//!
//! let third = Operator::Divide.apply(a, c).unwrap();
//! let rest = Operator::Subtract.apply(d, third).unwrap();
//! let result = Operator::Divide.apply(b, rest).unwrap();
//! assert!(is_target(result));
//! # Ok::<(), twentyfour_core::ParseDealError>(())
//! ```

pub use self::{card::*, format::*, operator::*, tolerance::*};

mod card;
mod format;
mod operator;
mod tolerance;
