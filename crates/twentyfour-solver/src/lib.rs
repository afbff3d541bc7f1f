//! Exhaustive solvability search for the 24 game.
//!
//! [`is_solvable`] answers whether a multiset of numbers can be reduced to 24
//! by repeatedly replacing two numbers with the result of one binary operator.
//! [`find_solution`] runs the same search and returns a witness [`Expression`].
//!
//! Both functions are pure and keep no state between calls.
//!
//! # Examples
//!
//! ```
//! use twentyfour_solver::{find_solution, is_solvable};
//!
//! assert!(is_solvable(&[8.0, 8.0, 3.0, 3.0]));
//! assert!(!is_solvable(&[1.0, 1.0, 1.0, 1.0]));
//!
//! let expr = find_solution(&[8.0, 8.0, 3.0, 3.0]).unwrap();
//! assert!(twentyfour_core::is_target(expr.value().unwrap()));
//! ```

pub use self::{expression::*, search::*};

mod expression;
mod search;
