//! Game state for the 24 game.
//!
//! A [`Session`] holds the [`Pool`] of number tokens in play, the [`History`]
//! of moves, the current selection and any advice text. Players pick a token,
//! an operator and a second token; [`Pool::apply`] replaces the two operands
//! with the result. The game is won when a single token worth 24 remains.
//!
//! # Examples
//!
//! ```
//! use twentyfour_core::Operator;
//! use twentyfour_game::{Action, Phase, Session, TokenId};
//!
//! fn play(session: Session, lhs: TokenId, op: Operator, rhs: TokenId) -> Session {
//!     session
//!         .transition(Action::SelectToken(lhs))
//!         .transition(Action::ChooseOperator(op))
//!         .transition(Action::SelectToken(rhs))
//! }
//!
//! let session = Session::new("8 8 3 3".parse()?);
//! let [eight_a, eight_b, three_a, three_b] = [0, 1, 2, 3].map(|i| session.pool().tokens()[i].id());
//!
//! let session = play(session, eight_a, Operator::Divide, three_a);
//! let t1 = session.pool().tokens()[2].id();
//! let session = play(session, three_b, Operator::Subtract, t1);
//! let t2 = session.pool().tokens()[1].id();
//! let session = play(session, eight_b, Operator::Divide, t2);
//!
//! assert_eq!(session.phase(), Phase::Won);
//! assert_eq!(session.pool().tokens()[0].label(), "(8 ÷ (3 - (8 ÷ 3)))");
//! # Ok::<(), twentyfour_core::ParseDealError>(())
//! ```

pub use self::{history::*, pool::*, session::*, token::*};

mod history;
mod pool;
mod session;
mod token;
