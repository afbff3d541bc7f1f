use twentyfour_core::{Deal, Operator, format_value, is_target};

use crate::{Token, TokenId, TokenIdAllocator};

/// Error returned when an operation on a [`Pool`] is rejected.
///
/// None of these are fatal; a rejected operation leaves the pool as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReduceError {
    /// Both operands are the same token.
    #[display("a token cannot be combined with itself")]
    SameToken,
    /// An operand is not in the pool.
    #[display("token {id} is not in play")]
    UnknownToken {
        /// The missing token.
        id: TokenId,
    },
    /// The id for the result is already taken.
    #[display("token id {id} is already in use")]
    IdInUse {
        /// The conflicting id.
        id: TokenId,
    },
    /// The divisor is zero, within tolerance.
    #[display("cannot divide by zero")]
    DivisionByZero,
}

/// The outcome of a successful [`Pool::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// The pool after the operation.
    pub pool: Pool,
    /// The id of the token holding the result.
    pub token: TokenId,
    /// What happened, for example `"8 ÷ 3 = 2.67"`.
    pub description: String,
}

/// The ordered sequence of tokens in play.
///
/// Token ids in a pool are unique. An operation removes its two operands and
/// appends the result at the end; the other tokens keep their order.
///
/// # Examples
///
/// ```
/// use twentyfour_core::{Deal, Operator};
/// use twentyfour_game::{Pool, TokenIdAllocator};
///
/// let mut ids = TokenIdAllocator::new();
/// let pool = Pool::from_deal("8 8 3 3".parse()?, &mut ids);
/// let [a, _, b, _] = [0, 1, 2, 3].map(|i| pool.tokens()[i].id());
///
/// let reduction = pool.apply(a, b, Operator::Divide, ids.allocate())?;
/// assert_eq!(reduction.pool.len(), 3);
/// assert_eq!(reduction.description, "8 ÷ 3 = 2.67");
/// assert_eq!(reduction.pool.tokens()[2].label(), "(8 ÷ 3)");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pool {
    tokens: Vec<Token>,
}

impl Pool {
    /// Creates a pool holding one token per card, in deal order.
    #[must_use]
    pub fn from_deal(deal: Deal, ids: &mut TokenIdAllocator) -> Self {
        Self::from_values(deal.values(), ids)
    }

    /// Creates a pool holding one token per value, in order.
    #[must_use]
    pub fn from_values<I>(values: I, ids: &mut TokenIdAllocator) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let tokens = values
            .into_iter()
            .map(|value| Token::new(ids.allocate(), value))
            .collect();
        Self { tokens }
    }

    /// Returns the tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the pool holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token with the given id.
    #[must_use]
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|token| token.id() == id)
    }

    /// Returns `true` if a token with the given id is in the pool.
    #[must_use]
    pub fn contains(&self, id: TokenId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the position of the token with the given id.
    #[must_use]
    pub fn position(&self, id: TokenId) -> Option<usize> {
        self.tokens.iter().position(|token| token.id() == id)
    }

    /// Returns the values in order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.tokens.iter().map(Token::value).collect()
    }

    /// Returns `true` if a single token remains and its value is 24 within
    /// tolerance.
    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self.tokens.as_slice(), [token] if is_target(token.value()))
    }

    /// Combines two tokens with an operator.
    ///
    /// `lhs` is the left operand. The result gets id `fresh_id` and the label
    /// `"(lhs op rhs)"` built from the operand labels. `self` is not modified.
    ///
    /// # Errors
    ///
    /// - [`ReduceError::SameToken`] if `lhs == rhs`.
    /// - [`ReduceError::UnknownToken`] if either operand is not in the pool.
    /// - [`ReduceError::IdInUse`] if `fresh_id` is already in the pool.
    /// - [`ReduceError::DivisionByZero`] if dividing by a value within
    ///   tolerance of zero.
    pub fn apply(
        &self,
        lhs: TokenId,
        rhs: TokenId,
        op: Operator,
        fresh_id: TokenId,
    ) -> Result<Reduction, ReduceError> {
        if lhs == rhs {
            return Err(ReduceError::SameToken);
        }
        let a = self.get(lhs).ok_or(ReduceError::UnknownToken { id: lhs })?;
        let b = self.get(rhs).ok_or(ReduceError::UnknownToken { id: rhs })?;
        if self.contains(fresh_id) {
            return Err(ReduceError::IdInUse { id: fresh_id });
        }
        // only division is partial
        let value = op
            .apply(a.value(), b.value())
            .ok_or(ReduceError::DivisionByZero)?;

        let label = format!("({} {op} {})", a.label(), b.label());
        let description = format!("{} {op} {} = {}", a.label(), b.label(), format_value(value));
        let result = Token::with_label(fresh_id, value, label);

        let mut tokens: Vec<Token> = self
            .tokens
            .iter()
            .filter(|token| token.id() != lhs && token.id() != rhs)
            .cloned()
            .collect();
        tokens.push(result);

        Ok(Reduction {
            pool: Self { tokens },
            token: fresh_id,
            description,
        })
    }
}
