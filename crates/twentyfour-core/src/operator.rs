//! Binary arithmetic operators.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::is_near_zero;

/// One of the four binary operators a player may apply.
///
/// Every operator takes its left operand first. [`Operator::Divide`] is partial:
/// [`Operator::apply`] returns `None` when the divisor is within
/// [`EPSILON`](crate::EPSILON) of zero.
///
/// # Examples
///
/// ```
/// use twentyfour_core::Operator;
///
/// assert_eq!(Operator::Subtract.apply(3.0, 5.0), Some(-2.0));
/// assert_eq!(Operator::Divide.apply(8.0, 4.0), Some(2.0));
/// assert_eq!(Operator::Divide.apply(5.0, 0.0), None);
///
/// let op: Operator = "*".parse()?;
/// assert_eq!(op, Operator::Multiply);
/// assert_eq!(op.to_string(), "×");
/// # Ok::<(), twentyfour_core::ParseOperatorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction, left minus right.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division, left over right.
    Divide,
}

impl Operator {
    /// All operators in display order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the symbol shown to players.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Returns the plain ASCII symbol (`+`, `-`, `*`, `/`).
    #[must_use]
    pub const fn ascii_symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Applies the operator to `lhs` and `rhs`.
    ///
    /// Returns `None` for a division whose divisor is near zero.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide => (!is_near_zero(rhs)).then(|| lhs / rhs),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when parsing an [`Operator`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown operator {text:?}")]
pub struct ParseOperatorError {
    text: String,
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Self::Add,
            "-" | "sub" | "minus" => Self::Subtract,
            "*" | "x" | "×" | "mul" | "times" => Self::Multiply,
            "/" | "÷" | "div" => Self::Divide,
            _ => {
                return Err(ParseOperatorError {
                    text: s.trim().to_owned(),
                });
            }
        };
        Ok(op)
    }
}
