use std::fmt::{self, Display};

use twentyfour_core::{Operator, format_value};

/// An arithmetic expression tree built by [`find_solution`](crate::find_solution).
///
/// Displays fully parenthesized, with every binary operation wrapped in its own
/// pair of parentheses.
///
/// # Examples
///
/// ```
/// use twentyfour_core::Operator;
/// use twentyfour_solver::Expression;
///
/// let expr = Expression::binary(
///     Operator::Multiply,
///     Expression::binary(Operator::Add, Expression::Number(2.0), Expression::Number(4.0)),
///     Expression::Number(4.0),
/// );
/// assert_eq!(expr.to_string(), "((2 + 4) × 4)");
/// assert_eq!(expr.value(), Some(24.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A literal value.
    Number(f64),
    /// A binary operation.
    Binary {
        /// The operator applied.
        op: Operator,
        /// The left operand.
        lhs: Box<Expression>,
        /// The right operand.
        rhs: Box<Expression>,
    },
}

impl Expression {
    /// Creates a binary expression node.
    #[must_use]
    pub fn binary(op: Operator, lhs: Expression, rhs: Expression) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Evaluates the expression.
    ///
    /// Returns `None` if any division in the tree has a near-zero divisor.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Binary { op, lhs, rhs } => op.apply(lhs.value()?, rhs.value()?),
        }
    }

    /// Returns the number of binary operations in the tree.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        match self {
            Self::Number(_) => 0,
            Self::Binary { lhs, rhs, .. } => 1 + lhs.operation_count() + rhs.operation_count(),
        }
    }

    /// Returns the literal values in the tree, left to right.
    #[must_use]
    pub fn numbers(&self) -> Vec<f64> {
        let mut out = Vec::new();
        self.collect_numbers(&mut out);
        out
    }

    fn collect_numbers(&self, out: &mut Vec<f64>) {
        match self {
            Self::Number(value) => out.push(*value),
            Self::Binary { lhs, rhs, .. } => {
                lhs.collect_numbers(out);
                rhs.collect_numbers(out);
            }
        }
    }

    /// Returns an operation that can be performed first.
    ///
    /// This is the leftmost node whose operands are both literal values.
    /// Returns `None` for a bare number.
    ///
    /// # Examples
    ///
    /// ```
    /// use twentyfour_solver::find_solution;
    ///
    /// let expr = find_solution(&[8.0, 8.0, 3.0, 3.0]).unwrap();
    /// let step = expr.first_step().unwrap();
    /// assert_eq!(step.to_string(), "8 ÷ 3");
    /// ```
    #[must_use]
    pub fn first_step(&self) -> Option<Step> {
        let Self::Binary { op, lhs, rhs } = self else {
            return None;
        };
        match (lhs.as_ref(), rhs.as_ref()) {
            (Self::Number(a), Self::Number(b)) => Some(Step {
                lhs: *a,
                op: *op,
                rhs: *b,
                result: op.apply(*a, *b)?,
            }),
            _ => lhs.first_step().or_else(|| rhs.first_step()),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", format_value(*value)),
            Self::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

/// A single operation on two literal values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// The left operand.
    pub lhs: f64,
    /// The operator.
    pub op: Operator,
    /// The right operand.
    pub rhs: f64,
    /// The value produced.
    pub result: f64,
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_value(self.lhs),
            self.op,
            format_value(self.rhs)
        )
    }
}
