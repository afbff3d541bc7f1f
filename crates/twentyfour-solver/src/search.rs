use tinyvec::TinyVec;
use twentyfour_core::{Operator, is_target};

use crate::Expression;

/// Returns `true` if `values` can be reduced to a single value within
/// [`EPSILON`](twentyfour_core::EPSILON) of 24.
///
/// Every ordered pair of distinct positions is combined with each of the four
/// operators, the left operand always being the first position of the pair.
/// Divisions by a near-zero value are skipped. The search is exhaustive and
/// returns as soon as one branch reaches 24.
///
/// A single value is solvable iff it is 24; an empty slice is never solvable.
///
/// # Examples
///
/// ```
/// use twentyfour_solver::is_solvable;
///
/// // (2 + 4) × 3 + 6
/// assert!(is_solvable(&[2.0, 3.0, 4.0, 6.0]));
/// // 1 + 1 + 1 + 1 is as large as it gets
/// assert!(!is_solvable(&[1.0, 1.0, 1.0, 1.0]));
/// assert!(is_solvable(&[24.0]));
/// assert!(!is_solvable(&[]));
/// ```
#[must_use]
pub fn is_solvable(values: &[f64]) -> bool {
    match values {
        [] => false,
        [value] => is_target(*value),
        _ => {
            for (i, &lhs) in values.iter().enumerate() {
                for (j, &rhs) in values.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let mut next: TinyVec<[f64; 4]> = remove_pair(values, i, j);
                    for op in Operator::ALL {
                        let Some(result) = op.apply(lhs, rhs) else {
                            continue;
                        };
                        next.push(result);
                        if is_solvable(&next) {
                            return true;
                        }
                        next.pop();
                    }
                }
            }
            false
        }
    }
}

/// Searches for an expression over `values` that evaluates to 24.
///
/// Explores the same tree as [`is_solvable`] in the same order, so
/// `find_solution(v).is_some() == is_solvable(v)` for every input. Each value
/// is used exactly once in the returned expression.
///
/// # Examples
///
/// ```
/// use twentyfour_solver::find_solution;
///
/// let expr = find_solution(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(expr.to_string(), "(4 × (3 + (1 + 2)))");
///
/// assert!(find_solution(&[9.0, 9.0, 9.0, 9.0]).is_none());
/// ```
#[must_use]
pub fn find_solution(values: &[f64]) -> Option<Expression> {
    let terms: TinyVec<[Term; 4]> = values
        .iter()
        .map(|&value| Term {
            value,
            expr: Expression::Number(value),
        })
        .collect();
    search_expression(&terms)
}

#[derive(Debug, Clone)]
struct Term {
    value: f64,
    expr: Expression,
}

impl Default for Term {
    fn default() -> Self {
        Self {
            value: 0.0,
            expr: Expression::Number(0.0),
        }
    }
}

fn search_expression(terms: &[Term]) -> Option<Expression> {
    match terms {
        [] => None,
        [term] => is_target(term.value).then(|| term.expr.clone()),
        _ => {
            for (i, lhs) in terms.iter().enumerate() {
                for (j, rhs) in terms.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let mut next: TinyVec<[Term; 4]> = remove_pair(terms, i, j);
                    for op in Operator::ALL {
                        let Some(value) = op.apply(lhs.value, rhs.value) else {
                            continue;
                        };
                        next.push(Term {
                            value,
                            expr: Expression::binary(op, lhs.expr.clone(), rhs.expr.clone()),
                        });
                        if let Some(expr) = search_expression(&next) {
                            return Some(expr);
                        }
                        next.pop();
                    }
                }
            }
            None
        }
    }
}

fn remove_pair<T>(items: &[T], i: usize, j: usize) -> TinyVec<[T; 4]>
where
    T: Clone + Default,
{
    items
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != i && k != j)
        .map(|(_, item)| item.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use twentyfour_core::{Deal, is_target};

    use super::*;

    fn deal(s: &str) -> [f64; 4] {
        s.parse::<Deal>().expect("valid deal").values()
    }

    #[test]
    fn test_solvable_deals() {
        for s in ["2 3 4 6", "1 2 3 4", "8 8 3 3", "1 1 5 5", "3 3 7 7", "5 5 5 1"] {
            assert!(is_solvable(&deal(s)), "{s} should be solvable");
        }
        // 10 is not a card, check it directly: (10 × 10 - 4) ÷ 4
        assert!(is_solvable(&[4.0, 4.0, 10.0, 10.0]));
    }

    #[test]
    fn test_unsolvable_deals() {
        for s in ["1 1 1 1", "1 1 1 2", "9 9 9 9", "7 7 7 7", "1 2 1 2", "6 9 9 9"] {
            assert!(!is_solvable(&deal(s)), "{s} should not be solvable");
        }
    }

    #[test]
    fn test_base_cases() {
        assert!(!is_solvable(&[]));
        assert!(is_solvable(&[24.0]));
        assert!(is_solvable(&[24.0009]));
        assert!(!is_solvable(&[24.01]));
        assert!(is_solvable(&[4.0, 6.0]));
        assert!(is_solvable(&[3.0, 27.0]));
        assert!(!is_solvable(&[5.0, 5.0]));
    }

    #[test]
    fn test_order_sensitive_operators_are_tried_both_ways() {
        // 48 ÷ 2 needs 48 on the left even though 2 comes first
        assert!(is_solvable(&[2.0, 48.0]));
        // 1 - 3 = -2 is useless here, 3 - 1 = 2 is not
        assert!(is_solvable(&[1.0, 3.0, 12.0]));
        assert!(!is_solvable(&[1.0, 3.0, 13.0]));
    }

    #[test]
    fn test_zero_is_a_legal_value() {
        assert!(is_solvable(&[0.0, 24.0]));
        assert!(is_solvable(&[0.0, 4.0, 6.0]));
        assert!(!is_solvable(&[0.0, 0.0]));
    }

    #[test]
    fn test_find_solution_uses_fractions() {
        let expr = find_solution(&deal("8 8 3 3")).expect("8 8 3 3 is solvable");
        assert!(is_target(expr.value().unwrap()));
        assert_eq!(expr.operation_count(), 3);
    }

    #[test]
    fn test_find_solution_none_for_unsolvable() {
        assert_eq!(find_solution(&deal("1 1 1 1")), None);
        assert_eq!(find_solution(&[]), None);
    }

    proptest! {
        #[test]
        fn test_search_is_deterministic(values in proptest::array::uniform4(1u8..=9)) {
            let values = values.map(f64::from);
            prop_assert_eq!(is_solvable(&values), is_solvable(&values));
        }

        #[test]
        fn test_order_does_not_matter(values in proptest::array::uniform4(1u8..=9)) {
            let values = values.map(f64::from);
            let mut reversed = values;
            reversed.reverse();
            let mut rotated = values;
            rotated.rotate_left(1);
            let expected = is_solvable(&values);
            prop_assert_eq!(is_solvable(&reversed), expected);
            prop_assert_eq!(is_solvable(&rotated), expected);
        }

        #[test]
        fn test_witness_agrees_with_search(values in proptest::array::uniform4(1u8..=9)) {
            let values = values.map(f64::from);
            let witness = find_solution(&values);
            prop_assert_eq!(witness.is_some(), is_solvable(&values));
            if let Some(expr) = witness {
                prop_assert!(is_target(expr.value().unwrap()));
                let mut used = expr.numbers();
                used.sort_by(f64::total_cmp);
                let mut dealt = values.to_vec();
                dealt.sort_by(f64::total_cmp);
                prop_assert_eq!(used, dealt);
            }
        }
    }
}
