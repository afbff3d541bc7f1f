use crate::Pool;

/// A recorded move: the pool as it was before the move, and what the move did.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStep {
    pool: Pool,
    description: String,
}

impl HistoryStep {
    /// Creates a step from the pre-move pool and a description of the move.
    #[must_use]
    pub fn new(pool: Pool, description: impl Into<String>) -> Self {
        Self {
            pool,
            description: description.into(),
        }
    }

    /// Returns the pool snapshot taken before the move.
    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Returns the move description, for example `"8 ÷ 3 = 2.67"`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Splits the step into its pool snapshot and description.
    #[must_use]
    pub fn into_parts(self) -> (Pool, String) {
        (self.pool, self.description)
    }
}

/// The stack of moves made since the deal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    steps: Vec<HistoryStep>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Returns the number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no moves are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the steps, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryStep> + ExactSizeIterator {
        self.steps.iter()
    }

    /// Returns the most recent step.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryStep> {
        self.steps.last()
    }

    /// Records a step.
    pub fn push(&mut self, step: HistoryStep) {
        self.steps.push(step);
    }

    /// Removes and returns the most recent step.
    pub fn pop(&mut self) -> Option<HistoryStep> {
        self.steps.pop()
    }

    /// Removes every step.
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryStep;
    type IntoIter = std::slice::Iter<'a, HistoryStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::TokenIdAllocator;

    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut ids = TokenIdAllocator::new();
        let first = Pool::from_values([1.0, 2.0], &mut ids);
        let second = Pool::from_values([3.0], &mut ids);

        let mut history = History::new();
        assert!(history.is_empty());
        history.push(HistoryStep::new(first.clone(), "1 + 2 = 3"));
        history.push(HistoryStep::new(second.clone(), "3 × 8 = 24"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.last().map(HistoryStep::description), Some("3 × 8 = 24"));
        assert_eq!(
            history.iter().map(HistoryStep::description).collect::<Vec<_>>(),
            ["1 + 2 = 3", "3 × 8 = 24"]
        );

        assert_eq!(history.pop().map(|step| step.pool().clone()), Some(second));
        assert_eq!(history.pop().map(|step| step.pool().clone()), Some(first));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push(HistoryStep::new(Pool::default(), "x"));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
    }
}
