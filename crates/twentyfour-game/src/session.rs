use std::mem;

use twentyfour_core::{Deal, Operator};
use twentyfour_generator::DealGenerator;

use crate::{History, HistoryStep, Pool, ReduceError, TokenId, TokenIdAllocator};

/// Kind of advice a player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum AdviceKind {
    /// A nudge toward a first move.
    #[display("hint")]
    Hint,
    /// A complete expression reaching 24.
    #[display("solution")]
    Solution,
}

impl AdviceKind {
    /// All advice kinds.
    pub const ALL: [Self; 2] = [Self::Hint, Self::Solution];
}

/// Advice text received so far, and which requests are still outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advice {
    hint: Option<String>,
    solution: Option<String>,
    hint_pending: bool,
    solution_pending: bool,
}

impl Advice {
    /// Returns the latest text received for `kind`.
    #[must_use]
    pub fn text(&self, kind: AdviceKind) -> Option<&str> {
        match kind {
            AdviceKind::Hint => self.hint.as_deref(),
            AdviceKind::Solution => self.solution.as_deref(),
        }
    }

    /// Returns `true` if a request for `kind` has not been answered yet.
    #[must_use]
    pub fn is_pending(&self, kind: AdviceKind) -> bool {
        match kind {
            AdviceKind::Hint => self.hint_pending,
            AdviceKind::Solution => self.solution_pending,
        }
    }

    fn mark_pending(&mut self, kind: AdviceKind) {
        match kind {
            AdviceKind::Hint => self.hint_pending = true,
            AdviceKind::Solution => self.solution_pending = true,
        }
    }

    fn store(&mut self, kind: AdviceKind, text: String) {
        match kind {
            AdviceKind::Hint => {
                self.hint = Some(text);
                self.hint_pending = false;
            }
            AdviceKind::Solution => {
                self.solution = Some(text);
                self.solution_pending = false;
            }
        }
    }
}

/// The selected token, and the operator waiting for a second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The selected token, used as the left operand.
    pub token: TokenId,
    /// The operator chosen after selecting the token, if any.
    pub operator: Option<Operator>,
}

impl Selection {
    const fn token(token: TokenId) -> Self {
        Self {
            token,
            operator: None,
        }
    }
}

/// Where the session is in the select / operator / select cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// Nothing is selected.
    Idle,
    /// One token is selected.
    OneSelected(TokenId),
    /// One token is selected and an operator is waiting for the second operand.
    OneSelectedWithOperator(TokenId, Operator),
    /// The pool is a single token worth 24. Only a reset leaves this phase.
    Won,
}

/// Player (or driver) input to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Selects a token, or completes a pending operation with it.
    SelectToken(TokenId),
    /// Chooses the operator for the selected token.
    ChooseOperator(Operator),
    /// Reverts the most recent move.
    Undo,
    /// Starts over with a new deal.
    Reset(Deal),
    /// Asks for advice on the current pool.
    RequestAdvice(AdviceKind),
    /// Delivers advice text.
    ReceiveAdvice {
        /// Which request this answers.
        kind: AdviceKind,
        /// The advice text.
        text: String,
    },
}

/// Why an action had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BlockReason {
    /// The game is won; only a reset is accepted.
    #[display("the game is already won")]
    GameWon,
    /// An operator was chosen with no token selected.
    #[display("select a number first")]
    NoSelection,
    /// The token is not in the pool.
    #[display("token {_0} is not in play")]
    UnknownToken(TokenId),
    /// There is no move to undo.
    #[display("nothing to undo")]
    NothingToUndo,
    /// Advice needs at least two tokens.
    #[display("not enough numbers left")]
    NotEnoughTokens,
}

/// What an action did.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum Outcome {
    /// A token became the selection.
    Selected(TokenId),
    /// The selection was cleared.
    Deselected,
    /// An operator now waits for the second operand.
    OperatorChosen(Operator),
    /// A move was made and its result is now selected.
    Reduced {
        /// The result token.
        token: TokenId,
        /// The move, for example `"8 ÷ 3 = 2.67"`.
        description: String,
    },
    /// A move was made and it reached 24.
    Won {
        /// The winning move.
        description: String,
    },
    /// The most recent move was reverted.
    Undone {
        /// The reverted move.
        description: String,
    },
    /// A new deal was started.
    Reset,
    /// Advice was requested; the driver should dispatch it.
    AdviceRequested {
        /// The kind of advice.
        kind: AdviceKind,
        /// The pool values, in order.
        values: Vec<f64>,
    },
    /// Advice text was stored.
    AdviceUpdated(AdviceKind),
    /// The move was invalid and the session is unchanged.
    Rejected(ReduceError),
    /// The action was not applicable and the session is unchanged.
    Ignored(BlockReason),
}

/// A game of 24.
///
/// A session owns the pool of tokens in play, the move history, the current
/// selection and any advice received. Every change goes through
/// [`Session::apply`], which consumes the session and returns the next one
/// together with an [`Outcome`].
///
/// # Examples
///
/// ```
/// use twentyfour_core::Operator;
/// use twentyfour_game::{Action, Outcome, Phase, Session};
///
/// let session = Session::new("8 8 3 3".parse()?);
/// let [a, b, c, d] = [0, 1, 2, 3].map(|i| session.pool().tokens()[i].id());
///
/// let (session, _) = session.apply(Action::SelectToken(a));
/// let (session, _) = session.apply(Action::ChooseOperator(Operator::Divide));
/// let (session, outcome) = session.apply(Action::SelectToken(c));
/// assert!(outcome.is_reduced());
/// assert_eq!(session.pool().len(), 3);
/// assert_eq!(session.history_len(), 1);
///
/// let (session, outcome) = session.apply(Action::Undo);
/// assert!(outcome.is_undone());
/// assert_eq!(session.phase(), Phase::Idle);
/// assert_eq!(session.pool().len(), 4);
/// # let _ = (b, d);
/// # Ok::<(), twentyfour_core::ParseDealError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    deal: Deal,
    ids: TokenIdAllocator,
    pool: Pool,
    history: History,
    selection: Option<Selection>,
    won: bool,
    advice: Advice,
}

impl Session {
    /// Starts a session with the given deal.
    #[must_use]
    pub fn new(deal: Deal) -> Self {
        let mut ids = TokenIdAllocator::new();
        let pool = Pool::from_deal(deal, &mut ids);
        Self {
            deal,
            ids,
            pool,
            history: History::new(),
            selection: None,
            won: false,
            advice: Advice::default(),
        }
    }

    /// Starts a session with a freshly generated deal.
    #[must_use]
    pub fn generate(generator: &DealGenerator) -> Self {
        let generated = generator.generate();
        log::info!("new deal {}", generated.deal);
        Self::new(generated.deal)
    }

    /// Applies an action and reports what happened.
    ///
    /// Actions that do not apply leave the session unchanged and report
    /// [`Outcome::Ignored`]; moves the arithmetic rejects report
    /// [`Outcome::Rejected`].
    #[must_use]
    pub fn apply(mut self, action: Action) -> (Self, Outcome) {
        let outcome = match action {
            Action::SelectToken(id) => self.select_token(id),
            Action::ChooseOperator(op) => self.choose_operator(op),
            Action::Undo => self.undo(),
            Action::Reset(deal) => self.reset(deal),
            Action::RequestAdvice(kind) => self.request_advice(kind),
            Action::ReceiveAdvice { kind, text } => {
                self.advice.store(kind, text);
                Outcome::AdviceUpdated(kind)
            }
        };
        log::debug!("{outcome:?} -> {:?}", self.phase());
        (self, outcome)
    }

    /// Applies an action, discarding the outcome.
    #[must_use]
    pub fn transition(self, action: Action) -> Self {
        self.apply(action).0
    }

    fn select_token(&mut self, id: TokenId) -> Outcome {
        if self.won {
            return Outcome::Ignored(BlockReason::GameWon);
        }
        if !self.pool.contains(id) {
            return Outcome::Ignored(BlockReason::UnknownToken(id));
        }
        match self.selection {
            Some(selection) if selection.token == id => {
                self.selection = None;
                Outcome::Deselected
            }
            Some(Selection {
                token: lhs,
                operator: Some(op),
            }) => self.reduce(lhs, id, op),
            None | Some(Selection { operator: None, .. }) => {
                self.selection = Some(Selection::token(id));
                Outcome::Selected(id)
            }
        }
    }

    fn reduce(&mut self, lhs: TokenId, rhs: TokenId, op: Operator) -> Outcome {
        let reduction = match self.pool.apply(lhs, rhs, op, self.ids.allocate()) {
            Ok(reduction) => reduction,
            Err(err) => return Outcome::Rejected(err),
        };

        let previous = mem::replace(&mut self.pool, reduction.pool);
        self.history
            .push(HistoryStep::new(previous, reduction.description.clone()));

        if self.pool.is_won() {
            self.won = true;
            self.selection = None;
            Outcome::Won {
                description: reduction.description,
            }
        } else {
            self.selection = Some(Selection::token(reduction.token));
            Outcome::Reduced {
                token: reduction.token,
                description: reduction.description,
            }
        }
    }

    fn choose_operator(&mut self, op: Operator) -> Outcome {
        if self.won {
            return Outcome::Ignored(BlockReason::GameWon);
        }
        let Some(selection) = &mut self.selection else {
            return Outcome::Ignored(BlockReason::NoSelection);
        };
        selection.operator = Some(op);
        Outcome::OperatorChosen(op)
    }

    fn undo(&mut self) -> Outcome {
        if self.won {
            return Outcome::Ignored(BlockReason::GameWon);
        }
        let Some(step) = self.history.pop() else {
            return Outcome::Ignored(BlockReason::NothingToUndo);
        };
        let (pool, description) = step.into_parts();
        self.pool = pool;
        self.selection = None;
        Outcome::Undone { description }
    }

    fn reset(&mut self, deal: Deal) -> Outcome {
        self.deal = deal;
        self.pool = Pool::from_deal(deal, &mut self.ids);
        self.history.clear();
        self.selection = None;
        self.won = false;
        self.advice = Advice::default();
        Outcome::Reset
    }

    fn request_advice(&mut self, kind: AdviceKind) -> Outcome {
        if self.won {
            return Outcome::Ignored(BlockReason::GameWon);
        }
        if self.pool.len() < 2 {
            return Outcome::Ignored(BlockReason::NotEnoughTokens);
        }
        self.advice.mark_pending(kind);
        Outcome::AdviceRequested {
            kind,
            values: self.pool.values(),
        }
    }

    /// Returns the deal the session started from.
    #[must_use]
    pub fn deal(&self) -> Deal {
        self.deal
    }

    /// Returns the tokens in play.
    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Returns the moves made since the deal.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the number of moves made since the deal.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if [`Action::Undo`] would revert a move.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.won && !self.history.is_empty()
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.won {
            return Phase::Won;
        }
        match self.selection {
            None => Phase::Idle,
            Some(Selection {
                token,
                operator: None,
            }) => Phase::OneSelected(token),
            Some(Selection {
                token,
                operator: Some(op),
            }) => Phase::OneSelectedWithOperator(token, op),
        }
    }

    /// Returns `true` if the game is won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Returns the advice received so far.
    #[must_use]
    pub fn advice(&self) -> &Advice {
        &self.advice
    }

    /// Returns the latest hint text.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.advice.text(AdviceKind::Hint)
    }

    /// Returns the latest solution text.
    #[must_use]
    pub fn solution(&self) -> Option<&str> {
        self.advice.text(AdviceKind::Solution)
    }

    /// Returns `true` if a request for `kind` has not been answered yet.
    #[must_use]
    pub fn is_advice_pending(&self, kind: AdviceKind) -> bool {
        self.advice.is_pending(kind)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use twentyfour_core::approx_eq;
    use twentyfour_solver::is_solvable;

    use super::*;

    fn session(deal: &str) -> Session {
        Session::new(deal.parse().expect("valid deal"))
    }

    fn id_at(session: &Session, index: usize) -> TokenId {
        session.pool().tokens()[index].id()
    }

    fn apply_all(mut session: Session, actions: impl IntoIterator<Item = Action>) -> Session {
        for action in actions {
            session = session.transition(action);
        }
        session
    }

    fn make_move(session: Session, lhs: TokenId, op: Operator, rhs: TokenId) -> (Session, Outcome) {
        let session = apply_all(
            session,
            [Action::SelectToken(lhs), Action::ChooseOperator(op)],
        );
        session.apply(Action::SelectToken(rhs))
    }

    #[test]
    fn test_new_session() {
        let session = session("8 8 3 3");
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.pool().values(), vec![8.0, 8.0, 3.0, 3.0]);
        assert_eq!(session.history_len(), 0);
        assert!(!session.can_undo());
        assert!(!session.is_won());
        assert_eq!(session.deal().to_string(), "8 8 3 3");
        assert_eq!(session.hint(), None);
        assert_eq!(session.solution(), None);
    }

    #[test]
    fn test_generate_deals_solvable_session() {
        let session = Session::generate(&DealGenerator::new());
        assert_eq!(session.pool().len(), 4);
        assert!(is_solvable(&session.pool().values()));
    }

    #[test]
    fn test_select_deselect_and_switch() {
        let s = session("1 2 3 4");
        let a = id_at(&s, 0);
        let b = id_at(&s, 1);

        let (s, outcome) = s.apply(Action::SelectToken(a));
        assert_eq!(outcome, Outcome::Selected(a));
        assert_eq!(s.phase(), Phase::OneSelected(a));

        let (s, outcome) = s.apply(Action::SelectToken(b));
        assert_eq!(outcome, Outcome::Selected(b));
        assert_eq!(s.phase(), Phase::OneSelected(b));

        let (s, outcome) = s.apply(Action::SelectToken(b));
        assert_eq!(outcome, Outcome::Deselected);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_operator_needs_selection() {
        let s = session("1 2 3 4");
        let before = s.clone();
        let (s, outcome) = s.apply(Action::ChooseOperator(Operator::Add));
        assert_eq!(outcome, Outcome::Ignored(BlockReason::NoSelection));
        assert_eq!(s, before);
    }

    #[test]
    fn test_operator_can_be_replaced() {
        let s = session("1 2 3 4");
        let a = id_at(&s, 0);
        let s = apply_all(
            s,
            [
                Action::SelectToken(a),
                Action::ChooseOperator(Operator::Add),
                Action::ChooseOperator(Operator::Multiply),
            ],
        );
        assert_eq!(
            s.phase(),
            Phase::OneSelectedWithOperator(a, Operator::Multiply)
        );
        assert_eq!(
            s.selection(),
            Some(Selection {
                token: a,
                operator: Some(Operator::Multiply)
            })
        );
    }

    #[test]
    fn test_reselecting_with_pending_operator_clears_selection() {
        let s = session("1 2 3 4");
        let a = id_at(&s, 0);
        let (s, outcome) = make_move(s, a, Operator::Add, a);
        assert_eq!(outcome, Outcome::Deselected);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.pool().len(), 4);
    }

    #[test]
    fn test_unknown_token_is_ignored() {
        let s = session("1 2 3 4");
        let a = id_at(&s, 0);
        let missing = TokenId::new(1000);
        let s = s.transition(Action::SelectToken(a));
        let (s, outcome) = s.apply(Action::SelectToken(missing));
        assert_eq!(outcome, Outcome::Ignored(BlockReason::UnknownToken(missing)));
        assert_eq!(s.phase(), Phase::OneSelected(a));

        let s = s.transition(Action::ChooseOperator(Operator::Add));
        let (s, outcome) = s.apply(Action::SelectToken(missing));
        assert!(outcome.is_ignored());
        assert_eq!(s.phase(), Phase::OneSelectedWithOperator(a, Operator::Add));
    }

    #[test]
    fn test_move_replaces_operands_and_selects_result() {
        let s = session("1 2 3 4");
        let (s, outcome) = make_move(s.clone(), id_at(&s, 1), Operator::Multiply, id_at(&s, 3));
        let Outcome::Reduced { token, description } = outcome else {
            panic!("expected a reduction, got {outcome:?}");
        };
        assert_eq!(description, "2 × 4 = 8");
        assert_eq!(s.pool().values(), vec![1.0, 3.0, 8.0]);
        assert_eq!(s.phase(), Phase::OneSelected(token));
        assert_eq!(s.history_len(), 1);
        assert!(s.can_undo());
    }

    #[test]
    fn test_division_by_zero_leaves_session_unchanged() {
        let s = session("3 3 8 8");
        let (s, _) = make_move(s.clone(), id_at(&s, 0), Operator::Subtract, id_at(&s, 1));
        let zero = id_at(&s, 2);
        assert!(approx_eq(s.pool().tokens()[2].value(), 0.0));

        let eight = id_at(&s, 0);
        let s = apply_all(
            s,
            [
                Action::SelectToken(eight),
                Action::ChooseOperator(Operator::Divide),
            ],
        );
        let before = s.clone();
        let (s, outcome) = s.apply(Action::SelectToken(zero));
        assert_eq!(outcome, Outcome::Rejected(ReduceError::DivisionByZero));
        assert_eq!(s.pool(), before.pool());
        assert_eq!(s.history_len(), before.history_len());
        assert_eq!(s.phase(), before.phase());
    }

    #[test]
    fn test_undo_restores_each_snapshot() {
        let s = session("1 2 3 4");
        let initial = s.pool().clone();

        let (s, _) = make_move(s.clone(), id_at(&s, 0), Operator::Add, id_at(&s, 1));
        let after_first = s.pool().clone();
        let (s, _) = make_move(s.clone(), id_at(&s, 0), Operator::Add, id_at(&s, 1));
        let after_second = s.pool().clone();
        let (s, _) = make_move(s.clone(), id_at(&s, 0), Operator::Multiply, id_at(&s, 1));
        assert_eq!(s.pool().len(), 1);
        assert!(!s.is_won());
        assert_eq!(
            s.history()
                .iter()
                .map(HistoryStep::description)
                .collect::<Vec<_>>(),
            ["1 + 2 = 3", "3 + 4 = 7", "(1 + 2) × (3 + 4) = 21"]
        );

        let (s, outcome) = s.apply(Action::Undo);
        assert_eq!(
            outcome,
            Outcome::Undone {
                description: "(1 + 2) × (3 + 4) = 21".to_owned()
            }
        );
        assert_eq!(s.pool(), &after_second);
        assert_eq!(s.phase(), Phase::Idle);
        let s = s.transition(Action::Undo);
        assert_eq!(s.pool(), &after_first);
        let s = s.transition(Action::Undo);
        assert_eq!(s.pool(), &initial);

        let (s, outcome) = s.apply(Action::Undo);
        assert_eq!(outcome, Outcome::Ignored(BlockReason::NothingToUndo));
        assert_eq!(s.pool(), &initial);
    }

    #[test]
    fn test_eight_eight_three_three_end_to_end() {
        let s = session("8 8 3 3");
        let [eight_a, eight_b, three_a, three_b] = [0, 1, 2, 3].map(|i| id_at(&s, i));

        let (s, outcome) = make_move(s, eight_a, Operator::Divide, three_a);
        let Outcome::Reduced { token: t1, .. } = outcome else {
            panic!("expected a reduction, got {outcome:?}");
        };
        assert_eq!(s.phase(), Phase::OneSelected(t1));

        let (s, outcome) = make_move(s, three_b, Operator::Subtract, t1);
        let Outcome::Reduced { token: t2, .. } = outcome else {
            panic!("expected a reduction, got {outcome:?}");
        };
        assert!(approx_eq(s.pool().get(t2).unwrap().value(), 1.0 / 3.0));

        let (s, outcome) = make_move(s, eight_b, Operator::Divide, t2);
        assert_eq!(
            outcome,
            Outcome::Won {
                description: "8 ÷ (3 - (8 ÷ 3)) = 24".to_owned()
            }
        );
        assert!(s.is_won());
        assert_eq!(s.phase(), Phase::Won);
        assert_eq!(s.selection(), None);
        assert_eq!(s.pool().len(), 1);
        assert_eq!(s.pool().tokens()[0].label(), "(8 ÷ (3 - (8 ÷ 3)))");
        assert!(!s.can_undo());

        let only = id_at(&s, 0);
        for action in [
            Action::Undo,
            Action::SelectToken(only),
            Action::ChooseOperator(Operator::Add),
            Action::RequestAdvice(AdviceKind::Hint),
        ] {
            let (next, outcome) = s.clone().apply(action);
            assert_eq!(outcome, Outcome::Ignored(BlockReason::GameWon));
            assert_eq!(next, s);
        }

        let (s, outcome) = s.apply(Action::Reset("1 2 3 4".parse().unwrap()));
        assert_eq!(outcome, Outcome::Reset);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.pool().values(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.history_len(), 0);
    }

    #[test]
    fn test_reset_uses_fresh_ids() {
        let s = session("1 2 3 4");
        let old: HashSet<TokenId> = s.pool().tokens().iter().map(|t| t.id()).collect();
        let (s, _) = make_move(s.clone(), id_at(&s, 0), Operator::Add, id_at(&s, 1));
        let s = s.transition(Action::Reset("1 2 3 4".parse().unwrap()));
        assert!(s.pool().tokens().iter().all(|t| !old.contains(&t.id())));
        assert_eq!(s.selection(), None);
    }

    #[test]
    fn test_advice_flow() {
        let s = session("8 8 3 3");
        let (s, outcome) = s.apply(Action::RequestAdvice(AdviceKind::Hint));
        assert_eq!(
            outcome,
            Outcome::AdviceRequested {
                kind: AdviceKind::Hint,
                values: vec![8.0, 8.0, 3.0, 3.0],
            }
        );
        assert!(s.is_advice_pending(AdviceKind::Hint));
        assert!(!s.is_advice_pending(AdviceKind::Solution));

        let before_pool = s.pool().clone();
        let s = apply_all(
            s,
            [
                Action::ReceiveAdvice {
                    kind: AdviceKind::Hint,
                    text: "first".to_owned(),
                },
                Action::ReceiveAdvice {
                    kind: AdviceKind::Hint,
                    text: "second".to_owned(),
                },
            ],
        );
        assert_eq!(s.hint(), Some("second"));
        assert!(!s.is_advice_pending(AdviceKind::Hint));
        assert_eq!(s.pool(), &before_pool);
        assert_eq!(s.phase(), Phase::Idle);

        let s = s.transition(Action::ReceiveAdvice {
            kind: AdviceKind::Solution,
            text: "(8 ÷ (3 - (8 ÷ 3))) = 24".to_owned(),
        });
        assert_eq!(s.solution(), Some("(8 ÷ (3 - (8 ÷ 3))) = 24"));

        let s = s.transition(Action::Reset("1 2 3 4".parse().unwrap()));
        assert_eq!(s.hint(), None);
        assert_eq!(s.solution(), None);
        assert_eq!(s.advice(), &Advice::default());
    }

    #[test]
    fn test_advice_needs_two_tokens() {
        let s = session("1 1 1 1");
        let (s, _) = make_move(s.clone(), id_at(&s, 0), Operator::Add, id_at(&s, 1));
        let (s, _) = make_move(s.clone(), id_at(&s, 0), Operator::Add, id_at(&s, 1));
        let (s, _) = make_move(s.clone(), id_at(&s, 0), Operator::Add, id_at(&s, 1));
        assert_eq!(s.pool().len(), 1);
        assert!(!s.is_won());

        let (s, outcome) = s.apply(Action::RequestAdvice(AdviceKind::Solution));
        assert_eq!(outcome, Outcome::Ignored(BlockReason::NotEnoughTokens));
        assert!(!s.is_advice_pending(AdviceKind::Solution));
        assert!(s.can_undo());
    }

    fn arb_action_seed() -> impl Strategy<Value = Vec<(u8, usize, usize)>> {
        prop::collection::vec((0u8..4, 0usize..4, 0usize..4), 0..40)
    }

    proptest! {
        #[test]
        fn test_random_play_keeps_invariants(
            values in proptest::array::uniform4(1u8..=9),
            steps in arb_action_seed(),
        ) {
            let mut s = Session::new(Deal::from_values(values).unwrap());
            for (kind, index, op) in steps {
                let len = s.pool().len();
                let action = match kind {
                    0 | 1 => Action::SelectToken(s.pool().tokens()[index % len].id()),
                    2 => Action::ChooseOperator(Operator::ALL[op]),
                    _ => Action::Undo,
                };
                let before = s.clone();
                let (next, outcome) = s.apply(action);
                s = next;

                prop_assert_eq!(s.pool().len() + s.history_len(), 4);
                let ids: HashSet<TokenId> = s.pool().tokens().iter().map(|t| t.id()).collect();
                prop_assert_eq!(ids.len(), s.pool().len());
                prop_assert_eq!(s.is_won(), s.pool().is_won());
                if outcome.is_ignored() || outcome.is_rejected() {
                    prop_assert_eq!(s.pool(), before.pool());
                    prop_assert_eq!(s.history_len(), before.history_len());
                }
                if outcome.is_undone() {
                    prop_assert_eq!(s.history_len() + 1, before.history_len());
                    prop_assert_eq!(s.pool(), before.history().last().unwrap().pool());
                }
            }
        }
    }
}
