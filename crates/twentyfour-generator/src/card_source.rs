use rand::Rng;
use twentyfour_core::{Card, Deal};

/// A source of cards for deal generation.
///
/// The generator only ever asks for one card at a time, so a source decides
/// both the distribution and the order of draws. Use [`RandomCards`] for real
/// games and [`ScriptedCards`] for deterministic tests.
pub trait CardSource {
    /// Draws the next card.
    fn draw(&mut self) -> Card;
}

/// Draws cards uniformly from 1-9 using a random number generator.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use twentyfour_generator::{CardSource as _, RandomCards};
///
/// let mut source = RandomCards::new(Pcg64::seed_from_u64(7));
/// let card = source.draw();
/// assert!((1..=9).contains(&card.value()));
/// ```
#[derive(Debug, Clone)]
pub struct RandomCards<R> {
    rng: R,
}

impl<R> RandomCards<R>
where
    R: Rng,
{
    /// Wraps a random number generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> CardSource for RandomCards<R>
where
    R: Rng,
{
    fn draw(&mut self) -> Card {
        Card::ALL[self.rng.random_range(0..Card::ALL.len())]
    }
}

/// Replays a fixed sequence of cards, starting over when it runs out.
///
/// # Examples
///
/// ```
/// use twentyfour_core::Deal;
/// use twentyfour_generator::{CardSource as _, ScriptedCards};
///
/// let deal: Deal = "1 2 3 4".parse()?;
/// let mut source = ScriptedCards::from_deals([deal]).unwrap();
/// let drawn: Vec<u8> = (0..6).map(|_| source.draw().value()).collect();
/// assert_eq!(drawn, [1, 2, 3, 4, 1, 2]);
/// # Ok::<(), twentyfour_core::ParseDealError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedCards {
    cards: Vec<Card>,
    next: usize,
}

impl ScriptedCards {
    /// Creates a source that replays `cards` in order.
    ///
    /// Returns `None` if `cards` is empty.
    #[must_use]
    pub fn new<I>(cards: I) -> Option<Self>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards: Vec<Card> = cards.into_iter().collect();
        (!cards.is_empty()).then_some(Self { cards, next: 0 })
    }

    /// Creates a source that replays the cards of each deal in order.
    ///
    /// Returns `None` if `deals` is empty.
    #[must_use]
    pub fn from_deals<I>(deals: I) -> Option<Self>
    where
        I: IntoIterator<Item = Deal>,
    {
        Self::new(deals.into_iter().flat_map(|deal| deal.cards()))
    }
}

impl CardSource for ScriptedCards {
    fn draw(&mut self) -> Card {
        let card = self.cards[self.next];
        self.next = (self.next + 1) % self.cards.len();
        card
    }
}
