//! Cards and deals.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A single dealt number in the range 1-9.
///
/// # Examples
///
/// ```
/// use twentyfour_core::Card;
///
/// let card = Card::new(7).unwrap();
/// assert_eq!(card.value(), 7);
/// assert!(Card::new(0).is_none());
/// assert!(Card::new(10).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    /// The smallest card value.
    pub const MIN: u8 = 1;
    /// The largest card value.
    pub const MAX: u8 = 9;

    /// All cards from 1 to 9, in ascending order.
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a card, returning `None` if `value` is outside 1-9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the card's integer value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the card's value as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Four cards dealt at the start of a game.
///
/// A deal displays as space separated digits and parses from whitespace or
/// comma separated digits, or from a bare four digit string.
///
/// # Examples
///
/// ```
/// use twentyfour_core::Deal;
///
/// let deal: Deal = "8, 8, 3, 3".parse()?;
/// assert_eq!(deal.to_string(), "8 8 3 3");
/// assert_eq!(deal, "8833".parse()?);
/// assert_eq!(deal.values(), [8.0, 8.0, 3.0, 3.0]);
/// # Ok::<(), twentyfour_core::ParseDealError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deal([Card; 4]);

impl Deal {
    /// Number of cards in a deal.
    pub const LEN: usize = 4;

    /// Creates a deal from four cards.
    #[must_use]
    pub const fn new(cards: [Card; 4]) -> Self {
        Self(cards)
    }

    /// Creates a deal from four integers, returning `None` if any is outside 1-9.
    #[must_use]
    pub fn from_values(values: [u8; 4]) -> Option<Self> {
        let [a, b, c, d] = values;
        Some(Self([Card::new(a)?, Card::new(b)?, Card::new(c)?, Card::new(d)?]))
    }

    /// Returns the dealt cards.
    #[must_use]
    pub const fn cards(&self) -> [Card; 4] {
        self.0
    }

    /// Returns the dealt cards as floats, in deal order.
    #[must_use]
    pub fn values(&self) -> [f64; 4] {
        self.0.map(Card::as_f64)
    }
}

impl Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a} {b} {c} {d}")
    }
}

/// Error returned when parsing a [`Deal`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDealError {
    /// The input did not contain exactly four cards.
    #[display("expected 4 cards, found {found}")]
    WrongLength {
        /// Number of cards found in the input.
        found: usize,
    },
    /// A card was not an integer in 1-9.
    #[display("invalid card {text:?}, expected an integer from 1 to 9")]
    InvalidCard {
        /// The offending input fragment.
        text: String,
    },
}

impl FromStr for Deal {
    type Err = ParseDealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = if s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            (0..Self::LEN).map(|i| &s[i..=i]).collect()
        } else {
            s.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|part| !part.is_empty())
                .collect()
        };

        if parts.len() != Self::LEN {
            return Err(ParseDealError::WrongLength { found: parts.len() });
        }

        let mut cards = [Card(Card::MIN); 4];
        for (card, part) in cards.iter_mut().zip(&parts) {
            *card = part
                .parse::<u8>()
                .ok()
                .and_then(Card::new)
                .ok_or_else(|| ParseDealError::InvalidCard {
                    text: (*part).to_owned(),
                })?;
        }
        Ok(Self(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_bounds() {
        assert_eq!(Card::new(1).map(Card::value), Some(1));
        assert_eq!(Card::new(9).map(Card::value), Some(9));
        assert_eq!(Card::new(0), None);
        assert_eq!(Card::new(10), None);
        assert_eq!(Card::ALL.len(), 9);
    }

    #[test]
    fn test_parse_deal_formats() {
        let expected = Deal::from_values([1, 2, 3, 4]).unwrap();
        assert_eq!("1 2 3 4".parse::<Deal>(), Ok(expected));
        assert_eq!("1,2,3,4".parse::<Deal>(), Ok(expected));
        assert_eq!(" 1, 2,  3 4 ".parse::<Deal>(), Ok(expected));
        assert_eq!("1234".parse::<Deal>(), Ok(expected));
    }

    #[test]
    fn test_parse_deal_errors() {
        assert_eq!(
            "1 2 3".parse::<Deal>(),
            Err(ParseDealError::WrongLength { found: 3 })
        );
        assert_eq!(
            "1 2 3 4 5".parse::<Deal>(),
            Err(ParseDealError::WrongLength { found: 5 })
        );
        assert_eq!(
            "1 2 3 10".parse::<Deal>(),
            Err(ParseDealError::InvalidCard {
                text: "10".to_owned()
            })
        );
        assert_eq!(
            "0123".parse::<Deal>(),
            Err(ParseDealError::InvalidCard {
                text: "0".to_owned()
            })
        );
        assert_eq!(
            "a b c d".parse::<Deal>(),
            Err(ParseDealError::InvalidCard {
                text: "a".to_owned()
            })
        );
    }
}
