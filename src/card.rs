//! Card types and token parsing.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Lowest card rank (deuce).
pub const MIN_RANK: u8 = 2;

/// Highest card rank (ace).
pub const MAX_RANK: u8 = 14;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit for a symbol, ignoring case.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the canonical uppercase symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns the numeric rank (2 to 14) for a rank symbol, ignoring case.
#[must_use]
pub const fn rank_from_symbol(symbol: char) -> Option<u8> {
    match symbol.to_ascii_uppercase() {
        c @ '2'..='9' => Some(c as u8 - b'0'),
        'T' => Some(10),
        'J' => Some(11),
        'Q' => Some(12),
        'K' => Some(13),
        'A' => Some(14),
        _ => None,
    }
}

/// Returns the canonical symbol for a numeric rank.
#[must_use]
pub const fn rank_symbol(rank: u8) -> Option<char> {
    match rank {
        2..=9 => Some((b'0' + rank) as char),
        10 => Some('T'),
        11 => Some('J'),
        12 => Some('Q'),
        13 => Some('K'),
        14 => Some('A'),
        _ => None,
    }
}

/// A playing card.
///
/// Two cards are equal when both rank and suit are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::RankOutOfRange`] if `rank` is not in `2..=14`.
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if rank < MIN_RANK || rank > MAX_RANK {
            return Err(CardError::RankOutOfRange(rank));
        }
        Ok(Self { rank, suit })
    }

    /// Creates a card from a rank already known to be in range.
    pub(crate) const fn from_parts(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parses a two character token such as `"TD"` or `"as"`.
    ///
    /// ```
    /// use handrank::{Card, Suit};
    ///
    /// let card = Card::parse("qh").unwrap();
    /// assert_eq!(card.rank(), 12);
    /// assert_eq!(card.suit(), Suit::Hearts);
    /// assert_eq!(card.to_string(), "QH");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not two characters long or if either
    /// character is not recognized.
    pub fn parse(token: &str) -> Result<Self, CardError> {
        let mut chars = token.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidLength(token.chars().count()));
        };

        let rank = rank_from_symbol(rank).ok_or(CardError::InvalidRank(rank))?;
        let suit = Suit::from_symbol(suit).ok_or(CardError::InvalidSuit(suit))?;
        Ok(Self::from_parts(rank, suit))
    }

    /// Returns the rank (2 to 14, where 11 = Jack and 14 = Ace).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rank is validated on construction.
        let rank = rank_symbol(self.rank).unwrap_or('?');
        write!(f, "{rank}{}", self.suit)
    }
}
