//! Five-card hands: parsing, rendering and ranking.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use log::debug;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::error::{FormatError, HandError};
use crate::strength::Strength;

/// Number of cards in a hand.
pub const CARDS_PER_HAND: usize = 5;

/// Separator between card tokens in an encoded hand.
pub const CARD_DELIMITER: char = ' ';

/// Raw input for [`Hand::parse`].
///
/// An input may be absent, which is reported as [`HandError::NullInput`]
/// rather than as a format error. Implemented for string types and for
/// `Option` of any input.
pub trait HandInput {
    /// Returns the encoded hand, or `None` when no input was given.
    fn encoded(&self) -> Option<&str>;
}

impl HandInput for &str {
    fn encoded(&self) -> Option<&str> {
        Some(*self)
    }
}

impl HandInput for String {
    fn encoded(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl HandInput for &String {
    fn encoded(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: HandInput> HandInput for Option<T> {
    fn encoded(&self) -> Option<&str> {
        self.as_ref().and_then(HandInput::encoded)
    }
}

/// A hand of five distinct cards.
///
/// Cards keep the order they were parsed in. Hands are ranked through
/// [`Hand::compare`]; two hands can rank equal while holding different cards,
/// which is why `Hand` itself does not implement [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards in parse order.
    cards: [Card; CARDS_PER_HAND],
    /// Precomputed ranking key.
    strength: Strength,
}

impl Hand {
    /// Builds a hand from five cards.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::DuplicateInHand`] if a card appears twice.
    pub fn from_cards(cards: [Card; CARDS_PER_HAND]) -> Result<Self, HandError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(FormatError::DuplicateInHand(*card).into());
            }
        }

        Ok(Self::from_distinct(cards))
    }

    /// Builds a hand from cards already known to be distinct.
    pub(crate) fn from_distinct(cards: [Card; CARDS_PER_HAND]) -> Self {
        Self {
            cards,
            strength: Strength::evaluate(&cards),
        }
    }

    /// Parses an encoded hand such as `"2D 3D 4S 5H 6D"`.
    ///
    /// Tokens are separated by a single space and are case insensitive.
    ///
    /// ```
    /// use handrank::{Hand, HandError};
    ///
    /// let hand = Hand::parse("2d 3D 4S 5h 6D").unwrap();
    /// assert_eq!(hand.to_string(), "2D 3D 4S 5H 6D");
    ///
    /// assert_eq!(Hand::parse(None::<&str>), Err(HandError::NullInput));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NullInput`] if the input is absent, or
    /// [`HandError::InvalidFormat`] if it is empty, does not hold exactly five
    /// valid cards, or repeats a card.
    pub fn parse(input: impl HandInput) -> Result<Self, HandError> {
        let encoded = input.encoded().ok_or(HandError::NullInput)?;
        Self::parse_encoded(encoded).inspect_err(|err| {
            debug!("rejected hand {encoded:?}: {err}");
        })
    }

    fn parse_encoded(encoded: &str) -> Result<Self, HandError> {
        if encoded.is_empty() {
            return Err(FormatError::Empty.into());
        }

        let cards = encoded
            .split(CARD_DELIMITER)
            .map(Card::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let cards: [Card; CARDS_PER_HAND] = cards
            .try_into()
            .map_err(|cards: Vec<Card>| FormatError::WrongCardCount(cards.len()))?;

        Self::from_cards(cards)
    }

    /// Parses a set of hands that are dealt together.
    ///
    /// Each hand is parsed with [`Hand::parse`]; in addition no card may
    /// appear in more than one hand.
    ///
    /// ```
    /// use handrank::{Card, Hand, HandError};
    ///
    /// let hands = Hand::parse_batch(["2D 3D 4D 5D 6D", "2C 3C 4C 5C 6C"]).unwrap();
    /// assert_eq!(hands.len(), 2);
    ///
    /// let err = Hand::parse_batch(["2D 3D 4D 5D 6D", "2C 3C 4C 5C 6D"]).unwrap_err();
    /// assert_eq!(err, HandError::DuplicateCard(Card::parse("6D").unwrap()));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first error of any hand, or [`HandError::DuplicateCard`]
    /// naming the first card found in two hands.
    pub fn parse_batch<I>(inputs: I) -> Result<Vec<Self>, HandError>
    where
        I: IntoIterator,
        I::Item: HandInput,
    {
        let hands = inputs
            .into_iter()
            .map(Self::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::with_capacity(hands.len() * CARDS_PER_HAND);
        for card in hands.iter().flat_map(|hand| hand.cards) {
            if !seen.insert(card) {
                debug!("card {card} dealt to more than one hand");
                return Err(HandError::DuplicateCard(card));
            }
        }

        Ok(hands)
    }

    /// Returns the cards in parse order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; CARDS_PER_HAND] {
        &self.cards
    }

    /// Returns the ranking key of this hand.
    #[must_use]
    pub const fn strength(&self) -> &Strength {
        &self.strength
    }

    /// Returns the card values sorted from highest to lowest.
    #[must_use]
    pub const fn values_desc(&self) -> &[u8; CARDS_PER_HAND] {
        self.strength.values()
    }

    /// Returns whether the card values form a consecutive run.
    #[must_use]
    pub const fn is_straight(&self) -> bool {
        self.strength.is_straight()
    }

    /// Compares two hands; the stronger hand is [`Ordering::Greater`].
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use handrank::Hand;
    ///
    /// let low = Hand::parse("2H 2D 3S 3C 4H").unwrap();
    /// let high = Hand::parse("5H 5D 6S 6C 7H").unwrap();
    /// assert_eq!(Hand::compare(&low, &high), Ordering::Less);
    /// ```
    #[must_use]
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        a.strength.cmp(&b.strength)
    }

    /// Sorts hands from weakest to strongest.
    ///
    /// The sort is stable, so equally ranked hands keep their relative order.
    pub fn sort(hands: &mut [Self]) {
        hands.sort_by(Self::compare);
    }

    /// Returns the strongest hand, or `None` if `hands` is empty.
    ///
    /// When several hands share the top rank the last of them is returned.
    #[must_use]
    pub fn best(hands: &[Self]) -> Option<&Self> {
        hands.iter().max_by(|a, b| Self::compare(a, b))
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, "{CARD_DELIMITER}")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
