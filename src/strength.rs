//! Hand strength evaluation.
//!
//! A [`Strength`] is the comparison key of a hand. Its derived ordering walks
//! the ranking stages in order: straight flag, three-of-a-kind groups, pair
//! groups and finally the card values from highest to lowest. Each stage is
//! only consulted when every earlier stage is equal.

use crate::card::{Card, MAX_RANK};
use crate::hand::CARDS_PER_HAND;

/// Number of cards sharing a rank that forms a pair.
const PAIR_SIZE: u8 = 2;

/// Number of cards sharing a rank that forms a three of a kind.
const THREE_OF_A_KIND_SIZE: u8 = 3;

/// Most groups of one size that fit in a hand (two pairs).
const MAX_GROUPS: usize = CARDS_PER_HAND / PAIR_SIZE as usize;

/// Rank values that occur an exact number of times in a hand.
///
/// Groups compare by count first, then by values from highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Groups {
    count: usize,
    values: [u8; MAX_GROUPS],
}

impl Groups {
    fn collect(counts: &[u8; MAX_RANK as usize + 1], size: u8) -> Self {
        let mut groups = Self {
            count: 0,
            values: [0; MAX_GROUPS],
        };

        // Walking ranks downward keeps values sorted high to low.
        for (rank, &count) in counts.iter().enumerate().rev() {
            if count == size && groups.count < MAX_GROUPS {
                groups.values[groups.count] = rank as u8;
                groups.count += 1;
            }
        }

        groups
    }

    /// Returns the number of groups.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the group rank values, highest first.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values[..self.count]
    }
}

/// The comparison key of a hand.
///
/// Field order matters: the derived [`Ord`] is the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strength {
    straight: bool,
    three_of_a_kind: Groups,
    pairs: Groups,
    values: [u8; CARDS_PER_HAND],
}

impl Strength {
    /// Evaluates five cards.
    #[must_use]
    pub fn evaluate(cards: &[Card; CARDS_PER_HAND]) -> Self {
        let values = values_desc(cards);

        let mut counts = [0u8; MAX_RANK as usize + 1];
        for value in values {
            counts[value as usize] += 1;
        }

        Self {
            straight: is_straight(&values),
            three_of_a_kind: Groups::collect(&counts, THREE_OF_A_KIND_SIZE),
            pairs: Groups::collect(&counts, PAIR_SIZE),
            values,
        }
    }

    /// Returns whether the values form a consecutive run.
    #[must_use]
    pub const fn is_straight(&self) -> bool {
        self.straight
    }

    /// Returns the ranks that occur exactly three times.
    #[must_use]
    pub const fn three_of_a_kind(&self) -> &Groups {
        &self.three_of_a_kind
    }

    /// Returns the ranks that occur exactly twice.
    #[must_use]
    pub const fn pairs(&self) -> &Groups {
        &self.pairs
    }

    /// Returns the card values sorted from highest to lowest.
    #[must_use]
    pub const fn values(&self) -> &[u8; CARDS_PER_HAND] {
        &self.values
    }
}

/// Returns the card values sorted from highest to lowest.
fn values_desc(cards: &[Card; CARDS_PER_HAND]) -> [u8; CARDS_PER_HAND] {
    let mut values = cards.map(|card| card.rank());
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
}

fn is_straight(values: &[u8; CARDS_PER_HAND]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1] + 1)
}
