//! A deck of cards for dealing hands that never share a card.

extern crate alloc;

use alloc::vec::Vec;
use log::trace;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
use crate::error::DealError;
use crate::hand::{CARDS_PER_HAND, Hand};

/// An ordered pile of distinct cards. Cards are drawn from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards; the last element is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck of 52 cards.
    ///
    /// Cards are drawn suit by suit in [`Suit::ALL`] order, deuce first.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push(Card::from_parts(rank, suit));
            }
        }

        cards.reverse();
        Self { cards }
    }

    /// Creates a deck shuffled with the given seed.
    ///
    /// The same seed always yields the same order.
    ///
    /// ```
    /// use handrank::Deck;
    ///
    /// assert_eq!(Deck::shuffled(7), Deck::shuffled(7));
    /// ```
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::new();
        deck.cards.shuffle(&mut rng);
        trace!("shuffled deck with seed {seed}");
        deck
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals one hand of five cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than five cards are left.
    /// No card is drawn in that case.
    pub fn deal_hand(&mut self) -> Result<Hand, DealError> {
        self.ensure_remaining(CARDS_PER_HAND)?;

        let start = self.cards.len() - CARDS_PER_HAND;
        let mut cards = [Card::from_parts(MIN_RANK, Suit::Clubs); CARDS_PER_HAND];
        // Top card first.
        for (slot, card) in cards.iter_mut().zip(self.cards.drain(start..).rev()) {
            *slot = card;
        }

        Ok(Hand::from_distinct(cards))
    }

    /// Deals `count` hands.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck cannot cover every
    /// hand. No card is drawn in that case.
    pub fn deal_hands(&mut self, count: usize) -> Result<Vec<Hand>, DealError> {
        self.ensure_remaining(count.saturating_mul(CARDS_PER_HAND))?;
        (0..count).map(|_| self.deal_hand()).collect()
    }

    fn ensure_remaining(&self, needed: usize) -> Result<(), DealError> {
        let remaining = self.cards.len();
        if remaining < needed {
            return Err(DealError::NotEnoughCards { needed, remaining });
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
