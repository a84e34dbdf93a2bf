//! Parse and rank five-card poker hands with optional `no_std` support.
//!
//! Hands are written as five space separated tokens such as
//! `"2D 3D 4S 5H 6D"` and ranked with a reduced rule set: a straight beats
//! any three of a kind, which beats any pair, which beats the highest card.
//! Flushes, full houses and four of a kind are not distinguished.
//!
//! # Example
//!
//! ```
//! use handrank::Hand;
//!
//! let mut hands = Hand::parse_batch(["2H 2D 3S 3C 4H", "5H 5D 6S 6C 7H", "8D 9D TD JD QD"])
//!     .unwrap();
//! Hand::sort(&mut hands);
//! assert_eq!(hands[2].to_string(), "8D 9D TD JD QD");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod strength;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, FormatError, HandError};
pub use hand::{CARDS_PER_HAND, Hand, HandInput};
pub use strength::{Groups, Strength};
