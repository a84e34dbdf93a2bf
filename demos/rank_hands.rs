//! Ranks five-card hands given on the command line.
//!
//! ```bash
//! $ cargo run --example rank_hands -- "2H 2D 3S 3C 4H" "5H 5D 6S 6C 7H"
//! $ cargo run --example rank_hands -- --deal 4 --seed 9
//! ```

use clap::Parser;
use handrank::{Deck, Hand};
use log::error;

#[derive(Debug, Parser)]
struct Cli {
    /// Encoded hands, e.g. "2D 3D 4S 5H 6D".
    hands: Vec<String>,
    /// Number of hands to deal when none are given.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=10))]
    deal: u8,
    /// Seed for the dealing shuffle.
    #[clap(long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let hands = if cli.hands.is_empty() {
        Deck::shuffled(cli.seed)
            .deal_hands(usize::from(cli.deal))
            .map_err(|e| e.to_string())
    } else {
        Hand::parse_batch(&cli.hands).map_err(|e| e.to_string())
    };

    let mut hands = match hands {
        Ok(hands) => hands,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    Hand::sort(&mut hands);
    for (place, hand) in hands.iter().rev().enumerate() {
        let strength = hand.strength();
        let class = if strength.is_straight() {
            "straight"
        } else if strength.three_of_a_kind().count() > 0 {
            "three of a kind"
        } else if strength.pairs().count() > 1 {
            "two pair"
        } else if strength.pairs().count() == 1 {
            "pair"
        } else {
            "high card"
        };
        println!("{}. {hand}  ({class})", place + 1);
    }
}
