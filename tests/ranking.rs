//! Hand ranking tests.

use core::cmp::Ordering;

use handrank::Hand;
use rstest::rstest;

fn hand(encoded: &str) -> Hand {
    Hand::parse(encoded).unwrap()
}

fn compare(a: &str, b: &str) -> Ordering {
    Hand::compare(&hand(a), &hand(b))
}

#[test]
fn straight_beats_four_of_a_kind() {
    assert_eq!(compare("2D 3D 4D 5D 6D", "2C 2D 2H 2S 6D"), Ordering::Greater);
    assert_eq!(compare("2C 2D 2H 2S 6D", "2D 3D 4D 5D 6D"), Ordering::Less);
}

#[test]
fn pairs_compare_by_value() {
    assert_eq!(compare("2H 2D 3S 3C 4H", "5H 5D 6S 6C 7H"), Ordering::Less);
}

#[rstest]
#[case("2D 3D 4D 5D 6D", true)]
#[case("6S 4D 5H 2C 3D", true)]
#[case("TC JD QH KS AD", true)]
#[case("AC 2D 3H 4S 5D", false)]
#[case("2D 3D 4D 5D 7D", false)]
#[case("2C 2D 3H 4S 5D", false)]
fn straight_detection(#[case] encoded: &str, #[case] straight: bool) {
    assert_eq!(hand(encoded).is_straight(), straight);
}

#[rstest]
// Straight outranks three of a kind.
#[case("2C 3D 4H 5S 6C", "AC AD AH KS QD")]
// Higher straight wins.
#[case("TC JD QH KS AD", "9C TD JH QS KD")]
// Three of a kind outranks two pair.
#[case("2C 2D 2H 5S 7D", "KC KD QH QS AD")]
// Higher three of a kind wins.
#[case("3C 3D 3H 2S 4D", "2C 2D 2H AS KD")]
// Two pair outranks one pair.
#[case("2C 2D 3H 3S 4D", "AC AD KH QS JD")]
// Second pair decides between two pairs with the same top pair.
#[case("KC KD 3H 3S 4D", "KH KS 2H 2S AD")]
// Kicker decides between equal pairs.
#[case("2C 2D 9H 5S 4D", "2H 2S 8H 5C 4H")]
// One pair outranks four of a kind.
#[case("2C 2H 3S 4D 6H", "9C 9D 9H 9S 2D")]
// Highest card decides, looking past equal top cards.
#[case("AC KD 9H 7S 5D", "AH KS 9D 7C 4H")]
fn stronger_hand_wins(#[case] stronger: &str, #[case] weaker: &str) {
    assert_eq!(compare(stronger, weaker), Ordering::Greater);
    assert_eq!(compare(weaker, stronger), Ordering::Less);
}

#[test]
fn suits_do_not_rank() {
    assert_eq!(compare("2C 3D 4H 5S 7D", "2D 3H 4S 5C 7H"), Ordering::Equal);
    assert_eq!(compare("8H 8D KS 3C 2C", "KH 3D 8C 2S 8S"), Ordering::Equal);
}

#[test]
fn three_of_a_kind_is_not_a_pair() {
    let full_house = hand("5C 5D 5H 2S 2D");
    let strength = full_house.strength();
    assert_eq!(strength.three_of_a_kind().values(), &[5]);
    assert_eq!(strength.pairs().values(), &[2]);

    let trips = hand("9C 9D 9H 2S 4D");
    assert_eq!(trips.strength().three_of_a_kind().count(), 1);
    assert_eq!(trips.strength().pairs().count(), 0);
}

#[test]
fn four_of_a_kind_forms_no_group() {
    let quads = hand("9C 9D 9H 9S 2D");
    assert_eq!(quads.strength().three_of_a_kind().count(), 0);
    assert_eq!(quads.strength().pairs().count(), 0);

    // Falls through to the highest card.
    assert_eq!(compare("9C 9D 9H 9S 2D", "AC KD QH JS 9S"), Ordering::Less);
    assert_eq!(compare("9C 9D 9H 9S 2D", "8C 7D 5H 4S 3S"), Ordering::Greater);
}

#[test]
fn pair_groups_sorted_high_to_low() {
    let two_pair = hand("3C 3D KH KS 4D");
    assert_eq!(two_pair.strength().pairs().count(), 2);
    assert_eq!(two_pair.strength().pairs().values(), &[13, 3]);
}

const SAMPLE: [&str; 10] = [
    "2D 3D 4D 5D 6D",
    "2C 2D 2H 2S 6D",
    "2H 2D 3S 3C 4H",
    "5H 5D 6S 6C 7H",
    "AC AD AH KS QD",
    "TC JD QH KS AD",
    "2C 3D 4H 5S 7D",
    "2D 3H 4S 5C 7H",
    "AC KD 9H 7S 5D",
    "5C 5D 5H 2S 2D",
];

#[test]
fn compare_is_a_total_order() {
    let hands: Vec<Hand> = SAMPLE.iter().map(|encoded| hand(encoded)).collect();

    for a in &hands {
        assert_eq!(Hand::compare(a, a), Ordering::Equal);

        for b in &hands {
            assert_eq!(Hand::compare(a, b), Hand::compare(b, a).reverse());

            for c in &hands {
                if Hand::compare(a, b) != Ordering::Greater
                    && Hand::compare(b, c) != Ordering::Greater
                {
                    assert_ne!(Hand::compare(a, c), Ordering::Greater, "{a} {b} {c}");
                }
            }
        }
    }
}

#[test]
fn sort_orders_weakest_first() {
    let mut hands = Hand::parse_batch([
        "AC KD 9H 7S 5C",
        "2D 3D 4D 5D 6D",
        "2H 2S 3S 3C 4H",
        "KH KS KC 8S 7D",
        "QC QD JH TS 8D",
    ])
    .unwrap();

    Hand::sort(&mut hands);

    let rendered: Vec<String> = hands.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "AC KD 9H 7S 5C",
            "QC QD JH TS 8D",
            "2H 2S 3S 3C 4H",
            "KH KS KC 8S 7D",
            "2D 3D 4D 5D 6D",
        ]
    );
}

#[test]
fn best_returns_strongest_hand() {
    let hands = Hand::parse_batch(["2H 2S 3S 3C 4H", "KH KS KC 8S 7D", "AC KD 9H 7S 5D"]).unwrap();
    assert_eq!(Hand::best(&hands), Some(&hands[1]));
    assert_eq!(Hand::best(&[]), None);
}
