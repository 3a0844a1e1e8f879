use std::collections::BTreeSet;

use studpoker_engine::cards::{Card, Rank as R, Suit as S};
use studpoker_engine::hand::{reference_hands, Hand, HandRank};
use studpoker_engine::showdown::{resolve, showdown};

fn hand(cards: [(R, S); 5]) -> Hand {
    Hand::new(cards.map(|(r, s)| Card::new(r, s)))
}

#[test]
fn same_category_hands_both_win() {
    let mut hands = [
        hand([
            (R::Two, S::Clubs),
            (R::Four, S::Clubs),
            (R::Six, S::Clubs),
            (R::Eight, S::Clubs),
            (R::Ten, S::Clubs),
        ]),
        hand([
            (R::Three, S::Hearts),
            (R::Five, S::Hearts),
            (R::Seven, S::Hearts),
            (R::Nine, S::Hearts),
            (R::King, S::Hearts),
        ]),
    ];
    assert_eq!(resolve(&mut hands), Ok(BTreeSet::from([0, 1])));
}

#[test]
fn no_tie_break_inside_a_category() {
    // Pair of Kings and pair of Twos share the category, so both win.
    let mut hands = [
        hand([
            (R::King, S::Clubs),
            (R::King, S::Hearts),
            (R::Six, S::Clubs),
            (R::Eight, S::Diamonds),
            (R::Ten, S::Clubs),
        ]),
        hand([
            (R::Two, S::Spades),
            (R::Two, S::Hearts),
            (R::Seven, S::Hearts),
            (R::Nine, S::Clubs),
            (R::Jack, S::Hearts),
        ]),
        hand([
            (R::Ace, S::Spades),
            (R::Three, S::Hearts),
            (R::Seven, S::Diamonds),
            (R::Nine, S::Spades),
            (R::Jack, S::Diamonds),
        ]),
    ];
    let s = showdown(&mut hands).unwrap();
    assert_eq!(s.ranks, vec![HandRank::Pair, HandRank::Pair, HandRank::HighCard]);
    assert_eq!(s.best, HandRank::Pair);
    assert_eq!(s.winners, vec![0, 1]);
    assert!(s.is_split());
}

#[test]
fn single_hand_always_wins() {
    let mut hands = [reference_hands()[0]];
    assert_eq!(resolve(&mut hands), Ok(BTreeSet::from([0])));
}

#[test]
fn winner_holds_the_highest_category() {
    let mut hands = reference_hands();
    hands.reverse();
    let s = showdown(&mut hands).unwrap();
    assert_eq!(s.winners, vec![0]);
    assert_eq!(s.ranks[0], HandRank::StraightFlush);
    assert_eq!(s.ranks[8], HandRank::HighCard);
}

#[test]
fn showdown_sorts_every_hand() {
    let mut hands = reference_hands();
    showdown(&mut hands).unwrap();
    assert!(hands.iter().all(Hand::is_sorted));
}

#[test]
fn showdown_serializes_for_reports() {
    let mut hands = reference_hands();
    let s = showdown(&mut hands).unwrap();
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["best"], "StraightFlush");
    assert_eq!(json["winners"], serde_json::json!([8]));
}
