use std::collections::HashSet;

use multipoker_engine::cards::Card;
use multipoker_engine::deck::{CardSource, Deck};

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(deck.draw().is_none(), "after 52 cards, deck should be empty");
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = d1.draw_n(10);
    let b: Vec<Card> = d2.draw_n(10);
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.draw_n(10),
        d2.draw_n(10),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn omaha_deal_with_burns_leaves_expected_remainder() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();

    let hands: Vec<Vec<Card>> = (0..6).map(|_| deck.draw_n(4)).collect();
    deck.burn_card();
    let flop = deck.draw_n(3);
    deck.burn_card();
    let turn = deck.draw_n(1);
    deck.burn_card();
    let river = deck.draw_n(1);

    // 52 - 24 hole - 5 board - 3 burns
    assert_eq!(deck.remaining(), 20);
    let mut set = HashSet::new();
    for c in hands.iter().flatten().chain(&flop).chain(&turn).chain(&river) {
        assert!(set.insert(*c));
    }
}

#[test]
fn draw_n_stops_when_the_deck_runs_dry() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    let _ = deck.draw_n(50);
    assert_eq!(deck.draw_n(5).len(), 2);
    assert_eq!(deck.remaining(), 0);
}
