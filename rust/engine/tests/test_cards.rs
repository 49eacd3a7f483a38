use std::collections::HashSet;

use multipoker_engine::cards::{full_deck, parse_cards, Card, Rank, Suit};
use multipoker_engine::errors::GameError;

#[test]
fn parses_short_notation() {
    let cards = parse_cards("Ah 10d Tc 7♠").unwrap();
    assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
    assert_eq!(cards[3], Card::new(Rank::Seven, Suit::Spades));
}

#[test]
fn display_round_trips() {
    for card in full_deck() {
        let text = card.to_string();
        assert_eq!(text.parse::<Card>().unwrap(), card);
    }
}

#[test]
fn rejects_garbage() {
    assert_eq!(
        "1x".parse::<Card>(),
        Err(GameError::InvalidCard("1x".to_string()))
    );
    assert!("".parse::<Card>().is_err());
    assert!(parse_cards("Ah Zz").is_err());
}

#[test]
fn ace_value_depends_on_the_rule() {
    assert_eq!(Rank::Ace.value(false), 14);
    assert_eq!(Rank::Ace.value(true), 1);
    assert_eq!(Rank::King.value(true), 13);
    assert_eq!(Rank::from_value(1), Some(Rank::Ace));
    assert_eq!(Rank::from_value(15), None);
}

#[test]
fn full_deck_is_52_unique_cards() {
    let deck = full_deck();
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.iter().collect::<HashSet<_>>().len(), 52);
}
