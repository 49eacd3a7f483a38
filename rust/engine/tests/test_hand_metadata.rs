use multipoker_engine::cards::{parse_cards, Card, Rank as R, Suit as S};
use multipoker_engine::evaluator::{EvaluatorConfig, TexasHoldemEvaluator};
use multipoker_engine::hand::Hand;
use multipoker_engine::ranking::{Category, HandEvaluationResult};

#[test]
fn evaluation_stamps_ranking_on_the_hand() {
    let ev = TexasHoldemEvaluator::new(EvaluatorConfig::default());
    let mut hand = Hand::from_cards(&parse_cards("Kc Kd").unwrap());
    let board = parse_cards("Kh Qc Qd 2h 3s").unwrap();

    assert!(hand.ranking().is_none());
    let result = hand.evaluate_with(&ev, &board).unwrap();
    assert_eq!(hand.category(), Some(Category::FullHouse));
    assert_eq!(hand.rank_value(), Some(result.rank_value));
    assert_eq!(hand.description(), Some("Full House, Kings full of Queens"));
}

#[test]
fn adding_or_clearing_cards_drops_the_ranking() {
    let ev = TexasHoldemEvaluator::new(EvaluatorConfig::default());
    let board = parse_cards("Kh Qc Qd 2h 3s").unwrap();
    let mut hand = Hand::new();
    hand.add_cards(&parse_cards("Kc Kd").unwrap());
    hand.evaluate_with(&ev, &board).unwrap();
    assert!(hand.ranking().is_some());

    hand.add_card(Card {
        suit: S::Spades,
        rank: R::Ace,
    });
    assert!(hand.ranking().is_none());
    assert_eq!(hand.len(), 3);

    hand.clear();
    assert!(hand.is_empty());
    assert!(hand.category().is_none());
}

#[test]
fn evaluation_result_serializes_for_clients() {
    let ev = TexasHoldemEvaluator::new(EvaluatorConfig::default());
    let mut hand = Hand::from_cards(&parse_cards("Ah Kh").unwrap());
    let result = hand
        .evaluate_with(&ev, &parse_cards("Qh Jh Th 2c 3d").unwrap())
        .unwrap();
    let s = serde_json::to_string(&result).unwrap();
    assert!(s.contains("\"RoyalFlush\""));
    let back: HandEvaluationResult = serde_json::from_str(&s).unwrap();
    assert_eq!(back, result);
}
