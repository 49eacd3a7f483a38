use std::cmp::Ordering;

use multipoker_engine::cards::{parse_cards, Card, Rank as R, Suit as S};
use multipoker_engine::combos::{find_full_house, find_flush, find_royal_flush, find_straight};
use multipoker_engine::errors::GameError;
use multipoker_engine::evaluator::{
    EvaluatorConfig, HandEvaluator, SevenCardStudEvaluator, TexasHoldemEvaluator,
};
use multipoker_engine::ranking::{score_five, Category, HandEvaluationResult};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn holdem() -> TexasHoldemEvaluator {
    TexasHoldemEvaluator::new(EvaluatorConfig::default())
}

fn eval(hole: &str, board: &str) -> HandEvaluationResult {
    holdem()
        .evaluate(&parse_cards(hole).unwrap(), &parse_cards(board).unwrap())
        .unwrap()
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ace),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Ten),
    ];
    let hs = score_five(&cards, false);
    assert_eq!(hs.category, Category::RoyalFlush);
    assert!(find_royal_flush(&cards).is_some());
}

#[test]
fn full_house_reports_trips_then_pair() {
    let hs = score_five(&parse_cards("7s 7c 7d 2h 2d").unwrap(), true);
    assert_eq!(hs.category, Category::FullHouse);
    assert_eq!(hs.tiebreakers, vec![7, 2]);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let hs = score_five(&parse_cards("2h 3h 4s 5d Ac").unwrap(), true);
    assert_eq!(hs.category, Category::Straight);
    assert_eq!(hs.tiebreakers, vec![5]);
    let order: Vec<R> = hs.best_cards.iter().map(|c| c.rank).collect();
    assert_eq!(order, vec![R::Five, R::Four, R::Three, R::Two, R::Ace]);
}

#[test]
fn wheel_is_not_a_straight_without_aces_low() {
    let hs = score_five(&parse_cards("2h 3h 4s 5d Ac").unwrap(), false);
    assert_eq!(hs.category, Category::HighCard);
}

#[test]
fn two_trips_make_the_best_full_house() {
    let cards = parse_cards("7s 7c 7d 2h 2d 2s Kc").unwrap();
    let fh = find_full_house(&cards).unwrap();
    assert_eq!(fh[0].rank, R::Seven);
    assert_eq!(fh[3].rank, R::Two);

    let hs = eval("7s 7c", "7d 2h 2d 2s Kc");
    assert_eq!(hs.category, Category::FullHouse);
    assert_eq!(hs.tiebreakers, vec![7, 2]);
}

#[test]
fn full_house_prefers_highest_pair() {
    let hs = eval("9s 9c", "9d Kh Kd 3s 3c");
    assert_eq!(hs.tiebreakers, vec![9, 13]);
}

#[test]
fn flush_takes_five_highest_of_six_suited() {
    let cards = parse_cards("2h 7h Jh Qh 9h 4h Ac").unwrap();
    let flush = find_flush(&cards, false).unwrap();
    let ranks: Vec<u8> = flush.iter().map(|c| c.value(false)).collect();
    assert_eq!(ranks, vec![12, 11, 9, 7, 4]);
}

#[test]
fn straight_picks_highest_run() {
    let cards = parse_cards("5c 6h 7c 8h 9d Td 2s").unwrap();
    let straight = find_straight(&cards, true).unwrap();
    assert_eq!(straight[0].rank, R::Ten);
}

#[test]
fn seven_cards_pick_the_best_five() {
    let hs = eval("Ac Ad", "As Ah Kc Qd 2h");
    assert_eq!(hs.category, Category::FourOfAKind);
    assert_eq!(hs.tiebreakers, vec![14, 13]);
    assert_eq!(hs.best_cards.len(), 5);
}

#[test]
fn category_ordering_is_correct() {
    let hands = [
        eval("2c 5d", "9h Jc Kd 3s 7h"),
        eval("2c 2d", "9h Jc Kd 3s 7h"),
        eval("2c 2d", "9h 9c Kd 3s 7h"),
        eval("2c 2d", "2h Jc Kd 3s 7h"),
        eval("5c 6h", "7c 8h 9d 2s Kd"),
        eval("2h 7h", "Jh Qh 9h Ac Kd"),
        eval("Kc Kd", "Kh Qc Qd 2h 3s"),
        eval("Ac Ad", "As Ah Kc Qd 2h"),
        eval("9h Th", "Jh Qh Kh 2c 3d"),
        eval("Ah Kh", "Qh Jh Th 2c 3d"),
    ];
    let expected = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];
    let ev = holdem();
    for (hand, cat) in hands.iter().zip(expected) {
        assert_eq!(hand.category, cat);
    }
    // antisymmetric and ordered across every pair
    for (i, a) in hands.iter().enumerate() {
        for (j, b) in hands.iter().enumerate() {
            assert_eq!(ev.compare_hands(a, b), i.cmp(&j));
            assert_eq!(ev.compare_hands(a, b), ev.compare_hands(b, a).reverse());
        }
    }
}

#[test]
fn kickers_break_ties_inside_a_category() {
    let ev = holdem();
    let a = eval("Ac 9d", "Ah 7c 5d 3s 2h");
    let b = eval("Ad 8d", "Ah 7c 5d 3s 2h");
    assert_eq!(a.tiebreakers, vec![14, 9, 7, 5]);
    assert_eq!(ev.compare_hands(&a, &b), Ordering::Greater);

    let hi = eval("Kc Kd", "Qh Qc 4d 3s 2h");
    let lo = eval("Jc Jd", "Qh Qc Ad 3s 2h");
    assert_eq!(hi.tiebreakers, vec![13, 12, 4]);
    assert_eq!(ev.compare_hands(&hi, &lo), Ordering::Greater);
}

#[test]
fn board_plays_for_both_is_a_split() {
    let ev = holdem();
    let a = eval("2c 3d", "Ah Kh Qh Jh Th");
    let b = eval("4c 5d", "Ah Kh Qh Jh Th");
    assert_eq!(ev.compare_hands(&a, &b), Ordering::Equal);
}

#[test]
fn holdem_rejects_wrong_hole_count() {
    let err = holdem()
        .evaluate(&parse_cards("Ac Kd Qh").unwrap(), &parse_cards("2c 3c 4c").unwrap())
        .unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidHandSize {
            expected: 2,
            actual: 3,
            ..
        }
    ));
}

#[test]
fn holdem_needs_five_cards() {
    let err = holdem()
        .evaluate(&parse_cards("Ac Kd").unwrap(), &parse_cards("2c").unwrap())
        .unwrap_err();
    assert_eq!(err, GameError::NotEnoughCards { needed: 5, actual: 3 });
}

#[test]
fn stud_uses_own_seven_cards() {
    let stud = SevenCardStudEvaluator::new(EvaluatorConfig::default());
    let cards = parse_cards("9h Th Jh Qh Kh 2c 3d").unwrap();
    let hs = stud.evaluate(&cards, &[]).unwrap();
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.tiebreakers, vec![13]);

    let too_many = parse_cards("9h Th Jh Qh Kh 2c 3d 4d").unwrap();
    assert!(matches!(
        stud.evaluate(&too_many, &[]),
        Err(GameError::InvalidHandSize { .. })
    ));
}
