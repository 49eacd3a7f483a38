//! Card-set utilities shared by every evaluator: grouping, pattern detection
//! and combination generation.
//!
//! All functions are pure. Detection helpers accept any number of cards and
//! return the cards that make up the pattern, ordered the way they should be
//! shown (most significant first), or `None` when the pattern is absent.

use std::collections::BTreeMap;

use crate::cards::{Card, Suit};

/// Cards grouped by numeric rank value under the given ace rule.
pub fn group_by_rank(cards: &[Card], ace_low: bool) -> BTreeMap<u8, Vec<Card>> {
    let mut groups: BTreeMap<u8, Vec<Card>> = BTreeMap::new();
    for &card in cards {
        groups.entry(card.value(ace_low)).or_default().push(card);
    }
    groups
}

pub fn group_by_suit(cards: &[Card]) -> BTreeMap<Suit, Vec<Card>> {
    let mut groups: BTreeMap<Suit, Vec<Card>> = BTreeMap::new();
    for &card in cards {
        groups.entry(card.suit).or_default().push(card);
    }
    groups
}

/// Returns a copy of `cards` sorted high to low; suits break ties so the
/// order is deterministic.
pub fn sorted_desc(cards: &[Card], ace_low: bool) -> Vec<Card> {
    let mut v = cards.to_vec();
    v.sort_unstable_by(|a, b| {
        b.value(ace_low)
            .cmp(&a.value(ace_low))
            .then_with(|| b.suit.cmp(&a.suit))
    });
    v
}

/// Finds the highest five-card straight.
///
/// Ranks are scanned ace-high. With `ace_low` the Ace may also stand below
/// the Two, which makes the wheel (5-4-3-2-A) available; the wheel is
/// returned as `[5, 4, 3, 2, A]`.
pub fn find_straight(cards: &[Card], ace_low: bool) -> Option<Vec<Card>> {
    let by_rank = group_by_rank(cards, false);
    let mut values: Vec<u8> = by_rank.keys().rev().copied().collect();
    if ace_low && by_rank.contains_key(&14) {
        values.push(1);
    }
    if values.len() < 5 {
        return None;
    }
    let start = values.windows(5).position(|w| w[0] - w[4] == 4)?;
    let straight = values[start..start + 5]
        .iter()
        .filter_map(|v| {
            let key = if *v == 1 { 14 } else { *v };
            by_rank.get(&key).and_then(|g| g.first()).copied()
        })
        .collect();
    Some(straight)
}

/// Finds the best flush: the five highest cards of any suit holding five or more.
pub fn find_flush(cards: &[Card], ace_low: bool) -> Option<Vec<Card>> {
    group_by_suit(cards)
        .into_values()
        .filter(|suited| suited.len() >= 5)
        .map(|suited| {
            let mut top = sorted_desc(&suited, ace_low);
            top.truncate(5);
            top
        })
        .max_by(|a, b| {
            let va = a.iter().map(|c| c.value(ace_low));
            let vb = b.iter().map(|c| c.value(ace_low));
            va.cmp(vb)
        })
}

/// Straight detection restricted to each suit; the highest straight flush wins.
pub fn find_straight_flush(cards: &[Card], ace_low: bool) -> Option<Vec<Card>> {
    group_by_suit(cards)
        .into_values()
        .filter(|suited| suited.len() >= 5)
        .filter_map(|suited| find_straight(&suited, ace_low))
        .max_by_key(|straight| straight_high(straight))
}

/// The ace-high straight flush, if one is present.
pub fn find_royal_flush(cards: &[Card]) -> Option<Vec<Card>> {
    find_straight_flush(cards, false).filter(|sf| straight_high(sf) == 14)
}

/// Three of the highest trips plus two of the highest remaining pair.
///
/// A second set of trips counts as the pair, so `7-7-7-2-2-2` makes
/// sevens full of twos.
pub fn find_full_house(cards: &[Card]) -> Option<Vec<Card>> {
    let by_rank = group_by_rank(cards, false);
    let (&trip_value, trips) = by_rank.iter().rev().find(|(_, g)| g.len() >= 3)?;
    let (_, pair) = by_rank
        .iter()
        .rev()
        .find(|(v, g)| **v != trip_value && g.len() >= 2)?;
    let mut hand: Vec<Card> = trips.iter().take(3).copied().collect();
    hand.extend(pair.iter().take(2));
    Some(hand)
}

/// Four of a kind followed by the highest remaining card when there is one.
pub fn find_four_of_a_kind(cards: &[Card]) -> Option<Vec<Card>> {
    let by_rank = group_by_rank(cards, false);
    let (&quad_value, quads) = by_rank.iter().rev().find(|(_, g)| g.len() >= 4)?;
    let mut hand: Vec<Card> = quads.iter().take(4).copied().collect();
    let kicker = sorted_desc(cards, false)
        .into_iter()
        .find(|c| c.value(false) != quad_value);
    hand.extend(kicker);
    Some(hand)
}

/// High card of a straight laid out high to low. The wheel reports 5.
pub fn straight_high(straight: &[Card]) -> u8 {
    straight.first().map_or(0, |c| c.value(false))
}

/// Every `k`-card subset of `cards`, in lexicographic index order.
pub fn combinations(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
    let n = cards.len();
    if k > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.iter().map(|&i| cards[i]).collect());
        // advance the rightmost index that still has room
        let Some(pos) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            break;
        };
        idx[pos] += 1;
        for j in pos + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
    out
}

/// Omaha hands: exactly two hole cards joined with exactly three board cards.
///
/// Four hole cards and a full board give C(4,2) x C(5,3) = 60 hands.
pub fn omaha_combinations(hole: &[Card], board: &[Card]) -> Vec<Vec<Card>> {
    let board_triples = combinations(board, 3);
    combinations(hole, 2)
        .into_iter()
        .flat_map(|pair| {
            board_triples.iter().map(move |triple| {
                let mut hand = pair.clone();
                hand.extend_from_slice(triple);
                hand
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn combination_counts() {
        let seven = parse_cards("Ah Kh Qh Jh Th 9h 8h").unwrap();
        assert_eq!(combinations(&seven, 5).len(), 21);
        assert_eq!(combinations(&seven, 0).len(), 1);
        assert!(combinations(&seven[..3], 5).is_empty());
    }

    #[test]
    fn duplicate_ranks_do_not_make_a_straight() {
        let cards = parse_cards("2h 3d 3c 4s 5h 5d").unwrap();
        assert!(find_straight(&cards, true).is_none());
    }

    #[test]
    fn wheel_needs_ace_low() {
        let cards = parse_cards("Ac 2h 3h 4s 5d").unwrap();
        assert!(find_straight(&cards, false).is_none());
        let wheel = find_straight(&cards, true).unwrap();
        let ranks: Vec<u8> = wheel.iter().map(|c| c.value(false)).collect();
        assert_eq!(ranks, vec![5, 4, 3, 2, 14]);
    }
}
