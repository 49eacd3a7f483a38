use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::combos::{
    find_flush, find_four_of_a_kind, find_full_house, find_straight, find_straight_flush,
    group_by_rank, sorted_desc, straight_high,
};

/// Hand categories, weakest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Outcome of a high-hand evaluation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluationResult {
    pub category: Category,
    /// Category in the top bits, tiebreakers packed below; larger is stronger.
    pub rank_value: u32,
    /// Rank values deciding ties inside the category, most significant first.
    pub tiebreakers: Vec<u8>,
    /// The five cards that make the hand.
    pub best_cards: Vec<Card>,
    pub description: String,
}

/// Outcome of an ace-to-five low evaluation. Lower `rank_value` is better.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LowHandEvaluationResult {
    /// `false` when no five distinct ranks at or under the qualifier exist.
    pub valid: bool,
    pub rank_value: u32,
    /// Ace-low rank values, highest first (`[8, 6, 4, 3, 2]`).
    pub tiebreakers: Vec<u8>,
    pub best_cards: Vec<Card>,
    pub description: String,
}

impl LowHandEvaluationResult {
    pub fn invalid() -> Self {
        Self {
            valid: false,
            rank_value: u32::MAX,
            tiebreakers: Vec::new(),
            best_cards: Vec::new(),
            description: "No qualifying low".to_string(),
        }
    }
}

// 4 bits per tiebreaker; rank values never exceed 14.
fn pack(values: &[u8]) -> u32 {
    values
        .iter()
        .take(5)
        .enumerate()
        .fold(0, |acc, (i, &v)| acc | (u32::from(v) << (16 - 4 * i)))
}

fn rank_name(v: u8) -> &'static str {
    Rank::from_value(v).map_or("?", Rank::name)
}

fn rank_plural(v: u8) -> String {
    Rank::from_value(v).map_or_else(|| "?".to_string(), Rank::plural)
}

fn describe(category: Category, t: &[u8]) -> String {
    let at = |i: usize| t.get(i).copied().unwrap_or(0);
    match category {
        Category::RoyalFlush => "Royal Flush".to_string(),
        Category::StraightFlush | Category::Straight | Category::Flush => {
            format!("{category}, {} high", rank_name(at(0)))
        }
        Category::FourOfAKind | Category::ThreeOfAKind => {
            format!("{category}, {}", rank_plural(at(0)))
        }
        Category::FullHouse => format!(
            "Full House, {} full of {}",
            rank_plural(at(0)),
            rank_plural(at(1))
        ),
        Category::TwoPair => format!(
            "Two Pair, {} and {}",
            rank_plural(at(0)),
            rank_plural(at(1))
        ),
        Category::OnePair => format!("Pair of {}", rank_plural(at(0))),
        Category::HighCard => format!("High Card, {}", rank_name(at(0))),
    }
}

fn build(category: Category, tiebreakers: Vec<u8>, best_cards: Vec<Card>) -> HandEvaluationResult {
    let rank_value = ((category as u32) << 20) | pack(&tiebreakers);
    let description = describe(category, &tiebreakers);
    HandEvaluationResult {
        category,
        rank_value,
        tiebreakers,
        best_cards,
        description,
    }
}

/// Scores exactly one five-card hand.
///
/// `wheel` allows the Ace to play low in A-2-3-4-5 straights; everywhere
/// else the Ace ranks high.
pub fn score_five(cards: &[Card], wheel: bool) -> HandEvaluationResult {
    debug_assert_eq!(cards.len(), 5, "score_five takes exactly five cards");

    if let Some(sf) = find_straight_flush(cards, wheel) {
        let high = straight_high(&sf);
        let category = if high == 14 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return build(category, vec![high], sf);
    }
    if let Some(quads) = find_four_of_a_kind(cards) {
        let t = vec![quads[0].value(false), quads[4].value(false)];
        return build(Category::FourOfAKind, t, quads);
    }
    if let Some(fh) = find_full_house(cards) {
        let t = vec![fh[0].value(false), fh[3].value(false)];
        return build(Category::FullHouse, t, fh);
    }
    if let Some(flush) = find_flush(cards, false) {
        let t = flush.iter().map(|c| c.value(false)).collect();
        return build(Category::Flush, t, flush);
    }
    if let Some(straight) = find_straight(cards, wheel) {
        return build(Category::Straight, vec![straight_high(&straight)], straight);
    }

    // Remaining categories are all "groups of equal rank": order groups by
    // size then rank, and the shape of the sizes names the category.
    let mut groups: Vec<(u8, Vec<Card>)> = group_by_rank(cards, false).into_iter().collect();
    groups.sort_unstable_by(|(va, ga), (vb, gb)| gb.len().cmp(&ga.len()).then(vb.cmp(va)));
    let shape: Vec<usize> = groups.iter().map(|(_, g)| g.len()).collect();
    let category = match shape.as_slice() {
        [3, ..] => Category::ThreeOfAKind,
        [2, 2, ..] => Category::TwoPair,
        [2, ..] => Category::OnePair,
        _ => Category::HighCard,
    };
    let tiebreakers = groups.iter().map(|(v, _)| *v).collect();
    let best_cards = groups
        .into_iter()
        .flat_map(|(_, g)| sorted_desc(&g, false))
        .collect();
    build(category, tiebreakers, best_cards)
}

/// Total order over high results: rank value first, then tiebreakers
/// pairwise up to the shorter list. `Equal` means a split pot.
pub fn compare_results(a: &HandEvaluationResult, b: &HandEvaluationResult) -> Ordering {
    a.rank_value.cmp(&b.rank_value).then_with(|| {
        a.tiebreakers
            .iter()
            .zip(&b.tiebreakers)
            .map(|(x, y)| x.cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Scores every candidate hand and keeps the strongest.
pub fn best_high<I>(candidates: I, wheel: bool) -> Option<HandEvaluationResult>
where
    I: IntoIterator<Item = Vec<Card>>,
{
    candidates
        .into_iter()
        .map(|hand| score_five(&hand, wheel))
        .reduce(|best, next| {
            if compare_results(&next, &best).is_gt() {
                next
            } else {
                best
            }
        })
}

/// Scores one five-card hand as an ace-to-five low. Straights and flushes
/// are ignored; pairs or any rank above `qualifier` disqualify.
pub fn score_low_five(cards: &[Card], qualifier: u8) -> Option<LowHandEvaluationResult> {
    let best_cards = sorted_desc(cards, true);
    let tiebreakers: Vec<u8> = best_cards.iter().map(|c| c.value(true)).collect();
    let distinct = tiebreakers.windows(2).all(|w| w[0] != w[1]);
    if tiebreakers.len() != 5 || !distinct || tiebreakers[0] > qualifier {
        return None;
    }
    let description = format!(
        "{} low",
        best_cards
            .iter()
            .map(|c| c.rank.symbol().to_string())
            .collect::<Vec<_>>()
            .join("-")
    );
    Some(LowHandEvaluationResult {
        valid: true,
        rank_value: pack(&tiebreakers),
        tiebreakers,
        best_cards,
        description,
    })
}

/// Picks the lowest qualifying hand among the candidates, or an invalid
/// result when none qualifies.
pub fn best_low<I>(candidates: I, qualifier: u8) -> LowHandEvaluationResult
where
    I: IntoIterator<Item = Vec<Card>>,
{
    candidates
        .into_iter()
        .filter_map(|hand| score_low_five(&hand, qualifier))
        .min_by(|a, b| a.tiebreakers.cmp(&b.tiebreakers))
        .unwrap_or_else(LowHandEvaluationResult::invalid)
}

/// Orders low results so that `Greater` means `a` is the better (lower) hand.
/// Any valid low beats an invalid one.
pub fn compare_low_results(a: &LowHandEvaluationResult, b: &LowHandEvaluationResult) -> Ordering {
    match (a.valid, b.valid) {
        (true, true) => b.tiebreakers.cmp(&a.tiebreakers),
        (va, vb) => va.cmp(&vb),
    }
}
