//! Turning evaluated hands and collected pots into chip awards.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::evaluator::{HandEvaluator, HiLoResult};
use crate::player::PlayerId;
use crate::pot::{Pot, PotManager};
use crate::ranking::compare_low_results;

/// A player still holding cards at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contender {
    pub player_id: PlayerId,
    pub hole_cards: Vec<Card>,
}

impl Contender {
    pub fn new(player_id: impl Into<PlayerId>, hole_cards: Vec<Card>) -> Self {
        Self {
            player_id: player_id.into(),
            hole_cards,
        }
    }
}

/// Which part of a pot an award comes from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotShare {
    Whole,
    High,
    Low,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PotAward {
    /// 0 is the main pot, `n` is side pot `n - 1`.
    pub pot_index: usize,
    pub player_id: PlayerId,
    pub amount: u32,
    pub share: PotShare,
    pub description: String,
}

/// Players holding the best high hand; more than one means a split.
pub fn determine_winners(
    evaluator: &dyn HandEvaluator,
    community: &[Card],
    contenders: &[Contender],
) -> Result<Vec<PlayerId>, GameError> {
    let results = contenders
        .iter()
        .map(|c| evaluator.evaluate(&c.hole_cards, community))
        .collect::<Result<Vec<_>, _>>()?;
    let Some(best) = results
        .iter()
        .reduce(|a, b| if evaluator.compare_hands(b, a).is_gt() { b } else { a })
    else {
        return Ok(Vec::new());
    };
    Ok(contenders
        .iter()
        .zip(&results)
        .filter(|(_, r)| evaluator.compare_hands(r, best) == Ordering::Equal)
        .map(|(c, _)| c.player_id.clone())
        .collect())
}

/// Awards every collected pot to the best eligible hands.
///
/// Collect the street's bets before calling; pending bets are not awarded.
/// A pot with one eligible contender goes to that player unseen. In hi-lo
/// games a pot with a qualifying low is halved, the odd chip going high.
/// Shares that do not divide evenly hand the leftover chips one at a time
/// to winners in `contenders` order.
pub fn settle_pots(
    pots: &PotManager,
    evaluator: &dyn HandEvaluator,
    community: &[Card],
    contenders: &[Contender],
) -> Result<Vec<PotAward>, GameError> {
    let mut results: Vec<Option<HiLoResult>> = vec![None; contenders.len()];
    let mut awards = Vec::new();

    for (pot_index, pot) in pots.pots().enumerate() {
        if pot.amount() == 0 {
            continue;
        }
        let eligible = eligible_contenders(pot, contenders);
        match eligible.as_slice() {
            [] => {
                tracing::warn!(pot_index, amount = pot.amount(), "pot has no eligible contender");
            }
            [only] => awards.push(PotAward {
                pot_index,
                player_id: contenders[*only].player_id.clone(),
                amount: pot.amount(),
                share: PotShare::Whole,
                description: "Uncontested".to_string(),
            }),
            _ => {
                for &i in &eligible {
                    if results[i].is_none() {
                        let c = &contenders[i];
                        results[i] = Some(evaluator.evaluate_hi_lo(&c.hole_cards, community)?);
                    }
                }
                let scored: Vec<(usize, &HiLoResult)> = eligible
                    .iter()
                    .filter_map(|&i| results[i].as_ref().map(|r| (i, r)))
                    .collect();
                award_contested(
                    pot_index,
                    pot.amount(),
                    &scored,
                    evaluator,
                    contenders,
                    &mut awards,
                );
            }
        }
    }
    Ok(awards)
}

fn eligible_contenders(pot: &Pot, contenders: &[Contender]) -> Vec<usize> {
    contenders
        .iter()
        .enumerate()
        .filter(|(_, c)| pot.is_player_eligible(&c.player_id))
        .map(|(i, _)| i)
        .collect()
}

fn award_contested(
    pot_index: usize,
    amount: u32,
    scored: &[(usize, &HiLoResult)],
    evaluator: &dyn HandEvaluator,
    contenders: &[Contender],
    awards: &mut Vec<PotAward>,
) {
    let best_high = scored
        .iter()
        .map(|(_, r)| &r.high)
        .reduce(|a, b| if evaluator.compare_hands(b, a).is_gt() { b } else { a });
    let high_winners: Vec<(usize, String)> = scored
        .iter()
        .filter(|(_, r)| best_high.is_some_and(|b| evaluator.compare_hands(&r.high, b).is_eq()))
        .map(|(i, r)| (*i, r.high.description.clone()))
        .collect();

    let lows: Vec<(usize, _)> = scored
        .iter()
        .filter_map(|(i, r)| r.low.qualified().map(|l| (*i, l)))
        .collect();
    let best_low = lows
        .iter()
        .map(|(_, l)| *l)
        .reduce(|a, b| if compare_low_results(b, a).is_gt() { b } else { a });
    let low_winners: Vec<(usize, String)> = lows
        .iter()
        .filter(|(_, l)| best_low.is_some_and(|b| compare_low_results(l, b).is_eq()))
        .map(|(i, l)| (*i, l.description.clone()))
        .collect();

    let mut pay = |winners: &[(usize, String)], total: u32, share: PotShare| {
        let n = winners.len() as u32;
        if n == 0 {
            return;
        }
        let base = total / n;
        let odd = total % n;
        for (k, (i, description)) in winners.iter().enumerate() {
            let extra = u32::from((k as u32) < odd);
            awards.push(PotAward {
                pot_index,
                player_id: contenders[*i].player_id.clone(),
                amount: base + extra,
                share,
                description: description.clone(),
            });
        }
    };

    if low_winners.is_empty() {
        pay(&high_winners, amount, PotShare::Whole);
    } else {
        let low_half = amount / 2;
        pay(&high_winners, amount - low_half, PotShare::High);
        pay(&low_winners, low_half, PotShare::Low);
    }
    tracing::debug!(
        pot_index,
        amount,
        high_winners = high_winners.len(),
        low_winners = low_winners.len(),
        "settled pot"
    );
}
