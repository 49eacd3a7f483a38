//! Variant-aware hand evaluators.
//!
//! Every variant implements [`HandEvaluator`]. Variants differ only in which
//! five-card hands they allow a player to make ([`HandEvaluator::candidates`]);
//! scoring, comparison and low evaluation live in [`EvaluationRules`], which
//! each evaluator owns and the trait's provided methods delegate to.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::combos::{combinations, omaha_combinations};
use crate::errors::GameError;
use crate::ranking::{
    best_high, best_low, compare_results, HandEvaluationResult, LowHandEvaluationResult,
};

/// Default low qualifier: eight-or-better.
pub const DEFAULT_LOW_QUALIFIER: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Also evaluate a low hand in [`HandEvaluator::evaluate_hi_lo`].
    pub evaluate_low: bool,
    /// Highest ace-low rank a qualifying low may contain.
    pub low_hand_qualifier: u8,
    /// Let the Ace play low in the A-2-3-4-5 straight.
    pub aces_low: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            evaluate_low: false,
            low_hand_qualifier: DEFAULT_LOW_QUALIFIER,
            aces_low: true,
        }
    }
}

/// The low half of a hi-lo evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LowHand {
    /// The evaluator is not configured for low hands.
    NotRequested,
    /// Low hands were evaluated but none qualifies.
    Disqualified,
    Qualified(LowHandEvaluationResult),
}

impl LowHand {
    pub fn qualified(&self) -> Option<&LowHandEvaluationResult> {
        match self {
            LowHand::Qualified(low) => Some(low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiLoResult {
    pub high: HandEvaluationResult,
    pub low: LowHand,
}

/// Scoring and comparison shared by every variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationRules {
    config: EvaluatorConfig,
}

impl EvaluationRules {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn compare(&self, a: &HandEvaluationResult, b: &HandEvaluationResult) -> Ordering {
        compare_results(a, b)
    }

    pub fn best_high(&self, candidates: Vec<Vec<Card>>) -> Option<HandEvaluationResult> {
        best_high(candidates, self.config.aces_low)
    }

    pub fn best_low(&self, candidates: Vec<Vec<Card>>) -> LowHandEvaluationResult {
        best_low(candidates, self.config.low_hand_qualifier)
    }

    /// Lowest qualifying five of any of `cards`.
    pub fn evaluate_low_hand(&self, cards: &[Card]) -> LowHandEvaluationResult {
        self.best_low(combinations(cards, 5))
    }
}

pub trait HandEvaluator: fmt::Debug + Send + Sync {
    /// Variant name used in errors and logs.
    fn name(&self) -> &'static str;

    fn rules(&self) -> &EvaluationRules;

    /// Every five-card hand the player may legally make from these cards.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidHandSize`] when the hole-card count does not fit
    /// the variant, [`GameError::NotEnoughCards`] when fewer cards than a
    /// five-card hand are available.
    fn candidates(&self, hole: &[Card], community: &[Card]) -> Result<Vec<Vec<Card>>, GameError>;

    fn config(&self) -> &EvaluatorConfig {
        self.rules().config()
    }

    /// Best high hand for a player.
    fn evaluate(&self, hole: &[Card], community: &[Card]) -> Result<HandEvaluationResult, GameError> {
        let candidates = self.candidates(hole, community)?;
        let considered = candidates.len();
        let best = self
            .rules()
            .best_high(candidates)
            .ok_or(GameError::NotEnoughCards {
                needed: 5,
                actual: hole.len() + community.len(),
            })?;
        tracing::trace!(
            variant = self.name(),
            considered,
            category = ?best.category,
            "evaluated high hand"
        );
        Ok(best)
    }

    /// `Greater` when `a` wins, `Less` when `b` wins, `Equal` for a split.
    fn compare_hands(&self, a: &HandEvaluationResult, b: &HandEvaluationResult) -> Ordering {
        self.rules().compare(a, b)
    }

    fn evaluate_low_hand(&self, cards: &[Card]) -> LowHandEvaluationResult {
        self.rules().evaluate_low_hand(cards)
    }

    /// High hand always; low hand only when the config asks for it.
    fn evaluate_hi_lo(&self, hole: &[Card], community: &[Card]) -> Result<HiLoResult, GameError> {
        let high = self.evaluate(hole, community)?;
        if !self.config().evaluate_low {
            return Ok(HiLoResult {
                high,
                low: LowHand::NotRequested,
            });
        }
        let low = self.rules().best_low(self.candidates(hole, community)?);
        let low = if low.valid {
            LowHand::Qualified(low)
        } else {
            LowHand::Disqualified
        };
        Ok(HiLoResult { high, low })
    }
}

fn require_five(hole: &[Card], community: &[Card]) -> Result<Vec<Card>, GameError> {
    let all: Vec<Card> = hole.iter().chain(community).copied().collect();
    if all.len() < 5 {
        return Err(GameError::NotEnoughCards {
            needed: 5,
            actual: all.len(),
        });
    }
    Ok(all)
}

/// Two hole cards plus up to five community cards; any five may play.
#[derive(Debug, Clone, Default)]
pub struct TexasHoldemEvaluator {
    rules: EvaluationRules,
}

impl TexasHoldemEvaluator {
    pub const HOLE_CARDS: usize = 2;

    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            rules: EvaluationRules::new(config),
        }
    }
}

impl HandEvaluator for TexasHoldemEvaluator {
    fn name(&self) -> &'static str {
        "Texas Hold'em"
    }

    fn rules(&self) -> &EvaluationRules {
        &self.rules
    }

    fn candidates(&self, hole: &[Card], community: &[Card]) -> Result<Vec<Vec<Card>>, GameError> {
        if hole.len() != Self::HOLE_CARDS {
            return Err(GameError::InvalidHandSize {
                variant: self.name(),
                expected: Self::HOLE_CARDS,
                actual: hole.len(),
            });
        }
        Ok(combinations(&require_five(hole, community)?, 5))
    }
}

/// Seven-card stud: up to seven own cards and no board, best five of them.
///
/// Community cards are only present when the deck runs short and a shared
/// card is dealt; they join the player's cards.
#[derive(Debug, Clone, Default)]
pub struct SevenCardStudEvaluator {
    rules: EvaluationRules,
}

impl SevenCardStudEvaluator {
    pub const MAX_CARDS: usize = 7;

    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            rules: EvaluationRules::new(config),
        }
    }
}

impl HandEvaluator for SevenCardStudEvaluator {
    fn name(&self) -> &'static str {
        "Seven Card Stud"
    }

    fn rules(&self) -> &EvaluationRules {
        &self.rules
    }

    fn candidates(&self, hole: &[Card], community: &[Card]) -> Result<Vec<Vec<Card>>, GameError> {
        if hole.len() > Self::MAX_CARDS {
            return Err(GameError::InvalidHandSize {
                variant: self.name(),
                expected: Self::MAX_CARDS,
                actual: hole.len(),
            });
        }
        Ok(combinations(&require_five(hole, community)?, 5))
    }
}

/// Four hole cards; a hand uses exactly two of them and exactly three
/// community cards.
#[derive(Debug, Clone, Default)]
pub struct OmahaEvaluator {
    rules: EvaluationRules,
}

impl OmahaEvaluator {
    pub const HOLE_CARDS: usize = 4;

    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            rules: EvaluationRules::new(config),
        }
    }
}

impl HandEvaluator for OmahaEvaluator {
    fn name(&self) -> &'static str {
        "Omaha"
    }

    fn rules(&self) -> &EvaluationRules {
        &self.rules
    }

    fn candidates(&self, hole: &[Card], community: &[Card]) -> Result<Vec<Vec<Card>>, GameError> {
        if hole.len() != Self::HOLE_CARDS {
            return Err(GameError::InvalidHandSize {
                variant: self.name(),
                expected: Self::HOLE_CARDS,
                actual: hole.len(),
            });
        }
        if community.len() < 3 {
            return Err(GameError::NotEnoughCards {
                needed: Self::HOLE_CARDS + 3,
                actual: hole.len() + community.len(),
            });
        }
        Ok(omaha_combinations(hole, community))
    }
}
