use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::evaluator::HandEvaluator;
use crate::ranking::{Category, HandEvaluationResult};

/// Rank metadata an evaluator stamps onto a [`Hand`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRanking {
    pub category: Category,
    pub rank_value: u32,
    pub description: String,
}

/// A player's cards in the order they were dealt.
///
/// Cards are only ever appended until the hand is cleared. Any change to the
/// cards drops the stored ranking, so a stale ranking is never visible.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    ranking: Option<HandRanking>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            ranking: None,
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.ranking = None;
    }

    pub fn add_cards(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
        self.ranking = None;
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.ranking = None;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ranking(&self) -> Option<&HandRanking> {
        self.ranking.as_ref()
    }

    pub fn category(&self) -> Option<Category> {
        self.ranking.as_ref().map(|r| r.category)
    }

    pub fn rank_value(&self) -> Option<u32> {
        self.ranking.as_ref().map(|r| r.rank_value)
    }

    pub fn description(&self) -> Option<&str> {
        self.ranking.as_ref().map(|r| r.description.as_str())
    }

    pub fn set_ranking(&mut self, result: &HandEvaluationResult) {
        self.ranking = Some(HandRanking {
            category: result.category,
            rank_value: result.rank_value,
            description: result.description.clone(),
        });
    }

    /// Evaluates these cards against the board and stores the resulting ranking.
    pub fn evaluate_with(
        &mut self,
        evaluator: &dyn HandEvaluator,
        community: &[Card],
    ) -> Result<HandEvaluationResult, GameError> {
        let result = evaluator.evaluate(&self.cards, community)?;
        self.set_ranking(&result);
        Ok(result)
    }
}
