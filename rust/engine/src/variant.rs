//! Game variants, betting structures and the factory that turns them into a
//! ready-to-use [`GameConfig`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::evaluator::{
    EvaluatorConfig, HandEvaluator, OmahaEvaluator, SevenCardStudEvaluator, TexasHoldemEvaluator,
    DEFAULT_LOW_QUALIFIER,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameVariant {
    TexasHoldem,
    Omaha,
    SevenCardStud,
}

impl GameVariant {
    pub const fn uses_community_cards(self) -> bool {
        !matches!(self, GameVariant::SevenCardStud)
    }

    pub const fn name(self) -> &'static str {
        match self {
            GameVariant::TexasHoldem => "Texas Hold'em",
            GameVariant::Omaha => "Omaha",
            GameVariant::SevenCardStud => "Seven Card Stud",
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

impl FromStr for GameVariant {
    type Err = GameError;

    /// Accepts common spellings: `"texas-holdem"`, `"Texas Hold'em"`,
    /// `"holdem"`, `"omaha"`, `"seven_card_stud"`, `"stud"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "texasholdem" | "holdem" | "nlhe" => Ok(GameVariant::TexasHoldem),
            "omaha" | "plo" => Ok(GameVariant::Omaha),
            "sevencardstud" | "7cardstud" | "stud" => Ok(GameVariant::SevenCardStud),
            _ => Err(GameError::UnsupportedVariant(s.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BettingStructure {
    NoLimit,
    PotLimit,
    FixedLimit,
}

impl BettingStructure {
    pub const fn name(self) -> &'static str {
        match self {
            BettingStructure::NoLimit => "No-Limit",
            BettingStructure::PotLimit => "Pot-Limit",
            BettingStructure::FixedLimit => "Fixed-Limit",
        }
    }
}

impl fmt::Display for BettingStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BettingStructure {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "nolimit" | "nl" => Ok(BettingStructure::NoLimit),
            "potlimit" | "pl" => Ok(BettingStructure::PotLimit),
            "fixedlimit" | "limit" | "fl" => Ok(BettingStructure::FixedLimit),
            _ => Err(GameError::UnsupportedBettingStructure(s.to_string())),
        }
    }
}

/// Split-pot settings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiLoOptions {
    pub hi_lo: bool,
    pub low_hand_qualifier: u8,
}

impl Default for HiLoOptions {
    fn default() -> Self {
        Self {
            hi_lo: false,
            low_hand_qualifier: DEFAULT_LOW_QUALIFIER,
        }
    }
}

/// Forced bets as multiples of the table's base stake.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlindMultipliers {
    pub small_blind: u32,
    pub big_blind: u32,
    pub ante: u32,
}

/// Everything a table needs to run a variant.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub variant: GameVariant,
    pub betting_structure: BettingStructure,
    pub hi_lo: HiLoOptions,
    pub evaluator: Arc<dyn HandEvaluator>,
    pub cards_per_player: usize,
    pub community_cards: usize,
    pub min_players: usize,
    pub max_players: usize,
    pub blinds: BlindMultipliers,
    pub rules_text: String,
}

impl GameConfig {
    pub fn new(variant: GameVariant, betting_structure: BettingStructure, hi_lo: HiLoOptions) -> Self {
        let eval_config = EvaluatorConfig {
            evaluate_low: hi_lo.hi_lo,
            low_hand_qualifier: hi_lo.low_hand_qualifier,
            aces_low: true,
        };
        let evaluator: Arc<dyn HandEvaluator> = match variant {
            GameVariant::TexasHoldem => Arc::new(TexasHoldemEvaluator::new(eval_config)),
            GameVariant::Omaha => Arc::new(OmahaEvaluator::new(eval_config)),
            GameVariant::SevenCardStud => Arc::new(SevenCardStudEvaluator::new(eval_config)),
        };
        let (cards_per_player, community_cards, max_players) = match variant {
            GameVariant::TexasHoldem => (2, 5, 10),
            GameVariant::Omaha => (4, 5, 10),
            GameVariant::SevenCardStud => (7, 0, 7),
        };
        let blinds = match variant {
            GameVariant::SevenCardStud => BlindMultipliers {
                small_blind: 0,
                big_blind: 0,
                ante: 1,
            },
            _ => BlindMultipliers {
                small_blind: 1,
                big_blind: 2,
                ante: 0,
            },
        };
        Self {
            variant,
            betting_structure,
            hi_lo,
            evaluator,
            cards_per_player,
            community_cards,
            min_players: 2,
            max_players,
            blinds,
            rules_text: rules_text(variant, betting_structure, hi_lo),
        }
    }
}

/// Builds a [`GameConfig`] from user-facing names.
///
/// # Errors
///
/// [`GameError::UnsupportedVariant`] or
/// [`GameError::UnsupportedBettingStructure`] naming the rejected value.
pub fn create_game_config(
    variant: &str,
    betting_structure: &str,
    hi_lo: Option<HiLoOptions>,
) -> Result<GameConfig, GameError> {
    let variant: GameVariant = variant.parse()?;
    let structure: BettingStructure = betting_structure.parse()?;
    Ok(GameConfig::new(variant, structure, hi_lo.unwrap_or_default()))
}

fn rules_text(variant: GameVariant, structure: BettingStructure, hi_lo: HiLoOptions) -> String {
    let deal = match variant {
        GameVariant::TexasHoldem => {
            "Each player receives 2 hole cards and shares 5 community cards. \
             The best five-card hand from any combination of the seven wins."
        }
        GameVariant::Omaha => {
            "Each player receives 4 hole cards and shares 5 community cards. \
             A hand must use exactly 2 hole cards and exactly 3 community cards."
        }
        GameVariant::SevenCardStud => {
            "Each player receives 7 cards of their own, 3 face down and 4 face up, \
             with no community cards. The best five of the seven wins."
        }
    };
    let betting = match structure {
        BettingStructure::NoLimit => "Players may bet any amount up to their whole stack.",
        BettingStructure::PotLimit => "Bets and raises are capped at the size of the pot.",
        BettingStructure::FixedLimit => {
            "Bets and raises come in fixed increments: the small bet on early streets, \
             the big bet on later streets."
        }
    };
    let suffix = if hi_lo.hi_lo { " Hi-Lo" } else { "" };
    let mut text = format!("{structure} {variant}{suffix}. {deal} {betting}");
    if hi_lo.hi_lo {
        text.push_str(&format!(
            " The pot is split between the best high hand and the best low hand; \
             a low must be five different ranks of {} or lower, aces low.",
            hi_lo.low_hand_qualifier
        ));
    }
    text
}
