use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;

/// Opaque player identity. Tables share players only through this id.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Active,
    Folded,
    AllIn,
    SittingOut,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

/// A player action during a betting round. Amounts on `Bet` and `Raise`
/// are always positive; build them through [`PlayerAction::new`] when the
/// amount comes from outside.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if no bet to call)
    Check,
    /// Call the current bet
    Call,
    /// Make a bet of specified amount
    Bet(u32),
    /// Raise the current bet by specified amount
    Raise(u32),
    /// Bet all remaining chips
    AllIn,
}

impl PlayerAction {
    /// # Errors
    ///
    /// [`GameError::InvalidActionAmount`] for a bet or raise whose amount is
    /// missing or zero.
    pub fn new(kind: ActionKind, amount: Option<u32>) -> Result<Self, GameError> {
        let sized = |wrap: fn(u32) -> PlayerAction| match amount {
            Some(a) if a > 0 => Ok(wrap(a)),
            _ => Err(GameError::InvalidActionAmount { kind, amount }),
        };
        match kind {
            ActionKind::Fold => Ok(PlayerAction::Fold),
            ActionKind::Check => Ok(PlayerAction::Check),
            ActionKind::Call => Ok(PlayerAction::Call),
            ActionKind::Bet => sized(PlayerAction::Bet),
            ActionKind::Raise => sized(PlayerAction::Raise),
            ActionKind::AllIn => Ok(PlayerAction::AllIn),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Bet(_) => ActionKind::Bet,
            PlayerAction::Raise(_) => ActionKind::Raise,
            PlayerAction::AllIn => ActionKind::AllIn,
        }
    }

    pub fn amount(&self) -> Option<u32> {
        match self {
            PlayerAction::Bet(a) | PlayerAction::Raise(a) => Some(*a),
            _ => None,
        }
    }
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 20_000;

/// A seated player: chips, the bet committed on the current street, and
/// the hole cards.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    stack: u32,
    current_bet: u32,
    hand: Hand,
    status: PlayerStatus,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, stack: u32) -> Self {
        Self {
            id: id.into(),
            stack,
            current_bet: 0,
            hand: Hand::new(),
            status: PlayerStatus::Active,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn status(&self) -> PlayerStatus {
        self.status
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    pub fn hole_cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Still able to win a pot: neither folded nor sitting out.
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    pub fn give_card(&mut self, c: Card) {
        self.hand.add_card(c);
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Moves up to `amount` chips from the stack into the current bet and
    /// returns how many actually moved. Emptying the stack puts the player
    /// all-in.
    pub fn place_bet(&mut self, amount: u32) -> u32 {
        let placed = amount.min(self.stack);
        self.stack -= placed;
        self.current_bet += placed;
        if self.stack == 0 && placed > 0 {
            self.status = PlayerStatus::AllIn;
        }
        placed
    }

    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    pub fn sit_out(&mut self) {
        self.status = PlayerStatus::SittingOut;
    }

    pub fn reset_for_street(&mut self) {
        self.current_bet = 0;
    }

    /// Clears cards and bet for a new hand; players with chips become active again.
    pub fn reset_for_hand(&mut self) {
        self.hand.clear();
        self.current_bet = 0;
        if self.status != PlayerStatus::SittingOut {
            self.status = if self.stack > 0 {
                PlayerStatus::Active
            } else {
                PlayerStatus::SittingOut
            };
        }
    }
}
