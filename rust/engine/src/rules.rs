use crate::errors::GameError;
use crate::player::PlayerAction as A;
use crate::variant::BettingStructure;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

/// What the acting player faces when choosing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BettingContext {
    /// Player's remaining chip stack
    pub stack: u32,
    /// Amount needed to call the current bet
    pub to_call: u32,
    /// Minimum allowed raise increment (typically the previous raise size)
    pub min_raise: u32,
    /// Chips already in the middle, pending bets included
    pub pot: u32,
    pub structure: BettingStructure,
    /// Bet size for the current street under fixed-limit
    pub fixed_bet: u32,
}

impl BettingContext {
    pub fn no_limit(stack: u32, to_call: u32, min_raise: u32) -> Self {
        Self {
            stack,
            to_call,
            min_raise,
            pot: 0,
            structure: BettingStructure::NoLimit,
            fixed_bet: 0,
        }
    }

    /// Largest bet or raise increment the structure allows, if any.
    pub fn max_increment(&self) -> Option<u32> {
        match self.structure {
            BettingStructure::NoLimit => None,
            // pot-limit: the pot as it stands after the player calls
            BettingStructure::PotLimit => Some(self.pot + self.to_call),
            BettingStructure::FixedLimit => Some(self.fixed_bet),
        }
    }

    fn check_increment(&self, amount: u32) -> Result<(), GameError> {
        match self.max_increment() {
            Some(maximum) if amount > maximum => Err(GameError::BetExceedsLimit { amount, maximum }),
            _ => Ok(()),
        }
    }
}

/// Validates a player action against the stack, the price to call and the
/// betting structure.
///
/// Amounts the player cannot cover become an all-in for the whole stack.
/// Under fixed-limit a bet or raise must be exactly the fixed increment;
/// under pot-limit it may not exceed the pot after calling.
///
/// # Errors
///
/// - [`GameError::InsufficientChips`] - Player tries to check when facing a bet
/// - [`GameError::InvalidBetAmount`] - Bet/raise amount is below minimum or zero
/// - [`GameError::BetExceedsLimit`] - Bet/raise is above the structure's cap
///
/// # Examples
///
/// ```
/// use multipoker_engine::rules::{validate_action, BettingContext, ValidatedAction};
/// use multipoker_engine::player::PlayerAction;
///
/// let ctx = BettingContext::no_limit(1000, 50, 100);
/// assert_eq!(validate_action(&ctx, PlayerAction::Call), Ok(ValidatedAction::Call(50)));
///
/// // All-in when stack is insufficient for full raise
/// let short = BettingContext::no_limit(80, 50, 100);
/// assert_eq!(
///     validate_action(&short, PlayerAction::Raise(100)),
///     Ok(ValidatedAction::AllIn(80))
/// );
/// ```
pub fn validate_action(ctx: &BettingContext, action: A) -> Result<ValidatedAction, GameError> {
    let stack = ctx.stack;
    let to_call = ctx.to_call;
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::InsufficientChips)
            }
        }
        A::Call => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(amount) => {
            if amount == 0 {
                return Err(GameError::InvalidBetAmount { amount, minimum: 1 });
            }
            if amount >= stack {
                ctx.check_increment(stack)?;
                return Ok(ValidatedAction::AllIn(stack));
            }
            ctx.check_increment(amount)?;
            if ctx.structure == BettingStructure::FixedLimit && amount != ctx.fixed_bet {
                return Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: ctx.fixed_bet,
                });
            }
            Ok(ValidatedAction::Bet(amount))
        }
        A::Raise(amount) => {
            if amount.saturating_add(to_call) >= stack {
                ctx.check_increment(stack.saturating_sub(to_call))?;
                Ok(ValidatedAction::AllIn(stack))
            } else if amount < ctx.min_raise {
                Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: ctx.min_raise,
                })
            } else {
                ctx.check_increment(amount)?;
                if ctx.structure == BettingStructure::FixedLimit && amount != ctx.fixed_bet {
                    return Err(GameError::InvalidBetAmount {
                        amount,
                        minimum: ctx.fixed_bet,
                    });
                }
                Ok(ValidatedAction::Raise(amount))
            }
        }
        A::AllIn => {
            ctx.check_increment(stack.saturating_sub(to_call))?;
            Ok(ValidatedAction::AllIn(stack))
        }
    }
}
