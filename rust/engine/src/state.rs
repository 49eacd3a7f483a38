//! Betting-round sequencing for a single table.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::variant::GameVariant;

/// Where a table is in the life of a hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    Waiting,
    Starting,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Finished,
}

impl RoundState {
    /// The only state this one may move to. `Finished` wraps to `Waiting`.
    pub const fn next(self) -> RoundState {
        match self {
            RoundState::Waiting => RoundState::Starting,
            RoundState::Starting => RoundState::Preflop,
            RoundState::Preflop => RoundState::Flop,
            RoundState::Flop => RoundState::Turn,
            RoundState::Turn => RoundState::River,
            RoundState::River => RoundState::Showdown,
            RoundState::Showdown => RoundState::Finished,
            RoundState::Finished => RoundState::Waiting,
        }
    }

    /// Streets on which players bet.
    pub const fn is_betting_street(self) -> bool {
        matches!(
            self,
            RoundState::Preflop | RoundState::Flop | RoundState::Turn | RoundState::River
        )
    }

    /// Community cards on the table once this state is reached.
    pub const fn community_cards_dealt(self, variant: GameVariant) -> usize {
        if !variant.uses_community_cards() {
            return 0;
        }
        match self {
            RoundState::Flop => 3,
            RoundState::Turn => 4,
            RoundState::River | RoundState::Showdown | RoundState::Finished => 5,
            _ => 0,
        }
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundState::Waiting => "waiting",
            RoundState::Starting => "starting",
            RoundState::Preflop => "preflop",
            RoundState::Flop => "flop",
            RoundState::Turn => "turn",
            RoundState::River => "river",
            RoundState::Showdown => "showdown",
            RoundState::Finished => "finished",
        };
        f.write_str(s)
    }
}

/// Handle returned when a listener is registered; pass it back to remove it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

type StateListener = Box<dyn FnMut(RoundState, RoundState) + Send>;

/// Owns the current [`RoundState`] of one table and the listeners that
/// want to hear about every committed transition.
///
/// Listeners run synchronously inside [`RoundStateMachine::transition`], in
/// registration order, after the new state is committed. A panicking
/// listener is logged and skipped; the remaining listeners still run.
pub struct RoundStateMachine {
    current: RoundState,
    listeners: Vec<(ListenerId, StateListener)>,
    next_listener: u64,
}

impl Default for RoundStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundStateMachine")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RoundStateMachine {
    pub fn new() -> Self {
        Self {
            current: RoundState::Waiting,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn current_state(&self) -> RoundState {
        self.current
    }

    pub fn can_transition(&self, target: RoundState) -> bool {
        self.current.next() == target
    }

    /// Moves to `target` if it is the successor of the current state and
    /// notifies listeners with `(previous, current)`. Anything else returns
    /// `false` and changes nothing.
    pub fn transition(&mut self, target: RoundState) -> bool {
        if !self.can_transition(target) {
            tracing::debug!(from = %self.current, to = %target, "rejected state transition");
            return false;
        }
        let previous = self.current;
        self.current = target;
        tracing::debug!(from = %previous, to = %target, "state transition");

        for (id, listener) in &mut self.listeners {
            let outcome = catch_unwind(AssertUnwindSafe(|| listener(previous, target)));
            if outcome.is_err() {
                tracing::warn!(listener = id.0, from = %previous, to = %target, "state listener panicked");
            }
        }
        true
    }

    /// Advances to the successor state.
    pub fn advance(&mut self) -> RoundState {
        let target = self.current.next();
        self.transition(target);
        self.current
    }

    pub fn add_state_change_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(RoundState, RoundState) + Send + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drops the listener. Returns `false` if it was not registered.
    pub fn remove_state_change_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Puts the table back to `Waiting` without notifying anyone.
    pub fn reset(&mut self) {
        self.current = RoundState::Waiting;
    }
}
