use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// A pot of chips with the players who paid into it and the players who
/// may still win it.
///
/// `amount` always equals the sum of the contributions. Eligibility starts
/// with a player's first contribution and only ends through
/// [`Pot::remove_eligible_player`], which never touches the chips.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    amount: u32,
    contributions: BTreeMap<PlayerId, u32>,
    eligible: BTreeSet<PlayerId>,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn add_contribution(&mut self, player: &PlayerId, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.contributions.entry(player.clone()).or_insert(0) += amount;
        self.eligible.insert(player.clone());
        self.amount += amount;
    }

    pub fn contribution(&self, player: &PlayerId) -> u32 {
        self.contributions.get(player).copied().unwrap_or(0)
    }

    pub fn contributions(&self) -> &BTreeMap<PlayerId, u32> {
        &self.contributions
    }

    pub fn is_player_eligible(&self, player: &PlayerId) -> bool {
        self.eligible.contains(player)
    }

    pub fn eligible_players(&self) -> Vec<&PlayerId> {
        self.eligible.iter().collect()
    }

    pub fn remove_eligible_player(&mut self, player: &PlayerId) {
        self.eligible.remove(player);
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0 && self.contributions.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Main pot, side pots and the bets of the street in progress.
///
/// `total_pot_amount` covers all three, so chips are visible from the moment
/// they are bet. Only [`PotManager::collect_bets`] empties the pending
/// ledger, and only [`PotManager::clear`] empties the pots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PotManager {
    main_pot: Pot,
    side_pots: Vec<Pot>,
    pending: BTreeMap<PlayerId, u32>,
    folded: BTreeSet<PlayerId>,
}

impl PotManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds to the player's bet for the current street. Stack checks belong
    /// to the caller.
    pub fn add_bet(&mut self, player: &PlayerId, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.pending.entry(player.clone()).or_insert(0) += amount;
    }

    pub fn pending_bet(&self, player: &PlayerId) -> u32 {
        self.pending.get(player).copied().unwrap_or(0)
    }

    pub fn pending_bets(&self) -> &BTreeMap<PlayerId, u32> {
        &self.pending
    }

    /// Moves the street's bets into the pots, layering all-in amounts into
    /// side pots.
    ///
    /// Bets are taken smallest first. Each distinct bet size closes a tier:
    /// everyone who bet at least that much pays the difference to the
    /// previous size into the tier, and every non-folded payer becomes
    /// eligible for it. A tier joins the open pot (the newest side pot, or
    /// the main pot) when that pot is still empty or is contested by exactly
    /// the same players; otherwise it opens a new side pot.
    pub fn collect_bets(&mut self) {
        let mut snapshot: Vec<(PlayerId, u32)> = std::mem::take(&mut self.pending)
            .into_iter()
            .filter(|(_, amount)| *amount > 0)
            .collect();
        snapshot.sort_by(|(pa, a), (pb, b)| a.cmp(b).then_with(|| pa.cmp(pb)));

        let mut prev_amount = 0;
        for (i, (_, amount)) in snapshot.iter().enumerate() {
            if *amount <= prev_amount {
                continue;
            }
            let tier = *amount - prev_amount;
            // sorted ascending: every later entry bet at least `amount`
            let payers = &snapshot[i..];
            let eligible: BTreeSet<PlayerId> = payers
                .iter()
                .map(|(id, _)| id.clone())
                .filter(|id| !self.folded.contains(id))
                .collect();

            let pot = self.pot_for_tier(&eligible);
            for (id, _) in payers {
                pot.add_contribution(id, tier);
                if !eligible.contains(id) {
                    pot.remove_eligible_player(id);
                }
            }
            tracing::debug!(
                tier,
                payers = payers.len(),
                eligible = eligible.len(),
                side_pots = self.side_pots.len(),
                "collected bet tier"
            );
            prev_amount = *amount;
        }
    }

    fn pot_for_tier(&mut self, eligible: &BTreeSet<PlayerId>) -> &mut Pot {
        let open = self.side_pots.last().unwrap_or(&self.main_pot);
        let joins_open = open.is_empty() || eligible.is_empty() || open.eligible == *eligible;
        if !joins_open {
            self.side_pots.push(Pot::new());
        }
        match self.side_pots.last_mut() {
            Some(pot) => pot,
            None => &mut self.main_pot,
        }
    }

    /// Takes the player out of contention for every pot (a fold). Chips
    /// already in the pots stay there, and chips still pending for the
    /// street will not make the player eligible when collected.
    pub fn remove_eligible_player(&mut self, player: &PlayerId) {
        self.main_pot.remove_eligible_player(player);
        for pot in &mut self.side_pots {
            pot.remove_eligible_player(player);
        }
        self.folded.insert(player.clone());
    }

    pub fn total_pot_amount(&self) -> u32 {
        self.main_pot.amount()
            + self.side_pots.iter().map(Pot::amount).sum::<u32>()
            + self.pending.values().sum::<u32>()
    }

    pub fn main_pot(&self) -> &Pot {
        &self.main_pot
    }

    pub fn side_pots(&self) -> &[Pot] {
        &self.side_pots
    }

    /// Main pot first, then side pots in creation order.
    pub fn pots(&self) -> impl Iterator<Item = &Pot> {
        std::iter::once(&self.main_pot).chain(self.side_pots.iter())
    }

    /// Resets everything for the next hand.
    pub fn clear(&mut self) {
        self.main_pot.clear();
        self.side_pots.clear();
        self.pending.clear();
        self.folded.clear();
    }
}
