//! # multipoker-engine: Multi-Variant Poker Rules Core
//!
//! Decides which five-card hand is best (high and ace-to-five low) for
//! Texas Hold'em, Omaha and Seven Card Stud, layers street bets into a main
//! pot and side pots, and sequences the betting rounds of a hand. Everything
//! runs synchronously; one table owns one [`pot::PotManager`] and one
//! [`state::RoundStateMachine`], and tables never share them.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and deck construction
//! - [`deck`] - Seeded deck and the `CardSource` dealing trait
//! - [`hand`] - A player's cards with evaluator-assigned ranking
//! - [`combos`] - Grouping, pattern detection and combination generation
//! - [`ranking`] - Hand categories, scoring and comparison, low hands
//! - [`evaluator`] - Variant evaluators behind the `HandEvaluator` trait
//! - [`pot`] - Pot and side pot accounting
//! - [`state`] - Betting-round state machine with transition listeners
//! - [`player`] - Player state, actions, and stack management
//! - [`rules`] - Betting validation per betting structure
//! - [`variant`] - Game variant factory
//! - [`showdown`] - Winner determination and pot awards
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use multipoker_engine::cards::parse_cards;
//! use multipoker_engine::evaluator::{EvaluatorConfig, HandEvaluator, TexasHoldemEvaluator};
//! use multipoker_engine::ranking::Category;
//!
//! let evaluator = TexasHoldemEvaluator::new(EvaluatorConfig::default());
//! let hole = parse_cards("Ah Kh").unwrap();
//! let board = parse_cards("Qh Jh Th 2c 3d").unwrap();
//!
//! let result = evaluator.evaluate(&hole, &board).unwrap();
//! assert_eq!(result.category, Category::RoyalFlush);
//! ```
//!
//! ## Side Pots
//!
//! ```rust
//! use multipoker_engine::player::PlayerId;
//! use multipoker_engine::pot::PotManager;
//!
//! let (a, b, c) = (PlayerId::from("a"), PlayerId::from("b"), PlayerId::from("c"));
//! let mut pots = PotManager::new();
//! pots.add_bet(&a, 100);
//! pots.add_bet(&b, 100);
//! pots.add_bet(&c, 50); // all-in
//! pots.collect_bets();
//!
//! assert_eq!(pots.main_pot().amount(), 150);
//! assert_eq!(pots.side_pots()[0].amount(), 100);
//! assert!(!pots.side_pots()[0].is_player_eligible(&c));
//! ```
//!
//! ## Betting Rounds
//!
//! ```rust
//! use multipoker_engine::state::{RoundState, RoundStateMachine};
//!
//! let mut machine = RoundStateMachine::new();
//! assert!(machine.transition(RoundState::Starting));
//! assert!(!machine.transition(RoundState::River));
//! assert_eq!(machine.current_state(), RoundState::Starting);
//! ```

pub mod cards;
pub mod combos;
pub mod deck;
pub mod errors;
pub mod evaluator;
pub mod hand;
pub mod player;
pub mod pot;
pub mod ranking;
pub mod rules;
pub mod showdown;
pub mod state;
pub mod variant;
