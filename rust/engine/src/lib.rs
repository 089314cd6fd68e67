//! # gothahula-engine: Teen Patti Game Engine Core
//!
//! A deterministic three-player Teen Patti engine: one human seat, two
//! automated opponents, discrete hands against a shared pot of virtual
//! coins. Seeded RNG makes every shuffle (and therefore every hand)
//! reproducible.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - 3-card hand classification and tie-break scoring
//! - [`player`] - Seat state, wallets, and the betting action set
//! - [`rules`] - Blind/seen bet validation and the chaal upgrade
//! - [`engine`] - The betting state machine and table controller
//! - [`table`] - Game stage, message feed, and presentation snapshots
//! - [`commentary`] - Fire-and-forget advisory dealer commentary
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use gothahula_engine::engine::Engine;
//! use gothahula_engine::player::Action;
//!
//! let mut engine = Engine::new(Some(42), 100);
//! engine.start_new_hand().expect("wallets cover the boot");
//!
//! engine.see_cards(0);
//! engine.apply_action(0, Action::Chaal).expect("chaal accepted");
//! engine.play_bot_turns(|_, _, _| Action::Chaal).expect("bots acted");
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use gothahula_engine::cards::{Card, Rank, Suit};
//! use gothahula_engine::hand::{evaluate_hand, HandRank};
//!
//! // Unsuited A-2-3 is the wheel: a valid low-to-Ace sequence
//! let wheel = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Spades, rank: Rank::Three },
//! ];
//! let eval = evaluate_hand(&wheel);
//! assert_eq!(eval.rank, HandRank::Sequence);
//! assert_eq!(eval.score, 40014);
//! ```

pub mod cards;
pub mod commentary;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod player;
pub mod rules;
pub mod table;
