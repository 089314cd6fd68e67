//! # gothahula-ai: Bot Opponents for Teen Patti
//!
//! Decision policies for the automated seats. Policies are consulted once
//! per bot seat per turn and return a plain engine [`Action`]; all monetary
//! rules (blind/seen tiers, the chaal upgrade, pot accounting) stay in the
//! engine.
//!
//! ## Core Components
//!
//! - [`BotPolicy`] - Trait defining the decision-making interface
//! - [`random_policy`] - The baseline randomized policy
//! - [`create_policy`] - Factory function for policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use gothahula_ai::create_policy;
//! use gothahula_engine::engine::Engine;
//!
//! let mut policy = create_policy("random", Some(7));
//! let mut engine = Engine::new(Some(42), 100);
//! engine.start_new_hand().expect("hand starts");
//!
//! let seat = engine.seat(1);
//! let action = policy.choose(seat, engine.pot(), engine.boot());
//! println!("Bot chose: {:?}", action);
//! ```

use gothahula_engine::player::{Action, Seat};

pub mod random_policy;

/// Decision-making interface for an automated seat.
///
/// `choose` takes `&mut self` because policies own their RNG; beyond that a
/// policy is expected to be stateless across turns. Implementations must
/// always return an action that is valid for a seat with a dealt hand.
pub trait BotPolicy: Send {
    /// Choose an action for the given seat, pot, and boot amount.
    fn choose(&mut self, seat: &Seat, pot: u32, boot: u32) -> Action;

    /// Name of this policy implementation.
    fn name(&self) -> &str;
}

/// Factory for bot policies by name.
///
/// `seed` makes decisions reproducible; `None` seeds from entropy.
/// Currently supported: `"random"`.
///
/// # Panics
///
/// Panics if an unknown policy name is requested.
pub fn create_policy(kind: &str, seed: Option<u64>) -> Box<dyn BotPolicy> {
    match kind {
        "random" => Box::new(match seed {
            Some(s) => random_policy::RandomPolicy::with_seed(s),
            None => random_policy::RandomPolicy::new(),
        }),
        _ => panic!("Unknown bot policy: {}", kind),
    }
}
