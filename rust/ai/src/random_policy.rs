//! Baseline randomized bot policy.
//!
//! Memoryless and intentionally blind to hand strength: the decision is a
//! single uniform draw against fixed thresholds. It never considers pot
//! odds or opponents' visible behavior, which keeps bot play fast, simple,
//! and statistically predictable for tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use gothahula_engine::player::{Action, Seat};

use crate::BotPolicy;

/// Randomized decision policy for a bot seat.
///
/// Per decision, with `r` drawn uniformly from `[0, 1)`:
/// - `r < 0.15` - pack
/// - `0.15 <= r < 0.40` while unseen - blind
/// - otherwise - chaal (the engine upgrades an unseen seat and charges the
///   seen rate)
///
/// A seat with no dealt cards always plays blind rather than act on a hand
/// it does not hold.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl BotPolicy for RandomPolicy {
    fn choose(&mut self, seat: &Seat, _pot: u32, _boot: u32) -> Action {
        if seat.hand.is_empty() {
            return Action::Blind;
        }
        let r: f64 = self.rng.random();
        if r < 0.15 {
            Action::Pack
        } else if r < 0.40 && !seat.is_seen {
            Action::Blind
        } else {
            Action::Chaal
        }
    }

    fn name(&self) -> &str {
        "RandomPolicy"
    }
}
