use crate::errors::GameError;
use crate::player::{Action, Seat};

/// An [`Action`] resolved against a seat's state: the amount it charges and
/// whether it flips the seat to seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Pack,
    /// Blind bet of 1x boot
    Blind(u32),
    /// Chaal bet of 2x boot; `upgrade_to_seen` is set when the seat invoked
    /// chaal while still blind
    Chaal { amount: u32, upgrade_to_seen: bool },
    Show,
}

/// Resolves a betting action into a [`ValidatedAction`], enforcing the
/// blind/seen betting tiers and the wallet balance.
///
/// Monetary rules:
/// - Blind is only available while the seat is unseen and charges 1x boot.
/// - Chaal charges 2x boot. A seat invoking chaal while unseen is upgraded
///   to seen and still pays the seen rate; the single "continue betting"
///   button in a UI maps to blind-or-chaal without a separate code path.
/// - A bet a seat cannot cover is rejected outright; coins never go
///   negative.
///
/// # Errors
///
/// - [`GameError::BlindAfterSeen`] - Blind requested by a seen seat
/// - [`GameError::InsufficientCoins`] - Wallet does not cover the bet
pub fn validate_action(seat: &Seat, boot: u32, action: Action) -> Result<ValidatedAction, GameError> {
    match action {
        Action::Pack => Ok(ValidatedAction::Pack),
        Action::Blind => {
            if seat.is_seen {
                return Err(GameError::BlindAfterSeen);
            }
            if !seat.can_afford(boot) {
                return Err(GameError::InsufficientCoins);
            }
            Ok(ValidatedAction::Blind(boot))
        }
        Action::Chaal => {
            let amount = boot * 2;
            if !seat.can_afford(amount) {
                return Err(GameError::InsufficientCoins);
            }
            Ok(ValidatedAction::Chaal {
                amount,
                upgrade_to_seen: !seat.is_seen,
            })
        }
        Action::Show => Ok(ValidatedAction::Show),
    }
}
