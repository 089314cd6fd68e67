use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Number of seats at the table: one human, two bots.
pub const SEAT_COUNT: usize = 3;
/// Index of the human-controlled seat.
pub const HUMAN_SEAT: usize = 0;
/// Default boot (ante) collected from every seat at hand start.
pub const DEFAULT_BOOT: u32 = 100;
/// Starting wallet for the human seat.
pub const HUMAN_STARTING_COINS: u32 = 10_000;
/// Starting wallet for each bot seat.
pub const BOT_STARTING_COINS: u32 = 5_000;

/// A betting action for the acting seat.
///
/// "See" is deliberately not a variant: looking at one's cards is a status
/// toggle that consumes no turn and moves no money, so it is a separate
/// engine method rather than part of the per-turn action contract.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Fold; committed bets stay in the pot
    Pack,
    /// Bet 1x boot without having seen the cards
    Blind,
    /// Bet 2x boot; auto-upgrades an unseen seat to seen
    Chaal,
    /// Request an immediate showdown among all non-packed seats
    Show,
}

impl Action {
    /// Past-tense label used for commentary and the message log.
    pub fn label(self) -> &'static str {
        match self {
            Action::Pack => "packed",
            Action::Blind => "played blind",
            Action::Chaal => "played chaal",
            Action::Show => "called for a show",
        }
    }
}

/// One seat at the table: wallet, dealt hand, and per-hand flags.
///
/// Owned by the engine; all mutation goes through the engine's action
/// methods so the invariants hold: `hand` is empty or exactly 3 cards,
/// `is_packed` only ever flips false to true within a hand, and `coins`
/// never underflows because bets are rejected up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    /// Seat index (0 = human)
    pub id: usize,
    /// Display name
    pub name: String,
    /// Wallet balance in virtual coins
    pub coins: u32,
    /// Dealt cards (empty or exactly 3)
    pub hand: Vec<Card>,
    /// Whether the seat has looked at its cards
    pub is_seen: bool,
    /// Whether the seat has folded this hand
    pub is_packed: bool,
    /// Coins committed by this seat during the current hand (boot included)
    pub current_bet: u32,
}

impl Seat {
    pub fn new(id: usize, name: impl Into<String>, coins: u32) -> Self {
        Self {
            id,
            name: name.into(),
            coins,
            hand: Vec::new(),
            is_seen: false,
            is_packed: false,
            current_bet: 0,
        }
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.coins >= amount
    }

    /// Deduct a bet from the wallet and add it to the seat's running total.
    /// The caller checks affordability first; this saturates as a backstop.
    pub(crate) fn commit_bet(&mut self, amount: u32) {
        self.coins = self.coins.saturating_sub(amount);
        self.current_bet += amount;
    }

    pub(crate) fn credit(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Reset per-hand state and take the newly dealt cards.
    pub(crate) fn take_hand(&mut self, cards: [Card; 3]) {
        self.hand = cards.to_vec();
        self.is_seen = false;
        self.is_packed = false;
        self.current_bet = 0;
    }
}
