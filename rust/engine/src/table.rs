use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::{Seat, HUMAN_SEAT};

/// Maximum number of retained chat/commentary messages.
pub const MESSAGE_LOG_CAP: usize = 10;

/// Lifecycle stage of the table.
///
/// `Dealing` and `Showdown` are transient: the engine passes through them
/// inside `start_new_hand` and the showdown path, but they are first-class
/// variants so hosts and tests can observe every transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStage {
    /// Before the first hand
    Lobby,
    /// Cards are being dealt
    Dealing,
    /// Betting round in progress
    Betting,
    /// Hands are being compared
    Showdown,
    /// Hand resolved; winner retained until the next hand starts
    GameOver,
}

/// Who authored a message in the table feed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    Dealer,
    Player,
}

/// One entry in the table's message feed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub text: String,
}

/// Bounded message log; pushing past the cap drops the oldest entry.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn push(&mut self, role: MessageRole, text: impl Into<String>) {
        if self.entries.len() >= MESSAGE_LOG_CAP {
            self.entries.remove(0);
        }
        self.entries.push(ChatMessage {
            role,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }
}

/// A seat as exposed at the presentation boundary. Hands of non-human seats
/// are masked (empty) until the hand is over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatView {
    pub id: usize,
    pub name: String,
    pub coins: u32,
    /// Visible cards; empty while the seat's hand is hidden
    pub hand: Vec<Card>,
    /// Number of cards the seat holds, visible or not
    pub card_count: usize,
    pub is_seen: bool,
    pub is_packed: bool,
    pub current_bet: u32,
}

impl SeatView {
    fn from_seat(seat: &Seat, reveal: bool) -> Self {
        let visible = reveal || seat.id == HUMAN_SEAT;
        Self {
            id: seat.id,
            name: seat.name.clone(),
            coins: seat.coins,
            hand: if visible { seat.hand.clone() } else { Vec::new() },
            card_count: seat.hand.len(),
            is_seen: seat.is_seen,
            is_packed: seat.is_packed,
            current_bet: seat.current_bet,
        }
    }
}

/// Read-only snapshot of the table for the presentation layer, produced
/// after every state transition. The core never depends on how this is
/// rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableView {
    pub stage: GameStage,
    pub pot: u32,
    pub deck_remaining: usize,
    pub seats: Vec<SeatView>,
    pub turn_index: usize,
    pub winner: Option<usize>,
    pub messages: Vec<ChatMessage>,
}

impl TableView {
    pub(crate) fn build(
        stage: GameStage,
        pot: u32,
        deck_remaining: usize,
        seats: &[Seat],
        turn_index: usize,
        winner: Option<usize>,
        log: &MessageLog,
    ) -> Self {
        let reveal = stage == GameStage::GameOver;
        Self {
            stage,
            pot,
            deck_remaining,
            seats: seats.iter().map(|s| SeatView::from_seat(s, reveal)).collect(),
            turn_index,
            winner,
            messages: log.entries().to_vec(),
        }
    }
}
