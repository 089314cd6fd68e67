//! Card, seat, and table formatters for terminal display.
//!
//! Pure functions from snapshot types to text. Uses Unicode suit symbols
//! with an ASCII fallback for terminals that cannot render them.

use gothahula_engine::cards::{Card, Suit};
use gothahula_engine::table::{GameStage, SeatView, TableView};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// A hand as `[A♠ K♥ 2♦]`, or face-down markers when the cards are hidden.
pub fn format_hand(cards: &[Card], hidden_count: usize) -> String {
    if cards.is_empty() {
        let backs = vec!["##"; hidden_count];
        return format!("[{}]", backs.join(" "));
    }
    let faces: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", faces.join(" "))
}

pub fn format_seat(seat: &SeatView, is_turn: bool) -> String {
    let marker = if is_turn { ">" } else { " " };
    let status = if seat.is_packed {
        "packed"
    } else if seat.is_seen {
        "seen"
    } else {
        "blind"
    };
    format!(
        "{} {:<6} {:>6} coins  bet {:>4}  {:<6} {}",
        marker,
        seat.name,
        seat.coins,
        seat.current_bet,
        status,
        format_hand(&seat.hand, seat.card_count),
    )
}

/// Render a full table snapshot as a text block.
pub fn format_table(view: &TableView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "== {:?} | pot {} | deck {} ==\n",
        view.stage, view.pot, view.deck_remaining
    ));
    for seat in &view.seats {
        let is_turn = view.stage == GameStage::Betting && seat.id == view.turn_index;
        out.push_str(&format_seat(seat, is_turn));
        out.push('\n');
    }
    if let Some(winner) = view.winner {
        if let Some(seat) = view.seats.iter().find(|s| s.id == winner) {
            out.push_str(&format!("** {} wins the hand **\n", seat.name));
        }
    }
    for msg in &view.messages {
        out.push_str(&format!("  [{:?}] {}\n", msg.role, msg.text));
    }
    out
}
