use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Teen Patti hand categories, lowest to highest.
///
/// The derived `Ord` follows declaration order, so `Trail > PureSequence >
/// Sequence > Color > Pair > HighCard` holds for the enum as well as for the
/// numeric scores.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    /// No combination; the highest card decides
    HighCard,
    /// Two cards of the same rank
    Pair,
    /// Three cards of the same suit, not consecutive (flush)
    Color,
    /// Three consecutive cards of mixed suits (straight)
    Sequence,
    /// Three consecutive cards of the same suit (straight flush)
    PureSequence,
    /// Three cards of the same rank (set)
    Trail,
}

/// Result of evaluating a 3-card hand: the category plus a single score that
/// totally orders any two hands. Derived on demand, never stored.
///
/// Scores live in 10000-wide bands per category, so any hand in a higher
/// category outranks any hand in a lower one. Within a band the embedded
/// value (highest card, or the pair value) breaks ties; identical scores are
/// genuine ties.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub rank: HandRank,
    pub score: u32,
}

/// Classify a 3-card hand and compute its tie-break score.
///
/// Soft-fails to a zero-score High Card when the slice is not exactly three
/// cards: callers may evaluate transiently before a deal completes, so a
/// malformed hand is not an error here.
pub fn evaluate_hand(hand: &[Card]) -> Evaluation {
    if hand.len() != 3 {
        return Evaluation {
            rank: HandRank::HighCard,
            score: 0,
        };
    }

    let mut values: [u32; 3] = [
        hand[0].value() as u32,
        hand[1].value() as u32,
        hand[2].value() as u32,
    ];
    values.sort_unstable();
    let [v0, v1, v2] = values;

    let is_trail = v0 == v1 && v1 == v2;
    let is_flush = hand[0].suit == hand[1].suit && hand[1].suit == hand[2].suit;

    // A-2-3 counts as a sequence even though Ace is otherwise high
    let is_sequence =
        (v0 + 1 == v1 && v1 + 1 == v2) || (v0 == 2 && v1 == 3 && v2 == 14);

    if is_trail {
        return Evaluation {
            rank: HandRank::Trail,
            score: 60000 + v2,
        };
    }
    if is_sequence && is_flush {
        return Evaluation {
            rank: HandRank::PureSequence,
            score: 50000 + v2,
        };
    }
    if is_sequence {
        return Evaluation {
            rank: HandRank::Sequence,
            score: 40000 + v2,
        };
    }
    if is_flush {
        return Evaluation {
            rank: HandRank::Color,
            score: 30000 + v2,
        };
    }
    if v0 == v1 || v1 == v2 || v0 == v2 {
        // Pair score ignores the kicker entirely
        let pair_value = if v0 == v1 { v0 } else { v1 };
        return Evaluation {
            rank: HandRank::Pair,
            score: 20000 + pair_value,
        };
    }
    Evaluation {
        rank: HandRank::HighCard,
        score: 10000 + v2,
    }
}

/// Display label for a hand category. Total over the closed enum.
pub fn rank_label(rank: HandRank) -> &'static str {
    match rank {
        HandRank::Trail => "Set / Trail",
        HandRank::PureSequence => "Pure Sequence",
        HandRank::Sequence => "Sequence",
        HandRank::Color => "Color / Flush",
        HandRank::Pair => "Pair",
        HandRank::HighCard => "High Card",
    }
}
