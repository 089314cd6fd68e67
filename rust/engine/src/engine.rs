use tracing::info;

use crate::commentary::CommentaryRequest;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_hand, rank_label, Evaluation};
use crate::player::{
    Action, Seat, BOT_STARTING_COINS, HUMAN_SEAT, HUMAN_STARTING_COINS, SEAT_COUNT,
};
use crate::rules::{validate_action, ValidatedAction};
use crate::table::{GameStage, MessageLog, MessageRole, TableView};

/// What an applied action did to the hand, so hosts can branch without
/// re-reading the whole state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ActionOutcome {
    /// The action took effect and the hand continues
    Applied,
    /// The action was silently dropped (wrong stage, or a packed seat)
    Ignored,
    /// The action terminated the hand; stage is now GameOver
    HandOver,
}

/// The single owning controller for one three-seat Teen Patti table.
///
/// All table state lives here and is mutated only through the defined
/// operations; there is no ambient or global game state. Execution is
/// single-threaded and turn-driven: at most one action mutates the table at
/// any instant.
///
/// # Examples
///
/// ```
/// use gothahula_engine::engine::Engine;
/// use gothahula_engine::player::Action;
///
/// let mut engine = Engine::new(Some(42), 100);
/// engine.start_new_hand().expect("boot covered by starting wallets");
///
/// // Every seat anted the boot
/// assert_eq!(engine.pot(), 300);
///
/// // The human plays blind, then the bots take their turns
/// engine.apply_action(0, Action::Blind).expect("blind accepted");
/// engine.play_bot_turns(|_, _, _| Action::Chaal).expect("bots acted");
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    seats: [Seat; SEAT_COUNT],
    boot: u32,
    pot: u32,
    stage: GameStage,
    turn_index: usize,
    winner: Option<usize>,
    log: MessageLog,
}

impl Engine {
    pub fn new(seed: Option<u64>, boot: u32) -> Self {
        let seed = seed.unwrap_or(0xB007_CA2D);
        let seats = [
            Seat::new(HUMAN_SEAT, "You", HUMAN_STARTING_COINS),
            Seat::new(1, "Raj", BOT_STARTING_COINS),
            Seat::new(2, "Priya", BOT_STARTING_COINS),
        ];
        let mut log = MessageLog::default();
        log.push(
            MessageRole::Dealer,
            "Namaste! Welcome to Gothahula Teen Patti. I'm your host for tonight.",
        );
        Self {
            deck: Deck::new_with_seed(seed),
            seats,
            boot,
            pot: 0,
            stage: GameStage::Lobby,
            turn_index: HUMAN_SEAT,
            winner: None,
            log,
        }
    }

    pub fn stage(&self) -> GameStage {
        self.stage
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn boot(&self) -> u32 {
        self.boot
    }
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }
    pub fn seats(&self) -> &[Seat; SEAT_COUNT] {
        &self.seats
    }
    pub fn seat(&self, index: usize) -> &Seat {
        &self.seats[index]
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Append a line to the table feed (commentary replies land here, even
    /// when they arrive after later transitions).
    pub fn push_message(&mut self, role: MessageRole, text: impl Into<String>) {
        self.log.push(role, text);
    }

    /// Ante, deal, and open the betting round.
    ///
    /// Valid from Lobby or GameOver; a call mid-hand is a silent no-op.
    /// Every seat antes the boot into the pot and receives three cards off a
    /// freshly shuffled deck, in seat order. Per-hand flags reset, the turn
    /// returns to the human seat, and the previous winner is cleared.
    ///
    /// # Errors
    ///
    /// - [`GameError::InsufficientCoins`] - a seat cannot cover the boot;
    ///   the hand is not started and no coins move
    /// - [`GameError::DeckExhausted`] - dealing ran out of cards (cannot
    ///   happen with 3 seats and a 52-card deck; kept as a hard invariant)
    pub fn start_new_hand(&mut self) -> Result<(), GameError> {
        if !matches!(self.stage, GameStage::Lobby | GameStage::GameOver) {
            return Ok(());
        }
        if self.seats.iter().any(|s| !s.can_afford(self.boot)) {
            return Err(GameError::InsufficientCoins);
        }

        self.stage = GameStage::Dealing;
        self.pot = 0;
        self.winner = None;
        self.deck.shuffle();

        for seat in &mut self.seats {
            let cards = self.deck.deal_three().ok_or(GameError::DeckExhausted)?;
            seat.take_hand(cards);
            seat.commit_bet(self.boot);
            self.pot += self.boot;
        }

        self.turn_index = HUMAN_SEAT;
        self.stage = GameStage::Betting;
        info!(boot = self.boot, pot = self.pot, "hand started");
        self.log
            .push(MessageRole::Dealer, "The cards have been dealt. Luck is in the air!");
        Ok(())
    }

    /// Mark a seat as having looked at its cards.
    ///
    /// A status toggle, not a betting action: no coins move and the turn
    /// does not advance. Ignored outside the betting round or for a packed
    /// seat.
    pub fn see_cards(&mut self, seat_index: usize) {
        if self.stage != GameStage::Betting {
            return;
        }
        let seat = &mut self.seats[seat_index];
        if !seat.is_packed {
            seat.is_seen = true;
        }
    }

    /// Apply one betting action for the acting seat.
    ///
    /// Actions submitted outside the betting round, or by a packed seat,
    /// return [`ActionOutcome::Ignored`] rather than an error: out-of-order
    /// UI events are expected and harmless. A turn-consuming action advances
    /// the turn to the next non-packed seat, and the terminal condition is
    /// re-checked after every action.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotSeatsTurn`] - the seat is acting out of turn
    /// - [`GameError::BlindAfterSeen`] - blind requested by a seen seat
    /// - [`GameError::InsufficientCoins`] - the wallet does not cover the
    ///   bet; state is unchanged and the turn is not consumed
    pub fn apply_action(
        &mut self,
        seat_index: usize,
        action: Action,
    ) -> Result<ActionOutcome, GameError> {
        if self.stage != GameStage::Betting || self.seats[seat_index].is_packed {
            return Ok(ActionOutcome::Ignored);
        }
        if seat_index != self.turn_index {
            return Err(GameError::NotSeatsTurn {
                expected: self.turn_index,
                actual: seat_index,
            });
        }

        let validated = validate_action(&self.seats[seat_index], self.boot, action)?;
        match validated {
            ValidatedAction::Pack => {
                self.seats[seat_index].is_packed = true;
            }
            ValidatedAction::Blind(amount) => {
                self.seats[seat_index].commit_bet(amount);
                self.pot += amount;
            }
            ValidatedAction::Chaal {
                amount,
                upgrade_to_seen,
            } => {
                if upgrade_to_seen {
                    self.seats[seat_index].is_seen = true;
                }
                self.seats[seat_index].commit_bet(amount);
                self.pot += amount;
            }
            ValidatedAction::Show => {
                info!(seat = seat_index, "show requested");
                self.showdown();
                return Ok(ActionOutcome::HandOver);
            }
        }

        info!(
            seat = seat_index,
            action = ?action,
            pot = self.pot,
            "action applied"
        );
        let line = format!("{} {}.", self.seats[seat_index].name, action.label());
        let role = if seat_index == HUMAN_SEAT {
            MessageRole::Player
        } else {
            MessageRole::System
        };
        self.log.push(role, line);

        if self.active_count() == 1 {
            self.resolve_sole_survivor();
            return Ok(ActionOutcome::HandOver);
        }
        self.advance_turn();
        Ok(ActionOutcome::Applied)
    }

    /// Run every non-packed bot seat once through the supplied decision
    /// function, applying the same monetary rules as any other action.
    ///
    /// The terminal condition is re-checked after each bot; remaining bots
    /// do not act once the hand is over. A bot whose chosen bet it cannot
    /// afford packs instead of going negative.
    pub fn play_bot_turns<F>(&mut self, mut choose: F) -> Result<ActionOutcome, GameError>
    where
        F: FnMut(&Seat, u32, u32) -> Action,
    {
        for idx in (HUMAN_SEAT + 1)..SEAT_COUNT {
            if self.stage != GameStage::Betting {
                return Ok(ActionOutcome::HandOver);
            }
            if self.seats[idx].is_packed {
                continue;
            }
            let action = choose(&self.seats[idx], self.pot, self.boot);
            let outcome = match self.apply_action(idx, action) {
                Err(GameError::InsufficientCoins) => self.apply_action(idx, Action::Pack)?,
                other => other?,
            };
            if outcome == ActionOutcome::HandOver {
                return Ok(ActionOutcome::HandOver);
            }
        }
        Ok(ActionOutcome::Applied)
    }

    fn active_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_packed).count()
    }

    /// Advance the turn round-robin, skipping packed seats. Packed seats
    /// are never acted upon again within the hand.
    fn advance_turn(&mut self) {
        for step in 1..=SEAT_COUNT {
            let idx = (self.turn_index + step) % SEAT_COUNT;
            if !self.seats[idx].is_packed {
                self.turn_index = idx;
                return;
            }
        }
    }

    /// Evaluate all non-packed seats and award the pot to the best hand.
    /// Tied top scores resolve to the first seat in seat order (human
    /// first), the preserved first-seen-wins rule.
    fn showdown(&mut self) {
        self.stage = GameStage::Showdown;
        let mut best: Option<(usize, Evaluation)> = None;
        for seat in self.seats.iter().filter(|s| !s.is_packed) {
            let eval = evaluate_hand(&seat.hand);
            info!(seat = seat.id, rank = ?eval.rank, score = eval.score, "showdown hand");
            match best {
                Some((_, current)) if eval.score <= current.score => {}
                _ => best = Some((seat.id, eval)),
            }
        }
        if let Some((winner_idx, eval)) = best {
            self.finish_hand(winner_idx, Some(eval));
        }
    }

    /// Credit the last non-packed seat without evaluating; with a single
    /// survivor there is nothing to compare.
    fn resolve_sole_survivor(&mut self) {
        let survivor = self.seats.iter().find(|s| !s.is_packed).map(|s| s.id);
        if let Some(winner_idx) = survivor {
            self.finish_hand(winner_idx, None);
        }
    }

    fn finish_hand(&mut self, winner_idx: usize, eval: Option<Evaluation>) {
        let pot = self.pot;
        self.seats[winner_idx].credit(pot);
        self.pot = 0;
        self.winner = Some(winner_idx);
        self.stage = GameStage::GameOver;
        info!(winner = winner_idx, pot, "hand resolved");

        let name = &self.seats[winner_idx].name;
        let line = match eval {
            Some(eval) => format!(
                "{} wins {} coins with a {}!",
                name,
                pot,
                rank_label(eval.rank)
            ),
            None => format!("{} takes the pot of {} coins.", name, pot),
        };
        self.log.push(MessageRole::Dealer, line);
    }

    /// Read-only snapshot for the presentation boundary, safe to produce
    /// after any transition. Bot hands stay masked until GameOver.
    pub fn snapshot(&self) -> TableView {
        TableView::build(
            self.stage,
            self.pot,
            self.deck.remaining(),
            &self.seats,
            self.turn_index,
            self.winner,
            &self.log,
        )
    }

    /// Build a commentary request describing a seat after its last action.
    pub fn commentary_request_for(
        &self,
        seat_index: usize,
        last_action: Option<String>,
    ) -> CommentaryRequest {
        let seat = &self.seats[seat_index];
        CommentaryRequest {
            stage: self.stage,
            pot: self.pot,
            seat_name: seat.name.clone(),
            seat_coins: seat.coins,
            is_seen: seat.is_seen,
            last_action,
        }
    }
}
