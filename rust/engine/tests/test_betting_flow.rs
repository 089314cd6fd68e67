use gothahula_engine::engine::{ActionOutcome, Engine};
use gothahula_engine::errors::GameError;
use gothahula_engine::hand::evaluate_hand;
use gothahula_engine::player::{Action, HUMAN_SEAT};
use gothahula_engine::table::GameStage;

const BOOT: u32 = 100;

fn betting_engine(seed: u64) -> Engine {
    let mut engine = Engine::new(Some(seed), BOOT);
    engine.start_new_hand().expect("starting wallets cover the boot");
    engine
}

#[test]
fn boot_accounting_moves_exactly_one_boot_per_seat() {
    let mut engine = Engine::new(Some(42), BOOT);
    let before: Vec<u32> = engine.seats().iter().map(|s| s.coins).collect();
    engine.start_new_hand().expect("hand starts");

    assert_eq!(engine.pot(), BOOT * 3, "3 seats ante 100 each");
    for (seat, coins_before) in engine.seats().iter().zip(before) {
        assert_eq!(seat.coins, coins_before - BOOT);
        assert_eq!(seat.current_bet, BOOT);
        assert_eq!(seat.hand.len(), 3);
        assert!(!seat.is_seen);
        assert!(!seat.is_packed);
    }
    assert_eq!(engine.stage(), GameStage::Betting);
    assert_eq!(engine.turn_index(), HUMAN_SEAT);
    assert_eq!(engine.deck_remaining(), 43);
}

#[test]
fn dealt_hands_are_disjoint() {
    let engine = betting_engine(9);
    let mut all = std::collections::HashSet::new();
    for seat in engine.seats() {
        for &c in &seat.hand {
            assert!(all.insert(c), "card dealt twice");
        }
    }
    assert_eq!(all.len(), 9);
}

#[test]
fn blind_charges_one_boot() {
    let mut engine = betting_engine(42);
    let coins_before = engine.seat(HUMAN_SEAT).coins;
    let outcome = engine.apply_action(HUMAN_SEAT, Action::Blind).expect("blind ok");
    assert_eq!(outcome, ActionOutcome::Applied);
    assert_eq!(engine.seat(HUMAN_SEAT).coins, coins_before - BOOT);
    assert_eq!(engine.seat(HUMAN_SEAT).current_bet, BOOT * 2);
    assert_eq!(engine.pot(), BOOT * 4);
    assert!(!engine.seat(HUMAN_SEAT).is_seen, "blind bet does not reveal cards");
}

#[test]
fn chaal_while_unseen_upgrades_and_charges_seen_rate() {
    let mut engine = betting_engine(42);
    let coins_before = engine.seat(HUMAN_SEAT).coins;
    assert!(!engine.seat(HUMAN_SEAT).is_seen);

    engine.apply_action(HUMAN_SEAT, Action::Chaal).expect("chaal ok");
    let seat = engine.seat(HUMAN_SEAT);
    assert!(seat.is_seen, "chaal auto-upgrades an unseen seat");
    assert_eq!(coins_before - seat.coins, BOOT * 2, "charged 2x boot, not 1x");
    assert_eq!(engine.pot(), BOOT * 5);
}

#[test]
fn see_cards_is_free_and_consumes_no_turn() {
    let mut engine = betting_engine(42);
    let coins_before = engine.seat(HUMAN_SEAT).coins;
    let turn_before = engine.turn_index();

    engine.see_cards(HUMAN_SEAT);
    assert!(engine.seat(HUMAN_SEAT).is_seen);
    assert_eq!(engine.seat(HUMAN_SEAT).coins, coins_before);
    assert_eq!(engine.turn_index(), turn_before);
}

#[test]
fn blind_rejected_after_seeing_cards() {
    let mut engine = betting_engine(42);
    engine.see_cards(HUMAN_SEAT);
    let err = engine.apply_action(HUMAN_SEAT, Action::Blind).unwrap_err();
    assert_eq!(err, GameError::BlindAfterSeen);
    assert_eq!(engine.pot(), BOOT * 3, "rejected action moves no coins");
}

#[test]
fn acting_out_of_turn_is_an_error() {
    let mut engine = betting_engine(42);
    let err = engine.apply_action(2, Action::Blind).unwrap_err();
    assert_eq!(
        err,
        GameError::NotSeatsTurn {
            expected: HUMAN_SEAT,
            actual: 2
        }
    );
}

#[test]
fn turn_rotates_round_robin_skipping_packed() {
    let mut engine = betting_engine(42);
    engine.apply_action(0, Action::Blind).expect("human blind");
    assert_eq!(engine.turn_index(), 1);
    engine.apply_action(1, Action::Pack).expect("bot packs");
    assert_eq!(engine.turn_index(), 2);
    engine.apply_action(2, Action::Blind).expect("bot blind");
    assert_eq!(engine.turn_index(), 0, "back to the human");
    engine.apply_action(0, Action::Blind).expect("human blind again");
    assert_eq!(engine.turn_index(), 2, "packed seat 1 is skipped");
}

#[test]
fn packed_seat_actions_are_ignored() {
    let mut engine = betting_engine(42);
    engine.apply_action(0, Action::Blind).expect("human blind");
    engine.apply_action(1, Action::Pack).expect("bot packs");
    let outcome = engine.apply_action(1, Action::Blind).expect("no error");
    assert_eq!(outcome, ActionOutcome::Ignored);
    assert!(engine.seat(1).is_packed, "packed is monotonic within a hand");
}

#[test]
fn actions_outside_betting_stage_are_ignored() {
    let mut engine = Engine::new(Some(42), BOOT);
    assert_eq!(engine.stage(), GameStage::Lobby);
    let outcome = engine.apply_action(0, Action::Chaal).expect("no error");
    assert_eq!(outcome, ActionOutcome::Ignored);
    assert_eq!(engine.pot(), 0);

    engine.see_cards(0);
    assert!(!engine.seat(0).is_seen, "see is also guarded by stage");
}

#[test]
fn start_new_hand_mid_hand_is_a_no_op() {
    let mut engine = betting_engine(42);
    engine.apply_action(0, Action::Blind).expect("human blind");
    let pot = engine.pot();
    engine.start_new_hand().expect("no error");
    assert_eq!(engine.pot(), pot, "hand in progress is untouched");
    assert_eq!(engine.stage(), GameStage::Betting);
}

#[test]
fn single_survivor_wins_without_a_show() {
    let mut engine = betting_engine(42);
    let human_coins = engine.seat(0).coins;

    engine.apply_action(0, Action::Blind).expect("human blind");
    engine.apply_action(1, Action::Pack).expect("bot 1 packs");
    let outcome = engine.apply_action(2, Action::Pack).expect("bot 2 packs");

    assert_eq!(outcome, ActionOutcome::HandOver);
    assert_eq!(engine.stage(), GameStage::GameOver);
    assert_eq!(engine.winner(), Some(0));
    assert_eq!(engine.pot(), 0);
    // Pot was 3 boots + the human's blind
    assert_eq!(engine.seat(0).coins, human_coins - BOOT + BOOT * 4);
}

#[test]
fn show_triggers_showdown_among_non_packed_seats() {
    let mut engine = betting_engine(42);

    // Human plays blind, bot 1 packs, bot 2 chaals while unseen
    engine.apply_action(0, Action::Blind).expect("human blind");
    assert_eq!(engine.pot(), 400);
    engine.apply_action(1, Action::Pack).expect("bot 1 packs");
    engine.apply_action(2, Action::Chaal).expect("bot 2 chaal");
    assert!(engine.seat(2).is_seen, "unseen chaal upgraded");
    assert_eq!(engine.pot(), 600);

    let wallets: Vec<u32> = engine.seats().iter().map(|s| s.coins).collect();
    let human_eval = evaluate_hand(&engine.seat(0).hand);
    let bot_eval = evaluate_hand(&engine.seat(2).hand);
    // First-seen-wins: the human keeps a tie
    let expected_winner = if bot_eval.score > human_eval.score { 2 } else { 0 };

    let outcome = engine.apply_action(0, Action::Show).expect("show ok");
    assert_eq!(outcome, ActionOutcome::HandOver);
    assert_eq!(engine.stage(), GameStage::GameOver);
    assert_eq!(engine.winner(), Some(expected_winner));
    assert_eq!(engine.pot(), 0);
    assert_eq!(
        engine.seat(expected_winner).coins,
        wallets[expected_winner] + 600,
        "full pot credited to exactly one winner"
    );
    for idx in [0usize, 1, 2] {
        if idx != expected_winner {
            assert_eq!(engine.seat(idx).coins, wallets[idx], "losers keep their remainder");
        }
    }
}

#[test]
fn show_is_allowed_with_three_active_seats() {
    // Simplified table rule: show is not restricted to heads-up
    let mut engine = betting_engine(123);
    let outcome = engine.apply_action(0, Action::Show).expect("show ok");
    assert_eq!(outcome, ActionOutcome::HandOver);
    assert!(engine.winner().is_some());

    let scores: Vec<u32> = engine
        .seats()
        .iter()
        .map(|s| evaluate_hand(&s.hand).score)
        .collect();
    let best = *scores.iter().max().expect("three hands");
    let first_best = scores.iter().position(|&s| s == best).expect("max exists");
    assert_eq!(engine.winner(), Some(first_best), "first max in seat order wins");
}

#[test]
fn insufficient_coins_rejects_the_bet_and_keeps_state() {
    // Boot 3000: bots ante down to 2000, so a 6000 chaal is unaffordable
    let mut engine = Engine::new(Some(42), 3000);
    engine.start_new_hand().expect("everyone covers the boot once");

    engine.apply_action(0, Action::Pack).expect("human packs");
    let bot_coins = engine.seat(1).coins;
    let err = engine.apply_action(1, Action::Chaal).unwrap_err();
    assert_eq!(err, GameError::InsufficientCoins);
    assert_eq!(engine.seat(1).coins, bot_coins, "coins never go negative");
    assert_eq!(engine.turn_index(), 1, "rejected action does not consume the turn");
}

#[test]
fn bot_with_unaffordable_bet_packs_instead() {
    let mut engine = Engine::new(Some(42), 3000);
    engine.start_new_hand().expect("hand starts");
    engine.apply_action(0, Action::Blind).expect("human blind at 3000");

    // Both bots insist on chaal they cannot afford, so both pack and the
    // human wins by default.
    let outcome = engine
        .play_bot_turns(|_, _, _| Action::Chaal)
        .expect("bot turns run");
    assert_eq!(outcome, ActionOutcome::HandOver);
    assert_eq!(engine.winner(), Some(0));
    assert_eq!(engine.stage(), GameStage::GameOver);
}

#[test]
fn unaffordable_boot_refuses_to_start_the_hand() {
    let mut engine = Engine::new(Some(42), 6000);
    let err = engine.start_new_hand().unwrap_err();
    assert_eq!(err, GameError::InsufficientCoins);
    assert_eq!(engine.stage(), GameStage::Lobby, "hand not started");
    assert_eq!(engine.pot(), 0);
}

#[test]
fn bot_turns_stop_once_the_hand_is_over() {
    let mut engine = betting_engine(42);
    engine.apply_action(0, Action::Pack).expect("human packs");

    // Bot 1 packs, leaving bot 2 the sole survivor; bot 2 must not act.
    let mut consulted = Vec::new();
    let outcome = engine
        .play_bot_turns(|seat, _, _| {
            consulted.push(seat.id);
            Action::Pack
        })
        .expect("bot turns run");
    assert_eq!(outcome, ActionOutcome::HandOver);
    assert_eq!(consulted, vec![1], "terminal condition re-checked after each bot");
    assert_eq!(engine.winner(), Some(2));
}

#[test]
fn next_hand_resets_per_hand_state_and_keeps_wallets() {
    let mut engine = betting_engine(42);
    engine.see_cards(0);
    engine.apply_action(0, Action::Show).expect("show ends hand 1");
    assert_eq!(engine.stage(), GameStage::GameOver);
    assert!(engine.winner().is_some());

    let wallets: Vec<u32> = engine.seats().iter().map(|s| s.coins).collect();
    engine.start_new_hand().expect("hand 2 starts");

    assert_eq!(engine.stage(), GameStage::Betting, "GameOver loops back to Betting");
    assert_eq!(engine.winner(), None, "winner cleared on the next deal");
    assert_eq!(engine.pot(), BOOT * 3);
    for (seat, coins_before) in engine.seats().iter().zip(wallets) {
        assert_eq!(seat.coins, coins_before - BOOT);
        assert!(!seat.is_seen);
        assert!(!seat.is_packed);
        assert_eq!(seat.current_bet, BOOT);
    }
}

#[test]
fn full_round_with_scripted_bots_reaches_showdown() {
    let mut engine = betting_engine(5);
    for _ in 0..3 {
        if engine.stage() != GameStage::Betting {
            break;
        }
        engine.apply_action(0, Action::Blind).expect("human blind");
        if engine.stage() != GameStage::Betting {
            break;
        }
        engine
            .play_bot_turns(|_, _, _| Action::Chaal)
            .expect("bots chaal");
    }
    if engine.stage() == GameStage::Betting {
        engine.apply_action(0, Action::Show).expect("show ok");
    }
    assert_eq!(engine.stage(), GameStage::GameOver);
    assert!(engine.winner().is_some());
}
