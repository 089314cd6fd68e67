//! # Gothahula CLI
//!
//! Interactive terminal host for the Teen Patti engine. The CLI is pure
//! presentation: it renders engine snapshots, translates keystrokes into
//! engine actions, drives bot turns on a short fixed delay, and relays
//! dealer commentary. All game rules live in `gothahula-engine`.
//!
//! ## Example
//!
//! ```no_run
//! use std::io;
//! let args = vec!["gothahula", "--seed", "42", "--hands", "1"];
//! let stdin = io::stdin();
//! let code = gothahula_cli::run(args, &mut stdin.lock(), &mut io::stdout());
//! assert_eq!(code, 0);
//! ```

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;

use gothahula_ai::create_policy;
use gothahula_engine::commentary::{CommentaryFeed, StaticCommentator};
use gothahula_engine::engine::{ActionOutcome, Engine};
use gothahula_engine::player::{Action, DEFAULT_BOOT, HUMAN_SEAT};
use gothahula_engine::table::{GameStage, MessageRole};

pub mod formatters;

use formatters::format_table;

/// Gothahula Teen Patti - play against two bots in the terminal.
#[derive(Debug, Parser)]
#[command(name = "gothahula", version, about)]
pub struct Cli {
    /// Deck RNG seed; identical seeds replay identical shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Boot amount anted by every seat at hand start
    #[arg(long, default_value_t = DEFAULT_BOOT)]
    pub boot: u32,

    /// Stop after this many hands (0 = play until quit)
    #[arg(long, default_value_t = 0)]
    pub hands: u32,

    /// Bot policy RNG seed; identical seeds replay identical bot decisions
    #[arg(long)]
    pub bot_seed: Option<u64>,

    /// Delay before each round of bot turns, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub delay_ms: u64,

    /// Emit table snapshots as JSON instead of the text layout
    #[arg(long)]
    pub json: bool,
}

/// Main entry point for the CLI application.
///
/// Parses arguments, then runs the interactive game loop reading human
/// actions from `input` and rendering to `out`.
///
/// # Returns
///
/// Exit code: `0` for a normal session, `2` for argument errors.
pub fn run<I, S>(args: I, input: &mut dyn BufRead, out: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 2,
            };
            let _ = writeln!(out, "{}", e);
            return code;
        }
    };
    match play_session(&cli, input, out) {
        Ok(()) => 0,
        Err(_) => 2,
    }
}

fn play_session(
    cli: &Cli,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let mut engine = Engine::new(cli.seed, cli.boot);
    let feed = CommentaryFeed::new(StaticCommentator);
    let mut policies = [
        create_policy("random", cli.bot_seed),
        create_policy("random", cli.bot_seed.map(|s| s.wrapping_add(1))),
    ];

    let mut hands_played = 0u32;
    loop {
        if engine.start_new_hand().is_err() {
            writeln!(out, "A seat cannot cover the boot. The table closes here.")?;
            return Ok(());
        }
        feed.request(engine.commentary_request_for(HUMAN_SEAT, None));

        while engine.stage() == GameStage::Betting {
            relay_commentary(&feed, &mut engine);
            render(cli, &engine, out)?;

            if !engine.seat(HUMAN_SEAT).is_packed {
                let verb = if engine.seat(HUMAN_SEAT).is_seen {
                    "[c]haal"
                } else {
                    "[b]lind"
                };
                writeln!(out, "Your move: {verb}, [s]ee, [p]ack, s[h]ow, [q]uit")?;
                let Some(choice) = read_choice(input)? else {
                    return Ok(());
                };
                let action = match choice {
                    'q' => return Ok(()),
                    's' => {
                        engine.see_cards(HUMAN_SEAT);
                        continue;
                    }
                    'p' => Action::Pack,
                    'h' => Action::Show,
                    'b' => Action::Blind,
                    'c' => Action::Chaal,
                    _ => {
                        writeln!(out, "Unrecognized choice.")?;
                        continue;
                    }
                };
                match engine.apply_action(HUMAN_SEAT, action) {
                    Ok(ActionOutcome::HandOver) => break,
                    Ok(_) => {
                        feed.request(
                            engine.commentary_request_for(
                                HUMAN_SEAT,
                                Some(action.label().to_string()),
                            ),
                        );
                    }
                    Err(e) => {
                        writeln!(out, "{}", e)?;
                        continue;
                    }
                }
            }

            // Bots act after the human, on a short fixed delay; commentary
            // keeps flowing independently and never blocks this path.
            thread::sleep(Duration::from_millis(cli.delay_ms));
            let outcome = engine
                .play_bot_turns(|seat, pot, boot| policies[seat.id - 1].choose(seat, pot, boot));
            if matches!(outcome, Ok(ActionOutcome::HandOver)) {
                break;
            }
        }

        relay_commentary(&feed, &mut engine);
        render(cli, &engine, out)?;
        hands_played += 1;
        if cli.hands != 0 && hands_played >= cli.hands {
            return Ok(());
        }

        writeln!(out, "Play another hand? [y/n]")?;
        match read_choice(input)? {
            Some('y') => {}
            _ => return Ok(()),
        }
    }
}

fn render(cli: &Cli, engine: &Engine, out: &mut dyn Write) -> std::io::Result<()> {
    let view = engine.snapshot();
    if cli.json {
        let json = serde_json::to_string(&view).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json)
    } else {
        writeln!(out, "{}", format_table(&view))
    }
}

/// Move any commentary lines that have arrived into the table feed. Lines
/// may belong to an earlier transition; they are appended as-is.
fn relay_commentary(feed: &CommentaryFeed, engine: &mut Engine) {
    for line in feed.try_drain() {
        engine.push_message(MessageRole::Dealer, line);
    }
}

fn read_choice(input: &mut dyn BufRead) -> std::io::Result<Option<char>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(line.trim().chars().next().map(|c| c.to_ascii_lowercase()))
}
