//! Advisory dealer commentary.
//!
//! Commentary is best-effort annotation, never a gate on correctness: a
//! request is dispatched on a detached thread and the reply is collected
//! later through a channel, so the line may arrive after further state
//! transitions. A failed, slow, or absent service degrades to a fixed
//! fallback string.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use thiserror::Error;

use crate::table::GameStage;

/// Line used whenever the commentary service fails or is absent.
pub const FALLBACK_LINE: &str = "The cards never lie, but sometimes they surprise!";

/// Snapshot handed to the commentary service for one request.
#[derive(Debug, Clone)]
pub struct CommentaryRequest {
    pub stage: GameStage,
    pub pot: u32,
    pub seat_name: String,
    pub seat_coins: u32,
    pub is_seen: bool,
    pub last_action: Option<String>,
}

#[derive(Debug, Error)]
pub enum CommentaryError {
    #[error("commentary service unavailable: {0}")]
    Unavailable(String),
}

/// Narrow text-generation interface to the external advisory service.
/// The engine works identically with this entirely stubbed out.
pub trait Commentator: Send + Sync + 'static {
    fn generate(&self, req: &CommentaryRequest) -> Result<String, CommentaryError>;
}

/// Built-in stub: canned lines keyed on the game stage, no external calls.
#[derive(Debug, Default)]
pub struct StaticCommentator;

impl Commentator for StaticCommentator {
    fn generate(&self, req: &CommentaryRequest) -> Result<String, CommentaryError> {
        let line = match req.stage {
            GameStage::Lobby => "Namaste! Welcome to Gothahula Teen Patti.".to_string(),
            GameStage::Dealing | GameStage::Betting => match &req.last_action {
                Some(action) => format!("{} just {}. The pot sits at {}.", req.seat_name, action, req.pot),
                None => "The cards have been dealt. Luck is in the air!".to_string(),
            },
            GameStage::Showdown => "Cards on the table! Let's see who was bluffing.".to_string(),
            GameStage::GameOver => format!("The pot of {} has found its home.", req.pot),
        };
        Ok(line)
    }
}

/// Fire-and-forget commentary pipeline.
///
/// `request` spawns a worker thread per call; `try_drain` moves whatever
/// replies have arrived into the caller's hands without blocking. Dropping
/// the feed abandons in-flight workers; their sends fail harmlessly.
pub struct CommentaryFeed {
    commentator: Arc<dyn Commentator>,
    tx: Sender<String>,
    rx: Receiver<String>,
}

impl CommentaryFeed {
    pub fn new(commentator: impl Commentator) -> Self {
        let (tx, rx) = channel();
        Self {
            commentator: Arc::new(commentator),
            tx,
            rx,
        }
    }

    /// Dispatch one commentary request without waiting for the result.
    pub fn request(&self, req: CommentaryRequest) {
        let commentator = Arc::clone(&self.commentator);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let line = match catch_unwind(AssertUnwindSafe(|| commentator.generate(&req))) {
                Ok(Ok(line)) => line,
                // Service error or a panicked worker both degrade to the
                // fixed fallback, never to a missing or blocking reply.
                Ok(Err(_)) | Err(_) => FALLBACK_LINE.to_string(),
            };
            let _ = tx.send(line);
        });
    }

    /// Collect every reply that has arrived so far. Never blocks.
    pub fn try_drain(&self) -> Vec<String> {
        let mut lines = Vec::new();
        while let Ok(line) = self.rx.try_recv() {
            lines.push(line);
        }
        lines
    }
}
