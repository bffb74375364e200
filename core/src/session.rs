// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game session for communication with rendering/input collaborators
//!
//! Wraps the synchronous [`Game`] state machine behind an async surface
//! that broadcasts [`GameEvent`]s and paces the computer's reply. The
//! core stays free of any presentation concern; collaborators subscribe
//! and react.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::ai::{BlockingStrategy, MoveStrategy};
use crate::game::{Game, MoveOutcome, Phase};
use crate::{GameError, GameEvent, Side, DEFAULT_MOVE_DELAY};

/// Buffered events per subscriber before a slow one starts lagging
const EVENT_BUFFER: usize = 100;

/// An event-emitting handle around one game
pub struct GameSession {
    /// Shared game state
    game: Arc<RwLock<Game>>,
    /// Opponent move selection, shared with the reply task
    strategy: Arc<Mutex<Box<dyn MoveStrategy>>>,
    /// Event broadcast channel
    events_tx: broadcast::Sender<GameEvent>,
    /// The scheduled computer reply, if one is pending
    pending_reply: Option<JoinHandle<()>>,
    /// Pause before the computer answers
    move_delay: Duration,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Session with the standard blocking heuristic and default pacing
    pub fn new() -> Self {
        Self::with_strategy(Box::new(BlockingStrategy::new()), DEFAULT_MOVE_DELAY)
    }

    /// Session with a caller-supplied strategy and reply delay
    pub fn with_strategy(strategy: Box<dyn MoveStrategy>, move_delay: Duration) -> Self {
        let (events_tx, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            game: Arc::new(RwLock::new(Game::new())),
            strategy: Arc::new(Mutex::new(strategy)),
            events_tx,
            pending_reply: None,
            move_delay,
        }
    }

    /// Subscribe to the session's event stream
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.events_tx.subscribe()
    }

    /// A point-in-time copy of the game state
    pub async fn snapshot(&self) -> Game {
        self.game.read().await.clone()
    }

    /// Begin a playthrough and hand the first turn to the player
    pub async fn start(&mut self) -> Result<(), GameError> {
        self.game.write().await.start()?;
        emit(
            &self.events_tx,
            GameEvent::TurnChanged { side: Side::Player },
        );
        Ok(())
    }

    /// Clear the game back to `AwaitingStart`.
    ///
    /// Cancels a pending computer reply: a stale reply must never land
    /// on a freshly reset game.
    pub async fn reset(&mut self) {
        if let Some(handle) = self.pending_reply.take() {
            handle.abort();
        }
        self.game.write().await.reset();
    }

    /// Submit the player's move.
    ///
    /// On success the move's events are broadcast and, unless the game
    /// just ended, the computer's reply is scheduled after the
    /// configured delay. Rejections leave the game untouched and emit
    /// nothing.
    pub async fn submit_player_move(&mut self, index: u8) -> Result<(), GameError> {
        let outcome = self.game.write().await.submit_player_move(index)?;
        emit_outcome(&self.events_tx, &outcome);

        if outcome.phase == Phase::ComputerTurn {
            self.schedule_computer_reply();
        }
        Ok(())
    }

    fn schedule_computer_reply(&mut self) {
        let game = Arc::clone(&self.game);
        let strategy = Arc::clone(&self.strategy);
        let events_tx = self.events_tx.clone();
        let delay = self.move_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut strategy = strategy.lock().await;
            let mut game = game.write().await;

            // a reset may have landed while we were sleeping
            if game.phase() != Phase::ComputerTurn {
                tracing::debug!("scheduled reply arrived after the turn ended, dropping");
                return;
            }

            match game.play_computer_move(strategy.as_mut()) {
                Ok(outcome) => emit_outcome(&events_tx, &outcome),
                Err(err) => tracing::error!(%err, "computer move failed"),
            }
        });

        self.pending_reply = Some(handle);
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_reply.take() {
            handle.abort();
        }
    }
}

fn emit(events_tx: &broadcast::Sender<GameEvent>, event: GameEvent) {
    // a send error only means nobody is subscribed right now
    let _ = events_tx.send(event);
}

fn emit_outcome(events_tx: &broadcast::Sender<GameEvent>, outcome: &MoveOutcome) {
    emit(
        events_tx,
        GameEvent::CellClaimed {
            cell: outcome.cell,
            side: outcome.side,
        },
    );
    emit(
        events_tx,
        GameEvent::ScoreChanged {
            side: outcome.side,
            score: outcome.score,
        },
    );
    if !outcome.combo_cells.is_empty() {
        emit(
            events_tx,
            GameEvent::ComboCells {
                cells: outcome.combo_cells.clone(),
            },
        );
    }

    match &outcome.final_score {
        Some(standing) => emit(
            events_tx,
            GameEvent::GameOver {
                winner: standing.winner,
                player_score: standing.player_score,
                computer_score: standing.computer_score,
            },
        ),
        None => emit(
            events_tx,
            GameEvent::TurnChanged {
                side: outcome.side.opposite(),
            },
        ),
    }
}
