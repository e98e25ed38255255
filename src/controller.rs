//! Drives a game between the engine and its players.
//!
//! Human moves are applied at once. In player-vs-AI mode the AI's reply is
//! deferred: a tokio task sleeps for the configured delay and then posts
//! [`ControllerEvent::AiTurnDue`] on the controller's channel. The owner of
//! the receiver feeds that event back through [`GameController::handle_event`],
//! which is where the AI move is actually played. Every reset bumps a
//! generation counter so a notification from an abandoned game is ignored.

use noughts_core::{Actor, GameEngine, GameSnapshot, Mode, MoveError, MoveStrategy};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Notifications the controller posts to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The AI's delay elapsed for the game tagged `generation`.
    AiTurnDue {
        /// Generation the turn was scheduled in.
        generation: u64,
    },
}

/// Owns the engine, the AI and the pending AI turn.
pub struct GameController {
    engine: GameEngine,
    strategy: Box<dyn MoveStrategy>,
    ai_delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    events_tx: mpsc::UnboundedSender<ControllerEvent>,
}

impl GameController {
    /// Creates a controller and the receiver its AI turns arrive on.
    #[instrument(skip(strategy))]
    pub fn new(
        mode: Mode,
        strategy: Box<dyn MoveStrategy>,
        ai_delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<ControllerEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let controller = Self {
            engine: GameEngine::with_mode(mode),
            strategy,
            ai_delay,
            generation: 0,
            pending: None,
            events_tx,
        };
        info!("Controller ready");
        (controller, events_rx)
    }

    /// Read access to the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current view for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    /// True while an AI reply is scheduled.
    pub fn is_ai_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Plays a human move at `index` (0-8, unchecked).
    ///
    /// If the AI is to move afterwards its reply is scheduled.
    ///
    /// # Errors
    ///
    /// Whatever [`GameEngine::play`] reports; the engine is unchanged.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn human_move(&mut self, index: usize) -> Result<GameSnapshot, MoveError> {
        self.engine.play(Actor::Human, index)?;
        if self.ai_to_move() {
            self.schedule_ai_turn();
        }
        Ok(self.snapshot())
    }

    /// Applies a notification from the channel.
    ///
    /// Returns the new snapshot if the AI moved.
    #[instrument(skip(self), fields(current = self.generation))]
    pub fn handle_event(&mut self, event: ControllerEvent) -> Option<GameSnapshot> {
        match event {
            ControllerEvent::AiTurnDue { generation } => {
                if generation != self.generation {
                    debug!(stale = generation, "Ignoring AI turn from an earlier game");
                    return None;
                }
                self.pending = None;
                self.play_ai_turn()
            }
        }
    }

    /// Starts a new game, cancelling any pending AI reply. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameSnapshot {
        self.cancel_pending();
        self.engine.reset();
        self.snapshot()
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) -> GameSnapshot {
        self.cancel_pending();
        self.engine.set_mode(mode);
        self.snapshot()
    }

    fn ai_to_move(&self) -> bool {
        self.engine.is_active() && self.engine.mode().is_ai(self.engine.current_player())
    }

    fn schedule_ai_turn(&mut self) {
        let tx = self.events_tx.clone();
        let generation = self.generation;
        let delay = self.ai_delay;
        debug!(generation, delay_ms = delay.as_millis() as u64, "Scheduling AI turn");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ControllerEvent::AiTurnDue { generation }).is_err() {
                debug!("Controller gone before AI turn was due");
            }
        }));
    }

    fn play_ai_turn(&mut self) -> Option<GameSnapshot> {
        if !self.ai_to_move() {
            debug!("AI turn due but AI is not to move");
            return None;
        }
        let ai = self.engine.current_player();

        let Some(position) = self
            .strategy
            .choose_move(self.engine.board(), ai, ai.opponent())
        else {
            warn!(player = %ai, "AI found no move");
            return None;
        };

        match self.engine.play(Actor::Ai, position.to_index()) {
            Ok(_) => Some(self.snapshot()),
            Err(e) => {
                warn!(error = %e, position = position.to_index(), "AI move rejected");
                None
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!(generation = self.generation, "Cancelling pending AI turn");
            handle.abort();
        }
        self.generation += 1;
    }
}

impl Drop for GameController {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
