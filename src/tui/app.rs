//! Application state and logic.

use super::input::{self, Action};
use crate::controller::{ControllerEvent, GameController};
use crossterm::event::KeyCode;
use noughts_core::{GameSnapshot, Position};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    controller: GameController,
    snapshot: GameSnapshot,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `controller`.
    pub fn new(controller: GameController) -> Self {
        let snapshot = controller.snapshot();
        Self {
            controller,
            snapshot,
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// Latest view of the game.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last rejected move, cleared by the next accepted one.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = input::action_for(key) else {
            return;
        };
        debug!(?action, "Key action");

        match action {
            Action::Place(index) => self.place(index),
            Action::PlaceCursor => self.place(self.cursor.to_index()),
            Action::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::ToggleMode => {
                let mode = self.snapshot.mode().toggle();
                info!(%mode, "Mode toggled");
                self.snapshot = self.controller.set_mode(mode);
                self.notice = None;
            }
            Action::Reset => {
                self.snapshot = self.controller.reset();
                self.notice = None;
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a notification from the controller's channel.
    pub fn handle_event(&mut self, event: ControllerEvent) {
        if let Some(snapshot) = self.controller.handle_event(event) {
            self.snapshot = snapshot;
        }
    }

    fn place(&mut self, index: usize) {
        match self.controller.human_move(index) {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.notice = None;
            }
            Err(e) => {
                debug!(error = %e, index, "Move rejected");
                self.notice = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{FirstChooser, GameStatus, HeuristicStrategy, Mode, Player};
    use std::time::Duration;

    fn app(mode: Mode) -> (App, tokio::sync::mpsc::UnboundedReceiver<ControllerEvent>) {
        let (controller, rx) = GameController::new(
            mode,
            Box::new(HeuristicStrategy::new(FirstChooser)),
            Duration::from_millis(500),
        );
        (App::new(controller), rx)
    }

    #[tokio::test]
    async fn test_digit_and_cursor_moves() {
        let (mut app, _rx) = app(Mode::PlayerVsPlayer);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Enter);

        let board = app.snapshot().board();
        assert_eq!(board[0], Some(Player::X));
        assert_eq!(board[4], Some(Player::O));
    }

    #[tokio::test]
    async fn test_rejected_move_sets_notice() {
        let (mut app, _rx) = app(Mode::PlayerVsPlayer);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert!(app.notice().is_some_and(|n| n.contains("already taken")));

        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.notice(), None);
    }

    #[tokio::test]
    async fn test_toggle_mode_resets_board() {
        let (mut app, _rx) = app(Mode::PlayerVsPlayer);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('m'));

        assert_eq!(app.snapshot().mode(), &Mode::PlayerVsAi);
        assert_eq!(app.snapshot().total_moves(), &0);
        assert_eq!(app.snapshot().status(), &GameStatus::Active);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ai_reply_arrives_through_channel() {
        let (mut app, mut rx) = app(Mode::PlayerVsAi);
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.snapshot().message(), "AI is thinking...");

        let event = rx.recv().await.unwrap();
        app.handle_event(event);
        assert_eq!(app.snapshot().board()[4], Some(Player::O));
        assert_eq!(app.snapshot().message(), "Your turn");
    }

    #[test]
    fn test_quit_keys() {
        for key in [KeyCode::Char('q'), KeyCode::Esc] {
            let (mut app, _rx) = app(Mode::PlayerVsPlayer);
            assert!(!app.should_quit());
            app.handle_key(key);
            assert!(app.should_quit());
        }
    }
}
