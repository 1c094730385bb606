use crate::ai::{Agent, HeuristicAgent, HeuristicConfig};
use crate::game::{BoardConfig, MoveOutcome, Player, Round, RoundState};
use crate::session::{RoundResult, SessionMetrics};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, info, warn};

/// Who controls Yellow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GameMode {
    /// Two people share the keyboard
    TwoPlayer,
    /// Red is human, Yellow is the heuristic opponent
    VsComputer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::VsComputer => "vs Computer",
        }
    }

    fn toggled(self) -> GameMode {
        match self {
            GameMode::TwoPlayer => GameMode::VsComputer,
            GameMode::VsComputer => GameMode::TwoPlayer,
        }
    }
}

pub struct App {
    round: Round,
    mode: GameMode,
    computer: HeuristicAgent,
    metrics: SessionMetrics,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(board: BoardConfig, mode: GameMode, opponent: HeuristicConfig) -> Self {
        App {
            round: Round::new(board),
            mode,
            computer: HeuristicAgent::new(opponent),
            metrics: SessionMetrics::new(),
            selected_column: Self::middle_column(&board),
            should_quit: false,
            message: None,
        }
    }

    fn middle_column(board: &BoardConfig) -> usize {
        (board.cols() + 1) / 2
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        info!(mode = self.mode.label(), "session started");
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        info!(
            rounds = self.metrics.total_rounds(),
            red_wins = self.metrics.wins(Player::Red),
            yellow_wins = self.metrics.wins(Player::Yellow),
            draws = self.metrics.draws(),
            "session ended"
        );
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let cols = self.round.board().cols();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 1 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '0'..='9') => {
                // '0' stands for column 10.
                let column = match c.to_digit(10) {
                    Some(0) | None => 10,
                    Some(d) => d as usize,
                };
                self.drop_piece(column);
            }
            KeyCode::Char('u') => {
                self.take_back();
            }
            KeyCode::Char('m') => {
                self.mode = self.mode.toggled();
                self.restart();
                self.message = Some(format!("Switched to {}. New round started!", self.mode.label()));
            }
            KeyCode::Char('r') => {
                self.restart();
                self.message = Some("New round started!".to_string());
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.round.restart();
        self.selected_column = Self::middle_column(self.round.board().config());
        debug!("round restarted");
    }

    /// Drop the current player's piece, then let the computer reply if it
    /// is Yellow's turn in vs-computer mode.
    fn drop_piece(&mut self, column: usize) {
        if self.round.is_terminal() {
            self.message = Some("Round is over! Press 'r' to start a new one.".to_string());
            return;
        }

        let cols = self.round.board().cols();
        match self.round.play(column) {
            Ok(MoveOutcome::Placed(_)) => {
                self.selected_column = column;
                if !self.finish_if_over() && self.mode == GameMode::VsComputer {
                    self.computer_move();
                }
            }
            Ok(MoveOutcome::ColumnFull) => {
                self.message = Some(format!("Column {column} is full! Choose another column."));
            }
            Ok(MoveOutcome::InvalidColumn) => {
                self.message = Some(format!("Invalid column {column}! Choose 1 to {cols}."));
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    fn computer_move(&mut self) {
        let player = self.round.current_player();
        let Some(column) = self.computer.select_column(self.round.board(), player) else {
            warn!("computer found no move on an unfinished board");
            return;
        };

        match self.round.play(column) {
            Ok(MoveOutcome::Placed(_)) => {
                debug!(column, "computer moved");
                self.message = Some(format!("Computer chose column {column}"));
                self.finish_if_over();
            }
            other => warn!(column, ?other, "computer move rejected"),
        }
    }

    /// Record the round and announce the result if it has just ended.
    fn finish_if_over(&mut self) -> bool {
        let state = self.round.state();
        if !state.is_terminal() {
            return false;
        }

        self.metrics.record_round(RoundResult {
            winner: state.winner(),
            moves: self.round.move_count(),
        });
        info!(?state, moves = self.round.move_count(), "round finished");

        self.message = Some(match (state, self.mode) {
            (RoundState::Won(Player::Red), GameMode::VsComputer) => "You win!".to_string(),
            (RoundState::Won(Player::Yellow), GameMode::VsComputer) => {
                "The computer wins!".to_string()
            }
            (RoundState::Won(player), GameMode::TwoPlayer) => format!("{} wins!", player.name()),
            _ => "It's a draw!".to_string(),
        });
        true
    }

    fn take_back(&mut self) {
        if self.round.is_terminal() {
            self.message = Some("Round is over! Press 'r' to start a new one.".to_string());
            return;
        }

        // In vs-computer mode the computer's reply goes too, so the human
        // is to move again.
        let steps = match self.mode {
            GameMode::TwoPlayer => 1,
            GameMode::VsComputer => 2,
        };
        if self.round.move_count() < steps {
            self.message = Some("Nothing to take back.".to_string());
            return;
        }
        for _ in 0..steps {
            self.round.take_back();
        }
        self.message = Some("Move taken back.".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}
