use std::collections::VecDeque;

use crate::game::Player;

/// Upper bound on rounds reserved up front for the rolling window.
pub const MAX_PREALLOCATED_WINDOW: usize = 1000;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub winner: Option<Player>,
    pub moves: usize,
}

/// Tally of rounds played in one session, with rolling-window rates.
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    recent: VecDeque<RoundResult>,
    capacity: usize,
    red_wins: usize, // lifetime counters, never capped
    yellow_wins: usize,
    draws: usize,
    total_moves: usize,
}

impl SessionMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        SessionMetrics {
            recent: VecDeque::with_capacity(capacity.min(MAX_PREALLOCATED_WINDOW)),
            capacity,
            red_wins: 0,
            yellow_wins: 0,
            draws: 0,
            total_moves: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn record_round(&mut self, result: RoundResult) {
        match result.winner {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += result.moves;
        self.recent.push_back(result);
        if self.recent.len() > self.capacity {
            self.recent.pop_front();
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn total_rounds(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }

    /// Share of every recorded round won by `player`.
    pub fn lifetime_win_rate(&self, player: Player) -> f32 {
        ratio(self.wins(player), self.total_rounds())
    }

    pub fn lifetime_draw_rate(&self) -> f32 {
        ratio(self.draws, self.total_rounds())
    }

    pub fn lifetime_average_round_length(&self) -> f32 {
        ratio(self.total_moves, self.total_rounds())
    }

    /// Share of the last N rounds won by `player`.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.winner == Some(player))
    }

    /// Share of the last N rounds that were drawn.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.winner.is_none())
    }

    /// Average number of moves over the last N rounds.
    pub fn average_round_length(&self, last_n: usize) -> f32 {
        let n = self.recent.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self.recent.iter().rev().take(n).map(|r| r.moves).sum();
        total as f32 / n as f32
    }

    fn rate(&self, last_n: usize, pred: impl Fn(&RoundResult) -> bool) -> f32 {
        let n = self.recent.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let hits = self.recent.iter().rev().take(n).filter(|r| pred(r)).count();
        hits as f32 / n as f32
    }
}

fn ratio(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        0.0
    } else {
        part as f32 / whole as f32
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
