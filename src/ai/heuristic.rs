use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game::{Board, MoveOutcome, Player};

use super::agent::Agent;

/// Tuning for [`HeuristicAgent`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Chance of ignoring the rules below and playing a random valid column.
    /// `0.0` makes the agent fully deterministic.
    pub exploration: f64,
    /// Fixed RNG seed; `None` seeds from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig {
            exploration: 0.3,
            seed: None,
        }
    }
}

/// Rule-of-thumb opponent: win if possible, otherwise block, otherwise play
/// near the middle of the open columns. No search beyond one ply.
pub struct HeuristicAgent {
    config: HeuristicConfig,
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new(config: HeuristicConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        HeuristicAgent { config, rng }
    }

    /// Agent that never explores.
    pub fn greedy() -> Self {
        Self::new(HeuristicConfig {
            exploration: 0.0,
            seed: None,
        })
    }

    pub fn exploration(&self) -> f64 {
        self.config.exploration
    }

    /// First valid column where a `player` piece completes a line.
    ///
    /// Works by placing on `scratch` and undoing straight away; `scratch` is
    /// unchanged on return.
    fn find_winning_column(scratch: &mut Board, columns: &[usize], player: Player) -> Option<usize> {
        columns.iter().copied().find(|&column| {
            let MoveOutcome::Placed(pos) = scratch.place(column, player) else {
                return false;
            };
            let wins = scratch.winner_through(pos) == Some(player);
            scratch.undo_last();
            wins
        })
    }

    /// Column closest to the middle of the open range, lower index on ties.
    fn centre_column(columns: &[usize]) -> Option<usize> {
        let lo = *columns.iter().min()?;
        let hi = *columns.iter().max()?;
        let centre = (lo + hi) / 2;
        columns.iter().copied().min_by_key(|&c| c.abs_diff(centre))
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

impl Agent for HeuristicAgent {
    fn select_column(&mut self, board: &Board, player: Player) -> Option<usize> {
        let columns = board.valid_moves();
        if columns.is_empty() {
            return None;
        }

        if self.rng.random::<f64>() < self.config.exploration {
            let idx = self.rng.random_range(0..columns.len());
            return Some(columns[idx]);
        }

        let mut scratch = board.clone();
        Self::find_winning_column(&mut scratch, &columns, player)
            .or_else(|| Self::find_winning_column(&mut scratch, &columns, player.other()))
            .or_else(|| Self::centre_column(&columns))
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
