use crate::game::{Board, Player};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from valid columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board, _player: Player) -> Option<usize> {
        let columns = board.valid_moves();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardConfig, Round};

    #[test]
    fn test_random_agent_selects_valid_column() {
        let mut agent = RandomAgent::new();
        let board = Board::default();
        let valid = board.valid_moves();

        for _ in 0..100 {
            let column = agent.select_column(&board, Player::Red).unwrap();
            assert!(valid.contains(&column), "Column {} is not valid", column);
        }
    }

    #[test]
    fn test_random_agent_on_full_board() {
        let mut board = Board::new(BoardConfig::new(4, 4, 3).unwrap());
        for column in 1..=4 {
            for _ in 0..4 {
                board.place(column, Player::Red);
            }
        }
        let mut agent = RandomAgent::with_seed(1);
        assert_eq!(agent.select_column(&board, Player::Yellow), None);
    }

    #[test]
    fn test_random_agent_plays_full_round() {
        let mut agent1 = RandomAgent::with_seed(7);
        let mut agent2 = RandomAgent::with_seed(8);
        let mut round = Round::default();

        while !round.is_terminal() {
            let player = round.current_player();
            let column = if player == Player::Red {
                agent1.select_column(round.board(), player)
            } else {
                agent2.select_column(round.board(), player)
            }
            .unwrap();
            assert!(round.play(column).unwrap().is_placed());
        }

        assert!(round.state().is_terminal());
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::default();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..20 {
            assert_eq!(
                a.select_column(&board, Player::Red),
                b.select_column(&board, Player::Red)
            );
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
