use tracing::{debug, warn};

use crate::ai::Agent;
use crate::error::RoundError;
use crate::game::{MoveOutcome, Player, Round};
use crate::session::metrics::RoundResult;

/// Play `round` to completion, asking `red` and `yellow` for moves in turn.
///
/// A column the board rejects is replaced by the lowest valid column so a
/// misbehaving agent cannot stall the round.
pub fn play_round(
    round: &mut Round,
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
) -> Result<RoundResult, RoundError> {
    debug!(
        rows = round.board().rows(),
        cols = round.board().cols(),
        red = red.name(),
        yellow = yellow.name(),
        "round started"
    );

    while !round.is_terminal() {
        let player = round.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };

        let column = agent
            .select_column(round.board(), player)
            .ok_or(RoundError::NoMove(player))?;

        match round.play(column)? {
            MoveOutcome::Placed(pos) => {
                debug!(player = player.name(), column, row = pos.row, "piece placed");
            }
            rejected => {
                let fallback = *round
                    .valid_moves()
                    .first()
                    .ok_or(RoundError::NoMove(player))?;
                warn!(
                    agent = agent.name(),
                    column,
                    ?rejected,
                    fallback,
                    "agent move rejected, using fallback column"
                );
                round.play(fallback)?;
            }
        }
    }

    let result = RoundResult {
        winner: round.state().winner(),
        moves: round.move_count(),
    };
    debug!(winner = ?result.winner, moves = result.moves, "round finished");
    Ok(result)
}
