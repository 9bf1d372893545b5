//! Two-ply defensive player

use log::trace;
use rand::RngCore;

use super::{candidates, pick, Strategy};
use crate::{Board, Result};

/// Wins immediately when it can and otherwise avoids columns that let the
/// opponent win on the reply
///
/// When every column hands the opponent a win it falls back to any column.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterPlayer;

impl BetterPlayer {
    /// Creates a new better player
    pub fn new() -> Self {
        BetterPlayer
    }

    /// Plays each candidate on a clone and looks at the opponent's replies
    fn scan(board: &Board, moves: &[usize], player: u8, opponent: u8) -> Result<Scan> {
        let mut opponent_winners = Vec::new();

        for &col in moves {
            let mut copy = board.clone();
            copy.apply_move(col, player)?;
            if copy.is_win(col)? {
                return Ok(Scan::Win(col));
            }

            for reply in copy.possible_moves() {
                if copy.is_winning_move(reply, opponent)? {
                    trace!("better: column {} lets player {} win in {}", col, opponent, reply);
                    opponent_winners.push(col);
                    break;
                }
            }
        }

        Ok(Scan::OpponentWinners(opponent_winners))
    }
}

enum Scan {
    /// A candidate that wins on the spot
    Win(usize),
    /// Candidates that give the opponent an immediate winning reply
    OpponentWinners(Vec<usize>),
}

impl Strategy for BetterPlayer {
    fn choose_move(&self, board: &Board, player: u8, rng: &mut dyn RngCore) -> Result<usize> {
        let (player, moves) = candidates(board, player)?;
        if moves.len() == 1 {
            return Ok(moves[0]);
        }

        let opponent = player.other();
        let opponent_winners = match Self::scan(board, &moves, player.number(), opponent.number())? {
            Scan::Win(col) => return Ok(col),
            Scan::OpponentWinners(cols) => cols,
        };

        if opponent_winners.len() == moves.len() {
            return pick(&moves, rng);
        }

        let safe: Vec<usize> = moves
            .iter()
            .copied()
            .filter(|col| !opponent_winners.contains(col))
            .collect();
        pick(&safe, rng)
    }

    fn name(&self) -> &str {
        "better"
    }

    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(*self)
    }
}
