//! Greedy one-ply player

use log::trace;
use rand::RngCore;

use super::{candidates, first_winning_move, pick, Strategy};
use crate::{Board, Result};

/// Takes an immediate win if one exists, otherwise plays randomly
///
/// Columns are tried in ascending order, so when several columns win the
/// lowest one is returned regardless of the random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePlayer;

impl SimplePlayer {
    /// Creates a new simple player
    pub fn new() -> Self {
        SimplePlayer
    }
}

impl Strategy for SimplePlayer {
    fn choose_move(&self, board: &Board, player: u8, rng: &mut dyn RngCore) -> Result<usize> {
        let (player, moves) = candidates(board, player)?;

        if let Some(col) = first_winning_move(board, &moves, player)? {
            trace!("simple: player {} wins in column {}", player.number(), col);
            return Ok(col);
        }

        pick(&moves, rng)
    }

    fn name(&self) -> &str {
        "simple"
    }

    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(*self)
    }
}
