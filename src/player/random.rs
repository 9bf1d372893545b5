//! Uniformly random player

use rand::RngCore;

use super::{candidates, pick, Strategy};
use crate::{Board, Result};

/// Plays any open column, chosen uniformly at random
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    /// Creates a new random player
    pub fn new() -> Self {
        RandomPlayer
    }
}

impl Strategy for RandomPlayer {
    fn choose_move(&self, board: &Board, player: u8, rng: &mut dyn RngCore) -> Result<usize> {
        let (_, moves) = candidates(board, player)?;
        pick(&moves, rng)
    }

    fn name(&self) -> &str {
        "random"
    }

    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(*self)
    }
}
