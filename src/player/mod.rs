//! Move-choosing strategies
//!
//! This module contains the stateless players:
//! - [`RandomPlayer`]: any legal column
//! - [`SimplePlayer`]: takes an immediate win when there is one
//! - [`BetterPlayer`]: also avoids handing the opponent an immediate win
//!
//! The Monte Carlo player lives in [`crate::monty`].

pub mod better;
pub mod random;
pub mod simple;

pub use better::BetterPlayer;
pub use random::RandomPlayer;
pub use simple::SimplePlayer;

use rand::RngCore;

use crate::{board::Player, Board, Connect4Error, Result};

/// Trait for anything that picks a column for a player
///
/// Implementations take the board by shared reference and never mutate it.
/// Hypothetical moves are explored on clones.
pub trait Strategy: Send + Sync {
    /// Chooses a column for `player` (1 or 2)
    ///
    /// Fails with `InvalidPlayer` for any other player number and with
    /// `NoLegalMoves` when every column is full.
    fn choose_move(&self, board: &Board, player: u8, rng: &mut dyn RngCore) -> Result<usize>;

    /// Short human-readable name
    fn name(&self) -> &str;

    /// Create a boxed clone of this strategy
    fn clone_box(&self) -> Box<dyn Strategy>;
}

// Implement Strategy for Box<dyn Strategy>
impl Strategy for Box<dyn Strategy> {
    fn choose_move(&self, board: &Board, player: u8, rng: &mut dyn RngCore) -> Result<usize> {
        (**self).choose_move(board, player, rng)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn clone_box(&self) -> Box<dyn Strategy> {
        (**self).clone_box()
    }
}

impl Clone for Box<dyn Strategy> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

/// Validates the player number and collects the candidate columns
pub(crate) fn candidates(board: &Board, player: u8) -> Result<(Player, Vec<usize>)> {
    let player = Player::try_from(player)?;
    let moves = board.possible_moves();
    if moves.is_empty() {
        return Err(Connect4Error::NoLegalMoves);
    }
    Ok((player, moves))
}

/// Picks one of `moves` uniformly
pub(crate) fn pick(moves: &[usize], rng: &mut dyn RngCore) -> Result<usize> {
    use rand::seq::SliceRandom;

    moves.choose(rng).copied().ok_or(Connect4Error::NoLegalMoves)
}

/// First column in `moves` that wins on the spot for `player`
pub(crate) fn first_winning_move(
    board: &Board,
    moves: &[usize],
    player: Player,
) -> Result<Option<usize>> {
    for &col in moves {
        if board.is_winning_move(col, player.number())? {
            return Ok(Some(col));
        }
    }
    Ok(None)
}
