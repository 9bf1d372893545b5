//! Playing games to completion
//!
//! [`Simulator`] alternates two strategies on a board until somebody wins or
//! the board fills up. [`Playout`] is the seam the Monte Carlo player uses to
//! run those games, so the policy driving the playouts can be swapped.

use log::trace;
use rand::RngCore;

use crate::{board::Player, player::SimplePlayer, Board, Result, Strategy};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The given player made four in a row
    Win(Player),
    /// The board filled up without a winner
    Draw,
}

impl Outcome {
    /// The winning player number, or `None` for a draw
    pub fn winner_number(self) -> Option<u8> {
        match self {
            Outcome::Win(player) => Some(player.number()),
            Outcome::Draw => None,
        }
    }
}

/// Plays one game between two strategies
///
/// `first` moves for player 1 and `second` for player 2; `to_move` says
/// which of them moves first from the given board.
pub struct Simulator<'a> {
    board: Board,
    seats: [&'a dyn Strategy; 2],
    to_move: Player,
}

impl<'a> Simulator<'a> {
    /// Creates a simulator from a starting board and two seats
    pub fn new(
        board: Board,
        first: &'a dyn Strategy,
        second: &'a dyn Strategy,
        to_move: Player,
    ) -> Self {
        Simulator {
            board,
            seats: [first, second],
            to_move,
        }
    }

    /// Plays until the game ends and reports the result
    ///
    /// An illegal column returned by either strategy aborts the game with
    /// the board's error.
    pub fn simulate(self, rng: &mut dyn RngCore) -> Result<Outcome> {
        self.run(rng).map(|(outcome, _)| outcome)
    }

    /// Like [`Simulator::simulate`] but also hands back the final board
    pub fn run(self, rng: &mut dyn RngCore) -> Result<(Outcome, Board)> {
        let Simulator {
            mut board,
            seats,
            mut to_move,
        } = self;

        if board.is_draw() {
            return Ok((Outcome::Draw, board));
        }

        loop {
            let seat = match to_move {
                Player::One => seats[0],
                Player::Two => seats[1],
            };
            let col = seat.choose_move(&board, to_move.number(), rng)?;
            board.apply_move(col, to_move.number())?;
            trace!(
                "simulator: player {} ({}) played column {}",
                to_move.number(),
                seat.name(),
                col
            );

            if board.is_win(col)? {
                return Ok((Outcome::Win(to_move), board));
            }
            if board.is_draw() {
                return Ok((Outcome::Draw, board));
            }
            to_move = to_move.other();
        }
    }
}

/// Trait for policies that finish a game from a given position
pub trait Playout: Send + Sync {
    /// Plays `board` to the end with `to_move` moving first
    fn playout(&self, board: Board, to_move: Player, rng: &mut dyn RngCore) -> Result<Outcome>;

    /// Create a boxed clone of this policy
    fn clone_box(&self) -> Box<dyn Playout>;
}

/// Simple vs simple playouts
///
/// Both seats are [`SimplePlayer`]s, whatever strategy the caller holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePlayout;

impl SimplePlayout {
    /// Creates a new simple playout policy
    pub fn new() -> Self {
        SimplePlayout
    }
}

impl Playout for SimplePlayout {
    fn playout(&self, board: Board, to_move: Player, rng: &mut dyn RngCore) -> Result<Outcome> {
        let first = SimplePlayer::new();
        let second = SimplePlayer::new();
        Simulator::new(board, &first, &second, to_move).simulate(rng)
    }

    fn clone_box(&self) -> Box<dyn Playout> {
        Box::new(*self)
    }
}

// Implement Playout for Box<dyn Playout>
impl Playout for Box<dyn Playout> {
    fn playout(&self, board: Board, to_move: Player, rng: &mut dyn RngCore) -> Result<Outcome> {
        (**self).playout(board, to_move, rng)
    }

    fn clone_box(&self) -> Box<dyn Playout> {
        (**self).clone_box()
    }
}
