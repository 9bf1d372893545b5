//! # connect-four-bots
//!
//! A Connect Four board together with a family of automated players of
//! increasing strength.
//!
//! ## Features
//!
//! - A 6x7 [`Board`] with gravity fill, undo and incremental win detection
//!   around the last placed piece
//! - [`RandomPlayer`], [`SimplePlayer`] and [`BetterPlayer`] strategies
//! - [`Monty`], a Monte Carlo player that scores every candidate column by
//!   running playouts to the end of the game
//! - A [`Simulator`] that plays two strategies against each other
//!
//! Every source of randomness is passed in by the caller, so a seeded
//! [`rand::rngs::StdRng`] makes every player fully deterministic.
//!
//! ## Basic Usage
//!
//! ```
//! use connect_four_bots::{Board, Monty, SimplePlayer, Strategy};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! fn main() -> Result<(), connect_four_bots::Connect4Error> {
//!     let mut rng = StdRng::seed_from_u64(7);
//!     let mut board = Board::new();
//!
//!     // Player 1 has three in a row on the bottom row
//!     for col in 0..3 {
//!         board.apply_move(col, 1)?;
//!         board.apply_move(col, 2)?;
//!     }
//!
//!     let monty = Monty::new(10, Box::new(SimplePlayer::new()))?;
//!     let col = monty.choose_move(&board, 1, &mut rng)?;
//!     assert_eq!(col, 3);
//!
//!     // The caller's board is never touched by a player
//!     assert_eq!(board.move_count(), 6);
//!     Ok(())
//! }
//! ```
//!
//! ## Players
//!
//! 1. **Random**: any legal column, uniformly.
//! 2. **Simple**: the first column that wins immediately, else random.
//! 3. **Better**: wins immediately if it can, otherwise avoids columns that
//!    hand the opponent an immediate win.
//! 4. **Monty**: wins immediately if it can, otherwise plays `n` simple
//!    vs simple playouts per candidate and keeps the column with the most
//!    wins.

pub mod board;
pub mod config;
pub mod monty;
pub mod player;
pub mod simulator;
pub mod stats;
pub mod utils;

pub use board::{Board, Cell, Player, COLS, ROWS};
pub use config::MontyConfig;
pub use monty::{MoveEvaluation, Monty};
pub use player::{BetterPlayer, RandomPlayer, SimplePlayer, Strategy};
pub use simulator::{Outcome, Playout, SimplePlayout, Simulator};
pub use stats::SearchStatistics;

/// Error types for board operations and players
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Connect4Error {
    /// A row or column outside the grid was read
    #[error("Cell ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },

    /// A column index outside 0..=6 was used for a move, undo or win check
    #[error("Invalid column: {0}")]
    InvalidColumn(usize),

    /// A player number other than 1 or 2
    #[error("Invalid player: {0} (only players 1 and 2 exist)")]
    InvalidPlayer(u8),

    /// The column has no empty cell left
    #[error("Column {0} is full")]
    ColumnFull(usize),

    /// The column has no piece to undo or check
    #[error("Column {0} is empty")]
    EmptyColumn(usize),

    /// A player was asked to move on a board with no open column
    #[error("No legal moves available")]
    NoLegalMoves,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for board and player operations
pub type Result<T> = std::result::Result<T, Connect4Error>;
