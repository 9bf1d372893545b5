//! The Connect Four board
//!
//! The board is a 6x7 grid filled from the bottom: row 0 is the bottom row
//! and row 5 the top. Every placement is recorded in a move history, and win
//! detection only looks at lines through the most recent placement.

use std::fmt;

use crate::{Connect4Error, Result};

/// Number of rows on the board
pub const ROWS: usize = 6;

/// Number of columns on the board
pub const COLS: usize = 7;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player number, 1 or 2
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell value this player's pieces occupy
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = Connect4Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(Connect4Error::InvalidPlayer(other)),
        }
    }
}

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The owner of this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }
}

/// A Connect Four board
///
/// Cloning produces a fully independent copy, which is how players explore
/// hypothetical moves without touching the board they were handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// `cells[row][col]`, row 0 at the bottom
    cells: [[Cell; COLS]; ROWS],

    /// Every placement as `(row, col)`, oldest first
    history: Vec<(usize, usize)>,
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            history: Vec::new(),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        ROWS
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        COLS
    }

    /// Returns the value at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        if row >= ROWS || col >= COLS {
            return Err(Connect4Error::OutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Columns that still have room, in ascending order
    pub fn possible_moves(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| self.cells[ROWS - 1][col] == Cell::Empty)
            .collect()
    }

    /// Drops a piece for `player` (1 or 2) into `col`
    pub fn apply_move(&mut self, col: usize, player: u8) -> Result<()> {
        let player = Player::try_from(player)?;
        if col >= COLS {
            return Err(Connect4Error::InvalidColumn(col));
        }

        let row = (0..ROWS)
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(Connect4Error::ColumnFull(col))?;

        self.cells[row][col] = player.cell();
        self.history.push((row, col));
        Ok(())
    }

    /// Removes the top piece of `col` and pops the last history entry
    ///
    /// The history entry removed is always the most recent placement on the
    /// whole board, even when `col` is not the column it was played in.
    pub fn undo_move(&mut self, col: usize) -> Result<()> {
        self.check_occupied(col)?;

        if let Some(row) = (0..ROWS).rev().find(|&row| self.cells[row][col] != Cell::Empty) {
            self.cells[row][col] = Cell::Empty;
        }
        self.history.pop();
        Ok(())
    }

    /// Placements made so far, oldest first
    pub fn history(&self) -> &[(usize, usize)] {
        &self.history
    }

    /// The most recent placement as `(row, col)`
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.history.last().copied()
    }

    /// Number of pieces on the board
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Checks whether the last move, played in `col`, made four in a row
    pub fn is_win(&self, col: usize) -> Result<bool> {
        self.check_occupied(col)?;
        Ok(self.vertical_win(col) || self.horizontal_win(col) || self.diagonal_win(col))
    }

    /// True when no column is open
    ///
    /// This does not look for a win; callers check `is_win` first.
    pub fn is_draw(&self) -> bool {
        self.possible_moves().is_empty()
    }

    /// Would playing `col` for `player` win? The board is left untouched.
    pub fn is_winning_move(&self, col: usize, player: u8) -> Result<bool> {
        let mut copy = self.clone();
        copy.apply_move(col, player)?;
        copy.is_win(col)
    }

    /// Would playing `col` for `player` fill the board? The board is left
    /// untouched.
    pub fn is_drawing_move(&self, col: usize, player: u8) -> Result<bool> {
        let mut copy = self.clone();
        copy.apply_move(col, player)?;
        Ok(copy.is_draw())
    }

    /// Four in a column ending at the last placement
    pub fn vertical_win(&self, col: usize) -> bool {
        let Some((row, cell)) = self.anchor(col) else {
            return false;
        };
        // Fewer than three pieces below it
        if row < 3 {
            return false;
        }
        (1..4).all(|n| self.cells[row - n][col] == cell)
    }

    /// Four in a row through the last placement
    pub fn horizontal_win(&self, col: usize) -> bool {
        self.line_win(col, (0, 1))
    }

    /// Four along either diagonal through the last placement
    pub fn diagonal_win(&self, col: usize) -> bool {
        self.line_win(col, (1, 1)) || self.line_win(col, (1, -1))
    }

    /// Counts matching pieces on both sides of the anchor along `(dr, dc)`
    fn line_win(&self, col: usize, (dr, dc): (isize, isize)) -> bool {
        let Some((row, cell)) = self.anchor(col) else {
            return false;
        };
        let count = self.run_length(row, col, cell, (dr, dc))
            + self.run_length(row, col, cell, (-dr, -dc));
        count >= 3
    }

    /// Consecutive cells equal to `cell` stepping away from `(row, col)`,
    /// at most three
    fn run_length(&self, row: usize, col: usize, cell: Cell, (dr, dc): (isize, isize)) -> usize {
        let mut count = 0;
        for n in 1..4 {
            let r = row as isize + dr * n;
            let c = col as isize + dc * n;
            if r < 0 || c < 0 || r >= ROWS as isize || c >= COLS as isize {
                break;
            }
            if self.cells[r as usize][c as usize] != cell {
                break;
            }
            count += 1;
        }
        count
    }

    /// Row of the last placement paired with the occupant of that row in
    /// `col`. An empty anchor never wins.
    fn anchor(&self, col: usize) -> Option<(usize, Cell)> {
        let (row, _) = self.last_move()?;
        let cell = *self.cells.get(row)?.get(col)?;
        (cell != Cell::Empty).then_some((row, cell))
    }

    fn check_occupied(&self, col: usize) -> Result<()> {
        if col >= COLS {
            return Err(Connect4Error::InvalidColumn(col));
        }
        if self.cells[0][col] == Cell::Empty {
            return Err(Connect4Error::EmptyColumn(col));
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            write!(f, "|")?;
            for col in 0..COLS {
                let symbol = match self.cells[row][col] {
                    Cell::Player1 => "X",
                    Cell::Player2 => "O",
                    Cell::Empty => ".",
                };
                write!(f, "{}|", symbol)?;
            }
            writeln!(f)?;
        }

        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, "{} ", col)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Ok(Cell::Empty));
            }
        }
        assert_eq!(board.possible_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_pieces_fall_to_the_bottom() {
        let mut board = Board::new();
        board.apply_move(3, 1).unwrap();
        board.apply_move(3, 2).unwrap();

        assert_eq!(board.get(0, 3), Ok(Cell::Player1));
        assert_eq!(board.get(1, 3), Ok(Cell::Player2));
        assert_eq!(board.history(), &[(0, 3), (1, 3)]);
        assert_eq!(board.last_move(), Some((1, 3)));
    }

    #[test]
    fn test_player_conversion() {
        assert_eq!(Player::try_from(1), Ok(Player::One));
        assert_eq!(Player::try_from(2), Ok(Player::Two));
        assert_eq!(Player::try_from(3), Err(Connect4Error::InvalidPlayer(3)));
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.cell().player(), Some(Player::Two));
    }

    #[test]
    fn test_empty_anchor_never_wins() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.apply_move(0, 1).unwrap();
        }
        // Last placement is at row 4 and column 1 is empty there
        board.apply_move(1, 2).unwrap();
        board.apply_move(0, 2).unwrap();
        assert!(!board.horizontal_win(1));
        assert!(!board.vertical_win(1));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.apply_move(0, 1).unwrap();
        board.apply_move(6, 2).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[ROWS - 1], "|X|.|.|.|.|.|O|");
        assert_eq!(lines[0], "|.|.|.|.|.|.|.|");
    }
}
