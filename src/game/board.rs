use std::fmt;

use super::{GameStatus, Move, Player};
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

/// Unit directions of the four lines through a cell: horizontal, vertical,
/// diagonal up (/) and diagonal down (\).
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// A 6x7 Connect Four grid with its move history and cached status.
///
/// Columns are 1-indexed (1..=7) everywhere in the public API, rows are
/// 0-indexed with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    history: Vec<Move>,
    status: GameStatus,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            history: Vec::with_capacity(ROWS * COLS),
            status: GameStatus::NotStarted,
        }
    }

    fn column_index(column: usize) -> Option<usize> {
        (1..=COLS).contains(&column).then(|| column - 1)
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 5 is the bottom; `column` is 1-indexed.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        let col = Self::column_index(column)
            .unwrap_or_else(|| panic!("column {column} is off the board"));
        self.cells[row][col]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// True once the game has ended without a winner.
    pub fn is_drawn(&self) -> bool {
        self.status == GameStatus::Drawn
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn pieces_played(&self) -> usize {
        self.history.len()
    }

    /// Check if a piece can still be dropped into `column`
    pub fn is_column_open(&self, column: usize) -> bool {
        match Self::column_index(column) {
            Some(col) => self.cells[0][col] == Cell::Empty,
            None => false,
        }
    }

    /// Open columns in ascending order
    pub fn open_columns(&self) -> Vec<usize> {
        (1..=COLS).filter(|&column| self.is_column_open(column)).collect()
    }

    /// Check if every column is full
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Drop a piece in a column and return the resulting status.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<GameStatus, MoveError> {
        let col = Self::column_index(column).ok_or(MoveError::ColumnOutOfRange(column))?;

        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        if self.cells[0][col] != Cell::Empty {
            return Err(MoveError::ColumnFull(column));
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .unwrap_or_else(|| unreachable!("column {column} has an empty top cell"));

        self.cells[row][col] = Cell::Occupied(player);
        self.history.push(Move { column, row, player });

        // A win that also fills the board is still a win
        self.status = if self.has_won_player(player, column, row) {
            GameStatus::Won(player)
        } else if self.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        };

        Ok(self.status)
    }

    /// Take back the most recent move. Returns false if there is none.
    pub fn undo_last_move(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };

        let col = last.column - 1;
        debug_assert_eq!(self.cells[last.row][col], Cell::Occupied(last.player));
        debug_assert!(last.row == 0 || self.cells[last.row - 1][col] == Cell::Empty);
        self.cells[last.row][col] = Cell::Empty;

        self.status = if self.history.is_empty() {
            GameStatus::NotStarted
        } else {
            GameStatus::InProgress
        };
        true
    }

    /// Clear the grid, history and status
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
        self.history.clear();
        self.status = GameStatus::NotStarted;
    }

    /// Count consecutive `player` cells starting at (`row`, `column`) and
    /// stepping by (`d_row`, `d_col`). The origin counts; at most
    /// `WIN_LENGTH` cells are examined.
    pub fn check_direction(
        &self,
        player: Player,
        row: usize,
        column: usize,
        d_row: isize,
        d_col: isize,
    ) -> usize {
        let target = Cell::Occupied(player);
        let mut r = row as isize;
        let mut c = column as isize - 1;
        let mut count = 0;

        while count < WIN_LENGTH
            && (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == target
        {
            count += 1;
            r += d_row;
            c += d_col;
        }

        count
    }

    /// Length of the `player` run through (`row`, `column`) along one line,
    /// combining both directions.
    fn line_length(&self, player: Player, row: usize, column: usize, d_row: isize, d_col: isize) -> usize {
        let forward = self.check_direction(player, row, column, d_row, d_col);
        if forward == 0 {
            return 0;
        }
        let backward = self.check_direction(player, row, column, -d_row, -d_col);
        forward + backward - 1
    }

    /// Check whether `player` has four in a row on any line through
    /// (`row`, `column`). Only the lines through that cell are examined.
    pub fn has_won_player(&self, player: Player, column: usize, row: usize) -> bool {
        DIRECTIONS
            .iter()
            .any(|&(d_row, d_col)| self.line_length(player, row, column, d_row, d_col) >= WIN_LENGTH)
    }

    /// Whole-board win check. Equivalent to the incremental check but scans
    /// every cell; used to validate it.
    pub fn has_won_full_scan(&self, player: Player) -> bool {
        let target = Cell::Occupied(player);
        (0..ROWS).any(|row| {
            (1..=COLS).any(|column| {
                self.cells[row][column - 1] == target
                    && DIRECTIONS.iter().any(|&(d_row, d_col)| {
                        self.check_direction(player, row, column, d_row, d_col) >= WIN_LENGTH
                    })
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                match cell {
                    Cell::Occupied(player) => write!(f, " {} |", player.glyph())?,
                    Cell::Empty => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{}", "_".repeat(COLS * 4 + 1))
    }
}
