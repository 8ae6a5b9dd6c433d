//! Core Connect Four game logic: player types, the gravity-bound board with
//! incremental win detection, and reversible moves for search.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{GameStatus, Move};
