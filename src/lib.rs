//! # Connect Four
//!
//! A Connect Four game with a minimax computer opponent. The board detects
//! wins incrementally from the last move and supports undo, so the search
//! explores hypothetical lines in place instead of copying the grid.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, status and move history
//! - [`ai`] — Agent trait, difficulty tiers, minimax / alpha-beta search
//! - [`arena`] — Play games between agents and tally the results
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
