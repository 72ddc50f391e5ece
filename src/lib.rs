//! Snake duel: a human-controlled snake against an AI snake on a bounded grid.
//!
//! The simulation core (`snake`, `food`, `enemy`, `collision`, `game`) is
//! independent of the terminal. `renderer`, `ui`, `input` and
//! `terminal_runtime` adapt it to a ratatui/crossterm terminal.

pub mod clock;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
