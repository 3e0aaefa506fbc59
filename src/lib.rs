//! # Gridlock
//!
//! A sliding-car traffic puzzle for the terminal: slide cars along their
//! rows and columns until one escapes through the exit on the right edge
//! of the board. Features a terminal UI built with Ratatui and loads
//! puzzle layouts from JSON files.
//!
//! ## Modules
//!
//! - [`game`]: board, cars, coordinates, and the movement rules
//! - [`puzzle`]: JSON puzzle definitions and the built-in layout
//! - [`ui`]: terminal UI with the interactive puzzle view
//! - [`error`]: structured error types

pub mod error;
pub mod game;
pub mod puzzle;
pub mod ui;
