//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (engine logic, terminal rendering, tests).
//!
//! # Board
//!
//! - **Size**: 4x4 cells by default ([`BOARD_SIZE`])
//! - **Cell**: `0` is empty, any power of two `>= 2` is a tile
//! - **Coordinates**: `(x, y)` with `x` growing right and `y` growing down
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 4 | Rows and columns of the default board |
//! | `WIN_TILE` | 2048 | A tile of this value wins the game |
//! | `START_TILES` | 2 | Tiles spawned by a reset |
//! | `FOUR_TILE_ONE_IN` | 10 | A spawned tile is a 4 one time in ten, otherwise a 2 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameStatus, BOARD_SIZE, WIN_TILE};
//!
//! // Parse a direction (case-insensitive)
//! let dir: Direction = "up".parse().unwrap();
//! assert_eq!(dir, Direction::Up);
//!
//! // Unknown input is an error, never a silent default
//! assert!("sideways".parse::<Direction>().is_err());
//!
//! // Status helpers
//! assert!(GameStatus::WonAndLost.is_won());
//! assert!(GameStatus::WonAndLost.is_lost());
//! assert!(!GameStatus::InProgress.is_terminal());
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

use std::fmt;
use std::str::FromStr;

/// Board side length in cells (4 rows x 4 columns)
pub const BOARD_SIZE: usize = 4;

/// Tile value that wins the game
pub const WIN_TILE: Cell = 2048;

/// Number of tiles spawned on reset
pub const START_TILES: usize = 2;

/// A spawned tile is a 4 one time in this many, otherwise a 2
pub const FOUR_TILE_ONE_IN: u32 = 10;

/// A cell on the game board
///
/// - `0`: Empty cell
/// - `2, 4, 8, ...`: Tile of that value
pub type Cell = u32;

/// The empty cell value
pub const EMPTY: Cell = 0;


/// The four directions a move can slide tiles toward
///
/// Every move is normalised to a leftward slide by rotating the board
/// clockwise [`Direction::quarter_turns`] times, sliding, then rotating back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in index order (`0 = Left` .. `3 = Down`)
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Clockwise quarter turns that make this direction point left
    ///
    /// | Direction | Turns | Angle |
    /// |-----------|-------|-------|
    /// | Left | 0 | 0° |
    /// | Down | 1 | 90° |
    /// | Right | 2 | 180° |
    /// | Up | 3 | 270° |
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.quarter_turns(), 0);
    /// assert_eq!(Direction::Right.quarter_turns(), 2);
    /// ```
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Position of this direction in [`Direction::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a direction cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDirectionError {
    #[error("invalid direction {0:?} (expected left, right, up or down)")]
    Name(String),
    #[error("invalid direction index {0} (expected 0..=3)")]
    Index(u8),
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse a direction from its name or first letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!("L".parse(), Ok(Direction::Left));
    /// assert_eq!("Down".parse(), Ok(Direction::Down));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(ParseDirectionError::Name(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = ParseDirectionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(value as usize)
            .copied()
            .ok_or(ParseDirectionError::Index(value))
    }
}

/// Game status derived from the grid
///
/// - **InProgress**: Moves are still accepted
/// - **Won**: Some cell holds [`WIN_TILE`]
/// - **Lost**: No empty cell and no horizontally or vertically adjacent equal pair
/// - **WonAndLost**: Both at once (the winning move also filled a dead board)
///
/// Every variant except `InProgress` is terminal: input is ignored until reset.
/// Which overlay wins for `WonAndLost` is up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
    WonAndLost,
}

impl GameStatus {
    /// Build a status from the two terminal flags
    pub fn from_flags(won: bool, lost: bool) -> Self {
        match (won, lost) {
            (false, false) => GameStatus::InProgress,
            (true, false) => GameStatus::Won,
            (false, true) => GameStatus::Lost,
            (true, true) => GameStatus::WonAndLost,
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::WonAndLost)
    }

    pub fn is_lost(&self) -> bool {
        matches!(self, GameStatus::Lost | GameStatus::WonAndLost)
    }

    /// True once the game no longer accepts moves
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Union of two statuses (flags only ever get set, never cleared)
    pub fn latch(self, other: GameStatus) -> Self {
        Self::from_flags(
            self.is_won() || other.is_won(),
            self.is_lost() || other.is_lost(),
        )
    }

    /// Convert to snake_case string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
            GameStatus::WonAndLost => "won_and_lost",
        }
    }
}
