//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the 2048 board engine: the grid, the move/merge algorithm,
//! random tile spawning and win/loss detection. It has **zero dependencies**
//! on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can drive a terminal, a GUI, or a headless bot
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid, rotation, and the shared leftward line algorithm
//! - [`game_state`]: The engine - moves, spawning, sticky win/loss latch
//! - [`rng`]: Engine-owned seedable LCG
//! - [`snapshot`]: Copyable view of the game for renderers
//! - [`error`]: Precondition violations reported by the engine
//!
//! # Game Rules
//!
//! - **Moves**: Tiles slide as far as possible toward the chosen direction
//! - **Merges**: Two equal tiles merge into one of double value, at most once per move
//! - **Spawn**: Every move that changes the board spawns one tile (2 at 90%, 4 at 10%)
//! - **Win**: A 2048 tile appears
//! - **Loss**: The board is full and no two neighbours are equal
//! - **Game over**: Once won or lost, moves are ignored until reset
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, Game};
//! use tui_2048_types::{Direction, GameStatus};
//!
//! let board = Board::from_rows([
//!     [2, 2, 2, 2],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ]);
//! let mut game = Game::from_board(board, 12345).unwrap();
//!
//! // Left merges pairwise, never all four into one tile
//! assert!(game.apply_move(Direction::Left));
//! assert_eq!(&game.board().rows()[0][..2], &[4, 4]);
//!
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{is_valid_cell, slide_line, Board};
pub use error::EngineError;
pub use game_state::{Game, Spawn};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
