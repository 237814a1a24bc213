//! Engine error types.

use thiserror::Error;

use crate::types::Cell;

/// Errors reported by the board engine
///
/// These are caller bugs (precondition violations), not game outcomes: a move
/// that changes nothing or arrives after the game ended is simply ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `spawn_tile` was called with no empty cell left
    #[error("cannot spawn a tile: the board is full")]
    BoardFull,

    /// A prepared board holds a value that is neither empty nor a power of two >= 2
    #[error("invalid cell value {value} at ({x}, {y})")]
    InvalidCell { x: usize, y: usize, value: Cell },
}
