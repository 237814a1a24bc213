use crate::game_state::Spawn;
use crate::types::{Cell, GameStatus, BOARD_SIZE, EMPTY};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot<const N: usize = BOARD_SIZE> {
    pub board: [[Cell; N]; N],
    pub status: GameStatus,
    pub moves: u32,
    pub last_spawn: Option<Spawn>,
    pub seed: u32,
}

impl<const N: usize> GameSnapshot<N> {
    pub fn clear(&mut self) {
        self.board = [[EMPTY; N]; N];
        self.status = GameStatus::InProgress;
        self.moves = 0;
        self.last_spawn = None;
        self.seed = 0;
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Cell {
        self.board.iter().flatten().copied().max().unwrap_or(EMPTY)
    }
}

impl<const N: usize> Default for GameSnapshot<N> {
    fn default() -> Self {
        Self {
            board: [[EMPTY; N]; N],
            status: GameStatus::InProgress,
            moves: 0,
            last_spawn: None,
            seed: 0,
        }
    }
}
