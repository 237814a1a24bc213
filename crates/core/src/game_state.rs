//! Game state module - the board engine
//!
//! Ties the board and the RNG together: directional moves, tile spawning and
//! the sticky win/loss latch that makes the game refuse input once it is over.
//!
//! The engine is single-threaded and synchronous; every operation is O(N²).

use log::{debug, trace};

use crate::error::EngineError;
use crate::{Board, GameSnapshot, SimpleRng};
use crate::types::*;

/// A tile placed by the spawn step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub x: usize,
    pub y: usize,
    pub value: Cell,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<const N: usize = BOARD_SIZE> {
    board: Board<N>,
    rng: SimpleRng,
    /// Seed the RNG was last (re)seeded with.
    seed: u32,
    /// Sticky status: flags are only ever added until `reset`.
    status: GameStatus,
    /// Number of moves that changed the board since the last reset.
    moves: u32,
    last_spawn: Option<Spawn>,
}

impl Game {
    /// Create a new default-size game with the given RNG seed
    ///
    /// The board starts with [`START_TILES`] random tiles.
    pub fn new(seed: u32) -> Self {
        Self::seeded(seed)
    }
}

impl<const N: usize> Game<N> {
    /// Create a new game of any size with the given RNG seed
    pub fn seeded(seed: u32) -> Self {
        let mut game = Self {
            board: Board::empty(),
            rng: SimpleRng::new(seed),
            seed,
            status: GameStatus::InProgress,
            moves: 0,
            last_spawn: None,
        };
        game.reset();
        game
    }

    /// Create a game over a prepared board
    ///
    /// No tiles are spawned. The status latch starts from the board itself, so
    /// a board that is already won or lost refuses moves. A cell that is neither
    /// empty nor a power of two >= 2 is rejected with [`EngineError::InvalidCell`].
    pub fn from_board(board: Board<N>, seed: u32) -> Result<Self, EngineError> {
        if let Some((x, y, value)) = board.find_invalid_cell() {
            return Err(EngineError::InvalidCell { x, y, value });
        }
        Ok(Self {
            board,
            rng: SimpleRng::new(seed),
            seed,
            status: board.status(),
            moves: 0,
            last_spawn: None,
        })
    }

    /// Clear the board, spawn the starting tiles and clear the win/loss flags
    ///
    /// The RNG is not reseeded: consecutive games continue the same sequence.
    pub fn reset(&mut self) {
        self.board.clear();
        self.status = GameStatus::InProgress;
        self.moves = 0;
        self.last_spawn = None;

        for _ in 0..START_TILES.min(N * N) {
            if let Err(err) = self.spawn_tile() {
                panic!("freshly cleared {}x{} board has no empty cell: {}", N, N, err);
            }
        }
        // Starting tiles can already fill a tiny board.
        self.check_game_state();
        debug!(
            "reset {}x{} board (seed state {})",
            N,
            N,
            self.rng.state()
        );
    }

    /// Restart the RNG sequence from `seed`
    pub fn reseed(&mut self, seed: u32) {
        self.rng.reseed(seed);
        self.seed = seed;
    }

    /// Seed the RNG was last (re)seeded with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Place one tile on a uniformly chosen empty cell
    ///
    /// The tile is a 4 with probability `1 / FOUR_TILE_ONE_IN`, otherwise a 2.
    /// Calling this on a full board is a caller bug and returns
    /// [`EngineError::BoardFull`].
    pub fn spawn_tile(&mut self) -> Result<Spawn, EngineError> {
        let empty = self.board.empty_count();
        if empty == 0 {
            return Err(EngineError::BoardFull);
        }

        let k = self.rng.next_range(empty as u32) as usize;
        let (x, y) = self.board.nth_empty(k).ok_or(EngineError::BoardFull)?;
        let value = if self.rng.one_in(FOUR_TILE_ONE_IN) { 4 } else { 2 };
        self.board.set(x, y, value);

        let spawn = Spawn { x, y, value };
        self.last_spawn = Some(spawn);
        trace!("spawned {} at ({}, {})", value, x, y);
        Ok(spawn)
    }

    /// Apply a move
    ///
    /// Returns true if the board changed, in which case exactly one tile was
    /// spawned. Once the game is won or lost every move is ignored and returns
    /// false until [`Game::reset`].
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.status.is_terminal() {
            trace!("ignoring {} move: game is {}", direction, self.status.as_str());
            return false;
        }

        let changed = self.board.slide(direction);
        if changed {
            self.moves = self.moves.wrapping_add(1);
            // A slide or a merge always leaves at least one empty cell behind.
            if let Err(err) = self.spawn_tile() {
                panic!("board changed by {} move has no empty cell: {}", direction, err);
            }
        }
        trace!("move {} changed={}", direction, changed);

        self.check_game_state();
        changed
    }

    /// Fold the current board status into the sticky latch
    fn check_game_state(&mut self) {
        let latched = self.status.latch(self.board.status());
        if latched != self.status {
            debug!(
                "status {} -> {} after {} moves",
                self.status.as_str(),
                latched.as_str(),
                self.moves
            );
            self.status = latched;
        }
    }

    /// Status derived fresh from the board
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Sticky status used to refuse input
    pub fn latched_status(&self) -> GameStatus {
        self.status
    }

    /// True once moves are being ignored
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_spawn(&self) -> Option<Spawn> {
        self.last_spawn
    }

    /// Which directions would change the board, in [`Direction::ALL`] order
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|d| !self.is_over() && self.board.can_slide(d))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot<N>) {
        out.board = *self.board.rows();
        out.status = self.status();
        out.moves = self.moves;
        out.last_spawn = self.last_spawn;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot<N> {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(board: &Board) -> Vec<Cell> {
        board.rows().iter().flatten().copied().filter(|&c| c != EMPTY).collect()
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let game = Game::new(12345);
        assert_eq!(tiles(game.board()).len(), START_TILES);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.moves(), 0);
        assert!(tiles(game.board()).iter().all(|&v| v == 2 || v == 4));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::new(77);
        let mut b = Game::new(77);
        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.apply_move(dir), b.apply_move(dir));
            assert_eq!(a.board(), b.board());
        }
    }

    #[test]
    fn test_spawn_on_full_board_fails() {
        let full = Board::from_rows([[2; 4]; 4]);
        let mut game = Game::from_board(full, 1).unwrap();
        assert_eq!(game.spawn_tile(), Err(EngineError::BoardFull));
        assert_eq!(game.board(), &full);
    }

    #[test]
    fn test_changed_move_spawns_exactly_one() {
        let board = Board::from_rows([
            [0, 0, 2, 4],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut game = Game::from_board(board, 3).unwrap();
        assert!(game.apply_move(Direction::Left));

        let mut slid = board;
        slid.slide(Direction::Left);
        let spawn = game.last_spawn().unwrap();
        assert!(spawn.value == 2 || spawn.value == 4);
        assert_eq!(slid.get(spawn.x, spawn.y), Some(EMPTY));
        slid.set(spawn.x, spawn.y, spawn.value);
        assert_eq!(game.board(), &slid);
        assert_eq!(tiles(game.board()).len(), 3);
        assert_eq!(&game.board().rows()[0][..2], &[2, 4]);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_noop_move_does_not_spawn() {
        let board = Board::from_rows([
            [2, 4, 0, 0],
            [8, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut game = Game::from_board(board, 3).unwrap();
        assert!(!game.apply_move(Direction::Left));
        assert_eq!(game.board(), &board);
        assert_eq!(game.last_spawn(), None);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_won_game_ignores_moves() {
        let board = Board::from_rows([
            [1024, 1024, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let mut game = Game::from_board(board, 9).unwrap();
        assert!(game.apply_move(Direction::Left));
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_over());

        let frozen = *game.board();
        assert!(!game.apply_move(Direction::Right));
        assert_eq!(game.board(), &frozen);
        assert_eq!(game.legal_moves(), [false; 4]);
    }

    #[test]
    fn test_reset_clears_latch() {
        let lost = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut game = Game::from_board(lost, 5).unwrap();
        assert_eq!(game.latched_status(), GameStatus::Lost);
        assert!(!game.apply_move(Direction::Up));

        game.reset();
        assert_eq!(game.latched_status(), GameStatus::InProgress);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(tiles(game.board()).len(), 2);
    }

    #[test]
    fn test_legal_moves() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let game = Game::from_board(board, 1).unwrap();
        // Left, Right, Up, Down
        assert_eq!(game.legal_moves(), [false, true, false, true]);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut game = Game::new(11);
        game.apply_move(Direction::Down);
        let snap = game.snapshot();
        assert_eq!(&snap.board, game.board().rows());
        assert_eq!(snap.status, game.status());
        assert_eq!(snap.moves, game.moves());
        assert_eq!(snap.last_spawn, game.last_spawn());
        assert_eq!(snap.seed, 11);
    }

    #[test]
    fn test_small_board_reset() {
        let game = Game::<2>::seeded(4);
        assert_eq!(game.board().empty_count(), 2);
    }

    #[test]
    fn test_reset_latches_full_single_cell_board() {
        let mut game = Game::<1>::seeded(3);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.latched_status(), GameStatus::Lost);
        assert!(game.is_over());

        game.reset();
        assert_eq!(game.latched_status(), game.status());
        assert!(!game.apply_move(Direction::Left));
    }

    #[test]
    fn test_from_board_rejects_invalid_cells() {
        let odd = Board::from_rows([
            [2, 0, 0, 0],
            [0, 0, 6, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        assert_eq!(
            Game::from_board(odd, 1).unwrap_err(),
            EngineError::InvalidCell { x: 2, y: 1, value: 6 }
        );

        let one = Board::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(Game::from_board(one, 1).is_err());
    }
}
