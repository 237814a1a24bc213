//! Board module - manages the game grid
//!
//! The board is an N x N grid (4 x 4 by default) of cell values, where `0` is
//! empty and any power of two is a tile.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Every directional move is reduced to one leftward line algorithm: the grid
//! is rotated clockwise so the target direction points left, each row is
//! slid with [`slide_line`], and the grid is rotated back.

use arrayvec::ArrayVec;

use crate::types::{Cell, Direction, GameStatus, BOARD_SIZE, EMPTY, WIN_TILE};

/// The game board - N columns x N rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = BOARD_SIZE> {
    /// Rows of cells, top to bottom (`cells[y][x]`)
    cells: [[Cell; N]; N],
}

impl Board {
    /// Create a new empty board of the default size
    pub fn new() -> Self {
        Self::empty()
    }
}

impl<const N: usize> Board<N> {
    /// Create an empty board
    pub fn empty() -> Self {
        Self {
            cells: [[EMPTY; N]; N],
        }
    }

    /// Create a board from rows given top to bottom
    pub fn from_rows(rows: [[Cell; N]; N]) -> Self {
        Self { cells: rows }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        N
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [[EMPTY; N]; N];
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == EMPTY).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Position of the `k`-th empty cell in row-major order
    pub fn nth_empty(&self, k: usize) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &c)| (x, y, c)))
            .filter(|&(_, _, c)| c == EMPTY)
            .nth(k)
            .map(|(x, y, _)| (x, y))
    }

    /// Check if any cell holds `value`
    pub fn contains(&self, value: Cell) -> bool {
        self.cells.iter().flatten().any(|&c| c == value)
    }

    /// First cell, in row-major order, that is neither empty nor a power of two >= 2
    pub fn find_invalid_cell(&self) -> Option<(usize, usize, Cell)> {
        self.cells.iter().enumerate().find_map(|(y, row)| {
            row.iter()
                .position(|&c| !is_valid_cell(c))
                .map(|x| (x, y, row[x]))
        })
    }

    /// Check if two horizontally or vertically adjacent cells are equal
    ///
    /// Each cell is compared with its right and down neighbours only, so every
    /// pair is visited once.
    pub fn has_adjacent_pair(&self) -> bool {
        for y in 0..N {
            for x in 0..N {
                let v = self.cells[y][x];
                if x + 1 < N && v == self.cells[y][x + 1] {
                    return true;
                }
                if y + 1 < N && v == self.cells[y + 1][x] {
                    return true;
                }
            }
        }
        false
    }

    /// Derive the game status from the grid alone
    pub fn status(&self) -> GameStatus {
        let won = self.contains(WIN_TILE);
        let lost = self.is_full() && !self.has_adjacent_pair();
        GameStatus::from_flags(won, lost)
    }

    /// Rotate the grid clockwise by `quarter_turns` x 90°
    ///
    /// Pure coordinate remap: a quarter turn moves `(x, y)` to `(N - 1 - y, x)`.
    /// `rotated(k)` followed by `rotated(4 - k)` restores the grid.
    pub fn rotated(&self, quarter_turns: u8) -> Self {
        let mut out = *self;
        for _ in 0..quarter_turns % 4 {
            let src = out.cells;
            for (y, row) in src.iter().enumerate() {
                for (x, &cell) in row.iter().enumerate() {
                    out.cells[x][N - 1 - y] = cell;
                }
            }
        }
        out
    }

    /// Slide every row left
    /// Returns true if any row changed
    pub fn slide_left(&mut self) -> bool {
        let mut changed = false;
        for row in &mut self.cells {
            let slid = slide_line(row);
            if slid != *row {
                changed = true;
                *row = slid;
            }
        }
        changed
    }

    /// Slide all tiles toward `direction`
    /// Returns true if the grid changed
    pub fn slide(&mut self, direction: Direction) -> bool {
        let turns = direction.quarter_turns();
        let mut work = self.rotated(turns);
        let changed = work.slide_left();
        if changed {
            *self = work.rotated((4 - turns) % 4);
        }
        changed
    }

    /// Check whether sliding toward `direction` would change the grid
    pub fn can_slide(&self, direction: Direction) -> bool {
        let mut probe = *self;
        probe.slide(direction)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// True for `0` and for any power of two >= 2
pub fn is_valid_cell(value: Cell) -> bool {
    value == EMPTY || (value >= 2 && value.is_power_of_two())
}

/// Slide one line toward index 0
///
/// 1. Compress: non-empty cells move left keeping their order.
/// 2. Merge: one left-to-right pass; a cell equal to its right neighbour
///    doubles and the neighbour is cleared, so `2 2 2 2` becomes `4 4`.
/// 3. Compress again to close the gaps left by merges.
pub fn slide_line<const N: usize>(line: &[Cell; N]) -> [Cell; N] {
    let mut out = compress(line);
    for i in 0..N.saturating_sub(1) {
        if out[i] != EMPTY && out[i] == out[i + 1] {
            out[i] *= 2;
            out[i + 1] = EMPTY;
        }
    }
    compress(&out)
}

fn compress<const N: usize>(line: &[Cell; N]) -> [Cell; N] {
    let tiles: ArrayVec<Cell, N> = line.iter().copied().filter(|&c| c != EMPTY).collect();
    let mut out = [EMPTY; N];
    out[..tiles.len()].copy_from_slice(&tiles);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_line_merges_once() {
        assert_eq!(slide_line(&[2, 2, 2, 2]), [4, 4, 0, 0]);
        assert_eq!(slide_line(&[4, 4, 8, 8]), [8, 16, 0, 0]);
        assert_eq!(slide_line(&[2, 2, 4, 0]), [4, 4, 0, 0]);
    }

    #[test]
    fn test_slide_line_compresses() {
        assert_eq!(slide_line(&[0, 2, 0, 2]), [4, 0, 0, 0]);
        assert_eq!(slide_line(&[0, 0, 2, 4]), [2, 4, 0, 0]);
        assert_eq!(slide_line(&[0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(slide_line(&[2, 4, 2, 4]), [2, 4, 2, 4]);
    }

    #[test]
    fn test_cell_validity() {
        assert!(is_valid_cell(EMPTY));
        assert!(is_valid_cell(2));
        assert!(is_valid_cell(WIN_TILE));
        assert!(!is_valid_cell(1));
        assert!(!is_valid_cell(3));
        assert!(!is_valid_cell(12));

        let board = Board::from_rows([[2, 4], [0, 7]]);
        assert_eq!(board.find_invalid_cell(), Some((1, 1, 7)));
        assert_eq!(Board::<3>::empty().find_invalid_cell(), None);
    }

    #[test]
    fn test_slide_line_odd_run() {
        assert_eq!(slide_line(&[2, 2, 2, 0]), [4, 2, 0, 0]);
        assert_eq!(slide_line(&[0, 8, 8, 8]), [16, 8, 0, 0]);
    }

    #[test]
    fn test_rotation_moves_corners_clockwise() {
        let board = Board::from_rows([
            [1, 0, 0, 2],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [4, 0, 0, 3],
        ]);
        let r = board.rotated(1);
        assert_eq!(
            r.rows(),
            &[
                [4, 0, 0, 1],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [3, 0, 0, 2],
            ]
        );
    }

    #[test]
    fn test_rotation_inverse_restores() {
        let board = Board::from_rows([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2, 4],
            [0, 0, 8, 0],
        ]);
        for k in 0..4u8 {
            assert_eq!(board.rotated(k).rotated((4 - k) % 4), board);
        }
        assert_eq!(board.rotated(4), board);
    }

    #[test]
    fn test_nth_empty_row_major() {
        let board = Board::from_rows([
            [2, 0, 2, 2],
            [2, 2, 2, 2],
            [2, 2, 0, 2],
            [2, 2, 2, 2],
        ]);
        assert_eq!(board.empty_count(), 2);
        assert_eq!(board.nth_empty(0), Some((1, 0)));
        assert_eq!(board.nth_empty(1), Some((2, 2)));
        assert_eq!(board.nth_empty(2), None);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut board = Board::new();
        assert!(board.set(3, 3, 8));
        assert_eq!(board.get(3, 3), Some(8));
        assert!(!board.set(4, 0, 2));
        assert_eq!(board.get(0, 4), None);
    }

    #[test]
    fn test_small_board_slides() {
        let mut board = Board::<2>::from_rows([[0, 2], [2, 2]]);
        assert!(board.slide(Direction::Up));
        assert_eq!(board.rows(), &[[2, 4], [0, 0]]);
        assert!(!board.slide(Direction::Up));
    }

    #[test]
    fn test_status_derivation() {
        let lost = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert_eq!(lost.status(), GameStatus::Lost);

        let mut won = Board::new();
        won.set(1, 2, WIN_TILE);
        assert_eq!(won.status(), GameStatus::Won);

        let both = Board::from_rows([
            [2048, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert_eq!(both.status(), GameStatus::WonAndLost);

        let vertical_pair = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [2, 8, 16, 32],
        ]);
        assert!(vertical_pair.has_adjacent_pair());
        assert_eq!(vertical_pair.status(), GameStatus::InProgress);
    }
}
