//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell is empty or holds a [`Tile`].
//! Uses flat row-major storage for cache locality.
//! Coordinates: (col, row) with (0, 0) at the lower-left corner.
//!
//! The board carries a *viewing perspective*: a [`Side`] that remaps the
//! coordinates of `tile` and `move_tile` so that any side of the board can
//! play the role of "up". The perspective never touches stored data; each
//! read/write translates logical coordinates through [`Side::native`].
//! Stored tiles always carry native coordinates.

use crate::tile::Tile;
use crate::types::Side;

/// The game board - N x N cells plus the current viewing perspective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col), native coords
    cells: Vec<Option<Tile>>,
    perspective: Side,
}

impl Board {
    /// Create a new empty board of side length `size`
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "board size must be at least 2, got {}", size);
        assert!(size <= u8::MAX as usize, "board size does not fit in u8");
        Self {
            size,
            cells: vec![None; size * size],
            perspective: Side::Up,
        }
    }

    /// Calculate flat index from native (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.size && row < self.size);
        row * self.size + col
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current viewing perspective
    pub fn perspective(&self) -> Side {
        self.perspective
    }

    /// Change the viewing perspective for subsequent `tile`/`move_tile` calls.
    ///
    /// Stored data is untouched; only the coordinate translation changes.
    pub fn set_perspective(&mut self, side: Side) {
        self.perspective = side;
    }

    /// Get the tile at logical (col, row) under the current perspective
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        let (ncol, nrow) = self.perspective.native(col, row, self.size);
        self.cells[self.index(ncol, nrow)]
    }

    /// Relocate `tile` to the logical destination (col, row).
    ///
    /// Returns `false` without touching the board when the destination equals
    /// the tile's current logical position; this distinguishes a positional
    /// no-op from an actual slide for change detection. Otherwise the source
    /// cell is emptied, a new tile with the *given* tile's value is written at
    /// the destination, and `true` is returned.
    ///
    /// The destination is overwritten blindly. Callers guarantee single
    /// occupancy: the tilt algorithm only writes onto an occupied cell when
    /// merging, passing a pre-doubled tile.
    pub fn move_tile(&mut self, col: usize, row: usize, tile: Tile) -> bool {
        let (ncol, nrow) = self.perspective.native(col, row, self.size);
        if (tile.col as usize, tile.row as usize) == (ncol, nrow) {
            return false;
        }
        let src = self.index(tile.col as usize, tile.row as usize);
        self.cells[src] = None;
        let dst = self.index(ncol, nrow);
        self.cells[dst] = Some(tile.moved_to(ncol as u8, nrow as u8));
        true
    }

    /// Insert `tile` at its native position. The cell must be empty.
    pub fn add_tile(&mut self, tile: Tile) {
        let idx = self.index(tile.col as usize, tile.row as usize);
        assert!(
            self.cells[idx].is_none(),
            "cell ({}, {}) is already occupied",
            tile.col,
            tile.row
        );
        self.cells[idx] = Some(tile);
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Empty the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
