//! Tile module - immutable value-at-position records
//!
//! A tile never mutates: moving one produces a new `Tile` at the new
//! position, merging produces a new `Tile` of twice the value. Stored
//! coordinates are always native board coordinates, (0, 0) = lower-left.

/// A single tile: a power-of-two value at a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Tile value; always a power of two, 2 or greater
    pub value: u32,
    /// Native column, 0 = leftmost
    pub col: u8,
    /// Native row, 0 = bottom
    pub row: u8,
}

impl Tile {
    /// Create a tile. `value` must be a power of two >= 2.
    pub fn new(value: u32, col: u8, row: u8) -> Self {
        debug_assert!(
            value >= 2 && value.is_power_of_two(),
            "tile value must be a power of two >= 2, got {}",
            value
        );
        Self { value, col, row }
    }

    /// The same tile relocated to a new position.
    pub fn moved_to(self, col: u8, row: u8) -> Self {
        Self { col, row, ..self }
    }

    /// The tile that results from merging an equal tile into this one.
    pub fn doubled(self) -> Self {
        Self {
            value: self.value * 2,
            ..self
        }
    }
}
