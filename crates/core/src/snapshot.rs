//! Plain-data view of the game for rendering layers.
//!
//! A snapshot decouples renderers from the engine: it carries cell values
//! only (no `Tile` positions) plus the scalar state a view needs.

/// Cell values and scores at one point in time. `cells` is row-major native
/// order (`row * size + col`), 0 = empty, row 0 = bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub size: usize,
    pub cells: Vec<u32>,
    pub score: u32,
    pub max_score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Value at native (col, row); 0 means empty.
    pub fn value(&self, col: usize, row: usize) -> u32 {
        self.cells[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::GameState;
    use crate::tile::Tile;

    #[test]
    fn snapshot_reflects_board_and_scores() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(2, 1, 0));
        game.add_tile(Tile::new(8, 3, 2));

        let snap = game.snapshot();
        assert_eq!(snap.size, 4);
        assert_eq!(snap.cells.len(), 16);
        assert_eq!(snap.value(1, 0), 2);
        assert_eq!(snap.value(3, 2), 8);
        assert_eq!(snap.value(0, 0), 0);
        assert_eq!(snap.score, 0);
        assert!(!snap.game_over);
    }

    #[test]
    fn snapshot_into_reuses_allocation() {
        let mut game = GameState::new(4);
        game.add_tile(Tile::new(4, 0, 0));

        let mut snap = game.snapshot();
        game.snapshot_into(&mut snap);
        assert_eq!(snap.value(0, 0), 4);
    }
}
