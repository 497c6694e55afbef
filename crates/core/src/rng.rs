//! RNG module - random tile spawning
//!
//! The engine itself never spawns tiles; the spawner is the external
//! collaborator that picks a random empty cell and inserts a 2 or a 4
//! through [`GameState::add_tile`].
//!
//! Also provides a simple LCG for deterministic testing.

use crate::game_state::GameState;
use crate::tile::Tile;
use crate::types::{SPAWN_TWO_DENOMINATOR, SPAWN_TWO_NUMERATOR};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Random tile spawner: uniform over empty cells, 2 with probability 9/10,
/// otherwise 4. Deterministic per seed.
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: SimpleRng,
}

impl TileSpawner {
    /// Create a spawner with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Insert one tile at a random empty cell of `game`.
    ///
    /// Returns the inserted tile, or `None` when the board is full.
    pub fn spawn(&mut self, game: &mut GameState) -> Option<Tile> {
        let size = game.size();
        let mut empty: Vec<(u8, u8)> = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                if game.tile(col, row).is_none() {
                    empty.push((col as u8, row as u8));
                }
            }
        }
        if empty.is_empty() {
            return None;
        }

        let (col, row) = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.next_range(SPAWN_TWO_DENOMINATOR) < SPAWN_TWO_NUMERATOR {
            2
        } else {
            4
        };
        let tile = Tile::new(value, col, row);
        game.add_tile(tile);
        Some(tile)
    }
}
