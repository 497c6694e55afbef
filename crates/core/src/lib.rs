//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: a seeded spawner produces identical games
//! - **Testable**: comprehensive unit tests for all game rules
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`tile`]: immutable value-at-position records
//! - [`board`]: N x N grid with a viewing perspective that remaps coordinates
//! - [`game_state`]: the rules engine - tilt, merge, scoring, game-over
//! - [`rng`]: seeded LCG and the random tile spawner
//! - [`snapshot`]: plain-data view of the game for rendering layers
//!
//! # Game Rules
//!
//! - **Tilt**: all tiles slide toward one side; adjacent equal tiles merge
//!   into one tile of twice the value, which is added to the score
//! - **Merge once**: a tile produced by a merge cannot merge again within the
//!   same tilt; with three equal tiles in a row, the leading pair merges and
//!   the trailing tile slides in unmerged
//! - **Game over**: a 2048 tile exists, or the board is full with no equal
//!   adjacent pair
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, Tile};
//! use tui_2048_types::Side;
//!
//! let mut game = GameState::new(4);
//! game.add_tile(Tile::new(2, 0, 3));
//! game.add_tile(Tile::new(2, 1, 3));
//!
//! // The pair merges against the left wall.
//! assert!(game.tilt(Side::Left));
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.tile(0, 3).unwrap().value, 4);
//! ```
//!
//! # Perspectives
//!
//! One slide-toward-the-top pass implements all four tilt directions: the
//! board is reoriented so the tilt side becomes the logical "up", every
//! column is compacted toward the logical top row, and the orientation is
//! restored. The remapping is a pure coordinate translation
//! ([`tui_2048_types::Side::native`]); storage is never rotated.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{at_least_one_move_exists, empty_space_exists, max_tile_exists, GameState};
pub use rng::{SimpleRng, TileSpawner};
pub use snapshot::GameSnapshot;
pub use tile::Tile;
