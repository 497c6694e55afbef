//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, UI rendering, test harnesses).
//!
//! # Board Conventions
//!
//! The board is a square grid of `size x size` cells:
//!
//! - **Coordinates**: `(col, row)` with `(0, 0)` at the lower-left corner,
//!   like (x, y) coordinates. Row `size - 1` is the top row.
//! - **Default size**: 4x4 (the classic game)
//! - **Winning tile**: 2048
//!
//! # Perspectives
//!
//! A [`Side`] doubles as a tilt direction and as a *viewing perspective*: the
//! board can remap logical coordinates so that any side plays the role of
//! "up". This lets one slide-toward-the-top algorithm implement all four tilt
//! directions. The mapping is a pure function ([`Side::native`]) applied at
//! each coordinate read/write; the underlying storage is never rotated.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{GameAction, Side, BOARD_SIZE, MAX_PIECE};
//!
//! // Parse a tilt direction (case-insensitive)
//! let side = Side::from_str("up").unwrap();
//! assert_eq!(side, Side::Up);
//!
//! // Remap logical coordinates to native ones. Under the Right perspective,
//! // the logical top row is the native rightmost column.
//! assert_eq!(Side::Right.native(0, 3, 4), (3, 3));
//!
//! // Parse a game action
//! let action = GameAction::from_str("tiltLeft").unwrap();
//! assert_eq!(action, GameAction::Tilt(Side::Left));
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(MAX_PIECE, 2048);
//! ```

/// Default board side length (4x4 grid)
pub const BOARD_SIZE: usize = 4;

/// Largest piece value; reaching it ends the game
pub const MAX_PIECE: u32 = 2048;

/// Numerator of the probability that a spawned tile is a 2 (9/10)
pub const SPAWN_TWO_NUMERATOR: u32 = 9;

/// Denominator of the spawn probability
pub const SPAWN_TWO_DENOMINATOR: u32 = 10;

/// Number of tiles placed on a fresh board before the first move
pub const INITIAL_TILES: usize = 2;

/// A side of the board: a tilt direction, and equally a viewing perspective
///
/// Directions are board-relative, not camera-relative. The cycle
/// Up → Right → Down → Left corresponds to successive 90° clockwise turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Up,
    Down,
    Left,
    Right,
}

/// All four sides, in a fixed order convenient for exhaustive loops.
pub const SIDES: [Side; 4] = [Side::Up, Side::Down, Side::Left, Side::Right];

impl Side {
    /// Translate a logical `(col, row)` under this perspective into native
    /// board coordinates.
    ///
    /// The four mappings are the symmetries of the square that carry logical
    /// "up" onto each native side, so sliding toward logical row `size - 1`
    /// slides toward this side on the real board:
    ///
    /// - `Up`: identity
    /// - `Down`: 180° rotation
    /// - `Right` / `Left`: the two 90° rotations
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Side;
    ///
    /// assert_eq!(Side::Up.native(1, 2, 4), (1, 2));
    /// assert_eq!(Side::Down.native(1, 2, 4), (2, 1));
    /// assert_eq!(Side::Right.native(1, 2, 4), (2, 2));
    /// assert_eq!(Side::Left.native(1, 2, 4), (1, 1));
    /// ```
    pub fn native(&self, col: usize, row: usize, size: usize) -> (usize, usize) {
        debug_assert!(col < size && row < size);
        let n = size - 1;
        match self {
            Side::Up => (col, row),
            Side::Down => (n - col, n - row),
            Side::Right => (row, n - col),
            Side::Left => (n - row, col),
        }
    }

    /// Parse a side from a string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Side::Up),
            "down" | "d" => Some(Side::Down),
            "left" | "l" => Some(Side::Left),
            "right" | "r" => Some(Side::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Up => "up",
            Side::Down => "down",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by the input layer and consumed by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Tilt the board toward the given side
    Tilt(Side),
    /// Start a fresh game (clear board, reset score, respawn)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{GameAction, Side};
    ///
    /// assert_eq!(GameAction::from_str("tiltUp"), Some(GameAction::Tilt(Side::Up)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tiltup" => Some(GameAction::Tilt(Side::Up)),
            "tiltdown" => Some(GameAction::Tilt(Side::Down)),
            "tiltleft" => Some(GameAction::Tilt(Side::Left)),
            "tiltright" => Some(GameAction::Tilt(Side::Right)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Tilt(Side::Up) => "tiltUp",
            GameAction::Tilt(Side::Down) => "tiltDown",
            GameAction::Tilt(Side::Left) => "tiltLeft",
            GameAction::Tilt(Side::Right) => "tiltRight",
            GameAction::Restart => "restart",
        }
    }
}

/// Notification emitted by the engine after a state-mutating operation
///
/// Sent synchronously over a channel the caller registers; intended consumer
/// is a rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The board was cleared and the score reset
    Cleared,
    /// A tile was inserted at an empty cell
    TileAdded,
    /// A tilt toward the given side changed the board
    Tilted(Side),
}
