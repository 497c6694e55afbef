//! Game state module - the rules engine
//!
//! Ties together board, tiles, and scoring: tilting toward a side, the
//! merge-once rule, score accounting, and game-over detection. External
//! collaborators (renderer, spawner, tests) drive it through the public
//! surface; tile spawning policy lives outside this type.

use std::fmt;
use std::sync::mpsc;

use crate::board::Board;
use crate::snapshot::GameSnapshot;
use crate::tile::Tile;
use crate::types::{GameEvent, Side, MAX_PIECE};

/// Complete game state: board, score, high-water mark, game-over flag
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u32,
    /// High-water mark; ratcheted whenever the game-over query observes a
    /// finished game, not only at the moment the game ends.
    max_score: u32,
    game_over: bool,
    /// Observer hook registered by the caller; notified synchronously after
    /// state-mutating operations.
    notifier: Option<mpsc::Sender<GameEvent>>,
}

impl GameState {
    /// Create a new game on an empty `size` x `size` board, score 0, not over
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            score: 0,
            max_score: 0,
            game_over: false,
            notifier: None,
        }
    }

    /// Create a game pre-populated from raw values, for deterministic setup.
    ///
    /// `rows[row][col]` with row 0 at the bottom; 0 means empty. Score,
    /// max score, and the game-over flag are taken as given, not recomputed.
    pub fn from_rows(rows: &[Vec<u32>], score: u32, max_score: u32, game_over: bool) -> Self {
        let size = rows.len();
        let mut board = Board::new(size);
        for (row, values) in rows.iter().enumerate() {
            assert_eq!(values.len(), size, "row {} is not {} cells wide", row, size);
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    board.add_tile(Tile::new(value, col as u8, row as u8));
                }
            }
        }
        Self {
            board,
            score,
            max_score,
            game_over,
            notifier: None,
        }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The tile at native (col, row), if any
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.board.tile(col, row)
    }

    /// Read access to the underlying board (for the game-over predicates)
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Maximum score observed at a game over so far
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Register a channel that receives a [`GameEvent`] after every
    /// state-mutating operation. A dropped receiver is silently ignored.
    pub fn set_notifier(&mut self, notifier: mpsc::Sender<GameEvent>) {
        self.notifier = Some(notifier);
    }

    fn notify(&self, event: GameEvent) {
        if let Some(notifier) = &self.notifier {
            let _ = notifier.send(event);
        }
    }

    /// Whether the game is over: a 2048 tile exists, or no move is possible.
    ///
    /// Recomputed on every call; when true, the max score ratchets up to the
    /// current score. The ratchet deliberately runs at query time so repeated
    /// queries after further setup keep the high-water mark current.
    pub fn game_over(&mut self) -> bool {
        self.check_game_over();
        if self.game_over {
            self.max_score = self.max_score.max(self.score);
        }
        self.game_over
    }

    fn check_game_over(&mut self) {
        self.game_over =
            max_tile_exists(&self.board) || !at_least_one_move_exists(&self.board);
    }

    /// Reset: empty board, score 0, not over
    pub fn clear(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.board.clear();
        self.notify(GameEvent::Cleared);
    }

    /// Insert `tile` at its native position. The cell must be empty;
    /// inserting onto an occupied cell is a programmer error and panics.
    pub fn add_tile(&mut self, tile: Tile) {
        self.board.add_tile(tile);
        self.check_game_over();
        self.notify(GameEvent::TileAdded);
    }

    /// Tilt the board toward `side`. Returns true iff this changes the board.
    ///
    /// Rules:
    ///
    /// 1. Two tiles adjacent in the direction of motion with the same value
    ///    merge into one tile of twice the value, which is added to the score.
    /// 2. A tile that results from a merge will not merge again on the same
    ///    tilt: each tile is part of at most one merge per move.
    /// 3. With three adjacent equal tiles, the leading two (in the direction
    ///    of motion) merge and the trailing tile does not.
    pub fn tilt(&mut self, side: Side) -> bool {
        let mut changed = false;
        let size = self.board.size();

        // Reorient so `side` is the logical top, then slide every column's
        // tiles toward the logical top row.
        self.board.set_perspective(side);

        for col in 0..size {
            // Highest logical row still free in this column.
            let mut top = size - 1;
            // Value, row, and merge eligibility of the previously placed
            // tile, if any. A freshly slid tile may merge with the next
            // matching tile; a merged tile may not merge again this tilt.
            let mut prev: Option<(u32, usize, bool)> = None;

            for row in (0..size).rev() {
                let Some(tile) = self.board.tile(col, row) else {
                    continue;
                };
                match prev {
                    None => {
                        if self.board.move_tile(col, top, tile) {
                            changed = true;
                        }
                        prev = Some((tile.value, top, true));
                        top = top.saturating_sub(1);
                    }
                    Some((value, prev_row, true)) if tile.value == value => {
                        // Merge: overwrite prev with the doubled tile. The
                        // merged slot reuses prev's position, so `top` stays.
                        self.board.move_tile(col, prev_row, tile.doubled());
                        self.score += tile.value * 2;
                        prev = Some((tile.value * 2, prev_row, false));
                        changed = true;
                    }
                    Some(_) => {
                        if self.board.move_tile(col, top, tile) {
                            changed = true;
                        }
                        prev = Some((tile.value, top, true));
                        top = top.saturating_sub(1);
                    }
                }
            }
        }

        self.board.set_perspective(Side::Up);

        self.check_game_over();
        if changed {
            self.notify(GameEvent::Tilted(side));
        }
        changed
    }

    /// Fill a caller-owned snapshot with the current state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let size = self.board.size();
        out.size = size;
        out.cells.clear();
        out.cells.resize(size * size, 0);
        for row in 0..size {
            for col in 0..size {
                if let Some(tile) = self.board.tile(col, row) {
                    out.cells[row * size + col] = tile.value;
                }
            }
        }
        out.score = self.score;
        out.max_score = self.max_score;
        out.game_over = self.game_over;
    }

    /// Plain-data view of the current state for rendering layers.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

/// Returns true if any tile holds the maximum value ([`MAX_PIECE`]).
pub fn max_tile_exists(board: &Board) -> bool {
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            if let Some(tile) = board.tile(col, row) {
                if tile.value == MAX_PIECE {
                    return true;
                }
            }
        }
    }
    false
}

/// Returns true if at least one cell on the board is empty.
pub fn empty_space_exists(board: &Board) -> bool {
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            if board.tile(col, row).is_none() {
                return true;
            }
        }
    }
    false
}

/// Returns true if any valid move remains: an empty cell exists, or two
/// adjacent tiles hold the same value. Adjacency is checked in the native
/// orientation; the result is perspective-independent.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }
    let size = board.size();
    // Board is full here, so every cell dereference below is occupied.
    for row in 0..size {
        for col in 0..size {
            let value = board.tile(col, row).map(|t| t.value);
            if col + 1 < size && board.tile(col + 1, row).map(|t| t.value) == value {
                return true;
            }
            if row + 1 < size && board.tile(col, row + 1).map(|t| t.value) == value {
                return true;
            }
        }
    }
    false
}

impl PartialEq for GameState {
    /// Structural identity: grid contents, score, max score, game-over flag.
    /// The notifier is a transport, not state.
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.score == other.score
            && self.max_score == other.max_score
            && self.game_over == other.game_over
    }
}

impl fmt::Display for GameState {
    /// Canonical text rendering: 4-wide right-justified cells, empty cells
    /// blank, top row first, then score, max score, and over status.
    ///
    /// Reads the stored flag and max score as-is. Every mutating operation
    /// keeps them current, but states assembled via [`GameState::from_rows`]
    /// should call [`GameState::game_over`] first if they want the footer to
    /// reflect a recomputed, ratcheted value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size();
        writeln!(f)?;
        writeln!(f, "[")?;
        for row in (0..size).rev() {
            for col in 0..size {
                match self.board.tile(col, row) {
                    Some(tile) => write!(f, "|{:>4}", tile.value)?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        let over = if self.game_over { "over" } else { "not over" };
        writeln!(
            f,
            "] {} (max: {}) (game is {}) ",
            self.score, self.max_score, over
        )
    }
}
