//! Terminal rendering module.
//!
//! Split in two layers:
//!
//! - [`game_view`]: pure mapping from a [`tui_2048_core::GameSnapshot`] to
//!   styled text lines (no I/O, unit-testable)
//! - [`renderer`]: flushes styled lines to a real terminal via crossterm,
//!   owning the raw-mode / alternate-screen lifecycle

pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use game_view::{GameView, Line, Span, Style};
pub use renderer::TerminalRenderer;
