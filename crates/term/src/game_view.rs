//! GameView: maps a game snapshot into styled terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::GameSnapshot;

/// Text style for a span: foreground color plus bold flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bold: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bold: false,
        }
    }
}

/// A run of characters sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}

/// One terminal row of spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A lightweight view for the 2048 board.
///
/// Renders the board as a bordered grid of 4-wide right-justified cells with
/// per-value colors, followed by score lines and a key-help footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {}

impl GameView {
    pub fn new() -> Self {
        Self {}
    }

    /// Render a snapshot into terminal lines, top board row first.
    pub fn render(&self, snap: &GameSnapshot) -> Vec<Line> {
        let size = snap.size;
        let mut lines = Vec::with_capacity(size + 5);

        let border_style = Style {
            fg: Color::DarkGrey,
            bold: false,
        };
        let rule: String = {
            let mut rule = String::new();
            for _ in 0..size {
                rule.push('+');
                rule.push_str("----");
            }
            rule.push('+');
            rule
        };

        lines.push(Line {
            spans: vec![Span::new(rule.clone(), border_style)],
        });
        for row in (0..size).rev() {
            let mut spans = Vec::with_capacity(2 * size + 1);
            for col in 0..size {
                spans.push(Span::new("|", border_style));
                let value = snap.value(col, row);
                if value == 0 {
                    spans.push(Span::plain("    "));
                } else {
                    spans.push(Span::new(
                        format!("{:>4}", value),
                        Style {
                            fg: tile_color(value),
                            bold: value >= 128,
                        },
                    ));
                }
            }
            spans.push(Span::new("|", border_style));
            lines.push(Line { spans });
        }
        lines.push(Line {
            spans: vec![Span::new(rule, border_style)],
        });

        lines.push(Line {
            spans: vec![Span::plain(format!(
                "Score: {}  Max: {}",
                snap.score, snap.max_score
            ))],
        });
        if snap.game_over {
            lines.push(Line {
                spans: vec![Span::new(
                    "GAME OVER - press r to restart",
                    Style {
                        fg: Color::Red,
                        bold: true,
                    },
                )],
            });
        } else {
            lines.push(Line {
                spans: vec![Span::new(
                    "arrows/hjkl/wasd: tilt  r: restart  q: quit",
                    Style {
                        fg: Color::DarkGrey,
                        bold: false,
                    },
                )],
            });
        }

        lines
    }
}

/// Foreground color for a tile value, brightening toward 2048.
fn tile_color(value: u32) -> Color {
    match value {
        2 => Color::Grey,
        4 => Color::White,
        8 => Color::Cyan,
        16 => Color::Blue,
        32 => Color::Green,
        64 => Color::Yellow,
        128 => Color::DarkYellow,
        256 => Color::Magenta,
        512 => Color::DarkMagenta,
        1024 => Color::DarkRed,
        _ => Color::Red,
    }
}
