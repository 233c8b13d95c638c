//! ANSI escape sequences for terminal color decoration.
//!
//! Two escape families are used: bold foreground ("colorize", codes 31-37)
//! and background ("highlight", codes 41-47), plus the universal reset.

use serde::{Deserialize, Serialize};

/// Resets all terminal text attributes.
pub const RESET: &str = "\x1b[0m";

/// Bold text attribute without a color change.
pub const BOLD: &str = "\x1b[1m";

/// The eight-color ANSI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// ANSI color 0
    Black,
    /// ANSI color 1
    Red,
    /// ANSI color 2
    Green,
    /// ANSI color 3
    Yellow,
    /// ANSI color 4
    Blue,
    /// ANSI color 5
    Magenta,
    /// ANSI color 6
    Cyan,
    /// ANSI color 7
    White,
}

impl Color {
    /// Returns the palette index of this color (0-7).
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::White => 7,
        }
    }
}

/// Returns the bold foreground escape sequence for a color.
#[must_use]
pub fn fg(color: Color) -> String {
    format!("\x1b[1;{}m", 30 + color.code())
}

/// Returns the background (highlight) escape sequence for a color.
#[must_use]
pub fn bg(color: Color) -> String {
    format!("\x1b[1;{}m", 40 + color.code())
}
