// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Color utilities.

use crate::Level;

/// A console color.
///
/// [`Color::Default`] means "leave the text uncolored".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Every color, [`Color::Default`] first.
    pub const ALL: [Color; 17] = [
        Color::Default,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// The equivalent [`colored::Color`], or `None` for [`Color::Default`].
    #[cfg(feature = "colored")]
    pub fn to_colored(self) -> Option<colored::Color> {
        use colored::Color as C;

        let color = match self {
            Color::Default => return None,
            Color::Black => C::Black,
            Color::Red => C::Red,
            Color::Green => C::Green,
            Color::Yellow => C::Yellow,
            Color::Blue => C::Blue,
            Color::Magenta => C::Magenta,
            Color::Cyan => C::Cyan,
            Color::White => C::White,
            Color::BrightBlack => C::BrightBlack,
            Color::BrightRed => C::BrightRed,
            Color::BrightGreen => C::BrightGreen,
            Color::BrightYellow => C::BrightYellow,
            Color::BrightBlue => C::BrightBlue,
            Color::BrightMagenta => C::BrightMagenta,
            Color::BrightCyan => C::BrightCyan,
            Color::BrightWhite => C::BrightWhite,
        };
        Some(color)
    }
}

/// Colors for different log levels.
#[derive(Debug, Clone)]
pub struct LevelColor {
    /// Color for error level logs.
    pub error: Color,
    /// Color for warning level logs.
    pub warn: Color,
    /// Color for info level logs.
    pub info: Color,
    /// Color for debug level logs.
    pub debug: Color,
    /// Color for trace level logs.
    pub trace: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            error: Color::BrightRed,
            warn: Color::BrightYellow,
            info: Color::BrightGreen,
            debug: Color::BrightBlue,
            trace: Color::BrightBlack,
        }
    }
}

impl LevelColor {
    /// The color of `level`.
    pub fn color_of(&self, level: Level) -> Color {
        match level {
            Level::Error => self.error,
            Level::Warn => self.warn,
            Level::Info => self.info,
            Level::Debug => self.debug,
            Level::Trace => self.trace,
        }
    }
}
