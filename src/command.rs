//! Wire command table.

use crate::modes::{BlinkMode, Brightness, CursorMode, CustomCharacterMode, DisplayMode};

const ESC: u8 = 0x1B;
const US: u8 = 0x1F;
const FF: u8 = 0x0C;

/// Number of bytes in one glyph definition.
pub const GLYPH_LEN: usize = 5;

/// Highest addressable column.
pub const MAX_X: u8 = 23;

/// Highest addressable row.
pub const MAX_Y: u8 = 5;

/// A single command understood by the display firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `ESC @`: clear the screen and restore software defaults.
    Initialize,
    /// `ESC X FF`: reload jumper settings and clear buffers.
    Reset,
    /// `FF`: clear the screen.
    Clear,
    /// `ESC E` / `ESC S`, keyed to the mode being left.
    LeaveDisplayMode(DisplayMode),
    /// `ESC % n`.
    CustomCharacterMode(CustomCharacterMode),
    /// Single cursor-style control byte.
    CursorMode(CursorMode),
    /// `US X n`.
    Brightness(Brightness),
    /// `ESC n`.
    BlinkMode(BlinkMode),
    /// `US $ x 0 y 0`. Coordinates are not checked here.
    CursorPosition {
        /// Column.
        x: u8,
        /// Row.
        y: u8,
    },
    /// `ESC & 1 start end 5`, the header that precedes glyph data.
    DefineCharactersHeader {
        /// First character code.
        start: u8,
        /// Last character code.
        end: u8,
    },
}

impl Command {
    /// Encode the command as it goes on the wire.
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            Command::Initialize => vec![ESC, 0x40],
            Command::Reset => vec![ESC, 0x58, 0xFF],
            Command::Clear => vec![FF],
            Command::LeaveDisplayMode(mode) => vec![ESC, mode.exit_code()],
            Command::CustomCharacterMode(mode) => vec![ESC, 0x25, mode.code()],
            Command::CursorMode(mode) => vec![mode.code()],
            Command::Brightness(level) => vec![US, 0x58, level.code()],
            Command::BlinkMode(mode) => vec![ESC, mode.code()],
            Command::CursorPosition { x, y } => vec![US, 0x24, x, 0x00, y, 0x00],
            Command::DefineCharactersHeader { start, end } => {
                vec![ESC, 0x26, 0x01, start, end, GLYPH_LEN as u8]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_commands() {
        assert_eq!(Command::Initialize.encode(), [0x1B, 0x40]);
        assert_eq!(Command::Reset.encode(), [0x1B, 0x58, 0xFF]);
        assert_eq!(Command::Clear.encode(), [0x0C]);
    }

    #[test]
    fn test_parameterised_commands() {
        assert_eq!(
            Command::CustomCharacterMode(CustomCharacterMode::Enabled).encode(),
            [0x1B, 0x25, 0x01]
        );
        assert_eq!(Command::CursorMode(CursorMode::Block).encode(), [0x15]);
        assert_eq!(
            Command::Brightness(Brightness::Percent75).encode(),
            [0x1F, 0x58, 0x03]
        );
        assert_eq!(Command::BlinkMode(BlinkMode::On).encode(), [0x1B, 0x42]);
        assert_eq!(
            Command::CursorPosition { x: 23, y: 5 }.encode(),
            [0x1F, 0x24, 23, 0x00, 5, 0x00]
        );
        assert_eq!(
            Command::DefineCharactersHeader { start: 0x20, end: 0x21 }.encode(),
            [0x1B, 0x26, 0x01, 0x20, 0x21, 0x05]
        );
    }

    #[test]
    fn test_leave_display_mode() {
        assert_eq!(
            Command::LeaveDisplayMode(DisplayMode::Flickerless).encode(),
            [0x1B, 0x45]
        );
        assert_eq!(
            Command::LeaveDisplayMode(DisplayMode::Quick).encode(),
            [0x1B, 0x53]
        );
    }
}
