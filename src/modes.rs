//! Device mode definitions and their wire encodings.

// =============================================================================
// Display Mode
// =============================================================================

/// Write-timing mode of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Flickerless write mode. The power-on default.
    #[default]
    Flickerless,
    /// Quick write mode.
    Quick,
}

impl DisplayMode {
    /// The second byte of the `ESC` command sent when this mode is left.
    ///
    /// The firmware receives the code of the *outgoing* mode, so switching to
    /// [`DisplayMode::Quick`] sends `ESC E` and switching back sends `ESC S`.
    pub fn exit_code(self) -> u8 {
        match self {
            DisplayMode::Flickerless => 0x45,
            DisplayMode::Quick => 0x53,
        }
    }
}

// =============================================================================
// Brightness
// =============================================================================

/// The eight discrete brightness levels, in steps of 25%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Brightness {
    /// 25%.
    Percent25,
    /// 50%.
    Percent50,
    /// 75%.
    Percent75,
    /// 100%.
    Percent100,
    /// 125%.
    Percent125,
    /// 150%.
    Percent150,
    /// 175%.
    Percent175,
    /// 200%. The power-on default.
    #[default]
    Percent200,
}

impl Brightness {
    /// All levels, dimmest first.
    pub const ALL: [Brightness; 8] = [
        Brightness::Percent25,
        Brightness::Percent50,
        Brightness::Percent75,
        Brightness::Percent100,
        Brightness::Percent125,
        Brightness::Percent150,
        Brightness::Percent175,
        Brightness::Percent200,
    ];

    /// Level byte sent with `US X`, 0x01 through 0x08.
    pub fn code(self) -> u8 {
        match self {
            Brightness::Percent25 => 0x01,
            Brightness::Percent50 => 0x02,
            Brightness::Percent75 => 0x03,
            Brightness::Percent100 => 0x04,
            Brightness::Percent125 => 0x05,
            Brightness::Percent150 => 0x06,
            Brightness::Percent175 => 0x07,
            Brightness::Percent200 => 0x08,
        }
    }

    /// The brightness as a percentage (25-200).
    pub fn percent(self) -> u16 {
        u16::from(self.code()) * 25
    }

    /// Pick the level for a percentage, if it is one of the eight steps.
    pub fn from_percent(percent: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.percent() == percent)
    }
}

// =============================================================================
// Blink Mode
// =============================================================================

/// Blink state of the display.
///
/// The command bytes for these modes have not been verified against the
/// device firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlinkMode {
    /// No blinking. The power-on default.
    #[default]
    Off,
    /// The whole display blinks.
    On,
}

impl BlinkMode {
    /// Byte following `ESC` in the blink command.
    pub fn code(self) -> u8 {
        match self {
            BlinkMode::Off => 0x4E,
            BlinkMode::On => 0x42,
        }
    }
}

// =============================================================================
// Cursor Mode
// =============================================================================

/// Cursor style. Each style is selected by a single control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorMode {
    /// Underline cursor. The power-on default.
    #[default]
    Underline,
    /// Hidden cursor.
    Off,
    /// Block cursor.
    Block,
    /// Blinking underline cursor.
    UnderlineBlink,
}

impl CursorMode {
    /// The control byte (0x13-0x16) selecting this style.
    pub fn code(self) -> u8 {
        match self {
            CursorMode::Underline => 0x13,
            CursorMode::Off => 0x14,
            CursorMode::Block => 0x15,
            CursorMode::UnderlineBlink => 0x16,
        }
    }
}

// =============================================================================
// Custom Character Mode
// =============================================================================

/// Whether user-defined glyphs replace the built-in font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CustomCharacterMode {
    /// Built-in font only. The power-on default.
    #[default]
    Disabled,
    /// User-defined glyphs are displayed for their codes.
    Enabled,
}

impl CustomCharacterMode {
    /// Byte following `ESC %`.
    pub fn code(self) -> u8 {
        match self {
            CustomCharacterMode::Disabled => 0x00,
            CustomCharacterMode::Enabled => 0x01,
        }
    }
}
