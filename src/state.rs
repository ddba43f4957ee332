//! Tracked device state.

use crate::modes::{BlinkMode, Brightness, CursorMode, CustomCharacterMode, DisplayMode};

/// A snapshot of the configuration the display is assumed to have.
///
/// The device never reports its own state, so these values only reflect what
/// the driver last wrote successfully. [`Default`] is the power-on state.
/// Use [`DisplayController::state`](crate::DisplayController::state) to obtain a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    /// Write-timing mode.
    pub display_mode: DisplayMode,
    /// Brightness level.
    pub brightness: Brightness,
    /// Blink state.
    pub blink_mode: BlinkMode,
    /// Cursor style.
    pub cursor_mode: CursorMode,
    /// User-defined glyph mode.
    pub custom_character_mode: CustomCharacterMode,
}
