//! Error types for the VFD driver.

/// Errors that can occur when driving the display.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// Cursor coordinates fell outside the addressable grid.
    #[error("Invalid cursor position ({x}, {y}) (expected x 0-23, y 0-5)")]
    InvalidCursorPosition {
        /// The requested column.
        x: u8,
        /// The requested row.
        y: u8,
    },

    /// A glyph definition was not exactly five bytes long.
    #[error("Invalid glyph data length {len} (expected 5)")]
    InvalidGlyphData {
        /// The length that was provided.
        len: usize,
    },

    /// The sink refused or failed a write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The display was used after it was closed.
    #[error("Display connection already closed")]
    Closed,

    /// Opening the serial port failed.
    #[cfg(feature = "serial")]
    #[error("Failed to open serial port: {0}")]
    Serial(#[from] serialport::Error),
}
