//! Serial protocol driver for character VFD modules.
//!
//! This crate turns display operations (clear, write text, move the cursor,
//! brightness, blink, cursor style, custom glyphs, reset) into the byte
//! sequences the module firmware understands, and keeps track of the
//! configuration the device is assumed to be in.
//!
//! The device is write-only: it never reports its state, so the driver
//! mirrors it from what it has sent. The module is also slow, so every
//! operation pauses briefly before returning and bulk writes are paced every
//! 24 bytes.
//!
//! # Example
//!
//! ```no_run
//! use vfd_driver::{Brightness, CursorMode, DisplayController, SerialConfig, VfdDisplay};
//!
//! fn main() -> Result<(), vfd_driver::DisplayError> {
//!     let mut display = VfdDisplay::open(&SerialConfig::new("/dev/ttyUSB0"))?;
//!
//!     display.initialize()?;
//!     display.set_brightness(Brightness::Percent100)?;
//!     display.set_cursor_mode(CursorMode::Off)?;
//!
//!     display.set_cursor_position(0, 0)?;
//!     display.write_str("Hello, VFD!")?;
//!
//!     // Load a glyph for code 0x80 and show it
//!     display.define_custom_characters(0x80, 0x80, &[0x7F, 0x41, 0x41, 0x41, 0x7F])?;
//!     display.write(&[0x80])?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Use [`MockSink`] to test code without hardware:
//!
//! ```
//! use vfd_driver::{DisplayController, MockSink, VfdDisplay};
//!
//! let sink = MockSink::new();
//! let mut display = VfdDisplay::new(sink.clone());
//! display.set_cursor_position(3, 1).unwrap();
//! assert_eq!(sink.bytes(), vec![0x1F, 0x24, 3, 0x00, 1, 0x00]);
//! ```
//!
//! # Threads
//!
//! All operations take `&mut self` and block the calling thread. Share a
//! display between threads by wrapping it in a `Mutex`.

#![warn(missing_docs)]

mod command;
#[cfg(feature = "serial")]
mod config;
mod controller;
mod error;
mod mock;
mod modes;
mod state;

// Re-export public API
pub use command::{Command, GLYPH_LEN, MAX_X, MAX_Y};
#[cfg(feature = "serial")]
pub use config::{DEFAULT_BAUD_RATE, SerialConfig};
pub use controller::{DisplayController, StdDelay, VfdDisplay};
pub use embedded_hal::delay::DelayNs;
pub use error::DisplayError;
pub use mock::{MockDelay, MockSink};
pub use modes::{BlinkMode, Brightness, CursorMode, CustomCharacterMode, DisplayMode};
pub use state::DisplayState;
