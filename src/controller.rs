//! VFD display controller implementation.

use crate::command::{Command, GLYPH_LEN, MAX_X, MAX_Y};
use crate::error::DisplayError;
use crate::modes::{BlinkMode, Brightness, CursorMode, CustomCharacterMode, DisplayMode};
use crate::state::DisplayState;

use embedded_hal::delay::DelayNs;
use log::{debug, info, trace, warn};
use std::io::Write;
use std::time::Duration;

/// Bytes the device can absorb before it needs a pause.
const WRITE_CHUNK: usize = 24;

/// Default pause after each command.
const SETTLE_INTERVAL: Duration = Duration::from_millis(1);

// =============================================================================
// Display Controller Trait
// =============================================================================

/// Trait for display controller implementations.
///
/// Getters return the tracked state without any I/O. Every other operation
/// writes to the device and blocks until the settle pause has elapsed.
pub trait DisplayController {
    /// Get a snapshot of the tracked device state.
    fn state(&self) -> DisplayState;

    /// Clear the screen and restore the device's software defaults (`ESC @`).
    fn initialize(&mut self) -> Result<(), DisplayError>;

    /// Reload jumper settings and clear the device buffers (`ESC X FF`).
    fn reset(&mut self) -> Result<(), DisplayError>;

    /// Clear the screen.
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Send raw bytes, pausing every 24 bytes.
    fn write(&mut self, data: &[u8]) -> Result<(), DisplayError>;

    /// Send text as raw bytes.
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        self.write(text.as_bytes())
    }

    /// Move the cursor to column `x` (0-23) and row `y` (0-5).
    fn set_cursor_position(&mut self, x: u8, y: u8) -> Result<(), DisplayError>;

    /// Load one 5-byte glyph for the character codes `start..=end`.
    fn define_custom_characters(
        &mut self,
        start: u8,
        end: u8,
        data: &[u8],
    ) -> Result<(), DisplayError>;

    /// Current write-timing mode.
    fn display_mode(&self) -> DisplayMode {
        self.state().display_mode
    }

    /// Switch the write-timing mode.
    fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), DisplayError>;

    /// Current brightness.
    fn brightness(&self) -> Brightness {
        self.state().brightness
    }

    /// Set the brightness.
    fn set_brightness(&mut self, level: Brightness) -> Result<(), DisplayError>;

    /// Current blink state.
    fn blink_mode(&self) -> BlinkMode {
        self.state().blink_mode
    }

    /// Set the blink state.
    fn set_blink_mode(&mut self, mode: BlinkMode) -> Result<(), DisplayError>;

    /// Current cursor style.
    fn cursor_mode(&self) -> CursorMode {
        self.state().cursor_mode
    }

    /// Set the cursor style.
    fn set_cursor_mode(&mut self, mode: CursorMode) -> Result<(), DisplayError>;

    /// Current custom character mode.
    fn custom_character_mode(&self) -> CustomCharacterMode {
        self.state().custom_character_mode
    }

    /// Enable or disable user-defined glyphs.
    fn set_custom_character_mode(
        &mut self,
        mode: CustomCharacterMode,
    ) -> Result<(), DisplayError>;

    /// Release the connection. Calling this more than once has no effect.
    fn close(&mut self);
}

// =============================================================================
// Delay
// =============================================================================

/// Blocking delay backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

// =============================================================================
// VfdDisplay
// =============================================================================

/// A VFD module driven over a byte sink.
///
/// The driver owns the sink exclusively. It is released by [`close`](DisplayController::close),
/// by [`into_inner`](VfdDisplay::into_inner) or when the display is dropped.
///
/// # Example
///
/// ```
/// use vfd_driver::{Brightness, DisplayController, MockSink, VfdDisplay};
///
/// let sink = MockSink::new();
/// let mut display = VfdDisplay::new(sink.clone());
/// display.set_brightness(Brightness::Percent50)?;
/// display.set_cursor_position(0, 1)?;
/// display.write_str("Hello")?;
/// assert_eq!(display.brightness(), Brightness::Percent50);
/// # Ok::<(), vfd_driver::DisplayError>(())
/// ```
///
/// # State tracking
///
/// The device cannot be queried, so the driver mirrors its configuration
/// from what it has written. A field changes only after its command was
/// written in full; after a failed write the device state is unknown and
/// [`initialize`](DisplayController::initialize) is the way to get back in sync.
pub struct VfdDisplay<S: Write, D: DelayNs = StdDelay> {
    sink: Option<S>,
    delay: D,
    settle_us: u32,
    state: DisplayState,
}

impl<S: Write> VfdDisplay<S, StdDelay> {
    /// Bind to an already-open sink.
    ///
    /// Tracked state starts at the power-on defaults; nothing is sent.
    pub fn new(sink: S) -> Self {
        Self::with_delay(sink, StdDelay)
    }
}

impl<S: Write, D: DelayNs> VfdDisplay<S, D> {
    /// Bind to an already-open sink, pausing through `delay`.
    pub fn with_delay(sink: S, delay: D) -> Self {
        Self {
            sink: Some(sink),
            delay,
            settle_us: duration_to_us(SETTLE_INTERVAL),
            state: DisplayState::default(),
        }
    }

    /// Change the pause taken after each command (1 ms by default).
    pub fn with_settle_interval(mut self, interval: Duration) -> Self {
        self.settle_us = duration_to_us(interval);
        self
    }

    /// Whether the connection has been released.
    pub fn is_closed(&self) -> bool {
        self.sink.is_none()
    }

    /// Release the sink without flushing it.
    ///
    /// Returns `None` if the display was already closed.
    pub fn into_inner(mut self) -> Option<S> {
        self.sink.take()
    }

    fn sink(&mut self) -> Result<&mut S, DisplayError> {
        self.sink.as_mut().ok_or(DisplayError::Closed)
    }

    fn send(&mut self, command: Command) -> Result<(), DisplayError> {
        let bytes = command.encode();
        debug!("sending {:?}: {:02X?}", command, bytes);
        self.sink()?.write_all(&bytes)?;
        Ok(())
    }

    fn settle(&mut self) {
        self.delay.delay_us(self.settle_us);
    }

    fn resync_defaults(&mut self) {
        self.state = DisplayState::default();
        debug!("tracked state reset to power-on defaults");
    }
}

#[cfg(feature = "serial")]
impl VfdDisplay<Box<dyn serialport::SerialPort>, StdDelay> {
    /// Open the serial port described by `config` and bind to it.
    ///
    /// # Errors
    ///
    /// - [`DisplayError::Serial`] if the port cannot be opened
    pub fn open(config: &crate::SerialConfig) -> Result<Self, DisplayError> {
        use serialport::{DataBits, FlowControl, Parity, StopBits};

        let port = serialport::new(&config.path, config.baud_rate)
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::One)
            .parity(Parity::None)
            .flow_control(FlowControl::None)
            .timeout(config.timeout)
            .open()?;

        info!("opened {} at {} baud", config.path, config.baud_rate);
        Ok(Self::new(port))
    }
}

impl<S: Write, D: DelayNs> DisplayController for VfdDisplay<S, D> {
    fn state(&self) -> DisplayState {
        self.state
    }

    fn initialize(&mut self) -> Result<(), DisplayError> {
        self.send(Command::Initialize)?;
        self.resync_defaults();
        self.settle();
        Ok(())
    }

    fn reset(&mut self) -> Result<(), DisplayError> {
        self.send(Command::Reset)?;
        self.resync_defaults();
        self.settle();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.send(Command::Clear)?;
        self.settle();
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        let sink = self.sink.as_mut().ok_or(DisplayError::Closed)?;
        debug!("writing {} bytes", data.len());

        for (i, byte) in data.iter().enumerate() {
            sink.write_all(std::slice::from_ref(byte))?;
            if i % WRITE_CHUNK == 0 {
                trace!("pausing after byte {}", i);
                self.delay.delay_us(self.settle_us);
            }
        }
        Ok(())
    }

    fn set_cursor_position(&mut self, x: u8, y: u8) -> Result<(), DisplayError> {
        if x > MAX_X || y > MAX_Y {
            return Err(DisplayError::InvalidCursorPosition { x, y });
        }
        self.send(Command::CursorPosition { x, y })?;
        self.settle();
        Ok(())
    }

    fn define_custom_characters(
        &mut self,
        start: u8,
        end: u8,
        data: &[u8],
    ) -> Result<(), DisplayError> {
        if data.len() != GLYPH_LEN {
            return Err(DisplayError::InvalidGlyphData { len: data.len() });
        }

        // Header and glyph form one frame; no pause in between.
        self.send(Command::DefineCharactersHeader { start, end })?;
        self.sink()?.write_all(data)?;
        self.settle();
        Ok(())
    }

    fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), DisplayError> {
        let leaving = self.state.display_mode;
        self.send(Command::LeaveDisplayMode(leaving))?;
        self.state.display_mode = mode;
        debug!("display mode {:?} -> {:?}", leaving, mode);
        self.settle();
        Ok(())
    }

    fn set_brightness(&mut self, level: Brightness) -> Result<(), DisplayError> {
        self.send(Command::Brightness(level))?;
        self.state.brightness = level;
        debug!("brightness set to {}%", level.percent());
        self.settle();
        Ok(())
    }

    fn set_blink_mode(&mut self, mode: BlinkMode) -> Result<(), DisplayError> {
        self.send(Command::BlinkMode(mode))?;
        self.state.blink_mode = mode;
        debug!("blink mode set to {:?}", mode);
        self.settle();
        Ok(())
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) -> Result<(), DisplayError> {
        self.send(Command::CursorMode(mode))?;
        self.state.cursor_mode = mode;
        debug!("cursor mode set to {:?}", mode);
        self.settle();
        Ok(())
    }

    fn set_custom_character_mode(
        &mut self,
        mode: CustomCharacterMode,
    ) -> Result<(), DisplayError> {
        self.send(Command::CustomCharacterMode(mode))?;
        self.state.custom_character_mode = mode;
        debug!("custom character mode set to {:?}", mode);
        self.settle();
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            if let Err(e) = sink.flush() {
                warn!("failed to flush display connection on close: {}", e);
            }
            info!("display connection closed");
        }
    }
}

impl<S: Write, D: DelayNs> Drop for VfdDisplay<S, D> {
    fn drop(&mut self) {
        self.close();
    }
}

fn duration_to_us(interval: Duration) -> u32 {
    u32::try_from(interval.as_micros()).unwrap_or(u32::MAX)
}
