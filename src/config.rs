//! Serial transport configuration.

use std::time::Duration;

/// Default baud rate of the display.
pub const DEFAULT_BAUD_RATE: u32 = 38_400;

/// Settings used by [`VfdDisplay::open`](crate::VfdDisplay::open).
///
/// The line is always 8 data bits, 1 stop bit, no parity and no flow
/// control; only the baud rate and write timeout can be changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    /// Port name, e.g. `/dev/ttyUSB0` or `COM3`.
    pub path: String,
    /// Line speed.
    pub baud_rate: u32,
    /// How long a blocking write may take before it fails.
    pub timeout: Duration,
}

impl SerialConfig {
    /// Create a configuration for `path` with the default line settings.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: Duration::from_secs(1),
        }
    }

    /// Use a baud rate other than 38400.
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Set the write timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
