//! Mock sink and delay for testing.

use embedded_hal::delay::DelayNs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct SinkLog {
    bytes: Vec<u8>,
    writes: usize,
    flushes: usize,
    fail_after: Option<usize>,
}

/// A byte sink that records everything written to it.
///
/// Clones share the same log, so a test can keep one handle while the
/// display owns another. This allows testing code without a serial port.
///
/// # Example
///
/// ```
/// use vfd_driver::{DisplayController, MockSink, VfdDisplay};
///
/// let sink = MockSink::new();
/// let mut display = VfdDisplay::new(sink.clone());
/// display.clear().unwrap();
/// assert_eq!(sink.bytes(), vec![0x0C]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSink {
    log: Arc<Mutex<SinkLog>>,
}

impl MockSink {
    /// Create a sink that accepts every write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that accepts `limit` bytes and then fails every write
    /// and flush with [`io::ErrorKind::BrokenPipe`].
    pub fn failing_after(limit: usize) -> Self {
        let sink = Self::new();
        sink.log.lock().unwrap().fail_after = Some(limit);
        sink
    }

    /// All bytes accepted so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.log.lock().unwrap().bytes.clone()
    }

    /// Take the accepted bytes, leaving the log empty.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut self.log.lock().unwrap().bytes)
    }

    /// Number of successful `write` calls.
    pub fn write_count(&self) -> usize {
        self.log.lock().unwrap().writes
    }

    /// Number of `flush` calls, failed or not.
    pub fn flush_count(&self) -> usize {
        self.log.lock().unwrap().flushes
    }
}

fn broken_pipe() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "mock sink disconnected")
}

impl Write for MockSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut log = self.log.lock().unwrap();
        let room = match log.fail_after {
            Some(limit) => limit.saturating_sub(log.bytes.len()),
            None => buf.len(),
        };
        if room == 0 && !buf.is_empty() {
            return Err(broken_pipe());
        }
        let accepted = room.min(buf.len());
        log.bytes.extend_from_slice(&buf[..accepted]);
        log.writes += 1;
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut log = self.log.lock().unwrap();
        log.flushes += 1;
        match log.fail_after {
            Some(limit) if log.bytes.len() >= limit => Err(broken_pipe()),
            _ => Ok(()),
        }
    }
}

/// A delay provider that records each pause instead of sleeping.
///
/// When built with [`MockDelay::observing`], each pause also records how many
/// bytes the sink had accepted at that moment.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    sink: Option<MockSink>,
    pauses: Arc<Mutex<Vec<(u32, usize)>>>,
}

impl MockDelay {
    /// Create a delay that only counts pauses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a delay that records the byte count of `sink` at every pause.
    pub fn observing(sink: &MockSink) -> Self {
        Self {
            sink: Some(sink.clone()),
            pauses: Arc::default(),
        }
    }

    /// Number of pauses so far.
    pub fn count(&self) -> usize {
        self.pauses.lock().unwrap().len()
    }

    /// Length of each pause in nanoseconds.
    pub fn durations_ns(&self) -> Vec<u32> {
        self.pauses.lock().unwrap().iter().map(|&(ns, _)| ns).collect()
    }

    /// Bytes accepted by the observed sink at each pause.
    pub fn byte_marks(&self) -> Vec<usize> {
        self.pauses.lock().unwrap().iter().map(|&(_, n)| n).collect()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mark = self.sink.as_ref().map_or(0, |s| s.bytes().len());
        self.pauses.lock().unwrap().push((ns, mark));
    }
}
