//! Concrete notification sinks.
//!
//! # Available Sinks
//!
//! | Sink | Output | Purpose |
//! |------|--------|---------|
//! | [`StdoutSink`] | stdout | Console output for the demo binary (`std`) |
//! | [`WriterSink`] | any `io::Write` | Files, buffers, pipes (`std`) |
//! | [`TracingSink`] | `tracing` events | Structured logging |
//! | [`RecordingSink`] | memory | Captures notifications for tests |
//! | [`NullSink`] | nowhere | Discards everything |
//!
//! # Example
//!
//! ```rust
//! use remote_bridge::devices::Radio;
//! use remote_bridge::sinks::RecordingSink;
//! use remote_bridge::traits::{BasicControl, ExtendedControl};
//! use remote_bridge::AdvancedRemoteControl;
//!
//! let mut remote = AdvancedRemoteControl::new(Radio::new(RecordingSink::new()));
//! remote.toggle_power();
//! remote.mute();
//!
//! let sink = remote.into_device().into_sink();
//! assert_eq!(sink.lines(), ["Radio enabled.", "Radio volume set to 0%."]);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::traits::{DeviceEvent, EventSink, Notification};

// ============================================================================
// Console / Writer Sinks
// ============================================================================

/// Writes one line per notification to stdout.
///
/// A closed or broken stdout (e.g. piping into `head`) does not panic. The
/// failure is handled the same way [`WriterSink`] handles it.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct StdoutSink {
    inner: WriterSink<std::io::Stdout>,
}

#[cfg(feature = "std")]
impl StdoutSink {
    /// Creates a sink bound to the process stdout.
    pub fn new() -> Self {
        Self {
            inner: WriterSink::new(std::io::stdout()),
        }
    }

    /// Number of notifications that could not be written.
    pub fn failed_writes(&self) -> usize {
        self.inner.failed_writes()
    }
}

#[cfg(feature = "std")]
impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl EventSink for StdoutSink {
    fn emit(&mut self, notification: &Notification) {
        self.inner.emit(notification);
    }
}

/// Writes one line per notification to any [`std::io::Write`].
///
/// Write failures never reach the device. They are logged with
/// `tracing::warn!` and counted in [`failed_writes`](Self::failed_writes).
///
/// ```rust
/// use remote_bridge::sinks::WriterSink;
/// use remote_bridge::traits::{EventSink, Notification, DeviceEvent, DeviceKind};
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.emit(&Notification::new(DeviceKind::Television, DeviceEvent::Enabled));
///
/// let out = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(out, "TV enabled.\n");
/// ```
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct WriterSink<W: std::io::Write> {
    writer: W,
    failed_writes: usize,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed_writes: 0,
        }
    }

    /// Number of notifications that could not be written.
    pub fn failed_writes(&self) -> usize {
        self.failed_writes
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> EventSink for WriterSink<W> {
    fn emit(&mut self, notification: &Notification) {
        if let Err(e) = writeln!(self.writer, "{}", notification) {
            self.failed_writes += 1;
            tracing::warn!(error = %e, line = %notification, "failed to write notification");
        }
    }
}

// ============================================================================
// Tracing Sink
// ============================================================================

/// Forwards notifications to `tracing` as `INFO` events.
///
/// The event carries the device name, the event kind and (for setters) the
/// stored value as structured fields, plus the rendered line as the message.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, notification: &Notification) {
        let device = notification.device.name();
        match notification.event {
            DeviceEvent::Enabled | DeviceEvent::Disabled => {
                tracing::info!(device, "{}", notification);
            }
            DeviceEvent::VolumeSet(volume) => {
                tracing::info!(device, volume, "{}", notification);
            }
            DeviceEvent::ChannelSet(channel) => {
                tracing::info!(device, channel, "{}", notification);
            }
        }
    }
}

// ============================================================================
// Test Sinks
// ============================================================================

/// Captures every notification in memory.
///
/// Use [`notifications`](Self::notifications) to inspect structured events or
/// [`lines`](Self::lines) to compare against the rendered output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingSink {
    notifications: Vec<Notification>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// All notifications rendered as output lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.notifications.iter().map(ToString::to_string).collect()
    }

    /// The most recent notification, if any.
    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Number of notifications received.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Returns true if nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Forget everything received so far.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, notification: &Notification) {
        self.notifications.push(*notification);
    }
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _notification: &Notification) {}
}
