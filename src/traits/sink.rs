//! Notification output abstraction.
//!
//! Devices never print directly. Every state change is described by a
//! [`Notification`] and handed to an [`EventSink`], which decides where it
//! goes (stdout, a `tracing` subscriber, an in-memory buffer for tests).

use core::fmt::{self, Write as _};

use heapless::String as HString;

use super::DeviceKind;

/// Capacity of a rendered notification line.
///
/// The longest line is `"Radio volume set to -2147483648%."` (33 bytes).
pub const MAX_LINE: usize = 48;

/// A rendered notification line.
pub type Line = HString<MAX_LINE>;

/// A single observable state change on a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeviceEvent {
    /// Device was powered on.
    Enabled,
    /// Device was powered off.
    Disabled,
    /// Volume was stored with the given value.
    VolumeSet(i32),
    /// Channel was stored with the given value.
    ChannelSet(i32),
}

/// A device event tagged with the device that produced it.
///
/// `Display` renders the line format shown to users:
///
/// ```
/// use remote_bridge::{DeviceEvent, DeviceKind, Notification};
///
/// let n = Notification::new(DeviceKind::Television, DeviceEvent::VolumeSet(20));
/// assert_eq!(n.to_string(), "TV volume set to 20%.");
///
/// let n = Notification::new(DeviceKind::Radio, DeviceEvent::ChannelSet(-1));
/// assert_eq!(n.to_line().as_str(), "Radio channel set to -1.");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    /// Device that changed.
    pub device: DeviceKind,
    /// What changed.
    pub event: DeviceEvent,
}

impl Notification {
    /// Creates a notification.
    pub const fn new(device: DeviceKind, event: DeviceEvent) -> Self {
        Self { device, event }
    }

    /// Render into a fixed-capacity line without allocating.
    pub fn to_line(&self) -> Line {
        let mut line = Line::new();
        // Every variant fits in MAX_LINE, see the constant.
        let _ = write!(line, "{}", self);
        line
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.device.name();
        match self.event {
            DeviceEvent::Enabled => write!(f, "{} enabled.", name),
            DeviceEvent::Disabled => write!(f, "{} disabled.", name),
            DeviceEvent::VolumeSet(v) => write!(f, "{} volume set to {}%.", name, v),
            DeviceEvent::ChannelSet(c) => write!(f, "{} channel set to {}.", name, c),
        }
    }
}

/// Destination for device notifications.
///
/// Emitting cannot fail from the device's point of view. Sinks that can hit
/// I/O errors deal with them internally.
///
/// # Example Implementation
///
/// ```rust
/// use remote_bridge::traits::{EventSink, Notification};
///
/// #[derive(Default)]
/// struct Counter(usize);
///
/// impl EventSink for Counter {
///     fn emit(&mut self, _notification: &Notification) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait EventSink {
    /// Deliver one notification.
    fn emit(&mut self, notification: &Notification);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, notification: &Notification) {
        (**self).emit(notification)
    }
}
