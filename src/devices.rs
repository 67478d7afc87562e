//! Concrete devices: the implementations a remote can be bound to.
//!
//! [`Television`] and [`Radio`] each own their power/volume/channel state and
//! an [`EventSink`] that receives one [`Notification`] per state change.
//! [`AnyDevice`] wraps either one when the variant is only known at runtime.
//!
//! # Example
//!
//! ```rust
//! use remote_bridge::devices::{AnyDevice, Radio, Television};
//! use remote_bridge::sinks::RecordingSink;
//! use remote_bridge::traits::{Device, DeviceKind, VolumePolicy};
//!
//! let mut tv = Television::new(RecordingSink::new());
//! tv.set_channel(5);
//! assert_eq!(tv.sink().lines(), ["TV channel set to 5."]);
//!
//! // Opt into percentage clamping
//! let mut radio = Radio::new(RecordingSink::new()).with_volume_policy(VolumePolicy::Percent);
//! radio.set_volume(150);
//! assert_eq!(radio.volume(), 100);
//!
//! // Pick the variant at runtime
//! let any = AnyDevice::new(DeviceKind::Radio, RecordingSink::new());
//! assert_eq!(any.kind(), DeviceKind::Radio);
//! ```

use crate::traits::{Device, DeviceEvent, DeviceKind, EventSink, Notification, VolumePolicy};

// ============================================================================
// Shared device core
// ============================================================================

/// State and notification plumbing common to every concrete device.
#[derive(Debug)]
struct Appliance<S> {
    kind: DeviceKind,
    powered: bool,
    volume: i32,
    channel: i32,
    policy: VolumePolicy,
    sink: S,
}

impl<S: EventSink> Appliance<S> {
    fn new(kind: DeviceKind, sink: S) -> Self {
        Self {
            kind,
            powered: false,
            volume: 0,
            channel: 0,
            policy: VolumePolicy::default(),
            sink,
        }
    }

    fn notify(&mut self, event: DeviceEvent) {
        self.sink.emit(&Notification::new(self.kind, event));
    }

    fn set_powered(&mut self, powered: bool) {
        tracing::trace!(device = %self.kind, from = self.powered, to = powered, "power");
        self.powered = powered;
        self.notify(if powered {
            DeviceEvent::Enabled
        } else {
            DeviceEvent::Disabled
        });
    }

    fn set_volume(&mut self, requested: i32) {
        let stored = self.policy.apply(requested);
        tracing::trace!(device = %self.kind, from = self.volume, requested, stored, "volume");
        self.volume = stored;
        self.notify(DeviceEvent::VolumeSet(stored));
    }

    fn set_channel(&mut self, channel: i32) {
        tracing::trace!(device = %self.kind, from = self.channel, to = channel, "channel");
        self.channel = channel;
        self.notify(DeviceEvent::ChannelSet(channel));
    }
}

// ============================================================================
// Concrete devices
// ============================================================================

/// Defines a public device type over [`Appliance`]. Each invocation yields a
/// distinct type with its own [`DeviceKind`].
macro_rules! appliance_device {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $noun:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<S: EventSink> {
            inner: Appliance<S>,
        }

        impl<S: EventSink> $name<S> {
            #[doc = concat!("Creates a powered-off ", $noun, " at volume 0, channel 0.")]
            pub fn new(sink: S) -> Self {
                Self {
                    inner: Appliance::new($kind, sink),
                }
            }

            /// Sets how requested volumes are stored.
            pub fn with_volume_policy(mut self, policy: VolumePolicy) -> Self {
                self.inner.policy = policy;
                self
            }

            /// The active volume policy.
            pub fn volume_policy(&self) -> VolumePolicy {
                self.inner.policy
            }

            /// The notification sink.
            pub fn sink(&self) -> &S {
                &self.inner.sink
            }

            /// The notification sink, mutably.
            pub fn sink_mut(&mut self) -> &mut S {
                &mut self.inner.sink
            }

            #[doc = concat!("Consumes the ", $noun, " and returns its sink.")]
            pub fn into_sink(self) -> S {
                self.inner.sink
            }
        }

        impl<S: EventSink> Device for $name<S> {
            fn kind(&self) -> DeviceKind {
                $kind
            }

            fn is_enabled(&self) -> bool {
                self.inner.powered
            }

            fn enable(&mut self) {
                self.inner.set_powered(true);
            }

            fn disable(&mut self) {
                self.inner.set_powered(false);
            }

            fn volume(&self) -> i32 {
                self.inner.volume
            }

            fn set_volume(&mut self, percent: i32) {
                self.inner.set_volume(percent);
            }

            fn channel(&self) -> i32 {
                self.inner.channel
            }

            fn set_channel(&mut self, channel: i32) {
                self.inner.set_channel(channel);
            }
        }
    };
}

appliance_device!(
    /// A television. Notifications are labelled `TV`.
    Television,
    DeviceKind::Television,
    "television"
);

appliance_device!(
    /// A radio. Notifications are labelled `Radio`.
    Radio,
    DeviceKind::Radio,
    "radio"
);

// ============================================================================
// Runtime-selected device
// ============================================================================

/// Either device, chosen at runtime from a [`DeviceKind`].
///
/// Dispatch is a plain `match`, no trait objects involved.
#[derive(Debug)]
pub enum AnyDevice<S: EventSink> {
    /// A television.
    Television(Television<S>),
    /// A radio.
    Radio(Radio<S>),
}

impl<S: EventSink> AnyDevice<S> {
    /// Creates a fresh device of the given kind.
    pub fn new(kind: DeviceKind, sink: S) -> Self {
        match kind {
            DeviceKind::Television => AnyDevice::Television(Television::new(sink)),
            DeviceKind::Radio => AnyDevice::Radio(Radio::new(sink)),
        }
    }

    /// Sets how requested volumes are stored.
    pub fn with_volume_policy(self, policy: VolumePolicy) -> Self {
        match self {
            AnyDevice::Television(d) => AnyDevice::Television(d.with_volume_policy(policy)),
            AnyDevice::Radio(d) => AnyDevice::Radio(d.with_volume_policy(policy)),
        }
    }

    /// The notification sink.
    pub fn sink(&self) -> &S {
        match self {
            AnyDevice::Television(d) => d.sink(),
            AnyDevice::Radio(d) => d.sink(),
        }
    }

    /// Consumes the device and returns its sink.
    pub fn into_sink(self) -> S {
        match self {
            AnyDevice::Television(d) => d.into_sink(),
            AnyDevice::Radio(d) => d.into_sink(),
        }
    }
}

impl<S: EventSink> From<Television<S>> for AnyDevice<S> {
    fn from(tv: Television<S>) -> Self {
        AnyDevice::Television(tv)
    }
}

impl<S: EventSink> From<Radio<S>> for AnyDevice<S> {
    fn from(radio: Radio<S>) -> Self {
        AnyDevice::Radio(radio)
    }
}

impl<S: EventSink> Device for AnyDevice<S> {
    fn kind(&self) -> DeviceKind {
        match self {
            AnyDevice::Television(d) => d.kind(),
            AnyDevice::Radio(d) => d.kind(),
        }
    }

    fn is_enabled(&self) -> bool {
        match self {
            AnyDevice::Television(d) => d.is_enabled(),
            AnyDevice::Radio(d) => d.is_enabled(),
        }
    }

    fn enable(&mut self) {
        match self {
            AnyDevice::Television(d) => d.enable(),
            AnyDevice::Radio(d) => d.enable(),
        }
    }

    fn disable(&mut self) {
        match self {
            AnyDevice::Television(d) => d.disable(),
            AnyDevice::Radio(d) => d.disable(),
        }
    }

    fn volume(&self) -> i32 {
        match self {
            AnyDevice::Television(d) => d.volume(),
            AnyDevice::Radio(d) => d.volume(),
        }
    }

    fn set_volume(&mut self, percent: i32) {
        match self {
            AnyDevice::Television(d) => d.set_volume(percent),
            AnyDevice::Radio(d) => d.set_volume(percent),
        }
    }

    fn channel(&self) -> i32 {
        match self {
            AnyDevice::Television(d) => d.channel(),
            AnyDevice::Radio(d) => d.channel(),
        }
    }

    fn set_channel(&mut self, channel: i32) {
        match self {
            AnyDevice::Television(d) => d.set_channel(channel),
            AnyDevice::Radio(d) => d.set_channel(channel),
        }
    }
}
