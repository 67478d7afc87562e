//! Device abstraction: the "implementation" side of the bridge.
//!
//! Every concrete device (television, radio, ...) exposes the same small set
//! of primitive operations. Remote controls are written against this trait
//! only, so new devices can be added without touching any remote.
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Device`] | Primitive power/volume/channel operations |
//! | [`DeviceKind`] | Which concrete device produced a notification |
//! | [`DeviceState`] | Snapshot of a device for inspection and tests |
//! | [`VolumePolicy`] | Whether stored volume is clamped to a percentage |
//!
//! # Example
//!
//! ```rust
//! use remote_bridge::devices::Television;
//! use remote_bridge::sinks::RecordingSink;
//! use remote_bridge::traits::Device;
//!
//! let mut tv = Television::new(RecordingSink::new());
//! tv.enable();
//! tv.set_volume(30);
//!
//! assert!(tv.is_enabled());
//! assert_eq!(tv.volume(), 30);
//! assert_eq!(tv.sink().lines(), ["TV enabled.", "TV volume set to 30%."]);
//! ```

/// Concrete device variants known to this crate.
///
/// The display name is part of every notification line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceKind {
    /// A television set.
    Television,
    /// A radio receiver.
    Radio,
}

impl DeviceKind {
    /// Returns the name used in notification lines.
    ///
    /// ```
    /// use remote_bridge::DeviceKind;
    ///
    /// assert_eq!(DeviceKind::Television.name(), "TV");
    /// assert_eq!(DeviceKind::Radio.name(), "Radio");
    /// ```
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            DeviceKind::Television => "TV",
            DeviceKind::Radio => "Radio",
        }
    }

    /// Parse a device kind from text.
    ///
    /// Accepts `"tv"`, `"television"` and `"radio"`, trimmed and
    /// case-insensitive.
    ///
    /// ```
    /// use remote_bridge::DeviceKind;
    ///
    /// assert_eq!(DeviceKind::from_text(" TV "), Some(DeviceKind::Television));
    /// assert_eq!(DeviceKind::from_text("radio"), Some(DeviceKind::Radio));
    /// assert_eq!(DeviceKind::from_text("toaster"), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tv") || s.eq_ignore_ascii_case("television") {
            Some(DeviceKind::Television)
        } else if s.eq_ignore_ascii_case("radio") {
            Some(DeviceKind::Radio)
        } else {
            None
        }
    }
}

impl core::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a device stores the volume it is given.
///
/// # Default
///
/// Defaults to [`Unclamped`](Self::Unclamped): any integer is stored as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VolumePolicy {
    /// Store the requested value unchanged, even outside 0..=100.
    #[default]
    Unclamped,
    /// Clamp the stored value to 0..=100.
    Percent,
}

impl VolumePolicy {
    /// Lowest volume stored under [`Percent`](Self::Percent).
    pub const MIN_PERCENT: i32 = 0;
    /// Highest volume stored under [`Percent`](Self::Percent).
    pub const MAX_PERCENT: i32 = 100;

    /// Apply the policy to a requested volume.
    ///
    /// ```
    /// use remote_bridge::VolumePolicy;
    ///
    /// assert_eq!(VolumePolicy::Unclamped.apply(-20), -20);
    /// assert_eq!(VolumePolicy::Percent.apply(-20), 0);
    /// assert_eq!(VolumePolicy::Percent.apply(140), 100);
    /// ```
    #[inline]
    pub const fn apply(&self, requested: i32) -> i32 {
        match self {
            VolumePolicy::Unclamped => requested,
            VolumePolicy::Percent => {
                if requested < Self::MIN_PERCENT {
                    Self::MIN_PERCENT
                } else if requested > Self::MAX_PERCENT {
                    Self::MAX_PERCENT
                } else {
                    requested
                }
            }
        }
    }

    /// Parse a policy from text.
    ///
    /// Accepts `"unclamped"`, `"percent"` and `"clamped"`, trimmed and
    /// case-insensitive.
    pub fn from_text(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unclamped") {
            Some(VolumePolicy::Unclamped)
        } else if s.eq_ignore_ascii_case("percent") || s.eq_ignore_ascii_case("clamped") {
            Some(VolumePolicy::Percent)
        } else {
            None
        }
    }
}

/// Device trait - the primitive operations every device supports.
///
/// Remote controls only ever talk to a device through this trait. None of
/// the operations can fail. Setters emit exactly one notification each.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use remote_bridge::traits::{Device, DeviceKind};
///
/// struct Projector { on: bool, volume: i32, channel: i32 }
///
/// impl Device for Projector {
///     fn kind(&self) -> DeviceKind { DeviceKind::Television }
///     fn is_enabled(&self) -> bool { self.on }
///     fn enable(&mut self) { self.on = true; }
///     fn disable(&mut self) { self.on = false; }
///     fn volume(&self) -> i32 { self.volume }
///     fn set_volume(&mut self, percent: i32) { self.volume = percent; }
///     fn channel(&self) -> i32 { self.channel }
///     fn set_channel(&mut self, channel: i32) { self.channel = channel; }
/// }
/// ```
pub trait Device {
    /// Which device variant this is.
    fn kind(&self) -> DeviceKind;

    /// Returns true if the device is powered on.
    fn is_enabled(&self) -> bool;

    /// Power the device on.
    fn enable(&mut self);

    /// Power the device off.
    fn disable(&mut self);

    /// Current volume.
    fn volume(&self) -> i32;

    /// Set the volume.
    ///
    /// The default policy stores any integer unchanged.
    fn set_volume(&mut self, percent: i32);

    /// Current channel.
    fn channel(&self) -> i32;

    /// Set the channel. No bounds checking is performed.
    fn set_channel(&mut self, channel: i32);

    /// Snapshot of the current state.
    fn state(&self) -> DeviceState {
        DeviceState {
            kind: self.kind(),
            powered: self.is_enabled(),
            volume: self.volume(),
            channel: self.channel(),
        }
    }
}

impl<D: Device + ?Sized> Device for &mut D {
    fn kind(&self) -> DeviceKind {
        (**self).kind()
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn enable(&mut self) {
        (**self).enable()
    }

    fn disable(&mut self) {
        (**self).disable()
    }

    fn volume(&self) -> i32 {
        (**self).volume()
    }

    fn set_volume(&mut self, percent: i32) {
        (**self).set_volume(percent)
    }

    fn channel(&self) -> i32 {
        (**self).channel()
    }

    fn set_channel(&mut self, channel: i32) {
        (**self).set_channel(channel)
    }
}

/// Full state snapshot of a device.
///
/// # Example
///
/// ```rust
/// use remote_bridge::devices::Radio;
/// use remote_bridge::sinks::NullSink;
/// use remote_bridge::traits::{Device, DeviceKind};
///
/// let radio = Radio::new(NullSink);
/// let state = radio.state();
/// assert_eq!(state.kind, DeviceKind::Radio);
/// assert!(!state.powered);
/// assert_eq!((state.volume, state.channel), (0, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceState {
    /// Device variant.
    pub kind: DeviceKind,
    /// Whether the device is powered on.
    pub powered: bool,
    /// Current volume.
    pub volume: i32,
    /// Current channel.
    pub channel: i32,
}

impl DeviceState {
    /// Initial state of a freshly constructed device.
    pub const fn initial(kind: DeviceKind) -> Self {
        Self {
            kind,
            powered: false,
            volume: 0,
            channel: 0,
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    // =========================================================================
    // DeviceKind Tests
    // =========================================================================

    #[test]
    fn device_kind_names() {
        assert_eq!(DeviceKind::Television.name(), "TV");
        assert_eq!(DeviceKind::Radio.name(), "Radio");
    }

    #[test]
    fn device_kind_display_matches_name() {
        assert_eq!(format!("{}", DeviceKind::Television), "TV");
        assert_eq!(format!("{}", DeviceKind::Radio), "Radio");
    }

    #[test]
    fn device_kind_from_text() {
        assert_eq!(DeviceKind::from_text("tv"), Some(DeviceKind::Television));
        assert_eq!(
            DeviceKind::from_text("Television"),
            Some(DeviceKind::Television)
        );
        assert_eq!(DeviceKind::from_text("\tRADIO\n"), Some(DeviceKind::Radio));
        assert_eq!(DeviceKind::from_text(""), None);
        assert_eq!(DeviceKind::from_text("radios"), None);
    }

    // =========================================================================
    // VolumePolicy Tests
    // =========================================================================

    #[test]
    fn volume_policy_default_is_unclamped() {
        assert_eq!(VolumePolicy::default(), VolumePolicy::Unclamped);
    }

    #[test]
    fn unclamped_passes_everything_through() {
        for v in [i32::MIN, -10, 0, 55, 100, 250, i32::MAX] {
            assert_eq!(VolumePolicy::Unclamped.apply(v), v);
        }
    }

    #[test]
    fn percent_clamps_to_range() {
        assert_eq!(VolumePolicy::Percent.apply(i32::MIN), 0);
        assert_eq!(VolumePolicy::Percent.apply(-1), 0);
        assert_eq!(VolumePolicy::Percent.apply(0), 0);
        assert_eq!(VolumePolicy::Percent.apply(42), 42);
        assert_eq!(VolumePolicy::Percent.apply(100), 100);
        assert_eq!(VolumePolicy::Percent.apply(101), 100);
        assert_eq!(VolumePolicy::Percent.apply(i32::MAX), 100);
    }

    #[test]
    fn volume_policy_from_text() {
        assert_eq!(
            VolumePolicy::from_text("unclamped"),
            Some(VolumePolicy::Unclamped)
        );
        assert_eq!(
            VolumePolicy::from_text(" Percent "),
            Some(VolumePolicy::Percent)
        );
        assert_eq!(
            VolumePolicy::from_text("CLAMPED"),
            Some(VolumePolicy::Percent)
        );
        assert_eq!(VolumePolicy::from_text("loud"), None);
    }

    // =========================================================================
    // Device Default Methods Tests
    // =========================================================================

    struct TestDevice {
        on: bool,
        volume: i32,
        channel: i32,
    }

    impl Device for TestDevice {
        fn kind(&self) -> DeviceKind {
            DeviceKind::Radio
        }

        fn is_enabled(&self) -> bool {
            self.on
        }

        fn enable(&mut self) {
            self.on = true;
        }

        fn disable(&mut self) {
            self.on = false;
        }

        fn volume(&self) -> i32 {
            self.volume
        }

        fn set_volume(&mut self, percent: i32) {
            self.volume = percent;
        }

        fn channel(&self) -> i32 {
            self.channel
        }

        fn set_channel(&mut self, channel: i32) {
            self.channel = channel;
        }
    }

    #[test]
    fn state_default_impl_reads_queries() {
        let device = TestDevice {
            on: true,
            volume: 35,
            channel: 7,
        };

        let state = device.state();
        assert_eq!(state.kind, DeviceKind::Radio);
        assert!(state.powered);
        assert_eq!(state.volume, 35);
        assert_eq!(state.channel, 7);
    }

    fn drive<D: Device>(mut device: D) -> DeviceKind {
        device.enable();
        device.set_volume(12);
        device.set_channel(-3);
        device.kind()
    }

    #[test]
    fn mut_ref_forwards_to_device() {
        let mut device = TestDevice {
            on: false,
            volume: 0,
            channel: 0,
        };

        assert_eq!(drive(&mut device), DeviceKind::Radio);
        assert!(device.on);
        assert_eq!(device.volume, 12);
        assert_eq!(device.channel, -3);
    }

    #[test]
    fn initial_state_is_off_and_zeroed() {
        let state = DeviceState::initial(DeviceKind::Television);
        assert!(!state.powered);
        assert_eq!(state.volume, 0);
        assert_eq!(state.channel, 0);
    }
}
