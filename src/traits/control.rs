//! Control capabilities: the "abstraction" side of the bridge.
//!
//! Two capability sets are defined:
//!
//! - [`BasicControl`]: power toggle, volume up/down, channel up/down
//! - [`ExtendedControl`]: everything in [`BasicControl`] plus mute
//!
//! Both are built purely from the [`Device`] primitives, so the operation
//! logic lives here as provided methods. An implementor only has to say which
//! device it is bound to.
//!
//! Volume and channel arithmetic wraps at the `i32` boundary, so an up step
//! followed by a down step always returns to the starting value.

use super::Device;

/// Volume change applied by one volume up/down press.
pub const VOLUME_STEP: i32 = 10;

/// Channel change applied by one channel up/down press.
pub const CHANNEL_STEP: i32 = 1;

/// Basic remote control operations.
///
/// A control holds no state of its own; every decision is computed from the
/// bound device's queries.
///
/// # Example
///
/// ```rust
/// use remote_bridge::devices::Television;
/// use remote_bridge::sinks::NullSink;
/// use remote_bridge::traits::{BasicControl, Device};
/// use remote_bridge::RemoteControl;
///
/// let mut remote = RemoteControl::new(Television::new(NullSink));
/// remote.toggle_power();
/// remote.volume_up();
/// remote.channel_down();
///
/// let tv = remote.device();
/// assert!(tv.is_enabled());
/// assert_eq!(tv.volume(), 10);
/// assert_eq!(tv.channel(), -1);
/// ```
pub trait BasicControl {
    /// Device type this control is bound to.
    type Device: Device;

    /// The bound device.
    fn device(&self) -> &Self::Device;

    /// The bound device, mutably.
    fn device_mut(&mut self) -> &mut Self::Device;

    /// Power the device off if it is on, on if it is off.
    fn toggle_power(&mut self) {
        let device = self.device_mut();
        tracing::debug!(device = %device.kind(), "toggle_power");
        if device.is_enabled() {
            device.disable();
        } else {
            device.enable();
        }
    }

    /// Lower the volume by [`VOLUME_STEP`].
    fn volume_down(&mut self) {
        let device = self.device_mut();
        tracing::debug!(device = %device.kind(), "volume_down");
        let volume = device.volume().wrapping_sub(VOLUME_STEP);
        device.set_volume(volume);
    }

    /// Raise the volume by [`VOLUME_STEP`].
    fn volume_up(&mut self) {
        let device = self.device_mut();
        tracing::debug!(device = %device.kind(), "volume_up");
        let volume = device.volume().wrapping_add(VOLUME_STEP);
        device.set_volume(volume);
    }

    /// Go down by [`CHANNEL_STEP`].
    fn channel_down(&mut self) {
        let device = self.device_mut();
        tracing::debug!(device = %device.kind(), "channel_down");
        let channel = device.channel().wrapping_sub(CHANNEL_STEP);
        device.set_channel(channel);
    }

    /// Go up by [`CHANNEL_STEP`].
    fn channel_up(&mut self) {
        let device = self.device_mut();
        tracing::debug!(device = %device.kind(), "channel_up");
        let channel = device.channel().wrapping_add(CHANNEL_STEP);
        device.set_channel(channel);
    }
}

/// Extended remote control operations.
///
/// Adds [`mute`](Self::mute) on top of [`BasicControl`] without requiring
/// anything new from the device.
pub trait ExtendedControl: BasicControl {
    /// Set the volume straight to zero.
    ///
    /// Always issues the set, even when the volume is already zero.
    fn mute(&mut self) {
        let device = self.device_mut();
        tracing::debug!(device = %device.kind(), "mute");
        device.set_volume(0);
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::traits::DeviceKind;

    #[derive(Default)]
    struct TestDevice {
        on: bool,
        volume: i32,
        channel: i32,
        enable_calls: usize,
        disable_calls: usize,
        volume_sets: usize,
    }

    impl Device for TestDevice {
        fn kind(&self) -> DeviceKind {
            DeviceKind::Television
        }

        fn is_enabled(&self) -> bool {
            self.on
        }

        fn enable(&mut self) {
            self.on = true;
            self.enable_calls += 1;
        }

        fn disable(&mut self) {
            self.on = false;
            self.disable_calls += 1;
        }

        fn volume(&self) -> i32 {
            self.volume
        }

        fn set_volume(&mut self, percent: i32) {
            self.volume = percent;
            self.volume_sets += 1;
        }

        fn channel(&self) -> i32 {
            self.channel
        }

        fn set_channel(&mut self, channel: i32) {
            self.channel = channel;
        }
    }

    struct TestRemote(TestDevice);

    impl BasicControl for TestRemote {
        type Device = TestDevice;

        fn device(&self) -> &TestDevice {
            &self.0
        }

        fn device_mut(&mut self) -> &mut TestDevice {
            &mut self.0
        }
    }

    impl ExtendedControl for TestRemote {}

    #[test]
    fn step_constants() {
        assert_eq!(VOLUME_STEP, 10);
        assert_eq!(CHANNEL_STEP, 1);
    }

    #[test]
    fn toggle_power_reads_device_state() {
        let mut remote = TestRemote(TestDevice::default());

        remote.toggle_power();
        assert!(remote.device().on);
        assert_eq!(remote.device().enable_calls, 1);

        remote.toggle_power();
        assert!(!remote.device().on);
        assert_eq!(remote.device().disable_calls, 1);
    }

    #[test]
    fn toggle_power_follows_external_changes() {
        let mut remote = TestRemote(TestDevice::default());

        // Device turned on behind the remote's back
        remote.device_mut().on = true;
        remote.toggle_power();

        assert!(!remote.device().on);
        assert_eq!(remote.device().enable_calls, 0);
        assert_eq!(remote.device().disable_calls, 1);
    }

    #[test]
    fn volume_steps() {
        let mut remote = TestRemote(TestDevice::default());
        remote.volume_up();
        remote.volume_up();
        assert_eq!(remote.device().volume, 20);
        remote.volume_down();
        assert_eq!(remote.device().volume, 10);
    }

    #[test]
    fn channel_steps() {
        let mut remote = TestRemote(TestDevice::default());
        remote.channel_down();
        assert_eq!(remote.device().channel, -1);
        remote.channel_up();
        remote.channel_up();
        assert_eq!(remote.device().channel, 1);
    }

    #[test]
    fn steps_wrap_at_integer_bounds() {
        let mut remote = TestRemote(TestDevice::default());
        remote.device_mut().volume = i32::MAX - 5;
        remote.volume_up();
        remote.volume_down();
        assert_eq!(remote.device().volume, i32::MAX - 5);

        remote.device_mut().channel = i32::MIN;
        remote.channel_down();
        assert_eq!(remote.device().channel, i32::MAX);
        remote.channel_up();
        assert_eq!(remote.device().channel, i32::MIN);
    }

    #[test]
    fn mute_always_sets_volume() {
        let mut remote = TestRemote(TestDevice::default());
        remote.mute();
        assert_eq!(remote.device().volume, 0);
        assert_eq!(remote.device().volume_sets, 1);

        remote.device_mut().volume = 37;
        remote.mute();
        assert_eq!(remote.device().volume, 0);
        assert_eq!(remote.device().volume_sets, 2);
    }
}
