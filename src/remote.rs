//! Remote controls bound to a single device.
//!
//! This module provides [`RemoteControl`] and [`AdvancedRemoteControl`], the
//! two concrete controls on the abstraction side of the bridge.
//!
//! # Overview
//!
//! A remote:
//! - Is bound to exactly one device when it is constructed
//! - Keeps no state of its own; every operation reads the device first
//! - Works with any [`Device`], including `&mut D` and
//!   `SharedDevice<D>` (with the `std` feature)
//!
//! # Example
//!
//! ```rust
//! use remote_bridge::{
//!     AdvancedRemoteControl,
//!     devices::Television,
//!     sinks::RecordingSink,
//!     traits::{BasicControl, Device, ExtendedControl},
//! };
//!
//! let mut tv = Television::new(RecordingSink::new());
//!
//! // Borrow the device so it outlives the remote
//! {
//!     let mut remote = AdvancedRemoteControl::new(&mut tv);
//!     remote.toggle_power();
//!     remote.volume_up();
//!     remote.mute();
//! }
//!
//! assert!(tv.is_enabled());
//! assert_eq!(tv.volume(), 0);
//! assert_eq!(tv.sink().len(), 3);
//! ```

use crate::traits::{BasicControl, Device, ExtendedControl};

/// Remote control with the basic operations.
///
/// # Type Parameter
///
/// - `D`: The bound device ([`Device`] trait)
///
/// # Thread Safety
///
/// The remote itself is not synchronized. To drive one device from several
/// remotes at once, bind each remote to a clone of a `SharedDevice` handle
/// (requires the `std` feature).
#[derive(Debug)]
pub struct RemoteControl<D: Device> {
    device: D,
}

impl<D: Device> RemoteControl<D> {
    /// Create a remote bound to `device`.
    pub fn new(device: D) -> Self {
        tracing::debug!(device = %device.kind(), "remote bound");
        Self { device }
    }

    /// Release the bound device.
    pub fn into_device(self) -> D {
        self.device
    }
}

impl<D: Device> BasicControl for RemoteControl<D> {
    type Device = D;

    fn device(&self) -> &D {
        &self.device
    }

    fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }
}

/// Remote control with the basic operations plus mute.
///
/// # Example
///
/// ```rust
/// use remote_bridge::{AdvancedRemoteControl, devices::Radio, sinks::NullSink};
/// use remote_bridge::traits::{BasicControl, Device, ExtendedControl};
///
/// let mut remote = AdvancedRemoteControl::new(Radio::new(NullSink));
/// remote.device_mut().set_volume(37);
/// remote.mute();
/// assert_eq!(remote.device().volume(), 0);
/// ```
#[derive(Debug)]
pub struct AdvancedRemoteControl<D: Device> {
    base: RemoteControl<D>,
}

impl<D: Device> AdvancedRemoteControl<D> {
    /// Create an advanced remote bound to `device`.
    pub fn new(device: D) -> Self {
        Self {
            base: RemoteControl::new(device),
        }
    }

    /// Release the bound device.
    pub fn into_device(self) -> D {
        self.base.into_device()
    }
}

impl<D: Device> From<RemoteControl<D>> for AdvancedRemoteControl<D> {
    fn from(base: RemoteControl<D>) -> Self {
        Self { base }
    }
}

impl<D: Device> BasicControl for AdvancedRemoteControl<D> {
    type Device = D;

    fn device(&self) -> &D {
        self.base.device()
    }

    fn device_mut(&mut self) -> &mut D {
        self.base.device_mut()
    }
}

impl<D: Device> ExtendedControl for AdvancedRemoteControl<D> {}
