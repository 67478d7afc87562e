//! Thread-safe device handle shared between several remotes.
//!
//! `SharedDevice` wraps a single device in `Arc<Mutex<_>>` and implements
//! [`Device`] itself, so every clone of the handle can be bound to its own
//! remote while they all drive the same device.
//!
//! # Example
//!
//! ```rust
//! use remote_bridge::{AdvancedRemoteControl, RemoteControl, SharedDevice};
//! use remote_bridge::devices::Television;
//! use remote_bridge::sinks::RecordingSink;
//! use remote_bridge::traits::{BasicControl, Device, ExtendedControl};
//!
//! let tv = SharedDevice::new(Television::new(RecordingSink::new()));
//!
//! let mut living_room = RemoteControl::new(tv.clone());
//! let mut couch = AdvancedRemoteControl::new(tv.clone());
//!
//! living_room.toggle_power();
//! living_room.volume_up();
//! couch.mute();
//!
//! let state = tv.state();
//! assert!(state.powered);
//! assert_eq!(state.volume, 0);
//! assert_eq!(tv.with_device(|d| d.sink().len()), 3);
//! ```
//!
//! # Atomicity
//!
//! Each primitive call takes the lock once. A remote operation such as
//! `volume_up` is a read followed by a write, so two remotes stepping the
//! volume concurrently can lose an update.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Device, DeviceKind, DeviceState};

/// Cloneable, lockable handle to one device.
///
/// # Thread Safety
///
/// - Uses `Mutex` rather than `RwLock`: reads are a single field copy, so
///   there is nothing to gain from concurrent readers.
/// - A poisoned lock is recovered rather than propagated. Device state is
///   plain data and stays consistent after a panic in another holder.
#[derive(Debug)]
pub struct SharedDevice<D: Device> {
    device: Arc<Mutex<D>>,
}

impl<D: Device> Clone for SharedDevice<D> {
    fn clone(&self) -> Self {
        Self {
            device: Arc::clone(&self.device),
        }
    }
}

impl<D: Device> SharedDevice<D> {
    /// Wrap a device for sharing.
    pub fn new(device: D) -> Self {
        Self {
            device: Arc::new(Mutex::new(device)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, D> {
        self.device.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("device lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Access the device with the lock held.
    ///
    /// The closure pattern keeps the lock scope explicit. Several calls made
    /// on the closure argument run under one lock, which makes a
    /// read-modify-write atomic.
    ///
    /// # Deadlock
    ///
    /// The lock is not reentrant. Inside the closure, work only through the
    /// `&mut D` argument. Calling a [`Device`] method on this handle, or on
    /// any clone of it, tries to take the same lock again and blocks forever.
    ///
    /// ```ignore
    /// // Fine: goes through the locked device
    /// shared.with_device(|tv| tv.set_volume(tv.volume() + 10));
    ///
    /// // Deadlocks: `shared.volume()` re-locks
    /// shared.with_device(|tv| tv.set_volume(shared.volume() + 10));
    /// ```
    pub fn with_device<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut D) -> R,
    {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Number of handles (including this one) pointing at the device.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.device)
    }

    /// Recover the device if this is the last handle.
    ///
    /// Returns the handle back when other clones are still alive.
    pub fn try_unwrap(self) -> Result<D, Self> {
        match Arc::try_unwrap(self.device) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(|p| p.into_inner())),
            Err(device) => Err(Self { device }),
        }
    }
}

impl<D: Device> Device for SharedDevice<D> {
    fn kind(&self) -> DeviceKind {
        self.lock().kind()
    }

    fn is_enabled(&self) -> bool {
        self.lock().is_enabled()
    }

    fn enable(&mut self) {
        self.lock().enable()
    }

    fn disable(&mut self) {
        self.lock().disable()
    }

    fn volume(&self) -> i32 {
        self.lock().volume()
    }

    fn set_volume(&mut self, percent: i32) {
        self.lock().set_volume(percent)
    }

    fn channel(&self) -> i32 {
        self.lock().channel()
    }

    fn set_channel(&mut self, channel: i32) {
        self.lock().set_channel(channel)
    }

    /// Snapshot taken under a single lock.
    fn state(&self) -> DeviceState {
        self.lock().state()
    }
}
