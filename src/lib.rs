//! # remote-bridge
//!
//! Remote controls and home devices wired together through the Bridge
//! pattern: the control side and the device side are separate trait
//! hierarchies that meet only through composition.
//!
//! ## Features
//!
//! - **Device abstraction**: one trait for power, volume and channel primitives
//! - **Two devices**: [`devices::Television`] and [`devices::Radio`], plus a
//!   runtime-selected [`devices::AnyDevice`]
//! - **Two remotes**: [`RemoteControl`] (basic) and [`AdvancedRemoteControl`]
//!   (adds mute) built on capability traits instead of downcasts
//! - **Injectable output**: devices report changes to an [`EventSink`], so
//!   tests capture notifications instead of reading stdout
//! - **Shared devices**: [`SharedDevice`] lets several remotes drive one device
//!   across threads (`std` feature)
//!
//! ## Architecture
//!
//! - `traits` - Device, control and sink abstractions
//! - `devices` - Concrete devices
//! - `remote` - Concrete remote controls
//! - `sinks` - Notification destinations (stdout, tracing, memory)
//! - `shared` - Thread-safe device handle
//! - `config` - Driver configuration
//! - `demo` - The fixed demonstration scenario
//!
//! ## Example
//!
//! ```rust
//! use remote_bridge::{
//!     AdvancedRemoteControl, BasicControl, Device, ExtendedControl,
//!     devices::Television,
//!     sinks::RecordingSink,
//! };
//!
//! let mut remote = AdvancedRemoteControl::new(Television::new(RecordingSink::new()));
//! remote.toggle_power();
//! remote.volume_up();
//! remote.volume_up();
//! remote.volume_down();
//!
//! assert_eq!(remote.device().volume(), 10);
//!
//! remote.mute();
//! let tv = remote.into_device();
//! assert_eq!(tv.sink().last().unwrap().to_string(), "TV volume set to 0%.");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Driver configuration.
pub mod config;
/// The fixed demonstration scenario.
pub mod demo;
/// Concrete devices.
pub mod devices;
/// Concrete remote controls.
pub mod remote;
/// Notification sinks.
pub mod sinks;
/// Core traits for devices, controls and notification output.
pub mod traits;

/// Thread-safe device sharing.
#[cfg(feature = "std")]
pub mod shared;

// Re-exports for convenience
pub use remote::{AdvancedRemoteControl, RemoteControl};
pub use traits::{
    // Controls
    BasicControl,
    // Devices
    Device,
    DeviceEvent,
    DeviceKind,
    DeviceState,
    // Output
    EventSink,
    ExtendedControl,
    Notification,
    VolumePolicy,
    CHANNEL_STEP,
    VOLUME_STEP,
};

#[cfg(feature = "std")]
pub use shared::SharedDevice;

pub use config::{Config, DeviceConfig, OutputConfig, OutputTarget};
pub use demo::DemoReport;
