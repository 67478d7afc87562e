//! Trait definitions for both sides of the bridge and for notification output.
//!
//! # Submodules
//!
//! - `device`: primitive device operations, device kinds and state snapshots
//! - `control`: basic and extended remote control capabilities
//! - `sink`: notifications and the sinks that receive them
//!
//! # The Bridge
//!
//! The key traits are:
//!
//! - [`Device`]: what a device can do (implementation side)
//! - [`BasicControl`] / [`ExtendedControl`]: what a remote offers (abstraction side)
//! - [`EventSink`]: where device notifications go
//!
//! Controls and devices only meet through [`Device`], so either side can
//! gain new variants without the other changing.

pub mod control;
pub mod device;
pub mod sink;

pub use control::*;
pub use device::*;
pub use sink::*;
