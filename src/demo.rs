//! The fixed demonstration scenario.
//!
//! Builds a television and a radio, binds an [`AdvancedRemoteControl`] to
//! each in turn and presses a fixed sequence of buttons. Both device types
//! and both remote types vary independently; the script never needs to know
//! which concrete device it is driving.
//!
//! # Example
//!
//! ```rust
//! use remote_bridge::{config::Config, demo, sinks::RecordingSink};
//!
//! let mut sink = RecordingSink::new();
//! let report = demo::run(&Config::default(), &mut sink);
//!
//! assert_eq!(sink.len(), 13);
//! assert_eq!(report.television.volume, 10);
//! assert_eq!(report.radio.channel, 0);
//! ```

use crate::config::Config;
use crate::devices::{Radio, Television};
use crate::remote::AdvancedRemoteControl;
use crate::traits::{BasicControl, Device, DeviceState, EventSink, ExtendedControl};

/// Final device states after the scenario has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemoReport {
    /// The television after its button sequence.
    pub television: DeviceState,
    /// The radio after its button sequence.
    pub radio: DeviceState,
}

/// Run the scenario, sending every notification to `sink`.
pub fn run<S: EventSink>(config: &Config, sink: &mut S) -> DemoReport {
    let policy = config.device.volume_policy;
    tracing::info!(?policy, "starting demo");

    let television = {
        let tv = Television::new(&mut *sink).with_volume_policy(policy);
        let mut remote = AdvancedRemoteControl::new(tv);
        remote.toggle_power();

        remote.volume_up();
        remote.volume_up();
        remote.volume_down();

        remote.channel_up();
        remote.channel_up();
        remote.channel_down();

        remote.device().state()
    };

    let radio = {
        let radio = Radio::new(&mut *sink).with_volume_policy(policy);
        let mut remote = AdvancedRemoteControl::new(radio);
        remote.toggle_power();

        remote.volume_up();
        remote.volume_down();

        remote.channel_up();
        remote.channel_down();

        remote.mute();

        remote.device().state()
    };

    tracing::info!(?television, ?radio, "demo finished");
    DemoReport { television, radio }
}

/// Run the scenario with the sink selected by `config.output.target`.
#[cfg(feature = "std")]
pub fn run_configured(config: &Config) -> DemoReport {
    use crate::config::OutputTarget;
    use crate::sinks::{NullSink, StdoutSink, TracingSink};

    match config.output.target {
        OutputTarget::Stdout => {
            let mut sink = StdoutSink::new();
            let report = run(config, &mut sink);
            if sink.failed_writes() > 0 {
                tracing::warn!(failed = sink.failed_writes(), "stdout closed during demo");
            }
            report
        }
        OutputTarget::Tracing => run(config, &mut TracingSink),
        OutputTarget::Silent => run(config, &mut NullSink),
    }
}
