//! Integration tests for remote controls driving devices

use remote_bridge::{
    devices::{AnyDevice, Radio, Television},
    sinks::RecordingSink,
    AdvancedRemoteControl, BasicControl, Device, DeviceEvent, DeviceKind, DeviceState,
    ExtendedControl, Notification, RemoteControl,
};

#[test]
fn television_scenario() {
    let mut remote = AdvancedRemoteControl::new(Television::new(RecordingSink::new()));

    remote.toggle_power();
    assert!(remote.device().is_enabled());
    assert_eq!(remote.device().sink().lines(), ["TV enabled."]);

    remote.volume_up();
    remote.volume_up();
    remote.volume_down();
    assert_eq!(remote.device().volume(), 10);

    remote.channel_up();
    remote.channel_up();
    remote.channel_down();
    assert_eq!(remote.device().channel(), 1);
}

#[test]
fn radio_scenario() {
    let mut remote = AdvancedRemoteControl::new(Radio::new(RecordingSink::new()));

    remote.toggle_power();
    assert!(remote.device().is_enabled());

    remote.volume_up();
    remote.volume_down();
    assert_eq!(remote.device().volume(), 0);

    remote.channel_up();
    remote.channel_down();
    assert_eq!(remote.device().channel(), 0);

    let before = remote.device().sink().len();
    remote.mute();
    assert_eq!(remote.device().volume(), 0);

    // Mute still executes and reports, even with nothing to change
    let sink = remote.device().sink();
    assert_eq!(sink.len(), before + 1);
    assert_eq!(
        sink.last(),
        Some(&Notification::new(DeviceKind::Radio, DeviceEvent::VolumeSet(0)))
    );
}

#[test]
fn same_remote_type_drives_either_device() {
    fn press_all<C: ExtendedControl>(remote: &mut C) {
        remote.toggle_power();
        remote.volume_up();
        remote.channel_up();
        remote.mute();
    }

    let mut tv = AdvancedRemoteControl::new(Television::new(RecordingSink::new()));
    let mut radio = AdvancedRemoteControl::new(Radio::new(RecordingSink::new()));
    press_all(&mut tv);
    press_all(&mut radio);

    assert_eq!(
        tv.into_device().into_sink().lines(),
        [
            "TV enabled.",
            "TV volume set to 10%.",
            "TV channel set to 1.",
            "TV volume set to 0%.",
        ]
    );
    assert_eq!(
        radio.into_device().into_sink().lines(),
        [
            "Radio enabled.",
            "Radio volume set to 10%.",
            "Radio channel set to 1.",
            "Radio volume set to 0%.",
        ]
    );
}

#[test]
fn basic_and_advanced_remotes_agree_on_shared_operations() {
    fn press_basic<C: BasicControl>(remote: &mut C) {
        remote.toggle_power();
        remote.volume_up();
        remote.volume_up();
        remote.channel_down();
        remote.toggle_power();
    }

    let mut basic = RemoteControl::new(Television::new(RecordingSink::new()));
    let mut advanced = AdvancedRemoteControl::new(Television::new(RecordingSink::new()));
    press_basic(&mut basic);
    press_basic(&mut advanced);

    assert_eq!(basic.device().state(), advanced.device().state());
    assert_eq!(
        basic.into_device().into_sink(),
        advanced.into_device().into_sink()
    );
}

#[test]
fn rebinding_means_a_new_remote() {
    let mut tv = Television::new(RecordingSink::new());
    let mut radio = Radio::new(RecordingSink::new());

    let mut remote = AdvancedRemoteControl::new(&mut tv);
    remote.toggle_power();

    let mut remote = AdvancedRemoteControl::new(&mut radio);
    remote.volume_up();
    drop(remote);

    assert!(tv.is_enabled());
    assert_eq!(tv.volume(), 0);
    assert!(!radio.is_enabled());
    assert_eq!(radio.volume(), 10);
}

#[test]
fn remote_over_runtime_selected_device() {
    for kind in [DeviceKind::Television, DeviceKind::Radio] {
        let mut remote = AdvancedRemoteControl::new(AnyDevice::new(kind, RecordingSink::new()));
        remote.toggle_power();
        remote.channel_up();

        assert_eq!(
            remote.device().state(),
            DeviceState {
                kind,
                powered: true,
                volume: 0,
                channel: 1,
            }
        );
    }
}
