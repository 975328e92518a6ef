//! crates/cli/src/session.rs
//! Deterministic end-device session replayed through the message display.

use std::io::Write;

use lmhandler::{
    AppData, BeaconInfo, BeaconState, CommissioningParams, DeviceClass, EventInfoStatus,
    HandlerStatus, JoinParams, MacSnapshot, MacStatus, McpsType, MlmeType, MsgDisplay, MsgType,
    NvmContextState, Region, RxParams, RxSlot, TxParams,
};
use logging::{Clock, ManualClock};

use crate::config::SessionSettings;

/// Size reported for the stored and restored MAC contexts.
const NVM_CONTEXT_SIZE: u16 = 384;

/// Application port of every uplink.
const APP_PORT: u8 = 2;

/// Datarate used for joins and uplinks.
const DATARATE: i8 = 5;

/// Delay reported when the final request is held back by the duty cycle.
const DUTY_CYCLE_DELAY_MS: u32 = 4500;

/// Scripted device session.
///
/// Every event advances the shared [`ManualClock`] by the configured step, so
/// identical settings always produce identical output.
#[derive(Debug)]
pub struct Session {
    settings: SessionSettings,
    commissioning: CommissioningParams,
    mac: MacSnapshot,
}

impl Session {
    /// Builds the session for `settings`.
    #[must_use]
    pub fn new(settings: SessionSettings) -> Self {
        let (channels, mask) = channel_plan(settings.region);
        let mac = MacSnapshot::new(settings.region)
            .with_channels(channels)
            .with_channels_mask(mask);
        let commissioning = CommissioningParams {
            is_otaa_activation: settings.otaa,
            dev_eui: [0x70, 0xB3, 0xD5, 0x7E, 0xD0, 0x00, 0x4C, 0x21],
            join_eui: [0x70, 0xB3, 0xD5, 0x7E, 0xF0, 0x00, 0x00, 0x01],
            se_pin: [0x00, 0x00, 0x00, 0x00],
            net_id: 0x0000_0013,
            dev_addr: 0x2601_1B7C,
        };
        Self {
            settings,
            commissioning,
            mac,
        }
    }

    /// Replays the session through `display`, stepping `clock` before every
    /// event.
    pub fn replay<W, C>(&self, display: &MsgDisplay<'_, W, C>, clock: &ManualClock)
    where
        W: Write,
        C: Clock,
    {
        let step = || clock.advance(self.settings.step_ms);

        display.nvm_data_change(NvmContextState::Restore, NVM_CONTEXT_SIZE);
        step();
        display.network_parameters_update(&self.commissioning);

        if self.commissioning.is_otaa_activation {
            step();
            display.mlme_request_update(MacStatus::Ok, MlmeType::Join, 0);
        }
        step();
        display.join_request_update(&JoinParams {
            commissioning: &self.commissioning,
            datarate: DATARATE,
            status: HandlerStatus::Success,
        });

        for index in 0..self.settings.uplinks {
            step();
            self.uplink(display, index);
        }

        step();
        display.mlme_request_update(MacStatus::Ok, MlmeType::DeviceTime, 0);
        step();
        display.beacon_update(&BeaconState::Acquiring);
        step();
        display.beacon_update(&BeaconState::Received(beacon(self.settings.region)));
        step();
        display.class_update(DeviceClass::B);
        step();
        display.beacon_update(&BeaconState::NotReceived);
        step();
        display.beacon_update(&BeaconState::Lost);
        step();
        display.class_update(DeviceClass::A);
        step();
        display.mcps_request_update(
            MacStatus::DutycycleRestricted,
            McpsType::Unconfirmed,
            DUTY_CYCLE_DELAY_MS,
        );
        step();
        display.nvm_data_change(NvmContextState::Store, NVM_CONTEXT_SIZE);
    }

    /// Renders one uplink; every second one is confirmed and answered.
    fn uplink<W, C>(&self, display: &MsgDisplay<'_, W, C>, index: u32)
    where
        W: Write,
        C: Clock,
    {
        let confirmed = index % 2 == 1;
        let payload = uplink_payload(index);
        let counter = index + 1;
        let channel_count = u32::try_from(self.mac.channels.len()).unwrap_or(u32::MAX).max(1);
        let channel = u8::try_from(index % channel_count).unwrap_or(0);

        let (request, msg_type) = if confirmed {
            (McpsType::Confirmed, MsgType::Confirmed)
        } else {
            (McpsType::Unconfirmed, MsgType::Unconfirmed)
        };
        display.mcps_request_update(MacStatus::Ok, request, 0);
        display.tx_update(
            &TxParams {
                is_mcps_confirm: true,
                status: EventInfoStatus::Ok,
                msg_type,
                ack_received: confirmed,
                datarate: DATARATE,
                uplink_counter: counter,
                tx_power: 0,
                channel,
                app_data: AppData {
                    port: APP_PORT,
                    buffer: &payload,
                },
            },
            &self.mac,
        );

        if confirmed {
            let [.., sequence] = counter.to_be_bytes();
            let downlink = [0x01, sequence];
            display.rx_update(
                &AppData {
                    port: APP_PORT,
                    buffer: &downlink,
                },
                &RxParams {
                    is_mcps_indication: true,
                    status: EventInfoStatus::Ok,
                    datarate: DATARATE,
                    rssi: -47,
                    snr: 9,
                    downlink_counter: counter.div_ceil(2),
                    rx_slot: RxSlot::Rx1,
                },
            );
        }
    }
}

/// Payload of uplink `index`: a sequence byte followed by a fixed reading.
fn uplink_payload(index: u32) -> [u8; 4] {
    let [.., sequence] = index.to_be_bytes();
    [sequence, 0x01, 0x5E, 0x2A]
}

/// Default channels and first mask word of each regional plan.
fn channel_plan(region: Region) -> (&'static [u32], u16) {
    match region {
        Region::As923 => (&[923_200_000, 923_400_000], 0x0003),
        Region::Au915 => (&[915_200_000, 915_400_000, 915_600_000, 915_800_000], 0x00FF),
        Region::Cn470 => (&[470_300_000, 470_500_000, 470_700_000, 470_900_000], 0x00FF),
        Region::Cn779 => (&[779_500_000, 779_700_000, 779_900_000], 0x0007),
        Region::Eu433 => (&[433_175_000, 433_375_000, 433_575_000], 0x0007),
        Region::Eu868 => (&[868_100_000, 868_300_000, 868_500_000], 0x0007),
        Region::Kr920 => (&[922_100_000, 922_300_000, 922_500_000], 0x0007),
        Region::In865 => (&[865_062_500, 865_402_500, 865_985_000], 0x0007),
        Region::Us915 => (&[902_300_000, 902_500_000, 902_700_000, 902_900_000], 0x00FF),
        Region::Ru864 => (&[868_900_000, 869_100_000], 0x0003),
    }
}

/// Beacon heard on the plan's first channel.
fn beacon(region: Region) -> BeaconInfo {
    let (channels, _) = channel_plan(region);
    BeaconInfo {
        time_seconds: 1_381_505_418,
        frequency: channels.first().copied().unwrap_or(0),
        datarate: 3,
        rssi: -88,
        snr: 7,
        gw_info_desc: 0,
        gw_info: [0x00, 0x80, 0x00, 0x00, 0x00, 0x01],
    }
}
