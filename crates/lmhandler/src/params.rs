//! crates/lmhandler/src/params.rs
//! Read-only event parameters handed to the display layer by the MAC handler.

use crate::status::EventInfoStatus;

/// Direction of a non-volatile context transfer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NvmContextState {
    /// Contexts were written to storage.
    Store,
    /// Contexts were read back from storage.
    Restore,
}

/// Device identity and activation settings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CommissioningParams {
    /// Over-the-air activation when `true`, activation by personalization otherwise.
    pub is_otaa_activation: bool,
    /// IEEE EUI-64 of the device.
    pub dev_eui: [u8; 8],
    /// Join server EUI.
    pub join_eui: [u8; 8],
    /// Secure element PIN.
    pub se_pin: [u8; 4],
    /// Network identifier.
    pub net_id: u32,
    /// Device address on the network.
    pub dev_addr: u32,
}

/// Kind of MCPS (data) request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum McpsType {
    /// Unconfirmed uplink.
    Unconfirmed,
    /// Confirmed uplink.
    Confirmed,
    /// Proprietary frame.
    Proprietary,
    /// Anything the display does not name, including multicast.
    Unknown,
}

impl McpsType {
    /// Returns the label used in request lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unconfirmed => "MCPS_UNCONFIRMED",
            Self::Confirmed => "MCPS_CONFIRMED",
            Self::Proprietary => "MCPS_PROPRIETARY",
            Self::Unknown => "MCPS_ERROR",
        }
    }
}

/// Kind of MLME (management) request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MlmeType {
    /// Network join.
    Join,
    /// Link check.
    LinkCheck,
    /// Device time request.
    DeviceTime,
    /// Continuous wave test transmission.
    TxCw,
    /// Any other management request.
    Other,
}

impl MlmeType {
    /// Returns the label used in request lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Join => "MLME_JOIN",
            Self::LinkCheck => "MLME_LINK_CHECK",
            Self::DeviceTime => "MLME_DEVICE_TIME",
            Self::TxCw => "MLME_TXCW",
            Self::Other => "MLME_UNKNOWN",
        }
    }
}

/// Outcome reported by the MAC handler.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HandlerStatus {
    /// Operation succeeded.
    #[default]
    Success,
    /// Operation failed.
    Error,
}

/// Result of a join attempt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JoinParams<'a> {
    /// Commissioning data used for the attempt.
    pub commissioning: &'a CommissioningParams,
    /// Datarate of the join accept.
    pub datarate: i8,
    /// Handler outcome.
    pub status: HandlerStatus,
}

/// Application payload and port.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AppData<'a> {
    /// Application port.
    pub port: u8,
    /// Payload bytes; empty when no payload was carried.
    pub buffer: &'a [u8],
}

/// Confirmation requirement of an uplink.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MsgType {
    /// No acknowledgement requested.
    #[default]
    Unconfirmed,
    /// Network acknowledgement requested.
    Confirmed,
}

/// Parameters of a transmit confirmation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TxParams<'a> {
    /// `true` for an MCPS confirm, `false` for an MLME confirm.
    pub is_mcps_confirm: bool,
    /// Event status.
    pub status: EventInfoStatus,
    /// Confirmation requirement.
    pub msg_type: MsgType,
    /// Whether the network acknowledged a confirmed uplink.
    pub ack_received: bool,
    /// Uplink datarate.
    pub datarate: i8,
    /// Uplink frame counter.
    pub uplink_counter: u32,
    /// Transmit power index.
    pub tx_power: i8,
    /// Channel index used for the uplink.
    pub channel: u8,
    /// Uplink payload.
    pub app_data: AppData<'a>,
}

/// Receive window a downlink arrived in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RxSlot {
    /// First class A window.
    Rx1,
    /// Second class A window.
    Rx2,
    /// Class C continuous window.
    ClassC,
    /// Class C multicast window.
    ClassCMulticast,
    /// Class B ping slot.
    ClassBPingSlot,
    /// Class B multicast ping slot.
    ClassBMulticastPingSlot,
}

impl RxSlot {
    /// Returns the window name used in downlink lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rx1 => "1",
            Self::Rx2 => "2",
            Self::ClassC => "C",
            Self::ClassCMulticast => "C Multicast",
            Self::ClassBPingSlot => "B Ping-Slot",
            Self::ClassBMulticastPingSlot => "B Multicast Ping-Slot",
        }
    }
}

/// Parameters of a receive indication.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RxParams {
    /// `true` for an MCPS indication, `false` for an MLME indication.
    pub is_mcps_indication: bool,
    /// Event status.
    pub status: EventInfoStatus,
    /// Downlink datarate.
    pub datarate: i8,
    /// Received signal strength in dBm.
    pub rssi: i8,
    /// Signal-to-noise ratio in dB.
    pub snr: i8,
    /// Downlink frame counter.
    pub downlink_counter: u32,
    /// Window the frame arrived in.
    pub rx_slot: RxSlot,
}

/// Contents of a received class B beacon.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BeaconInfo {
    /// GPS time in seconds carried by the beacon.
    pub time_seconds: u32,
    /// Beacon frequency in Hz.
    pub frequency: u32,
    /// Beacon datarate.
    pub datarate: u8,
    /// Received signal strength in dBm.
    pub rssi: i16,
    /// Signal-to-noise ratio in dB.
    pub snr: i8,
    /// Gateway-specific info descriptor.
    pub gw_info_desc: u8,
    /// Gateway-specific info bytes.
    pub gw_info: [u8; 6],
}

/// Class B beacon tracking state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BeaconState {
    /// Searching for the first beacon.
    Acquiring,
    /// Synchronization was lost.
    Lost,
    /// A beacon was received.
    Received(BeaconInfo),
    /// An expected beacon did not arrive.
    NotReceived,
}
