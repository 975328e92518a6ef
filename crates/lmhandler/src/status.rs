//! crates/lmhandler/src/status.rs
//! LoRaMAC status codes and their display strings.

use std::fmt;

use crate::error::UnknownStatusCode;

/// Result of a LoRaMAC service request.
///
/// The numeric values follow the `LORAMAC_STATUS_*` ordering so raw codes
/// received from the MAC convert losslessly.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum MacStatus {
    #[doc(alias = "LORAMAC_STATUS_OK")]
    /// Request accepted.
    Ok = 0,
    #[doc(alias = "LORAMAC_STATUS_BUSY")]
    /// MAC is busy with another request.
    Busy = 1,
    #[doc(alias = "LORAMAC_STATUS_SERVICE_UNKNOWN")]
    /// Service not known to the MAC.
    ServiceUnknown = 2,
    #[doc(alias = "LORAMAC_STATUS_PARAMETER_INVALID")]
    /// A request parameter is invalid.
    ParameterInvalid = 3,
    #[doc(alias = "LORAMAC_STATUS_FREQUENCY_INVALID")]
    /// Frequency is invalid.
    FrequencyInvalid = 4,
    #[doc(alias = "LORAMAC_STATUS_DATARATE_INVALID")]
    /// Datarate is invalid.
    DatarateInvalid = 5,
    #[doc(alias = "LORAMAC_STATUS_FREQ_AND_DR_INVALID")]
    /// Frequency and datarate are both invalid.
    FreqAndDrInvalid = 6,
    #[doc(alias = "LORAMAC_STATUS_NO_NETWORK_JOINED")]
    /// Device has not joined a network.
    NoNetworkJoined = 7,
    #[doc(alias = "LORAMAC_STATUS_LENGTH_ERROR")]
    /// Payload length error.
    LengthError = 8,
    #[doc(alias = "LORAMAC_STATUS_REGION_NOT_SUPPORTED")]
    /// Region not compiled into the MAC.
    RegionNotSupported = 9,
    #[doc(alias = "LORAMAC_STATUS_SKIPPED_APP_DATA")]
    /// Application payload was dropped in favour of MAC commands.
    SkippedAppData = 10,
    #[doc(alias = "LORAMAC_STATUS_DUTYCYCLE_RESTRICTED")]
    /// Duty-cycle restriction in effect.
    DutycycleRestricted = 11,
    #[doc(alias = "LORAMAC_STATUS_NO_CHANNEL_FOUND")]
    /// No channel matches the request.
    NoChannelFound = 12,
    #[doc(alias = "LORAMAC_STATUS_NO_FREE_CHANNEL_FOUND")]
    /// Every matching channel is occupied.
    NoFreeChannelFound = 13,
    #[doc(alias = "LORAMAC_STATUS_BUSY_BEACON_RESERVED_TIME")]
    /// Class B beacon reserved time.
    BusyBeaconReservedTime = 14,
    #[doc(alias = "LORAMAC_STATUS_BUSY_PING_SLOT_WINDOW_TIME")]
    /// Class B ping-slot window.
    BusyPingSlotWindowTime = 15,
    #[doc(alias = "LORAMAC_STATUS_BUSY_UPLINK_COLLISION")]
    /// Uplink would collide with a class B window.
    BusyUplinkCollision = 16,
    #[doc(alias = "LORAMAC_STATUS_CRYPTO_ERROR")]
    /// Cryptographic operation failed.
    CryptoError = 17,
    #[doc(alias = "LORAMAC_STATUS_FCNT_HANDLER_ERROR")]
    /// Frame counter handling failed.
    FcntHandlerError = 18,
    #[doc(alias = "LORAMAC_STATUS_MAC_COMMAD_ERROR")]
    /// MAC command processing failed.
    MacCommandError = 19,
    #[doc(alias = "LORAMAC_STATUS_CLASS_B_ERROR")]
    /// Class B failure.
    ClassBError = 20,
    #[doc(alias = "LORAMAC_STATUS_CONFIRM_QUEUE_ERROR")]
    /// Confirm queue failure.
    ConfirmQueueError = 21,
    #[doc(alias = "LORAMAC_STATUS_MC_GROUP_UNDEFINED")]
    /// Multicast group not defined.
    McGroupUndefined = 22,
    #[doc(alias = "LORAMAC_STATUS_ERROR")]
    /// Unspecified failure.
    Error = 23,
}

impl MacStatus {
    /// Every status, ordered by code.
    pub const ALL: [Self; 24] = [
        Self::Ok,
        Self::Busy,
        Self::ServiceUnknown,
        Self::ParameterInvalid,
        Self::FrequencyInvalid,
        Self::DatarateInvalid,
        Self::FreqAndDrInvalid,
        Self::NoNetworkJoined,
        Self::LengthError,
        Self::RegionNotSupported,
        Self::SkippedAppData,
        Self::DutycycleRestricted,
        Self::NoChannelFound,
        Self::NoFreeChannelFound,
        Self::BusyBeaconReservedTime,
        Self::BusyPingSlotWindowTime,
        Self::BusyUplinkCollision,
        Self::CryptoError,
        Self::FcntHandlerError,
        Self::MacCommandError,
        Self::ClassBError,
        Self::ConfirmQueueError,
        Self::McGroupUndefined,
        Self::Error,
    ];

    /// Returns the raw code.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Looks up a raw code.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < Self::ALL.len() {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Returns the human-readable description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Busy => "Busy",
            Self::ServiceUnknown => "Service unknown",
            Self::ParameterInvalid => "Parameter invalid",
            Self::FrequencyInvalid => "Frequency invalid",
            Self::DatarateInvalid => "Datarate invalid",
            Self::FreqAndDrInvalid => "Frequency or datarate invalid",
            Self::NoNetworkJoined => "No network joined",
            Self::LengthError => "Length error",
            Self::RegionNotSupported => "Region not supported",
            Self::SkippedAppData => "Skipped APP data",
            Self::DutycycleRestricted => "Duty-cycle restricted",
            Self::NoChannelFound => "No channel found",
            Self::NoFreeChannelFound => "No free channel found",
            Self::BusyBeaconReservedTime => "Busy beacon reserved time",
            Self::BusyPingSlotWindowTime => "Busy ping-slot window time",
            Self::BusyUplinkCollision => "Busy uplink collision",
            Self::CryptoError => "Crypto error",
            Self::FcntHandlerError => "FCnt handler error",
            Self::MacCommandError => "MAC command error",
            Self::ClassBError => "ClassB error",
            Self::ConfirmQueueError => "Confirm queue error",
            Self::McGroupUndefined => "Multicast group undefined",
            Self::Error => "Unknown error",
        }
    }
}

impl fmt::Display for MacStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for MacStatus {
    type Error = UnknownStatusCode;

    fn try_from(value: u8) -> Result<Self, UnknownStatusCode> {
        Self::from_u8(value).ok_or(UnknownStatusCode::new("MAC status", value))
    }
}

impl From<MacStatus> for u8 {
    fn from(value: MacStatus) -> Self {
        value.as_u8()
    }
}

/// Status carried by MAC confirm and indication events.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum EventInfoStatus {
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_OK")]
    /// Operation completed.
    Ok = 0,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_ERROR")]
    /// Unspecified failure.
    Error = 1,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_TX_TIMEOUT")]
    /// Radio transmit timed out.
    TxTimeout = 2,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_RX1_TIMEOUT")]
    /// Nothing received in RX1.
    Rx1Timeout = 3,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_RX2_TIMEOUT")]
    /// Nothing received in RX2.
    Rx2Timeout = 4,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_RX1_ERROR")]
    /// RX1 reception error.
    Rx1Error = 5,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_RX2_ERROR")]
    /// RX2 reception error.
    Rx2Error = 6,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_JOIN_FAIL")]
    /// Join procedure failed.
    JoinFail = 7,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_DOWNLINK_REPEATED")]
    /// Downlink frame counter repeated.
    DownlinkRepeated = 8,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_TX_DR_PAYLOAD_SIZE_ERROR")]
    /// Payload too large for the datarate.
    TxDrPayloadSizeError = 9,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_ADDRESS_FAIL")]
    /// Frame address does not match.
    AddressFail = 10,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_MIC_FAIL")]
    /// Message integrity check failed.
    MicFail = 11,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_MULTICAST_FAIL")]
    /// Multicast frame rejected.
    MulticastFail = 12,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_BEACON_LOCKED")]
    /// Beacon acquired.
    BeaconLocked = 13,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_BEACON_LOST")]
    /// Beacon lost.
    BeaconLost = 14,
    #[doc(alias = "LORAMAC_EVENT_INFO_STATUS_BEACON_NOT_FOUND")]
    /// Beacon never found.
    BeaconNotFound = 15,
}

impl EventInfoStatus {
    /// Every status, ordered by code.
    pub const ALL: [Self; 16] = [
        Self::Ok,
        Self::Error,
        Self::TxTimeout,
        Self::Rx1Timeout,
        Self::Rx2Timeout,
        Self::Rx1Error,
        Self::Rx2Error,
        Self::JoinFail,
        Self::DownlinkRepeated,
        Self::TxDrPayloadSizeError,
        Self::AddressFail,
        Self::MicFail,
        Self::MulticastFail,
        Self::BeaconLocked,
        Self::BeaconLost,
        Self::BeaconNotFound,
    ];

    /// Returns the raw code.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Looks up a raw code.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < Self::ALL.len() {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Returns the human-readable description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Error => "Error",
            Self::TxTimeout => "Tx timeout",
            Self::Rx1Timeout => "Rx 1 timeout",
            Self::Rx2Timeout => "Rx 2 timeout",
            Self::Rx1Error => "Rx1 error",
            Self::Rx2Error => "Rx2 error",
            Self::JoinFail => "Join failed",
            Self::DownlinkRepeated => "Downlink repeated",
            Self::TxDrPayloadSizeError => "Tx DR payload size error",
            Self::AddressFail => "Address fail",
            Self::MicFail => "MIC fail",
            Self::MulticastFail => "Multicast fail",
            Self::BeaconLocked => "Beacon locked",
            Self::BeaconLost => "Beacon lost",
            Self::BeaconNotFound => "Beacon not found",
        }
    }
}

impl fmt::Display for EventInfoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for EventInfoStatus {
    type Error = UnknownStatusCode;

    fn try_from(value: u8) -> Result<Self, UnknownStatusCode> {
        Self::from_u8(value).ok_or(UnknownStatusCode::new("event info status", value))
    }
}

impl From<EventInfoStatus> for u8 {
    fn from(value: EventInfoStatus) -> Self {
        value.as_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mac_status_codes_match_their_position() {
        for (index, status) in MacStatus::ALL.iter().enumerate() {
            assert_eq!(usize::from(status.as_u8()), index);
            assert_eq!(MacStatus::from_u8(status.as_u8()), Some(*status));
        }
    }

    #[test]
    fn event_status_codes_match_their_position() {
        for (index, status) in EventInfoStatus::ALL.iter().enumerate() {
            assert_eq!(usize::from(status.as_u8()), index);
            assert_eq!(EventInfoStatus::try_from(status.as_u8()), Ok(*status));
        }
    }

    #[test]
    fn mac_status_strings() {
        assert_eq!(MacStatus::Ok.to_string(), "OK");
        assert_eq!(
            MacStatus::FreqAndDrInvalid.as_str(),
            "Frequency or datarate invalid"
        );
        assert_eq!(
            MacStatus::DutycycleRestricted.as_str(),
            "Duty-cycle restricted"
        );
        assert_eq!(MacStatus::McGroupUndefined.as_str(), "Multicast group undefined");
        assert_eq!(MacStatus::Error.as_str(), "Unknown error");
    }

    #[test]
    fn event_status_strings() {
        assert_eq!(EventInfoStatus::Rx1Timeout.as_str(), "Rx 1 timeout");
        assert_eq!(EventInfoStatus::Rx1Error.as_str(), "Rx1 error");
        assert_eq!(
            EventInfoStatus::TxDrPayloadSizeError.to_string(),
            "Tx DR payload size error"
        );
        assert_eq!(EventInfoStatus::BeaconNotFound.as_str(), "Beacon not found");
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        let err = MacStatus::try_from(24).unwrap_err();
        assert_eq!(err.code(), 24);
        assert_eq!(err.table(), "MAC status");
        assert!(EventInfoStatus::try_from(16).is_err());
    }

    #[test]
    fn into_u8() {
        assert_eq!(u8::from(MacStatus::Busy), 1);
        assert_eq!(u8::from(EventInfoStatus::JoinFail), 7);
    }

    proptest! {
        #[test]
        fn every_byte_is_decoded_or_rejected(code in any::<u8>()) {
            match MacStatus::try_from(code) {
                Ok(status) => prop_assert_eq!(status.as_u8(), code),
                Err(err) => {
                    prop_assert!(usize::from(code) >= MacStatus::ALL.len());
                    prop_assert_eq!(err.code(), code);
                }
            }
            match EventInfoStatus::try_from(code) {
                Ok(status) => prop_assert_eq!(status.as_u8(), code),
                Err(_) => prop_assert!(usize::from(code) >= EventInfoStatus::ALL.len()),
            }
        }
    }
}
