//! crates/lmhandler/src/display.rs
//! Console rendering of MAC handler events.

use std::fmt;
use std::io::Write;

use logging::{Clock, Level, Logger, error_log, info_log, warn_log};

use crate::mac_info::MacInfo;
use crate::params::{
    AppData, BeaconState, CommissioningParams, HandlerStatus, JoinParams, McpsType, MlmeType,
    MsgType, NvmContextState, RxParams, TxParams,
};
use crate::region::DeviceClass;
use crate::status::MacStatus;

/// Renders MAC handler events as console lines through a [`Logger`].
///
/// Every line is written at INFO except where noted on the method. Lines
/// that combine a label with a hex dump are written under one
/// [`LineGuard`](logging::LineGuard), so they stay whole when other threads
/// log concurrently.
///
/// # Examples
///
/// ```
/// use lmhandler::{MacStatus, McpsType, MsgDisplay};
/// use logging::{ColorMode, LogConfig, Logger, ManualClock};
///
/// let config = LogConfig::default().color(ColorMode::Never);
/// let logger = Logger::new(Vec::new(), ManualClock::new(1000), config);
/// MsgDisplay::new(&logger).mcps_request_update(MacStatus::Ok, McpsType::Unconfirmed, 0);
///
/// let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();
/// assert_eq!(
///     output,
///     "00001000 : -- [ MCPS-Request - MCPS_UNCONFIRMED]  status=OK Next Tx in= 0 ms\n"
/// );
/// ```
pub struct MsgDisplay<'a, W, C> {
    logger: &'a Logger<W, C>,
}

impl<'a, W, C> MsgDisplay<'a, W, C>
where
    W: Write,
    C: Clock,
{
    /// Creates a display writing through `logger`.
    #[must_use]
    pub const fn new(logger: &'a Logger<W, C>) -> Self {
        Self { logger }
    }

    /// Returns the logger lines are written to.
    #[must_use]
    pub const fn logger(&self) -> &'a Logger<W, C> {
        self.logger
    }

    /// Reports a context store or restore of `size` bytes.
    pub fn nvm_data_change(&self, state: NvmContextState, size: u16) {
        match state {
            NvmContextState::Store => {
                info_log!(logger: self.logger, "-- [ NVM CTXS STORED ] size={size}");
            }
            NvmContextState::Restore => {
                info_log!(logger: self.logger, "-- [ NVM CTXS RESTORED ] size={size}");
            }
        }
    }

    /// Prints the device identity.
    pub fn network_parameters_update(&self, params: &CommissioningParams) {
        self.labelled_dump(format_args!("DevEui : "), &params.dev_eui);
        self.labelled_dump(format_args!("JoinEui : "), &params.join_eui);
        self.labelled_dump(format_args!("Pin : "), &params.se_pin);
    }

    /// Reports the outcome of a data request.
    pub fn mcps_request_update(&self, status: MacStatus, request: McpsType, next_tx_in: u32) {
        self.request_line("MCPS-Request", request.label(), status, next_tx_in);
    }

    /// Reports the outcome of a management request.
    pub fn mlme_request_update(&self, status: MacStatus, request: MlmeType, next_tx_in: u32) {
        self.request_line("MLME-Request", request.label(), status, next_tx_in);
    }

    /// Reports a join result.
    ///
    /// A failed over-the-air join is reported at WARN.
    pub fn join_request_update(&self, params: &JoinParams<'_>) {
        let dev_addr = params.commissioning.dev_addr;
        if !params.commissioning.is_otaa_activation {
            info_log!(logger: self.logger, "-- [ JOINED ] ABP DevAddr={dev_addr:08X}");
            return;
        }
        match params.status {
            HandlerStatus::Success => info_log!(
                logger: self.logger,
                "-- [ JOINED ]  OTAA DevAddr={dev_addr:08X} DR_{}",
                params.datarate
            ),
            HandlerStatus::Error => warn_log!(logger: self.logger, "-- [ JOIN FAILED ]"),
        }
    }

    /// Reports a transmit confirmation.
    ///
    /// Frequency, channel mask, and device class are looked up through `mac`.
    /// Regions whose mask spans several words log `Unsupported region` at
    /// WARN; an unknown region logs `Unknown region` at ERROR. Both render a
    /// mask of zero.
    pub fn tx_update(&self, params: &TxParams<'_>, mac: &impl MacInfo) {
        if !params.is_mcps_confirm {
            info_log!(logger: self.logger, "-- [ MLME-Confirm ]  status={}", params.status);
            return;
        }

        info_log!(logger: self.logger, "-- [ MCPS-Confirm ]  status={}", params.status);
        info_log!(
            logger: self.logger,
            "-- [ UPLINK FRAME ]  counter={} class={} port={}",
            params.uplink_counter,
            mac.current_class(),
            params.app_data.port
        );

        if !params.app_data.buffer.is_empty() {
            let line = self.logger.line(Level::Info);
            let line = match params.msg_type {
                MsgType::Confirmed => {
                    let ack = if params.ack_received { "ACK" } else { "NACK" };
                    line.text(format_args!("\tTX DATA CONFIRMED - {ack} : "))
                }
                MsgType::Unconfirmed => line.text(format_args!("\tTX DATA UNCONFIRMED : ")),
            };
            line.hex_dump(params.app_data.buffer);
        }

        let frequency = mac.channel_frequency(params.channel).unwrap_or(0);
        let mask = self.channel_mask(mac);
        info_log!(
            logger: self.logger,
            "\tDR_{} frequency={frequency} power={} channel mask={mask}",
            params.datarate,
            params.tx_power
        );
    }

    /// Reports a receive indication.
    pub fn rx_update(&self, app_data: &AppData<'_>, params: &RxParams) {
        if !params.is_mcps_indication {
            info_log!(logger: self.logger, "-- [ MLME-Indication ]  status={}", params.status);
            return;
        }

        info_log!(logger: self.logger, "-- [ MCPS-Indication ]  status={}", params.status);
        info_log!(
            logger: self.logger,
            "-- [ DOWNLINK FRAME ]  counter={} window={} port={}",
            params.downlink_counter,
            params.rx_slot.as_str(),
            app_data.port
        );

        if !app_data.buffer.is_empty() {
            self.labelled_dump(format_args!("\tRX DATA : "), app_data.buffer);
        }

        info_log!(
            logger: self.logger,
            "\tDR_{} rssi={} snr={}",
            params.datarate,
            params.rssi,
            params.snr
        );
    }

    /// Reports a class B beacon state change.
    ///
    /// A missed beacon is reported at WARN.
    pub fn beacon_update(&self, state: &BeaconState) {
        match state {
            BeaconState::Acquiring => info_log!(logger: self.logger, "-- [ BEACON ACQUIRING ]"),
            BeaconState::Lost => info_log!(logger: self.logger, "-- [ BEACON LOST ]"),
            BeaconState::Received(info) => {
                self.labelled_dump(
                    format_args!(
                        "-- [ BEACON ] time sec={} GW DESC={} INFO=",
                        info.time_seconds, info.gw_info_desc
                    ),
                    &info.gw_info,
                );
                info_log!(
                    logger: self.logger,
                    "\tfreq={} DR_{} rssi={} snr={}",
                    info.frequency,
                    info.datarate,
                    info.rssi,
                    info.snr
                );
            }
            BeaconState::NotReceived => {
                warn_log!(logger: self.logger, "-- [ BEACON NOT RECEIVED ]");
            }
        }
    }

    /// Reports a completed class switch.
    pub fn class_update(&self, class: DeviceClass) {
        info_log!(logger: self.logger, "-- [ Switch to class {class} done ]");
    }

    fn labelled_dump(&self, label: fmt::Arguments<'_>, data: &[u8]) {
        self.logger.line(Level::Info).text(label).hex_dump(data);
    }

    fn request_line(&self, service: &str, label: &str, status: MacStatus, next_tx_in: u32) {
        self.logger
            .line(Level::Info)
            .text(format_args!("-- [ {service} - {label}]"))
            .text(format_args!("  status={status} Next Tx in= {next_tx_in} ms"))
            .finish();
    }

    fn channel_mask(&self, mac: &impl MacInfo) -> u16 {
        let Some(mask) = mac.channels_mask() else {
            return 0;
        };
        match mac.active_region() {
            Some(region) if region.has_single_mask_word() => mask,
            Some(_) => {
                warn_log!(logger: self.logger, "Unsupported region");
                0
            }
            None => {
                error_log!(logger: self.logger, "Unknown region");
                0
            }
        }
    }
}

impl<W, C> fmt::Debug for MsgDisplay<'_, W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MsgDisplay")
            .field("logger", self.logger)
            .finish()
    }
}
