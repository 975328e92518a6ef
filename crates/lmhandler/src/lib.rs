#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `lmhandler` turns the status codes and event parameters produced by a
//! LoRaMAC handler into the console lines a LoRaWAN end-device demo prints.
//! The MAC stack itself is out of scope: this crate only reads the values it
//! reports.
//!
//! # Design
//!
//! - [`MacStatus`] and [`EventInfoStatus`] are the status tables, keyed by the
//!   raw MAC codes.
//! - The parameter structs ([`TxParams`], [`RxParams`], [`JoinParams`],
//!   [`BeaconState`], ...) are borrowed, read-only views of one event.
//! - [`MacInfo`] abstracts the few MAC lookups the uplink display needs
//!   (class, region, channel frequency, channel mask); [`MacSnapshot`] is a
//!   fixed implementation.
//! - [`MsgDisplay`] renders events through a [`logging::Logger`].
//!
//! # Errors
//!
//! Raw codes outside a table are rejected with [`UnknownStatusCode`] instead
//! of indexing past the end. Rendering itself never fails.
//!
//! # Examples
//!
//! ```
//! use lmhandler::{DeviceClass, MsgDisplay, NvmContextState};
//! use logging::{LogConfig, Logger, ManualClock};
//!
//! let logger = Logger::new(Vec::new(), ManualClock::new(12), LogConfig::default());
//! let display = MsgDisplay::new(&logger);
//! display.nvm_data_change(NvmContextState::Restore, 384);
//! display.class_update(DeviceClass::C);
//!
//! let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     "00000012 : -- [ NVM CTXS RESTORED ] size=384\n\
//!      00000012 : -- [ Switch to class C done ]\n"
//! );
//! ```

mod display;
mod error;
mod mac_info;
mod params;
mod region;
mod status;

pub use display::MsgDisplay;
pub use error::{ParseRegionError, UnknownStatusCode};
pub use mac_info::{MacInfo, MacSnapshot};
pub use params::{
    AppData, BeaconInfo, BeaconState, CommissioningParams, HandlerStatus, JoinParams, McpsType,
    MlmeType, MsgType, NvmContextState, RxParams, RxSlot, TxParams,
};
pub use region::{DeviceClass, Region};
pub use status::{EventInfoStatus, MacStatus};
