//! crates/lmhandler/src/mac_info.rs
//! Read-only view of MAC state consulted while rendering uplinks.

use crate::region::{DeviceClass, Region};

/// Queries the display layer makes against the running MAC.
///
/// Lookups that the MAC cannot answer return `None`; the display then renders
/// zero, as the device console always has.
pub trait MacInfo {
    /// Class the device currently operates in.
    fn current_class(&self) -> DeviceClass;

    /// Active regional plan, if the MAC reports a known one.
    fn active_region(&self) -> Option<Region>;

    /// Frequency in Hz of channel `index`.
    fn channel_frequency(&self, index: u8) -> Option<u32>;

    /// First word of the channel mask.
    fn channels_mask(&self) -> Option<u16>;
}

impl<M: MacInfo + ?Sized> MacInfo for &M {
    fn current_class(&self) -> DeviceClass {
        (**self).current_class()
    }

    fn active_region(&self) -> Option<Region> {
        (**self).active_region()
    }

    fn channel_frequency(&self, index: u8) -> Option<u32> {
        (**self).channel_frequency(index)
    }

    fn channels_mask(&self) -> Option<u16> {
        (**self).channels_mask()
    }
}

/// Fixed snapshot of MAC state.
///
/// ```
/// use lmhandler::{DeviceClass, MacInfo, MacSnapshot, Region};
///
/// let mac = MacSnapshot::new(Region::Eu868)
///     .with_channels(&[868_100_000, 868_300_000, 868_500_000])
///     .with_channels_mask(0x0007);
///
/// assert_eq!(mac.current_class(), DeviceClass::A);
/// assert_eq!(mac.channel_frequency(1), Some(868_300_000));
/// assert_eq!(mac.channel_frequency(9), None);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MacSnapshot {
    /// Current device class.
    pub class: DeviceClass,
    /// Active region, `None` when unknown.
    pub region: Option<Region>,
    /// Channel frequencies indexed by channel number.
    pub channels: Vec<u32>,
    /// First channel-mask word, `None` when unavailable.
    pub channels_mask: Option<u16>,
}

impl MacSnapshot {
    /// Creates a class A snapshot for `region` with no channels.
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            region: Some(region),
            ..Self::default()
        }
    }

    /// Returns a copy with the channel plan replaced.
    #[must_use]
    pub fn with_channels(mut self, frequencies: &[u32]) -> Self {
        self.channels = frequencies.to_vec();
        self
    }

    /// Returns a copy with the first mask word set.
    #[must_use]
    pub const fn with_channels_mask(mut self, mask: u16) -> Self {
        self.channels_mask = Some(mask);
        self
    }

    /// Returns a copy operating in `class`.
    #[must_use]
    pub const fn with_class(mut self, class: DeviceClass) -> Self {
        self.class = class;
        self
    }
}

impl MacInfo for MacSnapshot {
    fn current_class(&self) -> DeviceClass {
        self.class
    }

    fn active_region(&self) -> Option<Region> {
        self.region
    }

    fn channel_frequency(&self, index: u8) -> Option<u32> {
        self.channels.get(usize::from(index)).copied()
    }

    fn channels_mask(&self) -> Option<u16> {
        self.channels_mask
    }
}
