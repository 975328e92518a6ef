//! crates/lmhandler/src/region.rs
//! Regional plans and device classes as reported by the MAC.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseRegionError, UnknownStatusCode};

/// Regional parameter set the MAC is running.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Region {
    /// AS923.
    As923 = 0,
    /// AU915.
    Au915 = 1,
    /// CN470.
    Cn470 = 2,
    /// CN779.
    Cn779 = 3,
    /// EU433.
    Eu433 = 4,
    /// EU868.
    Eu868 = 5,
    /// KR920.
    Kr920 = 6,
    /// IN865.
    In865 = 7,
    /// US915.
    Us915 = 8,
    /// RU864.
    Ru864 = 9,
}

impl Region {
    /// Every region, ordered by code.
    pub const ALL: [Self; 10] = [
        Self::As923,
        Self::Au915,
        Self::Cn470,
        Self::Cn779,
        Self::Eu433,
        Self::Eu868,
        Self::Kr920,
        Self::In865,
        Self::Us915,
        Self::Ru864,
    ];

    /// Returns the upper-case region name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::As923 => "AS923",
            Self::Au915 => "AU915",
            Self::Cn470 => "CN470",
            Self::Cn779 => "CN779",
            Self::Eu433 => "EU433",
            Self::Eu868 => "EU868",
            Self::Kr920 => "KR920",
            Self::In865 => "IN865",
            Self::Us915 => "US915",
            Self::Ru864 => "RU864",
        }
    }

    /// Reports whether the first channel-mask word describes every channel.
    ///
    /// Regions with more than sixteen channels spread the mask over several
    /// words and are not rendered by the uplink display.
    #[must_use]
    pub const fn has_single_mask_word(self) -> bool {
        !matches!(self, Self::Au915 | Self::Cn470 | Self::Us915)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Region {
    type Error = UnknownStatusCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(UnknownStatusCode::new("region", value))
    }
}

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseRegionError::new(trimmed))
    }
}

/// LoRaWAN device class.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum DeviceClass {
    /// Class A: receive windows follow each uplink.
    #[default]
    A = 0,
    /// Class B: additional scheduled ping slots.
    B = 1,
    /// Class C: continuously listening.
    C = 2,
}

impl DeviceClass {
    /// Returns the class letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<u8> for DeviceClass {
    type Error = UnknownStatusCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            2 => Ok(Self::C),
            other => Err(UnknownStatusCode::new("device class", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_codes_and_names() {
        for (index, region) in Region::ALL.iter().enumerate() {
            let code = u8::try_from(index).expect("small index");
            assert_eq!(Region::try_from(code), Ok(*region));
            assert_eq!(region.as_str().parse::<Region>(), Ok(*region));
        }
        assert!(Region::try_from(10).is_err());
        assert_eq!("eu868".parse::<Region>(), Ok(Region::Eu868));
        assert!("EU999".parse::<Region>().is_err());
    }

    #[test]
    fn multi_word_mask_regions() {
        let multi: Vec<_> = Region::ALL
            .into_iter()
            .filter(|region| !region.has_single_mask_word())
            .collect();
        assert_eq!(multi, vec![Region::Au915, Region::Cn470, Region::Us915]);
    }

    #[test]
    fn device_class_letters() {
        assert_eq!(DeviceClass::A.as_char(), 'A');
        assert_eq!(DeviceClass::C.to_string(), "C");
        assert_eq!(DeviceClass::try_from(1), Ok(DeviceClass::B));
        assert!(DeviceClass::try_from(3).is_err());
    }
}
