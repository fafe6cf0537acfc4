//! Current draw estimation for power budgeting
//!
//! Pixel current scales roughly linearly with each channel value, so a strip
//! can be budgeted by summing a per-channel model over its pixels. The
//! per-channel constants at full drive come from the caller; datasheet
//! values for WS2812/SK6812 class parts are in the 10-20mA range per
//! channel.

use crate::color::{RgbColor, RgbwColor};

/// Per-channel current at full drive for an RGB pixel, in tenth-milliamperes
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct RgbCurrentSettings {
    /// Red channel current at 255
    pub red: u16,
    /// Green channel current at 255
    pub green: u16,
    /// Blue channel current at 255
    pub blue: u16,
}

impl RgbCurrentSettings {
    /// Creates settings from per-channel tenth-milliampere values
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }
}

/// Per-channel current at full drive for an RGBW pixel, in tenth-milliamperes
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct RgbwCurrentSettings {
    /// Red channel current at 255
    pub red: u16,
    /// Green channel current at 255
    pub green: u16,
    /// Blue channel current at 255
    pub blue: u16,
    /// White channel current at 255
    pub white: u16,
}

impl RgbwCurrentSettings {
    /// Creates settings from per-channel tenth-milliampere values
    pub const fn new(red: u16, green: u16, blue: u16, white: u16) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }
}

/// Types that can estimate their current draw from per-channel settings
pub trait AsTenthMilliamps {
    /// The settings object carrying the per-channel constants
    type Settings;

    /// Estimates the current draw in tenth-milliamperes
    fn as_tenth_milliamps(&self, settings: &Self::Settings) -> u32;
}

impl AsTenthMilliamps for RgbColor {
    type Settings = RgbCurrentSettings;

    fn as_tenth_milliamps(&self, settings: &RgbCurrentSettings) -> u32 {
        let mut total = 0;

        total += self.r as u32 * settings.red as u32 / 255;
        total += self.g as u32 * settings.green as u32 / 255;
        total += self.b as u32 * settings.blue as u32 / 255;

        total
    }
}

impl AsTenthMilliamps for RgbwColor {
    type Settings = RgbwCurrentSettings;

    fn as_tenth_milliamps(&self, settings: &RgbwCurrentSettings) -> u32 {
        let mut total = 0;

        total += self.r as u32 * settings.red as u32 / 255;
        total += self.g as u32 * settings.green as u32 / 255;
        total += self.b as u32 * settings.blue as u32 / 255;
        total += self.w as u32 * settings.white as u32 / 255;

        total
    }
}

impl<T> AsTenthMilliamps for [T]
where
    T: AsTenthMilliamps,
{
    type Settings = T::Settings;

    fn as_tenth_milliamps(&self, settings: &Self::Settings) -> u32 {
        self.iter().map(|p| p.as_tenth_milliamps(settings)).sum()
    }
}

impl<T, const S: usize> AsTenthMilliamps for [T; S]
where
    T: AsTenthMilliamps,
{
    type Settings = T::Settings;

    fn as_tenth_milliamps(&self, settings: &Self::Settings) -> u32 {
        self.iter().map(|p| p.as_tenth_milliamps(settings)).sum()
    }
}

/// Scales a target brightness down until the estimated draw fits a current
/// budget, both in tenth-milliamperes
///
/// Returns the target unchanged when the draw already fits.
pub fn brightness_for_tenth_milliamps(total: u32, target: u8, budget: u32) -> u8 {
    let target32 = target as u32;
    let requested = (total * target32) / 256;

    if requested > budget {
        #[cfg(feature = "log-04")]
        log::debug!(
            "limiting brightness: {} tenth-mA requested, {} budgeted",
            requested,
            budget
        );
        ((target32 * budget) / requested) as u8
    } else {
        target
    }
}
