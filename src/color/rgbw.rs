use rgb::Rgb;

use crate::math::{Ratio8, Ratio8Ops};

use super::channel_color_impl;
use super::hsb::HsbColor;
use super::hsl::HslColor;
use super::rgb::RgbColor;

/// A color with 8 bit red, green, blue and white channels, for RGBW pixels
/// such as the SK6812
///
/// (0, 0, 0, 0) is black; (255, 255, 255, 0) and (0, 0, 0, 255) are both
/// white, and (255, 255, 255, 255) is extreme bright white. No canonical
/// white encoding is enforced.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct RgbwColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// White channel, independent of the color channels
    pub w: u8,
}

impl RgbwColor {
    /// Creates a new color from channel values
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Creates a gray tone color on the white channel alone, where 0 is
    /// black and 255 is white
    pub const fn white(brightness: u8) -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            w: brightness,
        }
    }

    /// Returns whether the color channels are a gray tone, ignoring white
    pub fn is_monotone(&self) -> bool {
        self.r == self.b && self.r == self.g
    }

    /// Returns whether the color channels are all zero, ignoring white
    pub fn is_colorless(&self) -> bool {
        self.r == 0 && self.b == 0 && self.g == 0
    }

    /// Calculates the overall brightness as the larger of the white channel
    /// and the truncated color channel average
    pub fn brightness(&self) -> u8 {
        let color = ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8;
        color.max(self.w)
    }

    /// Moves the color toward white by delta, stopping at 255
    ///
    /// A colorless color lightens on the white channel alone; anything else
    /// lightens the color channels and leaves white untouched, so lightening
    /// never re-tints a color that only carries white.
    pub fn lighten(&mut self, delta: u8) {
        if self.is_colorless() {
            self.w = self.w.saturating_add(delta);
        } else {
            self.r = self.r.saturating_add(delta);
            self.g = self.g.saturating_add(delta);
            self.b = self.b.saturating_add(delta);
        }
    }
}

channel_color_impl!(RgbwColor r, g, b, w);

impl From<RgbColor> for RgbwColor {
    fn from(color: RgbColor) -> Self {
        Self::new(color.r, color.g, color.b, 0)
    }
}

impl From<HslColor> for RgbwColor {
    fn from(color: HslColor) -> Self {
        RgbColor::from(color).into()
    }
}

impl From<HsbColor> for RgbwColor {
    fn from(color: HsbColor) -> Self {
        RgbColor::from(color).into()
    }
}

impl From<Rgb<u8>> for RgbwColor {
    fn from(pixel: Rgb<u8>) -> Self {
        Self::new(pixel.r, pixel.g, pixel.b, 0)
    }
}
