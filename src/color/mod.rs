//! The color value types and the conversions between them
//!
//! [RgbColor] and [RgbwColor] carry 8 bit channels and are what the hardware
//! ultimately eats. [HslColor] and [HsbColor] are float representations that
//! are easier to animate; converting either of them produces an [RgbColor]
//! (or an [RgbwColor] with a zeroed white channel).

macro_rules! channel_color_impl {
    ($color_type:tt $($component:ident),+) => {
        impl $color_type {
            /// Returns a copy blended toward black, where ratio 255 keeps the
            /// original color and ratio 0 is black
            ///
            /// Specifically avoids float math.
            pub fn dim(&self, ratio: Ratio8) -> Self {
                Self {
                    $($component: self.$component.dim8(ratio)),+
                }
            }

            /// Returns a copy blended toward white, where ratio 255 keeps the
            /// original color and ratio 0 is white
            ///
            /// Specifically avoids float math. Approximate inverse of
            /// [Self::dim], within a couple of counts per channel.
            pub fn brighten(&self, ratio: Ratio8) -> Self {
                Self {
                    $($component: self.$component.brighten8(ratio)),+
                }
            }

            /// Moves every channel toward black by delta, stopping at 0
            pub fn darken(&mut self, delta: u8) {
                $(self.$component = self.$component.saturating_sub(delta);)+
            }

            /// Blends between two colors, where progress 0.0 returns `left`
            /// and 1.0 returns `right`
            ///
            /// Progress outside the unit range extrapolates; the result
            /// saturates at the channel bounds.
            pub fn linear_blend(left: Self, right: Self, progress: f32) -> Self {
                Self {
                    $($component: (left.$component as f32
                        + (right.$component as f32 - left.$component as f32) * progress) as u8),+
                }
            }

            /// Blends between four colors positioned on the corners of a unit
            /// square, where `x` and `y` select the point to sample
            ///
            /// c00 is the upper left quadrant color, c01 upper right, c10
            /// lower left, c11 lower right.
            pub fn bilinear_blend(c00: Self, c01: Self, c10: Self, c11: Self, x: f32, y: f32) -> Self {
                let v00 = (1.0 - x) * (1.0 - y);
                let v10 = x * (1.0 - y);
                let v01 = (1.0 - x) * y;
                let v11 = x * y;

                Self {
                    $($component: (c00.$component as f32 * v00
                        + c10.$component as f32 * v10
                        + c01.$component as f32 * v01
                        + c11.$component as f32 * v11) as u8),+
                }
            }
        }
    };
}

pub(crate) use channel_color_impl;

mod blend;
mod hsb;
mod hsl;
mod rgb;
mod rgbw;

pub use blend::{HueBlend, ShortestHueBlend};
pub use hsb::HsbColor;
pub use hsl::HslColor;
pub use rgb::RgbColor;
pub use rgbw::RgbwColor;
