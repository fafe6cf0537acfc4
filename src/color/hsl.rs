use super::blend::HueBlend;
use super::rgb::RgbColor;

/// A color represented by hue, saturation and lightness
///
/// All components are nominally 0.0 to 1.0. Lightness should be kept at or
/// below 0.5 by the caller; above that the conversion washes toward white.
/// Out of range values are not validated, and unlike [HsbColor](super::HsbColor)
/// the hue here is assumed pre-normalized and is not wrapped on conversion.
#[derive(Default, Clone, Copy, Debug)]
pub struct HslColor {
    /// Hue, the angular position on the color wheel
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Lightness
    pub l: f32,
}

impl HslColor {
    /// Creates a new color from component values
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Blends between two colors, where progress 0.0 returns `left` and 1.0
    /// returns `right`
    ///
    /// Saturation and lightness blend linearly; hue goes through the
    /// [HueBlend] strategy.
    pub fn linear_blend<T: HueBlend>(left: Self, right: Self, progress: f32) -> Self {
        Self {
            h: T::hue_blend(left.h, right.h, progress),
            s: left.s + (right.s - left.s) * progress,
            l: left.l + (right.l - left.l) * progress,
        }
    }

    /// Blends between four colors positioned on the corners of a unit
    /// square, where `x` and `y` select the point to sample
    pub fn bilinear_blend<T: HueBlend>(
        c00: Self,
        c01: Self,
        c10: Self,
        c11: Self,
        x: f32,
        y: f32,
    ) -> Self {
        let v00 = (1.0 - x) * (1.0 - y);
        let v10 = x * (1.0 - y);
        let v01 = (1.0 - x) * y;
        let v11 = x * y;

        Self {
            h: T::hue_blend(
                T::hue_blend(c00.h, c10.h, x),
                T::hue_blend(c01.h, c11.h, x),
                y,
            ),
            s: c00.s * v00 + c10.s * v10 + c01.s * v01 + c11.s * v11,
            l: c00.l * v00 + c10.l * v10 + c01.l * v01 + c11.l * v11,
        }
    }
}

// Piecewise hue rotation: p and q bound the channel, t selects the segment.
fn calc_color(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

impl From<HslColor> for RgbColor {
    fn from(color: HslColor) -> Self {
        if color.s == 0.0 || color.l == 0.0 {
            // achromatic or black
            let v = (color.l * 255.0) as u8;
            return RgbColor::new(v, v, v);
        }

        let q = if color.l < 0.5 {
            color.l * (1.0 + color.s)
        } else {
            color.l + color.s - (color.l * color.s)
        };
        let p = 2.0 * color.l - q;

        RgbColor::new(
            (calc_color(p, q, color.h + 1.0 / 3.0) * 255.0) as u8,
            (calc_color(p, q, color.h) * 255.0) as u8,
            (calc_color(p, q, color.h - 1.0 / 3.0) * 255.0) as u8,
        )
    }
}

impl From<RgbColor> for HslColor {
    fn from(color: RgbColor) -> Self {
        let r = color.r as f32 / 255.0;
        let g = color.g as f32 / 255.0;
        let b = color.b as f32 / 255.0;

        let max = if r > g && r > b {
            r
        } else if g > b {
            g
        } else {
            b
        };
        let min = if r < g && r < b {
            r
        } else if g < b {
            g
        } else {
            b
        };

        let l = (max + min) / 2.0;

        if max == min {
            return HslColor::new(0.0, 0.0, l);
        }

        let d = max - min;
        // branch on lightness keeps the denominator positive
        let s = if l > 0.5 {
            d / (2.0 - (max + min))
        } else {
            d / (max + min)
        };

        let mut h = if r > g && r > b {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if g > b {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;

        HslColor::new(h, s, l)
    }
}
