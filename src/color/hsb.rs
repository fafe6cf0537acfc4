use crate::math::fuzzy_eq;

use super::blend::HueBlend;
use super::rgb::RgbColor;

/// A color represented by hue, saturation and brightness
///
/// All components are nominally 0.0 to 1.0. Hue outside that range is
/// wrapped back onto the color wheel during conversion; saturation and
/// brightness are not validated.
#[derive(Default, Clone, Copy, Debug)]
pub struct HsbColor {
    /// Hue, the angular position on the color wheel
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Brightness
    pub b: f32,
}

impl HsbColor {
    /// Creates a new color from component values
    pub const fn new(h: f32, s: f32, b: f32) -> Self {
        Self { h, s, b }
    }

    /// Blends between two colors, where progress 0.0 returns `left` and 1.0
    /// returns `right`
    ///
    /// Saturation and brightness blend linearly; hue goes through the
    /// [HueBlend] strategy.
    pub fn linear_blend<T: HueBlend>(left: Self, right: Self, progress: f32) -> Self {
        Self {
            h: T::hue_blend(left.h, right.h, progress),
            s: left.s + (right.s - left.s) * progress,
            b: left.b + (right.b - left.b) * progress,
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
            b: c00.b * v00 + c10.b * v10 + c01.b * v01 + c11.b * v11,
        }
    }
}

impl From<HsbColor> for RgbColor {
    fn from(color: HsbColor) -> Self {
        if fuzzy_eq(color.s, 0.0) {
            // achromatic or black
            let v = (color.b * 255.0) as u8;
            return RgbColor::new(v, v, v);
        }

        let mut h = color.h;
        if h < 0.0 {
            h += 1.0;
        } else if h >= 1.0 {
            h -= 1.0;
        }

        // 60 degree sectors
        h *= 6.0;
        let i = h as i32;
        let f = h - i as f32;
        let q = color.b * (1.0 - color.s * f);
        let p = color.b * (1.0 - color.s);
        let t = color.b * (1.0 - color.s * (1.0 - f));

        // sector 5 also catches float rounding past the last sector
        let (r, g, b) = match i {
            0 => (color.b, t, p),
            1 => (q, color.b, p),
            2 => (p, color.b, t),
            3 => (p, q, color.b),
            4 => (t, p, color.b),
            _ => (color.b, p, q),
        };

        RgbColor::new(
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
        )
    }
}

impl From<RgbColor> for HsbColor {
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

        let d = max - min;

        let brightness = max;
        let saturation = if brightness == 0.0 { 0.0 } else { d / brightness };

        let mut h = 0.0;
        if d != 0.0 {
            h = if r == max {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if g == max {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            h /= 6.0;
        }

        HsbColor::new(h, saturation, brightness)
    }
}

#[cfg(test)]
mod tests {
    use super::super::blend::ShortestHueBlend;
    use super::*;

    fn close(a: f32, b: f32, tolerance: f32) -> bool {
        let d = a - b;
        -tolerance <= d && d <= tolerance
    }

    #[test]
    fn test_sector_primaries() {
        assert_eq!(RgbColor::from(HsbColor::new(0.0, 1.0, 1.0)), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from(HsbColor::new(2.0 / 6.0, 1.0, 1.0)), RgbColor::new(0, 255, 0));
        assert_eq!(RgbColor::from(HsbColor::new(4.0 / 6.0, 1.0, 1.0)), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_hue_wraps_on_conversion() {
        let above = RgbColor::from(HsbColor::new(1.25, 1.0, 1.0));
        let below = RgbColor::from(HsbColor::new(-0.75, 1.0, 1.0));
        let reference = RgbColor::from(HsbColor::new(0.25, 1.0, 1.0));
        assert_eq!(above, reference);
        assert_eq!(below, reference);
    }

    #[test]
    fn test_achromatic_uses_fuzzy_compare() {
        // saturation exactly zero takes the gray path
        assert_eq!(RgbColor::from(HsbColor::new(0.4, 0.0, 0.5)), RgbColor::new(127, 127, 127));
        // a tiny but nonzero saturation does not (fuzzy against zero only
        // matches exact zero)
        let tinted = RgbColor::from(HsbColor::new(0.0, 1e-6, 0.5));
        assert_eq!(tinted.r, 127);
        assert!(tinted.g <= 127);
    }

    #[test]
    fn test_round_trip_within_one_count() {
        for original in [
            RgbColor::new(128, 64, 32),
            RgbColor::new(10, 200, 90),
            RgbColor::new(255, 254, 0),
            RgbColor::new(0, 1, 2),
        ] {
            let back = RgbColor::from(HsbColor::from(original));
            assert!(original.r.abs_diff(back.r) <= 1, "{:?} came back {:?}", original, back);
            assert!(original.g.abs_diff(back.g) <= 1, "{:?} came back {:?}", original, back);
            assert!(original.b.abs_diff(back.b) <= 1, "{:?} came back {:?}", original, back);
        }
    }

    #[test]
    fn test_forward_conversion_known_values() {
        let hsb = HsbColor::from(RgbColor::new(128, 64, 32));
        assert!(close(hsb.h, 1.0 / 18.0, 0.005));
        assert!(close(hsb.s, 0.75, 0.005));
        assert!(close(hsb.b, 0.502, 0.005));
    }

    #[test]
    fn test_black_has_zero_saturation() {
        let hsb = HsbColor::from(RgbColor::new(0, 0, 0));
        assert_eq!(hsb.h, 0.0);
        assert_eq!(hsb.s, 0.0);
        assert_eq!(hsb.b, 0.0);
    }

    #[test]
    fn test_linear_blend_components() {
        let a = HsbColor::new(0.1, 0.2, 0.0);
        let b = HsbColor::new(0.3, 0.6, 1.0);
        let mid = HsbColor::linear_blend::<ShortestHueBlend>(a, b, 0.5);
        assert!(close(mid.h, 0.2, 1e-6));
        assert!(close(mid.s, 0.4, 1e-6));
        assert!(close(mid.b, 0.5, 1e-6));
    }

    #[test]
    fn test_bilinear_blend_degenerate_corners() {
        let a = HsbColor::new(0.8, 0.25, 0.6);
        let out = HsbColor::bilinear_blend::<ShortestHueBlend>(a, a, a, a, 0.9, 0.1);
        assert!(close(out.h, a.h, 1e-5));
        assert!(close(out.s, a.s, 1e-5));
        assert!(close(out.b, a.b, 1e-5));
    }
}
