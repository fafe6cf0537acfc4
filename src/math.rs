//! Integer ratio math and approximate float comparison
//!
//! The 8 bit transforms here deliberately avoid floating point so that the
//! same input always produces the same channel value on any target.

use micromath::F32Ext;

/// An alias for u8 to indicate that the value is a ratio from 0-255 where 0 is 0% and 255 is 100%
pub type Ratio8 = u8;

/// Integer-only scaling operations used by the channel color types
pub trait Ratio8Ops {
    /// Scales the value toward zero by `(ratio + 1) / 256`
    fn dim8(self, ratio: Ratio8) -> Self;
    /// Approximate inverse of [Ratio8Ops::dim8], clamped to the channel range
    fn brighten8(self, ratio: Ratio8) -> Self;
}

impl Ratio8Ops for u8 {
    #[inline(always)]
    fn dim8(self, ratio: Ratio8) -> Self {
        ((self as u16 * (ratio as u16 + 1)) >> 8) as u8
    }

    #[inline(always)]
    fn brighten8(self, ratio: Ratio8) -> Self {
        // widened to u32 so value 255 survives the shift
        let element = ((self as u32 + 1) << 8) / (ratio as u32 + 1);
        if element > 255 {
            255
        } else {
            (element - 1) as u8
        }
    }
}

/// Relative-tolerance equality for f32 values
///
/// Two values compare equal when they differ by less than one part in 1e5 of
/// the smaller magnitude. Comparing against 0.0 only matches exact zero.
pub fn fuzzy_eq(p1: f32, p2: f32) -> bool {
    (p1 - p2).abs() * 100_000.0 <= p1.abs().min(p2.abs())
}

/// Relative-tolerance equality for f64 values, one part in 1e12
pub fn fuzzy_eq_f64(p1: f64, p2: f64) -> bool {
    let d = p1 - p2;
    let d = if d < 0.0 { -d } else { d };
    let m1 = if p1 < 0.0 { -p1 } else { p1 };
    let m2 = if p2 < 0.0 { -p2 } else { p2 };
    d * 1_000_000_000_000.0 <= m1.min(m2)
}
