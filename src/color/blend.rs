/// Strategy for interpolating the hue component of a blend
///
/// Hue is an angle on the color wheel, so plain linear interpolation is not
/// generally correct; a blend from 0.9 to 0.1 can cross 0.0 or sweep the
/// long way around, and the two paths pass through different colors. The
/// float color types take the strategy as a type parameter at the blend
/// call site.
pub trait HueBlend {
    /// Blends between two hues in [0.0, 1.0), where progress 0.0 returns
    /// `left` and 1.0 returns `right`
    fn hue_blend(left: f32, right: f32, progress: f32) -> f32;
}

/// Blends hue along the shortest angular path around the color wheel
pub struct ShortestHueBlend;

impl HueBlend for ShortestHueBlend {
    fn hue_blend(left: f32, right: f32, progress: f32) -> f32 {
        let mut delta = right - left;
        if delta > 0.5 {
            delta -= 1.0;
        } else if delta < -0.5 {
            delta += 1.0;
        }

        let mut hue = left + delta * progress;
        if hue < 0.0 {
            hue += 1.0;
        } else if hue >= 1.0 {
            hue -= 1.0;
        }
        hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, tolerance: f32) -> bool {
        let d = a - b;
        -tolerance <= d && d <= tolerance
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(ShortestHueBlend::hue_blend(0.2, 0.6, 0.0), 0.2);
        assert!(close(ShortestHueBlend::hue_blend(0.2, 0.6, 1.0), 0.6, 1e-6));
    }

    #[test]
    fn test_interior_is_linear_when_no_wrap() {
        assert!(close(ShortestHueBlend::hue_blend(0.2, 0.4, 0.5), 0.3, 1e-6));
        assert!(close(ShortestHueBlend::hue_blend(0.4, 0.2, 0.25), 0.35, 1e-6));
    }

    #[test]
    fn test_wraps_across_zero() {
        // 0.9 -> 0.1 is 0.2 of a turn through red, not 0.8 the long way
        let mid = ShortestHueBlend::hue_blend(0.9, 0.1, 0.5);
        assert!(mid < 0.05 || mid > 0.95, "took the long way: {}", mid);

        let quarter = ShortestHueBlend::hue_blend(0.9, 0.1, 0.25);
        assert!(close(quarter, 0.95, 1e-6));

        let reverse = ShortestHueBlend::hue_blend(0.1, 0.9, 0.5);
        assert!(reverse < 0.05 || reverse > 0.95);
    }

    #[test]
    fn test_result_stays_in_unit_range() {
        for (left, right) in [(0.95, 0.3), (0.05, 0.8), (0.0, 0.5)] {
            for step in 0..=10 {
                let hue = ShortestHueBlend::hue_blend(left, right, step as f32 / 10.0);
                assert!((0.0..1.0).contains(&hue));
            }
        }
    }
}
