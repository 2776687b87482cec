//! Point-to-pixel conversion.

/// Convert a size in points to whole device pixels at the given display scale.
///
/// One point is 1/72 inch; the logical baseline is 96 dpi, so the physical
/// pixel size is `pt * 96/72 * scale_factor`, rounded. Frame widths are
/// converted once per configuration load, not per frame.
pub fn pt_to_px(pt: f32, scale_factor: f64) -> f32 {
    (pt * (96.0 / 72.0) * scale_factor as f32).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_point_at_unit_scale() {
        // 1pt = 1.333px, rounded to 1
        assert_eq!(pt_to_px(1.0, 1.0), 1.0);
    }

    #[test]
    fn two_points_at_unit_scale() {
        // 2pt = 2.667px, rounded to 3
        assert_eq!(pt_to_px(2.0, 1.0), 3.0);
    }

    #[test]
    fn hidpi_doubles_before_rounding() {
        assert_eq!(pt_to_px(1.0, 2.0), 3.0);
        assert_eq!(pt_to_px(2.0, 2.0), 5.0);
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(pt_to_px(0.0, 1.0), 0.0);
        assert_eq!(pt_to_px(0.0, 2.5), 0.0);
    }
}
