/// Coefficients to transform from sRGB to a CIE Y (luminance) value.
pub const SRGB_LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Cutoff separating dark (0) from light (255) luminance values.
pub const DEFAULT_CUTOFF: u8 = 127;

/// Weighted channel sum truncated toward zero on the narrowing cast.
///
/// The sum is computed in f64: f32 multiply-add lands on the wrong side of
/// the integer boundary for 69 of the 256 gray levels, (255, 255, 255)
/// included, which must truncate to 254.
#[inline(always)]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (r as f64 * SRGB_LUMA[0] + g as f64 * SRGB_LUMA[1] + b as f64 * SRGB_LUMA[2]) as u8
}

/// Quantize a luminance sample against `cutoff`. The boundary is inclusive
/// on the high side: `luma == cutoff` maps to 255.
#[inline(always)]
pub fn binarize(luma: u8, cutoff: u8) -> u8 {
    if luma < cutoff { 0 } else { 255 }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_CUTOFF, binarize, luma};

    #[test]
    fn test_luma_white_truncates_down() {
        // 255 * (0.2126 + 0.7152 + 0.0722) = 254.995, truncated not rounded
        assert_eq!(luma(255, 255, 255), 254);
    }

    #[test]
    fn test_luma_black() {
        assert_eq!(luma(0, 0, 0), 0);
    }

    #[test]
    fn test_luma_mid_gray() {
        assert_eq!(luma(127, 127, 127), 127);
    }

    #[test]
    fn test_luma_single_channels() {
        assert_eq!(luma(255, 0, 0), 54); // 54.213
        assert_eq!(luma(0, 255, 0), 182); // 182.376
        assert_eq!(luma(0, 0, 255), 18); // 18.411
    }

    #[test]
    fn test_binarize_boundary_is_inclusive() {
        assert_eq!(binarize(DEFAULT_CUTOFF, DEFAULT_CUTOFF), 255);
        assert_eq!(binarize(DEFAULT_CUTOFF - 1, DEFAULT_CUTOFF), 0);
    }

    #[test]
    fn test_binarize_extremes() {
        assert_eq!(binarize(0, DEFAULT_CUTOFF), 0);
        assert_eq!(binarize(254, DEFAULT_CUTOFF), 255);
        // cutoff 0 can never be undershot
        assert_eq!(binarize(0, 0), 255);
    }

    #[test]
    fn test_gray_ramp_is_monotonic() {
        let mut prev = 0;
        for v in 0..=255u8 {
            let l = luma(v, v, v);
            assert!(l >= prev, "luma({0}, {0}, {0}) regressed", v);
            prev = l;
        }
    }
}
