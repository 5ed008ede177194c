//! Value to sub-unit level quantization
//!
//! Rounding is always toward the ceiling so that any sample above the
//! minimum shows at least one dot and a near-maximum sample reaches the top.

use super::glyphs::DOTS_PER_ROW;

/// Map `value` onto `0..=resolution` for the range `[min, max]`.
///
/// Values at or below `min` (and NaN) map to 0, values at or above `max`
/// map to `resolution`.
pub fn level(value: f64, min: f64, max: f64, resolution: usize) -> usize {
    if value.is_nan() || value <= min {
        return 0;
    }
    if value >= max {
        return resolution;
    }
    let scaled = (value - min) / (max - min) * resolution as f64;
    (scaled.ceil() as usize).min(resolution)
}

/// Split a level into per-row levels of at most four sub-units each,
/// bottom-most row first. Lower rows saturate before the next one starts.
pub fn split_rows(level: usize, height: usize) -> Vec<u8> {
    (0..height)
        .map(|row| {
            let below = row * DOTS_PER_ROW;
            level.saturating_sub(below).min(DOTS_PER_ROW) as u8
        })
        .collect()
}

/// Per-row levels for `value` on a graph of `height` character rows.
pub fn row_levels(value: f64, min: f64, max: f64, height: usize) -> Vec<u8> {
    split_rows(level(value, min, max, height * DOTS_PER_ROW), height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_range() {
        assert_eq!(level(0.0, 0.0, 100.0, 8), 0);
        assert_eq!(level(-1.0, 0.0, 100.0, 8), 0);
        assert_eq!(level(100.0, 0.0, 100.0, 8), 8);
        assert_eq!(level(101.0, 0.0, 100.0, 8), 8);
        assert_eq!(level(f64::INFINITY, 0.0, 100.0, 8), 8);
        assert_eq!(level(f64::NAN, 0.0, 100.0, 8), 0);
    }

    #[test]
    fn rounds_up() {
        // 25 sits exactly on the first threshold
        assert_eq!(level(25.0, 0.0, 100.0, 4), 1);
        assert_eq!(level(24.0, 0.0, 100.0, 4), 1);
        assert_eq!(level(0.1, 0.0, 100.0, 4), 1);
        assert_eq!(level(25.1, 0.0, 100.0, 4), 2);
        assert_eq!(level(50.0, 0.0, 100.0, 4), 2);
        assert_eq!(level(99.9, 0.0, 100.0, 4), 4);
    }

    #[test]
    fn honours_offset_minimum() {
        assert_eq!(level(20.0, 20.0, 100.0, 4), 0);
        assert_eq!(level(40.0, 20.0, 100.0, 4), 1);
        assert_eq!(level(60.0, 20.0, 100.0, 4), 2);
    }

    #[test]
    fn splits_bottom_first() {
        assert_eq!(split_rows(7, 4), vec![4, 3, 0, 0]);
        assert_eq!(split_rows(8, 4), vec![4, 4, 0, 0]);
        assert_eq!(split_rows(0, 3), vec![0, 0, 0]);
        assert_eq!(split_rows(16, 4), vec![4, 4, 4, 4]);
        assert_eq!(split_rows(2, 1), vec![2]);
    }

    #[test]
    fn row_levels_cover_full_height() {
        assert_eq!(row_levels(43.0, 0.0, 100.0, 4), vec![4, 3, 0, 0]);
        assert_eq!(row_levels(100.0, 0.0, 100.0, 2), vec![4, 4]);
        assert_eq!(row_levels(-5.0, 0.0, 100.0, 2), vec![0, 0]);
    }
}
