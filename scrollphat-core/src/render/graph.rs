//! Bar graph rendering
//!
//! Each sample becomes one column whose lit rows fill up from the bottom
//! of the panel. Samples are scaled linearly between `low` and `high`
//! (defaulting to the minimum and maximum of the samples) onto 0..=5
//! and truncated toward zero.

use crate::framebuffer::FrameBuffer;
use scrollphat_protocol::HEIGHT;

/// Fill level used when `high == low`
pub const DEGENERATE_LEVEL: i32 = HEIGHT as i32;

/// Bitmask for a fill level, lit from the bottom row up
///
/// Levels 0 and 1 are both blank; level 5 and above is a full column.
///
/// | level | bits    |
/// |-------|---------|
/// | ≤ 1   | `00000` |
/// | 2     | `10000` |
/// | 3     | `11000` |
/// | 4     | `11100` |
/// | ≥ 5   | `11111` |
pub const fn fill_bits(level: i32) -> u8 {
    match level {
        i32::MIN..=1 => 0b00000,
        2 => 0b10000,
        3 => 0b11000,
        4 => 0b11100,
        _ => 0b11111,
    }
}

/// Scale `value` into a fill level
///
/// A zero span maps every sample to a full column. Scaling runs in
/// double precision so samples on a tier boundary land on it exactly.
pub fn scale(value: f64, low: f64, high: f64) -> i32 {
    let span = high - low;
    if span == 0.0 {
        return DEGENERATE_LEVEL;
    }
    // `as` truncates toward zero and saturates; NaN becomes 0
    (((value - low) / span) * HEIGHT as f64) as i32
}

/// Render `values` as a bar graph starting at column 0
///
/// `low` and `high` default to the minimum and maximum of `values`.
/// Returns the number of columns written.
pub fn graph(
    buffer: &mut FrameBuffer,
    values: &[f64],
    low: Option<f64>,
    high: Option<f64>,
) -> usize {
    let low = low.unwrap_or_else(|| values.iter().copied().fold(f64::INFINITY, f64::min));
    let high = high.unwrap_or_else(|| values.iter().copied().fold(f64::NEG_INFINITY, f64::max));

    for (x, &value) in values.iter().enumerate() {
        buffer.set_col(x, fill_bits(scale(value, low, high)));
    }

    values.len()
}
