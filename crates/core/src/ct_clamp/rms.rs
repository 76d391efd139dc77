//! AC/DC separation from first- and second-order sums.
//!
//! With `n` samples, `sum` and `sum_of_squares`:
//!
//! ```text
//! mean        = sum / n                (DC offset)
//! mean_square = sum_of_squares / n     (AC+DC power)
//! ac_square   = mean_square - mean^2   (AC power)
//! ```
//!
//! Rounding can push `ac_square` slightly below zero for a DC-only signal,
//! so both square roots clamp non-positive arguments to zero.

use libm::sqrtf;

/// Result of decomposing one window's sums
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RmsDecomposition {
    /// DC component
    pub mean: f32,
    /// Mean of squared readings (squared RMS including DC)
    pub mean_square: f32,
    /// RMS of the AC component, the published value
    pub ac_rms: f32,
    /// RMS of the raw signal including DC, diagnostic only
    pub raw_rms: f32,
}

impl RmsDecomposition {
    /// Decompose accumulated sums. `None` when `count` is zero.
    pub fn from_sums(sum: f32, sum_of_squares: f32, count: u32) -> Option<Self> {
        if count == 0 {
            return None;
        }

        let n = count as f32;
        let mean_square = sum_of_squares / n;
        let mean = sum / n;
        let ac_square = mean_square - mean * mean;

        Some(Self {
            mean,
            mean_square,
            ac_rms: clamped_sqrt(ac_square),
            raw_rms: clamped_sqrt(mean_square),
        })
    }
}

/// `sqrt(max(0, x))`, also mapping NaN to zero
#[inline]
fn clamped_sqrt(x: f32) -> f32 {
    if x > 0.0 {
        sqrtf(x)
    } else {
        0.0
    }
}
