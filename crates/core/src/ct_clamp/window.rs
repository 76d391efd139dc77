//! Per-window sample accumulator.

use super::rms::RmsDecomposition;

/// Minimum spacing between accepted samples (µs)
///
/// Covers the settling and conversion time of the ADC behind the source.
pub const MIN_SAMPLE_INTERVAL_US: u64 = 550;

/// Running first- and second-order sums for one sampling window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingWindow {
    is_sampling: bool,
    duration_ms: u32,
    /// `None` until the first sample of the window is accepted
    last_sample_us: Option<u64>,
    sample_count: u32,
    sum: f32,
    sum_of_squares: f32,
}

impl SamplingWindow {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            is_sampling: false,
            duration_ms,
            last_sample_us: None,
            sample_count: 0,
            sum: 0.0,
            sum_of_squares: 0.0,
        }
    }

    /// Reset all accumulators and start sampling
    pub fn open(&mut self) {
        self.last_sample_us = None;
        self.sample_count = 0;
        self.sum = 0.0;
        self.sum_of_squares = 0.0;
        self.is_sampling = true;
    }

    /// Stop sampling; accumulators are kept for inspection until the next `open`
    pub fn close(&mut self) {
        self.is_sampling = false;
    }

    /// Whether the ADC has had time to settle since the last accepted sample
    pub fn is_ready(&self, now_us: u64) -> bool {
        match self.last_sample_us {
            Some(last) => now_us.saturating_sub(last) >= MIN_SAMPLE_INTERVAL_US,
            None => true,
        }
    }

    /// Fold one valid reading into the sums
    pub fn accept(&mut self, now_us: u64, value: f32) {
        self.last_sample_us = Some(now_us);
        self.sample_count = self.sample_count.saturating_add(1);
        self.sum += value;
        self.sum_of_squares += value * value;
    }

    /// Decompose the current sums, `None` for an empty window
    pub fn decompose(&self) -> Option<RmsDecomposition> {
        RmsDecomposition::from_sums(self.sum, self.sum_of_squares, self.sample_count)
    }

    /// Achieved sample rate over the configured window length
    pub fn samples_per_second(&self) -> u32 {
        let sps = 1_000u64 * u64::from(self.sample_count) / u64::from(self.duration_ms.max(1));
        sps.min(u64::from(u32::MAX)) as u32
    }

    pub fn is_sampling(&self) -> bool {
        self.is_sampling
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn last_sample_us(&self) -> Option<u64> {
        self.last_sample_us
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn sum(&self) -> f32 {
        self.sum
    }

    pub fn sum_of_squares(&self) -> f32 {
        self.sum_of_squares
    }
}
