//! Monotonic time abstraction for the sampling loop.
//!
//! The sampler only ever needs "now" in microseconds and the distance to an
//! earlier timestamp. Firmware supplies an Embassy-backed implementation;
//! host tests drive [`MockTime`] by hand.

use core::cell::Cell;

/// Platform-agnostic monotonic clock.
///
/// # Example
///
/// ```
/// use ct_clamp_core::traits::{MockTime, TimeSource};
///
/// fn adc_ready<T: TimeSource>(time: &T, last_sample_us: u64) -> bool {
///     time.elapsed_since(last_sample_us) >= 550
/// }
///
/// let time = MockTime::with_initial(1_000);
/// assert!(!adc_ready(&time, 600));
/// time.advance(200);
/// assert!(adc_ready(&time, 600));
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Microseconds since system start.
    fn now_us(&self) -> u64;

    /// Microseconds elapsed since `reference_us`.
    ///
    /// Saturates at zero if the reference lies in the future.
    fn elapsed_since(&self, reference_us: u64) -> u64 {
        self.now_us().saturating_sub(reference_us)
    }
}

/// Hand-driven clock for host tests.
#[derive(Clone, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

// Safety: MockTime is only used from single-threaded host tests.
// TimeSource requires Send + Sync for the Embassy implementation.
unsafe impl Send for MockTime {}
unsafe impl Sync for MockTime {}

impl MockTime {
    /// Clock starting at 0 µs.
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Clock starting at `us`.
    pub fn with_initial(us: u64) -> Self {
        Self {
            current_us: Cell::new(us),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, us: u64) {
        self.current_us.set(us);
    }

    /// Move forward by `us` microseconds.
    pub fn advance(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }

    /// Move forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(ms * 1_000);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_us.get() / 1_000
    }

    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}
