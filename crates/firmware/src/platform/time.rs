//! Embassy-based time source implementation.

use ct_clamp_core::traits::TimeSource;

/// Monotonic clock backed by the Embassy time driver
#[derive(Clone, Copy, Default)]
pub struct EmbassyTime;

impl TimeSource for EmbassyTime {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }

    fn now_us(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}
