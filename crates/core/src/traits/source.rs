//! Analog input abstraction.
//!
//! A source yields one scalar reading per call in raw sensor units. The
//! reading is `f32::NAN` when the converter has nothing valid to offer.

use heapless::Vec;

/// Maximum number of scripted readings held by [`MockAnalogSource`]
pub const MOCK_SCRIPT_LEN: usize = 256;

/// One-reading-per-call analog input.
pub trait AnalogSource {
    /// Take a single reading, or `f32::NAN` if none is available.
    fn sample(&mut self) -> f32;
}

impl<S: AnalogSource + ?Sized> AnalogSource for &mut S {
    fn sample(&mut self) -> f32 {
        (**self).sample()
    }
}

/// Scripted source for host tests.
///
/// Replays its readings in order and wraps around at the end.
#[derive(Debug, Clone)]
pub struct MockAnalogSource {
    readings: Vec<f32, MOCK_SCRIPT_LEN>,
    cursor: usize,
    calls: u32,
}

impl MockAnalogSource {
    /// Source that always returns `value`.
    pub fn constant(value: f32) -> Self {
        let mut readings = Vec::new();
        // Capacity is non-zero, the first push cannot fail.
        let _ = readings.push(value);
        Self {
            readings,
            cursor: 0,
            calls: 0,
        }
    }

    /// Source that replays `script` cyclically.
    ///
    /// Readings beyond [`MOCK_SCRIPT_LEN`] are dropped. An empty script
    /// behaves like a source that never has a valid reading.
    pub fn from_slice(script: &[f32]) -> Self {
        let len = script.len().min(MOCK_SCRIPT_LEN);
        let mut readings = Vec::new();
        for &value in &script[..len] {
            let _ = readings.push(value);
        }
        Self {
            readings,
            cursor: 0,
            calls: 0,
        }
    }

    /// Number of times `sample` was called.
    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl AnalogSource for MockAnalogSource {
    fn sample(&mut self) -> f32 {
        self.calls = self.calls.saturating_add(1);
        if self.readings.is_empty() {
            return f32::NAN;
        }
        let value = self.readings[self.cursor];
        self.cursor = (self.cursor + 1) % self.readings.len();
        value
    }
}
