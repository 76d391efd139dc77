//! Sensor configuration and its validation.

use core::fmt;

/// Default sampling window length (ms)
pub const DEFAULT_SAMPLE_DURATION_MS: u32 = 200;

/// Default period between sampling windows (ms)
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 60_000;

/// What to do when the periodic trigger fires while a window is still open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Discard the open window and start over, re-arming its deadline
    #[default]
    Restart = 0,
    /// Leave the open window alone and drop the trigger
    Skip = 1,
}

impl OverlapPolicy {
    /// Convert from parameter value, unknown values map to `Restart`
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Self::Skip,
            _ => Self::Restart,
        }
    }
}

/// Static configuration of one clamp sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtClampConfig {
    /// Length of each sampling window (ms)
    pub sample_duration_ms: u32,
    /// Period of the trigger that opens windows (ms)
    pub update_interval_ms: u32,
    /// Handling of a trigger that arrives mid-window
    pub overlap: OverlapPolicy,
}

impl Default for CtClampConfig {
    fn default() -> Self {
        Self {
            sample_duration_ms: DEFAULT_SAMPLE_DURATION_MS,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            overlap: OverlapPolicy::Restart,
        }
    }
}

impl CtClampConfig {
    /// Check that every window can close before the next trigger
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_duration_ms == 0 {
            return Err(ConfigError::ZeroSampleDuration);
        }
        if self.update_interval_ms == 0 {
            return Err(ConfigError::ZeroUpdateInterval);
        }
        if self.update_interval_ms < self.sample_duration_ms {
            return Err(ConfigError::UpdateIntervalTooShort {
                update_interval_ms: self.update_interval_ms,
                sample_duration_ms: self.sample_duration_ms,
            });
        }
        Ok(())
    }

    /// Sample duration in seconds, for display
    pub fn sample_duration_s(&self) -> f32 {
        self.sample_duration_ms as f32 / 1e3
    }
}

/// Invalid sensor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Sample duration of 0 ms
    ZeroSampleDuration,
    /// Update interval of 0 ms
    ZeroUpdateInterval,
    /// Trigger period shorter than the window, so windows would never close
    UpdateIntervalTooShort {
        update_interval_ms: u32,
        sample_duration_ms: u32,
    },
    /// Parameter value outside the representable range
    OutOfRange { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSampleDuration => write!(f, "sample duration must be non-zero"),
            ConfigError::ZeroUpdateInterval => write!(f, "update interval must be non-zero"),
            ConfigError::UpdateIntervalTooShort {
                update_interval_ms,
                sample_duration_ms,
            } => write!(
                f,
                "update interval {} ms is shorter than sample duration {} ms",
                update_interval_ms, sample_duration_ms
            ),
            ConfigError::OutOfRange { name } => write!(f, "parameter {} out of range", name),
        }
    }
}
