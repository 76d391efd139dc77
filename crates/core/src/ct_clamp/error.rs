//! Sensor error types

use core::fmt;

use super::config::ConfigError;
use crate::parameters::ParameterError;
use crate::scheduler::SchedulerError;

/// Errors surfaced by the clamp sensor outside the sampling path
///
/// Missing readings, empty windows and rounding below zero are absorbed by
/// the sampler and never show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Configuration rejected at construction
    Config(ConfigError),
    /// Parameter store access failed
    Parameter(ParameterError),
    /// Deadline for the window could not be armed
    Scheduler(SchedulerError),
}

impl SensorError {
    /// Short static description, for log backends without `Display`
    pub const fn as_str(&self) -> &'static str {
        match self {
            SensorError::Config(_) => "invalid configuration",
            SensorError::Parameter(_) => "parameter error",
            SensorError::Scheduler(SchedulerError::QueueFull) => "timeout queue full",
        }
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Config(e) => write!(f, "invalid configuration: {}", e),
            SensorError::Parameter(e) => write!(f, "parameter error: {}", e),
            SensorError::Scheduler(e) => write!(f, "scheduler error: {}", e),
        }
    }
}

impl From<ConfigError> for SensorError {
    fn from(e: ConfigError) -> Self {
        SensorError::Config(e)
    }
}

impl From<ParameterError> for SensorError {
    fn from(e: ParameterError) -> Self {
        SensorError::Parameter(e)
    }
}

impl From<SchedulerError> for SensorError {
    fn from(e: SchedulerError) -> Self {
        SensorError::Scheduler(e)
    }
}
