//! Current-transformer clamp sensor
//!
//! Samples an analog source over a fixed window and publishes the RMS of
//! the signal's AC component, with the DC bias removed.
//!
//! - [`sensor`]: window controller and per-tick sample accumulator
//! - [`window`]: accumulator state for one window
//! - [`rms`]: AC/DC decomposition of the accumulated sums
//! - [`config`]: window length, trigger period, overlap policy

pub mod config;
pub mod error;
pub mod rms;
pub mod sensor;
pub mod window;

pub use config::{
    ConfigError, CtClampConfig, OverlapPolicy, DEFAULT_SAMPLE_DURATION_MS,
    DEFAULT_UPDATE_INTERVAL_MS,
};
pub use error::SensorError;
pub use rms::RmsDecomposition;
pub use sensor::{CtClampSensor, SamplerState, TickOutcome, WindowReport, WindowStart};
pub use window::{SamplingWindow, MIN_SAMPLE_INTERVAL_US};
