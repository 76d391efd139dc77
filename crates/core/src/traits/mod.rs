//! Collaborator traits for the current sensor core.
//!
//! The sampler talks to its surroundings only through these traits so the
//! whole window/RMS cycle runs on the host with mocks.
//!
//! - [`TimeSource`]: monotonic clock ([`MockTime`] for tests)
//! - [`AnalogSource`]: one reading per call ([`MockAnalogSource`] for tests)
//! - [`PublishSink`]: receives the per-window result ([`SensorState`])

pub mod sink;
pub mod source;
pub mod time;

pub use sink::{PublishSink, SensorState};
pub use source::{AnalogSource, MockAnalogSource, MOCK_SCRIPT_LEN};
pub use time::{MockTime, TimeSource};
