//! ct_clamp_core - Pure no_std logic for current-transformer clamp sensors
//!
//! Windowed sampling of an analog input and AC RMS estimation, with every
//! platform service injected through traits so the full cycle runs on the
//! host.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Clock, ADC, scheduler and sink are injected
//!
//! # Modules
//!
//! - [`ct_clamp`]: Sensor, sampling window and RMS decomposition
//! - [`scheduler`]: Deferred timeouts and high-frequency loop requests
//! - [`parameters`]: Parameter store and CT clamp parameter group
//! - [`traits`]: Clock, analog source and publish sink abstractions
//!
//! # Example
//!
//! ```
//! use ct_clamp_core::ct_clamp::{CtClampConfig, CtClampSensor};
//! use ct_clamp_core::scheduler::{ComponentId, HighFrequencyLoop, TimeoutQueue};
//! use ct_clamp_core::traits::{MockAnalogSource, MockTime, SensorState, TimeSource};
//!
//! let time = MockTime::new();
//! let mut queue = TimeoutQueue::<4>::new();
//! let mut high_freq = HighFrequencyLoop::new();
//! let mut state = SensorState::new();
//!
//! let id = ComponentId::new(0).unwrap();
//! let source = MockAnalogSource::from_slice(&[1.0, -1.0]);
//! let mut clamp = CtClampSensor::new(id, CtClampConfig::default(), source).unwrap();
//!
//! clamp.update(time.now_us(), &mut queue, &mut high_freq).unwrap();
//! for _ in 0..100 {
//!     clamp.tick(&time);
//!     time.advance(600);
//! }
//! time.advance_ms(200);
//! while let Some((_, fired)) = queue.pop_expired(time.now_us()) {
//!     clamp.on_timeout(fired, &mut high_freq, &mut state);
//! }
//!
//! assert_eq!(state.value(), 1.0);
//! ```

#![no_std]

pub mod ct_clamp;
pub mod parameters;
pub mod scheduler;
pub mod traits;
