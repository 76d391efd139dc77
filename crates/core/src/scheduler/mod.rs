//! Cooperative scheduler services consumed by sensor components
//!
//! Nothing here runs tasks. These are the pieces a single-threaded host
//! loop owns and lends to components:
//!
//! - [`timeout`]: named one-shot deferred callbacks keyed by component handle
//! - [`high_freq`]: "poll me often" requests held while a window is open
//! - [`types`]: handles, timeout identifiers and errors
//!
//! # Example
//!
//! ```rust
//! use ct_clamp_core::scheduler::{ComponentId, TimeoutId, TimeoutQueue, TimeoutScheduler};
//!
//! let clamp = ComponentId::new(0).unwrap();
//! let mut queue = TimeoutQueue::<4>::new();
//! queue.set_timeout(clamp, TimeoutId::CloseWindow, 200, 0).unwrap();
//!
//! assert_eq!(queue.pop_expired(199_999), None);
//! assert_eq!(queue.pop_expired(200_000), Some((clamp, TimeoutId::CloseWindow)));
//! ```

pub mod high_freq;
pub mod timeout;
pub mod types;

pub use high_freq::{HighFrequencyLoop, HighFrequencyRequest, HIGH_FREQUENCY_POLL_US};
pub use timeout::{TimeoutQueue, TimeoutScheduler};
pub use types::{ComponentId, SchedulerError, TimeoutId, MAX_COMPONENTS};
