//! Firmware-side core services
//!
//! Logging lives here; pure sensor logic is re-exported from
//! `ct_clamp_core` so firmware code can reach both through `crate::core`.

pub mod logging;

pub use ct_clamp_core::ct_clamp;
pub use ct_clamp_core::parameters;
pub use ct_clamp_core::scheduler;
pub use ct_clamp_core::traits;
