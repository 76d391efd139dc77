//! Sensor components built on the core sensor logic

pub mod ct_clamp;

pub use ct_clamp::{CtClampComponent, CT_CLAMP_TIMEOUT_SLOTS};
