#![cfg_attr(not(test), no_std)]

//! ct_clamp_firmware - Firmware glue for the CT clamp current sensor
//!
//! This crate drives the pure logic in `ct_clamp_core` from a cooperative
//! loop and, with the `embassy` feature, binds it to the Embassy time
//! driver and async executor.
//!
//! # Design Principles
//!
//! - **One loop**: trigger, ticks and deadline all run on the caller's task
//! - **Platform implementations**: TimeSource and publish sink bindings
//! - **Logging**: `log_*!` macros routed to defmt or the test console

// Logging macros and re-exports of the core crate
pub mod core;

// Loop-driven sensor components
pub mod devices;

// Embassy time source
pub mod platform;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
