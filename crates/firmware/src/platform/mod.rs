//! Platform bindings
//!
//! Only compiled in with the `embassy` feature; host builds drive the core
//! with `MockTime` instead.

#[cfg(feature = "embassy")]
pub mod time;

#[cfg(feature = "embassy")]
pub use time::EmbassyTime;
