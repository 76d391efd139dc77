//! Parameter management
//!
//! Name/value store plus typed parameter groups. Persistence is left to
//! the firmware.

pub mod ct_clamp;
pub mod error;
pub mod storage;

pub use ct_clamp::CtClampParams;
pub use error::ParameterError;
pub use storage::{ParamFlags, ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};
