//! CT Clamp Parameter Definitions
//!
//! # Parameters
//!
//! - `CT_SAMPLE_MS` - Sampling window length (ms, default 200)
//! - `CT_UPDATE_MS` - Period between windows (ms, default 60000)
//! - `CT_OVERLAP` - Trigger during an open window: 0 = restart, 1 = skip

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use crate::ct_clamp::{
    ConfigError, CtClampConfig, OverlapPolicy, DEFAULT_SAMPLE_DURATION_MS,
    DEFAULT_UPDATE_INTERVAL_MS,
};

/// CT clamp parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtClampParams {
    /// Sampling window length (ms)
    pub sample_ms: i32,
    /// Period between windows (ms)
    pub update_ms: i32,
    /// Overlap policy discriminant
    pub overlap: i32,
}

impl CtClampParams {
    /// Register CT clamp parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "CT_SAMPLE_MS",
            ParamValue::Int(DEFAULT_SAMPLE_DURATION_MS as i32),
            ParamFlags::empty(),
        )?;
        store.register(
            "CT_UPDATE_MS",
            ParamValue::Int(DEFAULT_UPDATE_INTERVAL_MS as i32),
            ParamFlags::empty(),
        )?;
        store.register(
            "CT_OVERLAP",
            ParamValue::Int(OverlapPolicy::Restart as i32),
            ParamFlags::empty(),
        )?;
        Ok(())
    }

    /// Load CT clamp parameters, falling back to defaults for missing entries
    pub fn from_store(store: &ParameterStore) -> Self {
        let sample_ms = store
            .get("CT_SAMPLE_MS")
            .map(ParamValue::as_i32)
            .unwrap_or(DEFAULT_SAMPLE_DURATION_MS as i32);

        let update_ms = store
            .get("CT_UPDATE_MS")
            .map(ParamValue::as_i32)
            .unwrap_or(DEFAULT_UPDATE_INTERVAL_MS as i32);

        let overlap = store
            .get("CT_OVERLAP")
            .map(ParamValue::as_i32)
            .unwrap_or(OverlapPolicy::Restart as i32);

        Self {
            sample_ms,
            update_ms,
            overlap,
        }
    }

    /// Convert to a validated sensor configuration
    pub fn to_config(&self) -> Result<CtClampConfig, ConfigError> {
        let sample_duration_ms = u32::try_from(self.sample_ms).map_err(|_| {
            ConfigError::OutOfRange {
                name: "CT_SAMPLE_MS",
            }
        })?;
        let update_interval_ms = u32::try_from(self.update_ms).map_err(|_| {
            ConfigError::OutOfRange {
                name: "CT_UPDATE_MS",
            }
        })?;

        let config = CtClampConfig {
            sample_duration_ms,
            update_interval_ms,
            overlap: OverlapPolicy::from_i32(self.overlap),
        };
        config.validate()?;
        Ok(config)
    }
}
