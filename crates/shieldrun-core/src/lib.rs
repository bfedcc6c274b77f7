//! # ShieldRun Core Library
//!
//! Core functionality for processing shield run thermocouple logs.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Type K thermocouple voltage to temperature conversion (NIST ITS-90)
//! - Sensor log loading with an elapsed-time axis and normalized column names
//! - Temperature unit conversion
//! - Processing configuration files
//!
//! ## Example
//!
//! ```rust,ignore
//! use shieldrun_core::{datalog::load_tc_data, thermocouple::voltage_to_temp_type_k};
//!
//! let (time_s, log) = load_tc_data("shield_run.csv")?;
//! let mv: Vec<f64> = log
//!     .column_f64("V_TC_mV")
//!     .unwrap_or_default()
//!     .into_iter()
//!     .map(|v| v.unwrap_or(f64::NAN))
//!     .collect();
//! let temps = voltage_to_temp_type_k(&mv)?;
//! ```

pub mod config;
pub mod datalog;
pub mod thermocouple;
pub mod unit_conversion;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ConfigError, ProcessingConfig};
    pub use crate::datalog::{load_tc_data, LoadOptions, LogError, SensorLog};
    pub use crate::thermocouple::{
        mv_to_temp_c, voltage_to_temp_type_k, ConversionError, Segment,
    };
    pub use crate::unit_conversion::TemperatureUnit;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
