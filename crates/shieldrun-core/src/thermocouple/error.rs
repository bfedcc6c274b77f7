//! Conversion errors

use thiserror::Error;

/// Errors that can occur while converting thermocouple voltages
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    #[error("Voltage {mv} mV out of valid Type K range (-5.891 to 54.886 mV)")]
    OutOfRange { mv: f64 },
}
