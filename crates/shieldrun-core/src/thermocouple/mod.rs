//! Thermocouple Conversion
//!
//! Converts Type K thermocouple voltages (mV) to temperatures (°C) with the
//! NIST ITS-90 piecewise inverse polynomials.
//!
//! The accepted window is `[-5.892, 54.887]` mV, split into three segments
//! at 0 mV and 20.644 mV. Each segment has its own coefficient table.

mod error;
mod polynomial;
mod type_k;

pub use error::ConversionError;
pub use polynomial::evaluate_poly;
pub use type_k::{
    mv_to_temp_c, select_segment, voltage_to_temp_type_k, volts_to_temp_constants, Segment,
    HIGH_SEGMENT_START_MV, MAX_MV, MIN_MV,
};
