//! Type K inverse polynomials (NIST ITS-90)
//!
//! Converts thermocouple EMF in millivolts to temperature in degrees Celsius.

use serde::{Deserialize, Serialize};

use super::error::ConversionError;
use super::polynomial::evaluate_poly;

/// Lowest accepted voltage (mV), 0.001 mV below the tabulated minimum
pub const MIN_MV: f64 = -5.892;

/// Highest accepted voltage (mV), 0.001 mV above the tabulated maximum
pub const MAX_MV: f64 = 54.887;

/// Boundary between the `Low` and `High` segments (mV)
pub const HIGH_SEGMENT_START_MV: f64 = 20.644;

/// -5.891 mV to 0 mV (-200 °C to 0 °C)
static NEGATIVE_COEFFS: [f64; 9] = [
    0.0e0,
    2.5173462e1,
    -1.1662878e0,
    -1.0833638e0,
    -8.977354e-1,
    -3.7342377e-1,
    -8.6632643e-2,
    -1.0450598e-2,
    -5.1920577e-4,
];

/// 0 mV to 20.644 mV (0 °C to 500 °C)
static LOW_COEFFS: [f64; 10] = [
    0.0e0,
    2.508355e1,
    7.860106e-2,
    -2.503131e-1,
    8.31527e-2,
    -1.228034e-2,
    9.804036e-4,
    -4.41303e-5,
    1.057734e-6,
    -1.052755e-8,
];

/// 20.644 mV to 54.886 mV (500 °C to 1372 °C)
static HIGH_COEFFS: [f64; 7] = [
    -1.318058e2,
    4.830222e1,
    -1.646031e0,
    5.464731e-2,
    -9.650715e-4,
    8.802193e-6,
    -3.11081e-8,
];

/// One of the three voltage sub-ranges of the Type K inverse function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Below 0 mV
    Negative,
    /// 0 mV up to (excluding) 20.644 mV
    Low,
    /// 20.644 mV and above
    High,
}

impl Segment {
    /// All segments in ascending voltage order
    pub const ALL: [Segment; 3] = [Segment::Negative, Segment::Low, Segment::High];

    /// Coefficients `[a0, .., an]` in ascending power order
    pub fn coefficients(&self) -> &'static [f64] {
        match self {
            Segment::Negative => &NEGATIVE_COEFFS,
            Segment::Low => &LOW_COEFFS,
            Segment::High => &HIGH_COEFFS,
        }
    }

    /// Nominal (tabulated) voltage span of this segment in mV
    pub fn nominal_range(&self) -> (f64, f64) {
        match self {
            Segment::Negative => (-5.891, 0.0),
            Segment::Low => (0.0, HIGH_SEGMENT_START_MV),
            Segment::High => (HIGH_SEGMENT_START_MV, 54.886),
        }
    }
}

/// Select the polynomial segment for a voltage.
///
/// Fails if `mv` lies outside `[MIN_MV, MAX_MV]`. Values are never clamped.
pub fn select_segment(mv: f64) -> Result<Segment, ConversionError> {
    if mv < MIN_MV || mv > MAX_MV {
        return Err(ConversionError::OutOfRange { mv });
    }

    // NaN passes the window check and lands in `High`
    if mv < 0.0 {
        Ok(Segment::Negative)
    } else if mv < HIGH_SEGMENT_START_MV {
        Ok(Segment::Low)
    } else {
        Ok(Segment::High)
    }
}

/// Select the inverse polynomial coefficients for a voltage in mV
pub fn volts_to_temp_constants(mv: f64) -> Result<&'static [f64], ConversionError> {
    select_segment(mv).map(|segment| segment.coefficients())
}

/// Convert a Type K thermocouple voltage (mV) to temperature (°C)
pub fn mv_to_temp_c(mv: f64) -> Result<f64, ConversionError> {
    let coeffs = volts_to_temp_constants(mv)?;
    Ok(evaluate_poly(coeffs, mv))
}

/// Convert a sequence of voltages (mV) to temperatures (°C).
///
/// Output order matches input order. The first out-of-range voltage fails
/// the whole batch and no partial results are returned.
pub fn voltage_to_temp_type_k(voltages_mv: &[f64]) -> Result<Vec<f64>, ConversionError> {
    let temps = voltages_mv
        .iter()
        .enumerate()
        .map(|(index, &mv)| {
            mv_to_temp_c(mv).inspect_err(|e| {
                tracing::debug!("Batch conversion stopped at sample {index}: {e}");
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Converted {} Type K samples", temps.len());
    Ok(temps)
}
