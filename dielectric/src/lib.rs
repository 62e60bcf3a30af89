//! Complex relative permittivity of water and soil.
//!
//! Implements the frequency-dependent permittivity models of ITU-R
//! Recommendation P.527-4, *Electrical characteristics of the surface of
//! the Earth*: the double-Debye model for fresh and sea water, and the
//! dielectric mixing model for moist soil characterized by its sand, clay
//! and silt fractions.
//!
//! All frequencies are Hz, temperatures °C, salinities g/kg (‰). Inputs
//! outside the Recommendation's applicability band are rejected rather
//! than extrapolated.

mod error;
mod soil;
mod water;

pub use crate::{
    error::DielectricError,
    soil::{soil_permittivity, SoilComposition, SoilTexture},
    water::{fresh_water_permittivity, sea_water_permittivity, water_permittivity},
};

/// Lower frequency bound of the P.527 models, Hz.
pub const FREQ_MIN_HZ: f64 = 1e6;

/// Upper frequency bound of the P.527 models, Hz.
pub const FREQ_MAX_HZ: f64 = 1e12;

/// Supported temperature range, °C.
pub const TEMP_RANGE_C: (f64, f64) = (0.0, 30.0);

/// Supported salinity range, g/kg.
pub const SALINITY_RANGE_PPT: (f64, f64) = (0.0, 40.0);

pub(crate) fn check_frequency(f_hz: f64) -> Result<(), DielectricError> {
    if !f_hz.is_finite() || f_hz <= 0.0 {
        return Err(DielectricError::InvalidArgument("frequency must be > 0 Hz"));
    }
    if !(FREQ_MIN_HZ..=FREQ_MAX_HZ).contains(&f_hz) {
        return Err(DielectricError::OutOfValidityRange {
            quantity: "frequency (Hz)",
            value: f_hz,
            min: FREQ_MIN_HZ,
            max: FREQ_MAX_HZ,
        });
    }
    Ok(())
}

pub(crate) fn check_temperature(temp_c: f64) -> Result<(), DielectricError> {
    if !temp_c.is_finite() {
        return Err(DielectricError::InvalidArgument("temperature must be finite"));
    }
    let (min, max) = TEMP_RANGE_C;
    if !(min..=max).contains(&temp_c) {
        return Err(DielectricError::OutOfValidityRange {
            quantity: "temperature (°C)",
            value: temp_c,
            min,
            max,
        });
    }
    Ok(())
}
