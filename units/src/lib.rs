//! Canonical units and shared value types for the propagation crates.
//!
//! Every cross-crate call in this workspace exchanges values already in
//! canonical SI units: frequency in Hz, distance in meters, temperature
//! in degrees Celsius. The helpers here exist for callers converting at
//! the boundary; the model crates themselves never reinterpret units.

mod permittivity;
mod sweep;

pub use crate::{permittivity::Permittivity, sweep::linspace};

/// Speed of light in m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Vacuum permittivity in F/m.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Nepers to decibels, 20/ln(10).
pub const DB_PER_NEPER: f64 = 8.685_889_638_065_035;

/// Converts GHz to Hz.
#[must_use]
pub const fn ghz_to_hz(f_ghz: f64) -> f64 {
    f_ghz * 1e9
}

/// Converts Hz to GHz.
#[must_use]
pub const fn hz_to_ghz(f_hz: f64) -> f64 {
    f_hz / 1e9
}

/// Converts MHz to Hz.
#[must_use]
pub const fn mhz_to_hz(f_mhz: f64) -> f64 {
    f_mhz * 1e6
}

/// Converts an attenuation constant in Np/m (or any neper quantity) to dB.
#[must_use]
pub fn db_from_np(nepers: f64) -> f64 {
    nepers * DB_PER_NEPER
}

/// Free-space wavelength in meters for a frequency in Hz.
#[must_use]
pub fn wavelength_m(f_hz: f64) -> f64 {
    SPEED_OF_LIGHT / f_hz
}
