//! Dominant-mode propagation in a lossy rectangular waveguide.
//!
//! Models the in-building ducts and pipes of ITU-R P.2040 as rectangular
//! waveguides filled with a homogeneous lossy dielectric. Given the
//! cross-section and a complex relative permittivity (from the
//! `dielectric` or `materials` crates, or anywhere else), this computes
//! the TE10 cutoff, the complex propagation constant γ = α + jβ, and the
//! attenuation in dB/m.
//!
//! Operation below cutoff is a valid query: the mode is evanescent and
//! the result carries a dominant real α instead of failing.

mod error;

pub use crate::error::WaveguideError;
use num_complex::Complex64;
use std::f64::consts::PI;
use units::{db_from_np, Permittivity, SPEED_OF_LIGHT};

/// Interior cross-section of a rectangular waveguide, in meters.
///
/// `a` is the broad dimension, `b` the narrow one; both must be positive
/// with b < a.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    a_m: f64,
    b_m: f64,
}

impl Geometry {
    pub fn new(a_m: f64, b_m: f64) -> Result<Self, WaveguideError> {
        if !a_m.is_finite() || !b_m.is_finite() || a_m <= 0.0 || b_m <= 0.0 || b_m >= a_m {
            return Err(WaveguideError::InvalidGeometry { a_m, b_m });
        }
        Ok(Self { a_m, b_m })
    }

    #[must_use]
    pub fn a_m(&self) -> f64 {
        self.a_m
    }

    #[must_use]
    pub fn b_m(&self) -> f64 {
        self.b_m
    }

    /// TE10 cutoff frequency for a fill of the given permittivity,
    /// c/(2a√ε′).
    pub fn cutoff_hz(&self, fill: Permittivity) -> Result<f64, WaveguideError> {
        check_fill(fill)?;
        Ok(SPEED_OF_LIGHT / (2.0 * self.a_m * fill.real.sqrt()))
    }

    /// Complex propagation constant of the dominant mode at `f_hz`.
    ///
    /// γ = √(k_c² − k²) with k_c = π/a and k² = (2πf/c)²·(ε′ − jε″),
    /// taking the principal square root so that α ≥ 0 and β ≥ 0. For a
    /// lossless fill this reduces to the textbook branches: purely real γ
    /// below cutoff (evanescent), purely imaginary above.
    pub fn propagation(
        &self,
        fill: Permittivity,
        f_hz: f64,
    ) -> Result<Propagation, WaveguideError> {
        if !f_hz.is_finite() || f_hz <= 0.0 {
            return Err(WaveguideError::InvalidArgument("frequency must be > 0 Hz"));
        }
        let cutoff_hz = self.cutoff_hz(fill)?;

        let k_c = PI / self.a_m;
        let k0 = 2.0 * PI * f_hz / SPEED_OF_LIGHT;
        let gamma = (Complex64::new(k_c * k_c, 0.0) - fill.as_complex() * (k0 * k0)).sqrt();

        Ok(Propagation {
            cutoff_hz,
            alpha_np_per_m: gamma.re,
            beta_rad_per_m: gamma.im,
        })
    }
}

/// Dominant-mode propagation at one frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Propagation {
    /// TE10 cutoff of the filled guide, Hz.
    pub cutoff_hz: f64,

    /// Attenuation constant α, Np/m.
    pub alpha_np_per_m: f64,

    /// Phase constant β, rad/m.
    pub beta_rad_per_m: f64,
}

impl Propagation {
    /// α converted to dB/m (20/ln 10 ≈ 8.686 dB per neper).
    #[must_use]
    pub fn attenuation_db_per_m(&self) -> f64 {
        db_from_np(self.alpha_np_per_m)
    }
}

fn check_fill(fill: Permittivity) -> Result<(), WaveguideError> {
    if !fill.real.is_finite() || fill.real <= 0.0 {
        return Err(WaveguideError::InvalidArgument(
            "fill permittivity real part must be > 0",
        ));
    }
    if !fill.imag.is_finite() || fill.imag < 0.0 {
        return Err(WaveguideError::InvalidArgument(
            "fill permittivity imaginary part must be >= 0",
        ));
    }
    Ok(())
}
