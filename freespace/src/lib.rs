//! Free-space attenuation and field-strength conversions.
//!
//! Implements ITU-R Recommendation P.525, *Calculation of free-space
//! attenuation*: the Friis path-loss formula plus the companion
//! conversions between EIRP, electric field strength, and power flux
//! density at a distance from a transmitter. Strictly valid for
//! propagation in vacuum only.

mod error;

pub use crate::error::FreespaceError;
use std::f64::consts::PI;
use units::{SPEED_OF_LIGHT, VACUUM_PERMITTIVITY};

/// Free-space path loss in dB: 20·log₁₀(4π·d·f/c).
pub fn free_space_loss(f_hz: f64, distance_m: f64) -> Result<f64, FreespaceError> {
    if !f_hz.is_finite() || f_hz <= 0.0 {
        return Err(FreespaceError::InvalidArgument("frequency must be > 0 Hz"));
    }
    if !distance_m.is_finite() || distance_m <= 0.0 {
        return Err(FreespaceError::InvalidArgument("distance must be > 0 m"));
    }
    Ok(20.0 * (4.0 * PI * distance_m * f_hz / SPEED_OF_LIGHT).log10())
}

/// Transmitter EIRP in one of the conventional power units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eirp {
    Dbw(f64),
    Dbm(f64),
    Watts(f64),
    Milliwatts(f64),
}

impl Eirp {
    /// Normalizes to dBW.
    pub fn dbw(&self) -> Result<f64, FreespaceError> {
        let dbw = match *self {
            Self::Dbw(p) => p,
            Self::Dbm(p) => p - 30.0,
            Self::Watts(w) => {
                if w <= 0.0 {
                    return Err(FreespaceError::InvalidArgument("power must be > 0 W"));
                }
                10.0 * w.log10()
            }
            Self::Milliwatts(mw) => {
                if mw <= 0.0 {
                    return Err(FreespaceError::InvalidArgument("power must be > 0 mW"));
                }
                10.0 * (mw / 1e3).log10()
            }
        };
        if !dbw.is_finite() {
            return Err(FreespaceError::InvalidArgument("power must be finite"));
        }
        Ok(dbw)
    }
}

/// Electric field strength in dBµV/m at `distance_m` from a transmitter
/// of the given EIRP.
pub fn field_strength_at(eirp: Eirp, distance_m: f64) -> Result<f64, FreespaceError> {
    if !distance_m.is_finite() || distance_m <= 0.0 {
        return Err(FreespaceError::InvalidArgument("distance must be > 0 m"));
    }
    Ok(eirp.dbw()? - 20.0 * (distance_m / 1e3).log10() + 74.8)
}

/// Power flux density in dBW/m² at `distance_m` from a transmitter of
/// the given EIRP.
pub fn power_flux_at(eirp: Eirp, distance_m: f64) -> Result<f64, FreespaceError> {
    Ok(field_strength_at(eirp, distance_m)? - 145.8)
}

/// Electric field amplitude in V/m carrying an average power flux of
/// `w_per_m2`.
pub fn field_strength_from_power_flux(w_per_m2: f64) -> Result<f64, FreespaceError> {
    if !w_per_m2.is_finite() || w_per_m2 < 0.0 {
        return Err(FreespaceError::InvalidArgument("power flux must be >= 0 W/m²"));
    }
    Ok((2.0 * w_per_m2 / (SPEED_OF_LIGHT * VACUUM_PERMITTIVITY)).sqrt())
}

/// Average power flux in W/m² of an electric field with amplitude
/// `v_per_m`; the Poynting relation.
#[must_use]
pub fn power_flux_from_field_strength(v_per_m: f64) -> f64 {
    0.5 * SPEED_OF_LIGHT * VACUUM_PERMITTIVITY * v_per_m.abs().powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_free_space_loss() {
        assert_relative_eq!(
            free_space_loss(2.4e9, 10.0).unwrap(),
            60.052_008_056_115,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            free_space_loss(2.4e9, 100.0).unwrap(),
            80.052_008_056_115,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            free_space_loss(900e6, 1000.0).unwrap(),
            91.532_633_410_670,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_doubling_distance_adds_six_db() {
        let near = free_space_loss(2.4e9, 10.0).unwrap();
        let far = free_space_loss(2.4e9, 20.0).unwrap();
        assert_relative_eq!(far - near, 20.0 * 2f64.log10(), epsilon = 1e-9);
    }

    #[test]
    fn test_monotonic_in_frequency_and_distance() {
        let base = free_space_loss(2.4e9, 10.0).unwrap();
        assert!(free_space_loss(4.8e9, 10.0).unwrap() > base);
        assert!(free_space_loss(2.4e9, 11.0).unwrap() > base);
    }

    #[test]
    fn test_rejects_non_physical_inputs() {
        assert!(matches!(
            free_space_loss(0.0, 10.0),
            Err(FreespaceError::InvalidArgument(_))
        ));
        assert!(matches!(
            free_space_loss(2.4e9, 0.0),
            Err(FreespaceError::InvalidArgument(_))
        ));
        assert!(matches!(
            free_space_loss(-2.4e9, 10.0),
            Err(FreespaceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_eirp_units_agree() {
        assert_relative_eq!(Eirp::Watts(10.0).dbw().unwrap(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(Eirp::Dbm(40.0).dbw().unwrap(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(
            Eirp::Milliwatts(10_000.0).dbw().unwrap(),
            10.0,
            epsilon = 1e-12
        );
        assert!(matches!(
            Eirp::Watts(0.0).dbw(),
            Err(FreespaceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_field_strength_at_distance() {
        let field = field_strength_at(Eirp::Watts(10.0), 1000.0).unwrap();
        assert_relative_eq!(field, 84.8, epsilon = 1e-9);

        let flux = power_flux_at(Eirp::Watts(10.0), 1000.0).unwrap();
        assert_relative_eq!(flux, -61.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flux_field_round_trip() {
        let field = field_strength_from_power_flux(1.0).unwrap();
        assert_relative_eq!(field, 27.449_237_281_457, epsilon = 1e-9);
        assert_relative_eq!(
            power_flux_from_field_strength(field),
            1.0,
            epsilon = 1e-12
        );

        assert!(matches!(
            field_strength_from_power_flux(-1.0),
            Err(FreespaceError::InvalidArgument(_))
        ));
    }
}
