//! Complex relative permittivity of common building materials.
//!
//! Implements Table 3 of ITU-R Recommendation P.2040-2, *Effects of
//! building materials and structures on radiowave propagation above about
//! 100 MHz*. Each material class carries frequency power-law coefficients
//! (a, b, c, d) valid over a stated band:
//!
//! ```text
//! ε′ = a · f^b          σ  = c · f^d   (f in GHz, σ in S/m)
//! ε″ = 17.98 · σ / f
//! ```
//!
//! Materials not in the table can be described by caller-supplied
//! [`PowerLaw`] coefficients of the same shape.

mod error;

pub use crate::error::MaterialError;
use log::debug;
use units::{hz_to_ghz, Permittivity};

/// ε″ = 17.98·σ/f with f in GHz; 17.98 ≈ 1/(2πε₀) scaled to GHz.
const SIGMA_TO_LOSS: f64 = 17.98;

/// Frequency power-law coefficients for one material.
///
/// `a`/`b` shape the real part, `c`/`d` the conductivity that produces
/// the imaginary part. Frequencies are taken in GHz, per the
/// Recommendation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl PowerLaw {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Lossless dispersive descriptor: ε′ at 1 GHz plus the dispersion
    /// exponent, i.e. ε′ = `eps_at_1ghz` · f^`exponent`.
    #[must_use]
    pub const fn dispersive(eps_at_1ghz: f64, exponent: f64) -> Self {
        Self {
            a: eps_at_1ghz,
            b: exponent,
            c: 0.0,
            d: 0.0,
        }
    }

    /// Evaluates the power law at `f_hz`, with no band restriction.
    pub fn permittivity(&self, f_hz: f64) -> Result<Permittivity, MaterialError> {
        check_frequency(f_hz)?;
        let f_ghz = hz_to_ghz(f_hz);
        let real = self.a * f_ghz.powf(self.b);
        let conductivity = self.c * f_ghz.powf(self.d);
        let imag = SIGMA_TO_LOSS * conductivity / f_ghz;
        Ok(Permittivity::new(real, imag))
    }
}

/// One Table 3 row: a material class, its coefficients, and the band
/// they were fit over.
struct Row {
    class: MaterialClass,
    law: PowerLaw,
    min_ghz: f64,
    max_ghz: f64,
}

const fn row(class: MaterialClass, a: f64, b: f64, c: f64, d: f64, min_ghz: f64, max_ghz: f64) -> Row {
    Row {
        class,
        law: PowerLaw::new(a, b, c, d),
        min_ghz,
        max_ghz,
    }
}

/// ITU-R P.2040-2 Table 3. Immutable; glass and ceiling board carry a
/// second row for the 220-450 GHz band.
const TABLE: &[Row] = &[
    row(MaterialClass::Vacuum, 1.0, 0.0, 0.0, 0.0, 0.001, 100.0),
    row(MaterialClass::Concrete, 5.24, 0.0, 0.0462, 0.7822, 1.0, 100.0),
    row(MaterialClass::Brick, 3.91, 0.0, 0.0238, 0.16, 1.0, 40.0),
    row(MaterialClass::Plasterboard, 2.73, 0.0, 0.0085, 0.9395, 1.0, 100.0),
    row(MaterialClass::Wood, 1.99, 0.0, 0.0047, 1.0718, 0.001, 100.0),
    row(MaterialClass::Glass, 6.31, 0.0, 0.0036, 1.3394, 0.1, 100.0),
    row(MaterialClass::Glass, 5.79, 0.0, 0.0004, 1.658, 220.0, 450.0),
    row(MaterialClass::CeilingBoard, 1.48, 0.0, 0.0011, 1.075, 1.0, 100.0),
    row(MaterialClass::CeilingBoard, 1.52, 0.0, 0.0029, 1.029, 220.0, 450.0),
    row(MaterialClass::Chipboard, 2.58, 0.0, 0.0217, 0.78, 1.0, 100.0),
    row(MaterialClass::Plywood, 2.71, 0.0, 0.33, 0.0, 1.0, 40.0),
    row(MaterialClass::Marble, 7.074, 0.0, 0.0055, 0.9262, 1.0, 60.0),
    row(MaterialClass::Floorboard, 3.66, 0.0, 0.0044, 1.3515, 50.0, 100.0),
    row(MaterialClass::Metal, 1.0, 0.0, 1e7, 0.0, 1.0, 100.0),
    row(MaterialClass::VeryDryGround, 3.0, 0.0, 0.00015, 2.52, 1.0, 10.0),
    row(MaterialClass::MediumDryGround, 15.0, -0.1, 0.035, 1.63, 1.0, 10.0),
    row(MaterialClass::WetGround, 30.0, -0.4, 0.15, 1.30, 1.0, 10.0),
];

/// Material classes tabulated in P.2040-2 Table 3.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialClass {
    Vacuum,
    Concrete,
    Brick,
    Plasterboard,
    Wood,
    Glass,
    CeilingBoard,
    Chipboard,
    Plywood,
    Marble,
    Floorboard,
    Metal,
    VeryDryGround,
    MediumDryGround,
    WetGround,
}

impl MaterialClass {
    fn name(&self) -> &'static str {
        match self {
            Self::Vacuum => "vacuum",
            Self::Concrete => "concrete",
            Self::Brick => "brick",
            Self::Plasterboard => "plasterboard",
            Self::Wood => "wood",
            Self::Glass => "glass",
            Self::CeilingBoard => "ceiling_board",
            Self::Chipboard => "chipboard",
            Self::Plywood => "plywood",
            Self::Marble => "marble",
            Self::Floorboard => "floorboard",
            Self::Metal => "metal",
            Self::VeryDryGround => "very_dry_ground",
            Self::MediumDryGround => "medium_dry_ground",
            Self::WetGround => "wet_ground",
        }
    }

    /// Tabulated permittivity at `f_hz`.
    ///
    /// Picks the Table 3 row whose band contains the frequency; a
    /// frequency outside every row for this class fails rather than
    /// extrapolating.
    pub fn permittivity(&self, f_hz: f64) -> Result<Permittivity, MaterialError> {
        check_frequency(f_hz)?;
        let f_ghz = hz_to_ghz(f_hz);

        let rows = TABLE.iter().filter(|r| r.class == *self);
        let mut min_ghz = f64::INFINITY;
        let mut max_ghz = f64::NEG_INFINITY;
        for (nth, r) in rows.enumerate() {
            if (r.min_ghz..=r.max_ghz).contains(&f_ghz) {
                if nth > 0 {
                    debug!("{self:?} at {f_ghz} GHz uses the {}-{} GHz row", r.min_ghz, r.max_ghz);
                }
                return r.law.permittivity(f_hz);
            }
            min_ghz = min_ghz.min(r.min_ghz);
            max_ghz = max_ghz.max(r.max_ghz);
        }

        Err(MaterialError::OutOfValidityRange {
            material: self.name(),
            value_ghz: f_ghz,
            min_ghz,
            max_ghz,
        })
    }
}

impl std::str::FromStr for MaterialClass {
    type Err = MaterialError;

    fn from_str(name: &str) -> Result<Self, MaterialError> {
        TABLE
            .iter()
            .map(|r| r.class)
            .find(|class| class.name() == name)
            .ok_or_else(|| MaterialError::MissingParameters(name.to_string()))
    }
}

/// A material descriptor: either a tabulated class or caller-supplied
/// power-law coefficients for anything the table does not cover.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Tabulated(MaterialClass),
    PowerLaw(PowerLaw),
}

impl Material {
    /// Resolves a material tag, falling back to the supplied power law
    /// when the tag is not tabulated.
    pub fn from_name(name: &str, fallback: Option<PowerLaw>) -> Result<Self, MaterialError> {
        match name.parse::<MaterialClass>() {
            Ok(class) => Ok(Self::Tabulated(class)),
            Err(err) => fallback.map(Self::PowerLaw).ok_or(err),
        }
    }

    pub fn permittivity(&self, f_hz: f64) -> Result<Permittivity, MaterialError> {
        match self {
            Self::Tabulated(class) => class.permittivity(f_hz),
            Self::PowerLaw(law) => law.permittivity(f_hz),
        }
    }
}

fn check_frequency(f_hz: f64) -> Result<(), MaterialError> {
    if !f_hz.is_finite() || f_hz <= 0.0 {
        return Err(MaterialError::InvalidArgument("frequency must be > 0 Hz"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_concrete_matches_published_coefficients() {
        // At 1 GHz the power law reduces to the published a and 17.98·c.
        let eps = MaterialClass::Concrete.permittivity(1e9).unwrap();
        assert_relative_eq!(eps.real, 5.24, epsilon = 1e-9);
        assert_relative_eq!(eps.imag, 0.830_676, epsilon = 1e-9);

        let eps = MaterialClass::Concrete.permittivity(10e9).unwrap();
        assert_relative_eq!(eps.real, 5.24, epsilon = 1e-9);
        assert_relative_eq!(eps.imag, 0.503_073_757_167_139_5, epsilon = 1e-9);
    }

    #[test]
    fn test_tabulated_materials() {
        let eps = MaterialClass::Brick.permittivity(10e9).unwrap();
        assert_relative_eq!(eps.real, 3.91, epsilon = 1e-9);
        assert_relative_eq!(eps.imag, 0.061_853_836_845_668_03, epsilon = 1e-9);

        let eps = MaterialClass::Wood.permittivity(2.4e9).unwrap();
        assert_relative_eq!(eps.real, 1.99, epsilon = 1e-9);
        assert_relative_eq!(eps.imag, 0.089_988_437_792_167, epsilon = 1e-9);

        let eps = MaterialClass::WetGround.permittivity(5e9).unwrap();
        assert_relative_eq!(eps.real, 15.759_166_826_422_602, epsilon = 1e-9);
        assert_relative_eq!(eps.imag, 4.370_910_841_280_382, epsilon = 1e-9);

        let eps = MaterialClass::Vacuum.permittivity(10e9).unwrap();
        assert_eq!(eps.real, 1.0);
        assert_eq!(eps.imag, 0.0);
    }

    #[test]
    fn test_metal_is_a_conductor() {
        let eps = MaterialClass::Metal.permittivity(1e9).unwrap();
        assert_relative_eq!(eps.imag, 1.798e8, max_relative = 1e-12);
    }

    #[test]
    fn test_glass_second_band() {
        let eps = MaterialClass::Glass.permittivity(300e9).unwrap();
        assert_relative_eq!(eps.real, 5.79, epsilon = 1e-9);
        assert_relative_eq!(eps.imag, 0.306_757_693_969_951_8, epsilon = 1e-9);

        // The gap between the two glass rows is not covered.
        assert!(matches!(
            MaterialClass::Glass.permittivity(150e9),
            Err(MaterialError::OutOfValidityRange { .. })
        ));
    }

    #[test]
    fn test_band_limits() {
        assert!(matches!(
            MaterialClass::Brick.permittivity(50e9),
            Err(MaterialError::OutOfValidityRange { .. })
        ));
        assert!(matches!(
            MaterialClass::WetGround.permittivity(15e9),
            Err(MaterialError::OutOfValidityRange { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_frequency() {
        assert!(matches!(
            MaterialClass::Concrete.permittivity(0.0),
            Err(MaterialError::InvalidArgument(_))
        ));
        assert!(matches!(
            PowerLaw::dispersive(4.0, -0.1).permittivity(-1e9),
            Err(MaterialError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_power_law_fallback() {
        let law = PowerLaw::dispersive(4.0, -0.1);
        let eps = law.permittivity(10e9).unwrap();
        assert_relative_eq!(eps.real, 3.177_312_938_897_126, epsilon = 1e-9);
        assert_eq!(eps.imag, 0.0);
    }

    #[test]
    fn test_name_resolution() {
        assert_eq!(
            Material::from_name("concrete", None).unwrap(),
            Material::Tabulated(MaterialClass::Concrete)
        );

        let fallback = PowerLaw::dispersive(5.0, 0.0);
        assert_eq!(
            Material::from_name("granite", Some(fallback)).unwrap(),
            Material::PowerLaw(fallback)
        );

        assert!(matches!(
            Material::from_name("granite", None),
            Err(MaterialError::MissingParameters(name)) if name == "granite"
        ));
    }

    #[test]
    fn test_idempotent() {
        let a = MaterialClass::Marble.permittivity(30e9).unwrap();
        let b = MaterialClass::Marble.permittivity(30e9).unwrap();
        assert_eq!(a, b);
    }
}
