use crate::{check_frequency, check_temperature, water::fresh_water_permittivity, DielectricError};
use log::debug;
use units::{hz_to_ghz, Permittivity};

/// Birchak mixing exponent of the P.527-4 soil model.
const MIXING_EXPONENT: f64 = 0.65;

/// Fraction-sum tolerance for composition validation.
const SUM_TOLERANCE: f64 = 1e-9;

/// A moist soil mixture characterized by its solid-phase texture.
///
/// Fractions are by mass and must sum to 1; the mixing model takes
/// logarithms of the texture, so every constituent must be present.
/// Moisture is the volumetric water content. The dry bulk density is not
/// a free parameter: P.527-4 derives it from the texture (see
/// [`SoilComposition::bulk_density`]); the specific gravity of the solid
/// phase is, and defaults to the usual 2.65.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilComposition {
    sand_fraction: f64,
    clay_fraction: f64,
    silt_fraction: f64,
    moisture: f64,
    specific_gravity: f64,
}

impl SoilComposition {
    pub fn new(
        sand_fraction: f64,
        clay_fraction: f64,
        silt_fraction: f64,
        moisture: f64,
    ) -> Result<Self, DielectricError> {
        for fraction in [sand_fraction, clay_fraction, silt_fraction] {
            if !fraction.is_finite() || fraction <= 0.0 || fraction >= 1.0 {
                return Err(DielectricError::InvalidArgument(
                    "composition fractions must be within (0, 1)",
                ));
            }
        }
        if ((sand_fraction + clay_fraction + silt_fraction) - 1.0).abs() > SUM_TOLERANCE {
            return Err(DielectricError::InvalidArgument(
                "composition fractions must sum to 1",
            ));
        }
        if !moisture.is_finite() || moisture <= 0.0 || moisture > 1.0 {
            return Err(DielectricError::InvalidArgument(
                "volumetric moisture must be within (0, 1]",
            ));
        }
        Ok(Self {
            sand_fraction,
            clay_fraction,
            silt_fraction,
            moisture,
            specific_gravity: 2.65,
        })
    }

    /// Overrides the solid-phase specific gravity ρ_s. Dry soil mixtures
    /// normally sit between 2.5 and 2.7.
    pub fn with_specific_gravity(mut self, specific_gravity: f64) -> Result<Self, DielectricError> {
        if !specific_gravity.is_finite() || specific_gravity <= 0.0 {
            return Err(DielectricError::InvalidArgument(
                "specific gravity must be > 0",
            ));
        }
        self.specific_gravity = specific_gravity;
        Ok(self)
    }

    #[must_use]
    pub fn moisture(&self) -> f64 {
        self.moisture
    }

    #[must_use]
    pub fn specific_gravity(&self) -> f64 {
        self.specific_gravity
    }

    /// Dry bulk density ρ_b in g/cm³, from the P.527-4 texture regression.
    #[must_use]
    pub fn bulk_density(&self) -> f64 {
        let (sand_pct, clay_pct, silt_pct) = self.percentages();
        1.072_560
            + 0.078_886 * sand_pct.ln()
            + 0.038_753 * clay_pct.ln()
            + 0.032_732 * silt_pct.ln()
    }

    fn percentages(&self) -> (f64, f64, f64) {
        (
            self.sand_fraction * 100.0,
            self.clay_fraction * 100.0,
            self.silt_fraction * 100.0,
        )
    }
}

/// The twelve standard soil texture classes of the USDA triangle, with
/// representative sand/clay/silt splits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilTexture {
    Clay,
    SandyClay,
    SiltyClay,
    ClayLoam,
    SandyClayLoam,
    SiltyClayLoam,
    Loam,
    SiltyLoam,
    SandyLoam,
    Sand,
    LoamySand,
    Silt,
}

impl SoilTexture {
    /// (sand, clay, silt) percentages of the texture class.
    #[must_use]
    pub fn percentages(&self) -> (f64, f64, f64) {
        match self {
            Self::Clay => (20.0, 60.0, 20.0),
            Self::SandyClay => (50.0, 40.0, 10.0),
            Self::SiltyClay => (10.0, 45.0, 45.0),
            Self::ClayLoam => (35.0, 30.0, 35.0),
            Self::SandyClayLoam => (60.0, 25.0, 15.0),
            Self::SiltyClayLoam => (15.0, 32.5, 52.5),
            Self::Loam => (40.0, 20.0, 40.0),
            Self::SiltyLoam => (22.5, 15.0, 62.5),
            Self::SandyLoam => (65.0, 10.0, 25.0),
            Self::Sand => (90.0, 5.0, 5.0),
            Self::LoamySand => (80.0, 10.0, 10.0),
            Self::Silt => (10.0, 10.0, 80.0),
        }
    }

    /// A [`SoilComposition`] of this texture at the given volumetric
    /// moisture content.
    pub fn composition(&self, moisture: f64) -> Result<SoilComposition, DielectricError> {
        let (sand_pct, clay_pct, silt_pct) = self.percentages();
        SoilComposition::new(
            sand_pct / 100.0,
            clay_pct / 100.0,
            silt_pct / 100.0,
            moisture,
        )
    }
}

/// Complex relative permittivity of moist soil.
///
/// P.527-4 dielectric mixing: the free-water permittivity inside the
/// mixture is the pure-water Debye value corrected by the effective
/// conductivity of the soil texture, then combined with the solid-phase
/// permittivity through the α = 0.65 mixing law.
///
/// For coarse, dry mixtures the effective-conductivity regression turns
/// negative at the low end of the band, where the mixing law has no real
/// evaluation; such calls fail with `OutOfValidityRange` rather than
/// returning a non-physical loss.
pub fn soil_permittivity(
    composition: &SoilComposition,
    temp_c: f64,
    f_hz: f64,
) -> Result<Permittivity, DielectricError> {
    check_frequency(f_hz)?;
    check_temperature(temp_c)?;

    let f_ghz = hz_to_ghz(f_hz);
    let (sand_pct, clay_pct, _) = composition.percentages();
    let moisture = composition.moisture;
    let rho_s = composition.specific_gravity;
    let rho_b = composition.bulk_density();

    // Effective conductivity of the texture, split into its in-phase and
    // quadrature parts around the 1.35 GHz corner.
    let sigma_1 = 0.0467 + 0.2204 * rho_b - 0.004111 * sand_pct - 0.006614 * clay_pct;
    let sigma_2 = -1.645 + 1.939 * rho_b - 0.0225622 * sand_pct + 0.01594 * clay_pct;
    let sigma_common = (sigma_1 - sigma_2) / (1.0 + (f_ghz / 1.35).powi(2));
    let sigma_eff_prime = sigma_common * (f_ghz / 1.35);
    let sigma_eff_second = sigma_common + sigma_2;

    // Free-water permittivity inside the mixture.
    let correction = (rho_s - rho_b) / (rho_s * moisture) * (18.0 / f_ghz);
    let pure_water = fresh_water_permittivity(temp_c, f_hz)?;
    let free_water_real = pure_water.real + sigma_eff_prime * correction;
    let free_water_imag = pure_water.imag + sigma_eff_second * correction;

    debug!(
        "soil mix: rho_b={rho_b:.4} g/cm³, free-water eps=({free_water_real:.4}, {free_water_imag:.4})"
    );

    if free_water_real <= 0.0 || free_water_imag <= 0.0 {
        return Err(DielectricError::OutOfValidityRange {
            quantity: "effective free-water loss factor",
            value: free_water_imag,
            min: 0.0,
            max: f64::INFINITY,
        });
    }

    let beta_prime = 1.2748 - 0.00519 * sand_pct - 0.00152 * clay_pct;
    let beta_second = 1.33797 - 0.00603 * sand_pct - 0.00166 * clay_pct;
    let eps_solid = (1.01 + 0.44 * rho_s).powi(2) - 0.062;

    let alpha = MIXING_EXPONENT;
    let imag = (moisture.powf(beta_second) * free_water_imag.powf(alpha)).powf(1.0 / alpha);
    let real = (1.0 - moisture
        + moisture.powf(beta_prime) * free_water_real.powf(alpha)
        + (rho_b / rho_s) * (eps_solid.powf(alpha) - 1.0))
        .powf(1.0 / alpha);

    Ok(Permittivity::new(real, imag))
}
