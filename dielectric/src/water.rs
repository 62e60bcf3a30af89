use crate::{check_frequency, check_temperature, DielectricError, SALINITY_RANGE_PPT};
use units::{hz_to_ghz, Permittivity};

/// Double-Debye terms of P.527-4, all frequencies in GHz.
struct DebyeTerms {
    relax_1_ghz: f64,
    relax_2_ghz: f64,
    eps_static: f64,
    eps_pole: f64,
    eps_inf: f64,
}

impl DebyeTerms {
    /// Pure-water terms at `temp_c`, as polynomials in θ = 300/T(K) − 1.
    fn at(temp_c: f64) -> Self {
        let theta = 300.0 / (temp_c + 273.15) - 1.0;
        let relax_1_ghz = 20.20 - 146.4 * theta + 316.0 * theta * theta;
        let relax_2_ghz = 39.8 * relax_1_ghz;
        let eps_inf = 3.52 - 7.52 * theta;
        let eps_static = 77.66 + 103.3 * theta;
        let eps_pole = 0.0671 * eps_static;
        Self {
            relax_1_ghz,
            relax_2_ghz,
            eps_static,
            eps_pole,
            eps_inf,
        }
    }

    /// Evaluates both relaxation poles at `f_ghz`, without any
    /// conductivity contribution.
    fn evaluate(&self, f_ghz: f64) -> (f64, f64) {
        let num_1 = self.eps_static - self.eps_pole;
        let num_2 = self.eps_pole - self.eps_inf;
        let denom_1 = 1.0 + (f_ghz / self.relax_1_ghz).powi(2);
        let denom_2 = 1.0 + (f_ghz / self.relax_2_ghz).powi(2);

        let real = num_1 / denom_1 + num_2 / denom_2 + self.eps_inf;
        let imag = (f_ghz / self.relax_1_ghz) * num_1 / denom_1
            + (f_ghz / self.relax_2_ghz) * num_2 / denom_2;
        (real, imag)
    }
}

/// Complex relative permittivity of fresh (pure) water.
///
/// Double-Debye model of ITU-R P.527-4. No ionic conductivity term.
pub fn fresh_water_permittivity(temp_c: f64, f_hz: f64) -> Result<Permittivity, DielectricError> {
    check_frequency(f_hz)?;
    check_temperature(temp_c)?;

    let (real, imag) = DebyeTerms::at(temp_c).evaluate(hz_to_ghz(f_hz));
    Ok(Permittivity::new(real, imag))
}

/// Complex relative permittivity of sea water.
///
/// Salinity-corrected double-Debye model of ITU-R P.527-4, with the ionic
/// conductivity of the dissolved salt added to the imaginary part.
/// `salinity_ppt` is in g/kg; sea water is about 35.
pub fn sea_water_permittivity(
    salinity_ppt: f64,
    temp_c: f64,
    f_hz: f64,
) -> Result<Permittivity, DielectricError> {
    check_frequency(f_hz)?;
    check_temperature(temp_c)?;
    check_salinity(salinity_ppt)?;

    let t = temp_c;
    let s = salinity_ppt;
    let f_ghz = hz_to_ghz(f_hz);
    let pure = DebyeTerms::at(t);

    // Conductivity of sea water: σ(35 ‰, T) scaled to the actual salinity
    // via R₁₅ and R_T15.
    let alpha_0 = (6.9431 + 3.2841 * s - 9.9486e-2 * s * s) / (84.85 + 69.024 * s + s * s);
    let alpha_1 = 49.843 - 0.2276 * s + 0.198e-2 * s * s;
    let r_t15 = 1.0 + (alpha_0 * (t - 15.0)) / (alpha_1 + t);
    let r_15 = (37.5109 + 5.45216 * s + 1.4409e-2 * s * s) / (1004.75 + 182.283 * s + s * s) * s;
    let sigma_35 = 2.903602
        + 8.607e-2 * t
        + 4.738817e-4 * t.powi(2)
        - 2.991e-6 * t.powi(3)
        + 4.3047e-9 * t.powi(4);
    let conductivity = sigma_35 * r_15 * r_t15;

    let sea = DebyeTerms {
        relax_1_ghz: (1.0 + s * (2.39357e-3 - 3.13530e-5 * t + 2.52477e-7 * t * t))
            * pure.relax_1_ghz,
        relax_2_ghz: (1.0 + s * (1.81176e-4 * t - 1.99723e-2)) * pure.relax_2_ghz,
        eps_static: pure.eps_static
            * (4.74868e-6 * s * s + 1.15574e-5 * t * s - 3.56417e-3 * s).exp(),
        eps_pole: pure.eps_pole * (1.76032e-4 * s * s - 9.22144e-5 * t * s - 6.28908e-3 * s).exp(),
        eps_inf: ((1.57883e-4 * t - 2.04265e-3) * s + 1.0) * pure.eps_inf,
    };

    let (real, relaxation_imag) = sea.evaluate(f_ghz);
    let imag = relaxation_imag + 18.0 * conductivity / f_ghz;
    Ok(Permittivity::new(real, imag))
}

/// Complex relative permittivity of water of the given salinity.
///
/// Salinity 0 selects the fresh-water branch; anything above it the
/// sea-water branch.
pub fn water_permittivity(
    salinity_ppt: f64,
    temp_c: f64,
    f_hz: f64,
) -> Result<Permittivity, DielectricError> {
    check_salinity(salinity_ppt)?;
    if salinity_ppt == 0.0 {
        fresh_water_permittivity(temp_c, f_hz)
    } else {
        sea_water_permittivity(salinity_ppt, temp_c, f_hz)
    }
}

fn check_salinity(salinity_ppt: f64) -> Result<(), DielectricError> {
    if !salinity_ppt.is_finite() || salinity_ppt < 0.0 {
        return Err(DielectricError::InvalidArgument("salinity must be >= 0 g/kg"));
    }
    let (min, max) = SALINITY_RANGE_PPT;
    if salinity_ppt > max {
        return Err(DielectricError::OutOfValidityRange {
            quantity: "salinity (g/kg)",
            value: salinity_ppt,
            min,
            max,
        });
    }
    Ok(())
}
