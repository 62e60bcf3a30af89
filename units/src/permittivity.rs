use num_complex::Complex64;

/// Complex relative permittivity ε = ε′ − jε″ at one frequency.
///
/// Follows the Recommendation sign convention: both parts are stored
/// non-negative and the −j is applied when converting to a full complex
/// number. Values are cheap to recompute, so nothing caches them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Permittivity {
    /// Real part ε′, governs phase velocity.
    pub real: f64,
    /// Imaginary part ε″ (stored positive), governs loss.
    pub imag: f64,
}

impl Permittivity {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Loss tangent ε″/ε′.
    #[must_use]
    pub fn loss_tangent(&self) -> f64 {
        self.imag / self.real
    }

    /// The full complex value ε′ − jε″.
    #[must_use]
    pub fn as_complex(&self) -> Complex64 {
        Complex64::new(self.real, -self.imag)
    }
}

impl From<Permittivity> for Complex64 {
    fn from(eps: Permittivity) -> Self {
        eps.as_complex()
    }
}

#[cfg(test)]
mod tests {
    use super::Permittivity;
    use approx::assert_relative_eq;

    #[test]
    fn test_loss_tangent() {
        let eps = Permittivity::new(4.0, 0.2);
        assert_relative_eq!(eps.loss_tangent(), 0.05);
    }

    #[test]
    fn test_as_complex_applies_sign_convention() {
        let z = Permittivity::new(5.24, 0.83).as_complex();
        assert_eq!(z.re, 5.24);
        assert_eq!(z.im, -0.83);
    }
}
