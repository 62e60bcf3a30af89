use clap::Parser;

/// Sweep dominant-mode attenuation of a dielectric-filled rectangular
/// waveguide across a frequency range.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Broad interior dimension, in meters.
    #[arg(long, default_value_t = 0.3)]
    pub a: f64,

    /// Narrow interior dimension, in meters.
    #[arg(long, default_value_t = 0.15)]
    pub b: f64,

    /// Fill material tag (P.2040 Table 3 name, e.g. "concrete").
    #[arg(short, long, default_value = "concrete")]
    pub material: String,

    /// Sweep start frequency (Hz).
    #[arg(long, default_value_t = 1e9)]
    pub start: f64,

    /// Sweep stop frequency (Hz).
    #[arg(long, default_value_t = 10e9)]
    pub stop: f64,

    /// Number of sweep points.
    #[arg(short, long, default_value_t = 91)]
    pub steps: usize,
}
