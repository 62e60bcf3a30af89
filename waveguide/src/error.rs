use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaveguideError {
    #[error("invalid waveguide geometry: a = {a_m} m, b = {b_m} m")]
    InvalidGeometry { a_m: f64, b_m: f64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
