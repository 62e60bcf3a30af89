use thiserror::Error;

#[derive(Error, Debug)]
pub enum DielectricError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("{quantity} {value} outside the supported range {min}..={max}")]
    OutOfValidityRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
