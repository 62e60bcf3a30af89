use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaterialError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("{material} is only characterized for {min_ghz}..={max_ghz} GHz, not {value_ghz} GHz")]
    OutOfValidityRange {
        material: &'static str,
        value_ghz: f64,
        min_ghz: f64,
        max_ghz: f64,
    },

    #[error("unknown material '{0}' and no fallback parameters supplied")]
    MissingParameters(String),
}
