use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreespaceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
