use thiserror::Error;

/// construction-time failures, fatal to the instance being built
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("noise model `{0}` is not supported")]
    UnsupportedNoiseModel(String),
}
