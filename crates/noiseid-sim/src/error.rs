use noiseid_core::NoiseIdError;
use thiserror::Error;

/// Failures while preparing a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid simulation config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse simulation config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] NoiseIdError),
}
