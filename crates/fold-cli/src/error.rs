use hpfold::core::models::chain::ChainError;
use hpfold::core::models::lattice::ParsePathError;
use hpfold::core::models::residue::ParseSequenceError;
use hpfold::engine::config::ConfigError;
use hpfold::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid sequence: {0}")]
    Sequence(#[from] ParseSequenceError),

    #[error("Invalid path: {0}")]
    Path(#[from] ParsePathError),

    #[error("Invalid chain: {0}")]
    Chain(#[from] ChainError),

    #[error("Failed to parse run file '{path}': {source}", path = path.display())]
    RunFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
