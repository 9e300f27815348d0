use crate::core::models::chain::ChainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid initial chain: {source}")]
    InvalidInitialChain {
        #[from]
        source: ChainError,
    },
}
