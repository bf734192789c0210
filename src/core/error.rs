//! Error types for the allocation and projection engines.

use thiserror::Error;

use super::asset::AssetClass;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Input could not be mapped to a known variant (risk profile, asset class)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Expected-return table has no entry for an allocated asset
    #[error("Missing expected return data for {0}")]
    MissingReturnData(AssetClass),

    /// Numeric precondition violated; raised instead of yielding NaN or infinity
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Invalid reference data: {0}")]
    ReferenceData(String),
}
