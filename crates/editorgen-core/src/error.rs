//! Error types for editor generation

use crate::GenerationState;
use thiserror::Error;

/// Result type alias for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Error type for generation requests
///
/// Every variant is fatal to the request that raised it. Unsupported
/// annotations are not errors; they travel through the
/// [`NoticeSink`](crate::NoticeSink) channel instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Required input is missing or malformed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Target type does not derive from MonoBehaviour or ScriptableObject
    #[error("type {type_name} must derive from MonoBehaviour or ScriptableObject")]
    IneligibleType { type_name: String },

    /// Generation request is not in a valid state for the requested operation
    #[error("invalid generation state: expected {expected}, got {actual}")]
    InvalidState {
        expected: GenerationState,
        actual: GenerationState,
    },
}

impl GenerationError {
    /// Returns a stable numeric code, used as the CLI exit status
    pub fn error_code(&self) -> u32 {
        match self {
            GenerationError::InvalidInput(_) => 1,
            GenerationError::IneligibleType { .. } => 2,
            GenerationError::InvalidState { .. } => 3,
        }
    }
}
