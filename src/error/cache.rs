//! Cache errors

use super::DepsrcError;

/// Creates a cache operation failed error
pub fn operation_failed(message: impl Into<String>) -> DepsrcError {
    DepsrcError::CacheOperationFailed {
        message: message.into(),
    }
}
