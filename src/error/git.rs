//! Git operation errors

use super::DepsrcError;

/// Creates a git operation failed error
pub fn operation_failed(message: impl Into<String>) -> DepsrcError {
    DepsrcError::GitOperationFailed {
        message: message.into(),
    }
}

/// Creates a repository open failed error
pub fn open_failed(path: impl Into<String>, reason: impl Into<String>) -> DepsrcError {
    DepsrcError::GitOpenFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
