//! Git error interpretation
//!
//! Turns raw libgit2 errors into short messages that say what went wrong
//! from the user's point of view.

use git2::{Error, ErrorClass, ErrorCode};

use crate::error::{DepsrcError, git};

fn interpret(err: &Error) -> String {
    let message = err.message().to_lowercase();
    let contains_any = |needles: &[&str]| needles.iter().any(|n| message.contains(n));

    if err.code() == ErrorCode::NotFound
        || contains_any(&["not found", "404", "too many redirects", "authentication replays"])
    {
        return format!("Repository or ref not found: {}", err.message());
    }
    if err.code() == ErrorCode::Auth || contains_any(&["authentication", "credentials"]) {
        return "Authentication failed".to_string();
    }
    if contains_any(&["permission denied", "access denied"]) {
        return "Permission denied".to_string();
    }
    if contains_any(&["connection", "network", "timeout", "timed out", "resolve host"]) {
        return format!("Network error: {}", err.message());
    }

    match err.class() {
        ErrorClass::Http if message.contains("certificate") => "Certificate error".to_string(),
        ErrorClass::Http | ErrorClass::Ssl if message.contains("ssl") => "SSL error".to_string(),
        ErrorClass::Http => format!("HTTP error: {}", err.message()),
        ErrorClass::Ssh => format!("SSH error: {}", err.message()),
        _ => err.message().to_string(),
    }
}

/// Convert a libgit2 error into a crate error with a friendly message
pub fn git_error(err: &Error) -> DepsrcError {
    git::operation_failed(interpret(err))
}
