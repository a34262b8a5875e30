//! Error types and handling for depsrc
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Convenience constructors live in sub-modules by error domain:
//! - [`cache`]: Cache errors
//! - [`config`]: Source configuration errors
//! - [`git`]: Git operation errors

pub mod cache;
pub mod config;
pub mod git;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for depsrc operations
#[derive(Error, Diagnostic, Debug)]
pub enum DepsrcError {
    // Source errors
    #[error("Unexpected dependency source: both git and path are missing")]
    #[diagnostic(
        code(depsrc::source::missing),
        help("Set either `git` or `path` on the dependency source")
    )]
    MissingSource,

    #[error("Invalid variable '{input}': expected NAME=VALUE")]
    #[diagnostic(code(depsrc::source::invalid_variable))]
    InvalidVariable { input: String },

    // Git errors
    #[error("Failed to clone repository: {url}")]
    #[diagnostic(
        code(depsrc::git::clone_failed),
        help("Check that the URL is correct and you have access to the repository")
    )]
    CloneFailed {
        url: String,
        #[source]
        source: Box<DepsrcError>,
    },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(depsrc::git::operation_failed))]
    GitOperationFailed { message: String },

    #[error("Failed to open repository at '{path}': {reason}")]
    #[diagnostic(code(depsrc::git::open_failed))]
    GitOpenFailed { path: String, reason: String },

    #[error("Repository at '{path}' has no remote '{remote}'")]
    #[diagnostic(code(depsrc::git::remote_not_found))]
    RemoteNotFound { path: String, remote: String },

    // Download errors
    #[error("Failed to download {url}")]
    #[diagnostic(
        code(depsrc::fetch::download_failed),
        help("Check that the URL is reachable or run again once the network is available")
    )]
    DownloadFailed {
        url: String,
        #[source]
        source: Box<DepsrcError>,
    },

    #[error("HTTP {status} for URL: {url}")]
    #[diagnostic(code(depsrc::fetch::http_status))]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP request failed: {message}")]
    #[diagnostic(code(depsrc::fetch::request_failed))]
    HttpRequestFailed { message: String },

    // Path errors
    #[error("Failed to resolve absolute path for '{path}'")]
    #[diagnostic(code(depsrc::path::resolution_failed))]
    PathResolutionFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Failed to read source configuration: {path}")]
    #[diagnostic(code(depsrc::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse source configuration: {path}")]
    #[diagnostic(code(depsrc::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Cache errors
    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(depsrc::cache::operation_failed))]
    CacheOperationFailed { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(depsrc::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DepsrcError {
    fn from(err: std::io::Error) -> Self {
        DepsrcError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DepsrcError {
    fn from(err: serde_yaml::Error) -> Self {
        DepsrcError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for DepsrcError {
    fn from(err: git2::Error) -> Self {
        DepsrcError::GitOperationFailed {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for DepsrcError {
    /// The request URL is dropped from the message; it may carry credentials
    fn from(err: reqwest::Error) -> Self {
        DepsrcError::HttpRequestFailed {
            message: err.without_url().to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DepsrcError>;
