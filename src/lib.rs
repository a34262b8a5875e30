//! depsrc - dependency source resolution
//!
//! Turns a dependency source (a git repository, a remote URL or a local path)
//! into the path of a configuration file on local disk, caching remote sources
//! under a shared cache root and falling back to a stale cache entry when a
//! refresh fails.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use depsrc::resolver::{ResolverOptions, SourceResolver};
//! use depsrc::source::{GitSource, SourceDescriptor};
//!
//! # fn main() -> depsrc::error::Result<()> {
//! let resolver = SourceResolver::new(ResolverOptions::from_env()?)?;
//! let source = SourceDescriptor::git(
//!     GitSource::new("https://github.com/org/repo.git").with_branch("main"),
//! );
//! let resolution = resolver.resolve(Path::new("."), &source)?;
//! println!("{}", resolution.config_path.display());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod fetch;
pub mod git;
pub mod identity;
pub mod path_utils;
pub mod resolver;
pub mod source;

pub use error::{DepsrcError, Result};
pub use resolver::{FetchOutcome, Resolution, ResolverOptions, SourceResolver};
pub use source::{DependencyVar, SourceConfig, SourceDescriptor};
