//! Command implementations for the depsrc CLI

pub mod clean_cache;
pub mod completions;
pub mod helpers;
pub mod id;
pub mod resolve;
