//! Id command implementation
//!
//! Prints the diagnostic identity of a dependency source and, on request,
//! the cache identity and the cache directory it maps to.

use std::path::PathBuf;

use console::Style;

use depsrc::error::Result;
use depsrc::identity;
use depsrc::resolver::SourceResolver;
use depsrc::source::SourceDescriptor;

use super::helpers::resolver_options;
use crate::cli::IdArgs;

/// Run id command
pub fn run(cache_dir: Option<PathBuf>, args: IdArgs) -> Result<()> {
    let config = args.source.to_config()?;
    let base_path = args.source.base_path()?;

    let resolver = SourceResolver::new(resolver_options(cache_dir)?)?;
    let diagnostic_id = resolver.diagnostic_id_for_config(
        &base_path,
        &config,
        args.profile.as_deref(),
        &args.vars,
    );

    if !args.cache {
        println!("{diagnostic_id}");
        return Ok(());
    }

    let source = SourceDescriptor::try_from(config)?;

    let label = Style::new().bold();
    println!("{} {diagnostic_id}", label.apply_to("Identity:"));
    match resolver.cache_path(&source) {
        Some(path) => {
            println!(
                "{} {}",
                label.apply_to("Cache id:"),
                identity::strip_credentials(&identity::cache_id(&source))
            );
            println!("{} {}", label.apply_to("Cache path:"), path.display());
        }
        None => println!(
            "{} {}",
            label.apply_to("Cache:"),
            Style::new().dim().apply_to("not cached (local path)")
        ),
    }

    Ok(())
}
