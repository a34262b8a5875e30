//! Cache command implementation

use std::path::{Path, PathBuf};

use console::Style;

use depsrc::cache;
use depsrc::error::Result;

use super::helpers::resolver_options;
use crate::cli::{CacheArgs, CacheSubcommand};

pub fn run(cache_dir: Option<PathBuf>, args: CacheArgs) -> Result<()> {
    let cache_root = resolver_options(cache_dir)?.cache_root;

    match args.command {
        Some(CacheSubcommand::List) => list_entries(&cache_root),
        Some(CacheSubcommand::Clear(clear_args)) => match clear_args.only {
            Some(cache_id) => clean_specific_entry(&cache_root, &cache_id),
            None => clean_all_cache(&cache_root),
        },
        None => show_cache_stats(&cache_root),
    }
}

fn print_stats(cache_root: &Path) -> Result<cache::CacheStats> {
    let stats = cache::cache_stats(cache_root)?;

    println!("Cache Statistics:");
    println!("  Location: {}", cache_root.display());
    println!("  Entries: {}", stats.entries);
    println!("  Size: {}", stats.formatted_size());

    Ok(stats)
}

fn show_cache_stats(cache_root: &Path) -> Result<()> {
    let stats = print_stats(cache_root)?;

    if stats.entries == 0 {
        println!("\nCache is empty.");
    } else {
        println!("\nRun 'depsrc cache list' to list cache entries.");
        println!("Run 'depsrc cache clear' to remove everything from cache.");
        println!("Run 'depsrc cache clear --only <cache id>' to remove a single entry.");
    }

    Ok(())
}

fn list_entries(cache_root: &Path) -> Result<()> {
    print_stats(cache_root)?;
    println!();

    let entries = cache::list_entries(cache_root)?;
    if entries.is_empty() {
        println!("No cache entries.");
        return Ok(());
    }

    println!("Cache entries ({}):", entries.len());
    for entry in &entries {
        println!(
            "  {} ({})",
            Style::new().bold().yellow().apply_to(&entry.name),
            entry.formatted_size()
        );
    }

    Ok(())
}

fn clean_all_cache(cache_root: &Path) -> Result<()> {
    cache::clear_cache(cache_root)?;
    println!("Cache cleared successfully.");
    Ok(())
}

fn clean_specific_entry(cache_root: &Path, cache_id: &str) -> Result<()> {
    cache::remove_entry(cache_root, cache_id)?;
    println!("Removed cache entry: {cache_id}");
    Ok(())
}
