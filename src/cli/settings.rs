//! Handlers for the `get`, `set` and `list` subcommands.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sayer::constants::QUALIFIER_SEPARATOR;
use sayer::store::default_settings_path;
use sayer::{FileStore, SettingResolver, TypeDescriptor};

use super::TypeArgs;

/// Picks the settings file: explicit flag, then env/XDG default.
pub(crate) fn settings_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_settings_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory")),
    }
}

/// Turns `--type Outer.Inner --unit app` into a descriptor.
fn origin(binding: &TypeArgs) -> Result<Option<TypeDescriptor>> {
    let Some(chain) = binding.type_chain.as_deref() else {
        return Ok(None);
    };
    let names: Vec<&str> = chain.split(QUALIFIER_SEPARATOR).map(str::trim).collect();
    if names.iter().any(|n| n.is_empty()) {
        anyhow::bail!("Invalid type chain '{}': empty level", chain);
    }
    Ok(TypeDescriptor::chain(&binding.unit, names))
}

fn open(path: &Path) -> Result<Arc<FileStore>> {
    let store = FileStore::open(path)
        .with_context(|| format!("Failed to load settings from {:?}", path))?;
    Ok(Arc::new(store))
}

pub(crate) fn get(
    path: &Path,
    section: &str,
    binding: &TypeArgs,
    name: &str,
    explain: bool,
) -> Result<()> {
    let store = open(path)?;
    let resolver = SettingResolver::new(store, section, origin(binding)?);

    if explain {
        let matched = resolver.find(name)?;
        for candidate in resolver.candidate_names(name) {
            let hit = matched.as_ref().is_some_and(|f| f.name() == candidate);
            if hit {
                println!("{} {}", "=>".green().bold(), candidate.bold());
            } else {
                println!("   {}", candidate.dimmed());
            }
        }
        println!();
    }

    let value: String = resolver.get(name)?;
    println!("{}", value);
    Ok(())
}

pub(crate) fn set(
    path: &Path,
    section: &str,
    binding: &TypeArgs,
    name: &str,
    value: String,
) -> Result<()> {
    let store = open(path)?;
    if store.create_section(section) {
        log::info!("created section '{}'", section);
    }
    let resolver = SettingResolver::new(Arc::clone(&store), section, origin(binding)?);
    resolver.set(name, value)?;
    store
        .save()
        .with_context(|| format!("Failed to write settings to {:?}", path))?;

    println!("{} {}", "set".green().bold(), resolver.qualified_name(name));
    Ok(())
}

pub(crate) fn list(path: &Path, section: &str, json: bool) -> Result<()> {
    let store = open(path)?;
    let resolver = SettingResolver::new(store, section, None);
    let fields = resolver.fields()?;

    if json {
        let fields: Vec<_> = fields.collect();
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    if fields.len() == 0 {
        println!("{}", format!("No fields in section '{}'.", section).dimmed());
        return Ok(());
    }

    println!("{} {}", "Section:".bold(), section);
    println!();
    for field in fields {
        println!("  {} = {}", field.name().cyan(), field.value());
    }
    Ok(())
}
