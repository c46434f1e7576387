//! Implementation of the `brief list` and `brief show` commands.
//!
//! This module provides:
//! - `list` - List agents declared in a manifest
//! - `show` - Show one agent's metadata and raw instruction templates

use crate::cli::{ListArgs, ShowArgs};
use brief::agent::prompt::placeholder_names;
use brief::agent::{AgentManifest, ManifestRegistry};
use brief::error::{BriefError, Result};
use std::io::{self, Write};

/// Execute the `brief list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let registry = ManifestRegistry::load(&args.manifest)?;
    write_list(&mut io::stdout().lock(), &registry).map_err(output_error)
}

/// Execute the `brief show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let registry = ManifestRegistry::load(&args.manifest)?;
    let manifest = registry.lookup(&args.agent)?;
    write_show(&mut io::stdout().lock(), &manifest).map_err(output_error)
}

fn output_error(e: io::Error) -> BriefError {
    BriefError::UserError(format!("failed to write output: {}", e))
}

fn write_list<W: Write>(out: &mut W, registry: &ManifestRegistry) -> io::Result<()> {
    if !registry.has_agents() {
        writeln!(out, "No agents declared in the manifest.")?;
        return Ok(());
    }

    writeln!(out, "Declared agents ({}):", registry.agent_count())?;
    writeln!(out)?;

    for (id, entry) in registry.iter() {
        writeln!(out, "  {} ({})", id, entry.kind)?;
        writeln!(out, "    Name:         {}", entry.display_name(id))?;
        writeln!(out, "    Version:      {}", entry.version)?;
        if !entry.description.is_empty() {
            writeln!(
                out,
                "    Description:  {}",
                truncate_text(&entry.description, 60)
            )?;
        }
        writeln!(out, "    Instructions: {}", entry.instructions.len())?;
        writeln!(out)?;
    }

    Ok(())
}

fn write_show<W: Write>(out: &mut W, manifest: &AgentManifest) -> io::Result<()> {
    writeln!(out, "{}", manifest.name)?;
    writeln!(out, "  Kind:        {}", manifest.kind)?;
    writeln!(out, "  Version:     {}", manifest.version)?;
    if !manifest.description.is_empty() {
        writeln!(out, "  Description: {}", manifest.description)?;
    }
    writeln!(out)?;

    if manifest.instructions.is_empty() {
        writeln!(out, "No instructions declared.")?;
        return Ok(());
    }

    writeln!(out, "Instructions:")?;
    for (index, template) in manifest.instructions.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, template)?;
    }

    let mut names: Vec<String> = Vec::new();
    for name in manifest.instructions.iter().flat_map(placeholder_names) {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    writeln!(out)?;
    if names.is_empty() {
        writeln!(out, "Variables: (none)")?;
    } else {
        writeln!(out, "Variables: {}", names.join(", "))?;
    }

    Ok(())
}

/// Truncate text for display.
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let take = max_chars.saturating_sub(3);
    let mut truncated: String = text.chars().take(take).collect();
    truncated.push_str("...");
    truncated
}
