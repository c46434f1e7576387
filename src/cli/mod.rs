//! CLI argument parsing for brief.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Brief: resolve agent instruction templates into finished system instructions.
///
/// Instructions come from an agent manifest (agents.yaml), from the command
/// line, or both. `{name}` placeholders are filled from `--var name=value`.
#[derive(Parser, Debug)]
#[command(name = "brief")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for brief.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve an agent's instructions for a set of messages.
    ///
    /// Prints the joined instruction text, the full execution report
    /// (--json), or the downstream client request (--request).
    Resolve(ResolveArgs),

    /// List agents declared in a manifest.
    List(ListArgs),

    /// Show an agent's metadata and raw instruction templates.
    Show(ShowArgs),
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Agent identifier. Falls back to BRIEF_AGENT when a manifest is given.
    pub agent: Option<String>,

    /// Path to the agent manifest (agents.yaml).
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Path to a client options file.
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Instruction template supplied on the command line (repeatable).
    #[arg(short, long = "instruction")]
    pub instructions: Vec<String>,

    /// How --instruction combines with manifest instructions (append, replace).
    #[arg(long)]
    pub mode: Option<String>,

    /// Template variable as key=value (repeatable).
    #[arg(long = "var", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Message for the invocation (repeatable, at least one non-blank).
    #[arg(short, long = "message", required = true)]
    pub messages: Vec<String>,

    /// Tool name passed through to the client request (repeatable).
    #[arg(long = "tool")]
    pub tools: Vec<String>,

    /// Print the full execution report as JSON.
    #[arg(long, conflicts_with = "request")]
    pub json: bool,

    /// Print the downstream client request as JSON.
    #[arg(long)]
    pub request: bool,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Path to the agent manifest (agents.yaml).
    #[arg(long, default_value = "agents.yaml")]
    pub manifest: PathBuf,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Agent identifier.
    pub agent: String,

    /// Path to the agent manifest (agents.yaml).
    #[arg(long, default_value = "agents.yaml")]
    pub manifest: PathBuf,
}

/// Parse a `key=value` template variable.
fn parse_var(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid variable '{}': expected key=value", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid variable '{}': key cannot be empty", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resolve_minimal() {
        let cli = Cli::try_parse_from(["brief", "resolve", "-m", "hello"]).unwrap();
        if let Command::Resolve(args) = cli.command {
            assert_eq!(args.agent, None);
            assert_eq!(args.messages, vec!["hello"]);
            assert!(args.instructions.is_empty());
            assert!(!args.json);
        } else {
            panic!("Expected Resolve command");
        }
    }

    #[test]
    fn parse_resolve_full() {
        let cli = Cli::try_parse_from([
            "brief",
            "-v",
            "resolve",
            "daily-routine",
            "--manifest",
            "agents.yaml",
            "--options",
            "options.yaml",
            "-i",
            "Be brief.",
            "--instruction",
            "Use {unit}.",
            "--mode",
            "replace",
            "--var",
            "unit=celsius",
            "--var",
            "eq=a=b",
            "-m",
            "Good morning",
            "--tool",
            "get_weather",
            "--json",
        ])
        .unwrap();
        assert!(cli.verbose);
        if let Command::Resolve(args) = cli.command {
            assert_eq!(args.agent.as_deref(), Some("daily-routine"));
            assert_eq!(args.manifest, Some(PathBuf::from("agents.yaml")));
            assert_eq!(args.options, Some(PathBuf::from("options.yaml")));
            assert_eq!(args.instructions, vec!["Be brief.", "Use {unit}."]);
            assert_eq!(args.mode.as_deref(), Some("replace"));
            assert_eq!(
                args.vars,
                vec![
                    ("unit".to_string(), "celsius".to_string()),
                    ("eq".to_string(), "a=b".to_string())
                ]
            );
            assert_eq!(args.tools, vec!["get_weather"]);
            assert!(args.json);
        } else {
            panic!("Expected Resolve command");
        }
    }

    #[test]
    fn parse_resolve_requires_message() {
        assert!(Cli::try_parse_from(["brief", "resolve", "agent"]).is_err());
    }

    #[test]
    fn parse_resolve_json_conflicts_with_request() {
        let result =
            Cli::try_parse_from(["brief", "resolve", "-m", "hi", "--json", "--request"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_var_rejects_missing_equals() {
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=value").is_err());
        assert_eq!(
            parse_var("key=").unwrap(),
            ("key".to_string(), String::new())
        );
    }

    #[test]
    fn parse_list_default_manifest() {
        let cli = Cli::try_parse_from(["brief", "list"]).unwrap();
        if let Command::List(args) = cli.command {
            assert_eq!(args.manifest, PathBuf::from("agents.yaml"));
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["brief", "show", "helper", "--manifest", "m.yaml"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.agent, "helper");
            assert_eq!(args.manifest, PathBuf::from("m.yaml"));
        } else {
            panic!("Expected Show command");
        }
    }
}
