//! Implementation of the `brief resolve` command.
//!
//! Builds the agent (manifest identifier, `BRIEF_AGENT`, or command-line
//! instructions only), invokes it once and prints the result.

use crate::cli::ResolveArgs;
use brief::agent::prompt::{InstructionSet, VariableBindings};
use brief::agent::{Agent, AgentSource, AmbientContext, ManifestRegistry};
use brief::config::{ClientOptions, ResolutionPolicy};
use brief::error::{BriefError, Result};
use tracing::debug;

/// Execute the `brief resolve` command.
pub fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    let agent = build_agent(&args)?;
    let bindings: VariableBindings = args.vars.iter().cloned().collect();

    if args.request {
        let request = agent.prepare(args.messages.clone(), bindings)?;
        println!("{}", to_json(&request)?);
        return Ok(());
    }

    let report = agent.invoke(args.messages.clone(), bindings)?;

    if args.json {
        println!("{}", to_json(&report)?);
        if !report.success {
            return Err(BriefError::ResolutionFailed(
                report.error.clone().unwrap_or_default(),
            ));
        }
        return Ok(());
    }

    println!("{}", report.instructions()?);
    Ok(())
}

/// Construct the agent described by the arguments.
///
/// # Resolution Order
///
/// 1. Explicit agent identifier (requires `--manifest`)
/// 2. `BRIEF_AGENT` when a manifest is given without an identifier
/// 3. Command-line instructions alone when no manifest is given
fn build_agent(args: &ResolveArgs) -> Result<Agent> {
    let mut options = match args.options {
        Some(ref path) => ClientOptions::load(path)?,
        None => ClientOptions::default(),
    };
    if let Some(ref mode) = args.mode {
        let policy = ResolutionPolicy::from_str(mode).ok_or_else(|| {
            BriefError::UserError(format!(
                "invalid --mode '{}': expected 'append' or 'replace'",
                mode
            ))
        })?;
        options = options.with_policy(policy);
    }

    let provided: InstructionSet = args.instructions.iter().cloned().collect();

    let registry = match args.manifest {
        Some(ref path) => Some(ManifestRegistry::load(path)?),
        None => None,
    };

    let source = match (&args.agent, &registry) {
        (Some(id), _) => AgentSource::Identifier(id.clone()),
        (None, Some(_)) => AgentSource::Ambient(AmbientContext::from_env()),
        (None, None) if !provided.is_empty() => {
            debug!(
                instructions = provided.len(),
                "no manifest given, using command-line instructions only"
            );
            return Ok(Agent::from_instructions(provided)
                .with_options(options)
                .with_tools(args.tools.iter().cloned()));
        }
        (None, None) => {
            return Err(BriefError::UserError(
                "nothing to resolve: pass an agent with --manifest, or at least one --instruction"
                    .to_string(),
            ));
        }
    };

    let mut agent = Agent::build(source, registry.as_ref())?
        .with_options(options)
        .with_tools(args.tools.iter().cloned());
    if !provided.is_empty() {
        agent = agent.with_instructions(provided);
    }
    Ok(agent)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| BriefError::UserError(format!("failed to serialize output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief::agent::prompt::vars;
    use brief::exit_codes;
    use serial_test::serial;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
agents:
  daily-routine:
    version: "0.2.0"
    instructions:
      - "A: {x}"
"#;

    fn write_manifest(dir: &Path) -> PathBuf {
        let path = dir.join("agents.yaml");
        std::fs::write(&path, MANIFEST).unwrap();
        path
    }

    fn args() -> ResolveArgs {
        ResolveArgs {
            agent: None,
            manifest: None,
            options: None,
            instructions: vec![],
            mode: None,
            vars: vec![("x".to_string(), "1".to_string()), ("y".to_string(), "2".to_string())],
            messages: vec!["go".to_string()],
            tools: vec![],
            json: false,
            request: false,
        }
    }

    fn resolved(agent: &Agent) -> String {
        agent
            .invoke("go", vars([("x", "1"), ("y", "2")]))
            .unwrap()
            .value
            .unwrap()
    }

    #[test]
    fn test_instructions_only() {
        let agent = build_agent(&ResolveArgs {
            instructions: vec!["B: {y}".to_string()],
            ..args()
        })
        .unwrap();
        assert_eq!(resolved(&agent), "B: 2");
    }

    #[test]
    fn test_nothing_to_resolve() {
        let err = build_agent(&args()).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn test_manifest_agent_append() {
        let dir = TempDir::new().unwrap();
        let agent = build_agent(&ResolveArgs {
            agent: Some("daily-routine".to_string()),
            manifest: Some(write_manifest(dir.path())),
            instructions: vec!["B: {y}".to_string()],
            ..args()
        })
        .unwrap();
        assert_eq!(agent.version(), "0.2.0");
        assert_eq!(resolved(&agent), "A: 1\nB: 2");
    }

    #[test]
    fn test_mode_replace() {
        let dir = TempDir::new().unwrap();
        let agent = build_agent(&ResolveArgs {
            agent: Some("daily-routine".to_string()),
            manifest: Some(write_manifest(dir.path())),
            instructions: vec!["B: {y}".to_string()],
            mode: Some("replace".to_string()),
            ..args()
        })
        .unwrap();
        assert_eq!(resolved(&agent), "B: 2");
    }

    #[test]
    fn test_invalid_mode() {
        let err = build_agent(&ResolveArgs {
            instructions: vec!["x".to_string()],
            mode: Some("merge".to_string()),
            ..args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("invalid --mode"));
    }

    #[test]
    fn test_agent_without_manifest_is_config_error() {
        let err = build_agent(&ResolveArgs {
            agent: Some("daily-routine".to_string()),
            ..args()
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_options_file() {
        let dir = TempDir::new().unwrap();
        let options = dir.path().join("options.yaml");
        std::fs::write(&options, "instructions: replace\nparallel_tool_execution: false\n")
            .unwrap();

        let agent = build_agent(&ResolveArgs {
            agent: Some("daily-routine".to_string()),
            manifest: Some(write_manifest(dir.path())),
            options: Some(options),
            instructions: vec!["B: {y}".to_string()],
            ..args()
        })
        .unwrap();
        assert!(!agent.options().parallel_tool_execution);
        assert_eq!(resolved(&agent), "B: 2");
    }

    #[test]
    #[serial]
    fn test_ambient_agent_from_env() {
        let dir = TempDir::new().unwrap();
        // SAFETY: serialized with every other test touching the environment.
        unsafe { std::env::set_var(brief::agent::AGENT_ENV_VAR, "daily-routine") };
        let result = build_agent(&ResolveArgs {
            manifest: Some(write_manifest(dir.path())),
            ..args()
        });
        unsafe { std::env::remove_var(brief::agent::AGENT_ENV_VAR) };

        assert_eq!(resolved(&result.unwrap()), "A: 1");
    }

    #[test]
    #[serial]
    fn test_manifest_without_agent_or_env_fails() {
        let dir = TempDir::new().unwrap();
        // SAFETY: serialized with every other test touching the environment.
        unsafe { std::env::remove_var(brief::agent::AGENT_ENV_VAR) };
        let err = build_agent(&ResolveArgs {
            manifest: Some(write_manifest(dir.path())),
            ..args()
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_cmd_resolve_blank_messages() {
        let err = cmd_resolve(ResolveArgs {
            instructions: vec!["x".to_string()],
            messages: vec!["  ".to_string()],
            ..args()
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_cmd_resolve_outputs() {
        for (json, request) in [(false, false), (true, false), (false, true)] {
            let result = cmd_resolve(ResolveArgs {
                instructions: vec!["A: {x}".to_string()],
                tools: vec!["search".to_string()],
                json,
                request,
                ..args()
            });
            assert!(result.is_ok());
        }
    }
}
