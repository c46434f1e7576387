//! Brief: instruction preparation for conversational agents.
//!
//! An agent is declared in a manifest (`agents.yaml`) or built directly
//! from instruction templates. Invoking it resolves the `{name}`
//! placeholders in every template against per-call bindings and joins the
//! results into one system-instruction string.
//!
//! ```
//! use brief::agent::{Agent, ManifestRegistry, prompt::vars};
//!
//! let registry = ManifestRegistry::from_yaml(
//!     "agents:\n  greeter:\n    instructions:\n      - \"Greet {user} warmly.\"\n",
//! )
//! .unwrap();
//! let agent = Agent::from_manifest(&registry, "greeter").unwrap();
//! let report = agent.invoke("Hello", vars([("user", "Ada")])).unwrap();
//!
//! assert_eq!(report.instructions().unwrap(), "Greet Ada warmly.");
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod exit_codes;
