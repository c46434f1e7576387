//! Instruction aggregation.
//!
//! Combines the instructions discovered for an agent with those supplied by
//! the caller, resolves each template against the invocation's bindings and
//! joins the results into the final instruction text.
//!
//! # Resolution Order
//!
//! 1. No provided instructions: the discovered set is used unchanged
//! 2. `replace`: only the provided set is used
//! 3. `append`: discovered followed by provided, duplicates kept
//!
//! Every invocation works on its own inputs and allocates its own report, so
//! concurrent invocations against the same agent never share mutable state.

use super::bindings::VariableBindings;
use super::instructions::InstructionSet;
use super::template::resolve;
use crate::agent::report::{ExecutionReport, MessageList};
use crate::config::ResolutionPolicy;
use crate::error::Result;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Joined output when no instructions are configured at all.
pub const NO_INSTRUCTIONS: &str = "No further instructions.";

/// Determine which templates apply under `policy`.
pub fn effective_instructions(
    discovered: &InstructionSet,
    provided: Option<&InstructionSet>,
    policy: ResolutionPolicy,
) -> InstructionSet {
    match provided {
        None => discovered.clone(),
        Some(provided) if provided.is_empty() => discovered.clone(),
        Some(provided) => match policy {
            ResolutionPolicy::Replace => provided.clone(),
            ResolutionPolicy::Append => discovered.chain(provided),
        },
    }
}

/// Resolve every template in order.
pub fn resolve_all(instructions: &InstructionSet, bindings: &VariableBindings) -> Vec<String> {
    instructions
        .iter()
        .map(|template| resolve(template, bindings))
        .collect()
}

/// Join resolved templates with newlines and trim the result.
///
/// An empty list yields [`NO_INSTRUCTIONS`]; templates that resolve to blank
/// text still yield an empty string.
pub fn join_resolved(resolved: &[String]) -> String {
    if resolved.is_empty() {
        return NO_INSTRUCTIONS.to_string();
    }
    resolved.join("\n").trim().to_string()
}

/// Combine, resolve and join in one step.
///
/// # Examples
///
/// ```
/// use brief::agent::prompt::{aggregate, vars, InstructionSet};
/// use brief::config::ResolutionPolicy;
///
/// let discovered = InstructionSet::from("A: {x}");
/// let provided = InstructionSet::from("B: {y}");
/// let bindings = vars([("x", "1"), ("y", "2")]);
///
/// let text = aggregate(&discovered, Some(&provided), ResolutionPolicy::Append, &bindings);
/// assert_eq!(text, "A: 1\nB: 2");
/// ```
pub fn aggregate(
    discovered: &InstructionSet,
    provided: Option<&InstructionSet>,
    policy: ResolutionPolicy,
    bindings: &VariableBindings,
) -> String {
    let effective = effective_instructions(discovered, provided, policy);
    join_resolved(&resolve_all(&effective, bindings))
}

/// Run a full invocation and build its report.
///
/// Empty or blank `messages` fail immediately with `InvalidInput`. Any other
/// failure while computing the instructions is captured in a report with
/// `success == false` instead of being propagated.
///
/// Capture does not silence the process panic hook: with the default hook a
/// captured failure still prints `thread '..' panicked at ..` to stderr. Hosts
/// that want only the `warn!` event install their own hook with
/// [`std::panic::set_hook`].
pub fn execute(
    discovered: &InstructionSet,
    provided: Option<&InstructionSet>,
    policy: ResolutionPolicy,
    messages: MessageList,
    bindings: VariableBindings,
) -> Result<ExecutionReport> {
    execute_with(discovered, provided, policy, messages, bindings, resolve)
}

pub(crate) fn execute_with<F>(
    discovered: &InstructionSet,
    provided: Option<&InstructionSet>,
    policy: ResolutionPolicy,
    messages: MessageList,
    bindings: VariableBindings,
    resolver: F,
) -> Result<ExecutionReport>
where
    F: Fn(&str, &VariableBindings) -> String,
{
    messages.validate()?;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let effective = effective_instructions(discovered, provided, policy);
        let parsed: Vec<String> = effective
            .iter()
            .map(|template| resolver(template, &bindings))
            .collect();
        let joined = join_resolved(&parsed);
        (joined, parsed)
    }));

    match outcome {
        Ok((joined, parsed)) => {
            debug!(
                templates = parsed.len(),
                messages = messages.len(),
                "instructions resolved"
            );
            Ok(ExecutionReport::succeeded(joined, messages, parsed, bindings))
        }
        Err(payload) => {
            let error = panic_message(payload.as_ref());
            warn!(error = %error, "instruction resolution failed");
            Ok(ExecutionReport::failed(error, messages, bindings))
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "instruction resolution failed unexpectedly".to_string()
    }
}
