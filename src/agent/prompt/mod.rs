//! Instruction resolution subsystem.
//!
//! This module provides:
//!
//! - **Template**: Best-effort `{variable}` substitution that never fails
//! - **Bindings**: Typed placeholder values supplied per invocation
//! - **Instructions**: Ordered template sets
//! - **Aggregate**: Combining discovered and provided instructions into one text
//!
//! # Template Syntax
//!
//! Templates use `{variable}` placeholders:
//!
//! ```text
//! Remember {var1} and also {var2} in your response.
//! ```
//!
//! Use `{{` to escape and render a literal `{`. Unbound placeholders render as
//! empty text.

mod aggregate;
mod bindings;
mod instructions;
mod template;

pub use aggregate::{
    NO_INSTRUCTIONS, aggregate, effective_instructions, execute, join_resolved, resolve_all,
};
pub use bindings::{BindingValue, VariableBindings, vars};
pub use instructions::InstructionSet;
pub use template::{TemplateError, placeholder_names, render_strict, resolve};
