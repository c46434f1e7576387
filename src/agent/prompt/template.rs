//! Template resolver for instruction strings.
//!
//! Instruction templates are free-form text with `{name}` placeholders. The
//! resolver never fails: it first tries a strict parse, and when the text
//! contains brace syntax that is not a placeholder (JSON samples, code
//! snippets, stray braces) it falls back to substituting only the well-formed
//! placeholders and leaving everything else verbatim.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value bound to `name` (empty if unbound).
//!   `name` is `[A-Za-z_][A-Za-z0-9_]*`; whitespace inside the braces is trimmed.
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//! - A lone `}` is a regular character.
//!
//! Anything else that opens a brace (`{}`, `{0}`, `{a.b}`, an unclosed `{`)
//! is malformed and triggers the fallback scan, which keeps `{{` and `}}`
//! as written.

use super::bindings::VariableBindings;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// Escapes are matched first so `{{name}}` is never read as a placeholder.
/// Group 1 only participates for a real `{identifier}`.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}")
        .expect("Invalid placeholder regex")
});

/// Why a template could not be parsed strictly.
///
/// Only ever used to pick the fallback path; never surfaced to callers of
/// [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty placeholder (`{}`) was found.
    #[error("empty placeholder '{{}}' at position {position} in template")]
    EmptyPlaceholder { position: usize },

    /// Brace-delimited text that is not an identifier.
    #[error("invalid placeholder '{{{name}}}' at position {position} in template")]
    InvalidPlaceholder { name: String, position: usize },
}

/// Resolve a template against `bindings`.
///
/// Missing bindings render as the empty string. Malformed brace syntax is
/// absorbed by the fallback scan, so this never fails.
///
/// # Examples
///
/// ```
/// use brief::agent::prompt::{resolve, vars};
///
/// let bindings = vars([("var1", "Adam"), ("var2", "Eve"), ("var3", "bye")]);
/// let resolved = resolve("Remember {var1} and also {var2} in your response.", &bindings);
/// assert_eq!(resolved, "Remember Adam and also Eve in your response.");
/// ```
pub fn resolve(template: &str, bindings: &VariableBindings) -> String {
    match render_strict(template, bindings) {
        Ok(rendered) => rendered,
        Err(err) => {
            debug!(error = %err, "template is not strictly well-formed, using fallback substitution");
            render_fallback(template, bindings)
        }
    }
}

/// Strictly render a template.
///
/// Unbound placeholders render as the empty string; only malformed syntax is
/// an error.
pub fn render_strict(
    template: &str,
    bindings: &VariableBindings,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut raw_name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => raw_name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let name = raw_name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyPlaceholder { position: pos });
                }
                if !is_identifier(name) {
                    return Err(TemplateError::InvalidPlaceholder {
                        name: name.to_string(),
                        position: pos,
                    });
                }

                if !bindings.contains(name) {
                    debug!(placeholder = name, "no binding for placeholder, substituting empty text");
                }
                result.push_str(&bindings.render(name));
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Substitute only well-formed `{identifier}` tokens, leaving all other text
/// (including escape sequences) untouched.
fn render_fallback(template: &str, bindings: &VariableBindings) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| match caps.get(1) {
            Some(name) => bindings.render(name.as_str()),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Names of all well-formed placeholders in `template`, in order of first
/// appearance, without duplicates.
pub fn placeholder_names(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
