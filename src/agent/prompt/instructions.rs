//! Ordered instruction template sets.

use serde::{Deserialize, Deserializer, Serialize};

/// An ordered sequence of instruction templates belonging to one agent.
///
/// Order is the join order of the final instruction text; duplicates are kept.
/// Deserializes from either a single string or a list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstructionSet(Vec<String>);

impl InstructionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, template: impl Into<String>) {
        self.0.push(template.into());
    }

    /// Concatenate `other` after `self`, preserving order and duplicates.
    pub fn chain(&self, other: &InstructionSet) -> InstructionSet {
        self.0.iter().chain(other.0.iter()).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for InstructionSet {
    fn from(template: &str) -> Self {
        Self(vec![template.to_string()])
    }
}

impl From<String> for InstructionSet {
    fn from(template: String) -> Self {
        Self(vec![template])
    }
}

impl From<Vec<String>> for InstructionSet {
    fn from(templates: Vec<String>) -> Self {
        Self(templates)
    }
}

impl From<Vec<&str>> for InstructionSet {
    fn from(templates: Vec<&str>) -> Self {
        templates.into_iter().collect()
    }
}

impl From<&[&str]> for InstructionSet {
    fn from(templates: &[&str]) -> Self {
        templates.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for InstructionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for InstructionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(template) => Self(vec![template]),
            OneOrMany::Many(templates) => Self(templates),
        })
    }
}
