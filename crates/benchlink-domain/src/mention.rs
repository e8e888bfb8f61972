//! Dataset name mentions

use serde::{Deserialize, Serialize};

/// A dataset name found in running text
///
/// The name is a short phrase (at most three tokens) that sat between a
/// hint word ("the", "our", ...) and the cue word "dataset". Mentions with
/// the same name accumulate distinct contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMention {
    /// Name as first seen in the text
    pub name: String,

    /// Distinct context windows, in first-seen order
    pub contexts: Vec<String>,
}

impl DatasetMention {
    /// Create a mention with its first context
    pub fn new(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contexts: vec![context.into()],
        }
    }

    /// Lookup key: lowercase, whitespace collapsed
    pub fn key(&self) -> String {
        mention_key(&self.name)
    }

    /// Add a context unless an identical one is already recorded
    ///
    /// Returns `true` if the context was new.
    pub fn add_context(&mut self, context: impl Into<String>) -> bool {
        let context = context.into();
        if self.contexts.contains(&context) {
            return false;
        }
        self.contexts.push(context);
        true
    }
}

/// Normalize a mention phrase into its lookup key
pub fn mention_key(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
