//! Insertion-ordered URL → contexts mapping

use std::collections::HashMap;

/// Mapping from URL to every context window it was seen in
///
/// Keys keep their first-insertion order so that iteration (and therefore
/// log output and persisted results) is reproducible. Context lists are not
/// deduplicated here: one entry per occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl ContextMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `url` with its context
    pub fn insert(&mut self, url: impl Into<String>, context: impl Into<String>) {
        let slot = self.slot(url.into());
        self.entries[slot].1.push(context.into());
    }

    /// Append several contexts for `url`, creating the key if needed
    pub fn extend<I>(&mut self, url: impl Into<String>, contexts: I)
    where
        I: IntoIterator<Item = String>,
    {
        let slot = self.slot(url.into());
        self.entries[slot].1.extend(contexts);
    }

    /// Contexts recorded for `url`
    pub fn get(&self, url: &str) -> Option<&[String]> {
        self.index.get(url).map(|&i| self.entries[i].1.as_slice())
    }

    /// Whether `url` has been recorded
    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    /// Number of distinct URLs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no URL has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(url, contexts)` in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(url, contexts)| (url.as_str(), contexts.as_slice()))
    }

    /// URLs in first-insertion order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(url, _)| url.as_str())
    }

    fn slot(&mut self, url: String) -> usize {
        if let Some(&i) = self.index.get(&url) {
            return i;
        }
        let i = self.entries.len();
        self.index.insert(url.clone(), i);
        self.entries.push((url, Vec::new()));
        i
    }
}

impl IntoIterator for ContextMap {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
