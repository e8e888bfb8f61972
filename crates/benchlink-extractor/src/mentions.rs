//! Token-based dataset name finder
//!
//! Looks for phrases like "the CIFAR-10 dataset" or "our ImageNet subset
//! dataset": a cue word containing `dataset`, preceded within a few tokens
//! by a hint word. Whatever sits between hint and cue is the name.

use benchlink_domain::{mention::mention_key, DatasetMention};
use std::collections::HashMap;
use tracing::debug;

/// Substring identifying a cue word
const CUE: &str = "dataset";

/// Words that open a dataset name phrase
const HINT_WORDS: &[&str] = &["the", "our", "this", "such"];

/// Punctuation split off the end of words
const SENTENCE_PUNCT: &[char] = &['.', ',', ';', ':', '!', '?'];

/// One unit of the token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Whitespace-delimited word with trailing punctuation removed
    Word(String),
    /// Sentence punctuation
    Punct(char),
    /// Line break
    Newline,
}

/// Split lines into words, punctuation and line-break markers
///
/// A line ending in `word-` is rejoined with the first word of the next
/// line, the hyphen dropped.
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Vec<Token> {
    let mut words: Vec<Vec<String>> = lines
        .iter()
        .map(|l| l.as_ref().split_whitespace().map(str::to_string).collect())
        .collect();

    for i in 0..words.len().saturating_sub(1) {
        let broken = words[i]
            .last()
            .and_then(|w| w.strip_suffix('-'))
            .filter(|stem| stem.chars().last().is_some_and(char::is_alphanumeric))
            .map(str::to_string);

        if let Some(stem) = broken {
            if words[i + 1].is_empty() {
                continue;
            }
            let rest = words[i + 1].remove(0);
            if let Some(last) = words[i].last_mut() {
                *last = format!("{}{}", stem, rest);
            }
        }
    }

    let mut tokens = Vec::new();
    for (i, line) in words.into_iter().enumerate() {
        if i > 0 {
            tokens.push(Token::Newline);
        }
        for word in line {
            push_word(&mut tokens, &word);
        }
    }
    tokens
}

fn push_word(tokens: &mut Vec<Token>, word: &str) {
    let core = word.trim_end_matches(SENTENCE_PUNCT);
    if !core.is_empty() {
        tokens.push(Token::Word(core.to_string()));
    }
    tokens.extend(word[core.len()..].chars().map(Token::Punct));
}

/// Render tokens back to text: words space-separated, punctuation attached
fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Word(w) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push(' ');
                }
                out.push_str(w);
            }
            Token::Punct(c) => out.push(*c),
            Token::Newline => out.push('\n'),
        }
    }
    out.trim().to_string()
}

/// Finds dataset names and the text around them
#[derive(Debug, Clone)]
pub struct DatasetNameFinder {
    lookback: usize,
    context_markers: usize,
}

impl DatasetNameFinder {
    /// Create a finder
    ///
    /// `lookback` bounds how far before the cue a hint word may sit;
    /// `context_markers` is how many line breaks on each side bound the
    /// context.
    pub fn new(lookback: usize, context_markers: usize) -> Self {
        Self {
            lookback: lookback.max(1),
            context_markers: context_markers.max(1),
        }
    }

    /// Find mentions in a text rendering
    pub fn find<S: AsRef<str>>(&self, lines: &[S]) -> Vec<DatasetMention> {
        self.find_in_tokens(&tokenize(lines))
    }

    /// Find mentions in an already tokenized stream
    ///
    /// Mentions are keyed case-insensitively and returned in first-seen
    /// order; repeated contexts for the same name are recorded once.
    pub fn find_in_tokens(&self, tokens: &[Token]) -> Vec<DatasetMention> {
        let mut mentions: Vec<DatasetMention> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (j, token) in tokens.iter().enumerate() {
            let Token::Word(word) = token else {
                continue;
            };
            if !word.to_lowercase().contains(CUE) {
                continue;
            }
            let Some(hint) = self.find_hint(tokens, j) else {
                continue;
            };

            let name = tokens[hint + 1..j]
                .iter()
                .filter_map(|t| match t {
                    Token::Word(w) => Some(w.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(" ");
            if name.is_empty() {
                continue;
            }

            let context = self.context(tokens, j);
            let key = mention_key(&name);
            debug!("Dataset mention: {}", name);

            match index.get(&key) {
                Some(&i) => {
                    mentions[i].add_context(context);
                }
                None => {
                    index.insert(key, mentions.len());
                    mentions.push(DatasetMention::new(name, context));
                }
            }
        }

        mentions
    }

    /// Nearest hint word before `cue`, unless punctuation intervenes
    fn find_hint(&self, tokens: &[Token], cue: usize) -> Option<usize> {
        for k in (cue.saturating_sub(self.lookback)..cue).rev() {
            match &tokens[k] {
                Token::Word(w) if HINT_WORDS.contains(&w.to_lowercase().as_str()) => {
                    return Some(k)
                }
                Token::Punct(_) => return None,
                _ => {}
            }
        }
        None
    }

    /// Tokens between the n-th line break before and after `cue`
    fn context(&self, tokens: &[Token], cue: usize) -> String {
        let start = tokens[..cue]
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, t)| **t == Token::Newline)
            .nth(self.context_markers - 1)
            .map_or(0, |(k, _)| k + 1);

        let end = tokens[cue + 1..]
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Token::Newline)
            .nth(self.context_markers - 1)
            .map_or(tokens.len(), |(k, _)| cue + 1 + k);

        render(&tokens[start..end])
    }
}

impl Default for DatasetNameFinder {
    fn default() -> Self {
        Self::new(4, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(lines: &[&str]) -> Vec<String> {
        DatasetNameFinder::default()
            .find(lines)
            .into_iter()
            .map(|m| m.name)
            .collect()
    }

    #[test]
    fn test_tokenize_splits_trailing_punct() {
        let tokens = tokenize(&["the CIFAR-10 dataset."]);
        assert_eq!(
            tokens,
            vec![
                Token::Word("the".into()),
                Token::Word("CIFAR-10".into()),
                Token::Word("dataset".into()),
                Token::Punct('.'),
            ]
        );
    }

    #[test]
    fn test_tokenize_rejoins_hyphenated_break() {
        let tokens = tokenize(&["the Image-", "Net dataset"]);
        assert_eq!(
            tokens,
            vec![
                Token::Word("the".into()),
                Token::Word("ImageNet".into()),
                Token::Newline,
                Token::Word("dataset".into()),
            ]
        );
    }

    #[test]
    fn test_simple_mention() {
        assert_eq!(names(&["We train on the CIFAR-10 dataset."]), vec!["CIFAR-10"]);
    }

    #[test]
    fn test_multi_word_name() {
        assert_eq!(
            names(&["Results on our Penn Tree Bank dataset are shown"]),
            vec!["Penn Tree Bank"]
        );
    }

    #[test]
    fn test_name_beyond_lookback_ignored() {
        assert!(names(&["the very large web crawl dataset"]).is_empty());
    }

    #[test]
    fn test_punctuation_blocks_hint() {
        assert!(names(&["we used the model. MNIST dataset"]).is_empty());
    }

    #[test]
    fn test_nearest_hint_wins() {
        assert_eq!(names(&["the this MNIST dataset"]), vec!["MNIST"]);
    }

    #[test]
    fn test_empty_name_skipped() {
        assert!(names(&["We release the dataset publicly"]).is_empty());
    }

    #[test]
    fn test_plural_cue_and_case() {
        assert_eq!(names(&["Such GLUE Datasets help"]), vec!["GLUE"]);
    }

    #[test]
    fn test_mentions_merge_case_insensitively() {
        let found = DatasetNameFinder::default().find(&[
            "We use the MNIST dataset.",
            "",
            "",
            "",
            "Then the mnist dataset again.",
        ]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "MNIST");
        assert_eq!(found[0].contexts.len(), 2);
    }

    #[test]
    fn test_context_bounded_by_line_breaks() {
        let found = DatasetNameFinder::default().find(&[
            "l0", "l1", "l2", "on the MNIST dataset", "l4", "l5", "l6",
        ]);
        assert_eq!(found[0].contexts, vec!["l2\non the MNIST dataset\nl4"]);
    }

    #[test]
    fn test_hint_across_line_break() {
        assert_eq!(names(&["we evaluate on the", "SQuAD dataset"]), vec!["SQuAD"]);
    }
}
