//! Judge prompt construction

/// Longest context excerpt sent to the judge, in characters
pub const MAX_CONTEXT_CHARS: usize = 4000;

/// System message for chat-style providers
pub const SYSTEM_MESSAGE: &str = "You are a link analysis assistant that identifies \
benchmark and dataset links in machine learning and data mining papers.";

const JUDGE_INSTRUCTIONS: &str = r#"Analyze the link below, taken from a research paper, and decide whether it points to a Benchmark or Dataset that can be downloaded or accessed directly.

Criteria:
1. The link should lead directly to a dataset download page or to a repository that contains the dataset.
2. It is NOT a framework homepage (such as PyTorch or TensorFlow), a project homepage, a blog, or a general introduction page.
3. The target should be a benchmark or dataset usable for machine learning / data mining tasks.
4. The link should point to a real resource, not a placeholder or example URL."#;

const ANSWER_FORMAT: &str =
    "Think it over, then answer 'YES' or 'NO' followed by a one-sentence justification.";

/// Build the complete judge prompt for one (URL, context) pair
pub fn build_judge_prompt(url: &str, context: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(JUDGE_INSTRUCTIONS);
    prompt.push_str("\n\n");

    prompt.push_str(&format!("Link: {}\n", url));
    prompt.push_str("Context:\n");
    prompt.push_str("---\n");
    prompt.push_str(truncate_chars(context.trim(), MAX_CONTEXT_CHARS));
    prompt.push_str("\n---\n\n");

    prompt.push_str(ANSWER_FORMAT);

    prompt
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_url_and_context() {
        let prompt = build_judge_prompt(
            "https://www.cs.toronto.edu/~kriz/cifar.html",
            "We use the CIFAR-10 dataset",
        );
        assert!(prompt.contains("Link: https://www.cs.toronto.edu/~kriz/cifar.html"));
        assert!(prompt.contains("We use the CIFAR-10 dataset"));
        assert!(prompt.contains("'YES' or 'NO'"));
    }

    #[test]
    fn test_context_truncated_on_char_boundary() {
        let context = "é".repeat(MAX_CONTEXT_CHARS + 10);
        let prompt = build_judge_prompt("https://a.org", &context);
        let kept = prompt.matches('é').count();
        assert_eq!(kept, MAX_CONTEXT_CHARS);
    }
}
