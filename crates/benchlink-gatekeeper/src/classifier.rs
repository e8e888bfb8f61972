//! Three-stage classification of (URL, context) pairs

use crate::rules::{RuleSet, Target};
use benchlink_domain::{ClassificationVerdict, Method, VerdictReason};
use benchlink_llm::{is_affirmative, JudgeInvoker};
use tracing::{debug, info, warn};

/// Decides whether a URL in a given context points to a dataset
///
/// 1. Deterministic inclusion rules; a hit is final.
/// 2. If no rule fired and a judge is configured, ask the judge.
/// 3. A judge "yes" passes through the verification filter, which may
///    still reject it.
///
/// Judge failures become negative verdicts carrying
/// [`VerdictReason::JudgeFailed`]; they never abort classification.
pub struct Classifier {
    rules: RuleSet,
    judge: Option<JudgeInvoker>,
}

impl Classifier {
    /// Create a classifier from explicit parts
    pub fn new(rules: RuleSet, judge: Option<JudgeInvoker>) -> Self {
        Self { rules, judge }
    }

    /// Classifier using only the deterministic rules
    pub fn rules_only() -> Self {
        Self::new(RuleSet::standard(), None)
    }

    /// Classifier with the standard rules and a judge fallback
    pub fn with_invoker(invoker: JudgeInvoker) -> Self {
        Self::new(RuleSet::standard(), Some(invoker))
    }

    /// Whether a judge fallback is configured
    pub fn has_judge(&self) -> bool {
        self.judge.is_some()
    }

    /// Classify one (URL, context) pair
    pub fn classify(&mut self, url: &str, context: &str) -> ClassificationVerdict {
        let Some(target) = Target::parse(url) else {
            debug!("Malformed URL skipped: {}", url);
            return ClassificationVerdict::negative(url, Method::Rule, VerdictReason::Malformed);
        };

        if let Some(reason) = self.rules.inclusion(&target, context) {
            debug!("{} accepted by rule: {}", url, reason);
            return ClassificationVerdict::positive(url, Method::Rule, reason);
        }

        let Some(invoker) = self.judge.as_mut() else {
            return ClassificationVerdict::negative(url, Method::Rule, VerdictReason::NoRuleMatched);
        };

        let response = match invoker.invoke(url, context) {
            Ok(response) => response,
            Err(e) => {
                warn!("Judge failed for {}, treating as negative: {}", url, e);
                return ClassificationVerdict::negative(
                    url,
                    Method::Judge,
                    VerdictReason::JudgeFailed(e.to_string()),
                );
            }
        };

        if !is_affirmative(&response) {
            info!("Judge classified {} as not a dataset", url);
            return ClassificationVerdict::negative(url, Method::Judge, VerdictReason::JudgeDeclined);
        }

        match self.rules.exclusion(&target, context) {
            Some(reason) => {
                info!("Judge accepted {} but verification rejected it: {}", url, reason);
                ClassificationVerdict::negative(url, Method::JudgeVerify, reason)
            }
            None => {
                info!("Judge classified {} as a dataset", url);
                ClassificationVerdict::positive(url, Method::JudgeVerify, VerdictReason::JudgeConfirmed)
            }
        }
    }

    /// Classify `url` once per context, in order
    pub fn classify_all<'a, I>(&mut self, url: &str, contexts: I) -> Vec<ClassificationVerdict>
    where
        I: IntoIterator<Item = &'a String>,
    {
        contexts
            .into_iter()
            .map(|context| self.classify(url, context))
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::rules_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlink_llm::{MockJudge, RateLimiter, RetryPolicy};
    use std::time::Duration;

    fn with_mock(judge: MockJudge) -> Classifier {
        Classifier::with_invoker(JudgeInvoker::new(
            judge,
            RateLimiter::new(Duration::ZERO),
            RetryPolicy::no_retry(),
        ))
    }

    #[test]
    fn test_rule_hit_without_judge() {
        let mut classifier = Classifier::rules_only();
        let verdict = classifier.classify("https://huggingface.co/datasets/foo", "");
        assert!(verdict.verdict);
        assert_eq!(verdict.method, Method::Rule);
    }

    #[test]
    fn test_rule_hit_never_calls_judge() {
        let judge = MockJudge::new("NO");
        let mut classifier = with_mock(judge.clone());
        let verdict = classifier.classify("https://huggingface.co/datasets/foo", "");
        assert!(verdict.verdict);
        assert_eq!(verdict.method, Method::Rule);
        assert_eq!(judge.call_count(), 0);
    }

    #[test]
    fn test_no_rule_no_judge() {
        let mut classifier = Classifier::rules_only();
        let verdict = classifier.classify("https://someone.io/page", "unrelated");
        assert!(!verdict.verdict);
        assert_eq!(verdict.reason, VerdictReason::NoRuleMatched);
    }

    #[test]
    fn test_malformed_never_reaches_judge() {
        let judge = MockJudge::new("YES");
        let mut classifier = with_mock(judge.clone());
        let verdict = classifier.classify("https://a.org/x-", "");
        assert!(!verdict.verdict);
        assert_eq!(verdict.reason, VerdictReason::Malformed);
        assert_eq!(judge.call_count(), 0);
    }

    #[test]
    fn test_judge_positive_confirmed() {
        let mut classifier = with_mock(MockJudge::new("YES, this is a download page"));
        let verdict = classifier.classify("https://lab.example.edu/~x/files.html", "");
        // "example" is a placeholder marker
        assert!(!verdict.verdict);

        let mut classifier = with_mock(MockJudge::new("YES, this is a download page"));
        let verdict = classifier.classify("https://lab.univ.edu/~x/files.html", "");
        assert!(verdict.verdict);
        assert_eq!(verdict.method, Method::JudgeVerify);
        assert_eq!(verdict.reason, VerdictReason::JudgeConfirmed);
    }

    #[test]
    fn test_judge_negative() {
        let judge = MockJudge::new("NO - a project homepage");
        let mut classifier = with_mock(judge.clone());
        let verdict = classifier.classify("https://lab.univ.edu/", "");
        assert!(!verdict.verdict);
        assert_eq!(verdict.method, Method::Judge);
        assert_eq!(verdict.reason, VerdictReason::JudgeDeclined);
        assert_eq!(judge.call_count(), 1);
    }

    #[test]
    fn test_code_repository_downgraded() {
        let mut classifier = with_mock(MockJudge::new("YES"));
        let verdict = classifier.classify("https://github.com/user/project", "Our code is public.");
        assert!(!verdict.verdict);
        assert_eq!(verdict.method, Method::JudgeVerify);
        assert_eq!(
            verdict.reason,
            VerdictReason::CodeRepository {
                domain: "github.com".into()
            }
        );
    }

    #[test]
    fn test_judge_failure_is_distinct_negative() {
        let mut judge = MockJudge::new("YES");
        judge.add_error("https://lab.univ.edu/files");
        let mut classifier = with_mock(judge);

        let verdict = classifier.classify("https://lab.univ.edu/files", "");
        assert!(!verdict.verdict);
        assert!(verdict.is_failure());

        // The next URL is unaffected
        let verdict = classifier.classify("https://lab.univ.edu/other", "");
        assert!(verdict.verdict);
    }

    #[test]
    fn test_classify_all_per_context() {
        let mut classifier = Classifier::rules_only();
        let contexts = vec!["the MNIST dataset".to_string(), "see our page".to_string()];
        let verdicts = classifier.classify_all("https://yann.lecun.com/exdb/mnist", &contexts);
        assert_eq!(verdicts.len(), 2);
        assert!(verdicts[0].verdict);
        assert!(!verdicts[1].verdict);
    }
}
