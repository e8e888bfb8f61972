//! Static rule tables for inclusion (stage 1) and verification (stage 3)

use benchlink_domain::VerdictReason;
use std::collections::HashMap;

/// Dataset-hosting domains and the path keywords they require
///
/// An empty keyword list means any path on the domain qualifies.
const DATASET_DOMAINS: &[(&str, &[&str])] = &[
    ("github.com", &["dataset", "benchmark", "data", "corpus", "evaluation"]),
    ("huggingface.co", &["datasets"]),
    ("kaggle.com", &["datasets"]),
    ("paperswithcode.com", &["datasets", "benchmarks"]),
    ("tensorflow.org", &["datasets", "data"]),
    ("pytorch.org", &["data", "datasets"]),
    ("zenodo.org", &[]),
    ("figshare.com", &[]),
    ("data.mendeley.com", &[]),
    ("datadryad.org", &[]),
    ("dataverse.harvard.edu", &[]),
    ("catalog.ldc.upenn.edu", &[]),
    ("archive.ics.uci.edu", &[]),
];

const PATH_KEYWORDS: &[&str] = &[
    "dataset",
    "benchmark",
    "corpus",
    "data-download",
    "download-data",
    "data/download",
    "download/data",
    "evaluate",
    "evaluation",
    "metrics",
    "performance",
    "leaderboard",
    "competition",
    "challenge",
];

const CONTEXT_PHRASES: &[&str] = &[
    "dataset",
    "data set",
    "benchmark",
    "corpus",
    "evaluation",
    "metric",
    "leaderboard",
    "test set",
    "training data",
    "test data",
    "evaluation data",
];

const BLOG_MARKERS: &[&str] = &["blog", "post", "article", "news", "about"];

/// Framework and general-purpose sites that are not datasets themselves
const PLATFORMS: &[&str] = &[
    "pytorch.org",
    "tensorflow.org",
    "keras.io",
    "wikipedia.org",
    "youtube.com",
    "twitter.com",
    "facebook.com",
    "linkedin.com",
    "medium.com",
    "arxiv.org",
    "google.com",
];

/// Path keywords that let a platform URL or code repository through
const DATASET_PATH_KEYWORDS: &[&str] = &["dataset", "data", "benchmark", "corpus"];

const PLACEHOLDER_MARKERS: &[&str] = &["username", "example", "sample", "placeholder", "yourname"];

const DATASET_CONTEXT_INDICATORS: &[&str] = &[
    "dataset",
    "benchmark",
    "corpus",
    "data available at",
    "download from",
    "available at",
    "code and data",
];

const CODE_HOSTS: &[&str] = &["github.com", "gitlab.com", "bitbucket.org"];

/// A URL split into the parts the rules look at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Full URL, lowercase
    pub url: String,
    /// Host, lowercase, without a leading `www.`
    pub host: String,
    /// Path, lowercase
    pub path: String,
}

impl Target {
    /// Parse `url`, or `None` if it is not a well-formed http(s) URL
    ///
    /// A trailing hyphen or a second scheme marker also count as malformed;
    /// both are line-wrap artifacts of PDF conversion.
    pub fn parse(url: &str) -> Option<Self> {
        let trimmed = url.trim();
        if trimmed.ends_with('-') || trimmed.matches("://").count() != 1 {
            return None;
        }

        let parsed = url::Url::parse(trimmed).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        let host = parsed.host_str()?.to_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host).to_string();

        Some(Self {
            url: trimmed.to_lowercase(),
            host,
            path: parsed.path().to_lowercase(),
        })
    }

    fn host_is_or_under(&self, domain: &str) -> bool {
        self.host == domain
            || self
                .host
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.ends_with('.'))
    }

    fn path_has_any(&self, keywords: &[&'static str]) -> Option<&'static str> {
        keywords.iter().copied().find(|k| self.path.contains(k))
    }
}

fn contains_any(haystack: &str, needles: &[&'static str]) -> Option<&'static str> {
    needles.iter().copied().find(|n| haystack.contains(n))
}

/// Inclusion and verification rules, built once
#[derive(Debug, Clone)]
pub struct RuleSet {
    dataset_domains: HashMap<&'static str, &'static [&'static str]>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleSet {
    /// The built-in tables
    pub fn standard() -> Self {
        Self {
            dataset_domains: DATASET_DOMAINS.iter().copied().collect(),
        }
    }

    /// Stage 1: the first inclusion rule that fires, if any
    pub fn inclusion(&self, target: &Target, context: &str) -> Option<VerdictReason> {
        if let Some(required) = self.dataset_domains.get(target.host.as_str()) {
            if required.is_empty() || target.path_has_any(required).is_some() {
                return Some(VerdictReason::KnownDatasetDomain {
                    domain: target.host.clone(),
                });
            }
        }

        if let Some(keyword) = target.path_has_any(PATH_KEYWORDS) {
            return Some(VerdictReason::DatasetPathKeyword {
                keyword: keyword.to_string(),
            });
        }

        if self.platform(target).is_some() || target.path_has_any(BLOG_MARKERS).is_some() {
            return None;
        }
        contains_any(&context.to_lowercase(), CONTEXT_PHRASES).map(|phrase| {
            VerdictReason::DatasetContextPhrase {
                phrase: phrase.to_string(),
            }
        })
    }

    /// Stage 3: the first exclusion that applies to a judge-positive URL
    pub fn exclusion(&self, target: &Target, context: &str) -> Option<VerdictReason> {
        if let Some(domain) = self.platform(target) {
            if target.path_has_any(DATASET_PATH_KEYWORDS).is_none() {
                return Some(VerdictReason::ExcludedPlatform {
                    domain: domain.to_string(),
                });
            }
        }

        if let Some(marker) = contains_any(&target.url, PLACEHOLDER_MARKERS) {
            return Some(VerdictReason::Placeholder {
                marker: marker.to_string(),
            });
        }

        if let Some(host) = CODE_HOSTS.iter().find(|h| target.host == **h) {
            let dataset_context =
                contains_any(&context.to_lowercase(), DATASET_CONTEXT_INDICATORS).is_some();
            if !dataset_context && target.path_has_any(DATASET_PATH_KEYWORDS).is_none() {
                return Some(VerdictReason::CodeRepository {
                    domain: host.to_string(),
                });
            }
        }

        None
    }

    fn platform(&self, target: &Target) -> Option<&'static str> {
        PLATFORMS
            .iter()
            .copied()
            .find(|p| target.host_is_or_under(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(url: &str) -> Target {
        Target::parse(url).unwrap()
    }

    #[test]
    fn test_parse_strips_www_and_lowercases() {
        let t = target("https://WWW.Kaggle.com/Datasets/Foo");
        assert_eq!(t.host, "kaggle.com");
        assert_eq!(t.path, "/datasets/foo");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Target::parse("not a url").is_none());
        assert!(Target::parse("ftp://files.org/data").is_none());
        assert!(Target::parse("https://a.org/x-").is_none());
        assert!(Target::parse("https://a.org/https://b.org").is_none());
    }

    #[test]
    fn test_whole_domain_entry() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.inclusion(&target("https://zenodo.org/record/1"), ""),
            Some(VerdictReason::KnownDatasetDomain {
                domain: "zenodo.org".into()
            })
        );
    }

    #[test]
    fn test_domain_requires_keyword() {
        let rules = RuleSet::standard();
        assert!(rules
            .inclusion(&target("https://huggingface.co/bert-base-uncased"), "")
            .is_none());
        assert!(rules
            .inclusion(&target("https://huggingface.co/datasets/squad"), "")
            .is_some());
    }

    #[test]
    fn test_path_keyword_rule() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.inclusion(&target("https://example.edu/~lab/leaderboard.html"), ""),
            Some(VerdictReason::DatasetPathKeyword {
                keyword: "leaderboard".into()
            })
        );
    }

    #[test]
    fn test_context_rule_and_blog_marker() {
        let rules = RuleSet::standard();
        let ctx = "We use the MNIST data set for training.";
        assert!(rules.inclusion(&target("https://yann.lecun.com/exdb/mnist"), ctx).is_some());
        assert!(rules
            .inclusion(&target("https://someone.io/blog/mnist-tricks"), ctx)
            .is_none());
    }

    #[test]
    fn test_context_rule_skips_platforms() {
        let rules = RuleSet::standard();
        assert!(rules
            .inclusion(&target("https://pytorch.org"), "the CIFAR-10 dataset")
            .is_none());
        assert!(rules
            .inclusion(&target("https://en.wikipedia.org/wiki/MNIST"), "dataset")
            .is_none());
    }

    #[test]
    fn test_platform_exclusion_with_exception() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.exclusion(&target("https://keras.io/api/"), ""),
            Some(VerdictReason::ExcludedPlatform {
                domain: "keras.io".into()
            })
        );
        assert!(rules
            .exclusion(&target("https://keras.io/api/datasets/"), "")
            .is_none());
    }

    #[test]
    fn test_subdomain_counts_as_platform() {
        let rules = RuleSet::standard();
        assert!(matches!(
            rules.exclusion(&target("https://en.wikipedia.org/wiki/Iris"), ""),
            Some(VerdictReason::ExcludedPlatform { .. })
        ));
        assert!(rules
            .exclusion(&target("https://notgoogle.com/page"), "")
            .is_none());
    }

    #[test]
    fn test_placeholder_exclusion() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.exclusion(&target("https://gitlab.com/yourname/repo"), "dataset"),
            Some(VerdictReason::Placeholder {
                marker: "yourname".into()
            })
        );
    }

    #[test]
    fn test_code_host_exclusion() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.exclusion(&target("https://github.com/user/project"), "Our code."),
            Some(VerdictReason::CodeRepository {
                domain: "github.com".into()
            })
        );
        assert!(rules
            .exclusion(
                &target("https://github.com/user/project"),
                "code and data are released"
            )
            .is_none());
        assert!(rules
            .exclusion(&target("https://gitlab.com/user/corpus-tools"), "")
            .is_none());
    }
}
