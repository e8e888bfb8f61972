//! Classification verdicts
//!
//! A verdict is produced for every (URL, context) pair the classifier sees.
//! It records not only the outcome but which stage decided it and why, so
//! that a judge failure and an ordinary negative stay distinguishable.

use std::fmt;

/// Which stage of the classifier produced the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Deterministic inclusion rules decided
    Rule,
    /// The external judge decided (negative, failed, or not consulted)
    Judge,
    /// The judge said yes and the verification filter ran
    JudgeVerify,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Rule => "rule",
            Method::Judge => "judge",
            Method::JudgeVerify => "judge+verify",
        };
        f.write_str(s)
    }
}

/// Why a verdict came out the way it did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerdictReason {
    /// Host is a known dataset-hosting domain (and the path qualified)
    KnownDatasetDomain {
        /// Matching host
        domain: String,
    },

    /// Path contains a dataset keyword
    DatasetPathKeyword {
        /// Matching keyword
        keyword: String,
    },

    /// Context contains a dataset-indicating phrase
    DatasetContextPhrase {
        /// Matching phrase
        phrase: String,
    },

    /// No inclusion rule fired and no judge is configured
    NoRuleMatched,

    /// URL failed the syntactic validity check
    Malformed,

    /// Judge answered without the affirmative token
    JudgeDeclined,

    /// Judge call failed; treated as negative for this context
    JudgeFailed(String),

    /// Judge answered yes and verification found nothing to reject
    JudgeConfirmed,

    /// Host is a framework or general platform and the path has no dataset keyword
    ExcludedPlatform {
        /// Matching platform
        domain: String,
    },

    /// URL contains a placeholder marker
    Placeholder {
        /// Matching marker
        marker: String,
    },

    /// Code-hosting URL without dataset context or dataset path
    CodeRepository {
        /// Matching code host
        domain: String,
    },
}

impl fmt::Display for VerdictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictReason::KnownDatasetDomain { domain } => {
                write!(f, "known dataset domain {}", domain)
            }
            VerdictReason::DatasetPathKeyword { keyword } => {
                write!(f, "path keyword '{}'", keyword)
            }
            VerdictReason::DatasetContextPhrase { phrase } => {
                write!(f, "context phrase '{}'", phrase)
            }
            VerdictReason::NoRuleMatched => write!(f, "no rule matched"),
            VerdictReason::Malformed => write!(f, "malformed url"),
            VerdictReason::JudgeDeclined => write!(f, "judge declined"),
            VerdictReason::JudgeFailed(msg) => write!(f, "judge failed: {}", msg),
            VerdictReason::JudgeConfirmed => write!(f, "judge confirmed"),
            VerdictReason::ExcludedPlatform { domain } => {
                write!(f, "excluded platform {}", domain)
            }
            VerdictReason::Placeholder { marker } => {
                write!(f, "placeholder marker '{}'", marker)
            }
            VerdictReason::CodeRepository { domain } => {
                write!(f, "source code repository on {}", domain)
            }
        }
    }
}

/// Outcome of classifying one (URL, context) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationVerdict {
    /// URL that was classified
    pub url: String,

    /// `true` if the URL points to a dataset or benchmark
    pub verdict: bool,

    /// Stage that decided
    pub method: Method,

    /// Why
    pub reason: VerdictReason,
}

impl ClassificationVerdict {
    /// Positive verdict
    pub fn positive(url: impl Into<String>, method: Method, reason: VerdictReason) -> Self {
        Self {
            url: url.into(),
            verdict: true,
            method,
            reason,
        }
    }

    /// Negative verdict
    pub fn negative(url: impl Into<String>, method: Method, reason: VerdictReason) -> Self {
        Self {
            url: url.into(),
            verdict: false,
            method,
            reason,
        }
    }

    /// Whether the judge call itself failed
    pub fn is_failure(&self) -> bool {
        matches!(self.reason, VerdictReason::JudgeFailed(_))
    }
}
