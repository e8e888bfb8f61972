//! Benchlink Gatekeeper
//!
//! Decides which candidate URLs point to datasets or benchmarks.
//!
//! The [`Classifier`] runs three stages:
//! - deterministic inclusion rules over host, path and context
//! - an optional judge fallback, throttled by a [`benchlink_llm::JudgeInvoker`]
//! - a verification filter that can overturn a judge "yes"
//!
//! # Examples
//!
//! ```
//! use benchlink_gatekeeper::Classifier;
//! use benchlink_domain::Method;
//!
//! let mut classifier = Classifier::rules_only();
//! let verdict = classifier.classify("https://huggingface.co/datasets/squad", "");
//! assert!(verdict.verdict);
//! assert_eq!(verdict.method, Method::Rule);
//! ```

#![warn(missing_docs)]

mod classifier;
mod rules;

pub use classifier::Classifier;
pub use rules::{RuleSet, Target};
