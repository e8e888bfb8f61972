//! Rate-limited, retrying judge invocation

use crate::rate_limit::{RateLimiter, RetryPolicy};
use crate::JudgeError;
use benchlink_domain::traits::Judge;
use std::thread;
use tracing::{info, warn};

/// Type-erased judge, so the provider can be chosen at runtime
pub type BoxedJudge = Box<dyn Judge<Error = JudgeError> + Send>;

/// Wraps a judge with minimum-interval throttling and bounded retry
///
/// Every attempt, retries included, goes through the rate limiter. Only
/// transient failures (timeouts, connection errors) are retried; any other
/// error is returned to the caller immediately.
///
/// # Examples
///
/// ```
/// use benchlink_llm::{JudgeInvoker, MockJudge, RateLimiter, RetryPolicy};
/// use std::time::Duration;
///
/// let mut invoker = JudgeInvoker::new(
///     MockJudge::new("YES"),
///     RateLimiter::new(Duration::ZERO),
///     RetryPolicy::no_retry(),
/// );
/// assert_eq!(invoker.invoke("https://zenodo.org/record/1", "").unwrap(), "YES");
/// ```
pub struct JudgeInvoker {
    judge: BoxedJudge,
    limiter: RateLimiter,
    retry: RetryPolicy,
}

impl JudgeInvoker {
    /// Create an invoker around `judge`
    pub fn new<J>(judge: J, limiter: RateLimiter, retry: RetryPolicy) -> Self
    where
        J: Judge<Error = JudgeError> + Send + 'static,
    {
        Self::from_boxed(Box::new(judge), limiter, retry)
    }

    /// Create an invoker around an already boxed judge
    pub fn from_boxed(judge: BoxedJudge, limiter: RateLimiter, retry: RetryPolicy) -> Self {
        Self {
            judge,
            limiter,
            retry,
        }
    }

    /// Create an invoker with the default 3s interval and 3-attempt backoff
    pub fn with_defaults<J>(judge: J) -> Self
    where
        J: Judge<Error = JudgeError> + Send + 'static,
    {
        Self::new(judge, RateLimiter::default(), RetryPolicy::default())
    }

    /// Name of the underlying model
    pub fn model_name(&self) -> &str {
        self.judge.model_name()
    }

    /// The limiter owned by this invoker
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Ask the judge about `url` in `context`
    ///
    /// # Errors
    ///
    /// Returns the last error once transient failures exhaust the retry
    /// budget, or the first non-transient error.
    pub fn invoke(&mut self, url: &str, context: &str) -> Result<String, JudgeError> {
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            self.limiter.acquire();

            match self.judge.judge(url, context) {
                Ok(response) => {
                    info!(
                        "Judge call for {} succeeded using model: {}",
                        url,
                        self.judge.model_name()
                    );
                    return Ok(response);
                }
                Err(e) if e.is_transient() && attempt < max_attempts => {
                    let delay = self.retry.backoff(attempt);
                    warn!(
                        "Judge call for {} failed (attempt {}/{}): {}; retrying in {:?}",
                        url, attempt, max_attempts, e, delay
                    );
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(e) => {
                    warn!("Judge call for {} failed: {}", url, e);
                    return Err(e);
                }
            }
        }
    }
}
