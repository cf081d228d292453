//! Answering a message: FAQ first, generated text as a fallback.
//!
//! Matching never waits on anything. The [`Responder`] runs the synchronous
//! best-match query and only when it comes back empty does it await an
//! [`AnswerGenerator`], bounded by a timeout.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use faq_matcher::config::RulesConfig;
//! use faq_matcher::faq::Faq;
//! use faq_matcher::responder::{CannedAnswerGenerator, Reply, Responder};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! runtime.block_on(async {
//!     let generator = Arc::new(CannedAnswerGenerator::new().with_delay(Duration::ZERO));
//!     let responder = Responder::new(generator);
//!
//!     let faqs = vec![Faq::new("refund", "İade?", "Formu doldurun.").with_keywords(vec!["iade"])];
//!     let config = RulesConfig::default();
//!
//!     match responder.respond("iade", &faqs, &config).await.unwrap() {
//!         Reply::Faq { faq, .. } => assert_eq!(faq.id, "refund"),
//!         Reply::Generated { .. } => unreachable!(),
//!     }
//!
//!     let reply = responder.respond("merhaba", &faqs, &config).await.unwrap();
//!     assert!(matches!(reply, Reply::Generated { .. }));
//! });
//! ```

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::RulesConfig;
use crate::error::{FaqMatcherError, Result};
use crate::faq::Faq;
use crate::matching::{FaqMatch, Ranker};

/// Default time allowed for a fallback answer.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Produces free text for messages no FAQ answers.
#[async_trait]
pub trait AnswerGenerator: Send + Sync + Debug {
    /// Generate an answer for the message.
    async fn generate(&self, message: &str) -> Result<String>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// A stand-in generator that waits, then asks the user for more detail.
#[derive(Clone, Debug)]
pub struct CannedAnswerGenerator {
    delay: Duration,
}

impl CannedAnswerGenerator {
    /// Default simulated latency.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    /// Create a generator with the default delay.
    pub fn new() -> Self {
        CannedAnswerGenerator {
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Set the simulated latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for CannedAnswerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerGenerator for CannedAnswerGenerator {
    async fn generate(&self, message: &str) -> Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(format!(
            "Bu sorunuz hakkında kesin bir cevabım yok, ancak size yardımcı olmaya çalışayım. \
             \"{message}\" ile ilgili daha fazla bilgi verebilir misiniz? \
             Böylece size daha iyi yardımcı olabilirim."
        ))
    }

    fn name(&self) -> &str {
        "canned"
    }
}

/// The answer to a message.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Reply<'a> {
    /// An FAQ cleared the threshold.
    Faq {
        faq: &'a Faq,
        #[serde(rename = "match")]
        result: FaqMatch,
    },
    /// No FAQ matched; the text comes from the generator.
    Generated { text: String, generator: String },
}

/// Answers messages from a catalog, falling back to a generator.
#[derive(Clone, Debug)]
pub struct Responder {
    generator: Arc<dyn AnswerGenerator>,
    timeout: Duration,
}

impl Responder {
    /// Create a responder with the default generation timeout.
    pub fn new(generator: Arc<dyn AnswerGenerator>) -> Self {
        Responder {
            generator,
            timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    /// Set the generation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the generation timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Answer a message.
    ///
    /// Fails only when the fallback generator fails or exceeds the timeout.
    pub async fn respond<'a>(
        &self,
        text: &str,
        faqs: &'a [Faq],
        config: &RulesConfig,
    ) -> Result<Reply<'a>> {
        // Matching completes before anything is awaited.
        if let Some(best) = Ranker::new(config).best_ranked(text, faqs) {
            return Ok(Reply::Faq {
                faq: best.faq,
                result: best.result,
            });
        }

        debug!(generator = self.generator.name(), "no FAQ matched, generating answer");

        match tokio::time::timeout(self.timeout, self.generator.generate(text)).await {
            Ok(Ok(text)) => Ok(Reply::Generated {
                text,
                generator: self.generator.name().to_string(),
            }),
            Ok(Err(e)) => {
                warn!(generator = self.generator.name(), error = %e, "answer generation failed");
                Err(e)
            }
            Err(_) => {
                warn!(
                    generator = self.generator.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "answer generation timed out"
                );
                Err(FaqMatcherError::timeout(format!(
                    "generator '{}' did not answer within {}ms",
                    self.generator.name(),
                    self.timeout.as_millis()
                )))
            }
        }
    }
}
