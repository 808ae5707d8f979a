//! Rawi Generation Provider Layer
//!
//! Pluggable implementations of the `GenerationProvider` trait from
//! `rawi-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use rawi_llm::MockProvider;
//! use rawi_domain::traits::GenerationProvider;
//!
//! let provider = MockProvider::new("{\"author\": {}}");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "{\"author\": {}}");
//! ```

#![warn(missing_docs)]

pub mod gemini;

use rawi_domain::traits::GenerationProvider;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during generation operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Authentication or authorization failure
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Response arrived but carried no usable text
    #[error("Empty response from generation service")]
    EmptyResponse,

    /// Response could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Generation error: {0}")]
    Other(String),
}

/// A scripted reply held by the mock provider.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

/// Mock generation provider for deterministic testing.
///
/// Returns pre-configured responses without making network calls.
/// Responses can be keyed by exact prompt, queued in call order (useful
/// for exercising primary/fallback attempt sequences), or fall through to
/// a fixed default.
///
/// # Examples
///
/// ```
/// use rawi_llm::MockProvider;
/// use rawi_domain::traits::GenerationProvider;
///
/// let provider = MockProvider::sequence(["first", "second"]);
/// assert_eq!(provider.generate("p").unwrap(), "first");
/// assert_eq!(provider.generate("p").unwrap(), "second");
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    queue: Arc<Mutex<VecDeque<MockReply>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider returning a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            queue: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider that replays responses in call order, then falls
    /// back to repeating the last one
    pub fn sequence<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queue: VecDeque<MockReply> = responses
            .into_iter()
            .map(|r| MockReply::Text(r.into()))
            .collect();
        let last = match queue.back() {
            Some(MockReply::Text(t)) => t.clone(),
            _ => String::new(),
        };
        Self {
            default_response: last,
            responses: Arc::new(Mutex::new(HashMap::new())),
            queue: Arc::new(Mutex::new(queue)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for an exact prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure an exact prompt to fail
    pub fn add_error(&mut self, prompt: impl Into<String>, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Error(message.into()));
    }

    /// Queue an error as the next scripted reply
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.queue
            .lock()
            .unwrap()
            .push_back(MockReply::Error(message.into()));
    }

    /// Number of times `generate` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl GenerationProvider for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(reply) = self.queue.lock().unwrap().pop_front() {
            return match reply {
                MockReply::Text(t) => Ok(t),
                MockReply::Error(m) => Err(LlmError::Other(m)),
            };
        }

        if let Some(reply) = self.responses.lock().unwrap().get(prompt) {
            return match reply {
                MockReply::Text(t) => Ok(t.clone()),
                MockReply::Error(m) => Err(LlmError::Other(m.clone())),
            };
        }

        Ok(self.default_response.clone())
    }
}
