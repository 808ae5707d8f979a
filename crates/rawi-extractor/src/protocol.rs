//! The two-phase extraction protocol
//!
//! One author section, at most two generation calls. The protocol is a
//! small state machine over [`AttemptPhase`]: Primary, then Fallback only
//! if Primary failed, then terminal success or failure. Each attempt is
//! generate -> recover -> parse -> canonicalize; a service error, a
//! timeout, or unrecoverable JSON all fail the attempt the same way.
//! There is no backoff and no retry beyond the single fallback, and a
//! terminal failure is an explicit result, never a panic or abort.

use crate::config::ExtractorConfig;
use crate::prompt::PromptBuilder;
use crate::recovery::{canonicalize, recover};
use crate::types::{AttemptError, AttemptPhase, Extracted, ExtractionFailure};
use rawi_domain::traits::GenerationProvider;
use rawi_domain::AuthorRecord;
use serde_json::Value;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Runs the extraction protocol against a generation provider.
///
/// The provider is injected at construction time; nothing here reads
/// ambient configuration, so the protocol is deterministic under a stub
/// provider.
pub struct Extractor<P>
where
    P: GenerationProvider,
{
    provider: Arc<P>,
    config: ExtractorConfig,
}

impl<P> Extractor<P>
where
    P: GenerationProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    /// Create an extractor over a provider.
    pub fn new(provider: P, config: ExtractorConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Extract a structured record for one section.
    ///
    /// Success on either phase returns the canonicalized record; failure
    /// of both returns an [`ExtractionFailure`] attributing each phase.
    pub async fn extract(
        &self,
        identifier: &str,
        content: &str,
    ) -> Result<Extracted, ExtractionFailure> {
        info!(
            "Starting extraction for '{}', content length {}",
            identifier,
            content.len()
        );

        let primary = match self.attempt(AttemptPhase::Primary, identifier, content).await {
            Ok(extracted) => return Ok(extracted),
            Err(e) => {
                warn!("Primary attempt for '{}' failed: {}", identifier, e);
                e
            }
        };

        let fallback = match self.attempt(AttemptPhase::Fallback, identifier, content).await {
            Ok(extracted) => return Ok(extracted),
            Err(e) => {
                warn!("Fallback attempt for '{}' failed: {}", identifier, e);
                e
            }
        };

        Err(ExtractionFailure {
            identifier: identifier.to_string(),
            primary,
            fallback,
        })
    }

    /// Run one attempt phase to completion.
    async fn attempt(
        &self,
        phase: AttemptPhase,
        identifier: &str,
        content: &str,
    ) -> Result<Extracted, AttemptError> {
        let builder = PromptBuilder::new(identifier, content);
        let prompt = match phase {
            AttemptPhase::Primary => builder.primary(),
            AttemptPhase::Fallback => builder.fallback(self.config.fallback_excerpt_chars),
        };

        debug!("{} prompt length: {} chars", phase, prompt.len());

        let response = timeout(self.config.generation_timeout(), self.call_provider(&prompt))
            .await
            .map_err(|_| AttemptError::Service("generation timed out".to_string()))??;

        debug!("{} response length: {} chars", phase, response.len());

        let json_str = recover(&response).ok_or(AttemptError::NoJson)?;
        let value: Value = serde_json::from_str(&json_str).map_err(|_| AttemptError::NoJson)?;
        let canonical = canonicalize(&value).map_err(|_| AttemptError::NoJson)?;

        let record = AuthorRecord::from_value(&value);
        if record.is_none() {
            debug!("'{}' record does not fit the typed schema; keeping raw JSON", identifier);
        }

        info!("Extracted '{}' on {} attempt", identifier, phase);

        Ok(Extracted {
            identifier: identifier.to_string(),
            value,
            canonical,
            record,
            phase,
        })
    }

    /// Call the generation provider off the async runtime.
    async fn call_provider(&self, prompt: &str) -> Result<String, AttemptError> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();

        tokio::task::spawn_blocking(move || {
            provider
                .generate(&prompt)
                .map_err(|e| AttemptError::Service(e.to_string()))
        })
        .await
        .map_err(|e| AttemptError::Service(format!("task join error: {}", e)))?
    }
}
