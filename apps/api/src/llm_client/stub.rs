//! Deterministic `TextGenerator` doubles for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// Routes each prompt to a canned response by marker substring.
/// The first route whose marker appears in the prompt wins; unmatched prompts fail.
#[derive(Default)]
pub struct ScriptedGenerator {
    routes: Vec<(String, Result<String, u16>)>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, marker: &str, response: &str) -> Self {
        self.routes
            .push((marker.to_string(), Ok(response.to_string())));
        self
    }

    /// Makes prompts containing `marker` fail with an API error of `status`.
    pub fn fail(mut self, marker: &str, status: u16) -> Self {
        self.routes.push((marker.to_string(), Err(status)));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.routes.iter().find(|(marker, _)| prompt.contains(marker)) {
            Some((_, Ok(text))) => Ok(text.clone()),
            Some((_, Err(status))) => Err(LlmError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}

/// Fails every call, as if the service were unreachable.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
        Err(LlmError::RateLimited { retries: 3 })
    }
}
