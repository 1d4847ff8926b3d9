//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::advice::{AdviceProvider, ProviderError};

/// Returns a fixed reply and remembers the last prompt it was given.
pub struct StubProvider {
    reply: String,
    last_prompt: Mutex<Option<String>>,
}

impl StubProvider {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

#[async_trait]
impl AdviceProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        Ok(self.reply.clone())
    }
}

/// Always fails with a network error.
pub struct FailingProvider;

#[async_trait]
impl AdviceProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Network("connection refused".to_string()))
    }
}

/// Creates a logged-out test App backed by a StubProvider.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubProvider::new("stub advice")))
}

/// Creates a test App that has already logged in.
pub fn logged_in_app() -> crate::core::state::App {
    let mut app = test_app();
    app.navigation.login();
    app
}
