use anyhow::Result;
use async_trait::async_trait;

use crate::config::{Config, Credentials};

pub mod gemini;
pub mod openai;

/// One synchronous round-trip to the selected LLM: user prompt in, raw
/// model text out. Single-shot, no retries, no streaming; failures
/// propagate unclassified.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Short label used for logging and the landing-page avatar.
    fn name(&self) -> &'static str;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

/// Build the one provider the process will use for its whole lifetime.
pub fn make_provider(credentials: Credentials, cfg: &Config) -> DynProvider {
    match credentials {
        Credentials::Gemini { api_key } => Box::new(gemini::GeminiProvider::new(
            api_key,
            cfg.gemini_model.clone(),
            cfg.timeout_secs,
        )),
        Credentials::OpenAi { api_key } => Box::new(openai::OpenAiProvider::new(
            api_key,
            cfg.openai_model.clone(),
            cfg.timeout_secs,
        )),
    }
}
