use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::Provider;
use crate::prompt;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Variant A: the generative-content API, asked for JSON-mime-typed output.
/// The system instruction and user prompt travel concatenated as one text
/// part.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String, timeout_secs: u64) -> Self {
        Self {
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{API_BASE}/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt::with_user_request(prompt) } ] }
            ],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        tracing::debug!(model = %self.model, "POST {API_BASE}/models/<model>:generateContent");

        let client = Client::builder().timeout(self.timeout).build()?;
        let resp = client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("gemini request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("gemini read body failed")?;
        if !status.is_success() {
            return Err(anyhow!("Gemini API error ({status}): {text}"));
        }

        // Response shape: candidates[0].content.parts[0].text
        let parsed: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| anyhow!("failed to parse Gemini response: {e}"))?;
        let content = parsed["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| anyhow!("Gemini response carried no text content"))?;

        Ok(content.to_string())
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
