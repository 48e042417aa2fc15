//! HTTP client for the context-generation LLM service.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Fixed context used when the LLM service cannot be reached.
///
/// Network failure never propagates into the chunk pipeline; an
/// annotated chunk always carries some context string.
pub const FALLBACK_CONTEXT: &str =
    "Context generation failed. This passage is from the King James Bible.";

/// Default URL of the local LLM API (Ollama-style generate endpoint).
pub const DEFAULT_API_URL: &str = "http://localhost:11434/api/generate";

/// Default model name.
pub const DEFAULT_MODEL: &str = "qwen3-14b-custom";

/// Source of contextual descriptions for chunks.
///
/// Implementations are infallible by contract: they return a usable
/// context string or a fixed fallback, never an error.
#[async_trait]
pub trait ContextProvider: Send + Sync {
    /// Produce a contextual description for the chunk with the given
    /// reference and text.
    async fn context_for(&self, reference: &str, text: &str) -> String;
}

/// Client for a local LLM that generates chunk contexts.
pub struct ContextClient {
    client: Client,
    api_url: String,
    model: String,
    max_retries: u32,
    retry_delay: std::time::Duration,
}

/// Request payload for the generate endpoint.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    max_tokens: u32,
    temperature: f64,
}

/// Response from the generate endpoint.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl ContextClient {
    /// Create a client against the default local endpoint.
    pub fn new() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Create a client against a specific endpoint.
    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_retries: 3,
            retry_delay: std::time::Duration::from_secs(5),
        }
    }

    /// Set the model name.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Set the retry schedule.
    pub fn with_retries(mut self, max_retries: u32, retry_delay: std::time::Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_delay = retry_delay;
        self
    }

    /// Call the generate endpoint once.
    async fn generate(&self, prompt: &str) -> reqwest::Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            max_tokens: 150,
            temperature: 0.7,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let result: GenerateResponse = response.json().await?;
        Ok(result.response.trim().to_string())
    }
}

impl Default for ContextClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContextProvider for ContextClient {
    async fn context_for(&self, reference: &str, text: &str) -> String {
        let prompt = context_prompt(reference, text);

        for attempt in 1..=self.max_retries {
            match self.generate(&prompt).await {
                Ok(context) => return context,
                Err(e) => {
                    warn!(
                        reference,
                        attempt,
                        max_retries = self.max_retries,
                        error = %e,
                        "Context API call failed"
                    );
                    if attempt < self.max_retries {
                        info!(delay_secs = self.retry_delay.as_secs(), "Retrying");
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        error!(reference, "Max retries exceeded, using fallback context");
        FALLBACK_CONTEXT.to_string()
    }
}

/// Build the prompt asking for a short retrieval-oriented description of
/// the passage.
fn context_prompt(reference: &str, text: &str) -> String {
    format!(
        "You are a biblical scholar with extensive knowledge of the King James Bible. \n\
         Your task is to provide succinct contextual information for the following Bible passage:\n\
         \n\
         Reference: {reference}\n\
         Text: {text}\n\
         \n\
         Please provide a brief (50-100 words) contextual description that includes:\n\
         1. Where this passage fits in the biblical narrative\n\
         2. Key figures or events mentioned\n\
         3. Theological significance or themes\n\
         4. Historical or cultural context if relevant\n\
         \n\
         Focus only on information that helps situate this passage within the Bible and would be useful for retrieval. \n\
         Do not include commentary, interpretation, or application.\n\
         \n\
         Contextual description:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_reference_and_text() {
        let prompt = context_prompt("Genesis 1:1-5", "In the beginning.");
        assert!(prompt.contains("Reference: Genesis 1:1-5"));
        assert!(prompt.contains("Text: In the beginning."));
        assert!(prompt.contains("50-100 words"));
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back() {
        // Nothing listens here; all retries fail fast and the fallback
        // string comes back instead of an error.
        let client = ContextClient::with_api_url("http://127.0.0.1:1/api/generate")
            .with_retries(2, std::time::Duration::from_millis(1));

        let context = client.context_for("Genesis 1:1", "In the beginning.").await;
        assert_eq!(context, FALLBACK_CONTEXT);
    }
}
