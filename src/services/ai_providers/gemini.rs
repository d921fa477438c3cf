use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use crate::config::constants::timeout_duration_secs;
use crate::enums::invocation_error::InvocationError;
use crate::enums::safety_policy::SafetyPolicy;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::ai::gemini::gemini_safety_setting::GeminiSafetySetting;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    safety_policy: SafetyPolicy,
    timeout: Duration,
}

impl GeminiProvider {
    pub fn new(api_key: String, config: &AiConfig) -> Result<Self, InvocationError> {
        let timeout = timeout_duration_secs(config.request_timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InvocationError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            safety_policy: config.safety_policy,
            timeout,
        })
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn get_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(self.temperature),
                max_output_tokens: Some(self.max_output_tokens),
                candidate_count: Some(1),
            }),
            safety_settings: GeminiSafetySetting::for_policy(self.safety_policy),
        }
    }

    async fn make_request(&self, request_body: &GeminiRequest) -> Result<reqwest::Response, InvocationError> {
        log::debug!("📦 Request model: {}", self.model);

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        self.client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| self.network_error(&e))
    }

    fn network_error(&self, error: &reqwest::Error) -> InvocationError {
        if error.is_timeout() {
            InvocationError::transport(format!("request timed out after {}s", self.timeout.as_secs()))
        } else {
            InvocationError::transport(format!("network error: {}", redact_url(error)))
        }
    }

    fn status_error(status: StatusCode, error_text: &str) -> InvocationError {
        InvocationError::transport(match status.as_u16() {
            400 => format!("Bad request: {}", error_text),
            401 | 403 => format!("Authentication failed: {}", error_text),
            429 => format!("Quota or rate limit exceeded: {}", error_text),
            _ => format!("HTTP {}: {}", status, error_text),
        })
    }
}

// The request URL carries the API key as a query parameter.
fn redact_url(error: &reqwest::Error) -> String {
    let text = error.to_string();
    match error.url() {
        Some(url) => text.replace(url.as_str(), "<gemini endpoint>"),
        None => text,
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn invoke(&self, prompt: &str) -> Result<String, InvocationError> {
        let request_body = self.get_request(prompt);
        let response = self.make_request(&request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Gemini API error response ({}): {}", status, error_text);
            return Err(Self::status_error(status, &error_text));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| InvocationError::transport(format!("invalid response body: {}", e)))?;

        match body.text() {
            Some(text) => Ok(text),
            None => {
                if let Some(reason) = body.block_reason() {
                    log::warn!("⚠️ Prompt blocked by the provider: {}", reason);
                }
                Err(InvocationError::EmptyResponse)
            }
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
