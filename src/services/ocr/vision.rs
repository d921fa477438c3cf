use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use crate::config::constants::timeout_duration_secs;
use crate::enums::ocr_error::OcrError;
use crate::services::ocr::service_account::ServiceAccountTokenProvider;
use crate::structs::config::ocr_config::OcrConfig;
use crate::structs::credentials::VisionCredentials;
use crate::structs::ocr::vision_request::VisionAnnotateRequest;
use crate::structs::ocr::vision_response::VisionAnnotateResponse;
use crate::traits::text_extractor::TextExtractor;

enum VisionAuth {
    AccessToken(String),
    ServiceAccount(ServiceAccountTokenProvider),
}

/// Text detection through the Cloud Vision `images:annotate` endpoint.
pub struct VisionOcr {
    client: Client,
    endpoint: String,
    auth: VisionAuth,
}

impl VisionOcr {
    pub fn new(credentials: &VisionCredentials, config: &OcrConfig) -> Result<Self, OcrError> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| OcrError::Transport(format!("failed to build HTTP client: {}", e)))?;

        let auth = match credentials {
            VisionCredentials::AccessToken(token) => VisionAuth::AccessToken(token.clone()),
            VisionCredentials::ServiceAccount(key) => {
                VisionAuth::ServiceAccount(ServiceAccountTokenProvider::new(key.clone(), client.clone()))
            }
        };

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            auth,
        })
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    async fn bearer_token(&self) -> Result<String, OcrError> {
        match &self.auth {
            VisionAuth::AccessToken(token) => Ok(token.clone()),
            VisionAuth::ServiceAccount(provider) => provider.access_token().await,
        }
    }

    fn status_error(status: StatusCode, error_text: String) -> OcrError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                OcrError::Authentication(format!("{}: {}", status, error_text))
            }
            _ => OcrError::Service(format!("{}: {}", status, error_text)),
        }
    }

    fn first_text(body: VisionAnnotateResponse) -> Result<String, OcrError> {
        let image = body.responses.into_iter().next().ok_or(OcrError::NoTextDetected)?;

        if let Some(error) = image.error {
            return Err(OcrError::Service(format!("{} (code {})", error.message, error.code)));
        }

        image
            .text_annotations
            .into_iter()
            .next()
            .map(|annotation| annotation.description.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(OcrError::NoTextDetected)
    }
}

#[async_trait]
impl TextExtractor for VisionOcr {
    async fn extract_text(&self, image: &[u8]) -> Result<String, OcrError> {
        if image.is_empty() {
            return Err(OcrError::EmptyImage);
        }

        let token = self.bearer_token().await?;
        let request = VisionAnnotateRequest::text_detection(STANDARD.encode(image));

        log::info!("🖼️ Sending {} byte image for text detection", image.len());
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| OcrError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("❌ Vision API error response ({}): {}", status, error_text);
            return Err(Self::status_error(status, error_text));
        }

        let body: VisionAnnotateResponse = response
            .json()
            .await
            .map_err(|e| OcrError::Service(format!("invalid response body: {}", e)))?;

        Self::first_text(body)
    }
}
