use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use tokio::sync::Mutex;
use crate::config::constants::{
    ACCESS_TOKEN_LIFETIME_SECS, ACCESS_TOKEN_REFRESH_MARGIN_SECS, JWT_BEARER_GRANT_TYPE, VISION_SCOPE,
};
use crate::enums::ocr_error::OcrError;
use crate::structs::ocr::service_account_key::ServiceAccountKey;
use crate::structs::ocr::token_exchange::{ServiceAccountClaims, TokenResponse};

struct CachedToken {
    value: String,
    expires_at: i64,
}

/// OAuth access tokens for a service account, via the JWT bearer grant.
/// A token is reused until it is within the refresh margin of expiry.
pub struct ServiceAccountTokenProvider {
    key: ServiceAccountKey,
    client: Client,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenProvider {
    pub fn new(key: ServiceAccountKey, client: Client) -> Self {
        Self {
            key,
            client,
            cached: Mutex::new(None),
        }
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    pub async fn access_token(&self) -> Result<String, OcrError> {
        let mut cached = self.cached.lock().await;
        let now = Utc::now().timestamp();

        if let Some(token) = cached.as_ref() {
            if token.expires_at - ACCESS_TOKEN_REFRESH_MARGIN_SECS > now {
                return Ok(token.value.clone());
            }
        }

        log::debug!("🔑 Requesting access token for {}", self.key.client_email);
        let assertion = self.signed_assertion(now)?;
        let token = self.exchange(&assertion).await?;

        let expires_at = now + token.expires_in.unwrap_or(ACCESS_TOKEN_LIFETIME_SECS);
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at,
        });

        Ok(token.access_token)
    }

    pub fn claims(&self, now: i64) -> ServiceAccountClaims {
        ServiceAccountClaims {
            iss: self.key.client_email.clone(),
            scope: VISION_SCOPE.to_string(),
            aud: self.key.token_uri.clone(),
            iat: now,
            exp: now + ACCESS_TOKEN_LIFETIME_SECS,
        }
    }

    fn signed_assertion(&self, now: i64) -> Result<String, OcrError> {
        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .map_err(|e| OcrError::Authentication(format!("invalid service-account private key: {}", e)))?;

        let header = Header {
            kid: self.key.private_key_id.clone(),
            ..Header::new(Algorithm::RS256)
        };

        encode(&header, &self.claims(now), &encoding_key)
            .map_err(|e| OcrError::Authentication(format!("failed to sign token request: {}", e)))
    }

    async fn exchange(&self, assertion: &str) -> Result<TokenResponse, OcrError> {
        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT_TYPE), ("assertion", assertion)])
            .send()
            .await
            .map_err(|e| OcrError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Token exchange rejected ({}): {}", status, error_text);
            return Err(OcrError::Authentication(format!("token endpoint returned {}: {}", status, error_text)));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| OcrError::Authentication(format!("malformed token response: {}", e)))
    }
}
