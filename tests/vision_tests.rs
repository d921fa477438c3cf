use aidebugger::enums::ocr_error::OcrError;
use aidebugger::services::ocr::service_account::ServiceAccountTokenProvider;
use aidebugger::services::ocr::vision::VisionOcr;
use aidebugger::structs::config::ocr_config::OcrConfig;
use aidebugger::structs::credentials::VisionCredentials;
use aidebugger::structs::ocr::service_account_key::ServiceAccountKey;
use aidebugger::traits::text_extractor::TextExtractor;
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_PRIVATE_KEY: &str = include_str!("fixtures/service_account_key.pem");

fn ocr_with_token(server: &MockServer, token: &str) -> VisionOcr {
    VisionOcr::new(&VisionCredentials::AccessToken(token.to_string()), &OcrConfig::default())
        .unwrap()
        .with_endpoint(&format!("{}/v1/images:annotate", server.uri()))
}

fn service_account(token_uri: String) -> ServiceAccountKey {
    ServiceAccountKey {
        key_type: Some("service_account".to_string()),
        project_id: Some("debugger-tests".to_string()),
        private_key_id: Some("key-1".to_string()),
        private_key: TEST_PRIVATE_KEY.to_string(),
        client_email: "ocr@debugger-tests.iam.gserviceaccount.com".to_string(),
        token_uri,
    }
}

#[tokio::test]
async fn first_annotation_is_returned_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images:annotate"))
        .and(header("authorization", "Bearer static-token"))
        .and(body_partial_json(json!({
            "requests": [{
                "image": { "content": "iVBORw==" },
                "features": [{ "type": "TEXT_DETECTION" }]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responses": [{
                "textAnnotations": [
                    { "description": "  def f():\n    return 1\n " },
                    { "description": "def" }
                ]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = ocr_with_token(&server, "static-token")
        .extract_text(&[0x89, 0x50, 0x4e, 0x47])
        .await;

    assert_eq!(text, Ok("def f():\n    return 1".to_string()));
}

#[tokio::test]
async fn empty_image_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = ocr_with_token(&server, "t").extract_text(&[]).await.unwrap_err();

    assert_eq!(error, OcrError::EmptyImage);
}

#[tokio::test]
async fn no_annotations_means_no_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images:annotate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "responses": [{}] })))
        .mount(&server)
        .await;

    let error = ocr_with_token(&server, "t").extract_text(b"img").await.unwrap_err();

    assert_eq!(error, OcrError::NoTextDetected);
    assert_eq!(error.reason(), "no-text");
}

#[tokio::test]
async fn service_error_in_body_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images:annotate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responses": [{ "error": { "code": 3, "message": "Bad image data." } }]
        })))
        .mount(&server)
        .await;

    let error = ocr_with_token(&server, "t").extract_text(b"img").await.unwrap_err();

    assert!(matches!(error, OcrError::Service(ref message) if message.contains("Bad image data.")));
}

#[tokio::test]
async fn rejected_token_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images:annotate"))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&server)
        .await;

    let error = ocr_with_token(&server, "expired").extract_text(b"img").await.unwrap_err();

    assert_eq!(error.reason(), "authentication");
}

#[tokio::test]
async fn service_account_token_is_exchanged_once_and_reused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer"))
        .and(body_string_contains("assertion="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "sa-token",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/images:annotate"))
        .and(header("authorization", "Bearer sa-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responses": [{ "textAnnotations": [{ "description": "print('ok')" }] }]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let credentials = VisionCredentials::ServiceAccount(service_account(format!("{}/token", server.uri())));
    let ocr = VisionOcr::new(&credentials, &OcrConfig::default())
        .unwrap()
        .with_endpoint(&format!("{}/v1/images:annotate", server.uri()));

    assert_eq!(ocr.extract_text(b"one").await.as_deref(), Ok("print('ok')"));
    assert_eq!(ocr.extract_text(b"two").await.as_deref(), Ok("print('ok')"));
}

#[tokio::test]
async fn refused_token_exchange_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_grant" })))
        .mount(&server)
        .await;

    let provider = ServiceAccountTokenProvider::new(service_account(format!("{}/token", server.uri())), reqwest::Client::new());
    let error = provider.access_token().await.unwrap_err();

    assert!(matches!(error, OcrError::Authentication(ref message) if message.contains("invalid_grant")));
}

#[tokio::test]
async fn unusable_private_key_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut key = service_account(format!("{}/token", server.uri()));
    key.private_key = "not a pem".to_string();
    let provider = ServiceAccountTokenProvider::new(key, reqwest::Client::new());

    assert_eq!(provider.access_token().await.unwrap_err().reason(), "authentication");
}

#[test]
fn claims_target_the_vision_scope() {
    let provider = ServiceAccountTokenProvider::new(service_account("https://oauth2.example/token".to_string()), reqwest::Client::new());

    let claims = provider.claims(1_000);

    assert_eq!(claims.iss, "ocr@debugger-tests.iam.gserviceaccount.com");
    assert_eq!(claims.aud, "https://oauth2.example/token");
    assert_eq!(claims.scope, "https://www.googleapis.com/auth/cloud-vision");
    assert_eq!(claims.exp - claims.iat, 3600);
}
