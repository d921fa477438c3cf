use async_trait::async_trait;
use crate::enums::ocr_error::OcrError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// First block of text detected in the image, trimmed.
    async fn extract_text(&self, image: &[u8]) -> Result<String, OcrError>;
}
