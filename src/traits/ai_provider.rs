use async_trait::async_trait;
use crate::enums::invocation_error::InvocationError;

/// A hosted text model: prompt in, raw reply text out. Implementations make
/// exactly one attempt per call.
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn invoke(&self, prompt: &str) -> Result<String, InvocationError>;

    fn model_name(&self) -> &str;
}
