//! Driver trait for generation backends.

use async_trait::async_trait;
use storygrid_core::{GenerateRequest, GenerateResponse};
use storygrid_error::StoryGridResult;

/// A backend that answers generation requests.
///
/// A request runs to completion or failure. Drivers do not retry, time out
/// or support cancellation.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate model output for a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> StoryGridResult<GenerateResponse>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model used when a request does not name one.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: GenerationDriver + ?Sized> GenerationDriver for std::sync::Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> StoryGridResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
