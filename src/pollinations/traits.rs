use crate::{
    error::Result,
    models::{
        AudioGenParams, AudioOutput, ImageGenParams, ImageOutput, Model, ModelCategory,
        TextGenParams, TextOutput, VisionParams,
    },
};
use async_trait::async_trait;

/// Everything a generator needs from the remote API.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate_image(&self, params: &ImageGenParams) -> Result<ImageOutput>;
    async fn generate_text(&self, params: &TextGenParams) -> Result<TextOutput>;
    async fn generate_audio(&self, params: &AudioGenParams) -> Result<AudioOutput>;
    async fn analyze_image(&self, params: &VisionParams) -> Result<TextOutput>;

    /// Never fails: implementations fall back to the category defaults.
    async fn list_models(&self, category: ModelCategory) -> Vec<Model>;
}
