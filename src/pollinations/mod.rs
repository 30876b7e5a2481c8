pub mod audio_client;
pub mod image_client;
pub mod model_client;
pub mod text_client;
pub mod traits;
pub mod vision_client;

use std::sync::Arc;

use crate::{
    config::ClientConfig,
    error::{GenError, Result},
    models::{
        AudioGenParams, AudioOutput, ImageGenParams, ImageOutput, Model, ModelCatalog,
        ModelCategory, TextGenParams, TextOutput, VisionParams,
    },
};
use async_trait::async_trait;
use reqwest::Client;

pub use audio_client::AudioClient;
pub use image_client::ImageClient;
pub use model_client::ModelClient;
pub use text_client::TextClient;
pub use traits::GenerationBackend;
pub use vision_client::VisionClient;

#[derive(Clone)]
pub struct PollinationsClient {
    text_client: TextClient,
    image_client: ImageClient,
    audio_client: AudioClient,
    vision_client: VisionClient,
    model_client: ModelClient,
}

impl PollinationsClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| GenError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        let config = Arc::new(config);

        Ok(Self {
            text_client: TextClient::new(client.clone(), config.clone()),
            image_client: ImageClient::new(config.clone()),
            audio_client: AudioClient::new(config.clone()),
            vision_client: VisionClient::new(client.clone(), config.clone()),
            model_client: ModelClient::new(client, config),
        })
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn audio(&self) -> &AudioClient {
        &self.audio_client
    }

    pub fn vision(&self) -> &VisionClient {
        &self.vision_client
    }

    pub fn models(&self) -> &ModelClient {
        &self.model_client
    }

    pub async fn catalog(&self) -> ModelCatalog {
        self.model_client.catalog().await
    }
}

#[async_trait]
impl GenerationBackend for PollinationsClient {
    async fn generate_image(&self, params: &ImageGenParams) -> Result<ImageOutput> {
        self.image_client.generate(params).await
    }

    async fn generate_text(&self, params: &TextGenParams) -> Result<TextOutput> {
        self.text_client.generate(params).await
    }

    async fn generate_audio(&self, params: &AudioGenParams) -> Result<AudioOutput> {
        self.audio_client.generate(params).await
    }

    async fn analyze_image(&self, params: &VisionParams) -> Result<TextOutput> {
        self.vision_client.analyze(params).await
    }

    async fn list_models(&self, category: ModelCategory) -> Vec<Model> {
        self.model_client.list(category).await
    }
}

pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(GenError::ValidationError(format!("{} is required", field)))
    } else {
        Ok(())
    }
}
