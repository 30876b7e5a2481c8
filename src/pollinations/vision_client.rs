use std::sync::Arc;

use crate::{
    config::ClientConfig,
    error::{GenError, Result},
    logger,
    models::{ChatMessage, TextOutput, VisionParams, VisionRequestBody, DEFAULT_VISION_MODEL},
};
use reqwest::Client;
use serde_json::json;

use super::{
    require_non_blank,
    text_client::{extract_content, post_json},
};

#[derive(Clone)]
pub struct VisionClient {
    client: Client,
    config: Arc<ClientConfig>,
}

impl VisionClient {
    pub fn new(client: Client, config: Arc<ClientConfig>) -> Self {
        Self { client, config }
    }

    pub fn build_body(params: &VisionParams) -> VisionRequestBody {
        VisionRequestBody {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: json!([
                    { "type": "text", "text": params.prompt },
                    { "type": "image_url", "image_url": { "url": params.image_url } }
                ]),
            }],
            model: params
                .model
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_VISION_MODEL)
                .to_string(),
        }
    }

    pub async fn analyze(&self, params: &VisionParams) -> Result<TextOutput> {
        require_non_blank("image URL", &params.image_url)?;
        require_non_blank("prompt", &params.prompt)?;

        let body = Self::build_body(params);
        let url = format!("{}/openai", self.config.text_base());
        log::info!("👁️  Analyzing image with model: {}", body.model);

        let _timer = logger::timer("image analysis");
        let raw = post_json(&self.client, &url, &body).await?;
        let content = extract_content(&raw).ok_or_else(|| {
            GenError::ResponseError("Response did not contain an analysis".into())
        })?;

        Ok(TextOutput {
            content,
            raw,
            model: body.model,
        })
    }
}
