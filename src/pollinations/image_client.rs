use std::sync::Arc;

use crate::{
    config::ClientConfig,
    error::Result,
    models::{ImageGenParams, ImageOutput, DEFAULT_IMAGE_SIZE},
};
use url::form_urlencoded;

use super::require_non_blank;

#[derive(Clone)]
pub struct ImageClient {
    config: Arc<ClientConfig>,
}

impl ImageClient {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self { config }
    }

    /// Builds the image resource URL. Optional parameters appear only when
    /// set to a truthy value, always in the same order.
    pub fn build_url(&self, params: &ImageGenParams) -> Result<String> {
        require_non_blank("prompt", &params.prompt)?;

        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair(
            "width",
            &params.width.unwrap_or(DEFAULT_IMAGE_SIZE).to_string(),
        );
        query.append_pair(
            "height",
            &params.height.unwrap_or(DEFAULT_IMAGE_SIZE).to_string(),
        );
        if let Some(seed) = params.seed.filter(|s| *s != 0) {
            query.append_pair("seed", &seed.to_string());
        }
        if let Some(model) = params.model.as_deref().filter(|m| !m.is_empty()) {
            query.append_pair("model", model);
        }
        for (key, flag) in [
            ("nologo", params.nologo),
            ("private", params.private_mode),
            ("enhance", params.enhance),
            ("safe", params.safe),
        ] {
            if flag.unwrap_or(false) {
                query.append_pair(key, "true");
            }
        }

        Ok(format!(
            "{}/prompt/{}?{}",
            self.config.image_base(),
            urlencoding::encode(&params.prompt),
            query.finish()
        ))
    }

    /// The image host renders on GET, so generation is URL construction only.
    pub async fn generate(&self, params: &ImageGenParams) -> Result<ImageOutput> {
        let url = self.build_url(params)?;

        log::info!(
            "🎨 Image URL built for model: {}",
            params.model.as_deref().unwrap_or("default")
        );
        log::debug!("Image URL: {}", url);

        Ok(ImageOutput {
            url,
            prompt: params.prompt.clone(),
            params: params.clone(),
        })
    }
}
