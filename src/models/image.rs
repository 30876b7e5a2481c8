use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_SIZE: u32 = 1024;
pub const DEFAULT_IMAGE_MODEL: &str = "flux";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenParams {
    pub prompt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub seed: Option<u64>,
    pub model: Option<String>,
    pub nologo: Option<bool>,
    #[serde(rename = "private")]
    pub private_mode: Option<bool>,
    pub enhance: Option<bool>,
    pub safe: Option<bool>,
}

impl ImageGenParams {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            width: None,
            height: None,
            seed: None,
            model: None,
            nologo: None,
            private_mode: None,
            enhance: None,
            safe: None,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageOutput {
    pub url: String,
    pub prompt: String,
    pub params: ImageGenParams,
}
