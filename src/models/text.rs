use serde::{Deserialize, Serialize};

use super::ChatMessage;

pub const DEFAULT_TEXT_MODEL: &str = "mistral";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextGenParams {
    pub prompt: String,
    pub model: Option<String>,
    pub seed: Option<u64>,
    pub system: Option<String>,
    #[serde(rename = "private")]
    pub private_mode: Option<bool>,
    pub json: Option<bool>,
}

impl TextGenParams {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Body posted to the text endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRequestBody {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(rename = "private", skip_serializing_if = "Option::is_none")]
    pub private_mode: Option<bool>,
}
