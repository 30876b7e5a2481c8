use serde::{Deserialize, Serialize};

/// A selectable backend generation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Model {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelCategory {
    Text,
    Image,
}

impl ModelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCategory::Text => "text",
            ModelCategory::Image => "image",
        }
    }

    /// Fallback list used whenever the listing endpoint is unusable.
    pub fn default_models(&self) -> Vec<Model> {
        match self {
            ModelCategory::Image => vec![
                Model::new("flux", "Flux").with_description("Default image model"),
                Model::new("sdxl", "Stable Diffusion XL")
                    .with_description("High quality image generation"),
            ],
            ModelCategory::Text => vec![
                Model::new("gpt-4", "GPT-4").with_description("High-capability language model"),
                Model::new("claude-3", "Claude 3")
                    .with_description("Advanced reasoning capabilities"),
                Model::new("mistral", "Mistral")
                    .with_description("Fast and efficient language model"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub image_models: Vec<Model>,
    pub text_models: Vec<Model>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            image_models: ModelCategory::Image.default_models(),
            text_models: ModelCategory::Text.default_models(),
        }
    }
}

/// One entry of an OpenAI-style `messages` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: serde_json::Value,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: serde_json::Value::String(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: serde_json::Value::String(content.into()),
        }
    }
}

/// Generated text plus the response it was extracted from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOutput {
    pub content: String,
    pub raw: serde_json::Value,
    pub model: String,
}
