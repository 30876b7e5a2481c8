use serde::{Deserialize, Serialize};

use super::ChatMessage;

pub const DEFAULT_VISION_MODEL: &str = "openai";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionParams {
    pub image_url: String,
    pub prompt: String,
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisionRequestBody {
    pub messages: Vec<ChatMessage>,
    pub model: String,
}
