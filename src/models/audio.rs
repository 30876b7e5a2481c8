use serde::{Deserialize, Serialize};

pub const DEFAULT_AUDIO_MODEL: &str = "openai-audio";
pub const DEFAULT_VOICE: &str = "alloy";
pub const SUPPORTED_VOICES: [&str; 5] = ["alloy", "echo", "fable", "nova", "shimmer"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioGenParams {
    pub prompt: String,
    pub model: Option<String>,
    pub voice: Option<String>,
}

impl AudioGenParams {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioOutput {
    pub url: String,
    pub voice: String,
    pub params: AudioGenParams,
}
