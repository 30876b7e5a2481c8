use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::{
    error::{GenError, Result},
    models::{
        AudioGenParams, AudioOutput, ImageGenParams, ImageOutput, Model, ModelCategory,
        TextGenParams, TextOutput, VisionParams,
    },
    pollinations::GenerationBackend,
};
use async_trait::async_trait;
use serde_json::Value;

/// Backend double that records calls and replays canned text replies.
#[derive(Default)]
pub struct FakeBackend {
    pub calls: AtomicUsize,
    pub fail: bool,
    pub text_reply: Option<String>,
    pub seen_text: Mutex<Vec<TextGenParams>>,
}

impl FakeBackend {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn replying(text: &str) -> Self {
        Self {
            text_reply: Some(text.to_string()),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(GenError::RequestError("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn generate_image(&self, params: &ImageGenParams) -> Result<ImageOutput> {
        self.record()?;
        Ok(ImageOutput {
            url: format!("https://image.test/prompt/{}", params.prompt),
            prompt: params.prompt.clone(),
            params: params.clone(),
        })
    }

    async fn generate_text(&self, params: &TextGenParams) -> Result<TextOutput> {
        self.record()?;
        self.seen_text.lock().unwrap().push(params.clone());
        let content = self
            .text_reply
            .clone()
            .unwrap_or_else(|| format!("echo: {}", params.prompt));
        Ok(TextOutput {
            content: content.clone(),
            raw: Value::String(content),
            model: params.model.clone().unwrap_or_default(),
        })
    }

    async fn generate_audio(&self, params: &AudioGenParams) -> Result<AudioOutput> {
        self.record()?;
        Ok(AudioOutput {
            url: format!("https://text.test/{}", params.prompt),
            voice: params.voice.clone().unwrap_or_default(),
            params: params.clone(),
        })
    }

    async fn analyze_image(&self, params: &VisionParams) -> Result<TextOutput> {
        self.record()?;
        Ok(TextOutput {
            content: params.prompt.clone(),
            raw: Value::Null,
            model: String::new(),
        })
    }

    async fn list_models(&self, category: ModelCategory) -> Vec<Model> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        category.default_models()
    }
}
