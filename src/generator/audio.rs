use std::sync::Arc;

use crate::{
    app::{GeneratorKind, ParameterPanel},
    error::{GenError, Result},
    models::{AudioGenParams, AudioOutput, DEFAULT_AUDIO_MODEL, DEFAULT_VOICE, SUPPORTED_VOICES},
    pollinations::GenerationBackend,
};

use super::{ensure_prompt, GenerationState, GenerationStatus, GeneratorView};

#[derive(Debug, Clone, PartialEq)]
pub struct AudioForm {
    pub prompt: String,
    pub voice: String,
    pub model: String,
}

impl Default for AudioForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            voice: DEFAULT_VOICE.to_string(),
            model: DEFAULT_AUDIO_MODEL.to_string(),
        }
    }
}

pub struct AudioGenerator {
    backend: Arc<dyn GenerationBackend>,
    pub form: AudioForm,
    status: GenerationStatus<AudioOutput>,
}

impl AudioGenerator {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            form: AudioForm::default(),
            status: GenerationStatus::new(),
        }
    }

    pub fn with_form(mut self, form: AudioForm) -> Self {
        self.form = form;
        self
    }

    pub fn status(&self) -> &GenerationStatus<AudioOutput> {
        &self.status
    }

    pub fn state(&self) -> GenerationState<AudioOutput> {
        self.status.state()
    }

    pub fn params(&self) -> AudioGenParams {
        AudioGenParams {
            prompt: self.form.prompt.clone(),
            model: Some(self.form.model.clone()),
            voice: Some(self.form.voice.clone()),
        }
    }

    pub async fn generate(&mut self) -> Result<AudioOutput> {
        ensure_prompt(&self.form.prompt)?;
        if !SUPPORTED_VOICES.contains(&self.form.voice.as_str()) {
            return Err(GenError::ValidationError(format!(
                "Unsupported voice '{}'",
                self.form.voice
            )));
        }

        let params = self.params();
        let backend = self.backend.clone();
        self.status
            .run(async move { backend.generate_audio(&params).await })
            .await
    }
}

impl GeneratorView for AudioGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Audio
    }

    fn panel(&self) -> ParameterPanel {
        ParameterPanel::new(GeneratorKind::Audio)
            .entry("voice", &self.form.voice)
            .entry("model", &self.form.model)
    }

    fn can_submit(&self) -> bool {
        !self.form.prompt.trim().is_empty() && !self.status.is_submitting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::fake::FakeBackend;

    #[tokio::test]
    async fn test_generate_uses_defaults() {
        let backend = Arc::new(FakeBackend::default());
        let mut view = AudioGenerator::new(backend.clone());
        view.form.prompt = "good morning".into();

        let output = view.generate().await.unwrap();
        assert_eq!(output.params.voice.as_deref(), Some("alloy"));
        assert_eq!(output.params.model.as_deref(), Some("openai-audio"));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_voice_and_empty_prompt_skip_backend() {
        let backend = Arc::new(FakeBackend::default());
        let mut view = AudioGenerator::new(backend.clone());
        assert!(view.generate().await.is_err());

        view.form.prompt = "hi".into();
        view.form.voice = "robot".into();
        assert!(matches!(
            view.generate().await,
            Err(GenError::ValidationError(_))
        ));
        assert_eq!(backend.call_count(), 0);
        assert_eq!(view.state(), GenerationState::Idle);
    }
}
