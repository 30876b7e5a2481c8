use std::sync::Arc;

use crate::{
    app::{GeneratorKind, ParameterPanel},
    error::Result,
    models::{
        ImageGenParams, ImageOutput, Model, ModelCategory, TextGenParams, DEFAULT_IMAGE_MODEL,
        DEFAULT_IMAGE_SIZE, DEFAULT_TEXT_MODEL,
    },
    pollinations::GenerationBackend,
};

use super::{ensure_prompt, GenerationState, GenerationStatus, GeneratorView};

const ENHANCE_INSTRUCTION: &str =
    "Enhance this image prompt by adding more details and artistic direction: ";

#[derive(Debug, Clone, PartialEq)]
pub struct ImageForm {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub model: String,
    pub seed: Option<u64>,
    pub enhance: bool,
    pub nologo: bool,
    pub safe: bool,
    pub private_mode: bool,
}

impl Default for ImageForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
            model: DEFAULT_IMAGE_MODEL.to_string(),
            seed: None,
            enhance: true,
            nologo: true,
            safe: false,
            private_mode: true,
        }
    }
}

pub struct ImageGenerator {
    backend: Arc<dyn GenerationBackend>,
    pub form: ImageForm,
    /// (source prompt, rewritten prompt); stale once the prompt changes.
    enhanced: Option<(String, String)>,
    models: Vec<Model>,
    status: GenerationStatus<ImageOutput>,
}

impl ImageGenerator {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            form: ImageForm::default(),
            enhanced: None,
            models: Vec::new(),
            status: GenerationStatus::new(),
        }
    }

    pub fn with_form(mut self, form: ImageForm) -> Self {
        self.form = form;
        self
    }

    pub fn status(&self) -> &GenerationStatus<ImageOutput> {
        &self.status
    }

    pub fn state(&self) -> GenerationState<ImageOutput> {
        self.status.state()
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub async fn load_models(&mut self) -> &[Model] {
        self.models = self.backend.list_models(ModelCategory::Image).await;
        &self.models
    }

    /// Rewritten prompt for the current form, if one has been produced.
    pub fn enhanced_prompt(&self) -> Option<&str> {
        self.enhanced
            .as_ref()
            .filter(|(source, _)| *source == self.form.prompt)
            .map(|(_, rewritten)| rewritten.as_str())
    }

    /// Asks the text model to rewrite the prompt. Failures keep the
    /// original prompt.
    pub async fn enhance_prompt(&mut self) -> Option<String> {
        if !self.form.enhance || self.form.prompt.trim().is_empty() {
            return None;
        }

        let request = TextGenParams::new(format!("{}{}", ENHANCE_INSTRUCTION, self.form.prompt))
            .with_model(DEFAULT_TEXT_MODEL);

        match self.backend.generate_text(&request).await {
            Ok(output) if !output.content.trim().is_empty() => {
                log::debug!("Enhanced prompt: {}", output.content);
                self.enhanced = Some((self.form.prompt.clone(), output.content.clone()));
                Some(output.content)
            }
            Ok(_) => {
                log::warn!("⚠️  Prompt enhancement returned no text");
                None
            }
            Err(e) => {
                log::warn!("⚠️  Prompt enhancement failed: {}", e);
                None
            }
        }
    }

    pub fn params(&self) -> ImageGenParams {
        let prompt = match self.enhanced_prompt() {
            Some(rewritten) if self.form.enhance => rewritten.to_string(),
            _ => self.form.prompt.clone(),
        };

        ImageGenParams {
            prompt,
            width: Some(self.form.width),
            height: Some(self.form.height),
            seed: self.form.seed,
            model: Some(self.form.model.clone()),
            nologo: Some(self.form.nologo),
            private_mode: Some(self.form.private_mode),
            enhance: Some(self.form.enhance),
            safe: Some(self.form.safe),
        }
    }

    pub async fn generate(&mut self) -> Result<ImageOutput> {
        ensure_prompt(&self.form.prompt)?;

        let params = self.params();
        log::info!("🖼️  Generating image with model: {}", self.form.model);

        let backend = self.backend.clone();
        self.status
            .run(async move { backend.generate_image(&params).await })
            .await
    }
}

impl GeneratorView for ImageGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Image
    }

    fn panel(&self) -> ParameterPanel {
        let mut panel = ParameterPanel::new(GeneratorKind::Image)
            .entry("model", &self.form.model)
            .entry("size", format!("{}x{}", self.form.width, self.form.height))
            .entry("enhance", self.form.enhance)
            .entry("nologo", self.form.nologo)
            .entry("private", self.form.private_mode)
            .entry("safe", self.form.safe);
        if let Some(seed) = self.form.seed {
            panel = panel.entry("seed", seed);
        }
        panel
    }

    fn can_submit(&self) -> bool {
        !self.form.prompt.trim().is_empty() && !self.status.is_submitting()
    }
}
