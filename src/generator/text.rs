use std::sync::Arc;

use crate::{
    app::{GeneratorKind, ParameterPanel},
    error::Result,
    models::{Model, ModelCategory, TextGenParams, TextOutput, DEFAULT_TEXT_MODEL},
    pollinations::GenerationBackend,
};

use super::{ensure_prompt, GenerationState, GenerationStatus, GeneratorView};

#[derive(Debug, Clone, PartialEq)]
pub struct TextForm {
    pub prompt: String,
    pub system: String,
    pub model: String,
    pub seed: Option<u64>,
    pub private_mode: bool,
    pub json_mode: bool,
}

impl Default for TextForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            system: String::new(),
            model: DEFAULT_TEXT_MODEL.to_string(),
            seed: None,
            private_mode: true,
            json_mode: false,
        }
    }
}

/// Generated text together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextResult {
    pub output: TextOutput,
    pub params: TextGenParams,
}

pub struct TextGenerator {
    backend: Arc<dyn GenerationBackend>,
    pub form: TextForm,
    models: Vec<Model>,
    status: GenerationStatus<TextResult>,
}

impl TextGenerator {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            form: TextForm::default(),
            models: Vec::new(),
            status: GenerationStatus::new(),
        }
    }

    pub fn with_form(mut self, form: TextForm) -> Self {
        self.form = form;
        self
    }

    pub fn status(&self) -> &GenerationStatus<TextResult> {
        &self.status
    }

    pub fn state(&self) -> GenerationState<TextResult> {
        self.status.state()
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Loads the text model list and selects the first entry when no model
    /// is chosen yet.
    pub async fn load_models(&mut self) -> &[Model] {
        self.models = self.backend.list_models(ModelCategory::Text).await;
        if self.form.model.is_empty() {
            if let Some(first) = self.models.first() {
                self.form.model = first.id.clone();
            }
        }
        &self.models
    }

    pub fn params(&self) -> TextGenParams {
        TextGenParams {
            prompt: self.form.prompt.clone(),
            model: Some(self.form.model.clone()).filter(|m| !m.is_empty()),
            seed: self.form.seed,
            system: Some(self.form.system.clone()).filter(|s| !s.trim().is_empty()),
            private_mode: Some(self.form.private_mode),
            json: Some(self.form.json_mode),
        }
    }

    pub async fn generate(&mut self) -> Result<TextResult> {
        ensure_prompt(&self.form.prompt)?;

        let params = self.params();
        let backend = self.backend.clone();
        self.status
            .run(async move {
                let output = backend.generate_text(&params).await?;
                Ok(TextResult { output, params })
            })
            .await
    }
}

impl GeneratorView for TextGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Text
    }

    fn panel(&self) -> ParameterPanel {
        let mut panel = ParameterPanel::new(GeneratorKind::Text)
            .entry("model", &self.form.model)
            .entry("private", self.form.private_mode)
            .entry("json", self.form.json_mode);
        if let Some(seed) = self.form.seed {
            panel = panel.entry("seed", seed);
        }
        if !self.form.system.trim().is_empty() {
            panel = panel.entry("system", &self.form.system);
        }
        panel
    }

    fn can_submit(&self) -> bool {
        !self.form.prompt.trim().is_empty() && !self.status.is_submitting()
    }
}
