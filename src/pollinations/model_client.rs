use std::sync::Arc;

use crate::{
    config::ClientConfig,
    error::{GenError, Result},
    models::{Model, ModelCatalog, ModelCategory},
};
use reqwest::Client;
use serde_json::Value;

#[derive(Clone)]
pub struct ModelClient {
    client: Client,
    config: Arc<ClientConfig>,
}

impl ModelClient {
    pub fn new(client: Client, config: Arc<ClientConfig>) -> Self {
        Self { client, config }
    }

    pub fn models_url(&self, category: ModelCategory) -> String {
        let base = match category {
            ModelCategory::Image => self.config.image_base(),
            ModelCategory::Text => self.config.text_base(),
        };
        format!("{}/models", base)
    }

    /// Lists models for a category. Any failure, including an empty or
    /// unrecognized payload, yields the built-in defaults.
    pub async fn list(&self, category: ModelCategory) -> Vec<Model> {
        let url = self.models_url(category);
        log::debug!("Fetching {} models from {}", category.as_str(), url);

        match self.fetch(&url).await {
            Ok(value) => match normalize(&value) {
                Some(models) => {
                    log::info!(
                        "📚 Loaded {} {} models from API",
                        models.len(),
                        category.as_str()
                    );
                    models
                }
                None => {
                    log::warn!(
                        "⚠️  Unrecognized {} model listing, using defaults",
                        category.as_str()
                    );
                    category.default_models()
                }
            },
            Err(e) => {
                log::warn!(
                    "⚠️  Failed to fetch {} models ({}), using defaults",
                    category.as_str(),
                    e
                );
                category.default_models()
            }
        }
    }

    pub async fn list_image_models(&self) -> Vec<Model> {
        self.list(ModelCategory::Image).await
    }

    pub async fn list_text_models(&self) -> Vec<Model> {
        self.list(ModelCategory::Text).await
    }

    pub async fn catalog(&self) -> ModelCatalog {
        let (image_models, text_models) =
            tokio::join!(self.list_image_models(), self.list_text_models());
        ModelCatalog {
            image_models,
            text_models,
        }
    }

    async fn fetch(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| GenError::RequestError(e.to_string()))?
            .error_for_status()
            .map_err(|e| GenError::ResponseError(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| GenError::ResponseError(e.to_string()))
    }
}

/// Normalizes an array-of-objects or key/value-map listing into models.
/// Returns `None` when the payload has no usable entries.
pub fn normalize(value: &Value) -> Option<Vec<Model>> {
    let models: Vec<Model> = match value {
        Value::Array(entries) => entries.iter().filter_map(from_entry).collect(),
        Value::Object(map) => map
            .iter()
            .map(|(id, details)| Model {
                id: id.clone(),
                name: non_empty_str(details, "name")
                    .unwrap_or(id.as_str())
                    .to_string(),
                description: Some(
                    non_empty_str(details, "description")
                        .unwrap_or_default()
                        .to_string(),
                ),
            })
            .collect(),
        _ => return None,
    };

    if models.is_empty() {
        None
    } else {
        Some(models)
    }
}

fn from_entry(entry: &Value) -> Option<Model> {
    // Some listings are a bare array of ids.
    if let Some(id) = entry.as_str().filter(|s| !s.is_empty()) {
        return Some(Model {
            id: id.to_string(),
            name: id.to_string(),
            description: Some(String::new()),
        });
    }

    let id = non_empty_str(entry, "id");
    let name = non_empty_str(entry, "name");
    let id = id.or(name)?;

    Some(Model {
        id: id.to_string(),
        name: name.unwrap_or(id).to_string(),
        description: Some(
            non_empty_str(entry, "description")
                .unwrap_or_default()
                .to_string(),
        ),
    })
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
