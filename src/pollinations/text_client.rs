use std::sync::Arc;

use crate::{
    config::ClientConfig,
    error::{GenError, Result},
    logger,
    models::{ChatMessage, TextGenParams, TextOutput, TextRequestBody, DEFAULT_TEXT_MODEL},
};
use reqwest::Client;
use serde_json::Value;

use super::require_non_blank;

#[derive(Clone)]
pub struct TextClient {
    client: Client,
    config: Arc<ClientConfig>,
}

impl TextClient {
    pub fn new(client: Client, config: Arc<ClientConfig>) -> Self {
        Self { client, config }
    }

    pub fn build_body(params: &TextGenParams) -> TextRequestBody {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = params.system.as_deref().filter(|s| !s.trim().is_empty()) {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(params.prompt.clone()));

        TextRequestBody {
            messages,
            model: params
                .model
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(DEFAULT_TEXT_MODEL)
                .to_string(),
            seed: params.seed,
            private_mode: params.private_mode,
        }
    }

    pub async fn generate(&self, params: &TextGenParams) -> Result<TextOutput> {
        require_non_blank("prompt", &params.prompt)?;

        let body = Self::build_body(params);
        log::info!("📝 Generating text with model: {}", body.model);
        log::debug!(
            "Text generation request payload: {}",
            serde_json::to_string(&body)?
        );

        let _timer = logger::timer("text generation");
        let raw = post_json(&self.client, self.config.text_base(), &body).await?;

        let content = if params.json.unwrap_or(false) {
            pretty(&raw)
        } else {
            extract_content(&raw).ok_or_else(|| {
                GenError::ResponseError("Response did not contain any generated text".into())
            })?
        };

        Ok(TextOutput {
            content,
            raw,
            model: body.model,
        })
    }
}

/// POSTs a JSON body. Object and string replies are returned parsed; any
/// other body, including bare JSON scalars like `42`, comes back as raw text.
pub(crate) async fn post_json<T: serde::Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &T,
) -> Result<Value> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| GenError::RequestError(format!("Request to {} failed: {}", url, e)))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| GenError::ResponseError(e.to_string()))?;

    if !status.is_success() {
        log::error!("❌ {} returned {}: {}", url, status, text);
        return Err(GenError::ResponseError(format!(
            "Request failed with status {}",
            status
        )));
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(value @ (Value::Object(_) | Value::String(_))) => Ok(value),
        _ => Ok(Value::String(text)),
    }
}

/// Pulls generated text out of either a plain string response or an
/// OpenAI-style `choices[0].message.content` object.
pub fn extract_content(raw: &Value) -> Option<String> {
    match raw {
        Value::String(text) => Some(text.clone()),
        Value::Object(_) => raw
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(String::from),
        _ => None,
    }
}

fn pretty(raw: &Value) -> String {
    serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TextClient {
        let config = ClientConfig::new().with_text_url(server.uri());
        TextClient::new(Client::new(), Arc::new(config))
    }

    #[test]
    fn test_body_without_system_has_only_user_message() {
        let body = TextClient::build_body(&TextGenParams::new("hello"));
        assert_eq!(body.messages, vec![ChatMessage::user("hello")]);
        assert_eq!(body.model, "mistral");

        let blank = TextClient::build_body(&TextGenParams::new("hello").with_system("  "));
        assert_eq!(blank.messages.len(), 1);
    }

    #[test]
    fn test_body_with_system_and_options() {
        let mut params = TextGenParams::new("hello")
            .with_system("be brief")
            .with_model("openai");
        params.seed = Some(7);
        params.private_mode = Some(true);

        let value = serde_json::to_value(TextClient::build_body(&params)).unwrap();
        assert_eq!(
            value,
            json!({
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"}
                ],
                "model": "openai",
                "seed": 7,
                "private": true
            })
        );
    }

    #[test]
    fn test_unset_optionals_not_serialized() {
        let value = serde_json::to_value(TextClient::build_body(&TextGenParams::new("hi"))).unwrap();
        assert!(value.get("seed").is_none());
        assert!(value.get("private").is_none());
    }

    #[test]
    fn test_extract_content_shapes() {
        assert_eq!(extract_content(&json!("plain")), Some("plain".to_string()));
        assert_eq!(
            extract_content(&json!({"choices": [{"message": {"content": "hi"}}]})),
            Some("hi".to_string())
        );
        assert_eq!(extract_content(&json!({"choices": []})), None);
        assert_eq!(extract_content(&json!(42)), None);
    }

    #[tokio::test]
    async fn test_generate_plain_text_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_json(json!({
                "messages": [{"role": "user", "content": "a haiku"}],
                "model": "mistral"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("old pond, frog"))
            .expect(1)
            .mount(&server)
            .await;

        let output = client_for(&server)
            .generate(&TextGenParams::new("a haiku"))
            .await
            .unwrap();
        assert_eq!(output.content, "old pond, frog");
        assert_eq!(output.model, "mistral");
    }

    #[tokio::test]
    async fn test_generate_choices_response_and_json_mode() {
        let server = MockServer::start().await;
        let reply = json!({"choices": [{"message": {"content": "structured"}}]});
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let output = client.generate(&TextGenParams::new("q")).await.unwrap();
        assert_eq!(output.content, "structured");

        let mut params = TextGenParams::new("q");
        params.json = Some(true);
        let output = client.generate(&params).await.unwrap();
        assert_eq!(output.content, serde_json::to_string_pretty(&reply).unwrap());
    }

    #[tokio::test]
    async fn test_generate_scalar_body_kept_as_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("42"))
            .mount(&server)
            .await;

        let output = client_for(&server)
            .generate(&TextGenParams::new("6*7? number only"))
            .await
            .unwrap();
        assert_eq!(output.content, "42");
        assert_eq!(output.raw, Value::String("42".to_string()));
    }

    #[tokio::test]
    async fn test_generate_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(&TextGenParams::new("q"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenError::ResponseError(_)));
    }
}
