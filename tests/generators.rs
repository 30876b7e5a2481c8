use std::sync::Arc;

use polynate::{
    ClientConfig, GenError, GenerationState, GeneratorKind, GeneratorView, ImageGenerator,
    PollinationsClient, TextGenerator, Workspace,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Arc<PollinationsClient> {
    let config = ClientConfig::new()
        .with_image_url(server.uri())
        .with_text_url(server.uri());
    Arc::new(PollinationsClient::new(config).unwrap())
}

#[tokio::test]
async fn image_generator_end_to_end() {
    let client = Arc::new(PollinationsClient::new(ClientConfig::new()).unwrap());
    let mut view = ImageGenerator::new(client);
    view.form.prompt = "a cat".to_string();
    view.form.enhance = false;

    let output = view.generate().await.unwrap();
    assert!(output.url.starts_with("https://image.pollinations.ai"));
    assert!(output.url.contains("width=1024&height=1024"));
    assert!(matches!(view.state(), GenerationState::Success(_)));
}

#[tokio::test]
async fn empty_prompt_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("unused"))
        .expect(0)
        .mount(&server)
        .await;

    let mut view = TextGenerator::new(client_for(&server));
    assert!(!view.can_submit());
    assert!(matches!(
        view.generate().await,
        Err(GenError::ValidationError(_))
    ));
}

#[tokio::test]
async fn text_generator_against_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "Bonjour"}}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "openai": {},
            "mistral": {"name": "Mistral", "description": "fast"}
        })))
        .mount(&server)
        .await;

    let workspace = Workspace::default();
    let mut view = TextGenerator::new(client_for(&server));
    let models = view.load_models().await.to_vec();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].id, "openai");
    assert_eq!(models[1].name, "Mistral");

    view.form.prompt = "Say hello in French".to_string();
    view.form.system = "Answer in one word".to_string();
    workspace.mount(&view);
    assert_eq!(workspace.active(), GeneratorKind::Text);

    let result = view.generate().await.unwrap();
    assert_eq!(result.output.content, "Bonjour");
    assert_eq!(result.params.system.as_deref(), Some("Answer in one word"));
}

#[tokio::test]
async fn server_failure_surfaces_as_error_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mut view = TextGenerator::new(client_for(&server));
    view.form.prompt = "hello".to_string();

    assert!(view.generate().await.is_err());
    let state = view.state();
    assert!(state.result().is_none());
    assert!(state.error().unwrap().contains("502"));
    assert!(view.can_submit());
}
