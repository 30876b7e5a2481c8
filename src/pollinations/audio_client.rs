use std::sync::Arc;

use crate::{
    config::ClientConfig,
    error::{GenError, Result},
    models::{AudioGenParams, AudioOutput, DEFAULT_AUDIO_MODEL, DEFAULT_VOICE, SUPPORTED_VOICES},
};
use url::form_urlencoded;

use super::require_non_blank;

#[derive(Clone)]
pub struct AudioClient {
    config: Arc<ClientConfig>,
}

impl AudioClient {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn supported_voices() -> &'static [&'static str] {
        &SUPPORTED_VOICES
    }

    pub fn build_url(&self, params: &AudioGenParams) -> Result<String> {
        require_non_blank("prompt", &params.prompt)?;

        let voice = resolve_voice(params)?;
        let model = params
            .model
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_AUDIO_MODEL);

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("model", model)
            .append_pair("voice", voice)
            .finish();

        Ok(format!(
            "{}/{}?{}",
            self.config.text_base(),
            urlencoding::encode(&params.prompt),
            query
        ))
    }

    /// Speech is streamed by the host on GET; the URL is the playable source.
    pub async fn generate(&self, params: &AudioGenParams) -> Result<AudioOutput> {
        let url = self.build_url(params)?;
        let voice = resolve_voice(params)?.to_string();

        log::info!("🔊 Speech URL built with voice: {}", voice);
        log::debug!("Speech URL: {}", url);

        Ok(AudioOutput {
            url,
            voice,
            params: params.clone(),
        })
    }
}

fn resolve_voice(params: &AudioGenParams) -> Result<&str> {
    let voice = params
        .voice
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_VOICE);
    if SUPPORTED_VOICES.contains(&voice) {
        Ok(voice)
    } else {
        Err(GenError::ValidationError(format!(
            "Unsupported voice '{}', expected one of: {}",
            voice,
            SUPPORTED_VOICES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AudioClient {
        AudioClient::new(Arc::new(ClientConfig::new()))
    }

    #[test]
    fn test_default_model_and_voice() {
        let url = client().build_url(&AudioGenParams::new("hello world")).unwrap();
        assert_eq!(
            url,
            "https://text.pollinations.ai/hello%20world?model=openai-audio&voice=alloy"
        );
    }

    #[test]
    fn test_explicit_voice() {
        let url = client()
            .build_url(&AudioGenParams::new("hi").with_voice("nova"))
            .unwrap();
        assert!(url.ends_with("voice=nova"));
    }

    #[test]
    fn test_unknown_voice_rejected() {
        let err = client()
            .build_url(&AudioGenParams::new("hi").with_voice("robot"))
            .unwrap_err();
        assert!(matches!(err, GenError::ValidationError(_)));
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert!(client().build_url(&AudioGenParams::new("")).is_err());
    }
}
