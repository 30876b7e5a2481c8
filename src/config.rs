use std::env;
use std::time::Duration;

use crate::error::{GenError, Result};

pub const DEFAULT_IMAGE_URL: &str = "https://image.pollinations.ai";
pub const DEFAULT_TEXT_URL: &str = "https://text.pollinations.ai";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub image_base_url: String,
    pub text_base_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            image_base_url: DEFAULT_IMAGE_URL.to_string(),
            text_base_url: DEFAULT_TEXT_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            user_agent: Some(format!("polynate/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `POLYNATE_IMAGE_URL`, `POLYNATE_TEXT_URL` and
    /// `POLYNATE_TIMEOUT_SECS`, keeping defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("POLYNATE_IMAGE_URL") {
            config.image_base_url = url;
        }
        if let Ok(url) = env::var("POLYNATE_TEXT_URL") {
            config.text_base_url = url;
        }
        if let Some(secs) = env::var("POLYNATE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = if secs == 0 {
                None
            } else {
                Some(Duration::from_secs(secs))
            };
        }

        config
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into();
        self
    }

    pub fn with_text_url(mut self, url: impl Into<String>) -> Self {
        self.text_base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("image", &self.image_base_url),
            ("text", &self.text_base_url),
        ] {
            let parsed = url::Url::parse(value).map_err(|e| {
                GenError::ConfigError(format!("Invalid {} host '{}': {}", name, value, e))
            })?;
            if parsed.cannot_be_a_base() {
                return Err(GenError::ConfigError(format!(
                    "{} host '{}' cannot be used as a base URL",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Base URL with any trailing slash removed, ready for path joining.
    pub(crate) fn image_base(&self) -> &str {
        self.image_base_url.trim_end_matches('/')
    }

    pub(crate) fn text_base(&self) -> &str {
        self.text_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hosts() {
        let config = ClientConfig::new();
        assert_eq!(config.image_base(), "https://image.pollinations.ai");
        assert_eq!(config.text_base(), "https://text.pollinations.ai");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = ClientConfig::new()
            .with_image_url("http://localhost:9000/")
            .with_text_url("http://localhost:9001");
        assert_eq!(config.image_base(), "http://localhost:9000");
        assert_eq!(config.text_base(), "http://localhost:9001");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let config = ClientConfig::new().with_text_url("not a url");
        assert!(matches!(config.validate(), Err(GenError::ConfigError(_))));
    }
}
