//! Typed client and generator state machines for the Pollinations
//! generative-media API.
//!
//! ```no_run
//! use polynate::{ClientConfig, GenerationBackend, ImageGenParams, PollinationsClient};
//!
//! # async fn run() -> polynate::Result<()> {
//! let client = PollinationsClient::new(ClientConfig::from_env())?;
//! let image = client.generate_image(&ImageGenParams::new("a cat")).await?;
//! println!("{}", image.url);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod models;
pub mod pollinations;

pub use app::{GeneratorKind, ParameterPanel, Workspace};
pub use config::ClientConfig;
pub use error::{GenError, Result};
pub use generator::{
    AudioGenerator, GenerationState, GenerationStatus, GeneratorView, ImageGenerator,
    TextGenerator,
};
pub use models::*;
pub use pollinations::{
    AudioClient, GenerationBackend, ImageClient, ModelClient, PollinationsClient, TextClient,
    VisionClient,
};
