pub mod audio;
pub mod image;
pub mod text;

#[cfg(test)]
pub(crate) mod fake;

use std::future::Future;

use crate::{
    app::{GeneratorKind, ParameterPanel},
    error::{GenError, Result},
};
use tokio::sync::watch;

pub use audio::{AudioForm, AudioGenerator};
pub use image::{ImageForm, ImageGenerator};
pub use text::{TextForm, TextGenerator, TextResult};

/// Lifecycle of a single generator view.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationState<T> {
    Idle,
    Submitting,
    Success(T),
    Error(String),
}

impl<T> GenerationState<T> {
    pub fn is_submitting(&self) -> bool {
        matches!(self, GenerationState::Submitting)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            GenerationState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Holds the current state and broadcasts every transition to subscribers.
pub struct GenerationStatus<T> {
    tx: watch::Sender<GenerationState<T>>,
}

impl<T: Clone> GenerationStatus<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(GenerationState::Idle);
        Self { tx }
    }

    pub fn state(&self) -> GenerationState<T> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GenerationState<T>> {
        self.tx.subscribe()
    }

    pub fn is_submitting(&self) -> bool {
        self.tx.borrow().is_submitting()
    }

    pub fn begin(&self) -> Result<()> {
        let mut busy = false;
        self.tx.send_if_modified(|state| {
            if state.is_submitting() {
                busy = true;
                false
            } else {
                *state = GenerationState::Submitting;
                true
            }
        });
        if busy {
            Err(GenError::Busy)
        } else {
            Ok(())
        }
    }

    pub fn succeed(&self, value: T) {
        self.tx.send_replace(GenerationState::Success(value));
    }

    /// Replaces any previous result with the failure message.
    pub fn fail(&self, message: impl Into<String>) {
        self.tx.send_replace(GenerationState::Error(message.into()));
    }

    /// Drives `Submitting -> Success | Error` around one request.
    pub async fn run<F>(&self, request: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.begin()?;
        match request.await {
            Ok(value) => {
                self.succeed(value.clone());
                Ok(value)
            }
            Err(e) => {
                log::error!("❌ Generation failed: {}", e);
                self.fail(e.to_string());
                Err(e)
            }
        }
    }
}

impl<T: Clone> Default for GenerationStatus<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// What the shared workspace needs to know about a mounted generator.
pub trait GeneratorView {
    fn kind(&self) -> GeneratorKind;

    /// Parameter summary shown in the sidebar.
    fn panel(&self) -> ParameterPanel;

    /// False while the prompt is blank or a request is in flight.
    fn can_submit(&self) -> bool;
}

pub(crate) fn ensure_prompt(prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        Err(GenError::ValidationError("prompt is required".into()))
    } else {
        Ok(())
    }
}
