use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::generator::GeneratorView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Image,
    Text,
    Audio,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::Image,
        GeneratorKind::Text,
        GeneratorKind::Audio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Image => "image",
            GeneratorKind::Text => "text",
            GeneratorKind::Audio => "audio",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            GeneratorKind::Image => "/",
            GeneratorKind::Text => "/text",
            GeneratorKind::Audio => "/audio",
        }
    }

    /// Resolves a navigation path. The root path is the image generator.
    pub fn from_route(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" | "/image" => Some(GeneratorKind::Image),
            "/text" => Some(GeneratorKind::Text),
            "/audio" => Some(GeneratorKind::Audio),
            _ => None,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorKind {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(GeneratorKind::Image),
            "text" => Ok(GeneratorKind::Text),
            "audio" => Ok(GeneratorKind::Audio),
            other => Err(GenError::ValidationError(format!(
                "Unknown generator '{}'",
                other
            ))),
        }
    }
}

/// Ordered parameter summary a generator shows in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterPanel {
    pub kind: GeneratorKind,
    pub entries: Vec<(String, String)>,
}

impl ParameterPanel {
    pub fn new(kind: GeneratorKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, key: &str, value: impl ToString) -> Self {
        self.entries.push((key.to_string(), value.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug)]
struct WorkspaceState {
    active: GeneratorKind,
    panel: Option<ParameterPanel>,
}

/// Shared slot for the active generator and its sidebar parameters.
/// Cloning shares the slot.
#[derive(Debug, Clone)]
pub struct Workspace {
    state: Arc<RwLock<WorkspaceState>>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(GeneratorKind::Image)
    }
}

impl Workspace {
    pub fn new(active: GeneratorKind) -> Self {
        Self {
            state: Arc::new(RwLock::new(WorkspaceState {
                active,
                panel: None,
            })),
        }
    }

    pub fn active(&self) -> GeneratorKind {
        self.read(|state| state.active)
    }

    /// Switches generators, dropping a panel that belongs to another one.
    pub fn activate(&self, kind: GeneratorKind) {
        self.write(|state| {
            if state.active != kind {
                log::debug!("Switching generator {} -> {}", state.active, kind);
                state.active = kind;
            }
            if state.panel.as_ref().is_some_and(|p| p.kind != kind) {
                state.panel = None;
            }
        });
    }

    pub fn navigate(&self, path: &str) -> Option<GeneratorKind> {
        let kind = GeneratorKind::from_route(path)?;
        self.activate(kind);
        Some(kind)
    }

    /// Last writer wins. Returns false when `panel` is for an inactive
    /// generator, in which case the slot is left untouched.
    pub fn publish(&self, panel: ParameterPanel) -> bool {
        self.write(|state| {
            if panel.kind != state.active {
                log::debug!(
                    "Ignoring {} panel while {} is active",
                    panel.kind,
                    state.active
                );
                return false;
            }
            state.panel = Some(panel);
            true
        })
    }

    /// Activates the view's generator and publishes its parameters.
    pub fn mount(&self, view: &dyn GeneratorView) {
        self.activate(view.kind());
        self.publish(view.panel());
    }

    pub fn panel(&self) -> Option<ParameterPanel> {
        self.read(|state| state.panel.clone())
    }

    fn read<R>(&self, f: impl FnOnce(&WorkspaceState) -> R) -> R {
        match self.state.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn write<R>(&self, f: impl FnOnce(&mut WorkspaceState) -> R) -> R {
        match self.state.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}
