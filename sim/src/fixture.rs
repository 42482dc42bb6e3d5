//! Catalog the simulator serves: layouts per display and commands.

use rpcd::{Command, DisplayLayouts, LayoutCatalog};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Built-in demo catalog, used when no fixture is configured.
pub const DEMO_FIXTURE: &str = include_str!("../fixtures/demo.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read fixture {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("fixture defines no display")]
    NoDisplay,
}

#[derive(Deserialize)]
struct FixtureFile {
    layouts: LayoutCatalog,
    #[serde(default)]
    commands: Vec<Command>,
}

/// Layouts and commands known to the simulator. Read-only after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub displays: Vec<DisplayLayouts>,
    pub commands: Vec<Command>,
}

impl Catalog {
    /// Parse a fixture. `layouts` may be grouped per display or a flat list.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let file: FixtureFile = serde_json::from_str(json)?;
        let displays = file.layouts.into_displays();
        if displays.is_empty() {
            return Err(FixtureError::NoDisplay);
        }
        Ok(Self {
            displays,
            commands: file.commands,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn demo() -> Result<Self, FixtureError> {
        Self::from_json(DEMO_FIXTURE)
    }

    pub fn layout_count(&self) -> usize {
        self.displays.iter().map(|d| d.layouts.len()).sum()
    }
}
