//! Request bodies and frame targets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Body of `POST /command/{name}`.
///
/// The placement fields are only present for commands that open windows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartCommand {
    pub arguments: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// A frame of a display's active layout, written `display/frame`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameTarget {
    pub display: String,
    pub frame: u32,
}

impl fmt::Display for FrameTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.display, self.frame)
    }
}

impl FromStr for FrameTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (display, frame) = s
            .rsplit_once('/')
            .ok_or_else(|| format!("Frame target must look like display/frame: {}", s))?;
        let frame = frame
            .parse::<u32>()
            .map_err(|_| format!("Frame must be a number: {}", frame))?;
        Ok(FrameTarget {
            display: display.to_string(),
            frame,
        })
    }
}

/// Where a windowed command should appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub fullscreen: bool,
    pub target: Option<FrameTarget>,
}
