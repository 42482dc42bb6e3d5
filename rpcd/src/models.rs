//! Layout, command and status models as served by the rpcd API.

use serde::{Deserialize, Serialize};

/// One display surface of a layout, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

/// A rectangular region of a screen that a command window can occupy.
///
/// Coordinates are relative to the screen whose `id` equals `screen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub id: u32,
    pub screen: u32,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// A named partition of one or more screens into frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    pub name: String,
    #[serde(default)]
    pub screens: Vec<Screen>,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl Layout {
    /// Look up a screen by id.
    pub fn screen(&self, id: u32) -> Option<&Screen> {
        self.screens.iter().find(|screen| screen.id == id)
    }

    /// Look up a frame by id.
    pub fn frame(&self, id: u32) -> Option<&Frame> {
        self.frames.iter().find(|frame| frame.id == id)
    }
}

/// All layouts available on one display.
///
/// `layouts` is required on the wire so that a grouped catalog can never be
/// mistaken for a flat one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLayouts {
    pub display: String,
    pub layouts: Vec<Layout>,
}

impl DisplayLayouts {
    /// Look up a layout of this display by name.
    pub fn layout(&self, name: &str) -> Option<&Layout> {
        self.layouts.iter().find(|layout| layout.name == name)
    }
}

/// `/layouts` payload.
///
/// The daemon groups layouts per display; older backends return a flat list
/// where each layout may name its display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LayoutCatalog {
    Grouped(Vec<DisplayLayouts>),
    Flat(Vec<Layout>),
}

impl LayoutCatalog {
    /// Normalize to one entry per display, in first-seen order.
    ///
    /// Flat layouts without a display end up under the unnamed display `""`.
    pub fn into_displays(self) -> Vec<DisplayLayouts> {
        match self {
            LayoutCatalog::Grouped(displays) => displays,
            LayoutCatalog::Flat(layouts) => {
                let mut displays: Vec<DisplayLayouts> = Vec::new();
                for layout in layouts {
                    let display = layout.display.clone().unwrap_or_default();
                    match displays.iter_mut().find(|d| d.display == display) {
                        Some(group) => group.layouts.push(layout),
                        None => displays.push(DisplayLayouts {
                            display,
                            layouts: vec![layout],
                        }),
                    }
                }
                displays
            }
        }
    }
}

/// Find a display's layouts by display name.
pub fn find_display<'a>(displays: &'a [DisplayLayouts], display: &str) -> Option<&'a DisplayLayouts> {
    displays.iter().find(|d| d.display == display)
}

/// Kind of a command argument.
///
/// Unknown kinds are treated as free text, matching how the web client
/// renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    Enum,
    #[serde(other)]
    String,
}

/// A declared argument of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArg {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArgKind,
    /// Placeholder shown for free-text arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Allowed values of an enum argument.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// A launchable command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of windows the command opens; 0 for background commands.
    #[serde(default)]
    pub windows: u32,
    #[serde(default)]
    pub args: Vec<CommandArg>,
}

impl Command {
    /// Whether the command opens windows and therefore takes a placement.
    pub fn has_windows(&self) -> bool {
        self.windows > 0
    }
}

/// Find a command by name.
pub fn find_command<'a>(commands: &'a [Command], name: &str) -> Option<&'a Command> {
    commands.iter().find(|command| command.name == name)
}

/// Active layout of one display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub display: String,
    pub layout: String,
}

/// The `layout` field of `/status`: a bare name on single-display backends,
/// one entry per display on the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActiveLayouts {
    Single(String),
    PerDisplay(Vec<DisplayState>),
}

impl Default for ActiveLayouts {
    fn default() -> Self {
        ActiveLayouts::PerDisplay(Vec::new())
    }
}

/// Polled service status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Number of configured layouts, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layouts: Option<usize>,
    /// Number of configured commands, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<usize>,
    #[serde(default)]
    pub layout: ActiveLayouts,
    #[serde(default)]
    pub running: Vec<String>,
}

impl Status {
    pub fn is_running(&self, command: &str) -> bool {
        self.running.iter().any(|name| name == command)
    }

    /// Name of the layout currently active on `display`.
    pub fn active_layout(&self, display: &str) -> Option<&str> {
        match &self.layout {
            ActiveLayouts::Single(name) => Some(name.as_str()),
            ActiveLayouts::PerDisplay(states) => states
                .iter()
                .find(|state| state.display == display)
                .map(|state| state.layout.as_str()),
        }
    }

    /// `(display, layout)` pairs of every active layout.
    pub fn active_layouts(&self) -> Vec<(Option<&str>, &str)> {
        match &self.layout {
            ActiveLayouts::Single(name) => vec![(None, name.as_str())],
            ActiveLayouts::PerDisplay(states) => states
                .iter()
                .map(|state| (Some(state.display.as_str()), state.layout.as_str()))
                .collect(),
        }
    }
}
