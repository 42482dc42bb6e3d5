//! Mutable simulator state: active layout per display and running commands.

use crate::fixture::Catalog;
use rpcd::{collect_arguments, find_command, find_display, ActiveLayouts, DisplayState, StartCommand, Status};
use std::collections::BTreeMap;
use thiserror::Error;

/// Rejections, worded the way the daemon words them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("No such command")]
    NoSuchCommand,
    #[error("No such layout")]
    NoSuchLayout,
    #[error("No such frame")]
    NoSuchFrame,
    #[error("Unknown Endpoint")]
    UnknownEndpoint,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Already running")]
    AlreadyRunning,
    #[error("Not running")]
    NotRunning,
    #[error("Failed to start: {0}")]
    FailedToStart(String),
}

impl SimError {
    /// Client mistakes are answered with 400, state conflicts with 500.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SimError::NoSuchCommand
                | SimError::NoSuchLayout
                | SimError::NoSuchFrame
                | SimError::UnknownEndpoint
                | SimError::InvalidBody(_)
        )
    }
}

/// Where a started command lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningCommand {
    pub name: String,
    pub arguments: BTreeMap<String, String>,
    pub display: Option<String>,
    pub frame: Option<u32>,
    pub fullscreen: bool,
}

#[derive(Debug, Clone)]
pub struct SimState {
    catalog: Catalog,
    active: Vec<DisplayState>,
    running: Vec<RunningCommand>,
}

impl SimState {
    /// Every display starts on its first layout.
    pub fn new(catalog: Catalog) -> Self {
        let active = default_layouts(&catalog);
        Self {
            catalog,
            active,
            running: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn running(&self) -> &[RunningCommand] {
        &self.running
    }

    pub fn running_command(&self, name: &str) -> Option<&RunningCommand> {
        self.running.iter().find(|command| command.name == name)
    }

    pub fn status(&self) -> Status {
        // Running names are reported in catalog order
        let running = self
            .catalog
            .commands
            .iter()
            .filter(|command| self.running_command(&command.name).is_some())
            .map(|command| command.name.clone())
            .collect();
        Status {
            layouts: Some(self.catalog.layout_count()),
            commands: Some(self.catalog.commands.len()),
            layout: ActiveLayouts::PerDisplay(self.active.clone()),
            running,
        }
    }

    /// Activate `name`. Without a display the first display offering the
    /// layout is used.
    pub fn apply_layout(&mut self, display: Option<&str>, name: &str) -> Result<(), SimError> {
        let owner = match display {
            Some(display) => find_display(&self.catalog.displays, display)
                .filter(|d| d.layout(name).is_some()),
            None => self.catalog.displays.iter().find(|d| d.layout(name).is_some()),
        }
        .ok_or(SimError::NoSuchLayout)?;

        let owner = owner.display.clone();
        if let Some(state) = self.active.iter_mut().find(|state| state.display == owner) {
            state.layout = name.to_string();
        }
        tracing::info!("Layout {} active on display {:?}", name, owner);
        Ok(())
    }

    pub fn start(&mut self, name: &str, request: StartCommand) -> Result<(), SimError> {
        let command = find_command(&self.catalog.commands, name).ok_or(SimError::NoSuchCommand)?;
        if self.running_command(name).is_some() {
            return Err(SimError::AlreadyRunning);
        }

        let arguments = collect_arguments(command, |arg| request.arguments.get(&arg.name).cloned())
            .map_err(|e| SimError::FailedToStart(e.to_string()))?;

        let display = match (&request.display, request.frame) {
            (Some(display), _) => Some(display.clone()),
            (None, Some(frame)) => Some(self.display_with_frame(frame)?),
            (None, None) => None,
        };
        if let (Some(display), Some(frame)) = (&display, request.frame) {
            self.check_frame(display, frame)?;
        }

        tracing::info!("Starting {} with {:?}", name, arguments);
        self.running.push(RunningCommand {
            name: name.to_string(),
            arguments,
            display,
            frame: request.frame,
            fullscreen: request.fullscreen.unwrap_or(0) != 0,
        });
        Ok(())
    }

    pub fn stop(&mut self, name: &str) -> Result<(), SimError> {
        if find_command(&self.catalog.commands, name).is_none() {
            return Err(SimError::NoSuchCommand);
        }
        let index = self
            .running
            .iter()
            .position(|command| command.name == name)
            .ok_or(SimError::NotRunning)?;
        self.running.remove(index);
        tracing::info!("Stopped {}", name);
        Ok(())
    }

    /// Reassign a running command to a frame of its display's active layout.
    pub fn move_command(&mut self, name: &str, frame: u32) -> Result<(), SimError> {
        if find_command(&self.catalog.commands, name).is_none() {
            return Err(SimError::NoSuchCommand);
        }
        let current = self.running_command(name).ok_or(SimError::NotRunning)?;
        let display = match &current.display {
            Some(display) => display.clone(),
            None => self.display_with_frame(frame)?,
        };
        self.check_frame(&display, frame)?;

        if let Some(command) = self.running.iter_mut().find(|command| command.name == name) {
            command.display = Some(display);
            command.frame = Some(frame);
            command.fullscreen = false;
        }
        tracing::info!("Moved {} to frame {}", name, frame);
        Ok(())
    }

    /// Stop everything and return every display to its default layout.
    pub fn reset(&mut self) {
        self.running.clear();
        self.active = default_layouts(&self.catalog);
        tracing::info!("Reset");
    }

    fn active_frames(&self, display: &str) -> Vec<u32> {
        self.active
            .iter()
            .find(|state| state.display == display)
            .and_then(|state| {
                find_display(&self.catalog.displays, display).and_then(|d| d.layout(&state.layout))
            })
            .map(|layout| layout.frames.iter().map(|frame| frame.id).collect())
            .unwrap_or_default()
    }

    fn check_frame(&self, display: &str, frame: u32) -> Result<(), SimError> {
        if self.active_frames(display).contains(&frame) {
            Ok(())
        } else {
            Err(SimError::NoSuchFrame)
        }
    }

    fn display_with_frame(&self, frame: u32) -> Result<String, SimError> {
        self.active
            .iter()
            .map(|state| state.display.as_str())
            .find(|display| self.active_frames(display).contains(&frame))
            .map(str::to_string)
            .ok_or(SimError::NoSuchFrame)
    }
}

fn default_layouts(catalog: &Catalog) -> Vec<DisplayState> {
    catalog
        .displays
        .iter()
        .filter_map(|display| {
            display.layouts.first().map(|layout| DisplayState {
                display: display.display.clone(),
                layout: layout.name.clone(),
            })
        })
        .collect()
}
