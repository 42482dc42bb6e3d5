//! Views derived from the polled status, and the poll state machine.

use crate::{find_display, Command, DisplayLayouts, FrameTarget, Status};
use std::time::Duration;

/// Interval between status polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Running flag of one known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandState {
    pub name: String,
    pub running: bool,
}

/// Running state of every known command, in command order.
pub fn command_states(commands: &[Command], status: &Status) -> Vec<CommandState> {
    commands
        .iter()
        .map(|command| CommandState {
            name: command.name.clone(),
            running: status.is_running(&command.name),
        })
        .collect()
}

/// Every frame of every display's active layout.
///
/// Displays or layouts the catalog does not know are skipped.
pub fn frame_targets(displays: &[DisplayLayouts], status: &Status) -> Vec<FrameTarget> {
    let mut targets = Vec::new();
    for display in displays {
        let Some(layout) = status
            .active_layout(&display.display)
            .and_then(|name| display.layout(name))
        else {
            continue;
        };
        targets.extend(layout.frames.iter().map(|frame| FrameTarget {
            display: display.display.clone(),
            frame: frame.id,
        }));
    }
    targets
}

/// Keep `previous` when it is still offered, otherwise take the first target.
pub fn preferred_target(targets: &[FrameTarget], previous: Option<&FrameTarget>) -> Option<FrameTarget> {
    previous
        .filter(|previous| targets.contains(*previous))
        .or_else(|| targets.first())
        .cloned()
}

/// Name of the layout active on `display`, if the catalog knows it.
pub fn active_layout_name<'a>(displays: &'a [DisplayLayouts], status: &Status, display: &str) -> Option<&'a str> {
    let name = status.active_layout(display)?;
    find_display(displays, display)?
        .layout(name)
        .map(|layout| layout.name.as_str())
}

/// Poll state machine: idle -> fetching -> idle.
///
/// A tick that arrives while a fetch is still outstanding is skipped, so
/// polls never overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PollState {
    #[default]
    Idle,
    Fetching,
}

impl PollState {
    /// Returns true when the tick may start a fetch.
    pub fn begin(&mut self) -> bool {
        match self {
            PollState::Fetching => false,
            PollState::Idle => {
                *self = PollState::Fetching;
                true
            }
        }
    }

    /// The fetch finished, successfully or not.
    pub fn finish(&mut self) {
        *self = PollState::Idle;
    }
}
