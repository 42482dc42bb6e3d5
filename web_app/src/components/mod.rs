mod command_panel;
mod layout_panel;
mod preview;
mod running;
mod shell;
mod status_line;

pub use command_panel::{CommandDetail, CommandList};
pub use layout_panel::{DisplaySelector, LayoutList};
pub use preview::LayoutPreview;
pub use running::RunningCommands;
pub use shell::ControllerShell;
pub use status_line::StatusLine;
