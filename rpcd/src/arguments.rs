//! Argument collection, validation and start-request assembly.

use crate::{ArgKind, ArgumentError, Command, CommandArg, Placement, StartCommand};
use std::collections::BTreeMap;

/// Read a value for every declared argument of `command`.
///
/// `value_of` supplies the current input for an argument; a missing value
/// counts as the empty string. Stops at the first enum argument whose value
/// is not one of its options.
pub fn collect_arguments<F>(command: &Command, mut value_of: F) -> Result<BTreeMap<String, String>, ArgumentError>
where
    F: FnMut(&CommandArg) -> Option<String>,
{
    let mut arguments = BTreeMap::new();
    for arg in &command.args {
        let value = value_of(arg).unwrap_or_default();
        if arg.kind == ArgKind::Enum && !arg.options.iter().any(|option| *option == value) {
            return Err(ArgumentError::OutOfRange {
                argument: arg.name.clone(),
            });
        }
        arguments.insert(arg.name.clone(), value);
    }
    Ok(arguments)
}

/// Assemble the start body. Placement is only sent for windowed commands.
pub fn start_request(command: &Command, arguments: BTreeMap<String, String>, placement: &Placement) -> StartCommand {
    let mut request = StartCommand {
        arguments,
        ..Default::default()
    };
    if command.has_windows() {
        request.fullscreen = Some(u8::from(placement.fullscreen));
        if let Some(target) = &placement.target {
            request.frame = Some(target.frame);
            request.display = Some(target.display.clone()).filter(|display| !display.is_empty());
        }
    }
    request
}

/// Validate and assemble in one step.
pub fn prepare_start<F>(command: &Command, value_of: F, placement: &Placement) -> Result<StartCommand, ArgumentError>
where
    F: FnMut(&CommandArg) -> Option<String>,
{
    let arguments = collect_arguments(command, value_of)?;
    Ok(start_request(command, arguments, placement))
}

/// What the start button of a command leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartAction {
    /// The command takes arguments but is not the selected one. Its
    /// arguments are entered in the detail panel, which shows the selected
    /// command only, so it is selected instead of started.
    SelectFirst,
    Submit(StartCommand),
}

/// Decide how to start `command` from the command list.
///
/// `selected` tells whether `command` is the one shown in the detail panel.
/// An enum value outside its options is an error and nothing is submitted.
pub fn plan_start<F>(
    command: &Command,
    selected: bool,
    value_of: F,
    placement: &Placement,
) -> Result<StartAction, ArgumentError>
where
    F: FnMut(&CommandArg) -> Option<String>,
{
    if !command.args.is_empty() && !selected {
        return Ok(StartAction::SelectFirst);
    }
    prepare_start(command, value_of, placement).map(StartAction::Submit)
}

/// Parse `key=value` pairs as given on a command line.
///
/// The value is everything after the first `=`.
pub fn parse_pairs<I, S>(pairs: I) -> Result<BTreeMap<String, String>, ArgumentError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|pair| {
            let pair = pair.as_ref();
            match pair.split_once('=') {
                Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
                _ => Err(ArgumentError::MalformedPair(pair.to_string())),
            }
        })
        .collect()
}
