//! One CLI invocation against the API.

use crate::cli::{Action, Cli};
use crate::exit::UsageError;
use crate::output::{write_commands, write_layouts, write_status};
use crate::poller::StatusPoller;
use crate::transport::ReqwestTransport;
use anyhow::Context;
use rpcd::{
    collect_arguments, find_command, parse_pairs, start_request, Api, FrameTarget, Placement,
};
use serde::Serialize;
use std::io::Write;
use std::ops::ControlFlow;
use std::time::Duration;

pub fn api_for(cli: &Cli) -> Api<ReqwestTransport> {
    let base = cli.base_url();
    Api::new(ReqwestTransport::new(&base), base)
}

/// Execute the parsed command line, writing results to `out`.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let action = cli.action.clone().ok_or(UsageError::NoCommand)?;
    let api = api_for(cli);
    tracing::debug!("API base {}", api.base());

    match action {
        Action::List { target } => {
            let target = target.ok_or(UsageError::MissingListTarget)?;
            match target.as_str() {
                "commands" => {
                    let commands = api.commands().await.context("cannot list commands")?;
                    if cli.json {
                        write_json(out, &commands)?;
                    } else {
                        write_commands(out, &commands)?;
                    }
                }
                "layouts" => {
                    let displays = api.layouts().await.context("cannot list layouts")?;
                    if cli.json {
                        write_json(out, &displays)?;
                    } else {
                        write_layouts(out, &displays)?;
                    }
                }
                _ => return Err(UsageError::UnknownListTarget(target).into()),
            }
        }
        Action::Apply { layout, display } => {
            let layout = layout.ok_or(UsageError::MissingLayoutName)?;
            api.apply_layout(display.as_deref(), &layout)
                .await
                .with_context(|| format!("cannot apply layout {}", layout))?;
            writeln!(out, "Applied layout {}", layout)?;
        }
        Action::Run {
            command,
            arguments,
            fullscreen,
            frame,
            display,
        } => {
            let name = command.ok_or(UsageError::RunMissingCommand)?;
            // Malformed pairs are rejected before anything is sent
            let given = parse_pairs(&arguments)?;

            let commands = api.commands().await.context("cannot fetch commands")?;
            let command = find_command(&commands, &name).ok_or_else(|| UsageError::NoSuchCommand(name.clone()))?;
            for key in given.keys().filter(|key| !command.args.iter().any(|arg| &arg.name == *key)) {
                tracing::warn!("Ignoring argument {} not declared by {}", key, name);
            }
            let values = collect_arguments(command, |arg| given.get(&arg.name).cloned())?;

            let placement = Placement {
                fullscreen,
                target: frame.map(|frame| FrameTarget {
                    display: display.unwrap_or_default(),
                    frame,
                }),
            };
            let request = start_request(command, values, &placement);
            api.start_command(&name, &request)
                .await
                .with_context(|| format!("cannot start {}", name))?;
            writeln!(out, "Started {}", name)?;
        }
        Action::Stop { command } => {
            let name = command.ok_or(UsageError::MissingCommandName)?;
            api.stop_command(&name)
                .await
                .with_context(|| format!("cannot stop {}", name))?;
            writeln!(out, "Stopped {}", name)?;
        }
        Action::Move { command, frame } => {
            let name = command.ok_or(UsageError::MissingCommandName)?;
            let frame = frame.ok_or(UsageError::MissingFrame)?;
            api.move_command(&name, frame)
                .await
                .with_context(|| format!("cannot move {}", name))?;
            writeln!(out, "Moved {} to frame {}", name, frame)?;
        }
        Action::Reset => {
            api.reset().await.context("cannot reset")?;
            writeln!(out, "Reset")?;
        }
        Action::State => {
            let status = api.status().await.context("cannot query status")?;
            if cli.json {
                write_json(out, &status)?;
            } else {
                write_status(out, &status)?;
            }
        }
        Action::Watch { interval } => {
            tokio::select! {
                result = watch(&api, Duration::from_secs(interval.max(1)), cli.json, out) => result?,
                _ = tokio::signal::ctrl_c() => tracing::info!("Interrupted"),
            }
        }
    }
    Ok(())
}

/// Bootstrap, then poll forever.
async fn watch<W: Write>(
    api: &Api<ReqwestTransport>,
    period: Duration,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let bootstrap = api.bootstrap().await;
    match &bootstrap.layouts {
        Ok(displays) => writeln!(
            out,
            "{} layout(s) on {} display(s)",
            displays.iter().map(|d| d.layouts.len()).sum::<usize>(),
            displays.len()
        )?,
        Err(e) => writeln!(out, "Failed to fetch layouts: {}", e)?,
    }
    match &bootstrap.commands {
        Ok(commands) => writeln!(out, "{} command(s)", commands.len())?,
        Err(e) => writeln!(out, "Failed to fetch commands: {}", e)?,
    }

    let mut failure = None;
    StatusPoller::new(api, period)
        .run(|result| {
            let written = match result {
                Ok(status) if json => write_json(out, &status),
                Ok(status) => write_status(out, &status).map_err(anyhow::Error::from),
                Err(e) => writeln!(out, "Failed to query status: {}", e).map_err(anyhow::Error::from),
            };
            match written {
                Ok(()) => ControlFlow::Continue(()),
                Err(e) => {
                    failure = Some(e);
                    ControlFlow::Break(())
                }
            }
        })
        .await;
    failure.map_or(Ok(()), Err)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
