//! Plain-text rendering of API replies.

use rpcd::{ArgKind, Command, DisplayLayouts, Layout, Status};
use std::io::{self, Write};

pub fn write_layouts<W: Write>(out: &mut W, displays: &[DisplayLayouts]) -> io::Result<()> {
    for display in displays {
        if !display.display.is_empty() {
            writeln!(out, "====== display: {} ======\n", display.display)?;
        }
        for layout in &display.layouts {
            write_layout(out, layout)?;
        }
    }
    Ok(())
}

fn write_layout<W: Write>(out: &mut W, layout: &Layout) -> io::Result<()> {
    writeln!(out, "------ name: {} ------\n", layout.name)?;

    writeln!(out, "Available frames:")?;
    for f in &layout.frames {
        writeln!(out, "frame {} ({},{}) {}x{} screen: {}", f.id, f.x, f.y, f.w, f.h, f.screen)?;
    }
    writeln!(out)?;

    writeln!(out, "Available screens:")?;
    for s in &layout.screens {
        writeln!(out, "screen {} ({}x{})", s.id, s.width, s.height)?;
    }
    writeln!(out)
}

pub fn write_commands<W: Write>(out: &mut W, commands: &[Command]) -> io::Result<()> {
    for command in commands {
        writeln!(out, "------ name: {} ------", command.name)?;
        if let Some(description) = &command.description {
            writeln!(out, "{}\n", description)?;
        }
        if !command.has_windows() {
            writeln!(out, "Has no window")?;
        }

        for arg in &command.args {
            write!(out, "{}=", arg.name)?;
            match arg.kind {
                ArgKind::Enum => writeln!(out, "[{}]", arg.options.join(", "))?,
                ArgKind::String => writeln!(out, "{}", arg.hint.as_deref().unwrap_or(""))?,
            }
        }
        if !command.args.is_empty() {
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_status<W: Write>(out: &mut W, status: &Status) -> io::Result<()> {
    for (display, layout) in status.active_layouts() {
        match display {
            Some(display) => writeln!(out, "Active Layout: {} (display {})", layout, display)?,
            None => writeln!(out, "Active Layout: {}", layout)?,
        }
    }
    writeln!(out, "running:")?;
    writeln!(out, "{}", status.running.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpcd::{ActiveLayouts, CommandArg};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_command_listing() {
        let commands = vec![Command {
            name: "browser".to_string(),
            description: Some("Web browser".to_string()),
            windows: 0,
            args: vec![
                CommandArg {
                    name: "url".to_string(),
                    kind: ArgKind::String,
                    hint: Some("https://".to_string()),
                    options: Vec::new(),
                },
                CommandArg {
                    name: "mode".to_string(),
                    kind: ArgKind::Enum,
                    hint: None,
                    options: vec!["kiosk".to_string(), "normal".to_string()],
                },
            ],
        }];

        let text = render(|out| write_commands(out, &commands));

        assert_eq!(
            text,
            "------ name: browser ------\nWeb browser\n\nHas no window\nurl=https://\nmode=[kiosk, normal]\n\n"
        );
    }

    #[test]
    fn test_single_layout_status() {
        let status = Status {
            layout: ActiveLayouts::Single("main".to_string()),
            running: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };

        let text = render(|out| write_status(out, &status));

        assert_eq!(text, "Active Layout: main\nrunning:\na,\nb\n");
    }
}
