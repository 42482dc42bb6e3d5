/// Views derived from the polled status.
use rpcd::{
    active_layout_name, command_states, frame_targets, preferred_target, ActiveLayouts, Command,
    DisplayLayouts, DisplayState, Frame, FrameTarget, Layout, PollState, Status, POLL_INTERVAL,
    REQUEST_TIMEOUT,
};

fn layout(name: &str, frame_ids: &[u32]) -> Layout {
    Layout {
        display: None,
        name: name.to_string(),
        screens: Vec::new(),
        frames: frame_ids
            .iter()
            .map(|&id| Frame { id, screen: 0, x: 0, y: 0, w: 10, h: 10 })
            .collect(),
    }
}

fn catalog() -> Vec<DisplayLayouts> {
    vec![
        DisplayLayouts {
            display: ":0".to_string(),
            layouts: vec![layout("full", &[1]), layout("split", &[1, 2])],
        },
        DisplayLayouts {
            display: ":1".to_string(),
            layouts: vec![layout("quad", &[1, 2, 3, 4])],
        },
    ]
}

fn status(active: &[(&str, &str)], running: &[&str]) -> Status {
    Status {
        layout: ActiveLayouts::PerDisplay(
            active
                .iter()
                .map(|(display, layout)| DisplayState {
                    display: display.to_string(),
                    layout: layout.to_string(),
                })
                .collect(),
        ),
        running: running.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn target(display: &str, frame: u32) -> FrameTarget {
    FrameTarget { display: display.to_string(), frame }
}

#[test]
fn test_command_states() {
    let commands: Vec<Command> = ["browser", "clock", "player"]
        .iter()
        .map(|name| Command {
            name: name.to_string(),
            description: None,
            windows: 1,
            args: Vec::new(),
        })
        .collect();
    let status = status(&[], &["player", "ghost", "browser"]);

    let states: Vec<(String, bool)> = command_states(&commands, &status)
        .into_iter()
        .map(|s| (s.name, s.running))
        .collect();

    assert_eq!(
        states,
        vec![
            ("browser".to_string(), true),
            ("clock".to_string(), false),
            ("player".to_string(), true),
        ]
    );
}

#[test]
fn test_frame_targets_of_active_layouts() {
    let status = status(&[(":0", "split"), (":1", "quad")], &[]);

    let targets = frame_targets(&catalog(), &status);

    assert_eq!(
        targets,
        vec![
            target(":0", 1),
            target(":0", 2),
            target(":1", 1),
            target(":1", 2),
            target(":1", 3),
            target(":1", 4),
        ]
    );
    assert_eq!(targets[1].to_string(), ":0/2");
}

#[test]
fn test_frame_targets_skip_unknown_layouts() {
    let status = status(&[(":0", "gone"), (":9", "quad")], &[]);

    assert!(frame_targets(&catalog(), &status).is_empty());
    assert_eq!(active_layout_name(&catalog(), &status, ":0"), None);
}

#[test]
fn test_preferred_target_keeps_previous() {
    let targets = vec![target(":0", 1), target(":0", 2)];

    assert_eq!(preferred_target(&targets, Some(&target(":0", 2))), Some(target(":0", 2)));
    assert_eq!(preferred_target(&targets, Some(&target(":1", 2))), Some(target(":0", 1)));
    assert_eq!(preferred_target(&targets, None), Some(target(":0", 1)));
    assert_eq!(preferred_target(&[], None), None);
}

#[test]
fn test_frame_target_parse() {
    assert_eq!(":0/12".parse::<FrameTarget>(), Ok(target(":0", 12)));
    assert_eq!("/3".parse::<FrameTarget>(), Ok(target("", 3)));
    assert!(":0".parse::<FrameTarget>().is_err());
    assert!(":0/x".parse::<FrameTarget>().is_err());
}

#[test]
fn test_active_layout_name() {
    let status = status(&[(":1", "quad")], &[]);

    assert_eq!(active_layout_name(&catalog(), &status, ":1"), Some("quad"));
    assert_eq!(active_layout_name(&catalog(), &status, ":0"), None);
}

#[test]
fn test_poll_state_never_overlaps() {
    let mut state = PollState::default();

    assert!(state.begin());
    assert_eq!(state, PollState::Fetching);
    assert!(!state.begin(), "tick while fetching is skipped");

    state.finish();
    assert_eq!(state, PollState::Idle);
    assert!(state.begin());
}

#[test]
fn test_request_timeout_ends_before_next_poll() {
    // A hung status request is abandoned before the next tick would skip it
    assert!(REQUEST_TIMEOUT < POLL_INTERVAL);
}
