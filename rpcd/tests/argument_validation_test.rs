/// Argument collection and start-body assembly.
use rpcd::{
    collect_arguments, parse_pairs, plan_start, prepare_start, start_request, ArgKind,
    ArgumentError, Command, CommandArg, FrameTarget, Placement, StartAction,
};
use std::collections::{BTreeMap, HashMap};

fn enum_arg(name: &str, options: &[&str]) -> CommandArg {
    CommandArg {
        name: name.to_string(),
        kind: ArgKind::Enum,
        hint: None,
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

fn string_arg(name: &str) -> CommandArg {
    CommandArg {
        name: name.to_string(),
        kind: ArgKind::String,
        hint: Some("http://...".to_string()),
        options: Vec::new(),
    }
}

fn command(name: &str, windows: u32, args: Vec<CommandArg>) -> Command {
    Command {
        name: name.to_string(),
        description: None,
        windows,
        args,
    }
}

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_enum_value_out_of_range_aborts() {
    let c0 = command("C0", 0, vec![enum_arg("a", &["x", "y"])]);
    let inputs = values(&[("a", "z")]);

    let result = collect_arguments(&c0, |arg| inputs.get(&arg.name).cloned());

    assert_eq!(
        result,
        Err(ArgumentError::OutOfRange { argument: "a".to_string() })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Value not in enum range for argument a."
    );
}

#[test]
fn test_first_invalid_argument_is_reported() {
    let cmd = command(
        "player",
        1,
        vec![
            string_arg("url"),
            enum_arg("mode", &["loop", "once"]),
            enum_arg("audio", &["on", "off"]),
        ],
    );
    let inputs = values(&[("url", "x"), ("mode", "forever"), ("audio", "loud")]);

    let mut asked = Vec::new();
    let result = collect_arguments(&cmd, |arg| {
        asked.push(arg.name.clone());
        inputs.get(&arg.name).cloned()
    });

    assert_eq!(result, Err(ArgumentError::OutOfRange { argument: "mode".to_string() }));
    // Collection stops at the first failure
    assert_eq!(asked, vec!["url", "mode"]);
}

#[test]
fn test_valid_arguments_are_collected() {
    let cmd = command(
        "player",
        1,
        vec![string_arg("url"), enum_arg("mode", &["loop", "once"])],
    );
    let inputs = values(&[("url", "rtsp://cam"), ("mode", "once")]);

    let arguments = collect_arguments(&cmd, |arg| inputs.get(&arg.name).cloned()).unwrap();

    assert_eq!(arguments.get("url").map(String::as_str), Some("rtsp://cam"));
    assert_eq!(arguments.get("mode").map(String::as_str), Some("once"));
}

#[test]
fn test_missing_values() {
    // Missing free text is sent empty; a missing enum value is out of range
    let text_only = command("notes", 0, vec![string_arg("file")]);
    let arguments = collect_arguments(&text_only, |_| None).unwrap();
    assert_eq!(arguments.get("file").map(String::as_str), Some(""));

    let with_enum = command("mode", 0, vec![enum_arg("level", &["1", "2"])]);
    assert!(collect_arguments(&with_enum, |_| None).is_err());
}

#[test]
fn test_placement_only_for_windowed_commands() {
    let placement = Placement {
        fullscreen: true,
        target: Some(FrameTarget { display: ":0".to_string(), frame: 3 }),
    };

    let background = start_request(&command("sync", 0, Vec::new()), BTreeMap::new(), &placement);
    let json = serde_json::to_value(&background).unwrap();
    assert_eq!(json, serde_json::json!({ "arguments": {} }));

    let windowed = start_request(&command("browser", 1, Vec::new()), BTreeMap::new(), &placement);
    let json = serde_json::to_value(&windowed).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "arguments": {}, "fullscreen": 1, "frame": 3, "display": ":0" })
    );
}

#[test]
fn test_windowed_without_target() {
    let cmd = command("browser", 2, vec![string_arg("url")]);
    let placement = Placement::default();

    let request = prepare_start(&cmd, |_| Some("http://example.org".to_string()), &placement).unwrap();
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "arguments": { "url": "http://example.org" }, "fullscreen": 0 })
    );
}

#[test]
fn test_unnamed_display_is_omitted() {
    let placement = Placement {
        fullscreen: false,
        target: Some(FrameTarget { display: String::new(), frame: 1 }),
    };

    let request = start_request(&command("clock", 1, Vec::new()), BTreeMap::new(), &placement);

    assert_eq!(request.frame, Some(1));
    assert_eq!(request.display, None);
}

#[test]
fn test_parse_pairs() {
    let parsed = parse_pairs(["url=http://a/?q=1", "mode=loop", "empty="]).unwrap();

    assert_eq!(parsed.get("url").map(String::as_str), Some("http://a/?q=1"));
    assert_eq!(parsed.get("mode").map(String::as_str), Some("loop"));
    assert_eq!(parsed.get("empty").map(String::as_str), Some(""));
}

#[test]
fn test_parse_pairs_rejects_bare_words() {
    assert_eq!(
        parse_pairs(["mode=loop", "fullscreen"]),
        Err(ArgumentError::MalformedPair("fullscreen".to_string()))
    );
    assert_eq!(
        parse_pairs(["=value"]),
        Err(ArgumentError::MalformedPair("=value".to_string()))
    );
}

#[test]
fn test_unselected_command_with_arguments_is_selected_first() {
    let player = command("player", 1, vec![string_arg("url")]);
    let inputs = values(&[("url", "http://example.com")]);
    let mut asked = 0;

    let action = plan_start(
        &player,
        false,
        |arg| {
            asked += 1;
            inputs.get(&arg.name).cloned()
        },
        &Placement::default(),
    );

    assert_eq!(action, Ok(StartAction::SelectFirst));
    assert_eq!(asked, 0, "inputs of another command are not read");
}

#[test]
fn test_command_without_arguments_starts_from_anywhere() {
    let clock = command("clock", 1, Vec::new());
    let placement = Placement {
        fullscreen: true,
        target: Some(FrameTarget { display: ":0".to_string(), frame: 2 }),
    };

    let Ok(StartAction::Submit(request)) = plan_start(&clock, false, |_| None, &placement) else {
        panic!("command without arguments must be submitted");
    };
    assert!(request.arguments.is_empty());
    assert_eq!(request.fullscreen, Some(1));
    assert_eq!(request.frame, Some(2));
    assert_eq!(request.display.as_deref(), Some(":0"));
}

#[test]
fn test_selected_command_submits_its_arguments() {
    let player = command("player", 0, vec![enum_arg("mode", &["loop", "once"]), string_arg("url")]);
    let inputs = values(&[("mode", "once"), ("url", "http://example.com")]);

    let action = plan_start(&player, true, |arg| inputs.get(&arg.name).cloned(), &Placement::default());

    let expected = prepare_start(&player, |arg| inputs.get(&arg.name).cloned(), &Placement::default());
    assert_eq!(action, expected.map(StartAction::Submit));
}

#[test]
fn test_invalid_enum_submits_nothing() {
    let player = command("player", 1, vec![enum_arg("mode", &["loop", "once"])]);
    let inputs = values(&[("mode", "forever")]);

    let action = plan_start(&player, true, |arg| inputs.get(&arg.name).cloned(), &Placement::default());

    assert_eq!(
        action,
        Err(ArgumentError::OutOfRange { argument: "mode".to_string() })
    );
}
