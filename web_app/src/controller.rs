//! Controller state shared by every panel, and the actions behind the buttons.

use crate::api::{browser_api, BrowserApi};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rpcd::{
    active_layout_name, command_states, drop_target, find_command, find_display, frame_targets,
    plan_start, preferred_target, ArgKind, Bootstrap, CanvasBox, Command, CommandArg,
    CommandState, DisplayLayouts, FrameTarget, Layout, ListSelection, Placement, Point, PollState,
    Screen, StartAction, Status,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Data transfer key carrying the dragged command name.
pub const DRAG_KEY: &str = "cmd_name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Commands,
    Layouts,
}

impl Tab {
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#') {
            "layouts" => Tab::Layouts,
            _ => Tab::Commands,
        }
    }

    pub fn hash(self) -> &'static str {
        match self {
            Tab::Commands => "#commands",
            Tab::Layouts => "#layouts",
        }
    }
}

/// Initial input value of an argument: the first option of an enum, empty
/// text otherwise.
pub fn default_value(arg: &CommandArg) -> String {
    match arg.kind {
        ArgKind::Enum => arg.options.first().cloned().unwrap_or_default(),
        ArgKind::String => String::new(),
    }
}

/// Controller context - the catalog, the polled status and every selection.
///
/// Lists are selected by name, so handlers created for an older list never
/// act on a different item after a re-fetch.
#[derive(Clone, Copy)]
pub struct Controller {
    api: StoredValue<Arc<BrowserApi>>,
    poll_state: StoredValue<PollState>,
    /// Layouts grouped per display, in server order.
    pub displays: RwSignal<Vec<DisplayLayouts>>,
    pub commands: RwSignal<Vec<Command>>,
    /// Last successfully polled status.
    pub status: RwSignal<Status>,
    /// Status line text.
    pub message: RwSignal<String>,
    /// Set while the API is unreachable.
    pub api_error: RwSignal<bool>,
    pub tab: RwSignal<Tab>,
    /// Display whose layouts are listed.
    pub display: RwSignal<Option<String>>,
    pub layout_selection: RwSignal<ListSelection>,
    pub command_selection: RwSignal<ListSelection>,
    /// Input values of the selected command's arguments, by argument name.
    pub arg_values: RwSignal<HashMap<String, String>>,
    pub frame_target: RwSignal<Option<FrameTarget>>,
    pub fullscreen: RwSignal<bool>,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            api: StoredValue::new(Arc::new(browser_api())),
            poll_state: StoredValue::new(PollState::Idle),
            displays: RwSignal::new(Vec::new()),
            commands: RwSignal::new(Vec::new()),
            status: RwSignal::new(Status::default()),
            message: RwSignal::new(String::new()),
            api_error: RwSignal::new(false),
            tab: RwSignal::new(Tab::Commands),
            display: RwSignal::new(None),
            layout_selection: RwSignal::new(ListSelection::default()),
            command_selection: RwSignal::new(ListSelection::default()),
            arg_values: RwSignal::new(HashMap::new()),
            frame_target: RwSignal::new(None),
            fullscreen: RwSignal::new(false),
        }
    }

    pub fn set_message(self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);
        self.message.set(message);
    }

    fn sync_reachability(self, api: &BrowserApi) {
        self.api_error.set(!api.reachable());
    }

    // ========== Derived views (tracked) ==========

    fn with_display<R>(self, f: impl FnOnce(Option<&DisplayLayouts>) -> R) -> R {
        self.display.with(|selected| {
            self.displays
                .with(|displays| f(selected.as_deref().and_then(|name| find_display(displays, name))))
        })
    }

    fn with_display_untracked<R>(self, f: impl FnOnce(Option<&DisplayLayouts>) -> R) -> R {
        self.display.with_untracked(|selected| {
            self.displays
                .with_untracked(|displays| f(selected.as_deref().and_then(|name| find_display(displays, name))))
        })
    }

    pub fn display_names(self) -> Vec<String> {
        self.displays
            .with(|displays| displays.iter().map(|d| d.display.clone()).collect())
    }

    /// Layouts of the selected display.
    pub fn layouts(self) -> Vec<Layout> {
        self.with_display(|display| display.map(|d| d.layouts.clone()).unwrap_or_default())
    }

    /// Layout shown in the preview.
    pub fn previewed_layout(self) -> Option<Layout> {
        self.with_display(|display| {
            let display = display?;
            self.layout_selection
                .with(|selection| selection.current(&display.layouts).cloned())
        })
    }

    pub fn selected_command(self) -> Option<Command> {
        self.commands.with(|commands| {
            self.command_selection
                .with(|selection| selection.current(commands).cloned())
        })
    }

    pub fn command_states(self) -> Vec<CommandState> {
        self.commands
            .with(|commands| self.status.with(|status| command_states(commands, status)))
    }

    pub fn frame_targets(self) -> Vec<FrameTarget> {
        self.displays
            .with(|displays| self.status.with(|status| frame_targets(displays, status)))
    }

    // ========== Bootstrap & polling ==========

    /// Fetch layouts and commands together, render both lists, query the
    /// status once and then hand over to the poll timer.
    ///
    /// Either fetch may fail; the lists are rendered with whatever arrived
    /// and polling starts regardless.
    pub fn bootstrap(self, start_polling: impl Fn() + 'static) {
        let api = self.api.get_value();
        spawn_local(async move {
            let Bootstrap { layouts, commands } = api.bootstrap().await;

            match layouts {
                Ok(displays) => {
                    log::debug!("Loaded layouts for {} display(s)", displays.len());
                    self.displays.set(displays);
                    self.populate_displays();
                }
                Err(e) => self.set_message(e.to_string()),
            }
            match commands {
                Ok(commands) => {
                    log::debug!("Loaded {} command(s)", commands.len());
                    self.commands.set(commands);
                }
                Err(e) => self.set_message(e.to_string()),
            }
            self.populate_commands();
            self.sync_reachability(&api);

            self.fetch_status(&api, true).await;
            start_polling();
        });
    }

    /// One timer tick. Skipped while the previous poll is outstanding.
    pub fn poll(self) {
        let mut may_start = false;
        self.poll_state.update_value(|state| may_start = state.begin());
        if !may_start {
            log::debug!("Status poll still running, skipping tick");
            return;
        }

        let api = self.api.get_value();
        spawn_local(async move {
            self.fetch_status(&api, false).await;
            self.poll_state.update_value(PollState::finish);
        });
    }

    async fn fetch_status(self, api: &BrowserApi, first: bool) {
        match api.status().await {
            Ok(status) => {
                self.status.set(status);
                self.refresh_frame_target();
                if first && self.tab.get_untracked() == Tab::Layouts {
                    self.show_active_layout();
                }
            }
            Err(e) => self.set_message(format!("Failed to query status: {}", e)),
        }
        self.sync_reachability(api);
    }

    /// Re-query the status after an action.
    async fn after_action(self, api: &BrowserApi) {
        self.sync_reachability(api);
        self.fetch_status(api, false).await;
    }

    // ========== Selection ==========

    pub fn set_tab(self, tab: Tab) {
        self.tab.set(tab);
        if let Some(window) = web_sys::window() {
            _ = window.location().set_hash(tab.hash());
        }
    }

    fn populate_displays(self) {
        let first = self
            .displays
            .with_untracked(|displays| displays.first().map(|d| d.display.clone()));
        self.display.set(first);
        self.populate_layouts();
    }

    fn populate_layouts(self) {
        self.with_display_untracked(|display| {
            let layouts = display.map(|d| d.layouts.as_slice()).unwrap_or_default();
            self.layout_selection.update(|selection| {
                selection.populate(layouts);
            });
        });
    }

    pub fn select_display(self, name: String) {
        if self.display.get_untracked().as_deref() == Some(name.as_str()) {
            return;
        }
        self.display.set(Some(name));
        self.populate_layouts();
    }

    pub fn select_layout(self, name: &str) {
        self.with_display_untracked(|display| {
            let Some(display) = display else {
                return;
            };
            self.layout_selection
                .maybe_update(|selection| selection.select(&display.layouts, name).is_some());
        });
    }

    fn populate_commands(self) {
        let mut first = None;
        self.commands.with_untracked(|commands| {
            self.command_selection
                .update(|selection| first = selection.populate(commands).cloned());
        });
        self.command_changed(first.as_ref());
    }

    pub fn select_command(self, name: &str) {
        let mut changed = None;
        self.commands.with_untracked(|commands| {
            self.command_selection.maybe_update(|selection| {
                changed = selection.select(commands, name).cloned();
                changed.is_some()
            });
        });
        if let Some(command) = changed {
            self.command_changed(Some(&command));
        }
    }

    fn command_changed(self, command: Option<&Command>) {
        let values = command
            .map(|command| {
                command
                    .args
                    .iter()
                    .map(|arg| (arg.name.clone(), default_value(arg)))
                    .collect()
            })
            .unwrap_or_default();
        self.arg_values.set(values);
        self.refresh_frame_target();
    }

    pub fn set_argument(self, name: String, value: String) {
        self.arg_values.update(|values| {
            values.insert(name, value);
        });
    }

    fn refresh_frame_target(self) {
        let targets = self.displays.with_untracked(|displays| {
            self.status
                .with_untracked(|status| frame_targets(displays, status))
        });
        self.frame_target
            .update(|target| *target = preferred_target(&targets, target.as_ref()));
    }

    /// Switch to the layouts tab and preview the layout that is active on
    /// the selected display.
    pub fn show_active_layout(self) {
        self.set_tab(Tab::Layouts);
        let Some(display) = self.display.get_untracked() else {
            return;
        };
        let active = self.displays.with_untracked(|displays| {
            self.status.with_untracked(|status| {
                active_layout_name(displays, status, &display).map(str::to_string)
            })
        });
        if let Some(name) = active {
            self.select_layout(&name);
        }
    }

    // ========== Actions ==========

    pub fn apply_layout(self, name: String) {
        let display = self.display.get_untracked();
        let api = self.api.get_value();
        spawn_local(async move {
            match api.apply_layout(display.as_deref(), &name).await {
                Ok(()) => self.set_message("Layout loaded successfully"),
                Err(e) => self.set_message(format!("Failed to apply layout: {}", e)),
            }
            self.after_action(&api).await;
        });
    }

    pub fn start_command(self, name: String) {
        let Some(command) = self.commands.with_untracked(|commands| find_command(commands, &name).cloned()) else {
            return;
        };
        self.set_message(format!("Start command: {}", name));

        let placement = Placement {
            fullscreen: self.fullscreen.get_untracked(),
            target: self.frame_target.get_untracked(),
        };
        let selected = self.command_selection.with_untracked(|s| s.is_selected(&name));
        let action = self.arg_values.with_untracked(|values| {
            plan_start(&command, selected, |arg| values.get(&arg.name).cloned(), &placement)
        });
        let request = match action {
            Ok(StartAction::Submit(request)) => request,
            Ok(StartAction::SelectFirst) => {
                self.set_message("First enter arguments.");
                self.select_command(&name);
                return;
            }
            Err(e) => {
                self.set_message(e.to_string());
                return;
            }
        };

        let api = self.api.get_value();
        spawn_local(async move {
            match api.start_command(&name, &request).await {
                Ok(()) => self.set_message("Command started"),
                Err(e) => self.set_message(e.to_string()),
            }
            self.after_action(&api).await;
        });
    }

    pub fn stop_command(self, name: String) {
        let api = self.api.get_value();
        spawn_local(async move {
            match api.stop_command(&name).await {
                Ok(()) => self.set_message("Command stopped"),
                Err(e) => self.set_message(format!("Failed to stop command: {}", e)),
            }
            self.after_action(&api).await;
        });
    }

    pub fn reset(self) {
        let api = self.api.get_value();
        spawn_local(async move {
            match api.reset().await {
                Ok(()) => self.set_message("Reset successful"),
                Err(e) => self.set_message(format!("Reset encountered an error: {}", e)),
            }
            self.after_action(&api).await;
        });
    }

    pub fn move_command(self, command: String, frame: u32) {
        let api = self.api.get_value();
        spawn_local(async move {
            match api.move_command(&command, frame).await {
                Ok(()) => self.set_message(format!("Moved command {} to frame {}", command, frame)),
                Err(e) => self.set_message(format!("Failed to move command: {}", e)),
            }
            self.after_action(&api).await;
        });
    }

    /// A running command was dropped on the preview canvas of `screen`.
    /// Drops outside every frame of the active layout are ignored.
    pub fn drop_command(self, command: String, screen: Screen, canvas: CanvasBox, client: Point) {
        let Some(display) = self.display.get_untracked() else {
            return;
        };
        let frame = self.displays.with_untracked(|displays| {
            self.status.with_untracked(|status| {
                drop_target(displays, status, &display, &screen, &canvas, client)
            })
        });
        match frame {
            Some(frame) => self.move_command(command, frame),
            None => log::debug!("Drop on screen {} of display {} hit no frame", screen.id, display),
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
