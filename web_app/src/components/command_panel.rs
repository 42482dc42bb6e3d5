//! Command list with start/stop buttons and the argument panel.

use leptos::prelude::*;
use rpcd::{ArgKind, Command, CommandArg};
use crate::controller::Controller;

/// Radio list of commands. Start (▸) and stop (■) toggle with the polled
/// running state.
#[component]
pub fn CommandList() -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");

    view! {
        <ul class="flex flex-col">
            <For
                each=move || ctrl.commands.get()
                key=|command| command.name.clone()
                children=move |command| view! { <CommandItem command=command/> }
            />
        </ul>
    }
}

#[component]
fn CommandItem(command: Command) -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");
    let name = StoredValue::new(command.name);

    let running = move || name.with_value(|name| ctrl.status.with(|status| status.is_running(name)));
    let checked = move || name.with_value(|name| ctrl.command_selection.with(|s| s.is_selected(name)));
    let label_class = move || {
        if running() {
            "running flex-1 text-[11px] text-[#22c55e] cursor-pointer"
        } else {
            "flex-1 text-[11px] text-[#cccccc] cursor-pointer"
        }
    };
    let id = format!("command_{}", name.get_value());

    view! {
        <li class="flex items-center gap-2 px-3 py-1 hover:bg-[#ffffff08]">
            <input
                type="radio"
                name="command"
                id=id.clone()
                prop:checked=checked
                on:change=move |_| name.with_value(|name| ctrl.select_command(name))
            />
            <label for=id class=label_class>{name.get_value()}</label>
            <button
                class="text-[#22c55e] hover:text-white"
                title="Start"
                class:hidden=running
                on:click=move |_| ctrl.start_command(name.get_value())
            >
                "▸"
            </button>
            <button
                class="text-[#ff4444] hover:text-white"
                title="Stop"
                class:hidden=move || !running()
                on:click=move |_| ctrl.stop_command(name.get_value())
            >
                "■"
            </button>
        </li>
    }
}

/// Description, argument inputs and placement of the selected command.
#[component]
pub fn CommandDetail() -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");

    move || {
        ctrl.selected_command().map(|command| {
            let placement = command.has_windows().then(|| view! { <PlacementPicker/> });
            let args = command
                .args
                .into_iter()
                .map(|arg| view! { <ArgumentInput arg=arg/> })
                .collect_view();

            view! {
                <div class="flex flex-col gap-3">
                    <h2 class="text-sm font-semibold text-[#00d9ff]">{command.name}</h2>
                    <p class="text-[11px] text-[#888888]">{command.description.unwrap_or_default()}</p>
                    <ul class="flex flex-col gap-2">{args}</ul>
                    {placement}
                </div>
            }
        })
    }
}

#[component]
fn ArgumentInput(arg: CommandArg) -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");
    let name = StoredValue::new(arg.name.clone());
    let value = move || name.with_value(|name| ctrl.arg_values.with(|values| values.get(name).cloned().unwrap_or_default()));

    let input = match arg.kind {
        ArgKind::Enum => view! {
            <select class="bg-[#111111] border border-[#ffffff20] rounded px-1 text-[11px]" on:change=move |ev| ctrl.set_argument(name.get_value(), event_target_value(&ev))>
                {arg.options.into_iter().map(|option| {
                    let selected = {
                        let option = option.clone();
                        move || value() == option
                    };
                    let option_value = option.clone();
                    view! { <option value=option_value prop:selected=selected>{option}</option> }
                }).collect_view()}
            </select>
        }
        .into_any(),
        ArgKind::String => view! {
            <input
                type="text"
                class="bg-[#111111] border border-[#ffffff20] rounded px-1 text-[11px]"
                placeholder=arg.hint.unwrap_or_default()
                prop:value=value
                on:input=move |ev| ctrl.set_argument(name.get_value(), event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <li class="flex items-center gap-2">
            <label class="w-24 text-[11px] text-[#cccccc]">{arg.name}</label>
            {input}
        </li>
    }
}

/// Frame picker over every frame of the active layouts, plus fullscreen.
#[component]
fn PlacementPicker() -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");
    let frame_target = ctrl.frame_target;
    let fullscreen = ctrl.fullscreen;

    view! {
        <div class="flex items-center gap-3 text-[11px]">
            <label class="text-[#cccccc]">"Frame"</label>
            <select
                class="bg-[#111111] border border-[#ffffff20] rounded px-1"
                on:change=move |ev| frame_target.set(event_target_value(&ev).parse().ok())
            >
                <For
                    each=move || ctrl.frame_targets()
                    key=|target| target.clone()
                    children=move |target| {
                        let label = target.to_string();
                        let selected = move || frame_target.with(|current| current.as_ref() == Some(&target));
                        let option_value = label.clone();
                        view! { <option value=option_value prop:selected=selected>{label}</option> }
                    }
                />
            </select>
            <label class="flex items-center gap-1 text-[#cccccc]">
                <input
                    type="checkbox"
                    prop:checked=move || fullscreen.get()
                    on:change=move |ev| fullscreen.set(event_target_checked(&ev))
                />
                "Fullscreen"
            </label>
        </div>
    }
}
