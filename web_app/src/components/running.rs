//! Strip of running commands. Each chip can be dragged onto a layout
//! frame or stopped with [x].

use leptos::prelude::*;
use web_sys::DragEvent;
use crate::controller::{Controller, DRAG_KEY};

#[component]
pub fn RunningCommands() -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");
    let running = move || {
        ctrl.command_states()
            .into_iter()
            .filter(|state| state.running)
            .map(|state| state.name)
            .collect::<Vec<_>>()
    };

    view! {
        <ul id="running_commands" class="flex flex-wrap items-center gap-2">
            <For
                each=running
                key=|name| name.clone()
                children=move |name| {
                    let name = StoredValue::new(name);
                    let on_dragstart = move |ev: DragEvent| {
                        // Preview the layout the server places windows by
                        ctrl.show_active_layout();
                        if let Some(transfer) = ev.data_transfer() {
                            transfer.set_effect_allowed("copy");
                            if let Err(e) = name.with_value(|name| transfer.set_data(DRAG_KEY, name)) {
                                log::warn!("Cannot start drag: {:?}", e);
                            }
                        }
                    };
                    view! {
                        <li
                            class="flex items-center gap-1 px-2 py-0.5 rounded bg-[#22c55e20] text-[11px] text-[#22c55e] cursor-move"
                            draggable="true"
                            on:dragstart=on_dragstart
                        >
                            <span>{name.get_value()}</span>
                            <span
                                class="text-[#888888] hover:text-white cursor-pointer"
                                title="Stop"
                                on:click=move |_| ctrl.stop_command(name.get_value())
                            >
                                " [x]"
                            </span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
