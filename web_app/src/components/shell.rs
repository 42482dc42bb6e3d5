//! Page chrome: tab bar, running commands, the two panels and the status line.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use crate::controller::{Controller, Tab};
use super::{CommandDetail, CommandList, DisplaySelector, LayoutList, LayoutPreview, RunningCommands, StatusLine};

#[component]
pub fn ControllerShell() -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");
    let tab = ctrl.tab;

    // The location hash selects the tab (#commands / #layouts)
    let location = use_location();
    Effect::new(move |_| {
        let hash = location.hash.get();
        tab.set(Tab::from_hash(&hash));
    });

    let tab_class = move |which: Tab| {
        move || {
            if tab.get() == which {
                "px-3 py-1 text-[11px] uppercase tracking-wide text-[#00d9ff] border-b-2 border-[#00d9ff]"
            } else {
                "px-3 py-1 text-[11px] uppercase tracking-wide text-[#888888] hover:text-white"
            }
        }
    };

    view! {
        <div class="h-screen w-screen flex flex-col bg-[#0a0a0a] text-white overflow-hidden">
            // Header
            <div class="flex items-center gap-2 px-3 py-2 border-b border-[#ffffff10]">
                <button class=tab_class(Tab::Commands) on:click=move |_| ctrl.set_tab(Tab::Commands)>
                    "Commands"
                </button>
                <button class=tab_class(Tab::Layouts) on:click=move |_| ctrl.set_tab(Tab::Layouts)>
                    "Layouts"
                </button>
                <div class="flex-1">
                    <RunningCommands/>
                </div>
                <button
                    class="px-2 py-1 text-[11px] rounded border border-[#ffffff20] hover:bg-[#ffffff10]"
                    title="Stop every command and restore the default layouts"
                    on:click=move |_| ctrl.reset()
                >
                    "Reset"
                </button>
            </div>

            // Panels stay mounted so drags that switch tabs keep their source
            <div class="flex-1 flex overflow-hidden" class:hidden=move || tab.get() != Tab::Commands>
                <div class="w-64 border-r border-[#ffffff10] overflow-y-auto">
                    <CommandList/>
                </div>
                <div class="flex-1 p-3 overflow-y-auto">
                    <CommandDetail/>
                </div>
            </div>
            <div class="flex-1 flex overflow-hidden" class:hidden=move || tab.get() != Tab::Layouts>
                <div class="w-64 border-r border-[#ffffff10] overflow-y-auto">
                    <DisplaySelector/>
                    <LayoutList/>
                </div>
                <div class="flex-1 p-3 overflow-auto">
                    <LayoutPreview/>
                </div>
            </div>

            <StatusLine/>
        </div>
    }
}
