//! Display selector and the per-display layout list.

use leptos::prelude::*;
use crate::controller::Controller;

/// Picking a display repopulates the layout list.
#[component]
pub fn DisplaySelector() -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");
    let display = ctrl.display;

    view! {
        <div class="flex items-center gap-2 px-3 py-2 border-b border-[#ffffff10] text-[11px]">
            <label class="text-[#888888]">"Display"</label>
            <select
                class="flex-1 bg-[#111111] border border-[#ffffff20] rounded px-1"
                on:change=move |ev| ctrl.select_display(event_target_value(&ev))
            >
                <For
                    each=move || ctrl.display_names()
                    key=|name| name.clone()
                    children=move |name| {
                        let selected = {
                            let name = name.clone();
                            move || display.with(|current| current.as_deref() == Some(name.as_str()))
                        };
                        let option_value = name.clone();
                        view! { <option value=option_value prop:selected=selected>{name}</option> }
                    }
                />
            </select>
        </div>
    }
}

/// Radio list of the selected display's layouts, each with an apply button.
#[component]
pub fn LayoutList() -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");

    view! {
        <ul class="flex flex-col">
            <For
                each=move || ctrl.layouts()
                key=|layout| layout.name.clone()
                children=move |layout| {
                    let name = StoredValue::new(layout.name);
                    let checked = move || name.with_value(|name| ctrl.layout_selection.with(|s| s.is_selected(name)));
                    let id = format!("layout_{}", name.get_value());
                    view! {
                        <li class="flex items-center gap-2 px-3 py-1 hover:bg-[#ffffff08]">
                            <input
                                type="radio"
                                name="layout"
                                id=id.clone()
                                prop:checked=checked
                                on:change=move |_| name.with_value(|name| ctrl.select_layout(name))
                            />
                            <label for=id class="flex-1 text-[11px] text-[#cccccc] cursor-pointer">
                                {name.get_value()}
                            </label>
                            <button
                                class="px-1 text-[10px] rounded border border-[#ffffff20] hover:bg-[#ffffff10]"
                                title="Apply layout"
                                on:click=move |_| ctrl.apply_layout(name.get_value())
                            >
                                "apply"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
