use leptos::prelude::*;
use leptos::mount::mount_to_body;
use leptos_router::components::{Router, Routes, Route};
use leptos_router::path;
use leptos_use::utils::Pausable;
use leptos_use::{use_interval_fn_with_options, UseIntervalFnOptions};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod controller;

use components::ControllerShell;
pub use controller::{Controller, Tab};

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    let controller = Controller::new();
    provide_context(controller);

    // The timer is armed once the initial fetch has completed and is never
    // paused afterwards
    let Pausable { resume, .. } = use_interval_fn_with_options(
        move || controller.poll(),
        rpcd::POLL_INTERVAL.as_millis() as u64,
        UseIntervalFnOptions::default().immediate(false),
    );
    controller.bootstrap(resume);

    view! {
        <Router>
            <Routes fallback=|| view! { <ControllerShell/> }>
                <Route path=path!("/") view=ControllerShell />
            </Routes>
        </Router>
    }
}
