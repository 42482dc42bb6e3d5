//! Status line for action results and API errors.

use leptos::prelude::*;
use crate::controller::Controller;

/// Shows the last message. Marked `api-error` while the API is unreachable.
#[component]
pub fn StatusLine() -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");
    let message = ctrl.message;
    let api_error = ctrl.api_error;

    let class = move || {
        if api_error.get() {
            "api-error px-3 py-1 text-[11px] text-[#ff4444] border-t border-[#ff444440] truncate"
        } else {
            "px-3 py-1 text-[11px] text-[#cccccc] border-t border-[#ffffff10] truncate"
        }
    };

    view! {
        <div id="status" class=class>
            {move || message.get()}
        </div>
    }
}
