//! Canvas preview of the selected layout. Running commands dropped on a
//! frame are moved there.

use leptos::html::Canvas;
use leptos::prelude::*;
use rpcd::{
    CanvasBox, PreviewPlan, Point, ScreenCanvas, FRAME_FILL, FRAME_FILL_ALPHA, FRAME_LINE_WIDTH,
    FRAME_STROKE, LABEL_FONT,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, DragEvent, HtmlCanvasElement};
use crate::controller::{Controller, DRAG_KEY};

#[component]
pub fn LayoutPreview() -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");
    let plan = Memo::new(move |_| ctrl.previewed_layout().map(|layout| PreviewPlan::for_layout(&layout)));

    view! {
        <div class="flex flex-wrap gap-3">
            {move || plan.get().map(|plan| {
                plan.canvases
                    .into_iter()
                    .map(|canvas| view! { <ScreenPreview canvas=canvas/> })
                    .collect_view()
            })}
        </div>
    }
}

/// One canvas at the screen's pixel size, scaled down by CSS.
#[component]
fn ScreenPreview(canvas: ScreenCanvas) -> impl IntoView {
    let ctrl = use_context::<Controller>().expect("Controller not found");
    let canvas_ref = NodeRef::<Canvas>::new();
    let screen = canvas.screen;
    let (width, height) = (canvas.width(), canvas.height());

    Effect::new(move |_| {
        if let Some(element) = canvas_ref.get() {
            if let Err(e) = paint(&element, &canvas) {
                log::error!("Cannot draw screen {}: {:?}", screen.id, e);
            }
        }
    });

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let Some(command) = ev
            .data_transfer()
            .and_then(|transfer| transfer.get_data(DRAG_KEY).ok())
            .filter(|command| !command.is_empty())
        else {
            return;
        };
        let Some(element) = canvas_ref.get_untracked() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let bounds = CanvasBox::inside_border(
            rect.left(),
            rect.top(),
            f64::from(element.client_left()),
            f64::from(element.client_top()),
            f64::from(element.client_width()),
            f64::from(element.client_height()),
        );
        let client = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        ctrl.drop_command(command, screen, bounds, client);
    };

    view! {
        <canvas
            node_ref=canvas_ref
            width=width.to_string()
            height=height.to_string()
            title=format!("screen {}", screen.id)
            class="max-w-[480px] w-full border border-[#ffffff20] bg-[#111111]"
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=on_drop
        ></canvas>
    }
}

fn paint(element: &HtmlCanvasElement, canvas: &ScreenCanvas) -> Result<(), JsValue> {
    let context: CanvasRenderingContext2d = element
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    context.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
    context.set_line_width(FRAME_LINE_WIDTH);
    context.set_font(LABEL_FONT);
    context.set_text_align("center");
    context.set_text_baseline("middle");

    for frame in &canvas.frames {
        context.set_global_alpha(FRAME_FILL_ALPHA);
        context.set_fill_style_str(FRAME_FILL);
        context.fill_rect(frame.x, frame.y, frame.w, frame.h);

        context.set_global_alpha(1.0);
        context.set_stroke_style_str(FRAME_STROKE);
        context.stroke_rect(frame.x, frame.y, frame.w, frame.h);

        context.set_fill_style_str(FRAME_STROKE);
        context.fill_text(&frame.label, frame.label_at.x, frame.label_at.y)?;
    }
    Ok(())
}
