//! Canvas-to-screen scaling and frame hit-testing.

use crate::{find_display, DisplayLayouts, Frame, Layout, Screen, Status};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where a preview canvas sits in client coordinates and how large it is
/// drawn, which is generally not its pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBox {
    pub left: f64,
    pub top: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl CanvasBox {
    /// Box of the drawing area of an element with a border.
    ///
    /// `rect_left`/`rect_top` are the border-box edges from
    /// `getBoundingClientRect()`. `border_left`/`border_top` are the
    /// element's `clientLeft`/`clientTop`, and the client size excludes
    /// the border.
    pub fn inside_border(
        rect_left: f64,
        rect_top: f64,
        border_left: f64,
        border_top: f64,
        client_width: f64,
        client_height: f64,
    ) -> Self {
        Self {
            left: rect_left + border_left,
            top: rect_top + border_top,
            client_width,
            client_height,
        }
    }

    /// Map a client-space point over this canvas into `screen` coordinates.
    ///
    /// Returns `None` for a canvas that is not laid out (zero size).
    pub fn to_screen(&self, screen: &Screen, client: Point) -> Option<Point> {
        if self.client_width <= 0.0 || self.client_height <= 0.0 {
            return None;
        }
        let x_scale = f64::from(screen.width) / self.client_width;
        let y_scale = f64::from(screen.height) / self.client_height;
        Some(Point {
            x: (client.x - self.left) * x_scale,
            y: (client.y - self.top) * y_scale,
        })
    }
}

impl Frame {
    /// Half-open containment: `[x, x+w) × [y, y+h)`.
    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (f64::from(self.x), f64::from(self.y));
        point.x >= x
            && point.x < x + f64::from(self.w)
            && point.y >= y
            && point.y < y + f64::from(self.h)
    }
}

impl Layout {
    /// First frame on `screen` that contains `point`, in list order.
    pub fn frame_at(&self, screen: u32, point: Point) -> Option<&Frame> {
        self.frames
            .iter()
            .find(|frame| frame.screen == screen && frame.contains(point))
    }
}

/// Frame a running command dropped on the preview of `screen` moves to.
///
/// The hit-test runs against the layout active on `display`, which is what
/// the server places windows by, not the one being previewed. `None` when
/// the drop lands outside every frame of that layout.
pub fn drop_target(
    displays: &[DisplayLayouts],
    status: &Status,
    display: &str,
    screen: &Screen,
    canvas: &CanvasBox,
    client: Point,
) -> Option<u32> {
    let name = status.active_layout(display)?;
    let layout = find_display(displays, display)?.layout(name)?;
    let point = canvas.to_screen(screen, client)?;
    layout.frame_at(screen.id, point).map(|frame| frame.id)
}
