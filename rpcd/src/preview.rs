//! Paint plan for the layout preview.

use crate::{Layout, Point, Screen};

pub const FRAME_FILL: &str = "#FFFFFF";
pub const FRAME_FILL_ALPHA: f64 = 0.8;
pub const FRAME_STROKE: &str = "#000000";
pub const FRAME_LINE_WIDTH: f64 = 10.0;
pub const LABEL_FONT: &str = "10em Georgia";

/// One frame rectangle and its label, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePaint {
    pub frame: u32,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub label: String,
    pub label_at: Point,
}

/// A canvas sized to its screen with the frames that fall on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenCanvas {
    pub screen: Screen,
    pub frames: Vec<FramePaint>,
}

impl ScreenCanvas {
    pub fn width(&self) -> u32 {
        self.screen.width
    }

    pub fn height(&self) -> u32 {
        self.screen.height
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewPlan {
    pub canvases: Vec<ScreenCanvas>,
    /// Frames whose screen the layout does not define. They are not drawn.
    pub orphans: Vec<u32>,
}

impl PreviewPlan {
    pub fn for_layout(layout: &Layout) -> Self {
        let mut plan = PreviewPlan {
            canvases: layout
                .screens
                .iter()
                .map(|screen| ScreenCanvas {
                    screen: *screen,
                    frames: Vec::new(),
                })
                .collect(),
            orphans: Vec::new(),
        };

        for frame in &layout.frames {
            let Some(canvas) = plan.canvases.iter_mut().find(|c| c.screen.id == frame.screen) else {
                log::warn!("screen {} not defined (found in frame {}).", frame.screen, frame.id);
                plan.orphans.push(frame.id);
                continue;
            };
            let (x, y, w, h) = (
                f64::from(frame.x),
                f64::from(frame.y),
                f64::from(frame.w),
                f64::from(frame.h),
            );
            canvas.frames.push(FramePaint {
                frame: frame.id,
                x,
                y,
                w,
                h,
                label: frame.id.to_string(),
                label_at: Point::new(x + w / 2.0, y + h / 2.0),
            });
        }

        plan
    }
}
