/// Frame hit-testing and canvas-to-screen scaling used when a command is
/// dropped onto the layout preview.
use rpcd::{
    drop_target, ActiveLayouts, CanvasBox, DisplayLayouts, DisplayState, Frame, Layout, Point,
    Screen, Status,
};

fn frame(id: u32, screen: u32, x: u32, y: u32, w: u32, h: u32) -> Frame {
    Frame { id, screen, x, y, w, h }
}

fn two_screen_layout() -> Layout {
    Layout {
        display: Some(":0".to_string()),
        name: "split".to_string(),
        screens: vec![
            Screen { id: 0, width: 1600, height: 1200 },
            Screen { id: 1, width: 1920, height: 1080 },
        ],
        frames: vec![
            frame(10, 0, 0, 0, 800, 1200),
            frame(11, 0, 800, 0, 800, 1200),
            frame(20, 1, 0, 0, 1920, 1080),
        ],
    }
}

#[test]
fn test_contains_is_half_open() {
    let f = frame(1, 0, 100, 200, 300, 400);

    assert!(f.contains(Point::new(100.0, 200.0)), "top-left corner is inside");
    assert!(f.contains(Point::new(399.9, 599.9)));
    assert!(!f.contains(Point::new(400.0, 300.0)), "right edge is outside");
    assert!(!f.contains(Point::new(200.0, 600.0)), "bottom edge is outside");
    assert!(!f.contains(Point::new(99.9, 300.0)));
    assert!(!f.contains(Point::new(200.0, 199.9)));
}

#[test]
fn test_frame_at_respects_screen() {
    let layout = two_screen_layout();

    // Same coordinates, different screens
    assert_eq!(layout.frame_at(0, Point::new(10.0, 10.0)).map(|f| f.id), Some(10));
    assert_eq!(layout.frame_at(1, Point::new(10.0, 10.0)).map(|f| f.id), Some(20));
    assert_eq!(layout.frame_at(0, Point::new(800.0, 10.0)).map(|f| f.id), Some(11));
}

#[test]
fn test_frame_at_misses() {
    let layout = two_screen_layout();

    assert!(layout.frame_at(0, Point::new(1600.0, 10.0)).is_none());
    assert!(layout.frame_at(1, Point::new(-1.0, 10.0)).is_none());
    assert!(layout.frame_at(7, Point::new(10.0, 10.0)).is_none(), "unknown screen");
}

#[test]
fn test_frame_at_first_match_wins_on_overlap() {
    let mut layout = two_screen_layout();
    layout.frames.insert(0, frame(99, 0, 0, 0, 1600, 1200));

    assert_eq!(layout.frame_at(0, Point::new(900.0, 10.0)).map(|f| f.id), Some(99));
}

#[test]
fn test_frame_at_matches_definition_on_grid() {
    // Exhaustive check of the hit-test definition on a coarse grid
    let layout = two_screen_layout();
    for screen in [0u32, 1] {
        for xi in 0..=20 {
            for yi in 0..=15 {
                let p = Point::new(f64::from(xi) * 100.0, f64::from(yi) * 100.0);
                let expected = layout.frames.iter().find(|f| {
                    f.screen == screen
                        && f64::from(f.x) <= p.x
                        && p.x < f64::from(f.x + f.w)
                        && f64::from(f.y) <= p.y
                        && p.y < f64::from(f.y + f.h)
                });
                assert_eq!(layout.frame_at(screen, p), expected, "screen {} point {:?}", screen, p);
            }
        }
    }
}

#[test]
fn test_scaling_corners() {
    let screen = Screen { id: 0, width: 1600, height: 1200 };
    let canvas = CanvasBox {
        left: 50.0,
        top: 20.0,
        client_width: 400.0,
        client_height: 300.0,
    };

    let origin = canvas.to_screen(&screen, Point::new(50.0, 20.0)).unwrap();
    assert_eq!(origin, Point::new(0.0, 0.0));

    let far = canvas.to_screen(&screen, Point::new(450.0, 320.0)).unwrap();
    assert_eq!(far, Point::new(1600.0, 1200.0));

    let middle = canvas.to_screen(&screen, Point::new(250.0, 170.0)).unwrap();
    assert_eq!(middle, Point::new(800.0, 600.0));
}

#[test]
fn test_scaling_uses_each_axis_independently() {
    let screen = Screen { id: 0, width: 1920, height: 1080 };
    let canvas = CanvasBox {
        left: 0.0,
        top: 0.0,
        client_width: 192.0,
        client_height: 54.0,
    };

    let p = canvas.to_screen(&screen, Point::new(19.2, 27.0)).unwrap();
    assert!((p.x - 192.0).abs() < 1e-9);
    assert!((p.y - 540.0).abs() < 1e-9);
}

#[test]
fn test_scaling_zero_sized_canvas() {
    let screen = Screen { id: 0, width: 1600, height: 1200 };
    let hidden = CanvasBox {
        left: 0.0,
        top: 0.0,
        client_width: 0.0,
        client_height: 300.0,
    };

    assert!(hidden.to_screen(&screen, Point::new(0.0, 0.0)).is_none());
}

#[test]
fn test_drop_point_to_frame() {
    // A canvas drawn at quarter size: a drop in the right half hits frame 11
    let layout = two_screen_layout();
    let screen = layout.screen(0).unwrap();
    let canvas = CanvasBox {
        left: 10.0,
        top: 10.0,
        client_width: 400.0,
        client_height: 300.0,
    };

    let p = canvas.to_screen(screen, Point::new(310.0, 160.0)).unwrap();
    assert_eq!(layout.frame_at(screen.id, p).map(|f| f.id), Some(11));
}

#[test]
fn test_canvas_inside_border() {
    // 1 px border: the bounding rect starts one pixel before the drawing area
    let screen = Screen { id: 0, width: 1600, height: 1200 };
    let canvas = CanvasBox::inside_border(49.0, 19.0, 1.0, 1.0, 400.0, 300.0);

    assert_eq!(canvas.left, 50.0);
    assert_eq!(canvas.top, 20.0);
    assert_eq!(canvas.to_screen(&screen, Point::new(50.0, 20.0)), Some(Point::new(0.0, 0.0)));
    assert_eq!(
        canvas.to_screen(&screen, Point::new(450.0, 320.0)),
        Some(Point::new(1600.0, 1200.0))
    );
}

fn preview_catalog() -> Vec<DisplayLayouts> {
    let mut full = two_screen_layout();
    full.name = "full".to_string();
    full.frames = vec![frame(1, 0, 0, 0, 1600, 1200)];
    vec![DisplayLayouts {
        display: ":0".to_string(),
        layouts: vec![full, two_screen_layout()],
    }]
}

fn active(display: &str, layout: &str) -> Status {
    Status {
        layout: ActiveLayouts::PerDisplay(vec![DisplayState {
            display: display.to_string(),
            layout: layout.to_string(),
        }]),
        running: vec!["browser".to_string()],
        ..Default::default()
    }
}

fn quarter_canvas() -> CanvasBox {
    CanvasBox {
        left: 0.0,
        top: 0.0,
        client_width: 400.0,
        client_height: 300.0,
    }
}

#[test]
fn test_drop_target_uses_active_layout() {
    let displays = preview_catalog();
    let screen = Screen { id: 0, width: 1600, height: 1200 };
    let right_half = Point::new(300.0, 150.0);

    let split = active(":0", "split");
    assert_eq!(
        drop_target(&displays, &split, ":0", &screen, &quarter_canvas(), right_half),
        Some(11)
    );

    // Same drop, different active layout
    let full = active(":0", "full");
    assert_eq!(
        drop_target(&displays, &full, ":0", &screen, &quarter_canvas(), right_half),
        Some(1)
    );
}

#[test]
fn test_drop_target_without_active_layout() {
    let displays = preview_catalog();
    let screen = Screen { id: 0, width: 1600, height: 1200 };
    let point = Point::new(10.0, 10.0);

    // Display with no active layout
    let other = active(":1", "split");
    assert_eq!(drop_target(&displays, &other, ":0", &screen, &quarter_canvas(), point), None);

    // Active layout the catalog does not know
    let unknown = active(":0", "gone");
    assert_eq!(drop_target(&displays, &unknown, ":0", &screen, &quarter_canvas(), point), None);

    // Display the catalog does not know
    let missing = active(":9", "split");
    assert_eq!(drop_target(&displays, &missing, ":9", &screen, &quarter_canvas(), point), None);
}

#[test]
fn test_drop_target_misses() {
    let displays = preview_catalog();
    let status = active(":0", "split");
    let screen = Screen { id: 0, width: 1600, height: 1200 };

    let outside = Point::new(401.0, 10.0);
    assert_eq!(drop_target(&displays, &status, ":0", &screen, &quarter_canvas(), outside), None);

    let hidden = CanvasBox { client_width: 0.0, ..quarter_canvas() };
    assert_eq!(
        drop_target(&displays, &status, ":0", &screen, &hidden, Point::new(10.0, 10.0)),
        None
    );
}

#[test]
fn test_drop_target_on_second_screen() {
    let displays = preview_catalog();
    let status = active(":0", "split");
    let screen = Screen { id: 1, width: 1920, height: 1080 };
    let canvas = CanvasBox {
        left: 500.0,
        top: 0.0,
        client_width: 480.0,
        client_height: 270.0,
    };

    assert_eq!(
        drop_target(&displays, &status, ":0", &screen, &canvas, Point::new(600.0, 100.0)),
        Some(20)
    );
}
