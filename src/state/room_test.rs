use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_size(size: RoomSize, width: f64, height: f64) {
    assert!(approx(size.width, width), "width {} != {width}", size.width);
    assert!(approx(size.height, height), "height {} != {height}", size.height);
}

// =============================================================
// Sizing
// =============================================================

#[test]
fn desktop_uses_height_when_wide_enough() {
    // 900 * 1.6 = 1440 >= 1280
    assert_size(room_size(1280.0, 900.0), 1440.0, 900.0);
}

#[test]
fn desktop_stretches_to_viewport_width() {
    // 600 * 1.6 = 960 < 1920
    assert_size(room_size(1920.0, 600.0), 1920.0, 1200.0);
}

#[test]
fn mobile_uses_width_ratio() {
    // 600 / 1.5 = 400 >= 300
    assert_size(room_size(600.0, 300.0), 600.0, 400.0);
}

#[test]
fn mobile_corrects_to_viewport_height() {
    // 375 / 1.5 = 250 < 812
    assert_size(room_size(375.0, 812.0), 1218.0, 812.0);
}

#[test]
fn breakpoint_boundary_is_desktop() {
    assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Desktop);
    assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Mobile);
    // 768 is desktop: 1000 * 1.6 = 1600
    assert_size(room_size(768.0, 1000.0), 1600.0, 1000.0);
}

#[test]
fn room_always_covers_viewport() {
    for (w, h) in [(320.0, 568.0), (768.0, 300.0), (1024.0, 1366.0), (2560.0, 1080.0)] {
        let size = room_size(w, h);
        assert!(size.width + 1e-9 >= w);
        assert!(size.height + 1e-9 >= h);
    }
}

#[test]
fn breakpoint_crossing() {
    assert_eq!(Breakpoint::Desktop.crossed(500.0), Some(Breakpoint::Mobile));
    assert_eq!(Breakpoint::Mobile.crossed(1000.0), Some(Breakpoint::Desktop));
    assert_eq!(Breakpoint::Desktop.crossed(1000.0), None);
}

#[test]
fn title_measured_once_per_breakpoint() {
    let mut measure = TitleMeasure::new(1280.0);
    assert!(measure.resize(1280.0));
    measure.record(240.0);
    assert!(!measure.resize(1024.0));
    assert_eq!(measure.width(), Some(240.0));

    assert!(measure.resize(600.0));
    assert_eq!(measure.breakpoint(), Breakpoint::Mobile);
    assert_eq!(measure.width(), None);
    measure.record(160.0);
    assert!(!measure.resize(500.0));
    assert!(measure.resize(900.0));
}

// =============================================================
// Scrolling
// =============================================================

#[test]
fn center_only_when_overflowing() {
    assert_eq!(center_scroll_left(1440.0, 1280.0), Some(80.0));
    assert_eq!(center_scroll_left(1280.0, 1280.0), None);
}

#[test]
fn wheel_scrolls_horizontally_inside_range() {
    assert_eq!(wheel_to_horizontal(100.0, 2000.0, 1000.0, 40.0), Some(140.0));
    assert_eq!(wheel_to_horizontal(100.0, 2000.0, 1000.0, -40.0), Some(60.0));
}

#[test]
fn wheel_clamps_to_edges() {
    assert_eq!(wheel_to_horizontal(990.0, 2000.0, 1000.0, 40.0), Some(1000.0));
    assert_eq!(wheel_to_horizontal(10.0, 2000.0, 1000.0, -40.0), Some(0.0));
}

#[test]
fn wheel_at_boundary_propagates() {
    assert_eq!(wheel_to_horizontal(0.0, 2000.0, 1000.0, -40.0), None);
    assert_eq!(wheel_to_horizontal(1000.0, 2000.0, 1000.0, 40.0), None);
    assert_eq!(wheel_to_horizontal(0.0, 1000.0, 1000.0, 40.0), None);
    assert_eq!(wheel_to_horizontal(50.0, 2000.0, 1000.0, 0.0), None);
}

#[test]
fn title_stays_centered_over_viewport() {
    assert!(approx(title_left(0.0, 1000.0, 200.0), 400.0));
    assert!(approx(title_left(300.0, 1000.0, 200.0), 700.0));
}
