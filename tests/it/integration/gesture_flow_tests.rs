//! End-to-end gesture flows: touch samples in, offsets and settled state out.

use std::sync::Arc;
use std::time::Duration;

use drawerkit::DrawerPhase;
use parking_lot::Mutex;

use crate::helpers::{drive_to_rest, tick_n, Gesture, TestDrawerBuilder};

fn open_events(drawer: &drawerkit::DrawerController) -> Arc<Mutex<Vec<bool>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    drawer.subscribe_open_changed(move |open| sink.lock().push(open));
    events
}

#[test]
fn test_ambiguous_release_keeps_drawer_closed() {
    // Width 1000, open factor 0.8, threshold 22, left-aligned, starts closed.
    let builder = TestDrawerBuilder::new();
    let metrics = builder.metrics();
    let (drawer, sink) = builder.build();
    let events = open_events(&drawer);
    let mut gesture = Gesture::new(metrics);

    let down = gesture.press(&drawer, 50.0);
    assert_eq!(down.translated_x, -450.0);
    assert_eq!(drawer.phase(), DrawerPhase::Dragging);

    // 450 units in 0.1 s.
    let moved = gesture.move_to(&drawer, 500.0);
    assert_eq!(moved.translated_x, 0.0);
    assert!((moved.speed - 4500.0).abs() < 1e-9);
    // Anchor 0 - 500 = -500, inside the drag interval.
    assert_eq!(drawer.master_offset(), -500.0);

    // Release at anchor -250: 50 from the open target, outside the 44-unit
    // window; nowhere near the closed target either. Hysteresis holds.
    let up = gesture.release(&drawer, 750.0);
    assert_eq!(up.translated_x, 250.0);
    assert!(!drawer.is_open());

    drive_to_rest(&drawer);
    assert_eq!(drawer.phase(), DrawerPhase::Closed);
    assert_eq!(sink.last_master(), Some(-1000.0));
    assert!(events.lock().is_empty(), "no settled-state change expected");
}

#[test]
fn test_drag_past_open_target_opens_drawer() {
    let builder = TestDrawerBuilder::new();
    let metrics = builder.metrics();
    let (drawer, sink) = builder.build();
    let events = open_events(&drawer);
    // Fast samples, one per frame.
    let mut gesture = Gesture::new(metrics).with_step(Duration::from_millis(16));

    gesture.press(&drawer, 10.0);
    gesture.move_to(&drawer, 320.0);
    assert_eq!(drawer.master_offset(), -680.0);
    gesture.move_to(&drawer, 770.0);
    assert_eq!(drawer.master_offset(), -230.0);

    // Anchor -210 is 10 from the open target: inside the release window.
    gesture.release(&drawer, 790.0);
    assert!(drawer.is_open());
    assert_eq!(drawer.phase().settle_target().map(|t| t.is_open()), Some(true));
    // The capture strip snapped to its open position at settle start.
    assert_eq!(sink.last_grab(), Some(-222.0));

    drive_to_rest(&drawer);
    assert_eq!(drawer.phase(), DrawerPhase::Open);
    assert_eq!(sink.last_master(), Some(-200.0));
    assert_eq!(*events.lock(), vec![true]);
}

#[test]
fn test_release_near_closed_target_closes_open_drawer() {
    let builder = TestDrawerBuilder::new().start_open();
    let metrics = builder.metrics();
    let (drawer, _sink) = builder.build();
    let events = open_events(&drawer);
    let mut gesture = Gesture::new(metrics);

    gesture.press(&drawer, 790.0);
    gesture.move_to(&drawer, 400.0);
    // Anchor -990 is 10 from the closed target.
    gesture.release(&drawer, 10.0);
    assert!(!drawer.is_open());

    drive_to_rest(&drawer);
    assert_eq!(drawer.phase(), DrawerPhase::Closed);
    assert_eq!(*events.lock(), vec![false]);
}

#[test]
fn test_ambiguous_release_keeps_open_drawer_open() {
    let builder = TestDrawerBuilder::new().start_open();
    let metrics = builder.metrics();
    let (drawer, sink) = builder.build();
    let events = open_events(&drawer);
    let mut gesture = Gesture::new(metrics);

    gesture.press(&drawer, 790.0);
    // Release mid-screen, far from both targets.
    gesture.release(&drawer, 400.0);
    assert!(drawer.is_open());

    drive_to_rest(&drawer);
    assert_eq!(drawer.phase(), DrawerPhase::Open);
    assert_eq!(sink.last_master(), Some(-200.0));
    assert!(events.lock().is_empty());
}

#[test]
fn test_drag_offset_is_clipped_to_travel_interval() {
    let builder = TestDrawerBuilder::new();
    let metrics = builder.metrics();
    let (drawer, _sink) = builder.build();
    let mut gesture = Gesture::new(metrics);

    gesture.press(&drawer, 500.0);
    // Anchor -1000: exactly the closed offset, the interval's lower end.
    gesture.move_to(&drawer, 0.0);
    assert_eq!(drawer.master_offset(), -1000.0);
    // Anchor would be 490 - 500 = -10; the open offset bounds it.
    gesture.move_to(&drawer, 990.0);
    assert_eq!(drawer.master_offset(), -200.0);
}

#[test]
fn test_grab_strip_stays_put_during_drag() {
    let builder = TestDrawerBuilder::new();
    let metrics = builder.metrics();
    let (drawer, sink) = builder.build();
    let mut gesture = Gesture::new(metrics);

    let resting_grab = sink.last_grab();
    gesture.press(&drawer, 50.0);
    gesture.move_to(&drawer, 400.0);
    gesture.move_to(&drawer, 600.0);
    assert_eq!(sink.last_grab(), resting_grab);
}

#[test]
fn test_touch_down_grabs_a_settling_drawer() {
    let builder = TestDrawerBuilder::new();
    let metrics = builder.metrics();
    let (drawer, _sink) = builder.build();
    let mut gesture = Gesture::new(metrics);

    drawer.set_open(true);
    tick_n(&drawer, 3);
    let mid_flight = drawer.master_offset();
    assert!(mid_flight > -1000.0 && mid_flight < -199.0);

    // The finger wins; the interpolator stops where it stands.
    gesture.press(&drawer, 300.0);
    assert_eq!(drawer.phase(), DrawerPhase::Dragging);
    assert_eq!(drawer.master_offset(), mid_flight);

    // Ticks while dragging must not move the drawer.
    tick_n(&drawer, 5);
    assert_eq!(drawer.master_offset(), mid_flight);

    gesture.move_to(&drawer, 650.0);
    assert_eq!(drawer.master_offset(), -350.0);
}

#[test]
fn test_custom_threshold_widens_release_window() {
    let builder = TestDrawerBuilder::new()
        .with_width(500.0)
        .with_touch_threshold(50.0);
    let metrics = builder.metrics();
    let (drawer, _sink) = builder.build();
    let mut gesture = Gesture::new(metrics);

    // Width 500, factor 0.8: open target -100, release window 100.
    gesture.press(&drawer, 20.0);
    gesture.move_to(&drawer, 200.0);
    assert_eq!(drawer.master_offset(), -300.0);

    // Anchor -190: 90 from the open target. The default 22-unit threshold
    // would hold closed here; the widened window opens.
    gesture.release(&drawer, 310.0);
    assert!(drawer.is_open());

    drive_to_rest(&drawer);
    assert_eq!(drawer.master_offset(), -100.0);
}

#[test]
fn test_gesture_travel_accumulates_per_gesture() {
    let builder = TestDrawerBuilder::new();
    let metrics = builder.metrics();
    let (drawer, _sink) = builder.build();
    let mut gesture = Gesture::new(metrics);

    gesture.press(&drawer, 100.0);
    gesture.move_to(&drawer, 400.0);
    gesture.move_to(&drawer, 650.0);
    assert_eq!(gesture.travel(), -550.0);

    gesture.press(&drawer, 200.0);
    assert_eq!(gesture.travel(), 0.0);
}
