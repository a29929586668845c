use crate::*;

use carousel::{CarouselOptions, RowGeometry, RowKind, VisibilityEntry};

fn items_geometry() -> RowGeometry {
    // pitch 280, offset 170 (see the carousel crate's tests)
    RowGeometry {
        viewport: 500,
        item_width: 248,
        first_item_offset: 296,
    }
}

fn markers_geometry() -> RowGeometry {
    // pitch 100, offset -100
    RowGeometry {
        viewport: 500,
        item_width: 68,
        first_item_offset: 116,
    }
}

fn measured_controller(duration_ms: u64) -> Controller {
    let mut c = Controller::with_animation(CarouselOptions::new(20), duration_ms, Easing::Linear);
    c.on_items_geometry(items_geometry(), 0);
    c.on_markers_geometry(markers_geometry(), 0);
    // Run the mount-time centering animations to completion.
    c.tick(duration_ms);
    c
}

#[test]
fn tween_samples_monotonically_to_target() {
    let tween = ScrollTween::new(0, 170, 0, 100, Easing::SmoothStep);
    let mut last = 0u64;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        let off = tween.sample(now_ms);
        assert!(off >= last);
        last = off;
    }
    assert_eq!(tween.sample(100), 170);
    assert!(tween.is_done(100));
    assert!(!tween.is_done(99));
}

#[test]
fn tween_clamps_at_left_edge() {
    let tween = ScrollTween::new(200, -100, 0, 100, Easing::Linear);
    assert_eq!(tween.sample(100), 0);
    assert_eq!(tween.sample(1000), 0);
}

#[test]
fn tween_retarget_continues_from_current_position() {
    let mut tween = ScrollTween::new(0, 100, 0, 100, Easing::Linear);
    let mid = tween.sample(50);
    tween.retarget(50, 300, 100);
    assert_eq!(tween.from, mid as i64);
    assert_eq!(tween.to, 300);
    assert_eq!(tween.sample(50), mid);
    assert_eq!(tween.sample(150), 300);
}

#[test]
fn mount_centering_animates_both_rows() {
    let mut c = Controller::with_animation(CarouselOptions::new(20), 100, Easing::Linear);
    c.on_items_geometry(items_geometry(), 0);
    c.on_markers_geometry(markers_geometry(), 0);
    assert!(c.is_animating(RowKind::Items));
    assert!(c.is_animating(RowKind::Markers));
    assert!(c.carousel().is_locked(RowKind::Items));

    let offsets = c.tick(100);
    assert_eq!(offsets.items, Some(170));
    assert_eq!(offsets.markers, Some(0)); // -100 clamped
    assert!(!c.is_animating(RowKind::Items));
    assert!(!c.carousel().is_locked(RowKind::Items));
    assert!(!c.carousel().is_locked(RowKind::Markers));
}

#[test]
fn select_animates_and_releases_lock() {
    let mut c = measured_controller(100);

    c.select(12, 200);
    assert_eq!(c.carousel().active_id(), Some(&12));
    assert!(c.carousel().is_locked(RowKind::Items));

    let mut last = c.scroll_offset(RowKind::Items);
    for now_ms in [210u64, 240, 280, 300] {
        if let Some(off) = c.tick(now_ms).items {
            assert!(off as i64 >= last);
            last = off as i64;
        }
    }
    assert_eq!(c.scroll_offset(RowKind::Items), 170 + 12 * 280);
    assert_eq!(c.scroll_offset(RowKind::Markers), 1100);
    assert!(!c.carousel().is_locked(RowKind::Items));
    assert!(!c.carousel().is_locked(RowKind::Markers));
}

#[test]
fn user_scroll_is_ignored_while_animating() {
    let mut c = measured_controller(100);
    c.select(12, 200);
    c.tick(250);

    // Mid-animation scroll positions come from the controller itself; even a
    // snap-point value must not promote a stale candidate.
    c.observe(&[VisibilityEntry { id: 2, ratio: 0.9 }]);
    c.on_scroll(170 + 2 * 280, 250);
    assert_eq!(c.carousel().active_id(), Some(&12));

    c.tick(300);
    assert!(!c.is_animating(RowKind::Items));
    c.on_scroll(170 + 2 * 280, 310);
    assert_eq!(c.carousel().active_id(), Some(&2));
}

#[test]
fn cancel_animation_releases_lock() {
    let mut c = measured_controller(100);
    c.select(7, 200);
    assert!(c.is_animating(RowKind::Items));
    assert!(c.carousel().is_locked(RowKind::Items));

    c.cancel_animation(RowKind::Items);
    assert!(!c.is_animating(RowKind::Items));
    assert!(!c.carousel().is_locked(RowKind::Items));

    // Idempotent: cancelling with no animation is a no-op.
    c.cancel_animation(RowKind::Items);
    assert!(!c.carousel().is_locked(RowKind::Items));
}

#[test]
fn reselect_mid_animation_retargets() {
    let mut c = measured_controller(100);
    c.select(12, 200);
    c.tick(250);
    let mid = c.scroll_offset(RowKind::Items);

    c.select(3, 250);
    assert_eq!(c.carousel().active_id(), Some(&3));
    assert!(c.is_animating(RowKind::Items));

    c.tick(350);
    assert_eq!(c.scroll_offset(RowKind::Items), 170 + 3 * 280);
    assert!(mid > 170 + 3 * 280 && mid < 170 + 12 * 280);
    assert!(!c.carousel().is_locked(RowKind::Items));
}

#[test]
fn native_settle_path_through_controller() {
    let mut c = Controller::with_animation(
        CarouselOptions::new(20).with_use_scrollend_event(true),
        100,
        Easing::Linear,
    );
    c.on_items_geometry(items_geometry(), 0);
    c.on_markers_geometry(markers_geometry(), 0);
    c.tick(100);

    c.observe(&[VisibilityEntry { id: 5, ratio: 0.9 }]);
    c.on_scroll(1234, 150); // arbitrary position: no polyfill promotion
    assert_eq!(c.carousel().active_id(), Some(&0));

    c.on_scroll_end(160);
    assert_eq!(c.carousel().active_id(), Some(&5));
    assert!(c.is_animating(RowKind::Items));
    assert!(c.is_animating(RowKind::Markers));
}
