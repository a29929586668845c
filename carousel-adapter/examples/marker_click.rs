// Example: animating a marker click with the controller.
use carousel::{CarouselOptions, RowGeometry, RowKind};
use carousel_adapter::{Controller, Easing};

fn main() {
    let mut c = Controller::with_animation(CarouselOptions::new(20), 300, Easing::SmoothStep);
    c.on_items_geometry(
        RowGeometry {
            viewport: 500,
            item_width: 248,
            first_item_offset: 296,
        },
        0,
    );
    c.on_markers_geometry(
        RowGeometry {
            viewport: 500,
            item_width: 68,
            first_item_offset: 116,
        },
        0,
    );
    c.tick(300); // run the mount centering to completion

    // User clicks marker 12.
    c.select(12, 1000);
    for now_ms in (1000..=1300).step_by(50) {
        let offsets = c.tick(now_ms);
        println!("t={now_ms} items={:?} markers={:?}", offsets.items, offsets.markers);
    }
    println!(
        "active={:?} locked={}",
        c.carousel().active_id(),
        c.carousel().is_locked(RowKind::Items)
    );
}
