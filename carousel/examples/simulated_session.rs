// Example: a simulated carousel session without any UI framework.
use carousel::{Carousel, CarouselOptions, RowGeometry, RowKind, VisibilityEntry};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(20));

    // First layout: 248px items and 68px markers in a 500px viewport.
    c.measure_row(
        RowKind::Items,
        RowGeometry {
            viewport: 500,
            item_width: 248,
            first_item_offset: 296,
        },
    );
    c.measure_row(
        RowKind::Markers,
        RowGeometry {
            viewport: 500,
            item_width: 68,
            first_item_offset: 116,
        },
    );

    let mut requests = Vec::new();
    c.take_scroll_requests(&mut requests);
    println!("mount centering: {requests:?}");
    c.complete_scroll(RowKind::Items);
    c.complete_scroll(RowKind::Markers);

    // The user flings the row; the observer reports item 5 dominating the
    // center band, then the row comes to rest on its snap point.
    c.observe_visibility(&[
        VisibilityEntry { id: 4, ratio: 0.31 },
        VisibilityEntry { id: 5, ratio: 0.92 },
    ]);
    c.notify_scroll(c.target_offset(RowKind::Items, 5).unwrap());

    println!("active after settle: {:?}", c.active_id());
    c.take_scroll_requests(&mut requests);
    println!("reconciliation: {requests:?}");
}
