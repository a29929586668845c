use alloc::vec::Vec;
use core::mem;

use carousel::{
    Carousel, CarouselOptions, ItemId, RowGeometry, RowKind, ScrollRequest, VisibilityEntry,
};

use crate::{Easing, ScrollTween};

const ROWS: [RowKind; 2] = [RowKind::Items, RowKind::Markers];

fn slot(row: RowKind) -> usize {
    match row {
        RowKind::Items => 0,
        RowKind::Markers => 1,
    }
}

/// Scroll offsets produced by one [`Controller::tick`], one per animating row.
///
/// `None` means the row has no animation in flight this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOffsets {
    pub items: Option<u64>,
    pub markers: Option<u64>,
}

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and
/// animates its reconciliation scrolls.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_items_geometry` / `on_markers_geometry` after first layout
/// - `observe` / `on_scroll` / `on_scroll_end` when UI events occur
/// - `select` when the user clicks an item or marker
/// - `tick(now_ms)` each frame; apply the returned offsets to the real rows
///
/// The controller upholds the engine's lock invariant: `complete_scroll` is
/// called when a tween finishes, and [`Controller::cancel_animation`] releases
/// the lock when an animation is dropped early.
#[derive(Clone, Debug)]
pub struct Controller<K = ItemId> {
    c: Carousel<K>,
    tweens: [Option<ScrollTween>; 2],
    offsets: [i64; 2],
    scratch: Vec<ScrollRequest>,
    duration_ms: u64,
    easing: Easing,
}

impl<K: Clone + PartialEq> Controller<K> {
    pub fn new(options: CarouselOptions<K>) -> Self {
        Self::with_animation(options, 300, Easing::SmoothStep)
    }

    pub fn with_animation(options: CarouselOptions<K>, duration_ms: u64, easing: Easing) -> Self {
        Self::from_carousel(Carousel::new(options), duration_ms, easing)
    }

    pub fn from_carousel(c: Carousel<K>, duration_ms: u64, easing: Easing) -> Self {
        Self {
            c,
            tweens: [None, None],
            offsets: [0, 0],
            scratch: Vec::new(),
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn carousel(&self) -> &Carousel<K> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<K> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<K> {
        self.c
    }

    pub fn is_animating(&self, row: RowKind) -> bool {
        self.tweens[slot(row)].is_some()
    }

    /// Last known scroll position of `row` (updated by ticks and, for the
    /// items row, by user scroll events).
    pub fn scroll_offset(&self, row: RowKind) -> i64 {
        self.offsets[slot(row)]
    }

    /// Drops the animation for `row` and releases the engine's transition
    /// lock. The lock must never outlive its animation.
    pub fn cancel_animation(&mut self, row: RowKind) {
        if self.tweens[slot(row)].take().is_some() {
            self.c.complete_scroll(row);
        }
    }

    /// Call after the main row's first layout.
    pub fn on_items_geometry(&mut self, geometry: RowGeometry, now_ms: u64) {
        self.c.measure_row(RowKind::Items, geometry);
        self.pump(now_ms);
    }

    /// Call after the marker row's first layout.
    pub fn on_markers_geometry(&mut self, geometry: RowGeometry, now_ms: u64) {
        self.c.measure_row(RowKind::Markers, geometry);
        self.pump(now_ms);
    }

    /// Forwards a visibility batch from the platform observer.
    pub fn observe(&mut self, entries: &[VisibilityEntry<K>]) {
        self.c.observe_visibility(entries);
    }

    /// Forwards a user scroll tick of the main row.
    ///
    /// Dropped while an items-row animation is in flight: those positions are
    /// the controller's own output, not user input.
    pub fn on_scroll(&mut self, scroll_left: i64, now_ms: u64) {
        if self.is_animating(RowKind::Items) {
            return;
        }
        self.offsets[slot(RowKind::Items)] = scroll_left;
        self.c.notify_scroll(scroll_left);
        self.pump(now_ms);
    }

    /// Forwards the platform's native settle signal.
    pub fn on_scroll_end(&mut self, now_ms: u64) {
        self.c.notify_scroll_end();
        self.pump(now_ms);
    }

    /// Explicit selection (item or marker click).
    pub fn select(&mut self, id: K, now_ms: u64) {
        self.c.set_active_id(id);
        self.pump(now_ms);
    }

    /// Advances the controller by one frame.
    ///
    /// Samples every active tween, releases the engine lock for tweens that
    /// finished, and starts tweens for any newly emitted scroll requests.
    pub fn tick(&mut self, now_ms: u64) -> TickOffsets {
        let mut out = TickOffsets::default();
        for row in ROWS {
            let i = slot(row);
            let Some(tween) = self.tweens[i] else {
                continue;
            };
            let off = tween.sample(now_ms);
            self.offsets[i] = off as i64;
            match row {
                RowKind::Items => out.items = Some(off),
                RowKind::Markers => out.markers = Some(off),
            }
            if tween.is_done(now_ms) {
                self.tweens[i] = None;
                self.c.complete_scroll(row);
            }
        }
        self.pump(now_ms);
        out
    }

    /// Turns queued reconciliation requests into tween starts or retargets.
    fn pump(&mut self, now_ms: u64) {
        let mut requests = mem::take(&mut self.scratch);
        self.c.take_scroll_requests(&mut requests);
        for req in &requests {
            let i = slot(req.row);
            let target = req.target as i64;
            match &mut self.tweens[i] {
                Some(tween) => tween.retarget(now_ms, target, self.duration_ms),
                None => {
                    self.tweens[i] = Some(ScrollTween::new(
                        self.offsets[i],
                        target,
                        now_ms,
                        self.duration_ms,
                        self.easing,
                    ));
                }
            }
        }
        self.scratch = requests;
    }
}
