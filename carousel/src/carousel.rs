use alloc::vec::Vec;
use core::cell::Cell;

use crate::detect::{ObserverConfig, ratio_thresholds, select_center};
use crate::measure::{RowGeometry, RowMeasurement};
use crate::settle::{SettleStrategy, at_snap_point};
use crate::types::{ItemContext, ItemId, Phase, RowKind, ScrollRequest, VisibilityEntry};
use crate::CarouselOptions;

/// Mutable scratch state of one scrollable row.
///
/// Everything the detection and reconciliation paths share lives here, owned
/// by the engine and keyed by [`RowKind`]; nothing is ambient.
#[derive(Clone, Debug)]
struct RowState<K> {
    measurement: Option<RowMeasurement>,
    /// Latest detection result; promoted to the active id only once scrolling
    /// has settled.
    center_candidate: Option<K>,
    phase: Phase,
}

impl<K> RowState<K> {
    fn new() -> Self {
        Self {
            measurement: None,
            center_candidate: None,
            phase: Phase::Idle,
        }
    }
}

/// A headless scroll-snap carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects, nor the item payloads.
/// - Your adapter drives it by reporting row geometry, visibility batches, and
///   scroll events.
/// - Reconciliation is exposed as [`ScrollRequest`]s the adapter drains and
///   animates; the adapter reports animation completion back via
///   [`Carousel::complete_scroll`].
///
/// For tween-driven smooth scrolling, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<K = ItemId> {
    options: CarouselOptions<K>,
    strategy: SettleStrategy,
    active_id: Option<K>,
    items: RowState<K>,
    markers: RowState<K>,
    pending: Vec<ScrollRequest>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: Clone + PartialEq> Carousel<K> {
    /// Creates a new carousel from options.
    ///
    /// The settle strategy is resolved here, once, from
    /// `options.use_scrollend_event`. The initial active id is
    /// `options.start_id`, defaulting to the id of item 0 (`None` when the
    /// item set is empty).
    pub fn new(options: CarouselOptions<K>) -> Self {
        let strategy = SettleStrategy::detect(options.use_scrollend_event);
        let active_id = options
            .start_id
            .clone()
            .or_else(|| (options.count > 0).then(|| (options.get_item_id)(0)));
        cdebug!(
            count = options.count,
            native_scrollend = options.use_scrollend_event,
            "Carousel::new"
        );
        Self {
            strategy,
            active_id,
            items: RowState::new(),
            markers: RowState::new(),
            pending: Vec::new(),
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn settle_strategy(&self) -> SettleStrategy {
        self.strategy
    }

    /// The currently centered item's id. `None` only for an empty item set.
    pub fn active_id(&self) -> Option<&K> {
        self.active_id.as_ref()
    }

    pub fn is_active(&self, id: &K) -> bool {
        self.active_id.as_ref() == Some(id)
    }

    /// The latest detection result, not yet promoted.
    pub fn center_candidate(&self) -> Option<&K> {
        self.items.center_candidate.as_ref()
    }

    pub fn phase(&self, row: RowKind) -> Phase {
        self.row(row).phase
    }

    /// Whether a programmatic scroll is in flight for `row` (the transition
    /// lock). While locked, detection-driven promotion is suppressed.
    pub fn is_locked(&self, row: RowKind) -> bool {
        self.row(row).phase == Phase::ProgrammaticScroll
    }

    pub fn set_on_active_change(
        &mut self,
        on_active_change: Option<impl Fn(&Carousel<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_active_change = on_active_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    /// Detection setup values for the adapter's platform visibility observer.
    pub fn observer_config(&self) -> ObserverConfig {
        ObserverConfig {
            band_fraction: self.options.band_fraction,
            thresholds: ratio_thresholds(self.options.ratio_step),
        }
    }

    /// Records the rendered geometry of `row` and derives its snap
    /// measurement.
    ///
    /// Runs exactly once per row: repeat reports are ignored (measurements are
    /// invalidated only by a full remount). Skipped entirely for an empty item
    /// set. On success, a reconciliation scroll is issued so the initial
    /// active item is centered after mount.
    pub fn measure_row(&mut self, row: RowKind, geometry: RowGeometry) {
        if self.options.count == 0 {
            return;
        }
        if self.row(row).measurement.is_some() {
            cwarn!(row = ?row, "measure_row: row already measured, ignoring");
            return;
        }
        let m = RowMeasurement::compute(geometry, self.options.gap);
        cdebug!(
            row = ?row,
            item_pitch = m.item_pitch,
            offset = m.offset,
            "measure_row"
        );
        self.row_mut(row).measurement = Some(m);
        self.reconcile_row(row);
    }

    pub fn measurement(&self, row: RowKind) -> Option<RowMeasurement> {
        self.row(row).measurement
    }

    /// Extra margin the adapter should apply to the first/last items of
    /// `row`, once measured.
    pub fn edge_margin(&self, row: RowKind) -> Option<u32> {
        self.row(row).measurement.map(|m| m.edge_margin())
    }

    /// The scroll position that would center item `index` in `row`.
    pub fn target_offset(&self, row: RowKind, index: usize) -> Option<i64> {
        if index >= self.options.count {
            return None;
        }
        self.row(row).measurement.map(|m| m.target_for(index))
    }

    /// Feeds a batch of visibility reports from the main row's observer.
    ///
    /// Updates the center candidate via the max-ratio tie-break. Candidates
    /// are tracked in every phase; only promotion is gated by the transition
    /// lock.
    pub fn observe_visibility(&mut self, entries: &[VisibilityEntry<K>]) {
        if self.options.count == 0 {
            return;
        }
        self.items.center_candidate = select_center(
            entries,
            self.items.center_candidate.as_ref(),
            self.options.promote_floor,
        );
        ctrace!(entries = entries.len(), "observe_visibility");
    }

    /// Feeds one scroll tick of the main row (polyfill settle path).
    ///
    /// Ignored while a programmatic scroll is in flight. Under the
    /// [`SettleStrategy::SnapPosition`] strategy, a position sitting exactly
    /// on a snap point promotes the center candidate.
    pub fn notify_scroll(&mut self, scroll_left: i64) {
        if self.options.count == 0 {
            return;
        }
        if self.items.phase == Phase::ProgrammaticScroll {
            ctrace!(scroll_left, "notify_scroll: locked, ignoring");
            return;
        }
        self.items.phase = Phase::UserScrolling;
        if self.strategy != SettleStrategy::SnapPosition {
            return;
        }
        let Some(m) = self.items.measurement else {
            return;
        };
        if at_snap_point(scroll_left, m.item_pitch, m.offset) {
            ctrace!(scroll_left, "notify_scroll: settled at snap point");
            self.promote();
        }
    }

    /// Feeds the platform's native "scrolling fully settled" signal.
    ///
    /// Only honored under the [`SettleStrategy::ScrollEnd`] strategy, and only
    /// when no programmatic scroll is in flight.
    pub fn notify_scroll_end(&mut self) {
        if self.options.count == 0 {
            return;
        }
        if self.strategy != SettleStrategy::ScrollEnd {
            return;
        }
        if self.items.phase == Phase::ProgrammaticScroll {
            ctrace!("notify_scroll_end: locked, ignoring");
            return;
        }
        self.promote();
    }

    /// Explicit selection entry point (e.g. a click on an item or marker).
    ///
    /// Overwrites the active id without waiting for settle and without
    /// validating `id`; an id with no matching item updates state but yields
    /// no reconciliation scroll. Selecting the already-active id is a no-op.
    pub fn set_active_id(&mut self, id: K) {
        if self.options.count == 0 {
            return;
        }
        if self.active_id.as_ref() == Some(&id) {
            return;
        }
        self.active_id = Some(id);
        self.reconcile();
        self.notify();
    }

    /// Marks the programmatic scroll for `row` as finished, releasing the
    /// transition lock.
    ///
    /// Adapters must call this when the animation completes *or* is
    /// interrupted; an unreleased lock suppresses detection permanently.
    pub fn complete_scroll(&mut self, row: RowKind) {
        let state = self.row_mut(row);
        if state.phase == Phase::ProgrammaticScroll {
            ctrace!(row = ?row, "complete_scroll");
            state.phase = Phase::Idle;
        }
    }

    /// Drains the queued reconciliation scrolls into `out` (clears `out`
    /// first).
    pub fn take_scroll_requests(&mut self, out: &mut Vec<ScrollRequest>) {
        out.clear();
        out.append(&mut self.pending);
    }

    pub fn has_scroll_requests(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn id_for(&self, index: usize) -> K {
        (self.options.get_item_id)(index)
    }

    pub fn index_of(&self, id: &K) -> Option<usize> {
        (0..self.options.count).find(|&i| (self.options.get_item_id)(i) == *id)
    }

    pub fn item_context(&self, index: usize) -> Option<ItemContext<K>> {
        if index >= self.options.count {
            return None;
        }
        let id = self.id_for(index);
        let is_active = self.active_id.as_ref() == Some(&id);
        Some(ItemContext {
            id,
            index,
            is_active,
            count: self.options.count,
        })
    }

    /// Iterates over per-item render contexts without allocations.
    ///
    /// Hosts map these to rendered nodes for both rows; item payloads stay
    /// with the caller.
    pub fn for_each_item_context(&self, mut f: impl FnMut(ItemContext<K>)) {
        for index in 0..self.options.count {
            let id = self.id_for(index);
            let is_active = self.active_id.as_ref() == Some(&id);
            f(ItemContext {
                id,
                index,
                is_active,
                count: self.options.count,
            });
        }
    }

    /// Promotes the latched center candidate to the active id.
    ///
    /// With no candidate yet (settle before any report), the first item wins.
    fn promote(&mut self) {
        self.items.phase = Phase::Idle;
        let Some(next) = self
            .items
            .center_candidate
            .clone()
            .or_else(|| (self.options.count > 0).then(|| self.id_for(0)))
        else {
            return;
        };
        if self.active_id.as_ref() == Some(&next) {
            return;
        }
        self.active_id = Some(next);
        self.reconcile();
        self.notify();
    }

    fn reconcile(&mut self) {
        self.reconcile_row(RowKind::Items);
        self.reconcile_row(RowKind::Markers);
    }

    /// Issues a smooth scroll centering the active item in `row`, taking the
    /// row's transition lock.
    ///
    /// No-op when the row is unmeasured or the active id matches no item.
    fn reconcile_row(&mut self, row: RowKind) {
        let Some(active) = self.active_id.clone() else {
            return;
        };
        let Some(index) = self.index_of(&active) else {
            return;
        };
        let Some(m) = self.row(row).measurement else {
            return;
        };
        let target = m.target_for(index).max(0) as u64;
        ctrace!(row = ?row, index, target, "reconcile_row");
        self.row_mut(row).phase = Phase::ProgrammaticScroll;
        self.pending.push(ScrollRequest { row, target });
    }

    fn row(&self, row: RowKind) -> &RowState<K> {
        match row {
            RowKind::Items => &self.items,
            RowKind::Markers => &self.markers,
        }
    }

    fn row_mut(&mut self, row: RowKind) -> &mut RowState<K> {
        match row {
            RowKind::Items => &mut self.items,
            RowKind::Markers => &mut self.markers,
        }
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_active_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_active_change` notification.
    ///
    /// Useful when an adapter applies a visibility batch and a settle signal
    /// from the same frame.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }
}
