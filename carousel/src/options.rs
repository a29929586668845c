use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::types::ItemId;

/// A callback fired after `active_id` changes.
///
/// Fired from detection-driven promotion and from explicit selection alike.
/// Query the carousel for the new id via [`Carousel::active_id`].
pub type OnActiveChangeCallback<K> = Arc<dyn Fn(&Carousel<K>) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// This type is designed to be cheap to clone: the id mapping and callback are
/// stored in `Arc`s.
pub struct CarouselOptions<K = ItemId> {
    /// Number of items. The item set is immutable for the engine's lifetime.
    pub count: usize,
    /// Maps an item index to its identifier.
    pub get_item_id: Arc<dyn Fn(usize) -> K + Send + Sync>,
    /// Initial active item id. Defaults to the id of item 0.
    pub start_id: Option<K>,

    /// Margin on each side of an item, in pixels.
    ///
    /// The snap pitch is `item_width + 2 * gap`; the engine needs this to
    /// locate snap points from rendered geometry.
    pub gap: u32,

    /// Fraction of the viewport trimmed from each side to form the central
    /// observation band.
    ///
    /// The band should be as close as possible to (but greater than) one item
    /// wide, so that mostly only the centered item reports high ratios.
    pub band_fraction: f32,

    /// Spacing of the visibility-ratio thresholds in `0.0..=1.0`.
    ///
    /// Dense thresholds make ratio-crossing reports fire at fine granularity
    /// during scroll.
    pub ratio_step: f32,

    /// Minimum ratio a report needs to displace the previous center candidate.
    ///
    /// Guards against platforms that deliver visibility reports late or
    /// sporadically.
    pub promote_floor: f32,

    /// Whether the platform delivers a native "scrolling fully settled"
    /// signal (including snap settling).
    ///
    /// When `false`, settling is detected by checking scroll positions against
    /// snap points. The strategy is resolved once at construction.
    pub use_scrollend_event: bool,

    /// Optional callback fired when the active item changes.
    pub on_active_change: Option<OnActiveChangeCallback<K>>,
}

impl<K> Clone for CarouselOptions<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            get_item_id: Arc::clone(&self.get_item_id),
            start_id: self.start_id.clone(),
            gap: self.gap,
            band_fraction: self.band_fraction,
            ratio_step: self.ratio_step,
            promote_floor: self.promote_floor,
            use_scrollend_event: self.use_scrollend_event,
            on_active_change: self.on_active_change.clone(),
        }
    }
}

impl CarouselOptions<ItemId> {
    /// Creates options for a carousel keyed by index (`ItemId = u64`).
    pub fn new(count: usize) -> Self {
        Self::new_with_id(count, |i| i as u64)
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom id mapping.
    ///
    /// `get_item_id(i)` should return a stable identity for the item at
    /// index `i`.
    pub fn new_with_id(
        count: usize,
        get_item_id: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            get_item_id: Arc::new(get_item_id),
            start_id: None,
            gap: 16,
            band_fraction: 0.2,
            ratio_step: 0.02,
            promote_floor: 0.5,
            use_scrollend_event: false,
            on_active_change: None,
        }
    }

    pub fn with_start_id(mut self, start_id: Option<K>) -> Self {
        self.start_id = start_id;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_band_fraction(mut self, band_fraction: f32) -> Self {
        self.band_fraction = band_fraction;
        self
    }

    pub fn with_ratio_step(mut self, ratio_step: f32) -> Self {
        self.ratio_step = ratio_step;
        self
    }

    pub fn with_promote_floor(mut self, promote_floor: f32) -> Self {
        self.promote_floor = promote_floor;
        self
    }

    pub fn with_use_scrollend_event(mut self, use_scrollend_event: bool) -> Self {
        self.use_scrollend_event = use_scrollend_event;
        self
    }

    pub fn with_on_active_change(
        mut self,
        on_active_change: Option<impl Fn(&Carousel<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_active_change = on_active_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("start_id", &self.start_id)
            .field("gap", &self.gap)
            .field("band_fraction", &self.band_fraction)
            .field("ratio_step", &self.ratio_step)
            .field("promote_floor", &self.promote_floor)
            .field("use_scrollend_event", &self.use_scrollend_event)
            .finish_non_exhaustive()
    }
}
