/// Default item identifier type.
///
/// Use [`crate::CarouselOptions::new_with_id`] when your items carry a richer
/// identity.
pub type ItemId = u64;

/// The two synchronized scrollable rows of the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowKind {
    /// The main item row.
    Items,
    /// The secondary row of smaller marker thumbnails.
    Markers,
}

/// Per-row scroll phase.
///
/// Detection-driven promotion of the center candidate is only permitted while a
/// row is `Idle` or `UserScrolling`. `ProgrammaticScroll` is the transition
/// lock: it is entered when a reconciliation scroll is issued and left only via
/// [`crate::Carousel::complete_scroll`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    UserScrolling,
    ProgrammaticScroll,
}

/// One visibility report: how much of item `id` currently overlaps the central
/// observation band.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityEntry<K = ItemId> {
    pub id: K,
    /// Overlap ratio in `0.0..=1.0`.
    pub ratio: f32,
}

/// A smooth-scroll command emitted by reconciliation.
///
/// `target` is the absolute scroll position (clamped at 0) that centers the
/// active item in `row`. The adapter owns the animation; when it finishes (or
/// is interrupted) it must call [`crate::Carousel::complete_scroll`] for `row`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub row: RowKind,
    pub target: u64,
}

/// Per-item render context.
///
/// A host framework maps these to rendered nodes for both rows; the item
/// payload itself stays with the caller and is looked up by `index` or `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemContext<K = ItemId> {
    pub id: K,
    pub index: usize,
    pub is_active: bool,
    pub count: usize,
}
