/// How the engine decides that user-driven scrolling (including snap
/// animation) has fully stopped.
///
/// Resolved once at construction from the platform capability flag; the
/// signal belonging to the other strategy is ignored rather than listened to
/// in parallel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettleStrategy {
    /// The platform notifies "scrolling has fully stopped" directly.
    ScrollEnd,
    /// Settling is inferred by checking each scroll position against the snap
    /// grid.
    SnapPosition,
}

impl SettleStrategy {
    pub fn detect(native_scrollend: bool) -> Self {
        if native_scrollend {
            Self::ScrollEnd
        } else {
            Self::SnapPosition
        }
    }
}

/// Snap-position settle predicate: true when `scroll_left` sits exactly on a
/// snap point (`scroll_left == 0` covers targets clamped at the left edge).
///
/// Euclidean remainders keep a negative `offset` comparable; for non-negative
/// inputs this is plain `scroll_left % item_pitch == offset`.
///
/// Known tolerance: a position merely passed through mid-scroll that happens
/// to be congruent to a snap point also satisfies the predicate.
pub fn at_snap_point(scroll_left: i64, item_pitch: i64, offset: i64) -> bool {
    if item_pitch <= 0 {
        return false;
    }
    scroll_left == 0 || scroll_left.rem_euclid(item_pitch) == offset.rem_euclid(item_pitch)
}
