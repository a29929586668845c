/// Rendered layout of one row, reported by the adapter after first layout.
///
/// `first_item_offset` is the rendered offset of the first item's leading edge
/// from the row's content origin, measured with the extra edge margins already
/// applied. Reporting final geometry keeps snap targets exactly periodic:
/// `target_for(i) == offset + i * item_pitch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowGeometry {
    /// Visible width of the scrollable row.
    pub viewport: u32,
    /// Rendered width of one item (all items share it).
    pub item_width: u32,
    /// Leading-edge offset of the first item.
    pub first_item_offset: i64,
}

/// Snap geometry derived from a [`RowGeometry`], computed once per row.
///
/// Invalidated only by a full remount; viewport resizes are not handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowMeasurement {
    /// Item width plus surrounding gap: the periodic spacing between snap
    /// points.
    pub item_pitch: i64,
    /// Scroll position at which the first item is exactly centered. Can be
    /// negative when the viewport is wider than twice the leading space.
    pub offset: i64,
    pub first_item_offset: i64,
    pub item_width: u32,
    pub viewport: u32,
}

impl RowMeasurement {
    /// Derives the snap geometry for a row with per-side margin `gap`.
    pub fn compute(geometry: RowGeometry, gap: u32) -> Self {
        let item_pitch = geometry.item_width as i64 + 2 * gap as i64;
        // floor(first_item_offset - viewport/2 + item_width/2), without
        // intermediate halving so odd widths round the same way floats would.
        let offset = (2 * geometry.first_item_offset - geometry.viewport as i64
            + geometry.item_width as i64)
            .div_euclid(2);
        Self {
            item_pitch,
            offset,
            first_item_offset: geometry.first_item_offset,
            item_width: geometry.item_width,
            viewport: geometry.viewport,
        }
    }

    /// Extra leading/trailing margin for the first/last items, so they too can
    /// be scrolled into dead center.
    pub fn edge_margin(&self) -> u32 {
        self.item_pitch.max(0) as u32
    }

    /// Rendered leading-edge offset of item `index`.
    pub fn child_offset(&self, index: usize) -> i64 {
        self.first_item_offset + index as i64 * self.item_pitch
    }

    /// Scroll position that centers item `index`:
    /// `child_offset - viewport/2 + item_width/2`.
    ///
    /// Equal to `offset + index * item_pitch`; may be negative for leading
    /// items (the emitted scroll request clamps at 0).
    pub fn target_for(&self, index: usize) -> i64 {
        self.offset + index as i64 * self.item_pitch
    }
}
