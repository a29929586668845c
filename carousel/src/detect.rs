use alloc::vec::Vec;

use crate::types::VisibilityEntry;

/// Detection setup for the adapter's platform visibility observer.
///
/// The observer should watch every item of the main row against a viewport
/// narrowed by `band_fraction` on both sides, firing at each ratio in
/// `thresholds`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObserverConfig {
    pub band_fraction: f32,
    pub thresholds: Vec<f32>,
}

impl ObserverConfig {
    /// Pixels trimmed from each side of a `viewport`-wide row to form the
    /// central observation band.
    pub fn band_inset(&self, viewport: u32) -> u32 {
        (viewport as f32 * self.band_fraction) as u32
    }
}

/// Builds the dense threshold ladder `0.0, step, 2*step, ..., 1.0`.
pub fn ratio_thresholds(step: f32) -> Vec<f32> {
    debug_assert!(step > 0.0 && step <= 1.0);
    let n = ((1.0 / step) + 0.5) as usize;
    let mut out = Vec::with_capacity(n + 1);
    for i in 0..=n {
        out.push((i as f32 * step).min(1.0));
    }
    out
}

/// Selects the center candidate from a batch of visibility reports.
///
/// The entry with the highest ratio wins (on equal ratios the later report
/// wins). If no entry reaches `floor`, `previous` is retained: some platforms
/// deliver reports late or sporadically, and a noisy batch must not displace a
/// confidently detected center.
pub fn select_center<K: Clone>(
    entries: &[VisibilityEntry<K>],
    previous: Option<&K>,
    floor: f32,
) -> Option<K> {
    let mut best = previous.cloned();
    let mut best_ratio = floor;
    for entry in entries {
        if entry.ratio >= best_ratio {
            best = Some(entry.id.clone());
            best_ratio = entry.ratio;
        }
    }
    best
}
