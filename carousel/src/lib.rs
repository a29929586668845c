//! A headless scroll-snap carousel engine.
//!
//! For adapter-level utilities (smooth-scroll tweens, a controller), see the
//! `carousel-adapter` crate.
//!
//! This crate implements the synchronization core of a snap carousel: a main item
//! row and a marker row that both track a single "active" (centered) item. It
//! covers measurement of snap geometry, centered-item detection from
//! visibility-ratio reports, scroll-settle detection, and reconciliation scrolls
//! that re-center both rows when the active item changes.
//!
//! It is UI-agnostic. A GUI/DOM layer is expected to provide:
//! - rendered row geometry (viewport width, item width, first item offset)
//! - visibility-ratio reports against a central observation band
//! - scroll positions and, where available, a native scroll-settled signal
//! - execution of the smooth-scroll requests the engine emits
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod detect;
mod measure;
mod options;
mod settle;
mod types;


pub use carousel::Carousel;
pub use detect::{ObserverConfig, ratio_thresholds, select_center};
pub use measure::{RowGeometry, RowMeasurement};
pub use options::{CarouselOptions, OnActiveChangeCallback};
pub use settle::{SettleStrategy, at_snap_point};
pub use types::{ItemContext, ItemId, Phase, RowKind, ScrollRequest, VisibilityEntry};
