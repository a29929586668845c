//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core state: active-item
//! detection, settle handling, and reconciliation scroll requests. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-based smooth scrolling for the emitted reconciliation requests
//! - A controller that owns one tween per row and guarantees the transition
//!   lock is released when an animation completes or is interrupted
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, TickOffsets};
pub use tween::{Easing, ScrollTween};
