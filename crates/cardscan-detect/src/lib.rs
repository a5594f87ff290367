//! Localization: find which parts of a card photo plausibly hold the number
//! and the expiry.
//!
//! The localization model classifies every cell of a fixed 34x51 grid as
//! background, digit region or expiry region. [`RegionDetector`] runs one
//! frame through the model, [`RegionScan`] exposes the per-cell scores, and
//! [`PostDetection`] organizes flagged cells into plausible number lines
//! for the digit reader downstream.

mod model;
mod postprocess;
mod scan;

pub use model::{RegionModelSpec, DIGIT_CLASS, EXPIRY_CLASS, REGION_CONFIDENCE_THRESHOLD};
pub use postprocess::{PostDetection, PostDetectionParams};
pub use scan::{RegionDetector, RegionScan};
