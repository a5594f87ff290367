//! Core types and utilities for card scanning.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete inference engine or image codec: detection grids,
//! pixel-space boxes and borrowed pixel views live here, everything model
//! related lives in the crates built on top.

mod geometry;
mod image;
mod logger;

pub use geometry::{
    map_box, sort_by_confidence_desc, BoundingBox, DetectedBox, Extent, GridCoords,
};
pub use image::{crop_resize_normalized, encode_frame, sample_bilinear, RgbImageView};
pub use logger::init_with_level;
