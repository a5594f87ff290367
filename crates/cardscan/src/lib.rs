//! High-level facade crate for the `cardscan-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying pipeline crates
//! - an end-to-end helper that runs localization, digit reading, assembly
//!   and validation over one captured frame.
//!
//! ## Quickstart
//!
//! ```no_run
//! use cardscan::{scan_frame, DigitModelSpec, DigitReader, RegionDetector, RgbImageView};
//! use cardscan::infer::MockEngine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Real applications plug their inference runtime in through the
//! // `InferenceEngine` trait; the mock stands in for it here.
//! let region = RegionDetector::new(MockEngine::new(vec![0.0; 34 * 51 * 3]));
//! let number = DigitReader::new(
//!     MockEngine::new(vec![0.0; 17 * 11]),
//!     DigitModelSpec::number_line(),
//! );
//! let expiry = DigitReader::new(
//!     MockEngine::new(vec![0.0; 6 * 11]),
//!     DigitModelSpec::expiry_line(),
//! );
//!
//! let pixels = vec![0u8; 480 * 302 * 3];
//! let frame = RgbImageView { width: 480, height: 302, data: &pixels };
//!
//! let outcome = scan_frame(&region, &number, &expiry, &frame)?;
//! println!("number: {:?}", outcome.number);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`core`]: grid/box geometry, pixel views, the stderr logger.
//! - [`infer`]: the `InferenceEngine` contract and classifier wrapper.
//! - [`detect`]: localization scan and box line search.
//! - [`digits`]: digit-strip reading and number/expiry assembly.
//! - [`card`]: Luhn, issuer prefixes, expiry decoding, display formatting.

pub use cardscan_card as card;
pub use cardscan_core as core;
pub use cardscan_detect as detect;
pub use cardscan_digits as digits;
pub use cardscan_infer as infer;

pub use cardscan_card::{
    format_number, is_card_number_valid, issuer_slug, last_four, luhn_check, DebitCard, Expiry,
};
pub use cardscan_core::{
    init_with_level, map_box, BoundingBox, DetectedBox, Extent, GridCoords, RgbImageView,
};
pub use cardscan_detect::{PostDetection, RegionDetector, RegionModelSpec, RegionScan};
pub use cardscan_digits::{
    assemble_expiry, assemble_number, DigitModelSpec, DigitReader, DigitSequence,
    NumberRecognizer,
};
pub use cardscan_infer::{Classifier, ClassifierSpec, EngineError, InferenceEngine};

mod scan;
pub use scan::{scan_frame, ScanError, ScanOutcome};

#[cfg(feature = "image")]
mod convert;
#[cfg(feature = "image")]
pub use convert::rgb_view;
