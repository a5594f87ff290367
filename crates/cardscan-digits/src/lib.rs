//! Read digit strips from card crops and assemble them into structured
//! values.
//!
//! The recognition model reads a fixed 80x36 crop as a fixed number of
//! character positions, each classified over the digits 0-9 plus a blank
//! sentinel. [`DigitReader`] produces one [`DigitSequence`] per crop;
//! [`assemble_number`]/[`assemble_expiry`] turn blank-stripped sequences
//! into a card number or an [`Expiry`](cardscan_card::Expiry), and
//! [`NumberRecognizer`] drives the reader over candidate box lines from the
//! localization stage.

mod assemble;
mod model;
mod reader;
mod sequence;

pub use assemble::{assemble_expiry, assemble_number, NumberRecognizer};
pub use model::{DigitModelSpec, BLANK_CLASS, DIGIT_CLASSES};
pub use reader::DigitReader;
pub use sequence::{DigitSequence, RecognizedPosition};
