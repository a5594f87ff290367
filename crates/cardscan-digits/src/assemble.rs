use std::collections::HashMap;

use cardscan_card::{luhn_check, Expiry};
use cardscan_core::{DetectedBox, GridCoords, RgbImageView};
use cardscan_infer::{EngineError, InferenceEngine};
use log::debug;

use crate::reader::DigitReader;
use crate::sequence::DigitSequence;

/// Assemble a card number from one strip read.
///
/// The blank-stripped string must come out as exactly 16 ASCII digits;
/// anything else yields `None`, never a partial result. Validation
/// (checksum, issuer) is the caller's next step.
pub fn assemble_number(sequence: &DigitSequence) -> Option<String> {
    let digits = sequence.string_result();
    if digits.len() != 16 {
        return None;
    }
    Some(digits)
}

/// Assemble an expiry from one strip read.
///
/// The blank-stripped string must be exactly 6 characters; the window is
/// then decoded by [`Expiry::from_raw`] (year from the first three, month
/// from the last two, index 3 dropped).
pub fn assemble_expiry(sequence: &DigitSequence) -> Option<Expiry> {
    let raw = sequence.string_result();
    if raw.len() != 6 {
        return None;
    }
    Expiry::from_raw(&raw)
}

/// Reads candidate box lines until one of them is a valid card number.
///
/// Each line holds the boxes of one printed digit group sequence; the per
/// box reads are memoized by grid cell because lines from the search
/// usually overlap heavily. The first candidate that concatenates to 16
/// digits and passes the Luhn/issuer gate wins.
pub struct NumberRecognizer<'a, E> {
    reader: &'a DigitReader<E>,
    cache: HashMap<GridCoords, DigitSequence>,
}

impl<'a, E: InferenceEngine> NumberRecognizer<'a, E> {
    pub fn new(reader: &'a DigitReader<E>) -> Self {
        Self {
            reader,
            cache: HashMap::new(),
        }
    }

    /// Try every line in order; `Ok(None)` when no line reads as a valid
    /// number. Engine faults abort the whole search.
    pub fn number(
        &mut self,
        image: &RgbImageView<'_>,
        lines: &[Vec<DetectedBox>],
    ) -> Result<Option<String>, EngineError> {
        for line in lines {
            let mut candidate = String::new();
            for b in line {
                let sequence = self.cached(image, b)?;
                candidate.push_str(&sequence.string_result());
            }

            if candidate.len() == 16 && luhn_check(&candidate) {
                return Ok(Some(candidate));
            }
            debug!(
                "rejected candidate line ({} chars{})",
                candidate.len(),
                if candidate.len() == 16 { ", checksum" } else { "" }
            );
        }
        Ok(None)
    }

    fn cached(
        &mut self,
        image: &RgbImageView<'_>,
        b: &DetectedBox,
    ) -> Result<&DigitSequence, EngineError> {
        if !self.cache.contains_key(&b.cell) {
            let sequence = self.reader.read(image, &b.rect)?;
            self.cache.insert(b.cell, sequence);
        }
        Ok(&self.cache[&b.cell])
    }
}
