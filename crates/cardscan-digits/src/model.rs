use cardscan_infer::ClassifierSpec;
use serde::{Deserialize, Serialize};

/// Labels per position: digits 0-9 plus the blank sentinel.
pub const DIGIT_CLASSES: usize = 11;
/// The "no digit here" class index.
pub const BLANK_CLASS: usize = 10;

/// Fixed configuration of the digit-strip recognition model.
///
/// The model reads an 80x36 crop as `positions` character slots. The number
/// line is read with 17 slots, the expiry line with 6; both share the same
/// crop size and label alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DigitModelSpec {
    pub positions: usize,
    pub classes: usize,
    pub input_width: usize,
    pub input_height: usize,
}

impl DigitModelSpec {
    /// Configuration for reading the card-number line.
    pub const fn number_line() -> Self {
        Self {
            positions: 17,
            classes: DIGIT_CLASSES,
            input_width: 80,
            input_height: 36,
        }
    }

    /// Configuration for reading the expiry line.
    pub const fn expiry_line() -> Self {
        Self {
            positions: 6,
            classes: DIGIT_CLASSES,
            input_width: 80,
            input_height: 36,
        }
    }

    /// The classifier configuration implied by this model.
    pub fn classifier_spec(&self) -> ClassifierSpec {
        ClassifierSpec {
            input_width: self.input_width,
            input_height: self.input_height,
            output_len: self.positions * self.classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_configurations() {
        assert_eq!(DigitModelSpec::number_line().positions, 17);
        assert_eq!(DigitModelSpec::expiry_line().positions, 6);
        assert_eq!(
            DigitModelSpec::number_line().classifier_spec().output_len,
            17 * 11
        );
        assert_eq!(
            DigitModelSpec::number_line().classifier_spec().input_len(),
            80 * 36 * 3
        );
    }

    #[test]
    fn serde_round_trip() {
        let spec = DigitModelSpec::number_line();
        let json = serde_json::to_string(&spec).unwrap();
        let back: DigitModelSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }
}
