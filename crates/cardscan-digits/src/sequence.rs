use cardscan_infer::SequenceTensorView;
use serde::{Deserialize, Serialize};

use crate::model::BLANK_CLASS;

/// Arg-max label and score for one character position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecognizedPosition {
    pub class_index: usize,
    pub confidence: f32,
}

impl RecognizedPosition {
    /// The digit character at this position, or `None` for the blank class.
    pub fn digit(&self) -> Option<char> {
        if self.class_index < 10 {
            Some((b'0' + self.class_index as u8) as char)
        } else {
            None
        }
    }
}

/// Fixed-length read-out of one digit strip: the arg-max label and score
/// for every configured position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DigitSequence {
    positions: Vec<RecognizedPosition>,
}

impl DigitSequence {
    /// Decode every position of a `[1, 1, positions, classes]` tensor.
    pub fn from_view(view: &SequenceTensorView<'_>) -> Self {
        let positions = (0..view.positions())
            .map(|position| {
                let (class_index, confidence) = view.arg_and_value_max(position);
                RecognizedPosition {
                    class_index,
                    confidence,
                }
            })
            .collect();
        Self { positions }
    }

    pub fn positions(&self) -> &[RecognizedPosition] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Concatenated digit characters, blanks discarded.
    pub fn string_result(&self) -> String {
        self.positions.iter().filter_map(RecognizedPosition::digit).collect()
    }

    /// Lowest score among the non-blank positions, `None` when everything
    /// read blank. Useful as a crude quality signal for a whole strip.
    pub fn min_digit_confidence(&self) -> Option<f32> {
        self.positions
            .iter()
            .filter(|p| p.class_index != BLANK_CLASS)
            .map(|p| p.confidence)
            .reduce(f32::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cardscan_infer::SequenceTensorView;

    use crate::model::DIGIT_CLASSES;

    /// One-hot tensor data for a label sequence; `None` marks a blank.
    fn one_hot(labels: &[Option<u8>], confidence: f32) -> Vec<f32> {
        let mut data = vec![0.0; labels.len() * DIGIT_CLASSES];
        for (position, label) in labels.iter().enumerate() {
            let class = label.map_or(BLANK_CLASS, usize::from);
            data[position * DIGIT_CLASSES + class] = confidence;
        }
        data
    }

    #[test]
    fn string_result_skips_blanks() {
        let data = one_hot(
            &[Some(4), None, Some(0), Some(3), None, Some(7)],
            0.9,
        );
        let view = SequenceTensorView::new(6, DIGIT_CLASSES, &data);
        let seq = DigitSequence::from_view(&view);
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.string_result(), "4037");
    }

    #[test]
    fn positions_carry_confidence() {
        let data = one_hot(&[Some(1), Some(2)], 0.75);
        let view = SequenceTensorView::new(2, DIGIT_CLASSES, &data);
        let seq = DigitSequence::from_view(&view);
        assert_relative_eq!(seq.positions()[0].confidence, 0.75);
        assert_eq!(seq.positions()[1].digit(), Some('2'));
    }

    #[test]
    fn min_digit_confidence_ignores_blanks() {
        let mut data = one_hot(&[Some(1), None, Some(2)], 0.9);
        // Weaken the second digit.
        data[2 * DIGIT_CLASSES + 2] = 0.4;
        let view = SequenceTensorView::new(3, DIGIT_CLASSES, &data);
        let seq = DigitSequence::from_view(&view);
        assert_relative_eq!(seq.min_digit_confidence().unwrap(), 0.4);
    }

    #[test]
    fn all_blank_strip_reads_empty() {
        let data = one_hot(&[None; 17], 0.99);
        let view = SequenceTensorView::new(17, DIGIT_CLASSES, &data);
        let seq = DigitSequence::from_view(&view);
        assert_eq!(seq.string_result(), "");
        assert_eq!(seq.min_digit_confidence(), None);
    }
}
