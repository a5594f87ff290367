use cardscan_core::{BoundingBox, RgbImageView};
use cardscan_infer::{Classifier, EngineError, InferenceEngine, SequenceTensorView};

use crate::model::DigitModelSpec;
use crate::sequence::DigitSequence;

/// Reads digit strips from card crops with one recognition model.
pub struct DigitReader<E> {
    spec: DigitModelSpec,
    classifier: Classifier<E>,
}

impl<E: InferenceEngine> DigitReader<E> {
    pub fn new(engine: E, spec: DigitModelSpec) -> Self {
        let classifier = Classifier::new(engine, spec.classifier_spec());
        Self { spec, classifier }
    }

    #[inline]
    pub fn spec(&self) -> &DigitModelSpec {
        &self.spec
    }

    /// Crop `rect` out of the frame and read it as a digit strip.
    pub fn read(
        &self,
        image: &RgbImageView<'_>,
        rect: &BoundingBox,
    ) -> Result<DigitSequence, EngineError> {
        let scores = self.classifier.classify_crop(image, rect)?;
        let view = SequenceTensorView::new(self.spec.positions, self.spec.classes, &scores);
        Ok(DigitSequence::from_view(&view))
    }
}
