use cardscan_core::{DetectedBox, Extent, GridCoords, RgbImageView};
use cardscan_infer::{Classifier, EngineError, GridTensorView, InferenceEngine};
use log::debug;

use crate::model::{RegionModelSpec, DIGIT_CLASS, EXPIRY_CLASS, REGION_CONFIDENCE_THRESHOLD};

/// Runs the localization model over full frames.
pub struct RegionDetector<E> {
    spec: RegionModelSpec,
    classifier: Classifier<E>,
}

impl<E: InferenceEngine> RegionDetector<E> {
    /// Build a detector with the standard model configuration.
    pub fn new(engine: E) -> Self {
        Self::with_spec(engine, RegionModelSpec::default())
    }

    pub fn with_spec(engine: E, spec: RegionModelSpec) -> Self {
        let classifier = Classifier::new(engine, spec.classifier_spec());
        Self { spec, classifier }
    }

    #[inline]
    pub fn spec(&self) -> &RegionModelSpec {
        &self.spec
    }

    /// Run one frame through the model.
    pub fn scan(&self, image: &RgbImageView<'_>) -> Result<RegionScan, EngineError> {
        let scores = self.classifier.classify_frame(image)?;
        Ok(RegionScan {
            spec: self.spec,
            scores,
        })
    }
}

/// Per-cell class scores from one localization pass.
///
/// This is a pure read of the inference output; selecting and ranking
/// regions among the flagged cells is the assembly side's concern.
pub struct RegionScan {
    spec: RegionModelSpec,
    scores: Vec<f32>,
}

impl RegionScan {
    fn view(&self) -> GridTensorView<'_> {
        GridTensorView::new(self.spec.rows, self.spec.cols, self.spec.classes, &self.scores)
    }

    #[inline]
    pub fn spec(&self) -> &RegionModelSpec {
        &self.spec
    }

    /// Raw digit-region score of one cell.
    pub fn digit_confidence(&self, cell: GridCoords) -> f32 {
        self.view().score(cell.row, cell.col, DIGIT_CLASS)
    }

    /// Raw expiry-region score of one cell.
    pub fn expiry_confidence(&self, cell: GridCoords) -> f32 {
        self.view().score(cell.row, cell.col, EXPIRY_CLASS)
    }

    pub fn has_digits(&self, cell: GridCoords) -> bool {
        self.digit_confidence(cell) >= REGION_CONFIDENCE_THRESHOLD
    }

    pub fn has_expiry(&self, cell: GridCoords) -> bool {
        self.expiry_confidence(cell) >= REGION_CONFIDENCE_THRESHOLD
    }

    /// Every flagged digit cell mapped into `image`-space boxes, in
    /// row-major cell order.
    pub fn digit_boxes(&self, image: Extent) -> Vec<DetectedBox> {
        let mut boxes = Vec::new();
        for row in 0..self.spec.rows {
            for col in 0..self.spec.cols {
                let cell = GridCoords::new(row, col);
                if self.has_digits(cell) {
                    boxes.push(self.detected_box(cell, self.digit_confidence(cell), image));
                }
            }
        }
        debug!("localization flagged {} digit cells", boxes.len());
        boxes
    }

    /// The flagged expiry cell with the highest score, if any.
    pub fn best_expiry_box(&self, image: Extent) -> Option<DetectedBox> {
        let mut best: Option<(GridCoords, f32)> = None;
        for row in 0..self.spec.rows {
            for col in 0..self.spec.cols {
                let cell = GridCoords::new(row, col);
                if !self.has_expiry(cell) {
                    continue;
                }
                let confidence = self.expiry_confidence(cell);
                if best.map_or(true, |(_, c)| confidence > c) {
                    best = Some((cell, confidence));
                }
            }
        }
        best.map(|(cell, confidence)| self.detected_box(cell, confidence, image))
    }

    fn detected_box(&self, cell: GridCoords, confidence: f32, image: Extent) -> DetectedBox {
        DetectedBox::new(
            cell,
            confidence,
            self.spec.rows,
            self.spec.cols,
            self.spec.box_template,
            self.spec.card_template,
            image,
        )
    }
}
