use cardscan_core::{crop_resize_normalized, encode_frame, BoundingBox, RgbImageView};
use serde::{Deserialize, Serialize};

use crate::engine::{EngineError, InferenceEngine};

/// Fixed input/output configuration for one model.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClassifierSpec {
    /// Model input width in pixels.
    pub input_width: usize,
    /// Model input height in pixels.
    pub input_height: usize,
    /// Expected flat output tensor length.
    pub output_len: usize,
}

impl ClassifierSpec {
    /// Length of the encoded `[1, H, W, 3]` input buffer.
    #[inline]
    pub const fn input_len(&self) -> usize {
        self.input_width * self.input_height * 3
    }
}

/// Parametrized wrapper around one inference engine.
///
/// A classifier is immutable once constructed: changing the engine
/// configuration (thread count, delegate, ...) means building a new engine
/// and a new classifier around it, so an in-flight classification can never
/// observe a reconfiguration.
pub struct Classifier<E> {
    engine: E,
    spec: ClassifierSpec,
}

impl<E: InferenceEngine> Classifier<E> {
    pub fn new(engine: E, spec: ClassifierSpec) -> Self {
        Self { engine, spec }
    }

    #[inline]
    pub fn spec(&self) -> &ClassifierSpec {
        &self.spec
    }

    /// Encode the full frame, run inference and validate the output length.
    pub fn classify_frame(&self, image: &RgbImageView<'_>) -> Result<Vec<f32>, EngineError> {
        let input = encode_frame(image, self.spec.input_width, self.spec.input_height);
        self.run_checked(&input)
    }

    /// Encode the `rect` sub-region of the frame, run inference and validate
    /// the output length.
    pub fn classify_crop(
        &self,
        image: &RgbImageView<'_>,
        rect: &BoundingBox,
    ) -> Result<Vec<f32>, EngineError> {
        let input =
            crop_resize_normalized(image, rect, self.spec.input_width, self.spec.input_height);
        self.run_checked(&input)
    }

    fn run_checked(&self, input: &[f32]) -> Result<Vec<f32>, EngineError> {
        if input.len() != self.spec.input_len() {
            return Err(EngineError::InputShape {
                expected: self.spec.input_len(),
                got: input.len(),
            });
        }
        let output = self.engine.run(input)?;
        if output.len() != self.spec.output_len {
            return Err(EngineError::OutputShape {
                expected: self.spec.output_len,
                got: output.len(),
            });
        }
        Ok(output)
    }
}
