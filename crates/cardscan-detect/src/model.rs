use cardscan_core::Extent;
use cardscan_infer::ClassifierSpec;
use serde::{Deserialize, Serialize};

/// Output class index for digit regions.
pub const DIGIT_CLASS: usize = 1;
/// Output class index for expiry regions.
pub const EXPIRY_CLASS: usize = 2;
/// A cell is flagged when its class score reaches this.
pub const REGION_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Fixed configuration of the localization model.
///
/// The model was trained on 480x302 card crops and emits one score triple
/// (background / digit / expiry) per cell of a 34x51 grid. The box template
/// describes the receptive window of one cell in card-template pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionModelSpec {
    pub rows: usize,
    pub cols: usize,
    pub classes: usize,
    /// Size of one detection box, in card-template pixels.
    pub box_template: Extent,
    /// Card template size the box template is expressed in.
    pub card_template: Extent,
    /// Model input width in pixels.
    pub input_width: usize,
    /// Model input height in pixels.
    pub input_height: usize,
}

impl Default for RegionModelSpec {
    fn default() -> Self {
        Self {
            rows: 34,
            cols: 51,
            classes: 3,
            box_template: Extent::new(80.0, 36.0),
            card_template: Extent::new(480.0, 302.0),
            input_width: 480,
            input_height: 302,
        }
    }
}

impl RegionModelSpec {
    /// The classifier configuration implied by this model.
    pub fn classifier_spec(&self) -> ClassifierSpec {
        ClassifierSpec {
            input_width: self.input_width,
            input_height: self.input_height,
            output_len: self.rows * self.cols * self.classes,
        }
    }
}
