use cardscan_card::{DebitCard, Expiry};
use cardscan_core::RgbImageView;
use cardscan_detect::{PostDetection, RegionDetector};
use cardscan_digits::{assemble_expiry, DigitReader, NumberRecognizer};
use cardscan_infer::{EngineError, InferenceEngine};
use log::debug;
use serde::{Deserialize, Serialize};

/// Errors produced by the end-to-end scan helper.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// What one frame yielded.
///
/// `number`, when present, is always 16 digits, issuer-known and
/// Luhn-valid. Missing fields mean the frame did not read; the application
/// is expected to keep capturing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub number: Option<String>,
    pub expiry: Option<Expiry>,
}

impl ScanOutcome {
    /// The assembled card value, once a number has been read.
    pub fn card(&self) -> Option<DebitCard> {
        let number = self.number.clone()?;
        Some(DebitCard {
            number,
            expiry: self.expiry.clone(),
        })
    }
}

/// Run the full pipeline over one captured frame.
///
/// Localization flags candidate digit and expiry cells; flagged digit boxes
/// are organized into candidate lines (left-to-right first, top-to-bottom
/// for portrait cards as the fallback) and read until one line assembles
/// into a valid card number. The best-scoring expiry cell, when any, is
/// read and decoded independently of the number outcome.
pub fn scan_frame<R, N, X>(
    region: &RegionDetector<R>,
    number_reader: &DigitReader<N>,
    expiry_reader: &DigitReader<X>,
    image: &RgbImageView<'_>,
) -> Result<ScanOutcome, ScanError>
where
    R: InferenceEngine,
    N: InferenceEngine,
    X: InferenceEngine,
{
    let scan = region.scan(image)?;
    let extent = image.extent();

    let post = PostDetection::new(scan.digit_boxes(extent), region.spec());
    let mut recognizer = NumberRecognizer::new(number_reader);
    let mut number = recognizer.number(image, &post.horizontal_numbers())?;
    if number.is_none() {
        number = recognizer.number(image, &post.vertical_numbers())?;
    }

    let expiry = match scan.best_expiry_box(extent) {
        Some(b) => {
            debug!(
                "reading expiry at cell ({}, {})",
                b.cell.row, b.cell.col
            );
            let sequence = expiry_reader.read(image, &b.rect)?;
            assemble_expiry(&sequence)
        }
        None => None,
    };

    Ok(ScanOutcome { number, expiry })
}
