//! Run the full pipeline over a synthetic frame with scripted engines.
//!
//! Real applications implement `InferenceEngine` over their model runtime;
//! the scripted engines here stand in for the two models so the example
//! runs without model assets.

use std::cell::RefCell;
use std::collections::VecDeque;

use cardscan::infer::MockEngine;
use cardscan::{
    format_number, init_with_level, scan_frame, DigitModelSpec, DigitReader, EngineError,
    InferenceEngine, RegionDetector, RegionModelSpec, RgbImageView,
};
use log::LevelFilter;

/// Plays back one scripted tensor per run.
struct ScriptedEngine {
    outputs: RefCell<VecDeque<Vec<f32>>>,
}

impl InferenceEngine for ScriptedEngine {
    fn run(&self, _input: &[f32]) -> Result<Vec<f32>, EngineError> {
        self.outputs
            .borrow_mut()
            .pop_front()
            .ok_or(EngineError::Unavailable)
    }
}

fn region_tensor(cells: &[(usize, usize, usize)]) -> Vec<f32> {
    let spec = RegionModelSpec::default();
    let mut scores = vec![0.0; spec.rows * spec.cols * spec.classes];
    for &(row, col, class) in cells {
        scores[(row * spec.cols + col) * spec.classes + class] = 0.9;
    }
    scores
}

fn strip_tensor(digits: &str, positions: usize) -> Vec<f32> {
    let mut data = vec![0.0; positions * 11];
    for position in 0..positions {
        let class = digits
            .as_bytes()
            .get(position)
            .map_or(10, |b| usize::from(b - b'0'));
        data[position * 11 + class] = 0.9;
    }
    data
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Debug)?;

    // Four digit groups on one row, one expiry cell below them.
    let region = RegionDetector::new(MockEngine::new(region_tensor(&[
        (5, 10, 1),
        (5, 15, 1),
        (5, 20, 1),
        (5, 25, 1),
        (20, 30, 2),
    ])));
    let number = DigitReader::new(
        ScriptedEngine {
            outputs: RefCell::new(
                ["6104", "3312", "3456", "7890"]
                    .iter()
                    .map(|g| strip_tensor(g, 17))
                    .collect(),
            ),
        },
        DigitModelSpec::number_line(),
    );
    let expiry = DigitReader::new(
        MockEngine::new(strip_tensor("040912", 6)),
        DigitModelSpec::expiry_line(),
    );

    let pixels = vec![128u8; 480 * 302 * 3];
    let frame = RgbImageView {
        width: 480,
        height: 302,
        data: &pixels,
    };

    let outcome = scan_frame(&region, &number, &expiry, &frame)?;
    match outcome.number {
        Some(n) => println!("number: {}", format_number(&n)),
        None => println!("number: not read"),
    }
    match outcome.expiry {
        Some(e) => println!("expiry: {}", e.formatted().unwrap_or_default()),
        None => println!("expiry: not read"),
    }
    Ok(())
}
