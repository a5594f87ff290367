//! Inference-engine contract and the parametrized classifier wrapper.
//!
//! The pipeline never talks to a concrete runtime. It hands a normalized
//! `[1, H, W, 3]` float buffer to an [`InferenceEngine`] implementation and
//! reads the resulting flat score tensor back through the typed views in
//! [`tensor`]. Per-model variation (input size, output shape) lives in a
//! [`ClassifierSpec`] value, not in a subclass hierarchy.

mod classifier;
mod engine;
pub mod tensor;

pub use classifier::{Classifier, ClassifierSpec};
pub use engine::{EngineError, InferenceEngine, MockEngine};
pub use tensor::{GridTensorView, SequenceTensorView};
