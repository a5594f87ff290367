use thiserror::Error;

/// Errors surfaced by an inference engine or its wrapper.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine handle was never initialized or has been torn down.
    /// Always surfaced to the caller, never swallowed.
    #[error("inference engine unavailable")]
    Unavailable,
    #[error("inference execution failed: {0}")]
    Execution(String),
    #[error("unexpected input tensor length (expected {expected}, got {got})")]
    InputShape { expected: usize, got: usize },
    #[error("unexpected output tensor length (expected {expected}, got {got})")]
    OutputShape { expected: usize, got: usize },
}

/// Capability interface over an external inference engine.
///
/// Input is a `[1, H, W, 3]` row-major float buffer with channel values in
/// `[0, 1]` (RGB order); output is the engine's flat float score tensor.
/// Implementations run synchronously and perform no lifecycle management
/// beyond a single run request.
pub trait InferenceEngine {
    fn run(&self, input: &[f32]) -> Result<Vec<f32>, EngineError>;
}

/// Returns a pre-set tensor. Useful for testing the detection and assembly
/// pipeline without a real model runtime.
pub struct MockEngine {
    pub output: Vec<f32>,
}

impl MockEngine {
    pub fn new(output: Vec<f32>) -> Self {
        Self { output }
    }
}

impl InferenceEngine for MockEngine {
    fn run(&self, _input: &[f32]) -> Result<Vec<f32>, EngineError> {
        Ok(self.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_preset_tensor() {
        let engine = MockEngine::new(vec![0.1, 0.9]);
        assert_eq!(engine.run(&[0.0; 4]).unwrap(), vec![0.1, 0.9]);
    }

    #[test]
    fn mock_ignores_input_content() {
        let engine = MockEngine::new(vec![1.0]);
        assert_eq!(engine.run(&[]).unwrap(), vec![1.0]);
        assert_eq!(engine.run(&[5.0; 16]).unwrap(), vec![1.0]);
    }
}
