//! Typed read-only views over flat score tensors.
//!
//! Engines hand back flat float arrays; these views pin the addressing down
//! to `[row][col][class]` or `[position][class]` so nothing else in the
//! pipeline does index arithmetic by hand.

/// View of a `[1, rows, cols, classes]` score tensor.
#[derive(Clone, Copy, Debug)]
pub struct GridTensorView<'a> {
    rows: usize,
    cols: usize,
    classes: usize,
    data: &'a [f32],
}

impl<'a> GridTensorView<'a> {
    pub fn new(rows: usize, cols: usize, classes: usize, data: &'a [f32]) -> Self {
        assert_eq!(
            data.len(),
            rows * cols * classes,
            "grid tensor length mismatch"
        );
        Self {
            rows,
            cols,
            classes,
            data,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn score(&self, row: usize, col: usize, class: usize) -> f32 {
        self.data[(row * self.cols + col) * self.classes + class]
    }
}

/// View of a `[1, 1, positions, classes]` score tensor.
#[derive(Clone, Copy, Debug)]
pub struct SequenceTensorView<'a> {
    positions: usize,
    classes: usize,
    data: &'a [f32],
}

impl<'a> SequenceTensorView<'a> {
    pub fn new(positions: usize, classes: usize, data: &'a [f32]) -> Self {
        assert_eq!(
            data.len(),
            positions * classes,
            "sequence tensor length mismatch"
        );
        Self {
            positions,
            classes,
            data,
        }
    }

    #[inline]
    pub fn positions(&self) -> usize {
        self.positions
    }

    #[inline]
    pub fn score(&self, position: usize, class: usize) -> f32 {
        self.data[position * self.classes + class]
    }

    /// Arg-max label and its score for one position.
    ///
    /// Ties resolve to the lowest class index (first maximal element while
    /// scanning class indices in increasing order).
    pub fn arg_and_value_max(&self, position: usize) -> (usize, f32) {
        let mut best_class = 0;
        let mut best_value = self.score(position, 0);
        for class in 1..self.classes {
            let value = self.score(position, class);
            if value > best_value {
                best_class = class;
                best_value = value;
            }
        }
        (best_class, best_value)
    }
}
