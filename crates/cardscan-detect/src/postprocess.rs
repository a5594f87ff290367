//! Organize flagged boxes into plausible number lines.
//!
//! The localization grid flags many overlapping cells around each printed
//! digit group. This stage suppresses near-duplicates (highest confidence
//! wins), then searches the survivors for 4-box sequences laid out left to
//! right (or top to bottom for portrait cards) with roughly even spacing.
//! The digit reader downstream decides which line actually reads as a card
//! number.

use cardscan_core::{sort_by_confidence_desc, DetectedBox};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::RegionModelSpec;

/// Tuning knobs for the line search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostDetectionParams {
    /// Keep only this many highest-confidence boxes.
    pub max_boxes: usize,
    /// Suppression radius in grid rows around a kept box.
    pub combine_delta_row: usize,
    /// Suppression radius in grid cols around a kept box.
    pub combine_delta_col: usize,
    /// Boxes per candidate line (one per printed digit group).
    pub line_len: usize,
    /// Cross-axis wobble allowed between consecutive boxes in a line.
    pub follow_delta: i32,
    /// Maximum spread between the largest and smallest gap in a line.
    pub max_gap_spread: i32,
}

impl Default for PostDetectionParams {
    fn default() -> Self {
        Self {
            max_boxes: 20,
            combine_delta_row: 2,
            combine_delta_col: 2,
            line_len: 4,
            follow_delta: 1,
            max_gap_spread: 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Whether `next` can follow `last` in a line along this axis: strictly
    /// advancing on the main axis, within `delta` on the cross axis.
    fn follows(self, last: &DetectedBox, next: &DetectedBox, delta: i32) -> bool {
        let (last_main, last_cross, next_main, next_cross) = match self {
            Axis::Horizontal => (
                last.cell.col as i32,
                last.cell.row as i32,
                next.cell.col as i32,
                next.cell.row as i32,
            ),
            Axis::Vertical => (
                last.cell.row as i32,
                last.cell.col as i32,
                next.cell.row as i32,
                next.cell.col as i32,
            ),
        };
        next_main > last_main && (next_cross - last_cross).abs() <= delta
    }

    fn main(self, b: &DetectedBox) -> i32 {
        match self {
            Axis::Horizontal => b.cell.col as i32,
            Axis::Vertical => b.cell.row as i32,
        }
    }
}

/// Line search over one frame's flagged digit boxes.
pub struct PostDetection {
    rows: usize,
    cols: usize,
    params: PostDetectionParams,
    /// Highest confidence first, capped at `max_boxes`.
    sorted: Vec<DetectedBox>,
}

impl PostDetection {
    pub fn new(boxes: Vec<DetectedBox>, spec: &RegionModelSpec) -> Self {
        Self::with_params(boxes, spec, PostDetectionParams::default())
    }

    pub fn with_params(
        mut boxes: Vec<DetectedBox>,
        spec: &RegionModelSpec,
        params: PostDetectionParams,
    ) -> Self {
        sort_by_confidence_desc(&mut boxes);
        boxes.truncate(params.max_boxes);
        Self {
            rows: spec.rows,
            cols: spec.cols,
            params,
            sorted: boxes,
        }
    }

    /// Candidate left-to-right number lines, evenly spaced.
    pub fn horizontal_numbers(&self) -> Vec<Vec<DetectedBox>> {
        self.numbers(Axis::Horizontal)
    }

    /// Candidate top-to-bottom number lines, evenly spaced.
    pub fn vertical_numbers(&self) -> Vec<Vec<DetectedBox>> {
        self.numbers(Axis::Vertical)
    }

    fn numbers(&self, axis: Axis) -> Vec<Vec<DetectedBox>> {
        let boxes = self.combine_close_boxes();
        let lines = self.find_lines(boxes, axis);
        let kept: Vec<Vec<DetectedBox>> = lines
            .into_iter()
            .filter(|line| self.evenly_spaced(line, axis))
            .collect();
        debug!("{axis:?} line search kept {} candidate lines", kept.len());
        kept
    }

    /// Greedy non-maximum suppression on the grid, highest confidence first.
    ///
    /// This can leave the odd extra box behind in corner cases; that is fine
    /// because the line search downstream tolerates spares.
    fn combine_close_boxes(&self) -> Vec<DetectedBox> {
        let mut grid = vec![false; self.rows * self.cols];
        let at = |row: usize, col: usize| row * self.cols + col;
        for b in &self.sorted {
            grid[at(b.cell.row, b.cell.col)] = true;
        }

        for b in &self.sorted {
            if !grid[at(b.cell.row, b.cell.col)] {
                continue;
            }
            let row0 = b.cell.row.saturating_sub(self.params.combine_delta_row);
            let row1 = (b.cell.row + self.params.combine_delta_row).min(self.rows - 1);
            let col0 = b.cell.col.saturating_sub(self.params.combine_delta_col);
            let col1 = (b.cell.col + self.params.combine_delta_col).min(self.cols - 1);
            for row in row0..=row1 {
                for col in col0..=col1 {
                    grid[at(row, col)] = false;
                }
            }
            // The suppressing box survives its own neighborhood.
            grid[at(b.cell.row, b.cell.col)] = true;
        }

        self.sorted
            .iter()
            .filter(|b| grid[at(b.cell.row, b.cell.col)])
            .cloned()
            .collect()
    }

    // Exhaustive depth-first search over box sequences. Quadratic-ish, but
    // the input is capped at max_boxes (20), so it stays cheap.
    fn find_lines(&self, mut boxes: Vec<DetectedBox>, axis: Axis) -> Vec<Vec<DetectedBox>> {
        boxes.sort_by_key(|b| axis.main(b));
        let mut lines = Vec::new();
        for idx in 0..boxes.len() {
            let seed = vec![boxes[idx].clone()];
            self.extend_line(seed, &boxes[idx + 1..], axis, &mut lines);
        }
        lines
    }

    fn extend_line(
        &self,
        current: Vec<DetectedBox>,
        rest: &[DetectedBox],
        axis: Axis,
        lines: &mut Vec<Vec<DetectedBox>>,
    ) {
        if current.len() == self.params.line_len {
            lines.push(current);
            return;
        }
        let Some(last) = current.last() else {
            return;
        };
        for (idx, candidate) in rest.iter().enumerate() {
            if axis.follows(last, candidate, self.params.follow_delta) {
                let mut next = current.clone();
                next.push(candidate.clone());
                self.extend_line(next, &rest[idx + 1..], axis, lines);
            }
        }
    }

    /// Boxes in a line should be roughly evenly spaced; reject any that
    /// are not.
    fn evenly_spaced(&self, line: &[DetectedBox], axis: Axis) -> bool {
        let mut min_gap = i32::MAX;
        let mut max_gap = i32::MIN;
        for pair in line.windows(2) {
            let gap = axis.main(&pair[1]) - axis.main(&pair[0]);
            min_gap = min_gap.min(gap);
            max_gap = max_gap.max(gap);
        }
        if line.len() < 2 {
            return true;
        }
        max_gap - min_gap <= self.params.max_gap_spread
    }
}
