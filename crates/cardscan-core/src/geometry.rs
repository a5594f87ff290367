use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Integer coordinates of one cell in the localization grid (row-major).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GridCoords {
    pub row: usize,
    pub col: usize,
}

impl GridCoords {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Width/height pair describing a template or image size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box in image pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Corners in TL, TR, BR, BL order.
    pub fn corners(&self) -> [Point2<f32>; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.x + self.width, self.y),
            Point2::new(self.x + self.width, self.y + self.height),
            Point2::new(self.x, self.y + self.height),
        ]
    }
}

/// Map a grid cell into an image-space bounding box.
///
/// The template box is scaled by the image/card size ratio per axis. The
/// top-left corner is then placed by linear interpolation across the grid,
/// so cell (0, 0) touches the image origin and cell (rows-1, cols-1)
/// touches the bottom-right edge.
///
/// A grid with a single row (or column) has no interpolation span along
/// that axis; the box is centered there instead.
pub fn map_box(
    cell: GridCoords,
    grid_rows: usize,
    grid_cols: usize,
    box_template: Extent,
    card_template: Extent,
    image: Extent,
) -> BoundingBox {
    let w = box_template.width * image.width / card_template.width;
    let h = box_template.height * image.height / card_template.height;
    let x = if grid_cols > 1 {
        (image.width - w) / (grid_cols - 1) as f32 * cell.col as f32
    } else {
        (image.width - w) / 2.0
    };
    let y = if grid_rows > 1 {
        (image.height - h) / (grid_rows - 1) as f32 * cell.row as f32
    } else {
        (image.height - h) / 2.0
    };
    BoundingBox {
        x,
        y,
        width: w,
        height: h,
    }
}

/// A grid cell flagged by the localization scan, carrying its class
/// confidence and its mapped image-space box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedBox {
    pub cell: GridCoords,
    pub confidence: f32,
    pub rect: BoundingBox,
}

impl DetectedBox {
    /// Build a detected box from a grid cell, mapping it into image space.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cell: GridCoords,
        confidence: f32,
        grid_rows: usize,
        grid_cols: usize,
        box_template: Extent,
        card_template: Extent,
        image: Extent,
    ) -> Self {
        let rect = map_box(cell, grid_rows, grid_cols, box_template, card_template, image);
        Self {
            cell,
            confidence,
            rect,
        }
    }
}

/// Sort boxes by confidence, highest first. Ties keep their relative order.
pub fn sort_by_confidence_desc(boxes: &mut [DetectedBox]) {
    boxes.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BOX: Extent = Extent::new(80.0, 36.0);
    const CARD: Extent = Extent::new(480.0, 302.0);

    #[test]
    fn map_box_origin_cell_touches_image_origin() {
        let image = Extent::new(960.0, 604.0);
        let rect = map_box(GridCoords::new(0, 0), 34, 51, BOX, CARD, image);
        assert_relative_eq!(rect.x, 0.0);
        assert_relative_eq!(rect.y, 0.0);
        assert_relative_eq!(rect.width, 160.0);
        assert_relative_eq!(rect.height, 72.0);
    }

    #[test]
    fn map_box_last_cell_touches_bottom_right() {
        let image = Extent::new(960.0, 604.0);
        let rect = map_box(GridCoords::new(33, 50), 34, 51, BOX, CARD, image);
        assert_relative_eq!(rect.x, image.width - rect.width);
        assert_relative_eq!(rect.y, image.height - rect.height);
    }

    #[test]
    fn map_box_single_row_and_column_centers() {
        let image = Extent::new(480.0, 302.0);
        let rect = map_box(GridCoords::new(0, 0), 1, 1, BOX, CARD, image);
        assert_relative_eq!(rect.x, (480.0 - 80.0) / 2.0);
        assert_relative_eq!(rect.y, (302.0 - 36.0) / 2.0);
    }

    #[test]
    fn map_box_interpolates_between_cells() {
        let image = Extent::new(480.0, 302.0);
        let mid = map_box(GridCoords::new(0, 25), 34, 51, BOX, CARD, image);
        assert_relative_eq!(mid.x, (480.0 - 80.0) / 50.0 * 25.0);
    }

    #[test]
    fn sort_desc_keeps_tie_order() {
        let image = Extent::new(480.0, 302.0);
        let mk = |row, conf| {
            DetectedBox::new(GridCoords::new(row, 0), conf, 34, 51, BOX, CARD, image)
        };
        let mut boxes = vec![mk(0, 0.5), mk(1, 0.9), mk(2, 0.5)];
        sort_by_confidence_desc(&mut boxes);
        assert_eq!(boxes[0].cell.row, 1);
        assert_eq!(boxes[1].cell.row, 0);
        assert_eq!(boxes[2].cell.row, 2);
    }

    #[test]
    fn detected_box_serde_round_trip() {
        let image = Extent::new(480.0, 302.0);
        let b = DetectedBox::new(GridCoords::new(5, 10), 0.9, 34, 51, BOX, CARD, image);
        let json = serde_json::to_string(&b).unwrap();
        let back: DetectedBox = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    #[test]
    fn corners_are_tl_tr_br_bl() {
        let rect = BoundingBox {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
        };
        let c = rect.corners();
        assert_eq!(c[0], Point2::new(1.0, 2.0));
        assert_eq!(c[1], Point2::new(4.0, 2.0));
        assert_eq!(c[2], Point2::new(4.0, 6.0));
        assert_eq!(c[3], Point2::new(1.0, 6.0));
    }
}
