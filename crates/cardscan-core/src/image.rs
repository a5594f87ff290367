use crate::geometry::{BoundingBox, Extent};

/// Borrowed view of a row-major RGB8 frame, `len = w * h * 3`.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

impl RgbImageView<'_> {
    #[inline]
    pub fn extent(&self) -> Extent {
        Extent::new(self.width as f32, self.height as f32)
    }

    /// The full frame as a bounding box.
    pub fn frame(&self) -> BoundingBox {
        BoundingBox {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

#[inline]
fn get_channel(src: &RgbImageView<'_>, x: i32, y: i32, channel: usize) -> u8 {
    if x < 0 || y < 0 || x >= src.width as i32 || y >= src.height as i32 {
        return 0;
    }
    src.data[(y as usize * src.width + x as usize) * 3 + channel]
}

/// Bilinear sample of one channel, zero-padded outside the frame.
#[inline]
pub fn sample_bilinear(src: &RgbImageView<'_>, x: f32, y: f32, channel: usize) -> f32 {
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = get_channel(src, x0, y0, channel) as f32;
    let p10 = get_channel(src, x0 + 1, y0, channel) as f32;
    let p01 = get_channel(src, x0, y0 + 1, channel) as f32;
    let p11 = get_channel(src, x0 + 1, y0 + 1, channel) as f32;

    let a = p00 + fx * (p10 - p00);
    let b = p01 + fx * (p11 - p01);
    a + fy * (b - a)
}

/// Sample the `rect` sub-region of `src` into an `out_w x out_h` RGB float
/// buffer with channel values scaled to `[0, 1]`.
///
/// The layout is `[1, H, W, 3]` row-major, which is exactly the inference
/// input contract. The rect may extend past the frame; samples outside are
/// zero.
pub fn crop_resize_normalized(
    src: &RgbImageView<'_>,
    rect: &BoundingBox,
    out_w: usize,
    out_h: usize,
) -> Vec<f32> {
    let mut out = Vec::with_capacity(out_w * out_h * 3);
    let sx = rect.width / out_w as f32;
    let sy = rect.height / out_h as f32;
    for oy in 0..out_h {
        // Sample at output pixel centers.
        let y = rect.y + (oy as f32 + 0.5) * sy - 0.5;
        for ox in 0..out_w {
            let x = rect.x + (ox as f32 + 0.5) * sx - 0.5;
            for channel in 0..3 {
                out.push(sample_bilinear(src, x, y, channel) / 255.0);
            }
        }
    }
    out
}

/// Encode the whole frame for inference, resizing to `out_w x out_h`.
pub fn encode_frame(src: &RgbImageView<'_>, out_w: usize, out_h: usize) -> Vec<f32> {
    crop_resize_normalized(src, &src.frame(), out_w, out_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solid(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        data
    }

    #[test]
    fn encode_frame_normalizes_channels() {
        let data = solid(4, 2, [255, 0, 51]);
        let view = RgbImageView {
            width: 4,
            height: 2,
            data: &data,
        };
        let out = encode_frame(&view, 4, 2);
        assert_eq!(out.len(), 4 * 2 * 3);
        assert_relative_eq!(out[0], 1.0);
        assert_relative_eq!(out[1], 0.0);
        assert_relative_eq!(out[2], 0.2, epsilon = 1e-6);
    }

    #[test]
    fn sample_outside_frame_is_zero() {
        let data = solid(2, 2, [200, 200, 200]);
        let view = RgbImageView {
            width: 2,
            height: 2,
            data: &data,
        };
        assert_relative_eq!(sample_bilinear(&view, -5.0, -5.0, 0), 0.0);
        assert_relative_eq!(sample_bilinear(&view, 10.0, 0.0, 1), 0.0);
    }

    #[test]
    fn crop_reads_the_requested_region() {
        // Left half black, right half white.
        let mut data = Vec::new();
        for _y in 0..4 {
            for x in 0..8 {
                let v = if x < 4 { 0u8 } else { 255u8 };
                data.extend_from_slice(&[v, v, v]);
            }
        }
        let view = RgbImageView {
            width: 8,
            height: 4,
            data: &data,
        };
        let right = BoundingBox {
            x: 4.0,
            y: 0.0,
            width: 4.0,
            height: 4.0,
        };
        let out = crop_resize_normalized(&view, &right, 2, 2);
        // Interior of the white half stays white.
        assert_relative_eq!(out[3], 1.0);
    }

    #[test]
    fn output_length_matches_requested_size() {
        let data = solid(10, 10, [1, 2, 3]);
        let view = RgbImageView {
            width: 10,
            height: 10,
            data: &data,
        };
        assert_eq!(encode_frame(&view, 80, 36).len(), 80 * 36 * 3);
    }
}
