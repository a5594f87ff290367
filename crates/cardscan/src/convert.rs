use cardscan_core::RgbImageView;

/// Convert an `image::RgbImage` into the lightweight borrowed view the
/// pipeline works on.
pub fn rgb_view(img: &image::RgbImage) -> RgbImageView<'_> {
    RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}
