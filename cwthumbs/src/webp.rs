//! Redimensionnement et encodage WebP des vignettes.

use anyhow::Result;
use image::{DynamicImage, imageops::FilterType};
use webp::{Encoder, WebPMemory};

/// Encode une image en WebP à la qualité donnée (0–100).
pub fn encode_webp(img: &DynamicImage, quality: f32) -> Result<Vec<u8>> {
    let rgba = img.to_rgba8();
    let encoder = Encoder::from_rgba(&rgba, rgba.width(), rgba.height());
    let data: WebPMemory = encoder.encode(quality);
    Ok(data.to_vec())
}

/// Réduit une image en vignette carrée `size × size`.
///
/// Le redimensionnement couvre toute la vignette (recadrage centré des
/// bords débordants), en Lanczos3.
pub fn make_thumbnail(img: &DynamicImage, size: u32) -> DynamicImage {
    img.resize_to_fill(size, size, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn thumbnail_is_square_at_requested_size() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(600, 400));
        let thumb = make_thumbnail(&img, 140);
        assert_eq!(thumb.width(), 140);
        assert_eq!(thumb.height(), 140);
    }

    #[test]
    fn encoded_thumbnail_is_webp() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(32, 32));
        let bytes = encode_webp(&img, 80.0).unwrap();
        // Conteneur RIFF, type WEBP.
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }
}
