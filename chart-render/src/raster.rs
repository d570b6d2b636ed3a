//! Raster tile path: a real rasteriser lives behind the `raster` feature;
//! by default only a tiny placeholder PNG is produced, and GeoTIFF-derived
//! raster tiles report `Unavailable`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("raster rendering is not enabled in this build")]
    Disabled,
    #[error("raster encode failed: {0}")]
    Encode(String),
}

#[cfg(not(feature = "raster"))]
pub fn render_raster_placeholder(_z: u8, _x: u32, _y: u32) -> Result<Vec<u8>, RasterError> {
    Err(RasterError::Disabled)
}

#[cfg(feature = "raster")]
pub fn render_raster_placeholder(_z: u8, _x: u32, _y: u32) -> Result<Vec<u8>, RasterError> {
    use image::{ImageEncoder, Rgba, RgbaImage};

    let img: RgbaImage = RgbaImage::from_pixel(256, 256, Rgba([0, 0, 0, 0]));
    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut bytes)
        .write_image(img.as_raw(), 256, 256, image::ExtendedColorType::Rgba8)
        .map_err(|e| RasterError::Encode(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "raster"))]
    fn placeholder_is_unavailable_without_feature() {
        let err = render_raster_placeholder(5, 1, 1).unwrap_err();
        assert!(matches!(err, RasterError::Disabled));
    }
}
