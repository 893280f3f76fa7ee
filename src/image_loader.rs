use crate::error::Result;
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::path::Path;

/// RGBA8 pixels decoded off the UI thread.
pub struct DecodedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes an image file into RGBA8. Blocking; call from a worker thread.
pub fn load_image_blocking(path: &Path) -> Result<DecodedImage> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        data: rgba.into_raw(),
        width,
        height,
    })
}

/// Converts decoded pixels into a Slint image. Must run on the UI thread.
pub fn create_slint_image(decoded: DecodedImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&decoded.data, decoded.width, decoded.height);
    Image::from_rgba8(buffer)
}
