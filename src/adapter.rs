use image::{DynamicImage, RgbaImage};

use crate::edge::detect_edges;
use crate::error::Result;

/// Runs the edge filter on an image from the `image` crate.
///
/// ```
/// let input = image::RgbaImage::from_pixel(4, 4, image::Rgba([90, 30, 200, 255]));
/// let edges = sobel_edge::sobel(input).expect("non-empty image");
/// assert!(edges.pixels().all(|p| p.0 == [0, 0, 0, 255]));
/// ```
pub fn sobel<T: Into<RgbaImage>>(image: T) -> Result<RgbaImage> {
    let image = image.into();
    let (width, height) = image.dimensions();
    let edges = detect_edges(image.as_raw(), width as usize, height as usize)?;
    // Same dimensions and channel count, so the buffer always fits.
    Ok(RgbaImage::from_raw(width, height, edges).expect("edge buffer has the input's shape"))
}

/// Converts any decoded image to 8-bit RGBA and runs the edge filter on it.
pub fn sobel_dynamic(image: &DynamicImage) -> Result<RgbaImage> {
    sobel(image.to_rgba8())
}
