use std::time::Instant;

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{Error, Result};

const SOBEL_X: [i32; 9] = [-1, 0, 1, -2, 0, 2, -1, 0, 1];
const SOBEL_Y: [i32; 9] = [-1, -2, -1, 0, 0, 0, 1, 2, 1];

/// Channel order of an input pixel buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PixelLayout {
    /// Four bytes per pixel. Alpha is ignored.
    #[default]
    Rgba,
    /// Three bytes per pixel.
    Rgb,
}

impl PixelLayout {
    /// Number of bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Rgba => 4,
            PixelLayout::Rgb => 3,
        }
    }
}

/// Computes the expected buffer length, rejecting empty or overflowing shapes.
fn buffer_len(width: usize, height: usize, channels: usize) -> Result<usize> {
    let invalid = Error::InvalidDimensions { width, height };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(invalid)
}

fn check_buffer(actual: usize, width: usize, height: usize, channels: usize) -> Result<()> {
    let expected = buffer_len(width, height, channels)?;
    if actual != expected {
        return Err(Error::BufferSizeMismatch { expected, actual });
    }
    Ok(())
}

/// Runs the Sobel edge filter over a tightly packed RGBA buffer.
///
/// The result is a new RGBA buffer of the same size in which R, G and B hold the gradient
/// magnitude and alpha is always 255. The outer one pixel border is left black.
pub fn detect_edges(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    detect_edges_with_layout(pixels, width, height, PixelLayout::Rgba)
}

/// Like [`detect_edges`], for either RGBA or RGB input. The output is RGBA in both cases.
pub fn detect_edges_with_layout(
    pixels: &[u8],
    width: usize,
    height: usize,
    layout: PixelLayout,
) -> Result<Vec<u8>> {
    debug!("sobel: {}x{} {:?}, {} bytes", width, height, layout, pixels.len());
    let start = Instant::now();
    let gray = luminance(pixels, width, height, layout)?;
    trace!("sobel: luminance done in {:?}", start.elapsed());
    let magnitude = gradient_magnitude(&gray, width, height)?;
    trace!("sobel: gradients done in {:?}", start.elapsed());
    Ok(grayscale_to_rgba(&magnitude))
}

/// Converts a pixel buffer to one 8-bit luma sample per pixel.
///
/// Uses the BT.601 weights and truncates toward zero, so e.g. a grey of 128 maps to 127.
pub fn luminance(
    pixels: &[u8],
    width: usize,
    height: usize,
    layout: PixelLayout,
) -> Result<Vec<u8>> {
    let channels = layout.channels();
    check_buffer(pixels.len(), width, height, channels)?;
    Ok(pixels
        .par_chunks_exact(channels)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect())
}

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    // Summed left to right in f64 so the truncated result is bit-exact.
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64).floor() as u8
}

/// Computes the Sobel gradient magnitude of a luma buffer.
///
/// Only interior pixels are convolved; border pixels stay 0. Magnitudes are
/// `floor(sqrt(gx² + gy²))` clamped to 255.
pub fn gradient_magnitude(gray: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    check_buffer(gray.len(), width, height, 1)?;
    let mut magnitude = vec![0u8; width * height];
    if width < 3 || height < 3 {
        return Ok(magnitude);
    }
    magnitude[width..width * (height - 1)]
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(row_index, row)| {
            let y = row_index + 1;
            for (x, out) in row.iter_mut().enumerate().take(width - 1).skip(1) {
                *out = sobel_at(gray, width, x, y);
            }
        });
    Ok(magnitude)
}

/// Evaluates both kernels centered at an interior pixel.
fn sobel_at(gray: &[u8], width: usize, x: usize, y: usize) -> u8 {
    let (mut gx, mut gy) = (0i32, 0i32);
    let mut k = 0;
    for ny in y - 1..=y + 1 {
        for nx in x - 1..=x + 1 {
            let value = gray[ny * width + nx] as i32;
            gx += value * SOBEL_X[k];
            gy += value * SOBEL_Y[k];
            k += 1;
        }
    }
    let magnitude = ((gx * gx + gy * gy) as f64).sqrt().floor();
    magnitude.min(255.0) as u8
}

fn grayscale_to_rgba(values: &[u8]) -> Vec<u8> {
    values
        .par_iter()
        .flat_map_iter(|&v| [v, v, v, 255])
        .collect()
}
