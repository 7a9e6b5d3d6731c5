#![cfg_attr(all(test, feature = "unstable"), feature(test))]
#![warn(missing_docs)]

//! A Sobel edge filter in Rust. It turns a color pixel buffer into a grayscale
//! gradient-magnitude image of the same size.
//!
//! # Finding the edges in a buffer
//!
//! ```
//! // A 4x3 RGBA image, dark on the left and bright on the right.
//! let pixels: Vec<u8> = (0..12)
//!     .flat_map(|i| if i % 4 < 2 { [0, 0, 0, 255] } else { [10, 10, 10, 255] })
//!     .collect();
//! let edges = sobel_edge::detect_edges(&pixels, 4, 3).expect("buffer matches 4x3 RGBA");
//!
//! // Interior pixels next to the step respond, the border stays black.
//! assert_eq!(&edges[4 * 5..4 * 6], &[40u8, 40, 40, 255]);
//! assert_eq!(&edges[..4], &[0u8, 0, 0, 255]);
//! ```
//!
//! Decoding and encoding image files is left to the caller. The `sobel` function accepts
//! anything that converts into an `image::RgbaImage`.

mod adapter;
mod edge;
mod error;

pub use adapter::*;
pub use edge::*;
pub use error::*;
