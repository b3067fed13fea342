//! # Logo Container Format
//!
//! The installer logo is stored in firmware as a small raw raster container.
//! This module owns that format: building containers from images and reading
//! them back.
//!
//! ## Module Structure
//!
//! - [`raster`]: The [`RasterContainer`] byte buffer and its accessors
//! - [`encoder`]: Resizing arbitrary images into a container
//!
//! ## Wire Format
//!
//! | Offset | Length | Content |
//! |--------|--------|---------|
//! | 0 | 2 | Magic `"IM"` (0x49 0x4D) |
//! | 2 | 1 | Width = 178 |
//! | 3 | 1 | Height = 46 |
//! | 4 | 32752 | 178 × 46 pixels, `R G B A` per pixel, row-major |
//! | 32756 | 12 | Zero padding |
//!
//! Pixel `(x, y)` lives at `4 + (y * 178 + x) * 4`.
//!
//! ## Usage Example
//!
//! ```
//! use image::{DynamicImage, Rgba, RgbaImage};
//! use prometheos_logo::container;
//!
//! let red = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255])));
//! let logo = container::encode(&red).unwrap();
//!
//! assert_eq!(logo.as_bytes().len(), 32768);
//! assert_eq!(&logo.as_bytes()[..4], b"IM\xB2\x2E");
//! assert_eq!(logo.pixel(177, 45), Some([255, 0, 0, 255]));
//! ```

pub mod encoder;
pub mod raster;

pub use encoder::{ResizeFilter, encode, encode_with_filter};
pub use raster::RasterContainer;
