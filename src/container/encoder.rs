//! # Logo Encoder
//!
//! Turns any decoded image into a [`RasterContainer`]:
//!
//! 1. Stretch the image to exactly 178 × 46 (aspect ratio is not kept)
//! 2. Convert to 8-bit RGBA (sources without alpha become fully opaque)
//! 3. Serialize into the container
//!
//! All resampling filters are deterministic, so identical input always
//! yields byte-identical containers.

use std::fmt;
use std::str::FromStr;

use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::{DynamicImage, GenericImageView, imageops::FilterType};

use super::RasterContainer;
use crate::error::Result;
use crate::slot::LogoSlot;

/// Resampling filter used when stretching the source image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeFilter {
    /// Nearest neighbour, keeps hard pixel edges
    Nearest,
    /// Linear
    Triangle,
    /// Cubic
    CatmullRom,
    /// Gaussian
    Gaussian,
    /// Lanczos with window 3
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    /// All filters, in the order they are listed in help output.
    pub const ALL: [ResizeFilter; 5] = [
        ResizeFilter::Nearest,
        ResizeFilter::Triangle,
        ResizeFilter::CatmullRom,
        ResizeFilter::Gaussian,
        ResizeFilter::Lanczos3,
    ];

    /// Name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Triangle => "triangle",
            ResizeFilter::CatmullRom => "catmull-rom",
            ResizeFilter::Gaussian => "gaussian",
            ResizeFilter::Lanczos3 => "lanczos3",
        }
    }
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ResizeFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "nearest" => Ok(ResizeFilter::Nearest),
            "triangle" | "linear" => Ok(ResizeFilter::Triangle),
            "catmull-rom" | "catmullrom" | "cubic" => Ok(ResizeFilter::CatmullRom),
            "gaussian" => Ok(ResizeFilter::Gaussian),
            "lanczos3" | "lanczos" => Ok(ResizeFilter::Lanczos3),
            _ => Err(format!(
                "Unknown resize filter '{}'. Available: {}",
                s,
                ResizeFilter::ALL.map(ResizeFilter::name).join(", ")
            )),
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encode an image with the default filter (Lanczos3).
pub fn encode(image: &DynamicImage) -> Result<RasterContainer> {
    encode_with_filter(image, ResizeFilter::default())
}

/// Encode an image with the given resampling filter.
///
/// The source is borrowed; resizing works on a new raster. An image with a
/// zero dimension has no pixels to sample and is reported as a decode error.
pub fn encode_with_filter(image: &DynamicImage, filter: ResizeFilter) -> Result<RasterContainer> {
    let slot = LogoSlot::PROMETHEOS;
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))
        .into());
    }

    let resized = image
        .resize_exact(slot.width as u32, slot.height as u32, filter.into())
        .to_rgba8();

    Ok(RasterContainer::serialize(&resized))
}
