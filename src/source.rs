//! # Logo Sources
//!
//! Where the image to embed comes from: one of the built-in installer logos
//! or an image file on disk.

use std::fs;
use std::path::PathBuf;

use image::DynamicImage;

use crate::error::Result;
use crate::logos::{self, Logo};

/// The image to embed.
#[derive(Debug, Clone)]
pub enum LogoSource {
    /// A built-in installer logo
    Builtin(&'static Logo),
    /// An image file in any format the `image` crate can decode, detected
    /// from its contents
    File(PathBuf),
}

impl LogoSource {
    /// Resolve a built-in logo by name (case-insensitive).
    pub fn builtin(name: &str) -> Result<Self> {
        logos::require(name).map(LogoSource::Builtin)
    }

    /// Decode the source into an image.
    pub fn load(&self) -> Result<DynamicImage> {
        match self {
            LogoSource::Builtin(logo) => Ok(logo.image()),
            LogoSource::File(path) => {
                let bytes = fs::read(path)?;
                let image = image::load_from_memory(&bytes)?;
                log::debug!(
                    "Decoded {} ({}x{}, {:?})",
                    path.display(),
                    image.width(),
                    image.height(),
                    image.color()
                );
                Ok(image)
            }
        }
    }

    /// Short human-readable description.
    pub fn describe(&self) -> String {
        match self {
            LogoSource::Builtin(logo) => format!("installer logo '{}'", logo.name),
            LogoSource::File(path) => format!("image {}", path.display()),
        }
    }
}
