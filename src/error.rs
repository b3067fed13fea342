//! # Error Types
//!
//! This module defines the error type used throughout the crate.

use thiserror::Error;

use crate::slot::LogoSlot;

/// Main error type for logo embedding operations
#[derive(Debug, Error)]
pub enum LogoError {
    /// Source image could not be decoded (or a preview could not be encoded)
    #[error("Image error: {0}")]
    Decode(#[from] image::ImageError),

    /// Firmware buffer is not exactly the size of a PrometheOS image
    #[error(
        "Invalid firmware size: expected {} bytes, got {actual}",
        LogoSlot::PROMETHEOS.firmware_len
    )]
    InvalidFirmwareSize { actual: usize },

    /// Bytes read back from a firmware are not a logo container
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Raster handed to the serializer does not match the slot resolution
    #[error(
        "Invalid logo dimensions: expected {}x{}, got {width}x{height}",
        LogoSlot::PROMETHEOS.width,
        LogoSlot::PROMETHEOS.height
    )]
    Dimensions { width: u32, height: u32 },

    /// No built-in logo with this name
    #[error("Unknown installer logo '{0}'")]
    UnknownLogo(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, LogoError>;
