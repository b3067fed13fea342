//! # Firmware Patcher
//!
//! Embeds a [`RasterContainer`] into a PrometheOS firmware image.
//!
//! The firmware is treated as an opaque 2 MiB blob. Exactly one region is
//! ever written: the logo slot window `[0x1F8000, 0x200000)`. Every other
//! byte is left as it was.
//!
//! ## Failure Semantics
//!
//! Patching is all-or-nothing. The length check runs before any write, so a
//! buffer of the wrong size is returned untouched.
//!
//! ## Usage
//!
//! ```
//! use image::{DynamicImage, Rgba, RgbaImage};
//! use prometheos_logo::{container, firmware};
//!
//! let mut bytes = vec![0u8; 2 * 1024 * 1024];
//! let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255])));
//! let container = container::encode(&logo)?;
//!
//! firmware::patch(&mut bytes, &container)?;
//! assert_eq!(&bytes[0x1F8000..0x1F8002], b"IM");
//! # Ok::<(), prometheos_logo::LogoError>(())
//! ```

use std::fs;
use std::ops::Range;
use std::path::Path;

use image::DynamicImage;

use crate::container::{self, RasterContainer, ResizeFilter};
use crate::error::{LogoError, Result};
use crate::slot::LogoSlot;

const SLOT: LogoSlot = LogoSlot::PROMETHEOS;

/// Fail unless `len` is the exact firmware size.
fn check_size(len: usize) -> Result<()> {
    if len != SLOT.firmware_len {
        return Err(LogoError::InvalidFirmwareSize { actual: len });
    }
    Ok(())
}

/// Overwrite the logo slot of a raw firmware buffer.
///
/// Fails with [`LogoError::InvalidFirmwareSize`] before writing anything if
/// the buffer is not exactly 2097152 bytes.
pub fn patch(firmware: &mut [u8], container: &RasterContainer) -> Result<()> {
    check_size(firmware.len())?;
    firmware[SLOT.window()].copy_from_slice(container.as_bytes());
    Ok(())
}

/// A firmware image whose size has been validated.
#[derive(Clone, PartialEq, Eq)]
pub struct FirmwareImage {
    bytes: Vec<u8>,
}

impl FirmwareImage {
    /// Take ownership of a firmware buffer, checking its length.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        check_size(bytes.len())?;
        Ok(Self { bytes })
    }

    /// Read a whole firmware file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Self::from_bytes(bytes)
    }

    /// Write the whole firmware to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, &self.bytes)?;
        log::debug!("Wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(())
    }

    /// Byte range occupied by the logo container.
    pub fn logo_range(&self) -> Range<usize> {
        SLOT.window()
    }

    /// Current contents of the logo slot.
    pub fn logo_window(&self) -> &[u8] {
        &self.bytes[SLOT.window()]
    }

    /// Parse the logo slot as a container.
    pub fn extract_logo(&self) -> Result<RasterContainer> {
        RasterContainer::from_bytes(self.logo_window())
    }

    /// Overwrite the logo slot with `container`.
    pub fn embed(&mut self, container: &RasterContainer) {
        // Length is checked at construction
        self.bytes[SLOT.window()].copy_from_slice(container.as_bytes());
    }

    /// The firmware bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for FirmwareImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirmwareImage")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Resize, encode and embed `image` in one step.
///
/// Returns the container that was written. On error the firmware is
/// unchanged.
pub fn embed_logo(
    firmware: &mut FirmwareImage,
    image: &DynamicImage,
    filter: ResizeFilter,
) -> Result<RasterContainer> {
    let container = container::encode_with_filter(image, filter)?;
    firmware.embed(&container);
    Ok(container)
}
