//! # Logo Slot Geometry
//!
//! This module defines the fixed layout of the installer logo slot inside a
//! PrometheOS firmware image.
//!
//! ## Layout
//!
//! | Property | Value |
//! |----------|-------|
//! | Logo resolution | 178 × 46 pixels, RGBA |
//! | Container size | 32768 bytes |
//! | Firmware size | 2097152 bytes (2 MiB) |
//! | Slot offset | 0x1F8000 |
//!
//! ```text
//! 0x000000                               0x1F8000          0x200000
//! ├──────────── firmware code/data ──────────┼── container ──┤
//!                                            │   32768 bytes │
//! ```
//!
//! The container fills the firmware up to its very last byte.
//!
//! ## Usage
//!
//! ```
//! use prometheos_logo::slot::LogoSlot;
//!
//! let slot = LogoSlot::PROMETHEOS;
//! assert_eq!(slot.window(), 0x1F8000..0x200000);
//! assert_eq!(slot.data_end(), 32756);
//! ```

use std::ops::Range;

/// # Logo Slot
///
/// Geometry of the logo container and where it lives in the firmware.
///
/// - **width / height**: logo resolution in pixels, also stored in the
///   container header as single bytes
/// - **container_len**: total container size, including zero padding
/// - **offset**: absolute byte offset of the container in the firmware
/// - **firmware_len**: exact required firmware size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoSlot {
    /// Firmware family name
    pub name: &'static str,

    /// Logo width in pixels
    pub width: u8,

    /// Logo height in pixels
    pub height: u8,

    /// Container length in bytes
    pub container_len: usize,

    /// Byte offset of the container inside the firmware
    pub offset: usize,

    /// Required firmware length in bytes
    pub firmware_len: usize,
}

impl LogoSlot {
    /// Magic bytes at the start of every container.
    pub const MAGIC: [u8; 2] = *b"IM";

    /// Container header length: magic + width + height.
    pub const HEADER_LEN: usize = 4;

    /// Bytes per pixel (R, G, B, A).
    pub const BYTES_PER_PIXEL: usize = 4;

    /// # PrometheOS Installer Logo
    ///
    /// The only slot this tool writes to.
    pub const PROMETHEOS: Self = Self {
        name: "PrometheOS",
        width: 178,
        height: 46,
        container_len: 32768,
        offset: 0x1F8000,
        firmware_len: 2048 * 1024,
    };

    /// Number of pixels in the logo.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Length of the RGBA pixel payload.
    #[inline]
    pub const fn pixel_data_len(&self) -> usize {
        self.pixel_count() * Self::BYTES_PER_PIXEL
    }

    /// First byte after the pixel payload; everything from here to
    /// `container_len` is zero padding.
    #[inline]
    pub const fn data_end(&self) -> usize {
        Self::HEADER_LEN + self.pixel_data_len()
    }

    /// The firmware byte range covered by the container.
    #[inline]
    pub const fn window(&self) -> Range<usize> {
        self.offset..self.offset + self.container_len
    }

    /// The four header bytes: magic, width, height.
    #[inline]
    pub const fn header(&self) -> [u8; 4] {
        [Self::MAGIC[0], Self::MAGIC[1], self.width, self.height]
    }
}

// The container must fit the firmware exactly and hold the whole payload.
const _: () = {
    let slot = LogoSlot::PROMETHEOS;
    assert!(slot.offset + slot.container_len == slot.firmware_len);
    assert!(slot.data_end() <= slot.container_len);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prometheos_constants() {
        let slot = LogoSlot::PROMETHEOS;
        assert_eq!(slot.width, 178);
        assert_eq!(slot.height, 46);
        assert_eq!(slot.container_len, 32768);
        assert_eq!(slot.name, "PrometheOS");
        assert_eq!(slot.offset, 2_064_384);
        assert_eq!(slot.firmware_len, 2_097_152);
    }

    #[test]
    fn test_derived_sizes() {
        let slot = LogoSlot::PROMETHEOS;
        assert_eq!(slot.pixel_count(), 8188);
        assert_eq!(slot.pixel_data_len(), 32752);
        assert_eq!(slot.data_end(), 32756);
        assert_eq!(slot.container_len - slot.data_end(), 12);
    }

    #[test]
    fn test_window_ends_at_firmware_end() {
        let slot = LogoSlot::PROMETHEOS;
        let window = slot.window();
        assert_eq!(window.start, 0x1F8000);
        assert_eq!(window.end, slot.firmware_len);
        assert_eq!(window.len(), slot.container_len);
    }

    #[test]
    fn test_header() {
        assert_eq!(LogoSlot::PROMETHEOS.header(), [b'I', b'M', 178, 46]);
    }
}
