//! # Raster Container
//!
//! Owned, fixed-length container buffer. Every constructor allocates a
//! zero-filled buffer of [`LogoSlot::container_len`] bytes, so the padding
//! after the pixel payload is always zero for freshly encoded logos.

use std::fmt;

use image::{Rgba, RgbaImage};

use crate::error::{LogoError, Result};
use crate::slot::LogoSlot;

const SLOT: LogoSlot = LogoSlot::PROMETHEOS;

/// A serialized installer logo, exactly [`LogoSlot::container_len`] bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterContainer {
    bytes: Vec<u8>,
}

impl RasterContainer {
    /// Serialize a raster that is already at the slot resolution.
    ///
    /// Fails with [`LogoError::Dimensions`] for any other size; use
    /// [`encode`](super::encode) to resize arbitrary images first.
    pub fn from_rgba(image: &RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if (width, height) != (SLOT.width as u32, SLOT.height as u32) {
            return Err(LogoError::Dimensions { width, height });
        }
        Ok(Self::serialize(image))
    }

    /// Header + row-major RGBA payload into a zeroed buffer.
    ///
    /// Caller guarantees the image is `SLOT.width` x `SLOT.height`.
    pub(crate) fn serialize(image: &RgbaImage) -> Self {
        debug_assert_eq!(
            image.dimensions(),
            (SLOT.width as u32, SLOT.height as u32),
            "serialize requires a slot-sized raster"
        );

        let mut bytes = vec![0u8; SLOT.container_len];
        bytes[..LogoSlot::HEADER_LEN].copy_from_slice(&SLOT.header());

        // `pixels()` walks rows top to bottom, left to right within a row
        let payload = &mut bytes[LogoSlot::HEADER_LEN..SLOT.data_end()];
        for (dst, pixel) in payload
            .chunks_exact_mut(LogoSlot::BYTES_PER_PIXEL)
            .zip(image.pixels())
        {
            dst.copy_from_slice(&pixel.0);
        }

        Self { bytes }
    }

    /// Parse a container read back from a firmware image.
    ///
    /// Checks length, magic and dimensions. The padding is not checked, so
    /// slots written by other tools still parse.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SLOT.container_len {
            return Err(LogoError::InvalidContainer(format!(
                "expected {} bytes, got {}",
                SLOT.container_len,
                bytes.len()
            )));
        }
        if bytes[..2] != LogoSlot::MAGIC {
            return Err(LogoError::InvalidContainer(format!(
                "bad magic {:02X} {:02X}",
                bytes[0], bytes[1]
            )));
        }
        if bytes[2] != SLOT.width || bytes[3] != SLOT.height {
            return Err(LogoError::InvalidContainer(format!(
                "unsupported dimensions {}x{}",
                bytes[2], bytes[3]
            )));
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// The raw container bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the container, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The four header bytes (`'I' 'M' width height`).
    pub fn header(&self) -> &[u8] {
        &self.bytes[..LogoSlot::HEADER_LEN]
    }

    /// The RGBA pixel payload.
    pub fn pixel_data(&self) -> &[u8] {
        &self.bytes[LogoSlot::HEADER_LEN..SLOT.data_end()]
    }

    /// Trailing bytes after the payload.
    pub fn padding(&self) -> &[u8] {
        &self.bytes[SLOT.data_end()..]
    }

    /// RGBA value of pixel `(x, y)`, or `None` outside the logo.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= SLOT.width as u32 || y >= SLOT.height as u32 {
            return None;
        }
        let index = y as usize * SLOT.width as usize + x as usize;
        let start = LogoSlot::HEADER_LEN + index * LogoSlot::BYTES_PER_PIXEL;
        self.bytes
            .get(start..start + LogoSlot::BYTES_PER_PIXEL)?
            .try_into()
            .ok()
    }

    /// Decode the payload back into an image (for previews).
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(SLOT.width as u32, SLOT.height as u32, |x, y| {
            Rgba(self.pixel(x, y).unwrap_or_default())
        })
    }
}

impl fmt::Debug for RasterContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterContainer")
            .field("header", &self.header())
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Slot-sized raster where every pixel encodes its own coordinates.
    fn coordinate_image() -> RgbaImage {
        RgbaImage::from_fn(178, 46, |x, y| Rgba([x as u8, y as u8, (x ^ y) as u8, 200]))
    }

    fn offset(x: usize, y: usize) -> usize {
        4 + (y * 178 + x) * 4
    }

    #[test]
    fn test_length_and_header() {
        let container = RasterContainer::from_rgba(&coordinate_image()).unwrap();
        assert_eq!(container.as_bytes().len(), 32768);
        assert_eq!(container.header(), &[b'I', b'M', 178, 46]);
    }

    #[test]
    fn test_padding_is_zero() {
        let white = RgbaImage::from_pixel(178, 46, Rgba([255, 255, 255, 255]));
        let container = RasterContainer::from_rgba(&white).unwrap();
        assert_eq!(container.padding(), &[0u8; 12]);
        assert_eq!(&container.as_bytes()[32756..], &[0u8; 12]);
        // Last pixel still written right before the padding
        assert_eq!(&container.as_bytes()[32752..32756], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_corner_and_center_pixels() {
        let image = coordinate_image();
        let container = RasterContainer::from_rgba(&image).unwrap();
        let bytes = container.as_bytes();

        for (x, y) in [(0, 0), (177, 0), (0, 45), (177, 45), (89, 23)] {
            let expected = image.get_pixel(x as u32, y as u32).0;
            let start = offset(x, y);
            assert_eq!(&bytes[start..start + 4], &expected, "pixel ({x}, {y})");
            assert_eq!(container.pixel(x as u32, y as u32), Some(expected));
        }
    }

    #[test]
    fn test_row_major_order() {
        let container = RasterContainer::from_rgba(&coordinate_image()).unwrap();
        let bytes = container.as_bytes();
        // (1, 0) directly follows (0, 0); (0, 1) follows (177, 0)
        assert_eq!(&bytes[8..12], &[1, 0, 1, 200]);
        assert_eq!(&bytes[offset(0, 1)..offset(0, 1) + 4], &[0, 1, 1, 200]);
        assert_eq!(offset(0, 1), offset(177, 0) + 4);
    }

    #[test]
    fn test_from_rgba_rejects_wrong_size() {
        let image = RgbaImage::new(177, 46);
        assert!(matches!(
            RasterContainer::from_rgba(&image),
            Err(LogoError::Dimensions {
                width: 177,
                height: 46
            })
        ));
    }

    #[test]
    fn test_pixel_out_of_range() {
        let container = RasterContainer::from_rgba(&coordinate_image()).unwrap();
        assert_eq!(container.pixel(178, 0), None);
        assert_eq!(container.pixel(0, 46), None);
    }

    #[test]
    fn test_from_bytes_accepts_encoded() {
        let container = RasterContainer::from_rgba(&coordinate_image()).unwrap();
        let parsed = RasterContainer::from_bytes(container.as_bytes()).unwrap();
        assert_eq!(parsed, container);
    }

    #[test]
    fn test_from_bytes_rejects_bad_input() {
        let good = RasterContainer::from_rgba(&coordinate_image())
            .unwrap()
            .into_bytes();

        assert!(RasterContainer::from_bytes(&good[..100]).is_err());

        let mut bad_magic = good.clone();
        bad_magic[0] = b'X';
        assert!(matches!(
            RasterContainer::from_bytes(&bad_magic),
            Err(LogoError::InvalidContainer(_))
        ));

        let mut bad_width = good.clone();
        bad_width[2] = 100;
        assert!(RasterContainer::from_bytes(&bad_width).is_err());

        let mut bad_height = good;
        bad_height[3] = 47;
        assert!(RasterContainer::from_bytes(&bad_height).is_err());
    }

    #[test]
    fn test_to_image_matches_source() {
        let image = coordinate_image();
        let container = RasterContainer::from_rgba(&image).unwrap();
        assert_eq!(container.to_image(), image);
    }
}
