//! # Banner Logo Generators
//!
//! Flat banner-style logos for the Ace, Andr0, Booter and Modzville
//! installers. Each is a pure function of pixel position.

use image::{Rgba, RgbaImage};

use crate::slot::LogoSlot;

const WIDTH: u32 = LogoSlot::PROMETHEOS.width as u32;
const HEIGHT: u32 = LogoSlot::PROMETHEOS.height as u32;

/// Linear blend between two colors, `t` in [0, 1].
fn lerp(a: [u8; 3], b: [u8; 3], t: f32) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgba([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]), 255])
}

/// 1-pixel frame around the logo.
fn on_frame(x: u32, y: u32) -> bool {
    x == 0 || y == 0 || x == WIDTH - 1 || y == HEIGHT - 1
}

/// Ace: red-to-black gradient with a white diamond in the middle.
pub fn ace() -> RgbaImage {
    let cx = WIDTH as f32 / 2.0;
    let cy = HEIGHT as f32 / 2.0;
    RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        let dx = (x as f32 - cx).abs() / (HEIGHT as f32 * 0.3);
        let dy = (y as f32 - cy).abs() / (HEIGHT as f32 * 0.4);
        if dx + dy <= 1.0 {
            Rgba([255, 255, 255, 255])
        } else {
            lerp([200, 16, 32], [16, 0, 0], x as f32 / (WIDTH - 1) as f32)
        }
    })
}

/// Andr0: green vertical rain on black.
pub fn andr0() -> RgbaImage {
    RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        if on_frame(x, y) {
            return Rgba([0, 255, 64, 255]);
        }
        // Each column gets its own streak length and phase
        let seed = x.wrapping_mul(2_654_435_761) >> 24;
        let phase = seed % HEIGHT;
        let length = 6 + seed % 18;
        let distance = (y + HEIGHT - phase) % HEIGHT;
        if x % 3 == 0 && distance < length {
            lerp([0, 255, 64], [0, 40, 8], distance as f32 / length as f32)
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

/// Booter: concentric blue ripples.
pub fn booter() -> RgbaImage {
    let cx = WIDTH as f32 * 0.5;
    let cy = HEIGHT as f32 * 0.5;
    RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        let dx = x as f32 - cx;
        let dy = (y as f32 - cy) * 2.0;
        let r = (dx * dx + dy * dy).sqrt();
        let wave = 0.5 + 0.5 * (r / 5.0).cos();
        lerp([8, 16, 64], [64, 160, 255], wave)
    })
}

/// Modzville: orange and purple checkerboard.
pub fn modzville() -> RgbaImage {
    const CELL: u32 = 8;
    RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        if on_frame(x, y) {
            Rgba([255, 255, 255, 255])
        } else if (x / CELL + y / CELL) % 2 == 0 {
            Rgba([255, 128, 0, 255])
        } else {
            Rgba([96, 0, 160, 255])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ace_center_is_white() {
        let img = ace();
        assert_eq!(img.get_pixel(89, 23), &Rgba([255, 255, 255, 255]));
        // Left edge is the red end of the gradient
        assert_eq!(img.get_pixel(0, 0), &Rgba([200, 16, 32, 255]));
    }

    #[test]
    fn test_andr0_has_frame_and_rain() {
        let img = andr0();
        assert_eq!(img.get_pixel(0, 10), &Rgba([0, 255, 64, 255]));
        let lit = img
            .enumerate_pixels()
            .filter(|(x, y, p)| !on_frame(*x, *y) && p[1] > 0)
            .count();
        assert!(lit > 0, "rain should light some pixels");
    }

    #[test]
    fn test_booter_is_opaque_blue() {
        let img = booter();
        assert!(img.pixels().all(|p| p[3] == 255 && p[2] >= p[0]));
    }

    #[test]
    fn test_modzville_checkerboard() {
        let img = modzville();
        assert_eq!(img.get_pixel(1, 1), &Rgba([255, 128, 0, 255]));
        assert_eq!(img.get_pixel(9, 1), &Rgba([96, 0, 160, 255]));
        assert_eq!(img.get_pixel(9, 9), &Rgba([255, 128, 0, 255]));
    }
}
