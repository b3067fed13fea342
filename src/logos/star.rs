//! # Nemesis Logo Generator
//!
//! A purple five-pointed star on a transparent background, with a row of
//! smaller stars to each side.

use image::{Rgba, RgbaImage};
use std::f32::consts::{PI, TAU};

use crate::slot::LogoSlot;

const WIDTH: u32 = LogoSlot::PROMETHEOS.width as u32;
const HEIGHT: u32 = LogoSlot::PROMETHEOS.height as u32;

const STAR: Rgba<u8> = Rgba([160, 32, 240, 255]);
const SMALL_STAR: Rgba<u8> = Rgba([96, 16, 144, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Draw the Nemesis logo.
pub fn nemesis() -> RgbaImage {
    let cy = HEIGHT as f32 / 2.0;
    let big_outer = cy * 0.95;
    let small_outer = cy * 0.45;
    // Centers of the side stars
    let side: [f32; 4] = [0.12, 0.28, 0.72, 0.88].map(|f| f * WIDTH as f32);
    let cx = WIDTH as f32 / 2.0;

    RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        if is_inside_star(px - cx, py - cy, big_outer, big_outer * 0.382) {
            STAR
        } else if side
            .iter()
            .any(|&sx| is_inside_star(px - sx, py - cy, small_outer, small_outer * 0.382))
        {
            SMALL_STAR
        } else {
            CLEAR
        }
    })
}

/// Check if a point (relative to center) is inside a 5-pointed star with
/// one point facing up.
fn is_inside_star(dx: f32, dy: f32, outer_r: f32, inner_r: f32) -> bool {
    let dist = (dx * dx + dy * dy).sqrt();
    if dist > outer_r {
        return false;
    }

    let sector_angle = TAU / 5.0;
    let half = sector_angle / 2.0;
    // 0 at the top point, increasing clockwise
    let adjusted = (dy.atan2(dx) + PI / 2.0).rem_euclid(TAU);
    let local_angle = adjusted.rem_euclid(sector_angle);

    // Radius falls from the point to the valley, then rises again
    let t = if local_angle < half {
        local_angle / half
    } else {
        (sector_angle - local_angle) / half
    };
    let edge_radius = outer_r * (1.0 - t) + inner_r * t;

    dist <= edge_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_star() {
        let img = nemesis();
        assert_eq!(img.get_pixel(89, 23), &STAR);
    }

    #[test]
    fn test_corners_are_transparent() {
        let img = nemesis();
        for (x, y) in [(0, 0), (177, 0), (0, 45), (177, 45)] {
            assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
    }

    #[test]
    fn test_side_stars_present() {
        let img = nemesis();
        let small = img.pixels().filter(|&&p| p == SMALL_STAR).count();
        assert!(small > 0, "side stars should be drawn");
    }

    #[test]
    fn test_point_outside_radius() {
        assert!(!is_inside_star(10.0, 0.0, 5.0, 2.0));
        assert!(is_inside_star(0.0, 0.0, 5.0, 2.0));
        // Straight up is a star point
        assert!(is_inside_star(0.0, -4.9, 5.0, 2.0));
    }
}
