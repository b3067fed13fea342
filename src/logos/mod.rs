//! # Installer Logo Registry
//!
//! The built-in installer logos that can be embedded without supplying an
//! image file. Names match the installer families supported by PrometheOS.
//!
//! Logos are generated programmatically at the slot resolution instead of
//! being bundled as image files. They are placeholder artwork carrying the
//! installer names, not the installers' own logos.
//!
//! ## Usage
//!
//! ```
//! use prometheos_logo::logos;
//!
//! for logo in logos::all() {
//!     println!("{}", logo.name);
//! }
//!
//! // Lookup ignores case
//! let ace = logos::by_name("ace").unwrap();
//! assert_eq!(ace.name, "Ace");
//! assert_eq!(ace.render().dimensions(), (178, 46));
//! ```

pub mod banners;
pub mod star;

use image::{DynamicImage, RgbaImage};

use crate::error::{LogoError, Result};

/// A built-in installer logo.
pub struct Logo {
    /// Installer name as shown to users
    pub name: &'static str,
    /// Function that draws the logo
    render_fn: fn() -> RgbaImage,
}

impl Logo {
    /// Create a new logo definition.
    pub const fn new(name: &'static str, render_fn: fn() -> RgbaImage) -> Self {
        Self { name, render_fn }
    }

    /// Draw the logo at slot resolution.
    pub fn render(&self) -> RgbaImage {
        (self.render_fn)()
    }

    /// Draw the logo as a [`DynamicImage`], ready for the encoder.
    pub fn image(&self) -> DynamicImage {
        DynamicImage::ImageRgba8(self.render())
    }
}

impl std::fmt::Debug for Logo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logo").field("name", &self.name).finish()
    }
}

/// How the built-in logos are described to users.
pub const ARTWORK_NOTE: &str = "generated placeholder artwork";

/// All registered logos.
static LOGOS: &[Logo] = &[
    Logo::new("Ace", banners::ace),
    Logo::new("Andr0", banners::andr0),
    Logo::new("Booter", banners::booter),
    Logo::new("Modzville", banners::modzville),
    Logo::new("Nemesis", star::nemesis),
];

/// Get all registered logos.
pub fn all() -> &'static [Logo] {
    LOGOS
}

/// Look up a logo by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<&'static Logo> {
    LOGOS.iter().find(|logo| logo.name.eq_ignore_ascii_case(name))
}

/// Like [`by_name`], but unknown names are an error.
pub fn require(name: &str) -> Result<&'static Logo> {
    by_name(name).ok_or_else(|| LogoError::UnknownLogo(name.to_string()))
}

/// List all registered logo names.
pub fn list_names() -> Vec<&'static str> {
    LOGOS.iter().map(|logo| logo.name).collect()
}
