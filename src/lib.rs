//! # PrometheOS Logo - Installer Logo Embedding
//!
//! Replaces the installer logo stored inside a PrometheOS firmware image.
//! It provides:
//!
//! - **Container encoding**: Resize any image to 178×46 and serialize it
//!   into the 32768-byte `"IM"` raster container
//! - **Firmware patching**: Overwrite the logo slot at `0x1F8000` of a 2 MiB
//!   firmware image, touching nothing else
//! - **Built-in logos**: The Ace, Andr0, Booter, Modzville and Nemesis
//!   installer logos
//!
//! ## Quick Start
//!
//! ```no_run
//! use prometheos_logo::{
//!     container::ResizeFilter,
//!     firmware::{self, FirmwareImage},
//!     source::LogoSource,
//! };
//!
//! let mut firmware = FirmwareImage::load("prometheos.bin")?;
//! let image = LogoSource::builtin("nemesis")?.load()?;
//!
//! firmware::embed_logo(&mut firmware, &image, ResizeFilter::default())?;
//! firmware.save("prometheos.bin")?;
//!
//! # Ok::<(), prometheos_logo::LogoError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | Logo container format and encoder |
//! | [`firmware`] | Firmware image validation and patching |
//! | [`slot`] | Fixed logo slot geometry |
//! | [`logos`] | Built-in installer logos |
//! | [`source`] | Image sources (built-in or file) |
//! | [`error`] | Error types |

pub mod container;
pub mod error;
pub mod firmware;
pub mod logos;
pub mod slot;
pub mod source;

// Re-exports for convenience
pub use container::RasterContainer;
pub use error::LogoError;
pub use firmware::FirmwareImage;
pub use slot::LogoSlot;
