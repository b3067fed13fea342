//! # PrometheOS Logo CLI
//!
//! Command-line interface for embedding installer logos into firmware.
//!
//! ## Usage
//!
//! ```bash
//! # List built-in installer logos
//! prometheos-logo list
//!
//! # Embed a built-in logo (in place)
//! prometheos-logo embed -f prometheos.bin -i nemesis
//!
//! # Embed a custom image, writing to a new file and saving a preview
//! prometheos-logo embed -f prometheos.bin -c logo.png --output patched.bin --preview logo-preview.png
//!
//! # Save the logo currently embedded in a firmware
//! prometheos-logo extract -f prometheos.bin --png current.png
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use prometheos_logo::{
    LogoError, LogoSlot, RasterContainer,
    container::ResizeFilter,
    firmware::{self, FirmwareImage},
    logos,
    source::LogoSource,
};

/// PrometheOS installer logo tool
#[derive(Parser, Debug)]
#[command(name = "prometheos-logo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Embed a logo into a firmware image
    Embed {
        /// prometheos.bin path to modify
        #[arg(short, long, value_name = "FILE")]
        firmware: PathBuf,

        #[command(flatten)]
        logo: LogoArgs,

        /// Resampling filter (nearest, triangle, catmull-rom, gaussian, lanczos3)
        #[arg(long, default_value_t = ResizeFilter::default())]
        filter: ResizeFilter,

        /// Write the patched firmware here instead of modifying it in place
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Also save the encoded logo as PNG
        #[arg(long, value_name = "FILE")]
        preview: Option<PathBuf>,
    },

    /// Save the logo embedded in a firmware image as PNG
    Extract {
        /// Firmware image to read
        #[arg(short, long, value_name = "FILE")]
        firmware: PathBuf,

        /// Output PNG path
        #[arg(long, value_name = "FILE")]
        png: PathBuf,
    },

    /// List built-in installer logos
    List,
}

/// Exactly one logo source.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct LogoArgs {
    /// Built-in installer logo to embed; drawn as placeholder artwork (see `list`)
    #[arg(short, long, value_name = "NAME")]
    installer: Option<String>,

    /// Custom logo image path to embed (scaled to 178x46)
    #[arg(short, long, value_name = "IMAGE")]
    custom: Option<PathBuf>,
}

impl LogoArgs {
    fn source(self) -> Result<LogoSource, LogoError> {
        match (self.installer, self.custom) {
            (Some(name), None) => LogoSource::builtin(&name),
            (None, Some(path)) => Ok(LogoSource::File(path)),
            _ => unreachable!("clap enforces exactly one logo source"),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LogoError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Embed {
            firmware: firmware_path,
            logo,
            filter,
            output,
            preview,
        } => {
            let source = logo.source()?;
            let mut firmware = FirmwareImage::load(&firmware_path)?;
            let image = source.load()?;

            log::info!(
                "Embedding {} ({}x{}) into {} firmware with {} filter",
                source.describe(),
                image.width(),
                image.height(),
                LogoSlot::PROMETHEOS.name,
                filter
            );
            let container = firmware::embed_logo(&mut firmware, &image, filter)?;

            if let Some(preview_path) = preview {
                save_png(&preview_path, &container)?;
                log::info!("Saved preview to {}", preview_path.display());
            }

            let target = output.unwrap_or(firmware_path);
            firmware.save(&target)?;
            log::info!("Wrote {}", target.display());
            println!("Done.");
        }

        Commands::Extract { firmware, png } => {
            let container = FirmwareImage::load(&firmware)?.extract_logo()?;
            save_png(&png, &container)?;
            println!("Saved to {}", png.display());
        }

        Commands::List => {
            println!("Available installer logos ({}):", logos::ARTWORK_NOTE);
            for name in logos::list_names() {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}

/// Save the container's pixels as a PNG image
fn save_png(path: &Path, container: &RasterContainer) -> Result<(), LogoError> {
    container.to_image().save(path)?;
    Ok(())
}
