//! PNG to ZPL graphic payload converter.
//!
//! Decodes an image into RGBA, runs the monochrome/pack pipeline, and prints
//! the encoded payload (or the whole record as JSON).

mod source;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use zpl_graphics::{ConvertOptions, Rotation, rgba_to_acs, rgba_to_z64};

use crate::source::{PixelSource, PngSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Compressed base64 token with checksum.
    Z64,
    /// Run-length hex text.
    Acs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Rotate {
    /// Keep the original orientation.
    None,
    /// 90 degrees counter-clockwise.
    Left,
    /// 90 degrees clockwise.
    Right,
    /// 180 degrees.
    Invert,
}

impl From<Rotate> for Rotation {
    fn from(value: Rotate) -> Self {
        match value {
            Rotate::None => Rotation::None,
            Rotate::Left => Rotation::CounterClockwise,
            Rotate::Right => Rotation::Clockwise,
            Rotate::Invert => Rotation::Inverted,
        }
    }
}

/// Convert a PNG into a ZPL graphic payload.
#[derive(Debug, Parser)]
#[command(name = "zplconv", version)]
struct Args {
    /// Input PNG file.
    input: PathBuf,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = Format::Z64)]
    format: Format,

    /// Blackness threshold percent.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(1..=99))]
    black: u8,

    /// Rotation applied while packing.
    #[arg(long, value_enum, default_value_t = Rotate::None)]
    rotate: Rotate,

    /// Keep the full canvas instead of cropping to the dark bounding box.
    #[arg(long)]
    no_trim: bool,

    /// Print the full record as JSON instead of just the payload.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let src = PngSource::open(&args.input)?;

    let opts = ConvertOptions::new()
        .with_black(args.black)
        .with_rotate(args.rotate.into())
        .with_no_trim(args.no_trim);

    let record = match args.format {
        Format::Z64 => rgba_to_z64(src.rgba(), src.width(), &opts)?,
        Format::Acs => rgba_to_acs(src.rgba(), src.width(), &opts)?,
    };
    tracing::info!(
        len = record.len,
        width = record.width,
        height = record.height,
        "Converted image"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", record.payload);
    }
    Ok(())
}
