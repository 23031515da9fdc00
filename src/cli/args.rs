//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Mode;

/// Parse and validate a refresh rate in Hz (positive, finite)
pub fn parse_refresh_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(format!("Refresh rate must be greater than 0, got {}", s));
    }
    Ok(rate)
}

/// Parse and validate an image dimension (at least 1 pixel)
pub fn parse_dimension(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid size", s))?;
    if value == 0 {
        return Err("Width and height must be greater than 0".to_string());
    }
    Ok(value)
}

/// Convert images to hex pixel dumps and back
#[derive(Parser, Debug)]
#[command(name = "hexpix")]
#[command(version, about = "Image <-> hex pixel-dump converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    hexpix to-hex photo.png photo.hex
    hexpix to-hex photo.png photo.hex --mode gray
    hexpix from-hex photo.hex restored.png")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an image into a hex text file
    ToHex(ConvertArgs),
    /// Convert a hex text file back into an image
    FromHex(ConvertArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Input file path
    pub input: PathBuf,

    /// Output file path
    pub output: PathBuf,

    /// Pixel format [default: bgr]
    #[arg(long, short)]
    pub mode: Option<Mode>,
}

/// Watch a hex pixel-dump file and show it in the terminal
#[derive(Parser, Debug)]
#[command(name = "hexpix-view")]
#[command(version, about = "Live terminal viewer for hex pixel dumps", long_about = None)]
#[command(after_help = "KEYS:
    space     re-check the file (manual mode)
    ESC, q    quit")]
pub struct ViewArgs {
    /// Hex file to watch
    pub input: PathBuf,

    /// Image width (default: from the file header)
    #[arg(long, value_parser = parse_dimension)]
    pub width: Option<usize>,

    /// Image height (default: from the file header)
    #[arg(long, value_parser = parse_dimension)]
    pub height: Option<usize>,

    /// Pixel format [default: bgr]
    #[arg(long, short)]
    pub mode: Option<Mode>,

    /// Re-check the file on a timer instead of waiting for space
    #[arg(long)]
    pub auto_refresh: bool,

    /// Auto-refresh rate in Hz [default: 1.0]
    #[arg(long, value_parser = parse_refresh_rate)]
    pub refresh_rate: Option<f64>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}
