//! Command handlers for both binaries.

use super::args::{Args, Command, ConvertArgs, ViewArgs};
use super::enums::Mode;
use crate::config::{Config, ConfigError};
use crate::convert;
use crate::hexfile::DimensionOverride;
use crate::pixels::ChannelMode;
use crate::terminal::TerminalDisplay;
use crate::viewer::{RefreshMode, ViewerOptions, ViewerSession};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Mode precedence: CLI flag > config file > bgr.
fn pick_mode(
    cli: Option<Mode>,
    config: Result<Option<ChannelMode>, ConfigError>,
) -> Result<ChannelMode, ConfigError> {
    match cli {
        Some(mode) => Ok(mode.into()),
        None => Ok(config?.unwrap_or_default()),
    }
}

/// Run `hexpix to-hex` / `hexpix from-hex`.
pub fn run_convert(args: Args) -> CommandResult {
    let config = Config::load(args.config.as_deref())?;
    match args.command {
        Command::ToHex(c) => to_hex(&c, &config),
        Command::FromHex(c) => from_hex(&c, &config),
    }
}

fn to_hex(args: &ConvertArgs, config: &Config) -> CommandResult {
    let mode = pick_mode(args.mode, config.convert.channel_mode())?;
    let summary = convert::encode_file(&args.input, &args.output, mode)?;

    println!(
        "Converted {} image to hex and saved to {}",
        mode,
        args.output.display()
    );
    println!(
        "Image size: {}x{}, total pixels: {}",
        summary.width,
        summary.height,
        summary.pixel_count()
    );
    Ok(())
}

fn from_hex(args: &ConvertArgs, config: &Config) -> CommandResult {
    let mode = pick_mode(args.mode, config.convert.channel_mode())?;
    let summary = convert::decode_file(&args.input, &args.output, mode)?;

    if summary.guessed {
        println!(
            "Warning: no size information found, assuming {}x{}",
            summary.width, summary.height
        );
    }
    if summary.skipped > 0 {
        println!("Warning: skipped {} invalid hex lines", summary.skipped);
    }
    println!("Converted hex data to image and saved to {}", args.output.display());
    println!("Image size: {}x{}", summary.width, summary.height);
    Ok(())
}

/// Merge viewer flags with the config file.
pub fn viewer_options(args: &ViewArgs, config: &Config) -> Result<ViewerOptions, ConfigError> {
    let mode = pick_mode(args.mode, config.viewer.channel_mode())?;

    let auto = args.auto_refresh || config.viewer.auto_refresh.unwrap_or(false);
    let rate_hz = match (args.refresh_rate, config.viewer.refresh_rate) {
        (Some(rate), _) => rate,
        (None, Some(rate)) if rate.is_finite() && rate > 0.0 => rate,
        (None, Some(rate)) => {
            return Err(ConfigError::InvalidValue {
                key: "refresh_rate",
                value: rate.to_string(),
            })
        }
        (None, None) => 1.0,
    };

    Ok(ViewerOptions {
        mode,
        overrides: DimensionOverride {
            width: args.width,
            height: args.height,
        },
        refresh: if auto {
            RefreshMode::Auto { rate_hz }
        } else {
            RefreshMode::Manual
        },
    })
}

/// Run `hexpix-view`.
pub fn run_view(args: ViewArgs) -> CommandResult {
    let config = Config::load(args.config.as_deref())?;
    let options = viewer_options(&args, &config)?;

    if !args.input.exists() {
        return Err(format!("File {} does not exist", args.input.display()).into());
    }

    let display = TerminalDisplay::new()?;
    let session = ViewerSession::open(&args.input, options, display);
    session.run()?;
    Ok(())
}
