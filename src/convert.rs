//! File-level encoder and decoder.
//!
//! Both are one-shot: read the input fully, transform, write the output.
//! Nothing is written when the input can't be read or parsed.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::HexError;
use crate::hexfile::{self, DimensionOverride};
use crate::image_io;
use crate::pixels::ChannelMode;

/// Summary of a finished image -> hex conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    pub width: usize,
    pub height: usize,
}

impl EncodeSummary {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Summary of a finished hex -> image conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeSummary {
    pub width: usize,
    pub height: usize,
    /// Dimensions came from the square fallback.
    pub guessed: bool,
    pub parsed: usize,
    pub skipped: usize,
    /// `// Format:` text from the header, if any.
    pub format: Option<String>,
}

/// Encode an image file into a hex file.
pub fn encode_file(input: &Path, output: &Path, mode: ChannelMode) -> Result<EncodeSummary, HexError> {
    let image = image_io::load_image(input, mode)?;
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    image_io::ensure_parent_dir(output)?;
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    hexfile::write_hex(&mut writer, &image, &name)?;
    writer.flush()?;

    log::info!(
        "Encoded {} ({}x{}, {}) to {}",
        input.display(),
        image.width(),
        image.height(),
        mode,
        output.display()
    );

    Ok(EncodeSummary {
        width: image.width(),
        height: image.height(),
    })
}

/// Decode a hex file into an image file.
pub fn decode_file(input: &Path, output: &Path, mode: ChannelMode) -> Result<DecodeSummary, HexError> {
    let text = fs::read_to_string(input).map_err(|e| HexError::from_io(input, e))?;
    let decoded = hexfile::decode_str(&text, mode, DimensionOverride::default())?;

    image_io::save_image(&decoded.image, output)?;

    log::info!(
        "Decoded {} ({} pixel lines, {} skipped) to {}",
        input.display(),
        decoded.parsed,
        decoded.skipped,
        output.display()
    );

    Ok(DecodeSummary {
        width: decoded.image.width(),
        height: decoded.image.height(),
        guessed: decoded.guessed,
        parsed: decoded.parsed,
        skipped: decoded.skipped,
        format: decoded.header.format,
    })
}
