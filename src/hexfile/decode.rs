//! Hex text -> pixel buffer.

use super::header::{is_ignorable, HexHeader};
use super::line::{parse_line, LineParse};
use crate::error::HexError;
use crate::pixels::{ChannelMode, PixelBuffer};

/// Caller-supplied dimensions that take precedence over the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionOverride {
    pub width: Option<usize>,
    pub height: Option<usize>,
}

/// Result of decoding a hex file.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: PixelBuffer,
    pub header: HexHeader,
    /// True when at least one dimension came from the square fallback.
    pub guessed: bool,
    /// Lines that parsed as pixels (including out-of-bounds ones).
    pub parsed: usize,
    /// Non-blank, non-comment body lines that failed to parse.
    pub skipped: usize,
}

/// Side length guessed from the number of data lines in the whole file.
///
/// Assumes a square image: a non-square file without a `Size:` header
/// decodes to the wrong shape and loses its trailing pixels.
pub fn guess_square_side<S: AsRef<str>>(lines: &[S]) -> usize {
    let count = lines.iter().filter(|l| !is_ignorable(l.as_ref())).count();
    isqrt(count)
}

fn isqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// Resolve the output size: override, then header, then the square guess.
///
/// Returns `(width, height, guessed)`.
pub fn resolve_dimensions<S: AsRef<str>>(
    lines: &[S],
    header: &HexHeader,
    overrides: DimensionOverride,
) -> (usize, usize, bool) {
    let width = overrides.width.or(header.width).unwrap_or(0);
    let height = overrides.height.or(header.height).unwrap_or(0);
    if width > 0 && height > 0 {
        return (width, height, false);
    }

    let side = guess_square_side(lines);
    (
        overrides.width.filter(|&w| w > 0).unwrap_or(side),
        overrides.height.filter(|&h| h > 0).unwrap_or(side),
        true,
    )
}

/// Decode the text of a hex file.
pub fn decode_str(
    text: &str,
    mode: ChannelMode,
    overrides: DimensionOverride,
) -> Result<DecodedImage, HexError> {
    let lines: Vec<&str> = text.lines().collect();
    decode_lines(&lines, mode, overrides)
}

/// Decode pre-split lines.
pub fn decode_lines<S: AsRef<str>>(
    lines: &[S],
    mode: ChannelMode,
    overrides: DimensionOverride,
) -> Result<DecodedImage, HexError> {
    let header = HexHeader::parse(lines)?;
    let (width, height, guessed) = resolve_dimensions(lines, &header, overrides);
    if guessed {
        log::warn!("No size information found, assuming {}x{}", width, height);
    }

    let mut image =
        PixelBuffer::try_new(width, height, mode).ok_or_else(|| HexError::HeaderParse {
            line: format!("{}x{}", width, height),
        })?;
    let mut index = 0usize;
    let mut skipped = 0usize;

    for (n, raw) in lines.iter().enumerate().skip(header.data_start) {
        let line = raw.as_ref();
        match parse_line(line, mode) {
            LineParse::Skip => {
                if !is_ignorable(line) {
                    log::debug!("Skipping invalid hex value on line {}: '{}'", n + 1, line.trim());
                    skipped += 1;
                }
            }
            parsed @ LineParse::Pixel { .. } => {
                if width > 0 {
                    let (x, y) = (index % width, index / width);
                    if let Some(samples) = parsed.samples() {
                        image.set_pixel(x, y, samples);
                    }
                }
                index += 1;
            }
        }
    }

    Ok(DecodedImage {
        image,
        header,
        guessed,
        parsed: index,
        skipped,
    })
}
